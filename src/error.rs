/// Errors that can occur while building a `Site` from a URL or rendering one back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Empty host
    InvalidHost,
    /// Invalid port number
    InvalidPort,
    /// Invalid IPv4 address
    InvalidIpv4,
    /// Invalid IPv6 address
    InvalidIpv6,
    /// Invalid character in domain
    InvalidDomainCharacter,
    /// IDNA processing error
    IdnaError,
    /// Relative URL without base
    RelativeUrlWithoutBase,
    /// Invalid URL structure
    InvalidUrl,
    /// Valid URL that carries no host (e.g. `mailto:` or `data:`)
    MissingHost,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidHost => "Invalid host",
            Self::InvalidPort => "Invalid port",
            Self::InvalidIpv4 => "Invalid IPv4 address",
            Self::InvalidIpv6 => "Invalid IPv6 address",
            Self::InvalidDomainCharacter => "Invalid domain character",
            Self::IdnaError => "IDNA processing error",
            Self::RelativeUrlWithoutBase => "Relative URL without base",
            Self::InvalidUrl => "Invalid URL",
            Self::MissingHost => "URL has no host",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

impl From<url::ParseError> for ParseError {
    fn from(err: url::ParseError) -> Self {
        match err {
            url::ParseError::EmptyHost => Self::InvalidHost,
            url::ParseError::InvalidPort => Self::InvalidPort,
            url::ParseError::InvalidIpv4Address => Self::InvalidIpv4,
            url::ParseError::InvalidIpv6Address => Self::InvalidIpv6,
            url::ParseError::InvalidDomainCharacter => Self::InvalidDomainCharacter,
            url::ParseError::IdnaError => Self::IdnaError,
            url::ParseError::RelativeUrlWithoutBase => Self::RelativeUrlWithoutBase,
            _ => Self::InvalidUrl,
        }
    }
}

/// Result type for `Site` operations
pub type Result<T> = core::result::Result<T, ParseError>;
