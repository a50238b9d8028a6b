use crate::types::Scheme;

/// Get the scheme from a protocol token.
/// Tokens are matched exactly; `Site` stores whatever it was given, so
/// "HTTP" or "ftp" simply have no `Scheme`.
pub fn get_scheme(protocol: &str) -> Option<Scheme> {
    let bytes = protocol.as_bytes();

    match (bytes.len(), bytes.first()) {
        (4, Some(b'h')) if bytes == b"http" => Some(Scheme::Http),
        (5, Some(b'h')) if bytes == b"https" => Some(Scheme::Https),
        _ => None,
    }
}
