use crate::compat::{String, ToString, Vec};
use crate::error::{ParseError, Result};
use crate::helpers::{raw_userinfo, split_domain, split_path};
use crate::parameters::Parameters;
use crate::scheme::get_scheme;
use crate::types::Scheme;
use crate::unicode::charset::Charset;
use crate::unicode::percent_encode::form_encode_into;
use url::{Host, Url};

/// Charset used for encoding when none is configured
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// Port that is left out of the rendered URL
pub const DEFAULT_PORT: u16 = 80;

/// A website address kept as separate, mutable parts.
///
/// Renders as
/// `scheme://[user[:pass]@][sub.]*host[:port][/path]*[/file][?k=v[&k=v]*][#fragment]`.
/// No part is validated; whatever is stored is rendered as-is.
///
/// # Examples
///
/// ```
/// use site::{Scheme, Site};
///
/// let mut site = Site::new(Scheme::Http, "example.org");
/// site.add_subdomain("www");
/// site.add_path("user");
/// site.set_file("home.html");
/// site.put_parameter("id", "3");
/// site.set_fragment("top");
///
/// assert_eq!(site.href(), "http://www.example.org/user/home.html?id=3#top");
/// ```
#[derive(Debug, Clone)]
pub struct Site {
    charset: String,
    scheme: String,
    username: Option<String>,
    password: Option<String>,
    subdomains: Vec<String>,
    host: String,
    port: u16,
    paths: Vec<String>,
    file: Option<String>,
    parameters: Parameters,
    fragment: Option<String>,
}

impl Site {
    /// Create a site from a scheme and host; every other part is empty.
    pub fn new(scheme: Scheme, host: &str) -> Self {
        Self::with_protocol(scheme.protocol(), host)
    }

    /// Like [`Site::new`], but takes the protocol token as text.
    /// The token is not checked against [`Scheme`].
    pub fn with_protocol(protocol: &str, host: &str) -> Self {
        Self {
            charset: DEFAULT_CHARSET.to_string(),
            scheme: protocol.to_string(),
            username: None,
            password: None,
            subdomains: Vec::new(),
            host: host.to_string(),
            port: DEFAULT_PORT,
            paths: Vec::new(),
            file: None,
            parameters: Parameters::new(),
            fragment: None,
        }
    }

    /// Parse a URL string and split it into a site.
    ///
    /// # Errors
    ///
    /// Fails if `input` is not a valid URL or has no host.
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input)?;
        let mut site = Self::from_url(&url)?;

        // `Url` drops an empty user-info ("@host") and an empty password
        // ("alice:@host"); the raw input still has them
        if let Some(userinfo) = raw_userinfo(input) {
            if site.username.is_none() {
                site.username = Some(String::new());
            }
            if site.password.is_none() && userinfo.contains(':') {
                site.password = Some(String::new());
            }
        }

        Ok(site)
    }

    /// Split a parsed URL into a site.
    ///
    /// Domain hosts keep their last two labels as the host, earlier labels
    /// become subdomains. IP hosts are kept whole. Without an explicit port
    /// the scheme's well-known port is used. The last path segment becomes
    /// the file when it contains a `.`. The query is split on `&` and `=`
    /// without decoding, and the fragment is copied verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingHost`] for URLs without a host.
    pub fn from_url(url: &Url) -> Result<Self> {
        let (subdomains, host) = match url.host() {
            Some(Host::Domain(domain)) => split_domain(domain),
            Some(Host::Ipv4(_) | Host::Ipv6(_)) => {
                (Vec::new(), url.host_str().ok_or(ParseError::MissingHost)?)
            }
            None => return Err(ParseError::MissingHost),
        };

        let mut site = Self::with_protocol(url.scheme(), host);
        site.subdomains = subdomains.into_iter().map(ToString::to_string).collect();

        site.password = url.password().map(ToString::to_string);
        if !url.username().is_empty() || site.password.is_some() {
            site.username = Some(url.username().to_string());
        }

        site.port = url.port_or_known_default().unwrap_or(DEFAULT_PORT);

        let (paths, file) = split_path(url.path());
        site.paths = paths.into_iter().map(ToString::to_string).collect();
        site.file = file.map(ToString::to_string);

        if let Some(query) = url.query() {
            site.parameters = Parameters::parse(query);
        }

        site.fragment = url.fragment().map(ToString::to_string);

        tracing::trace!(url = url.as_str(), site = %site, "decomposed url into site");

        Ok(site)
    }

    // Getters

    /// Charset label used to percent-encode parameters and the fragment
    pub fn charset(&self) -> &str {
        &self.charset
    }

    /// Protocol token (e.g. "http")
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The scheme as a [`Scheme`], if the protocol token is one of them
    pub fn scheme_type(&self) -> Option<Scheme> {
        get_scheme(&self.scheme)
    }

    /// User name of the user-info, if any
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Password of the user-info, if any
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Subdomain labels, left to right
    pub fn subdomains(&self) -> &[String] {
        &self.subdomains
    }

    /// Mutable access to the subdomain labels
    pub fn subdomains_mut(&mut self) -> &mut Vec<String> {
        &mut self.subdomains
    }

    /// Host without subdomains (e.g. "example.org")
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port number; 80 is not rendered
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Path segments before the file
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Mutable access to the path segments
    pub fn paths_mut(&mut self) -> &mut Vec<String> {
        &mut self.paths
    }

    /// File name rendered after the path segments (e.g. "home.html")
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Query parameters in insertion order
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Mutable access to the query parameters
    pub fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }

    /// Value of a single query parameter
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key)
    }

    /// Fragment; percent-encoded only when rendered
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    // Setters

    /// Set the charset label. Unsupported labels are accepted; rendering
    /// then leaves parameters and fragment unencoded.
    pub fn set_charset(&mut self, charset: &str) {
        self.charset = charset.to_string();
    }

    /// Set the scheme from a [`Scheme`]
    pub fn set_scheme(&mut self, scheme: Scheme) {
        self.scheme = scheme.protocol().to_string();
    }

    /// Set the protocol token without checking it against [`Scheme`]
    pub fn set_protocol(&mut self, protocol: &str) {
        self.scheme = protocol.to_string();
    }

    /// Set the user-info. The password is only rendered along with a username.
    pub fn set_authentication(&mut self, username: &str, password: Option<&str>) {
        self.username = Some(username.to_string());
        self.password = password.map(ToString::to_string);
    }

    /// Remove username and password
    pub fn clear_authentication(&mut self) {
        self.username = None;
        self.password = None;
    }

    /// Replace all subdomain labels
    pub fn set_subdomains(&mut self, subdomains: Vec<String>) {
        self.subdomains = subdomains;
    }

    /// Append a subdomain label; it is rendered after the existing ones
    pub fn add_subdomain(&mut self, subdomain: &str) {
        self.subdomains.push(subdomain.to_string());
    }

    /// Set the host
    pub fn set_host(&mut self, host: &str) {
        self.host = host.to_string();
    }

    /// Set the port
    pub fn set_port(&mut self, port: u16) {
        self.port = port;
    }

    /// Replace all path segments
    pub fn set_paths(&mut self, paths: Vec<String>) {
        self.paths = paths;
    }

    /// Append a path segment
    pub fn add_path(&mut self, path: &str) {
        self.paths.push(path.to_string());
    }

    /// Set the file name
    pub fn set_file(&mut self, file: &str) {
        self.file = Some(file.to_string());
    }

    /// Remove the file name
    pub fn clear_file(&mut self) {
        self.file = None;
    }

    /// Replace all query parameters
    pub fn set_parameters(&mut self, parameters: Parameters) {
        self.parameters = parameters;
    }

    /// Insert a parameter, or overwrite an existing key in place
    pub fn put_parameter(&mut self, key: &str, value: &str) {
        self.parameters.put(key, value);
    }

    /// Remove a query parameter, returning its value
    pub fn remove_parameter(&mut self, key: &str) -> Option<String> {
        self.parameters.remove(key)
    }

    /// Set the fragment
    pub fn set_fragment(&mut self, fragment: &str) {
        self.fragment = Some(fragment.to_string());
    }

    /// Remove the fragment
    pub fn clear_fragment(&mut self) {
        self.fragment = None;
    }

    // Rendering

    /// Render the full URL string
    pub fn href(&self) -> String {
        let mut buffer = String::with_capacity(self.estimated_len());
        self.render_into(&mut buffer);
        buffer
    }

    /// Render and parse the result into a [`Url`].
    ///
    /// # Errors
    ///
    /// Fails if the rendered string is not a valid URL (e.g. an empty host).
    pub fn url(&self) -> Result<Url> {
        Ok(Url::parse(&self.href())?)
    }

    fn estimated_len(&self) -> usize {
        self.scheme.len()
            + 3
            + self.username.as_ref().map_or(0, |u| u.len() + 1)
            + self.password.as_ref().map_or(0, |p| p.len() + 1)
            + self.subdomains.iter().map(|s| s.len() + 1).sum::<usize>()
            + self.host.len()
            + 6
            + self.paths.iter().map(|p| p.len() + 1).sum::<usize>()
            + self.file.as_ref().map_or(0, |f| f.len() + 1)
            + self.fragment.as_ref().map_or(0, |f| f.len() + 1)
    }

    fn render_into(&self, buffer: &mut String) {
        buffer.push_str(&self.scheme);
        buffer.push_str("://");

        if let Some(username) = &self.username {
            buffer.push_str(username);
            if let Some(password) = &self.password {
                buffer.push(':');
                buffer.push_str(password);
            }
            buffer.push('@');
        }

        for subdomain in &self.subdomains {
            buffer.push_str(subdomain);
            buffer.push('.');
        }

        buffer.push_str(&self.host);

        if self.port != DEFAULT_PORT {
            buffer.push(':');
            buffer.push_str(&self.port.to_string());
        }

        for path in &self.paths {
            buffer.push('/');
            buffer.push_str(path);
        }

        if let Some(file) = &self.file {
            buffer.push('/');
            buffer.push_str(file);
        }

        if self.parameters.is_empty() && self.fragment.is_none() {
            return;
        }

        let charset = Charset::for_label(&self.charset);
        if charset.is_none() {
            tracing::debug!(
                charset = %self.charset,
                "unsupported charset, writing parameters and fragment unencoded"
            );
        }

        if !self.parameters.is_empty() {
            buffer.push('?');
            self.parameters.serialize_into(buffer, charset);
        }

        if let Some(fragment) = &self.fragment {
            buffer.push('#');
            form_encode_into(buffer, fragment, charset);
        }
    }
}

impl core::fmt::Display for Site {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.href())
    }
}

/// Sites are equal when they render to the same URL string
impl PartialEq for Site {
    fn eq(&self, other: &Self) -> bool {
        self.href() == other.href()
    }
}

impl Eq for Site {}

impl core::hash::Hash for Site {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.href().hash(state);
    }
}

impl core::str::FromStr for Site {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Site {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&Url> for Site {
    type Error = ParseError;

    fn try_from(url: &Url) -> Result<Self> {
        Self::from_url(url)
    }
}
