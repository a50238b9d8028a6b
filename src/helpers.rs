use crate::compat::Vec;

/// Split a domain name into its subdomain labels and the registrable host.
/// The host is the last two labels (e.g. "example.org"); everything before
/// them is returned label by label, left to right.
/// A trailing root dot is dropped first.
pub fn split_domain(domain: &str) -> (Vec<&str>, &str) {
    let domain = domain.strip_suffix('.').unwrap_or(domain);

    // Second dot from the right separates subdomains from host
    let mut dots = memchr::memrchr_iter(b'.', domain.as_bytes());
    match (dots.next(), dots.next()) {
        (Some(_), Some(pos)) => (domain[..pos].split('.').collect(), &domain[pos + 1..]),
        _ => (Vec::new(), domain),
    }
}

/// Split a URL path into directory segments and an optional file name.
/// The last segment counts as a file when it contains a `.`.
/// Trailing empty segments (from a trailing `/`) are dropped.
pub fn split_path(path: &str) -> (Vec<&str>, Option<&str>) {
    let path = path.strip_prefix('/').unwrap_or(path);

    let mut segments: Vec<&str> = path.split('/').collect();
    while segments.last().is_some_and(|segment| segment.is_empty()) {
        segments.pop();
    }

    match segments.last() {
        Some(last) if memchr::memchr(b'.', last.as_bytes()).is_some() => {
            let file = *last;
            segments.pop();
            (segments, Some(file))
        }
        _ => (segments, None),
    }
}

/// Raw user-info of an absolute URL string (the part before `@` in the
/// authority), if the authority has one. Nothing is decoded or normalized.
pub fn raw_userinfo(input: &str) -> Option<&str> {
    let input = input.trim();
    let (_, rest) = input.split_once("://")?;
    let bytes = rest.as_bytes();
    let authority_end = bytes
        .iter()
        .position(|&b| matches!(b, b'/' | b'\\' | b'?' | b'#'))
        .unwrap_or(bytes.len());
    let authority = &rest[..authority_end];
    memchr::memrchr(b'@', authority.as_bytes()).map(|pos| &authority[..pos])
}
