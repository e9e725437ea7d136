use percent_encoding::percent_decode_str;

/// Extract a cookie value from a raw `Cookie` header string.
///
/// The header is a semicolon-delimited list of `key=value` pairs; the value
/// of the first pair whose key matches `name` is returned, percent-decoded.
/// Returns `None` when the string is empty or no pair matches.
pub fn get_cookie(cookie_header: &str, name: &str) -> Option<String> {
    for pair in cookie_header.split(';') {
        let pair = pair.trim();
        if let Some(rest) = pair.strip_prefix(name) {
            if let Some(value) = rest.strip_prefix('=') {
                return Some(percent_decode_str(value).decode_utf8_lossy().into_owned());
            }
        }
    }
    None
}
