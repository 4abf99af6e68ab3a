//! Share links: a share code carried in a URL fragment

use crate::codec::ShareCode;

/// Build `<base>#<code>`, replacing any fragment already on the base
pub fn share_url(base_url: &str, code: &ShareCode) -> String {
    let base = base_url.split('#').next().unwrap_or(base_url);
    format!("{}#{}", base, code)
}

/// Pull the code out of a pasted link, `#code`, or a bare code
pub fn extract_code(input: &str) -> &str {
    let input = input.trim();
    match input.rsplit_once('#') {
        Some((_, fragment)) => fragment.trim(),
        None => input,
    }
}
