/// True for link targets that would run script when followed or loaded.
///
/// Browsers ignore whitespace and control characters inside the scheme, so
/// they are stripped before the check. `data:image/...` stays allowed since
/// uploaded images are sometimes inlined that way.
pub fn is_script_url(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .take(32)
        .collect::<String>()
        .to_ascii_lowercase();

    normalized.starts_with("javascript:")
        || normalized.starts_with("vbscript:")
        || (normalized.starts_with("data:") && !normalized.starts_with("data:image/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_schemes() {
        assert!(is_script_url("javascript:alert(1)"));
        assert!(is_script_url("  JavaScript:alert(1)"));
        assert!(is_script_url("java\tscript:alert(1)"));
        assert!(is_script_url("vbscript:msgbox"));
        assert!(is_script_url("data:text/html;base64,PHNjcmlwdD4="));
    }

    #[test]
    fn test_regular_urls() {
        assert!(!is_script_url("https://example.com"));
        assert!(!is_script_url("#contact"));
        assert!(!is_script_url("/about"));
        assert!(!is_script_url("mailto:hello@example.com"));
        assert!(!is_script_url("data:image/png;base64,iVBORw0KGgo="));
    }
}
