/// Origin extraction for Tab Grouper
use url::Url;

/// Extract the origin (hostname) of a tab URL.
///
/// The hostname is the clustering key: every tab whose URL parses to the
/// same hostname lands in the same origin bucket. Subdomains are kept as-is,
/// so `docs.rs` and `crates.io` are distinct and so are `mail.google.com`
/// and `www.google.com`.
///
/// Examples:
/// - https://www.google.com/search → www.google.com
/// - https://github.com/rust-lang/rust → github.com
/// - http://localhost:3000/app → localhost
///
/// Returns `None` for an empty, malformed, or hostless URL. An unresolvable
/// URL is never an error; the tab simply stays out of the index until a
/// later navigation supplies something parseable.
pub fn extract_origin(url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }

    let parsed = Url::parse(url.trim()).ok()?;
    parsed.host_str().map(|host| host.to_lowercase())
}

/// Origin of a tab, if it has a resolvable URL.
pub fn tab_origin(url: Option<&str>) -> Option<String> {
    url.and_then(extract_origin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_origin_basic() {
        assert_eq!(extract_origin("https://google.com"), Some("google.com".to_string()));
        assert_eq!(extract_origin("http://google.com"), Some("google.com".to_string()));
        assert_eq!(extract_origin("https://x.com/some/path?q=1"), Some("x.com".to_string()));
    }

    #[test]
    fn test_extract_origin_keeps_subdomains() {
        assert_eq!(extract_origin("https://www.google.com"), Some("www.google.com".to_string()));
        assert_eq!(extract_origin("https://mail.google.com/inbox"), Some("mail.google.com".to_string()));
        assert_eq!(extract_origin("https://news.bbc.co.uk"), Some("news.bbc.co.uk".to_string()));
    }

    #[test]
    fn test_extract_origin_ports_and_ips() {
        assert_eq!(extract_origin("http://localhost:3000"), Some("localhost".to_string()));
        assert_eq!(extract_origin("http://127.0.0.1:8080/admin"), Some("127.0.0.1".to_string()));
        assert_eq!(extract_origin("https://192.168.1.1"), Some("192.168.1.1".to_string()));
    }

    #[test]
    fn test_extract_origin_case_folding() {
        assert_eq!(extract_origin("https://GitHub.COM/rust"), Some("github.com".to_string()));
    }

    #[test]
    fn test_extract_origin_edge_cases() {
        assert_eq!(extract_origin(""), None);
        assert_eq!(extract_origin("not-a-url"), None);
        assert_eq!(extract_origin("https://"), None);
        // chrome's internal pages have a host and are grouped like any other
        assert_eq!(extract_origin("chrome://settings/"), Some("settings".to_string()));
        // but data: and about: URLs have none
        assert_eq!(extract_origin("about:blank"), None);
        assert_eq!(extract_origin("data:text/html,hello"), None);
    }

    #[test]
    fn test_tab_origin() {
        assert_eq!(tab_origin(Some("https://x.com/a")), Some("x.com".to_string()));
        assert_eq!(tab_origin(Some("")), None);
        assert_eq!(tab_origin(None), None);
    }
}
