/// Navigation target for relayed prompts

use url::Url;

/// Where the active tab is pointed when a prompt is entered.
pub const TARGET_URL: &str = "https://chatgpt.com/";

/// Hosts on which injection is expected to find the chat input. The primary
/// host can redirect to the legacy one; host permissions cover both.
const TARGET_HOSTS: [&str; 2] = ["chatgpt.com", "chat.openai.com"];

/// Extract the lowercased host of a URL, with any `www.` prefix stripped.
///
/// Examples:
/// - https://chatgpt.com/ → chatgpt.com
/// - https://www.chatgpt.com/c/abc → chatgpt.com
/// - about:blank → None
pub fn host_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);

    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}

/// Whether a URL is on one of the chat hosts.
///
/// Used to warn when a tab finished loading somewhere else (login page,
/// redirect interstitial). Injection still runs in that case: the in-page
/// input poll and the clipboard fallback cover pages without a chat input.
pub fn is_target_host(url: &str) -> bool {
    match host_of(url) {
        Some(host) => TARGET_HOSTS.iter().any(|target| host == *target),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_of_basic() {
        assert_eq!(host_of("https://chatgpt.com/"), Some("chatgpt.com".to_string()));
        assert_eq!(host_of("https://chatgpt.com"), Some("chatgpt.com".to_string()));
        assert_eq!(host_of("http://chatgpt.com/c/123"), Some("chatgpt.com".to_string()));
    }

    #[test]
    fn test_host_of_strips_www() {
        assert_eq!(host_of("https://www.chatgpt.com/"), Some("chatgpt.com".to_string()));
        assert_eq!(host_of("https://www.google.com/search"), Some("google.com".to_string()));
    }

    #[test]
    fn test_host_of_lowercases() {
        assert_eq!(host_of("https://ChatGPT.com/"), Some("chatgpt.com".to_string()));
    }

    #[test]
    fn test_host_of_non_http_schemes() {
        assert_eq!(host_of("about:blank"), None);
        assert_eq!(host_of("chrome://newtab/"), None);
    }

    #[test]
    fn test_host_of_invalid() {
        assert_eq!(host_of(""), None);
        assert_eq!(host_of("not a url"), None);
    }

    #[test]
    fn test_is_target_host_primary() {
        assert!(is_target_host("https://chatgpt.com/"));
        assert!(is_target_host("https://chatgpt.com/c/abc-def"));
        assert!(is_target_host("https://www.chatgpt.com/"));
    }

    #[test]
    fn test_is_target_host_legacy_redirect() {
        assert!(is_target_host("https://chat.openai.com/"));
        assert!(is_target_host("https://chat.openai.com/auth/login"));
    }

    #[test]
    fn test_is_target_host_rejects_others() {
        assert!(!is_target_host("https://auth.openai.com/authorize"));
        assert!(!is_target_host("https://google.com/"));
        assert!(!is_target_host("https://chatgpt.com.evil.example/"));
        assert!(!is_target_host("about:blank"));
    }

    #[test]
    fn test_target_url_is_on_target_host() {
        assert!(is_target_host(TARGET_URL));
    }
}
