use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Maximum number of characters of a URL shown before it is cut.
pub const URL_DISPLAY_LIMIT: usize = 50;

static BOLD_STARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid regex"));
static BOLD_UNDERSCORES: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.*?)__").expect("valid regex"));

/// Removes `**bold**` and `__bold__` markers, keeping the enclosed text.
pub fn strip_markdown_emphasis(text: &str) -> String {
    let once = BOLD_STARS.replace_all(text, "$1");
    BOLD_UNDERSCORES.replace_all(&once, "$1").into_owned()
}

/// Cuts `url` to [`URL_DISPLAY_LIMIT`] characters and appends `...` when it was longer.
///
/// Only for display; link targets always keep the full URL.
pub fn truncate_url(url: &str) -> String {
    match url.char_indices().nth(URL_DISPLAY_LIMIT) {
        Some((cut, _)) => format!("{}...", &url[..cut]),
        None => url.to_string(),
    }
}

/// Host part of `url`, or `None` when it does not parse or has no host.
pub fn hostname_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
}
