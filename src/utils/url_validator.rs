//! URL 验证模块
//!
//! 宽松的合理性检查：拦截明显的输入错误，而不是严格的 RFC 校验

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// 域名回退模式：`label(.label)+`，最后一段为 ≥2 位的字母 TLD，可选路径
static DOMAIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}(/.*)?$")
        .expect("domain pattern is a valid regex")
});

/// Liberal, best-effort URL check.
///
/// 检查步骤：
/// 1. 去除首尾空白，空串无效
/// 2. 不以 "http" 开头时补 `https://` 前缀后尝试解析（前缀仅用于本地校验）
/// 3. 解析失败时回退到域名模式匹配
///
/// False positives and false negatives at the margins are acceptable; the
/// server does its own validation.
pub fn is_plausible_url(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.is_empty() {
        return false;
    }

    let candidate: Cow<'_, str> = if raw.starts_with("http") {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(format!("https://{}", raw))
    };

    if Url::parse(&candidate).is_ok() {
        return true;
    }

    DOMAIN_PATTERN.is_match(raw)
}

/// Shorten a URL for display, appending `...` when it exceeds `max` chars.
///
/// The full value stays available to the caller; this is display-only.
pub fn truncate_url(url: &str, max: usize) -> Cow<'_, str> {
    if url.chars().count() <= max {
        Cow::Borrowed(url)
    } else {
        let truncated: String = url.chars().take(max).collect();
        Cow::Owned(format!("{}...", truncated))
    }
}
