//! Compile-time configuration for the widget.

use byline_shared::endpoints::DEFAULT_API_BASE;

/// Mock API base URL.
/// - Default: the public mockapi.io project the widget was built against
/// - Override at build time with `BYLINE_API_BASE=... trunk build`
pub const API_BASE: &str = match option_env!("BYLINE_API_BASE") {
    Some(url) => url,
    None => DEFAULT_API_BASE,
};

/// Trailing delay, in milliseconds, before a burst of scroll events is
/// checked against the bottom threshold.
pub const SCROLL_THROTTLE_MS: u32 = 150;
