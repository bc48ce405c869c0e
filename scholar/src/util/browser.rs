//! Fragment and scroll helpers.
//!
//! Every lookup tolerates a missing `window`/`document` and degrades to a
//! no-op, so the same code paths compile and do nothing off-browser.

/// Current URL fragment without the leading `#`, if non-empty.
#[must_use]
pub fn read_fragment() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    let slug = hash.strip_prefix('#').unwrap_or(&hash);
    if slug.is_empty() {
        None
    } else {
        Some(slug.to_owned())
    }
}

/// Write `slug` as the URL fragment.
///
/// Setting an unchanged value does not re-fire `hashchange`, so the router
/// can call this unconditionally.
pub fn write_fragment(slug: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(slug);
    }
}

/// Smooth-scroll the window back to the top.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
