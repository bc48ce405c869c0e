//! Theme preference: load, apply, toggle.
//!
//! One persisted key (`"theme"`, values `"light"`/`"dark"`), applied as a
//! `data-theme` attribute on the document element. Default is light.
//! Requires a browser environment; off-browser every call degrades to a
//! no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

const STORAGE_KEY: &str = "theme";

/// The two color themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted and attribute value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value; `None` for anything unrecognized.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Read the persisted preference; unrecognized or absent values (and
/// non-browser environments) fall back to light.
#[must_use]
pub fn load() -> Theme {
    let Some(window) = web_sys::window() else {
        return Theme::Light;
    };
    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(value)) = storage.get_item(STORAGE_KEY) {
            if let Some(theme) = Theme::parse(&value) {
                return theme;
            }
        }
    }
    Theme::Light
}

/// Apply `theme` as the `data-theme` attribute on `<html>`.
pub fn apply(theme: Theme) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = el.set_attribute("data-theme", theme.as_str());
    }
}

/// Flip the theme, apply it, persist it, and return the new value.
pub fn toggle(current: Theme) -> Theme {
    let next = current.flipped();
    apply(next);
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, next.as_str());
        }
    }
    next
}
