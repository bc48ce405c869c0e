#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// The fixed set of site pages, in navigation and shortcut order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageId {
    #[default]
    Home,
    About,
    Research,
    Publications,
    Conferences,
    Teaching,
    Blog,
    Contact,
}

impl PageId {
    /// Every page, in the order nav links and Alt+digit shortcuts use.
    pub const ALL: [Self; 8] = [
        Self::Home,
        Self::About,
        Self::Research,
        Self::Publications,
        Self::Conferences,
        Self::Teaching,
        Self::Blog,
        Self::Contact,
    ];

    /// URL fragment and section element id for this page.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Research => "research",
            Self::Publications => "publications",
            Self::Conferences => "conferences",
            Self::Teaching => "teaching",
            Self::Blog => "blog",
            Self::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Research => "Research",
            Self::Publications => "Publications",
            Self::Conferences => "Conferences",
            Self::Teaching => "Teaching",
            Self::Blog => "Blog",
            Self::Contact => "Contact",
        }
    }

    /// Parse a URL fragment; `None` for unknown slugs.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.slug() == slug)
    }

    /// Page for keyboard shortcut digit `'1'`–`'8'`; `None` otherwise.
    #[must_use]
    pub fn from_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)? as usize;
        if (1..=Self::ALL.len()).contains(&index) {
            Some(Self::ALL[index - 1])
        } else {
            None
        }
    }
}

/// Navigation state: the single active page plus the mobile menu flag.
///
/// Exactly one page is active at any time; the matching nav link highlight
/// falls out of rendering against `current`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub current: PageId,
    pub menu_open: bool,
}

impl NavState {
    /// Activate `page` and close the mobile menu.
    pub fn show(&mut self, page: PageId) {
        self.current = page;
        self.menu_open = false;
    }

    /// Activate the page named by `slug`.
    ///
    /// Unknown slugs change nothing — not even the menu — and return
    /// `false` so callers can skip fragment/scroll side effects.
    pub fn show_slug(&mut self, slug: &str) -> bool {
        match PageId::from_slug(slug) {
            Some(page) => {
                self.show(page);
                true
            }
            None => false,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
