use super::*;

// =============================================================
// PageId slugs and parsing
// =============================================================

#[test]
fn default_page_is_home() {
    assert_eq!(PageId::default(), PageId::Home);
}

#[test]
fn there_are_eight_pages() {
    assert_eq!(PageId::ALL.len(), 8);
}

#[test]
fn slugs_round_trip_for_every_page() {
    for page in PageId::ALL {
        assert_eq!(PageId::from_slug(page.slug()), Some(page));
    }
}

#[test]
fn slugs_are_distinct() {
    for (i, a) in PageId::ALL.iter().enumerate() {
        for b in &PageId::ALL[i + 1..] {
            assert_ne!(a.slug(), b.slug());
        }
    }
}

#[test]
fn unknown_slug_parses_to_none() {
    assert_eq!(PageId::from_slug("cv"), None);
    assert_eq!(PageId::from_slug(""), None);
    assert_eq!(PageId::from_slug("Home"), None);
}

// =============================================================
// Keyboard shortcut digits
// =============================================================

#[test]
fn digits_map_to_pages_in_nav_order() {
    assert_eq!(PageId::from_digit('1'), Some(PageId::Home));
    assert_eq!(PageId::from_digit('3'), Some(PageId::Research));
    assert_eq!(PageId::from_digit('8'), Some(PageId::Contact));
}

#[test]
fn out_of_range_digits_map_to_none() {
    assert_eq!(PageId::from_digit('0'), None);
    assert_eq!(PageId::from_digit('9'), None);
    assert_eq!(PageId::from_digit('a'), None);
}

// =============================================================
// NavState
// =============================================================

#[test]
fn show_activates_exactly_that_page() {
    let mut nav = NavState::default();
    nav.show(PageId::Research);
    assert_eq!(nav.current, PageId::Research);
    for page in PageId::ALL {
        assert_eq!(page == nav.current, page == PageId::Research);
    }
}

#[test]
fn show_closes_the_mobile_menu() {
    let mut nav = NavState { current: PageId::Home, menu_open: true };
    nav.show(PageId::Blog);
    assert!(!nav.menu_open);
}

#[test]
fn show_slug_activates_known_page() {
    let mut nav = NavState::default();
    assert!(nav.show_slug("teaching"));
    assert_eq!(nav.current, PageId::Teaching);
}

#[test]
fn show_slug_with_unknown_name_changes_nothing() {
    let mut nav = NavState { current: PageId::About, menu_open: true };
    assert!(!nav.show_slug("nonsense"));
    assert_eq!(nav.current, PageId::About);
    assert!(nav.menu_open);
}

#[test]
fn menu_toggle_flips_and_close_clears() {
    let mut nav = NavState::default();
    nav.toggle_menu();
    assert!(nav.menu_open);
    nav.toggle_menu();
    assert!(!nav.menu_open);
    nav.toggle_menu();
    nav.close_menu();
    assert!(!nav.menu_open);
}
