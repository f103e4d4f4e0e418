//! Detail overlay for a single portfolio project.
//!
//! The overlay is either closed or showing one project at a valid image
//! index. While it is open the page behind it cannot scroll, and a
//! `{ modal: true }` history entry exists so the browser back button closes
//! it instead of leaving the page.

use crate::content::PortfolioItem;

/// Browser history as seen by the overlay.
#[cfg_attr(test, mockall::automock)]
pub trait ModalHistory {
    /// Whether the current history entry is the one pushed for the overlay.
    fn modal_entry_active(&self) -> bool;
    fn push_modal_entry(&self);
    fn go_back(&self);
}

/// Background scroll lock on the document body.
#[cfg_attr(test, mockall::automock)]
pub trait ScrollLock {
    fn set_scroll_locked(&self, locked: bool);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lightbox {
    selected: Option<&'static PortfolioItem>,
    index: usize,
}

impl Lightbox {
    pub fn selected(&self) -> Option<&'static PortfolioItem> {
        self.selected
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn images(&self) -> Vec<&'static str> {
        self.selected.map(|item| item.images()).unwrap_or_default()
    }

    pub fn current_image(&self) -> Option<&'static str> {
        self.images().get(self.index).copied()
    }

    /// Arrows and thumbnails only make sense with more than one image.
    pub fn has_navigation(&self) -> bool {
        self.images().len() > 1
    }

    /// Staged projects disclose the AI decor on their first two photos.
    pub fn shows_staging_notice(&self) -> bool {
        self.selected.map_or(false, |item| item.is_staging) && self.index <= 1
    }

    pub fn open(
        &mut self,
        item: &'static PortfolioItem,
        history: &impl ModalHistory,
        scroll: &impl ScrollLock,
    ) {
        log::info!("Opening project {}", item.id);
        self.selected = Some(item);
        self.index = 0;
        scroll.set_scroll_locked(true);
        if !history.modal_entry_active() {
            history.push_modal_entry();
        }
    }

    /// User-initiated close. Consumes the overlay's history entry by going back.
    pub fn close(&mut self, history: &impl ModalHistory, scroll: &impl ScrollLock) {
        let Some(item) = self.selected.take() else {
            return;
        };
        log::info!("Closing project {}", item.id);
        self.index = 0;
        scroll.set_scroll_locked(false);
        if history.modal_entry_active() {
            history.go_back();
        }
    }

    /// The browser already went back, so only local state changes here.
    pub fn on_history_back(&mut self, scroll: &impl ScrollLock) {
        if self.selected.take().is_none() {
            return;
        }
        log::info!("Closing project after back navigation");
        self.index = 0;
        scroll.set_scroll_locked(false);
    }

    pub fn next(&mut self) {
        let count = self.images().len();
        if count == 0 {
            self.index = 0;
        } else if count > 1 {
            self.index = (self.index + 1) % count;
        }
    }

    pub fn previous(&mut self) {
        let count = self.images().len();
        if count == 0 {
            self.index = 0;
        } else if count > 1 {
            self.index = (self.index + count - 1) % count;
        }
    }

    /// Jumps to a thumbnail. Returns false and leaves the index alone when out of range.
    pub fn select_image(&mut self, idx: usize) -> bool {
        if idx < self.images().len() {
            self.index = idx;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{portfolio, Category, PORTFOLIO};

    static BROKEN: PortfolioItem = PortfolioItem {
        id: 900,
        category: Category::Bath,
        title_en: "Broken",
        title_ko: "Broken",
        desc_en: "",
        desc_ko: "",
        image: "",
        additional_images: &[],
        is_transformation: false,
        is_staging: false,
    };

    fn item(id: u32) -> &'static PortfolioItem {
        portfolio::find(id).unwrap()
    }

    fn quiet_history(active: bool) -> MockModalHistory {
        let mut history = MockModalHistory::new();
        history.expect_modal_entry_active().return_const(active);
        history.expect_push_modal_entry().return_const(());
        history.expect_go_back().return_const(());
        history
    }

    fn any_scroll() -> MockScrollLock {
        let mut scroll = MockScrollLock::new();
        scroll.expect_set_scroll_locked().return_const(());
        scroll
    }

    fn opened(id: u32) -> Lightbox {
        let mut lightbox = Lightbox::default();
        lightbox.open(item(id), &quiet_history(false), &any_scroll());
        lightbox
    }

    #[test]
    fn starts_closed() {
        let lightbox = Lightbox::default();
        assert!(!lightbox.is_open());
        assert!(lightbox.images().is_empty());
        assert_eq!(lightbox.current_image(), None);
    }

    #[test]
    fn open_locks_scroll_and_pushes_one_history_entry() {
        let mut history = MockModalHistory::new();
        history.expect_modal_entry_active().times(1).return_const(false);
        history.expect_push_modal_entry().times(1).return_const(());
        history.expect_go_back().never();
        let mut scroll = MockScrollLock::new();
        scroll
            .expect_set_scroll_locked()
            .withf(|locked| *locked)
            .times(1)
            .return_const(());

        let mut lightbox = Lightbox::default();
        lightbox.open(item(101), &history, &scroll);

        assert!(lightbox.is_open());
        assert_eq!(lightbox.current_index(), 0);
        assert_eq!(lightbox.current_image(), Some("kitchen-1.jpg"));
    }

    #[test]
    fn open_does_not_stack_history_entries() {
        let mut history = MockModalHistory::new();
        history.expect_modal_entry_active().return_const(true);
        history.expect_push_modal_entry().never();

        let mut lightbox = Lightbox::default();
        lightbox.open(item(201), &history, &any_scroll());
        assert!(lightbox.is_open());
    }

    #[test]
    fn open_resets_the_index() {
        let mut lightbox = opened(101);
        lightbox.next();
        lightbox.open(item(104), &quiet_history(true), &any_scroll());
        assert_eq!(lightbox.current_index(), 0);
        assert_eq!(lightbox.selected().map(|i| i.id), Some(104));
    }

    #[test]
    fn close_unlocks_scroll_and_goes_back_once() {
        let mut lightbox = opened(101);

        let mut history = MockModalHistory::new();
        history.expect_modal_entry_active().return_const(true);
        history.expect_go_back().times(1).return_const(());
        let mut scroll = MockScrollLock::new();
        scroll
            .expect_set_scroll_locked()
            .withf(|locked| !*locked)
            .times(1)
            .return_const(());

        lightbox.close(&history, &scroll);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn close_without_modal_entry_does_not_navigate() {
        let mut lightbox = opened(101);
        let mut history = MockModalHistory::new();
        history.expect_modal_entry_active().return_const(false);
        history.expect_go_back().never();
        lightbox.close(&history, &any_scroll());
        assert!(!lightbox.is_open());
    }

    #[test]
    fn close_when_closed_is_a_no_op() {
        let mut history = MockModalHistory::new();
        history.expect_modal_entry_active().never();
        history.expect_go_back().never();
        let mut scroll = MockScrollLock::new();
        scroll.expect_set_scroll_locked().never();

        let mut lightbox = Lightbox::default();
        lightbox.close(&history, &scroll);
        assert_eq!(lightbox, Lightbox::default());
    }

    #[test]
    fn back_navigation_closes_without_another_back() {
        let mut lightbox = opened(101);
        let mut scroll = MockScrollLock::new();
        scroll
            .expect_set_scroll_locked()
            .withf(|locked| !*locked)
            .times(1)
            .return_const(());

        lightbox.on_history_back(&scroll);
        assert!(!lightbox.is_open());

        // A late popstate after closing must not touch the lock again.
        let mut idle = MockScrollLock::new();
        idle.expect_set_scroll_locked().never();
        lightbox.on_history_back(&idle);
    }

    #[test]
    fn three_nexts_wrap_a_three_image_project() {
        let mut lightbox = opened(101);
        assert_eq!(lightbox.images().len(), 3);
        lightbox.next();
        lightbox.next();
        lightbox.next();
        assert_eq!(lightbox.current_index(), 0);
    }

    #[test]
    fn previous_wraps_to_the_last_image() {
        let mut lightbox = opened(101);
        lightbox.previous();
        assert_eq!(lightbox.current_index(), 2);
        assert_eq!(lightbox.current_image(), Some("kitchen-3.jpg"));
    }

    #[test]
    fn next_then_previous_is_identity_everywhere() {
        for project in PORTFOLIO {
            let mut lightbox = opened(project.id);
            for start in 0..project.images().len() {
                assert!(lightbox.select_image(start));
                lightbox.next();
                lightbox.previous();
                assert_eq!(lightbox.current_index(), start);
                lightbox.previous();
                lightbox.next();
                assert_eq!(lightbox.current_index(), start);
            }
        }
    }

    #[test]
    fn index_stays_in_range_under_any_navigation() {
        for project in PORTFOLIO {
            let mut lightbox = opened(project.id);
            let count = lightbox.images().len();
            for step in 0..(count * 3) {
                if step % 2 == 0 {
                    lightbox.next();
                } else {
                    lightbox.previous();
                    lightbox.previous();
                }
                assert!(lightbox.current_index() < count);
            }
        }
    }

    #[test]
    fn select_image_ignores_out_of_range() {
        let mut lightbox = opened(101);
        assert!(lightbox.select_image(2));
        assert!(!lightbox.select_image(3));
        assert_eq!(lightbox.current_index(), 2);

        let mut closed = Lightbox::default();
        assert!(!closed.select_image(0));
    }

    #[test]
    fn single_image_project_has_no_navigation() {
        static SINGLE: PortfolioItem = PortfolioItem {
            id: 901,
            category: Category::Kitchen,
            title_en: "Single",
            title_ko: "Single",
            desc_en: "",
            desc_ko: "",
            image: "only.jpg",
            additional_images: &[],
            is_transformation: false,
            is_staging: false,
        };
        let mut lightbox = Lightbox::default();
        lightbox.open(&SINGLE, &quiet_history(false), &any_scroll());
        assert!(!lightbox.has_navigation());
        lightbox.next();
        lightbox.previous();
        assert_eq!(lightbox.current_index(), 0);
        assert_eq!(lightbox.current_image(), Some("only.jpg"));
    }

    #[test]
    fn empty_image_list_clamps_to_zero() {
        let mut lightbox = Lightbox::default();
        lightbox.open(&BROKEN, &quiet_history(false), &any_scroll());
        lightbox.next();
        lightbox.previous();
        assert_eq!(lightbox.current_index(), 0);
        assert_eq!(lightbox.current_image(), None);
        assert!(!lightbox.select_image(0));
    }

    #[test]
    fn staging_notice_only_on_first_two_photos() {
        let mut lightbox = opened(110);
        assert!(lightbox.shows_staging_notice());
        lightbox.next();
        assert!(lightbox.shows_staging_notice());
        lightbox.next();
        assert!(!lightbox.shows_staging_notice());

        assert!(!opened(101).shows_staging_notice());
    }
}
