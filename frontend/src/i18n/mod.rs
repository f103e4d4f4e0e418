//! Language selection and the static text tables for both languages.

mod translations;

pub use translations::{ServiceCopy, Translations, EN, KO};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Ko,
}

impl Lang {
    pub fn toggle(self) -> Self {
        match self {
            Lang::En => Lang::Ko,
            Lang::Ko => Lang::En,
        }
    }

    pub fn text(self) -> &'static Translations {
        match self {
            Lang::En => &EN,
            Lang::Ko => &KO,
        }
    }

    /// Label for the toggle button, which names the language you switch to.
    pub fn switch_label(self) -> &'static str {
        match self {
            Lang::En => "한국어",
            Lang::Ko => "English",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ko => "ko",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_english() {
        assert_eq!(Lang::default(), Lang::En);
        assert_eq!(Lang::default().text().nav.contact, "Contact");
    }

    #[test]
    fn toggling_twice_restores_every_string() {
        for start in [Lang::En, Lang::Ko] {
            let round_trip = start.toggle().toggle();
            assert_eq!(round_trip, start);
            assert_eq!(round_trip.text(), start.text());
            assert_eq!(round_trip.text().all_strings(), start.text().all_strings());
        }
    }

    #[test]
    fn toggle_swaps_every_region() {
        let en = Lang::En.text();
        let ko = Lang::En.toggle().text();
        assert_eq!(ko.nav.portfolio, "포트폴리오");
        assert_eq!(ko.contact.submit, "문의하기");
        assert_ne!(en.hero.title, ko.hero.title);
        assert_ne!(en.notices.submit_success, ko.notices.submit_success);
    }

    #[test]
    fn switch_label_names_the_other_language() {
        assert_eq!(Lang::En.switch_label(), "한국어");
        assert_eq!(Lang::Ko.switch_label(), "English");
    }

    #[test]
    fn both_tables_fill_the_same_regions() {
        let en = EN.all_strings();
        let ko = KO.all_strings();
        assert_eq!(en.len(), ko.len());
        assert!(en.iter().chain(ko.iter()).all(|s| !s.is_empty()));
    }
}
