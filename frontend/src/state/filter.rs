use crate::content::{Category, PortfolioItem};
use crate::i18n::Lang;

/// Category selection for the portfolio grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortfolioFilter {
    #[default]
    All,
    Kitchen,
    Bath,
    Improvement,
}

impl PortfolioFilter {
    /// Filter bar order.
    pub const ALL: [PortfolioFilter; 4] = [
        PortfolioFilter::All,
        PortfolioFilter::Kitchen,
        PortfolioFilter::Bath,
        PortfolioFilter::Improvement,
    ];

    pub fn matches(&self, item: &PortfolioItem) -> bool {
        match self {
            PortfolioFilter::All => true,
            PortfolioFilter::Kitchen => item.category == Category::Kitchen,
            PortfolioFilter::Bath => item.category == Category::Bath,
            PortfolioFilter::Improvement => item.category == Category::Improvement,
        }
    }

    /// Items shown under this filter, in their original order.
    pub fn apply<'a>(&self, items: &'a [PortfolioItem]) -> Vec<&'a PortfolioItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }

    pub fn label(&self, lang: Lang) -> &'static str {
        let copy = &lang.text().portfolio;
        match self {
            PortfolioFilter::All => copy.filter_all,
            PortfolioFilter::Kitchen => copy.filter_kitchen,
            PortfolioFilter::Bath => copy.filter_bath,
            PortfolioFilter::Improvement => copy.filter_improvement,
        }
    }
}

impl From<Category> for PortfolioFilter {
    fn from(category: Category) -> Self {
        match category {
            Category::Kitchen => PortfolioFilter::Kitchen,
            Category::Bath => PortfolioFilter::Bath,
            Category::Improvement => PortfolioFilter::Improvement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;

    #[test]
    fn all_returns_the_full_list_unchanged() {
        let shown = PortfolioFilter::All.apply(PORTFOLIO);
        let expected: Vec<&PortfolioItem> = PORTFOLIO.iter().collect();
        assert_eq!(shown, expected);
    }

    #[test]
    fn category_filters_keep_the_matching_subset_in_order() {
        for category in [Category::Kitchen, Category::Bath, Category::Improvement] {
            let filter = PortfolioFilter::from(category);
            let shown: Vec<u32> = filter.apply(PORTFOLIO).iter().map(|i| i.id).collect();
            let expected: Vec<u32> = PORTFOLIO
                .iter()
                .filter(|i| i.category == category)
                .map(|i| i.id)
                .collect();
            assert_eq!(shown, expected);
        }
    }

    #[test]
    fn improvement_keeps_source_order() {
        let ids: Vec<u32> = PortfolioFilter::Improvement
            .apply(PORTFOLIO)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 4, 8, 6, 13]);
    }

    #[test]
    fn labels_are_bilingual() {
        assert_eq!(PortfolioFilter::All.label(Lang::Ko), "전체");
        assert_eq!(PortfolioFilter::Improvement.label(Lang::En), "Home Improvement");
        assert_eq!(PortfolioFilter::Improvement.label(Lang::Ko), "집수리");
    }
}
