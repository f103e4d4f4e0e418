use once_cell::sync::Lazy;
use regex::Regex;

use crate::i18n::Lang;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Kitchen,
    Bath,
    Improvement,
}

impl Category {
    /// Lowercase tag shown on cards and in the detail view.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Kitchen => "kitchen",
            Category::Bath => "bath",
            Category::Improvement => "improvement",
        }
    }
}

/// One completed project in the gallery.
#[derive(Debug, PartialEq)]
pub struct PortfolioItem {
    pub id: u32,
    pub category: Category,
    pub title_en: &'static str,
    pub title_ko: &'static str,
    pub desc_en: &'static str,
    pub desc_ko: &'static str,
    pub image: &'static str,
    pub additional_images: &'static [&'static str],
    /// Before-and-after project, gets the "B&A" badge.
    pub is_transformation: bool,
    /// Photos carry AI-added decor, gets the staging disclaimer.
    pub is_staging: bool,
}

impl PortfolioItem {
    /// Primary image followed by the additional ones. Blank filenames are skipped.
    pub fn images(&self) -> Vec<&'static str> {
        std::iter::once(self.image)
            .chain(self.additional_images.iter().copied())
            .filter(|name| !name.trim().is_empty())
            .collect()
    }

    pub fn title(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.title_en,
            Lang::Ko => self.title_ko,
        }
    }

    pub fn description(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.desc_en,
            Lang::Ko => self.desc_ko,
        }
    }

    /// Badge count, only for items the lightbox can page through.
    pub fn photo_count(&self) -> Option<usize> {
        let count = self.images().len();
        (count > 1).then_some(count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Plain(&'a str),
    Strong(&'a str),
}

static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());

/// Splits `*emphasis*` markup out of a description.
pub fn emphasis_spans(text: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut last = 0;
    for caps in EMPHASIS.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            spans.push(Span::Plain(&text[last..whole.start()]));
        }
        spans.push(Span::Strong(inner.as_str()));
        last = whole.end();
    }
    if last < text.len() {
        spans.push(Span::Plain(&text[last..]));
    }
    spans
}

pub static PORTFOLIO: &[PortfolioItem] = &[
    // Kitchen
    PortfolioItem {
        id: 101,
        category: Category::Kitchen,
        title_en: "Luxury Kitchen Transformation",
        title_ko: "럭셔리 키친 공간 혁신",
        desc_en: "Upgraded awkward layout and structural pillars into a luxury kitchen flow.",
        desc_ko: "어색한 기둥으로 불편한 동선을 럭셔리 키친으로 대폭 업그레이드했습니다.",
        image: "kitchen-1.jpg",
        additional_images: &["kitchen-2.jpg", "kitchen-3.jpg"],
        is_transformation: false,
        is_staging: false,
    },
    PortfolioItem {
        id: 104,
        category: Category::Kitchen,
        title_en: "Chef's Dream Kitchen",
        title_ko: "셰프의 꿈, 고메 키친",
        desc_en: "High-end appliances and spacious island for cooking enthusiasts.",
        desc_ko: "고급 가전과 넓은 아일랜드로 완성된 조리 공간입니다.",
        image: "kitchen-4.jpg",
        additional_images: &["kitchen-5.jpg", "kitchen-6.jpg"],
        is_transformation: false,
        is_staging: false,
    },
    PortfolioItem {
        id: 107,
        category: Category::Kitchen,
        title_en: "Elegant & Noble Kitchen",
        title_ko: "품격 있는 프리미엄 주방",
        desc_en: "High-end kitchen design that maintains elegance and timeless sophistication.",
        desc_ko: "모던하면서도 기품을 잃지 않은 품격이 높은 주방입니다.",
        image: "kitchen-7.jpg",
        additional_images: &["kitchen-8.jpg", "kitchen-9.jpg"],
        is_transformation: false,
        is_staging: false,
    },
    PortfolioItem {
        id: 110,
        category: Category::Kitchen,
        title_en: "Trend-setting Open Kitchen",
        title_ko: "GL 최신 트렌드 오픈 주방",
        desc_en: "Major structural change with wall removal for a modern open-concept masterpiece.",
        desc_ko: "벽철거로 엄청난 변화를 가져다 준 최신 오픈주방, GL의 최신 트렌드 작품입니다.",
        image: "Kitchen-10.jpg",
        additional_images: &["Kitchen-11.jpg", "Kitchen-12.jpg"],
        is_transformation: false,
        is_staging: true,
    },
    // Bath
    PortfolioItem {
        id: 201,
        category: Category::Bath,
        title_en: "Luxury Master Suite Bath",
        title_ko: "럭셔리 마스터 스위트 욕실",
        desc_en: "Custom tile work and luxury finishes for a private retreat.",
        desc_ko: "정교한 타일 시공과 고급 마감재로 완성한 마스터 욕실입니다.",
        image: "bath-1.jpg",
        additional_images: &["bath-2.jpg"],
        is_transformation: false,
        is_staging: false,
    },
    PortfolioItem {
        id: 203,
        category: Category::Bath,
        title_en: "Elegant Marble Master Bath",
        title_ko: "엘레강스 마블 마스터 욕실",
        desc_en: "Luxurious marble tiling for a timeless look.",
        desc_ko: "대리석 스타일의 타일로 완성한 고품격 마스터 욕실입니다.",
        image: "bath-3.jpg",
        additional_images: &["bath-4.jpg"],
        is_transformation: false,
        is_staging: false,
    },
    PortfolioItem {
        id: 205,
        category: Category::Bath,
        title_en: "Contemporary Master Bath",
        title_ko: "컨템포러리 마스터 욕실",
        desc_en: "Modern fixtures and sophisticated design.",
        desc_ko: "현대적인 수전과 세련된 디자인의 마스터 욕실입니다.",
        image: "bath-5.jpg",
        additional_images: &["bath-6.jpg"],
        is_transformation: false,
        is_staging: false,
    },
    PortfolioItem {
        id: 207,
        category: Category::Bath,
        title_en: "Premium Master Bath Reno",
        title_ko: "프리미엄 마스터 욕실 리모델링",
        desc_en: "High-end hardware and custom glass shower suite.",
        desc_ko: "고급 부속과 맞춤형 유리 샤워실로 완성된 공간입니다.",
        image: "bath-7.jpg",
        additional_images: &["bath-8.jpg"],
        is_transformation: false,
        is_staging: false,
    },
    // Home improvement
    PortfolioItem {
        id: 1,
        category: Category::Improvement,
        title_en: "Deck Construction & Upgrade",
        title_ko: "데크 신축 및 업그레이드",
        desc_en: "Premium outdoor living spaces.",
        desc_ko: "야외 생활의 가치를 더하는 고품격 데크 시공입니다.",
        image: "home-1.jpg",
        additional_images: &["home-11.jpg", "home-12.jpg"],
        is_transformation: true,
        is_staging: false,
    },
    PortfolioItem {
        id: 2,
        category: Category::Improvement,
        title_en: "Floor Material Upgrade",
        title_ko: "바닥재 교체 및 업그레이드",
        desc_en: "Modern flooring solutions.",
        desc_ko: "집안의 분위기를 결정하는 고급 바닥재 시공입니다.",
        image: "home-2.jpg",
        additional_images: &["home-3.jpg", "home-7.jpg"],
        is_transformation: true,
        is_staging: false,
    },
    PortfolioItem {
        id: 4,
        category: Category::Improvement,
        title_en: "Bathroom Room Upgrade",
        title_ko: "부분 욕실 업그레이드",
        desc_en: "Targeted bathroom improvements.",
        desc_ko: "부분적인 개선으로 완성한 쾌적한 욕실 공간입니다.",
        image: "home-4.jpg",
        additional_images: &["home-5.jpg", "home-9.jpg"],
        is_transformation: true,
        is_staging: false,
    },
    PortfolioItem {
        id: 8,
        category: Category::Improvement,
        title_en: "Move-in Readiness Upgrade",
        title_ko: "입주 전 전체 업그레이드",
        desc_en: "Comprehensive upgrades for new homeowners.",
        desc_ko: "새집처럼 쾌적한 출발을 위한 입주 전 필수 시공입니다.",
        image: "home-8.jpg",
        additional_images: &["home-10.jpg"],
        is_transformation: true,
        is_staging: false,
    },
    PortfolioItem {
        id: 6,
        category: Category::Improvement,
        title_en: "Partial Home Transformation",
        title_ko: "부분 공간 변신",
        desc_en: "Refreshing specific interior areas.",
        desc_ko: "단조로운 공간에 새로운 생명력을 불어넣는 부분 시공입니다.",
        image: "home-6.jpg",
        additional_images: &["home-15.jpg"],
        is_transformation: true,
        is_staging: false,
    },
    PortfolioItem {
        id: 13,
        category: Category::Improvement,
        title_en: "Fire Damage Restoration",
        title_ko: "화재 피해 복구 및 리모델링",
        desc_en: "Expert restoration after fire damage.",
        desc_ko: "갑작스러운 화재의 흔적을 지우고 더 안전하고 정교하게 복구했습니다.",
        image: "home-13.jpg",
        additional_images: &["home-14.jpg"],
        is_transformation: true,
        is_staging: false,
    },
];

#[cfg(test)]
pub fn find(id: u32) -> Option<&'static PortfolioItem> {
    PORTFOLIO.iter().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<u32> = PORTFOLIO.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), PORTFOLIO.len());
    }

    #[test]
    fn every_item_has_at_least_one_image() {
        for item in PORTFOLIO {
            assert!(!item.images().is_empty(), "item {} has no images", item.id);
            assert_eq!(item.images()[0], item.image);
        }
    }

    #[test]
    fn images_keep_order_and_skip_blank_names() {
        let item = PortfolioItem {
            id: 999,
            category: Category::Bath,
            title_en: "t",
            title_ko: "t",
            desc_en: "d",
            desc_ko: "d",
            image: "a.jpg",
            additional_images: &["", "b.jpg", "  ", "c.jpg"],
            is_transformation: false,
            is_staging: false,
        };
        assert_eq!(item.images(), vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn photo_count_only_for_multi_image_items() {
        assert_eq!(find(101).and_then(|i| i.photo_count()), Some(3));
        assert_eq!(find(201).and_then(|i| i.photo_count()), Some(2));
    }

    #[test]
    fn photo_count_matches_what_the_lightbox_shows() {
        let padded = PortfolioItem {
            id: 998,
            category: Category::Kitchen,
            title_en: "t",
            title_ko: "t",
            desc_en: "d",
            desc_ko: "d",
            image: "a.jpg",
            additional_images: &["", "b.jpg"],
            is_transformation: false,
            is_staging: false,
        };
        assert_eq!(padded.photo_count(), Some(padded.images().len()));
        assert_eq!(padded.photo_count(), Some(2));

        let blanks_only = PortfolioItem { additional_images: &["  ", ""], ..padded };
        assert_eq!(blanks_only.photo_count(), None);

        for item in PORTFOLIO {
            let shown = item.images().len();
            assert_eq!(item.photo_count(), (shown > 1).then_some(shown));
        }
    }

    #[test]
    fn only_the_open_kitchen_is_staged() {
        let staged: Vec<u32> = PORTFOLIO.iter().filter(|i| i.is_staging).map(|i| i.id).collect();
        assert_eq!(staged, vec![110]);
    }

    #[test]
    fn text_follows_language() {
        let item = find(104).unwrap();
        assert_eq!(item.title(Lang::En), "Chef's Dream Kitchen");
        assert_eq!(item.title(Lang::Ko), "셰프의 꿈, 고메 키친");
        assert_eq!(item.description(Lang::Ko), item.desc_ko);
    }

    #[test]
    fn emphasis_markup_is_split_into_spans() {
        assert_eq!(
            emphasis_spans("Built with *care* and *pride*."),
            vec![
                Span::Plain("Built with "),
                Span::Strong("care"),
                Span::Plain(" and "),
                Span::Strong("pride"),
                Span::Plain("."),
            ]
        );
    }

    #[test]
    fn unmatched_or_empty_stars_stay_plain() {
        assert_eq!(emphasis_spans("no markup"), vec![Span::Plain("no markup")]);
        assert_eq!(emphasis_spans("a ** b"), vec![Span::Plain("a ** b")]);
        assert_eq!(emphasis_spans("open *only"), vec![Span::Plain("open *only")]);
        assert!(emphasis_spans("").is_empty());
    }
}
