use yew::prelude::*;

use crate::config;
use crate::content::portfolio::{emphasis_spans, Span};
use crate::content::{PortfolioItem, PORTFOLIO};
use crate::i18n::Lang;
use crate::state::filter::PortfolioFilter;

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub lang: Lang,
    pub filter: PortfolioFilter,
    pub on_filter: Callback<PortfolioFilter>,
    pub on_open: Callback<&'static PortfolioItem>,
}

/// `*emphasis*` in a description becomes bold text.
pub fn render_description(text: &str) -> Html {
    html! {
        <>
            { for emphasis_spans(text).into_iter().map(|span| match span {
                Span::Plain(s) => html! { <span>{s.to_string()}</span> },
                Span::Strong(s) => html! { <strong class="desc-strong">{s.to_string()}</strong> },
            }) }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    item: &'static PortfolioItem,
    lang: Lang,
    on_open: Callback<&'static PortfolioItem>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let item = props.item;
    let t = props.lang.text();
    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(item))
    };
    html! {
        <div class="project-card" onclick={onclick}>
            <img src={config::asset(item.image)} alt={item.title_en} loading="lazy" />
            <div class="project-badges">
                if item.is_transformation {
                    <div class="badge before-after">{t.portfolio.before_after}</div>
                }
                if let Some(count) = item.photo_count() {
                    <div class="badge photos">
                        <i class="fas fa-expand"></i>
                        {format!("{} {}", count, t.portfolio.photos)}
                    </div>
                }
            </div>
            <div class="project-shade"></div>
            <div class="project-info">
                <span class="project-category">{item.category.as_str()}</span>
                <h3>{item.title(props.lang)}</h3>
                <p>{render_description(item.description(props.lang))}</p>
            </div>
        </div>
    }
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let t = props.lang.text();
    let shown = props.filter.apply(PORTFOLIO);

    html! {
        <section id="portfolio" class="portfolio-section">
            <style>{PORTFOLIO_CSS}</style>
            <div class="portfolio-inner">
                <div class="portfolio-header">
                    <div>
                        <span class="eyebrow">{t.portfolio.eyebrow}</span>
                        <h2>{t.nav.portfolio}</h2>
                    </div>
                    <div class="filter-bar">
                        { for PortfolioFilter::ALL.iter().map(|f| {
                            let filter = *f;
                            let on_filter = props.on_filter.clone();
                            let active = props.filter == filter;
                            html! {
                                <button
                                    key={filter.label(Lang::En)}
                                    class={classes!("filter-button", active.then(|| "active"))}
                                    onclick={Callback::from(move |_: MouseEvent| on_filter.emit(filter))}
                                >
                                    {filter.label(props.lang)}
                                </button>
                            }
                        }) }
                    </div>
                </div>
                <div class="project-grid">
                    { for shown.into_iter().map(|item| html! {
                        <ProjectCard
                            key={item.id.to_string()}
                            item={item}
                            lang={props.lang}
                            on_open={props.on_open.clone()}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

const PORTFOLIO_CSS: &str = r#"
    .portfolio-section {
        padding: 4rem 1.5rem;
    }
    .portfolio-inner {
        max-width: 80rem;
        margin: 0 auto;
    }
    .portfolio-header {
        display: flex;
        justify-content: space-between;
        align-items: flex-end;
        gap: 2rem;
        margin-bottom: 3rem;
    }
    .portfolio-header h2 {
        font-size: clamp(2.25rem, 5vw, 3.75rem);
        font-weight: 900;
        letter-spacing: -0.05em;
        margin: 0.5rem 0 0;
    }
    .filter-bar {
        display: flex;
        gap: 0.5rem;
        padding: 0.375rem;
        background: rgba(255, 255, 255, 0.05);
        border-radius: 9999px;
        overflow-x: auto;
    }
    .filter-button {
        padding: 0.5rem 1.5rem;
        border-radius: 9999px;
        border: none;
        background: transparent;
        color: rgba(255, 255, 255, 0.4);
        font-size: 0.75rem;
        font-weight: 700;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        white-space: nowrap;
        cursor: pointer;
    }
    .filter-button.active {
        background: #f59e0b;
        color: #000;
    }
    .project-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
    }
    .project-card {
        position: relative;
        aspect-ratio: 4 / 5;
        border-radius: 2rem;
        overflow: hidden;
        cursor: pointer;
        background: rgba(255, 255, 255, 0.05);
    }
    .project-card img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.7s;
    }
    .project-card:hover img {
        transform: scale(1.1);
    }
    .project-badges {
        position: absolute;
        top: 1rem;
        right: 1rem;
        display: flex;
        gap: 0.5rem;
        z-index: 2;
    }
    .badge {
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        font-size: 10px;
        font-weight: 900;
        display: flex;
        align-items: center;
        gap: 0.25rem;
    }
    .badge.before-after {
        background: #f59e0b;
        color: #000;
    }
    .badge.photos {
        background: rgba(0, 0, 0, 0.6);
        color: #fff;
    }
    .project-shade {
        position: absolute;
        inset: 0;
        background: linear-gradient(to top, rgba(0, 0, 0, 0.9), transparent 60%);
    }
    .project-info {
        position: absolute;
        bottom: 0;
        left: 0;
        right: 0;
        padding: 2rem;
    }
    .project-category {
        color: #f59e0b;
        font-size: 10px;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: 0.3em;
    }
    .project-info h3 {
        font-size: 1.5rem;
        font-weight: 900;
        margin: 0.5rem 0;
    }
    .project-info p {
        color: rgba(255, 255, 255, 0.6);
        font-size: 0.875rem;
        word-break: keep-all;
    }
    .desc-strong {
        color: #f59e0b;
        font-weight: 700;
    }
    @media (max-width: 1024px) {
        .project-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 640px) {
        .portfolio-header {
            flex-direction: column;
            align-items: flex-start;
        }
        .project-grid {
            grid-template-columns: 1fr;
        }
    }
"#;
