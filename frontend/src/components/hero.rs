use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::config;
use crate::i18n::Lang;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub lang: Lang,
    pub on_share: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let t = props.lang.text();

    // Swap in the hosted fallback once; a failing fallback must not loop.
    let on_image_error = Callback::from(|e: Event| {
        let img: HtmlImageElement = e.target_unchecked_into();
        if img.src() != config::HERO_FALLBACK {
            img.set_src(config::HERO_FALLBACK);
        }
    });
    let on_share = {
        let on_share = props.on_share.clone();
        Callback::from(move |_: MouseEvent| on_share.emit(()))
    };
    let title_class = match props.lang {
        Lang::En => "hero-title tight",
        Lang::Ko => "hero-title loose",
    };

    html! {
        <header class="hero">
            <style>{HERO_CSS}</style>
            <div class="hero-media">
                <div class="hero-shade"></div>
                <img
                    src={config::HERO_IMAGE}
                    alt="GL Design+Build Hero"
                    class="hero-image"
                    onerror={on_image_error}
                />
            </div>
            <div class="hero-content">
                <span class="hero-since">{t.hero.since}</span>
                <h1 class={title_class}>{t.hero.title}</h1>
                <p class="hero-subtitle">{t.hero.subtitle}</p>
                <div class="hero-cta-group">
                    <a href="#contact" class="hero-cta primary">{t.hero.cta}</a>
                    <a href={config::KAKAO_OPEN_CHAT} target="_blank" rel="noopener noreferrer" class="hero-cta kakao">
                        <i class="fas fa-comment"></i>
                        {t.hero.kakao}
                    </a>
                    <button class="hero-cta share" onclick={on_share}>
                        <i class="fas fa-paper-plane"></i>
                        {t.hero.share}
                    </button>
                </div>
            </div>
        </header>
    }
}

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
    }
    .hero-media {
        position: absolute;
        inset: 0;
        z-index: 0;
    }
    .hero-shade {
        position: absolute;
        inset: 0;
        z-index: 1;
        background: linear-gradient(to bottom, rgba(0, 0, 0, 0), rgba(0, 0, 0, 0.2), rgba(10, 10, 10, 0.8));
    }
    .hero-image {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transform: scale(1.05);
    }
    .hero-content {
        position: relative;
        z-index: 2;
        max-width: 64rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        text-align: center;
    }
    .hero-since {
        display: inline-block;
        padding: 0.25rem 1rem;
        border-radius: 9999px;
        background: rgba(245, 158, 11, 0.1);
        border: 1px solid rgba(245, 158, 11, 0.2);
        color: #f59e0b;
        font-size: 0.75rem;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: 0.3em;
        margin-bottom: 1.5rem;
    }
    .hero-title {
        font-size: clamp(2.25rem, 8vw, 6rem);
        font-weight: 900;
        letter-spacing: -0.05em;
        margin-bottom: 2rem;
        white-space: pre-line;
        word-break: keep-all;
    }
    .hero-title.tight {
        line-height: 0.9;
    }
    .hero-title.loose {
        line-height: 1.15;
    }
    .hero-subtitle {
        font-size: clamp(1rem, 2vw, 1.5rem);
        color: rgba(255, 255, 255, 0.6);
        max-width: 42rem;
        margin: 0 auto 3rem;
        white-space: pre-line;
        word-break: keep-all;
    }
    .hero-cta-group {
        display: flex;
        flex-wrap: wrap;
        align-items: center;
        justify-content: center;
        gap: 1rem;
    }
    .hero-cta {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 1rem 2.5rem;
        border-radius: 9999px;
        font-weight: 900;
        font-size: 1.1rem;
        text-decoration: none;
        border: none;
        cursor: pointer;
        transition: transform 0.2s;
    }
    .hero-cta:hover {
        transform: scale(1.05);
    }
    .hero-cta.primary {
        background: #f59e0b;
        color: #000;
    }
    .hero-cta.kakao {
        background: #FEE500;
        color: #3c1e1e;
    }
    .hero-cta.share {
        background: rgba(255, 255, 255, 0.1);
        border: 1px solid rgba(255, 255, 255, 0.2);
        color: #fff;
    }
"#;
