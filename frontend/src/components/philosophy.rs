use yew::prelude::*;

use crate::config;
use crate::i18n::Lang;

#[derive(Properties, PartialEq)]
pub struct PhilosophyProps {
    pub lang: Lang,
}

#[function_component(Philosophy)]
pub fn philosophy(props: &PhilosophyProps) -> Html {
    let t = props.lang.text();
    html! {
        <section id="about" class="philosophy-section">
            <style>{PHILOSOPHY_CSS}</style>
            <div class="philosophy-grid">
                <div class="philosophy-text">
                    <span class="eyebrow">{t.philosophy.title}</span>
                    <h2 class="philosophy-quote">{format!("\"{}\"", t.philosophy.p1)}</h2>
                    <p class="philosophy-p2">{t.philosophy.p2}</p>
                    <p class="philosophy-p3">{t.philosophy.p3}</p>
                    <div class="social-row">
                        <a href={config::FACEBOOK} target="_blank" rel="noopener noreferrer" class="social-link facebook">
                            <i class="fab fa-facebook"></i>
                            <span>{"Facebook"}</span>
                        </a>
                        <a href={config::FLICKR} target="_blank" rel="noopener noreferrer" class="social-link flickr">
                            <i class="fab fa-flickr"></i>
                            <span>{"Flickr"}</span>
                        </a>
                        <a href={config::YOUTUBE} target="_blank" rel="noopener noreferrer" class="social-link youtube">
                            <i class="fab fa-youtube"></i>
                            <span>{"YouTube"}</span>
                        </a>
                    </div>
                </div>
                <div class="philosophy-media">
                    <video
                        src={config::BRAND_VIDEO}
                        autoplay=true
                        muted=true
                        loop=true
                        playsinline=true
                    ></video>
                    <div class="video-badge">
                        <span class="pulse-dot"></span>
                        <span>{t.philosophy.video_badge}</span>
                    </div>
                </div>
            </div>
            <div class="ecosystem">
                <h3>{t.ecosystem.title}</h3>
                <p>{t.ecosystem.subtitle}</p>
            </div>
        </section>
    }
}

const PHILOSOPHY_CSS: &str = r#"
    .philosophy-section {
        padding: 4rem 1.5rem;
        background: rgba(10, 10, 10, 0.5);
    }
    .philosophy-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        align-items: center;
    }
    .eyebrow {
        color: #f59e0b;
        font-size: 0.75rem;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: 0.3em;
    }
    .philosophy-quote {
        font-size: 1.4rem;
        font-weight: 500;
        font-style: italic;
        line-height: 1.7;
        word-break: keep-all;
        color: rgba(255, 255, 255, 0.95);
    }
    .philosophy-p2 {
        color: rgba(255, 255, 255, 0.6);
        font-size: 1.1rem;
        line-height: 1.7;
    }
    .philosophy-p3 {
        color: rgba(255, 255, 255, 0.5);
        line-height: 1.7;
        word-break: keep-all;
    }
    .social-row {
        padding-top: 2rem;
        display: flex;
        gap: 2rem;
    }
    .social-link {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.5rem;
        text-decoration: none;
        font-size: 1.5rem;
    }
    .social-link span {
        font-size: 10px;
        font-weight: 700;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        color: rgba(255, 255, 255, 0.4);
    }
    .social-link.facebook { color: #1877F2; }
    .social-link.flickr { color: #ff0084; }
    .social-link.youtube { color: #FF0000; }
    .philosophy-media {
        position: relative;
        aspect-ratio: 1 / 1;
        border-radius: 2rem;
        overflow: hidden;
        border: 1px solid rgba(255, 255, 255, 0.1);
    }
    .philosophy-media video {
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0.8;
    }
    .video-badge {
        position: absolute;
        bottom: 1.5rem;
        left: 1.5rem;
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.1);
        font-size: 10px;
        font-weight: 700;
        text-transform: uppercase;
    }
    .pulse-dot {
        width: 6px;
        height: 6px;
        border-radius: 50%;
        background: #f59e0b;
    }
    .ecosystem {
        max-width: 80rem;
        margin: 4rem auto 0;
        text-align: center;
    }
    .ecosystem p {
        white-space: pre-line;
        color: rgba(255, 255, 255, 0.5);
    }
    @media (max-width: 1024px) {
        .philosophy-grid {
            grid-template-columns: 1fr;
        }
        .philosophy-media {
            aspect-ratio: 16 / 9;
        }
    }
"#;
