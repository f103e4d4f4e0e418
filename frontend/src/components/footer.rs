use yew::prelude::*;

use crate::config;
use crate::i18n::Lang;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub lang: Lang,
    pub on_share: Callback<()>,
    pub on_refresh: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let t = props.lang.text();
    let on_share = {
        let on_share = props.on_share.clone();
        Callback::from(move |_: MouseEvent| on_share.emit(()))
    };
    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };
    html! {
        <footer class="site-footer">
            <style>{FOOTER_CSS}</style>
            <div class="footer-inner">
                <div class="footer-brand">
                    <img src={config::LOGO} alt="GL Logo" class="footer-logo" />
                    <div class="license">
                        <span class="license-dot"></span>
                        <span>{t.license}</span>
                    </div>
                    <p class="footer-motto">{t.motto}</p>
                </div>
                <div class="footer-social">
                    <a href={config::FACEBOOK} target="_blank" rel="noopener noreferrer"><i class="fab fa-facebook"></i></a>
                    <a href={config::YOUTUBE} target="_blank" rel="noopener noreferrer"><i class="fab fa-youtube"></i></a>
                    <button class="kakao-share" onclick={on_share} aria-label={t.hero.share}>
                        <i class="fas fa-comment"></i>
                    </button>
                    <a href={config::FLICKR} target="_blank" rel="noopener noreferrer"><i class="fab fa-flickr"></i></a>
                </div>
                <div class="footer-meta">
                    <button class="refresh-button" onclick={on_refresh}>
                        <i class="fas fa-rotate-right"></i>
                        <span>{t.footer.refresh}</span>
                    </button>
                    <p class="privacy">{t.footer.privacy}</p>
                    <p class="copyright">{t.footer.copyright}{" "}<span class="studio">{"aeZ Studio"}</span></p>
                    <a href={config::STUDIO_HUB} target="_blank" rel="noopener noreferrer" class="hub-link">
                        <span>{t.footer.hub}</span>
                        <i class="fas fa-chevron-right"></i>
                    </a>
                </div>
            </div>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
    .site-footer {
        padding: 3rem 1.5rem;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
        background: #0a0a0a;
    }
    .footer-inner {
        max-width: 80rem;
        margin: 0 auto;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 2rem;
        text-align: center;
    }
    .footer-logo {
        height: 3rem;
        width: auto;
        opacity: 0.8;
    }
    .license {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        margin-top: 1rem;
        font-size: 0.75rem;
        color: rgba(255, 255, 255, 0.5);
    }
    .license-dot {
        width: 6px;
        height: 6px;
        border-radius: 50%;
        background: #22c55e;
    }
    .footer-motto {
        font-size: 0.7rem;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.3);
    }
    .footer-social {
        display: flex;
        gap: 1.5rem;
        font-size: 1.5rem;
    }
    .footer-social a,
    .kakao-share {
        color: rgba(255, 255, 255, 0.4);
        background: none;
        border: none;
        font-size: inherit;
        cursor: pointer;
        text-decoration: none;
    }
    .footer-social a:hover,
    .kakao-share:hover {
        color: #f59e0b;
    }
    .footer-meta {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.75rem;
    }
    .refresh-button {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.5rem 1rem;
        border-radius: 9999px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.05);
        color: rgba(255, 255, 255, 0.5);
        font-size: 0.7rem;
        cursor: pointer;
    }
    .privacy,
    .copyright {
        font-size: 10px;
        color: rgba(255, 255, 255, 0.3);
        margin: 0;
    }
    .studio {
        color: rgba(255, 255, 255, 0.5);
        font-weight: 700;
    }
    .hub-link {
        display: inline-flex;
        align-items: center;
        gap: 0.25rem;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.05);
        color: rgba(255, 255, 255, 0.4);
        font-size: 10px;
        text-decoration: none;
    }
"#;
