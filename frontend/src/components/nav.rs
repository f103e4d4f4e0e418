use yew::prelude::*;

use crate::config;
use crate::i18n::Lang;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub lang: Lang,
    pub on_toggle_lang: Callback<()>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let t = props.lang.text();
    let on_click = {
        let on_toggle_lang = props.on_toggle_lang.clone();
        Callback::from(move |_: MouseEvent| on_toggle_lang.emit(()))
    };
    html! {
        <nav class="top-nav">
            <style>{NAV_CSS}</style>
            <div class="top-nav-inner">
                <a href="#" class="brand">
                    <img src={config::LOGO} alt="GL Design+Build" class="brand-logo" />
                    <div class="brand-text">
                        <span class="brand-name">{"GL "}<span class="accent">{"Design+Build"}</span></span>
                        <span class="brand-motto">{t.motto}</span>
                    </div>
                </a>
                <div class="nav-links">
                    <a href="#services">{t.nav.services}</a>
                    <a href="#portfolio">{t.nav.portfolio}</a>
                    <a href="#about">{t.nav.about}</a>
                    <a href="#contact">{t.nav.contact}</a>
                </div>
                <button class="lang-toggle" onclick={on_click} lang={props.lang.toggle().code()}>
                    <i class="fas fa-globe"></i>
                    <span>{props.lang.switch_label()}</span>
                </button>
            </div>
        </nav>
    }
}

const NAV_CSS: &str = r#"
    .top-nav {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 50;
        background: rgba(10, 10, 10, 0.8);
        backdrop-filter: blur(24px);
        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
    }
    .top-nav-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        height: 5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
    }
    .brand {
        display: flex;
        align-items: center;
        gap: 1rem;
        color: inherit;
        text-decoration: none;
    }
    .brand-logo {
        height: 2.5rem;
        width: auto;
    }
    .brand-text {
        display: flex;
        flex-direction: column;
    }
    .brand-name {
        font-size: 1.25rem;
        font-weight: 900;
        letter-spacing: -0.05em;
        line-height: 1;
    }
    .brand-motto {
        font-size: 0.75rem;
        font-weight: 700;
        letter-spacing: 0.2em;
        color: rgba(255, 255, 255, 0.4);
        text-transform: uppercase;
        margin-top: 0.25rem;
    }
    .accent {
        color: #f59e0b;
    }
    .nav-links {
        display: flex;
        gap: 2rem;
    }
    .nav-links a {
        color: rgba(255, 255, 255, 0.6);
        text-decoration: none;
        font-size: 0.8rem;
        font-weight: 700;
        text-transform: uppercase;
        letter-spacing: 0.1em;
    }
    .nav-links a:hover {
        color: #f59e0b;
    }
    .lang-toggle {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.5rem 1rem;
        border-radius: 9999px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: transparent;
        color: rgba(255, 255, 255, 0.6);
        font-size: 0.75rem;
        font-weight: 700;
        cursor: pointer;
    }
    .lang-toggle:hover {
        background: rgba(255, 255, 255, 0.05);
    }
    @media (max-width: 768px) {
        .nav-links {
            display: none;
        }
        .brand-motto {
            font-size: 7px;
            letter-spacing: 0.1em;
        }
    }
"#;
