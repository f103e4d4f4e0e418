use yew::prelude::*;

use crate::config;
use crate::content::Category;
use crate::i18n::{Lang, ServiceCopy};

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub lang: Lang,
    /// Fired when a tile is clicked; the page filters and scrolls to the gallery.
    pub on_select: Callback<Category>,
}

#[derive(Properties, PartialEq)]
struct ServiceTileProps {
    category: Category,
    icon: &'static str,
    copy: &'static ServiceCopy,
    highlighted: bool,
    on_select: Callback<Category>,
}

#[function_component(ServiceTile)]
fn service_tile(props: &ServiceTileProps) -> Html {
    let onclick = {
        let on_select = props.on_select.clone();
        let category = props.category;
        Callback::from(move |_: MouseEvent| on_select.emit(category))
    };
    html! {
        <div class="service-tile" onclick={onclick}>
            <div class={classes!("service-icon", props.highlighted.then(|| "highlighted"))}>
                <i class={props.icon}></i>
            </div>
            <h3>{props.copy.title}</h3>
            <p>{props.copy.desc}</p>
        </div>
    }
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let t = props.lang.text();
    html! {
        <section id="services" class="services-section">
            <style>{SERVICES_CSS}</style>
            <div class="services-inner">
                <div class="services-header">
                    <div>
                        <span class="eyebrow">{t.services.eyebrow}</span>
                        <h2>{t.nav.services}</h2>
                    </div>
                    <p class="services-subtitle">{t.services.subtitle}</p>
                </div>
                <div class="services-grid">
                    <ServiceTile
                        category={Category::Kitchen}
                        icon="fas fa-utensils"
                        copy={&t.services.kitchen}
                        highlighted=true
                        on_select={props.on_select.clone()}
                    />
                    <ServiceTile
                        category={Category::Bath}
                        icon="fas fa-droplet"
                        copy={&t.services.bath}
                        highlighted=false
                        on_select={props.on_select.clone()}
                    />
                    <ServiceTile
                        category={Category::Improvement}
                        icon="fas fa-house"
                        copy={&t.services.improvement}
                        highlighted=false
                        on_select={props.on_select.clone()}
                    />
                </div>
                <div class="partner-links">
                    <a href={config::FLICKR} target="_blank" rel="noopener noreferrer">
                        <i class="fab fa-flickr"></i>
                        <span>{"Flickr Gallery"}</span>
                    </a>
                    <a href={config::YOUTUBE} target="_blank" rel="noopener noreferrer">
                        <i class="fab fa-youtube"></i>
                        <span>{"YouTube"}</span>
                    </a>
                    <a href={config::HOME_SOLUTION} target="_blank" rel="noopener noreferrer">
                        <i class="fas fa-clock"></i>
                        <span>{"aeZ-HomeSolution"}</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

const SERVICES_CSS: &str = r#"
    .services-section {
        padding: 4rem 1.5rem;
        background: rgba(15, 15, 15, 0.8);
    }
    .services-inner {
        max-width: 80rem;
        margin: 0 auto;
    }
    .services-header {
        display: flex;
        justify-content: space-between;
        align-items: flex-end;
        gap: 2rem;
        margin-bottom: 4rem;
    }
    .services-header h2 {
        font-size: clamp(2.25rem, 5vw, 3.75rem);
        font-weight: 900;
        letter-spacing: -0.05em;
        margin: 0.5rem 0 0;
    }
    .services-subtitle {
        max-width: 28rem;
        color: rgba(255, 255, 255, 0.4);
        font-size: 0.875rem;
        border-left: 1px solid rgba(245, 158, 11, 0.3);
        padding-left: 1.5rem;
        line-height: 1.7;
    }
    .services-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .service-tile {
        background: rgba(255, 255, 255, 0.05);
        padding: 2.5rem;
        border-radius: 2.5rem;
        border: 1px solid rgba(255, 255, 255, 0.05);
        cursor: pointer;
        transition: all 0.5s;
    }
    .service-tile:hover {
        background: rgba(255, 255, 255, 0.1);
        border-color: rgba(245, 158, 11, 0.2);
    }
    .service-tile h3 {
        font-size: 1.5rem;
        font-weight: 900;
        font-style: italic;
        text-transform: uppercase;
        margin-bottom: 1.5rem;
    }
    .service-tile:hover h3 {
        color: #f59e0b;
    }
    .service-tile p {
        color: rgba(255, 255, 255, 0.5);
        line-height: 1.7;
        word-break: keep-all;
    }
    .service-icon {
        width: 4rem;
        height: 4rem;
        border-radius: 1rem;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.75rem;
        margin-bottom: 2rem;
        background: rgba(255, 255, 255, 0.1);
        color: #fff;
    }
    .service-icon.highlighted,
    .service-tile:hover .service-icon {
        background: #f59e0b;
        color: #000;
    }
    .partner-links {
        margin-top: 3rem;
        display: flex;
        justify-content: center;
        gap: 3rem;
    }
    .partner-links a {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.5rem;
        color: rgba(255, 255, 255, 0.4);
        text-decoration: none;
        font-size: 2rem;
    }
    .partner-links span {
        font-size: 0.7rem;
        font-weight: 700;
        text-transform: uppercase;
        letter-spacing: 0.1em;
    }
    @media (max-width: 768px) {
        .services-header {
            flex-direction: column;
            align-items: flex-start;
        }
        .services-grid {
            grid-template-columns: 1fr;
        }
    }
"#;
