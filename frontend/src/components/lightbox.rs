use yew::prelude::*;

use crate::components::portfolio::render_description;
use crate::config;
use crate::i18n::Lang;
use crate::state::lightbox::Lightbox;

#[derive(Properties, PartialEq)]
pub struct LightboxViewProps {
    pub lang: Lang,
    pub state: Lightbox,
    pub on_close: Callback<()>,
    pub on_next: Callback<()>,
    pub on_previous: Callback<()>,
    pub on_select: Callback<usize>,
    /// Closes the overlay and moves to the contact form.
    pub on_contact: Callback<()>,
}

fn stop_then(cb: &Callback<()>) -> Callback<MouseEvent> {
    let cb = cb.clone();
    Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        cb.emit(());
    })
}

#[function_component(LightboxView)]
pub fn lightbox_view(props: &LightboxViewProps) -> Html {
    let Some(item) = props.state.selected() else {
        return html! {};
    };
    let t = props.lang.text();
    let images = props.state.images();
    let current = props.state.current_index();

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_contact = {
        let on_contact = props.on_contact.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            on_contact.emit(());
        })
    };

    html! {
        <div class="lightbox-backdrop" onclick={on_backdrop}>
            <style>{LIGHTBOX_CSS}</style>
            <button class="lightbox-close" aria-label={t.lightbox.close} onclick={stop_then(&props.on_close)}>
                <i class="fas fa-xmark"></i>
            </button>
            <div class="lightbox-panel" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="lightbox-media">
                    if let Some(image) = props.state.current_image() {
                        <img
                            key={image}
                            src={config::asset(image)}
                            alt={item.title_en}
                            class="lightbox-image"
                            onclick={stop_then(&props.on_next)}
                        />
                    }
                    if props.state.shows_staging_notice() {
                        <div class="staging-notice">{t.lightbox.staging_notice}</div>
                    }
                    if props.state.has_navigation() {
                        <>
                            <button class="lightbox-arrow left" aria-label={t.lightbox.previous} onclick={stop_then(&props.on_previous)}>
                                <i class="fas fa-chevron-left"></i>
                            </button>
                            <button class="lightbox-arrow right" aria-label={t.lightbox.next} onclick={stop_then(&props.on_next)}>
                                <i class="fas fa-chevron-right"></i>
                            </button>
                        </>
                    }
                    <div class="lightbox-pager">
                        if props.state.has_navigation() {
                            <div class="thumbnails">
                                { for images.iter().enumerate().map(|(idx, img)| {
                                    let on_select = props.on_select.clone();
                                    html! {
                                        <button
                                            key={idx.to_string()}
                                            class={classes!("thumbnail", (idx == current).then(|| "active"))}
                                            onclick={Callback::from(move |e: MouseEvent| {
                                                e.stop_propagation();
                                                on_select.emit(idx);
                                            })}
                                        >
                                            <img src={config::asset(img)} alt={t.lightbox.thumbnail} />
                                        </button>
                                    }
                                }) }
                            </div>
                        }
                        <div class="dots">
                            { for (0..images.len()).map(|idx| html! {
                                <div key={idx.to_string()} class={classes!("dot", (idx == current).then(|| "active"))}></div>
                            }) }
                        </div>
                    </div>
                </div>
                <div class="lightbox-info">
                    <span class="project-category">{item.category.as_str()}</span>
                    <h2>{item.title(props.lang)}</h2>
                    <div class="divider"></div>
                    <p>{render_description(item.description(props.lang))}</p>
                    <a href="#contact" class="lightbox-cta" onclick={on_contact}>
                        {t.nav.contact}
                        <i class="fas fa-chevron-right"></i>
                    </a>
                </div>
            </div>
        </div>
    }
}

const LIGHTBOX_CSS: &str = r#"
    .lightbox-backdrop {
        position: fixed;
        inset: 0;
        z-index: 100;
        background: rgba(0, 0, 0, 0.95);
        backdrop-filter: blur(24px);
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
    }
    .lightbox-close {
        position: absolute;
        top: 1.5rem;
        right: 1.5rem;
        z-index: 110;
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        border: none;
        background: rgba(255, 255, 255, 0.1);
        color: #fff;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .lightbox-panel {
        width: 100%;
        max-width: 80rem;
        max-height: 100%;
        display: grid;
        grid-template-columns: 2fr 1fr;
        background: #0f0f0f;
        border-radius: 2rem;
        overflow: hidden;
        border: 1px solid rgba(255, 255, 255, 0.1);
    }
    .lightbox-media {
        position: relative;
        background: #000;
        display: flex;
        align-items: center;
        justify-content: center;
        min-height: 50vh;
    }
    .lightbox-image {
        max-width: 100%;
        max-height: 80vh;
        object-fit: contain;
        cursor: pointer;
    }
    .staging-notice {
        position: absolute;
        top: 1rem;
        left: 50%;
        transform: translateX(-50%);
        padding: 0.5rem 1rem;
        border-radius: 9999px;
        background: rgba(0, 0, 0, 0.7);
        color: rgba(255, 255, 255, 0.8);
        font-size: 0.7rem;
        white-space: nowrap;
    }
    .lightbox-arrow {
        position: absolute;
        top: 50%;
        transform: translateY(-50%);
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        border: none;
        background: rgba(0, 0, 0, 0.5);
        color: #fff;
        cursor: pointer;
    }
    .lightbox-arrow.left { left: 1rem; }
    .lightbox-arrow.right { right: 1rem; }
    .lightbox-pager {
        position: absolute;
        bottom: 1rem;
        left: 0;
        right: 0;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.75rem;
    }
    .thumbnails {
        display: flex;
        gap: 0.5rem;
    }
    .thumbnail {
        width: 3rem;
        height: 3rem;
        padding: 0;
        border-radius: 0.5rem;
        overflow: hidden;
        border: 2px solid transparent;
        opacity: 0.5;
        cursor: pointer;
    }
    .thumbnail.active {
        border-color: #f59e0b;
        opacity: 1;
        transform: scale(1.1);
    }
    .thumbnail img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .dots {
        display: flex;
        gap: 0.5rem;
    }
    .dot {
        height: 4px;
        width: 8px;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.2);
        transition: all 0.3s;
    }
    .dot.active {
        width: 2rem;
        background: #f59e0b;
    }
    .lightbox-info {
        padding: 3rem;
        display: flex;
        flex-direction: column;
        justify-content: center;
        overflow-y: auto;
    }
    .lightbox-info h2 {
        font-size: 2rem;
        font-weight: 900;
        margin: 0.5rem 0 1rem;
    }
    .divider {
        width: 3rem;
        height: 4px;
        background: #f59e0b;
        margin-bottom: 1.5rem;
    }
    .lightbox-info p {
        color: rgba(255, 255, 255, 0.6);
        line-height: 1.7;
        word-break: keep-all;
    }
    .lightbox-cta {
        margin-top: 2rem;
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        color: #f59e0b;
        font-weight: 900;
        text-transform: uppercase;
        text-decoration: none;
    }
    @media (max-width: 1024px) {
        .lightbox-panel {
            grid-template-columns: 1fr;
            overflow-y: auto;
        }
        .lightbox-info {
            padding: 1.5rem;
        }
    }
"#;
