use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::contact::ContactSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::lightbox::LightboxView;
use crate::components::nav::NavBar;
use crate::components::philosophy::Philosophy;
use crate::components::portfolio::Portfolio;
use crate::components::services::Services;
use crate::config;
use crate::content::{Category, PortfolioItem};
use crate::i18n::Lang;
use crate::state::contact::{deliver, ContactAction, ContactState, Field};
use crate::state::filter::PortfolioFilter;
use crate::state::lightbox::Lightbox;
use crate::state::share::share_page;
use crate::utils::api::Web3Forms;
use crate::utils::browser::{self, BodyScrollLock, BrowserHistory, KakaoSdk};

/// Registers a window listener and returns the matching teardown.
fn listen<E, F>(event: &'static str, handler: F) -> Box<dyn FnOnce()>
where
    E: JsCast + 'static,
    F: Fn(E) + 'static,
{
    let Some(window) = web_sys::window() else {
        return Box::new(|| ());
    };
    let callback = Closure::<dyn Fn(web_sys::Event)>::new(move |e: web_sys::Event| {
        if let Ok(e) = e.dyn_into::<E>() {
            handler(e);
        }
    });
    if let Err(e) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        log::warn!("Could not listen for {}: {:?}", event, e);
        return Box::new(|| ());
    }
    Box::new(move || {
        if let Some(win) = web_sys::window() {
            let _ = win.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }
    })
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let lang = use_state(Lang::default);
    let filter = use_state(PortfolioFilter::default);
    let lightbox = use_state(Lightbox::default);
    let contact = use_reducer(ContactState::default);

    // Back button closes the overlay. The entry is already consumed, so no
    // further navigation happens here.
    {
        let lightbox = lightbox.clone();
        let open_id = lightbox.selected().map(|item| item.id);
        use_effect_with_deps(
            move |open_id| {
                let destructor: Box<dyn FnOnce()> = if open_id.is_some() {
                    listen("popstate", move |_: web_sys::PopStateEvent| {
                        let mut next = (*lightbox).clone();
                        next.on_history_back(&BodyScrollLock);
                        lightbox.set(next);
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            open_id,
        );
    }

    // Keyboard control while the overlay is open
    {
        let lightbox = lightbox.clone();
        let deps = (lightbox.selected().map(|item| item.id), lightbox.current_index());
        use_effect_with_deps(
            move |(open_id, _)| {
                let destructor: Box<dyn FnOnce()> = if open_id.is_some() {
                    listen("keydown", move |e: KeyboardEvent| {
                        let mut next = (*lightbox).clone();
                        match e.key().as_str() {
                            "Escape" => next.close(&BrowserHistory, &BodyScrollLock),
                            "ArrowRight" => next.next(),
                            "ArrowLeft" => next.previous(),
                            _ => return,
                        }
                        lightbox.set(next);
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            deps,
        );
    }

    let on_toggle_lang = {
        let lang = lang.clone();
        Callback::from(move |_: ()| {
            let next = lang.toggle();
            log::debug!("Switching language to {}", next.code());
            lang.set(next);
        })
    };

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |f: PortfolioFilter| filter.set(f))
    };

    let on_service = {
        let filter = filter.clone();
        Callback::from(move |category: Category| {
            filter.set(category.into());
            browser::scroll_to_section("portfolio");
        })
    };

    let on_open = {
        let lightbox = lightbox.clone();
        Callback::from(move |item: &'static PortfolioItem| {
            let mut next = (*lightbox).clone();
            next.open(item, &BrowserHistory, &BodyScrollLock);
            lightbox.set(next);
        })
    };

    let update_lightbox = |apply: fn(&mut Lightbox)| {
        let lightbox = lightbox.clone();
        Callback::from(move |_: ()| {
            let mut next = (*lightbox).clone();
            apply(&mut next);
            lightbox.set(next);
        })
    };
    let on_close = update_lightbox(|lb| lb.close(&BrowserHistory, &BodyScrollLock));
    let on_next = update_lightbox(Lightbox::next);
    let on_previous = update_lightbox(Lightbox::previous);

    let on_select = {
        let lightbox = lightbox.clone();
        Callback::from(move |idx: usize| {
            let mut next = (*lightbox).clone();
            if next.select_image(idx) {
                lightbox.set(next);
            }
        })
    };

    let on_contact_cta = {
        let lightbox = lightbox.clone();
        Callback::from(move |_: ()| {
            let mut next = (*lightbox).clone();
            next.close(&BrowserHistory, &BodyScrollLock);
            lightbox.set(next);
            browser::scroll_to_section("contact");
        })
    };

    let on_share = {
        let lang = *lang;
        Callback::from(move |_: ()| {
            if let Err(e) = share_page(&KakaoSdk, config::kakao_app_key(), config::kakao_share_template()) {
                log::error!("Kakao share error: {}", e);
                browser::alert(e.notice(lang));
            }
        })
    };

    let on_refresh = Callback::from(|_: ()| browser::hard_refresh());

    let on_edit = {
        let contact = contact.clone();
        Callback::from(move |(field, value): (Field, String)| {
            contact.dispatch(ContactAction::Edit(field, value));
        })
    };

    let on_submit = {
        let contact = contact.clone();
        let lang = *lang;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Same check the reducer runs on Begin; here it yields the lead to send.
            let lead = match (*contact).clone().begin_submit() {
                Ok(lead) => lead,
                Err(err) => {
                    log::warn!("Submission blocked: {}", err);
                    if let Some(notice) = err.notice(lang) {
                        browser::alert(notice);
                    }
                    return;
                }
            };
            contact.dispatch(ContactAction::Begin);
            let contact = contact.clone();
            spawn_local(async move {
                let outcome = deliver(&Web3Forms::default(), &lead).await;
                let notice = outcome.notice(lang);
                contact.dispatch(ContactAction::Finish(outcome));
                browser::alert(&notice);
            });
        })
    };

    html! {
        <div class="landing-page">
            <style>{PAGE_CSS}</style>
            <div class="page-glow"></div>
            <NavBar lang={*lang} on_toggle_lang={on_toggle_lang} />
            <Hero lang={*lang} on_share={on_share.clone()} />
            <Philosophy lang={*lang} />
            <Services lang={*lang} on_select={on_service} />
            <Portfolio lang={*lang} filter={*filter} on_filter={on_filter} on_open={on_open} />
            <ContactSection lang={*lang} state={(*contact).clone()} on_edit={on_edit} on_submit={on_submit} />
            <Footer lang={*lang} on_share={on_share} on_refresh={on_refresh} />
            <LightboxView
                lang={*lang}
                state={(*lightbox).clone()}
                on_close={on_close}
                on_next={on_next}
                on_previous={on_previous}
                on_select={on_select}
                on_contact={on_contact_cta}
            />
        </div>
    }
}

const PAGE_CSS: &str = r#"
    html {
        scroll-behavior: smooth;
    }
    body {
        margin: 0;
        background: #0a0a0a;
        color: #fff;
        font-family: 'Outfit', 'Noto Sans KR', sans-serif;
        -webkit-font-smoothing: antialiased;
    }
    .landing-page {
        min-height: 100vh;
        background: rgba(10, 10, 10, 0.95);
    }
    .page-glow {
        position: fixed;
        inset: 0;
        pointer-events: none;
        background: radial-gradient(circle at 50% 0%, rgba(245, 158, 11, 0.05), transparent 50%);
    }
    section[id] {
        scroll-margin-top: 5rem;
    }
"#;
