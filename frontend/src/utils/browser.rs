//! Thin adapters over `window`, `document` and the Kakao global.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys::{self, Array, Function, Object, Reflect};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ServiceWorkerRegistration};

use crate::state::lightbox::{ModalHistory, ScrollLock};
use crate::state::share::{ShareError, ShareSdk};

const MODAL_KEY: &str = "modal";

pub struct BrowserHistory;

impl ModalHistory for BrowserHistory {
    fn modal_entry_active(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.history().ok())
            .and_then(|h| h.state().ok())
            .filter(|state| state.is_object())
            .and_then(|state| Reflect::get(&state, &JsValue::from_str(MODAL_KEY)).ok())
            .and_then(|flag| flag.as_bool())
            .unwrap_or(false)
    }

    fn push_modal_entry(&self) {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        let state = Object::new();
        if Reflect::set(&state, &JsValue::from_str(MODAL_KEY), &JsValue::TRUE).is_err() {
            return;
        }
        if let Err(e) = history.push_state(&state, "") {
            log::warn!("pushState failed: {:?}", e);
        }
    }

    fn go_back(&self) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.back() {
                log::warn!("history.back failed: {:?}", e);
            }
        }
    }
}

pub struct BodyScrollLock;

impl ScrollLock for BodyScrollLock {
    fn set_scroll_locked(&self, locked: bool) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let value = if locked { "hidden" } else { "unset" };
        let _ = body.style().set_property("overflow", value);
    }
}

/// `window.Kakao`, looked up on every call since the script loads async.
pub struct KakaoSdk;

impl KakaoSdk {
    fn global() -> Option<JsValue> {
        Reflect::get(&js_sys::global(), &JsValue::from_str("Kakao"))
            .ok()
            .filter(|k| !k.is_undefined() && !k.is_null())
    }

    fn call(target: &JsValue, method: &str, args: &Array) -> Result<JsValue, JsValue> {
        let func: Function = Reflect::get(target, &JsValue::from_str(method))?.dyn_into()?;
        Reflect::apply(&func, target, args)
    }
}

impl ShareSdk for KakaoSdk {
    fn is_loaded(&self) -> bool {
        Self::global().is_some()
    }

    fn is_initialized(&self) -> bool {
        Self::global()
            .and_then(|k| Self::call(&k, "isInitialized", &Array::new()).ok())
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    fn init(&self, app_key: &str) -> Result<(), ShareError> {
        let kakao = Self::global().ok_or(ShareError::SdkMissing)?;
        Self::call(&kakao, "init", &Array::of1(&JsValue::from_str(app_key)))
            .map(|_| ())
            .map_err(|e| ShareError::Init(format!("{:?}", e)))
    }

    fn send_custom(&self, template_id: u64) -> Result<(), ShareError> {
        let kakao = Self::global().ok_or(ShareError::SdkMissing)?;
        let share = Reflect::get(&kakao, &JsValue::from_str("Share"))
            .map_err(|e| ShareError::Send(format!("{:?}", e)))?;
        let options = Object::new();
        Reflect::set(
            &options,
            &JsValue::from_str("templateId"),
            &JsValue::from_f64(template_id as f64),
        )
        .map_err(|e| ShareError::Send(format!("{:?}", e)))?;
        Self::call(&share, "sendCustom", &Array::of1(&options))
            .map(|_| ())
            .map_err(|e| ShareError::Send(format!("{:?}", e)))
    }
}

/// Blocking notice.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Drops every service worker registration and reloads, so a stale cached
/// bundle gets replaced.
pub fn hard_refresh() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();
    let supported = Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if !supported {
        let _ = window.location().reload();
        return;
    }
    spawn_local(async move {
        let container = navigator.service_worker();
        match JsFuture::from(container.get_registrations()).await {
            Ok(list) => {
                for entry in Array::from(&list).iter() {
                    if let Ok(registration) = entry.dyn_into::<ServiceWorkerRegistration>() {
                        let _ = registration.unregister();
                    }
                }
            }
            Err(e) => log::warn!("Could not list service workers: {:?}", e),
        }
        let _ = window.location().reload();
    });
}
