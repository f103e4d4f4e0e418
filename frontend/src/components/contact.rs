use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::i18n::Lang;
use crate::state::contact::{ContactState, Field};

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub lang: Lang,
    pub state: ContactState,
    pub on_edit: Callback<(Field, String)>,
    pub on_submit: Callback<SubmitEvent>,
}

fn input_handler(field: Field, on_edit: &Callback<(Field, String)>) -> Callback<InputEvent> {
    let on_edit = on_edit.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_edit.emit((field, input.value()));
    })
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let t = props.lang.text();
    let form = &props.state.form;
    let submitting = props.state.submitting;

    let on_message = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_edit.emit((Field::Message, area.value()));
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <style>{CONTACT_CSS}</style>
            <div class="contact-grid">
                <div class="contact-info">
                    <span class="eyebrow">{t.contact.eyebrow}</span>
                    <h2>{t.contact.headline}</h2>
                    <p class="contact-intro">{t.contact.intro}</p>
                    <div class="contact-row">
                        <div class="contact-icon"><i class="fas fa-envelope"></i></div>
                        <div>
                            <span class="contact-label">{t.contact.email_label}</span>
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                        </div>
                    </div>
                    <div class="contact-row">
                        <div class="contact-icon"><i class="fas fa-location-dot"></i></div>
                        <div>
                            <span class="contact-label">{t.contact.area_label}</span>
                            <span>{t.contact.area}</span>
                        </div>
                    </div>
                    <a href={config::KAKAO_OPEN_CHAT} target="_blank" rel="noopener noreferrer" class="open-chat">
                        <i class="fas fa-comment"></i>
                        {t.contact.open_chat}
                    </a>
                </div>
                <div class="contact-form-card">
                    <h3>{t.contact.form_title}</h3>
                    <form onsubmit={props.on_submit.clone()}>
                        <div class="form-row">
                            <input
                                type="text"
                                placeholder={format!("{} *", t.contact.name)}
                                required=true
                                value={form.name.clone()}
                                oninput={input_handler(Field::Name, &props.on_edit)}
                            />
                            <input
                                type="email"
                                placeholder={format!("{} *", t.contact.email)}
                                required=true
                                value={form.email.clone()}
                                oninput={input_handler(Field::Email, &props.on_edit)}
                            />
                        </div>
                        <div class="form-row">
                            <input
                                type="text"
                                placeholder={format!("{} *", t.contact.phone)}
                                required=true
                                value={form.phone.clone()}
                                oninput={input_handler(Field::Phone, &props.on_edit)}
                            />
                            <input
                                type="text"
                                placeholder={t.contact.address}
                                value={form.address.clone()}
                                oninput={input_handler(Field::Address, &props.on_edit)}
                            />
                        </div>
                        <textarea
                            placeholder={t.contact.message}
                            rows="4"
                            value={form.message.clone()}
                            oninput={on_message}
                        />
                        <button
                            type="submit"
                            disabled={submitting}
                            class={classes!("submit-button", submitting.then(|| "busy"))}
                        >
                            <i class="fas fa-paper-plane"></i>
                            { if submitting { t.contact.sending } else { t.contact.submit } }
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

const CONTACT_CSS: &str = r#"
    .contact-section {
        padding: 4rem 1.5rem;
        background: rgba(15, 15, 15, 0.8);
    }
    .contact-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
    }
    .contact-info h2 {
        font-size: clamp(2.25rem, 5vw, 3.75rem);
        font-weight: 900;
        letter-spacing: -0.05em;
        white-space: pre-line;
        margin: 0.5rem 0 1.5rem;
    }
    .contact-intro {
        color: rgba(255, 255, 255, 0.5);
        line-height: 1.7;
        margin-bottom: 2rem;
    }
    .contact-row {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin-bottom: 1.5rem;
    }
    .contact-row a,
    .contact-row span {
        display: block;
        color: #fff;
        text-decoration: none;
        font-weight: 700;
    }
    .contact-icon {
        width: 3rem;
        height: 3rem;
        border-radius: 1rem;
        background: rgba(245, 158, 11, 0.1);
        color: #f59e0b;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .contact-row .contact-label {
        font-size: 10px;
        color: rgba(255, 255, 255, 0.4);
        text-transform: uppercase;
        letter-spacing: 0.2em;
    }
    .open-chat {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 1rem 2rem;
        border-radius: 9999px;
        background: #FEE500;
        color: #3c1e1e;
        font-weight: 900;
        text-decoration: none;
    }
    .contact-form-card {
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 2.5rem;
        padding: 2.5rem;
    }
    .contact-form-card h3 {
        font-size: 1.5rem;
        font-weight: 900;
        margin-bottom: 2rem;
    }
    .contact-form-card form {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .form-row {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1rem;
    }
    .contact-form-card input,
    .contact-form-card textarea {
        width: 100%;
        box-sizing: border-box;
        background: rgba(0, 0, 0, 0.4);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 0.75rem;
        padding: 1rem 1.25rem;
        color: #fff;
        font: inherit;
    }
    .contact-form-card input:focus,
    .contact-form-card textarea:focus {
        outline: none;
        border-color: #f59e0b;
    }
    .submit-button {
        width: 100%;
        padding: 1.25rem;
        border-radius: 0.75rem;
        border: none;
        background: #f59e0b;
        color: #000;
        font-weight: 900;
        font-size: 0.875rem;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.75rem;
        cursor: pointer;
    }
    .submit-button.busy {
        background: rgba(245, 158, 11, 0.5);
        cursor: not-allowed;
    }
    @media (max-width: 1024px) {
        .contact-grid {
            grid-template-columns: 1fr;
        }
    }
    @media (max-width: 640px) {
        .form-row {
            grid-template-columns: 1fr;
        }
    }
"#;
