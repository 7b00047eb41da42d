//! Contact section: info card plus the form that posts to the worker relay.

use gloo::net::http::Request;
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use hoshikuzu_core::contact::ContactMessage;

use crate::i18n::I18n;

const CONTACT_ENDPOINT: &str = "/api/contact";
const STATUS_RESET_MS: u32 = 3000;

const CONTACT_EMAIL: &str = "jan@hoshikuzu.dev";
const CONTACT_LOCATION: &str = "Osaka, Japan";
const GITHUB_URL: &str = "https://github.com/sugoijan";
const LINKEDIN_URL: &str = "https://linkedin.com/in/sugoijan";

#[derive(Clone, Copy, PartialEq, Eq)]
enum SubmitStatus {
    Idle,
    Sending,
    Success,
    Error,
}

#[derive(Properties, PartialEq)]
pub(crate) struct ContactSectionProps {
    pub i18n: I18n,
}

#[function_component(ContactSection)]
pub(crate) fn contact_section(props: &ContactSectionProps) -> Html {
    let t = &props.i18n;
    let form = use_state(ContactMessage::default);
    let status = use_state(|| SubmitStatus::Idle);
    let reset_timer = use_mut_ref(|| Option::<Timeout>::None);

    let on_input = |field: fn(&mut ContactMessage, String)| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            field(&mut next, input.value());
            form.set(next);
        })
    };

    let on_message_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let area: HtmlTextAreaElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = area.value();
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *status == SubmitStatus::Sending {
                return;
            }
            let message = (*form).clone();
            if message.validate().is_err() {
                set_status_with_reset(&status, &reset_timer, SubmitStatus::Error);
                return;
            }
            status.set(SubmitStatus::Sending);
            let form = form.clone();
            let status = status.clone();
            let reset_timer = reset_timer.clone();
            spawn_local(async move {
                let sent = send_message(&message).await;
                if sent {
                    form.set(ContactMessage::default());
                    set_status_with_reset(&status, &reset_timer, SubmitStatus::Success);
                } else {
                    set_status_with_reset(&status, &reset_timer, SubmitStatus::Error);
                }
            });
        })
    };

    let submit_area = match *status {
        SubmitStatus::Idle | SubmitStatus::Sending => html! {
            <button
                type="submit"
                class="contact-submit"
                disabled={*status == SubmitStatus::Sending}
            >
                {
                    if *status == SubmitStatus::Sending {
                        t.text("contact.send.sendLoading")
                    } else {
                        t.text("contact.send.sendButton")
                    }
                }
            </button>
        },
        SubmitStatus::Success => html! {
            <div class="contact-status contact-status-success">
                { t.text("contact.send.sendSuccess") }
            </div>
        },
        SubmitStatus::Error => html! {
            <div class="contact-status contact-status-error">
                { t.text("contact.send.sendError") }
            </div>
        },
    };

    html! {
        <section id="contact" class="section contact-section">
            <h2 class="section-title">{ t.text("contact.title") }</h2>
            <div class="contact-columns">
                <div class="contact-card">
                    <h3>{ t.text("contact.info.title") }</h3>
                    <div class="contact-row">
                        <span class="contact-row-label">{ t.text("contact.info.email") }</span>
                        <a href={format!("mailto:{CONTACT_EMAIL}")}>{ CONTACT_EMAIL }</a>
                    </div>
                    <div class="contact-row">
                        <span class="contact-row-label">{ t.text("contact.info.location") }</span>
                        <span>{ CONTACT_LOCATION }</span>
                    </div>
                    <h4>{ t.text("contact.info.socials") }</h4>
                    <div class="contact-socials">
                        <a href={GITHUB_URL} target="_blank" rel="noopener noreferrer">{ "GitHub" }</a>
                        <a href={LINKEDIN_URL} target="_blank" rel="noopener noreferrer">{ "LinkedIn" }</a>
                        <a href={format!("mailto:{CONTACT_EMAIL}")}>{ "Mail" }</a>
                    </div>
                </div>
                <form class="contact-card contact-form" onsubmit={onsubmit}>
                    <h3>{ t.text("contact.send.title") }</h3>
                    <label for="contact-name">{ t.text("contact.send.name.title") }</label>
                    <input
                        id="contact-name"
                        type="text"
                        required=true
                        value={form.name.clone()}
                        placeholder={t.text("contact.send.name.placeholder")}
                        oninput={on_input(|message, value| message.name = value)}
                    />
                    <label for="contact-email">{ t.text("contact.send.email.title") }</label>
                    <input
                        id="contact-email"
                        type="email"
                        required=true
                        value={form.email.clone()}
                        placeholder={t.text("contact.send.email.placeholder")}
                        oninput={on_input(|message, value| message.email = value)}
                    />
                    <label for="contact-subject">{ t.text("contact.send.subject.title") }</label>
                    <input
                        id="contact-subject"
                        type="text"
                        required=true
                        value={form.subject.clone()}
                        placeholder={t.text("contact.send.subject.placeholder")}
                        oninput={on_input(|message, value| message.subject = value)}
                    />
                    <label for="contact-message">{ t.text("contact.send.message.title") }</label>
                    <textarea
                        id="contact-message"
                        required=true
                        rows="5"
                        value={form.message.clone()}
                        placeholder={t.text("contact.send.message.placeholder")}
                        oninput={on_message_input}
                    />
                    { submit_area }
                </form>
            </div>
        </section>
    }
}

async fn send_message(message: &ContactMessage) -> bool {
    let request = match Request::post(CONTACT_ENDPOINT).json(message) {
        Ok(request) => request,
        Err(err) => {
            gloo::console::warn!("contact encode failed", err.to_string());
            return false;
        }
    };
    match request.send().await {
        Ok(response) => response.ok(),
        Err(err) => {
            gloo::console::warn!("contact send failed", err.to_string());
            false
        }
    }
}

fn set_status_with_reset(
    status: &UseStateHandle<SubmitStatus>,
    reset_timer: &std::rc::Rc<std::cell::RefCell<Option<Timeout>>>,
    next: SubmitStatus,
) {
    status.set(next);
    let status = status.clone();
    let timeout = Timeout::new(STATUS_RESET_MS, move || {
        status.set(SubmitStatus::Idle);
    });
    *reset_timer.borrow_mut() = Some(timeout);
}
