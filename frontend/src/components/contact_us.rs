use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::CONTACT_EMAIL;
use crate::contact::{ContactField, ContactForm, ContactSubmission};
use crate::theme::ThemeProps;

// (icon, label, value, link)
const CONTACT_INFO: [(&str, &str, &str, &str); 3] = [
    ("✉️", "Email Us", CONTACT_EMAIL, "mailto:hello@zapcom.studio"),
    ("📞", "Call Us", "+1 (555) 123-4567", "tel:+15551234567"),
    ("📍", "Visit Us", "San Francisco, CA", "#"),
];

#[derive(Clone, PartialEq)]
enum Status {
    Editing,
    Sent,
    Invalid(String),
}

/// Records the submission locally. There is no endpoint to post to yet.
fn record_submission(submission: &ContactSubmission) {
    match serde_json::to_string(submission) {
        Ok(json) => {
            gloo_console::log!("Form submitted:", json);
            log::info!("Contact request from {} <{}>", submission.name, submission.email);
        }
        Err(e) => log::error!("Failed to serialize contact submission: {}", e),
    }
}

#[function_component(ContactUs)]
pub fn contact_us(props: &ThemeProps) -> Html {
    let form = use_state(ContactForm::default);
    let status = use_state(|| Status::Editing);

    let update = |field: ContactField| {
        let form = form.clone();
        let status = status.clone();
        move |value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
            if *status != Status::Editing {
                status.set(Status::Editing);
            }
        }
    };

    let input = |field: ContactField| {
        let update = update(field);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(input.value());
        })
    };

    let on_message = {
        let update = update(ContactField::Message);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            update(input.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(submission) => {
                    record_submission(&submission);
                    form.set(ContactForm::default());
                    status.set(Status::Sent);
                }
                Err(err) => {
                    log::warn!("Contact form rejected: {}", err);
                    status.set(Status::Invalid(err.to_string()));
                }
            }
        })
    };

    html! {
        <section id="contactUs" class={classes!("section", "contact", props.theme.class())}>
            <div class="contact__glow contact__glow--blue"></div>
            <div class="contact__glow contact__glow--purple"></div>

            <div class="section__inner">
                <div class="section__header">
                    <span class="section-badge section-badge--blue">{"Get In Touch"}</span>
                    <h2 class="section-title">{"Let's Build Something Amazing"}</h2>
                    <p class="section-lead">
                        {"Have a project in mind? We'd love to hear about it. Share your vision and we'll get back to you within 24 hours."}
                    </p>
                </div>

                <div class="contact__layout">
                    <form class="card contact__form" onsubmit={onsubmit}>
                        <div class="contact__row">
                            <label>
                                {format!("{} *", ContactField::Name)}
                                <input
                                    type="text"
                                    required={true}
                                    value={form.get(ContactField::Name).to_string()}
                                    oninput={input(ContactField::Name)}
                                    placeholder="John Doe"
                                />
                            </label>
                            <label>
                                {format!("{} *", ContactField::Email)}
                                <input
                                    type="email"
                                    required={true}
                                    value={form.get(ContactField::Email).to_string()}
                                    oninput={input(ContactField::Email)}
                                    placeholder="john@company.com"
                                />
                            </label>
                        </div>
                        <div class="contact__row">
                            <label>
                                {ContactField::Company.label()}
                                <input
                                    type="text"
                                    value={form.get(ContactField::Company).to_string()}
                                    oninput={input(ContactField::Company)}
                                    placeholder="Your Company"
                                />
                            </label>
                            <label>
                                {ContactField::Phone.label()}
                                <input
                                    type="tel"
                                    value={form.get(ContactField::Phone).to_string()}
                                    oninput={input(ContactField::Phone)}
                                    placeholder="+1 (555) 000-0000"
                                />
                            </label>
                        </div>
                        <label>
                            {"Tell us about your project *"}
                            <textarea
                                required={true}
                                rows="6"
                                value={form.get(ContactField::Message).to_string()}
                                oninput={on_message}
                                placeholder="Describe your project, goals, and timeline..."
                            />
                        </label>

                        {
                            match &*status {
                                Status::Sent => html! {
                                    <p class="contact__notice contact__notice--ok">{"Thanks! We'll be in touch soon."}</p>
                                },
                                Status::Invalid(message) => html! {
                                    <p class="contact__notice contact__notice--error">{message.clone()}</p>
                                },
                                Status::Editing => html! {},
                            }
                        }

                        <button type="submit" class="contact__submit">
                            {"➤ Send Message"}
                        </button>
                    </form>

                    <div class="contact__side">
                        { for CONTACT_INFO.iter().map(|(icon, label, value, link)| html! {
                            <a class="card contact__info" href={*link}>
                                <span class="contact__info-icon">{*icon}</span>
                                <span>
                                    <span class="contact__info-label">{*label}</span>
                                    <span class="contact__info-value">{*value}</span>
                                </span>
                            </a>
                        }) }

                        <div class="contact__badge">
                            <span class="contact__badge-icon">{"📅"}</span>
                            <div>
                                <h4>{"Quick Response"}</h4>
                                <p>{"We typically respond within 24 hours"}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .contact { position: relative; overflow: hidden; }
                .contact__glow {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 50%;
                    filter: blur(64px);
                    pointer-events: none;
                    animation: glowDrift 10s ease-in-out infinite;
                }
                .contact__glow--blue { top: 0; left: 25%; background: rgba(147, 197, 253, 0.3); }
                .contact__glow--purple { bottom: 0; right: 25%; background: rgba(216, 180, 254, 0.3); animation-delay: 2s; }
                .theme-dark .contact__glow--blue { background: rgba(59, 130, 246, 0.2); }
                .theme-dark .contact__glow--purple { background: rgba(168, 85, 247, 0.2); }
                @keyframes glowDrift {
                    0%, 100% { transform: translate(0, 0) scale(1); }
                    50% { transform: translate(50px, 30px) scale(1.1); }
                }
                .contact__layout {
                    position: relative;
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2rem;
                }
                .contact__form { display: flex; flex-direction: column; gap: 1.25rem; }
                .contact__row {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 1.25rem;
                }
                .contact__form label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    font-weight: 500;
                }
                .contact__form input,
                .contact__form textarea {
                    padding: 0.75rem 1rem;
                    border-radius: 0.75rem;
                    border: 2px solid #e5e7eb;
                    background: #f9fafb;
                    color: inherit;
                    font: inherit;
                }
                .theme-dark .contact__form input,
                .theme-dark .contact__form textarea {
                    border-color: #4b5563;
                    background: #374151;
                }
                .contact__form input:focus,
                .contact__form textarea:focus { outline: none; border-color: #3b82f6; }
                .contact__submit {
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: linear-gradient(90deg, #2563eb, #9333ea);
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .contact__submit:hover { transform: scale(1.02); }
                .contact__notice { padding: 0.75rem 1rem; border-radius: 0.75rem; }
                .contact__notice--ok { background: rgba(34, 197, 94, 0.15); color: #16a34a; }
                .contact__notice--error { background: rgba(239, 68, 68, 0.15); color: #dc2626; }
                .contact__side { display: flex; flex-direction: column; gap: 1rem; }
                .contact__info {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    text-decoration: none;
                    color: inherit;
                }
                .contact__info-icon { font-size: 1.5rem; }
                .contact__info-label { display: block; font-size: 0.875rem; opacity: 0.7; }
                .contact__info-value { display: block; font-weight: 600; }
                .contact__badge {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: linear-gradient(135deg, #2563eb, #9333ea);
                    color: #fff;
                }
                .contact__badge-icon { font-size: 1.75rem; }
                @media (max-width: 900px) {
                    .contact__layout { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
