use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config::SITE_NAME;
use crate::dom::{scroll_to_section, scroll_top};
use crate::theme::PageProps;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1758691736843-90f58dce465e?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";

// (label, section id)
const MENU_ITEMS: [(&str, &str); 4] = [
    ("WHAT IS IT", "what-it-is"),
    ("WHY IT MATTERS", "why-it-matters"),
    ("OUR INITIATIVES", "projects"),
    ("SUCCESS STORIES", "testimonials"),
];

#[function_component(Hero)]
pub fn hero(props: &PageProps) -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let scroll_callback = Closure::wrap(Box::new(move || {
                is_scrolled.set(scroll_top() > 80);
            }) as Box<dyn FnMut()>);

            let window = window();
            if let Some(window) = &window {
                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("Could not attach hero scroll listener");
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let get_started = Callback::from(|_: MouseEvent| scroll_to_section("contactUs"));

    html! {
        <div class="hero">
            <div class="hero__background">
                <img src={HERO_IMAGE} alt="Team collaboration" />
                <div class="hero__shade"></div>
            </div>

            <div class={classes!("hero__top", (*is_scrolled).then_some("scrolled"))}>
                <div class="hero__logo">
                    <img src="/logo.svg" alt="Zapminds" />
                </div>
                <div class="hero__actions">
                    <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
                    <button class="hero__cta" onclick={get_started}>
                        {"Get Started"}
                    </button>
                </div>
            </div>

            <nav class="hero__menu">
                { for MENU_ITEMS.iter().map(|(label, id)| {
                    let id = *id;
                    html! {
                        <a key={*label} onclick={Callback::from(move |_: MouseEvent| scroll_to_section(id))}>
                            {*label}
                        </a>
                    }
                }) }
            </nav>

            <div class="hero__content">
                <h1>
                    {"Studio"}
                    <br />
                    {"Zapminds"}
                </h1>
                <p>
                    {"Built to make you extraordinarily innovative by transforming moonshots into market reality."}
                </p>
            </div>

            <button
                class="hero__chat"
                aria-label={format!("Chat with {}", SITE_NAME)}
                onclick={Callback::from(|_: MouseEvent| scroll_to_section("contactUs"))}
            >
                {"💬"}
            </button>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                }
                .hero__background {
                    position: absolute;
                    inset: 0;
                }
                .hero__background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: grayscale(100%);
                }
                .hero__shade {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                }
                .hero__top {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 20;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 0.75rem;
                    padding: 1.5rem 2rem;
                    transition: background 0.3s ease, padding 0.3s ease;
                }
                .hero__top.scrolled {
                    padding: 0.75rem 2rem;
                    background: rgba(17, 24, 39, 0.8);
                    backdrop-filter: blur(12px);
                }
                .hero__logo {
                    background: #fff;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    animation: slideRight 0.6s ease-out both;
                }
                .hero__logo img { height: 3rem; object-fit: contain; }
                .hero__actions {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .hero__cta {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #1777F1;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .hero__cta:hover { transform: scale(1.05); }
                .hero__menu {
                    position: absolute;
                    right: 2rem;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    text-align: right;
                }
                .hero__menu a {
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.875rem;
                    letter-spacing: 0.1em;
                    cursor: pointer;
                    transition: color 0.2s ease, transform 0.2s ease;
                }
                .hero__menu a:hover { color: #fff; transform: translateX(-5px); }
                .hero__content {
                    position: relative;
                    z-index: 10;
                    padding: 0 2rem;
                    max-width: 48rem;
                    animation: slideUp 0.8s ease-out 0.3s both;
                }
                .hero__content h1 {
                    color: #fff;
                    font-size: clamp(3rem, 9vw, 7rem);
                    font-weight: 700;
                    line-height: 1;
                    margin-bottom: 1.5rem;
                }
                .hero__content p {
                    color: #fff;
                    font-size: 1.25rem;
                    font-weight: 300;
                    max-width: 36rem;
                }
                .hero__chat {
                    position: absolute;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 20;
                    width: 3.5rem;
                    height: 3.5rem;
                    border: none;
                    border-radius: 50%;
                    background: #1777F1;
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    animation: popIn 0.6s ease-out 0.8s both;
                }
                @keyframes slideRight {
                    from { opacity: 0; transform: translateX(-20px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes slideUp {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes popIn {
                    from { opacity: 0; transform: scale(0.5); }
                    to { opacity: 1; transform: scale(1); }
                }
                @media (max-width: 768px) {
                    .hero__menu { display: none; }
                    .hero__top { padding: 0.75rem 1rem; }
                    .hero__logo img { height: 1.75rem; }
                }
                "#}
            </style>
        </div>
    }
}
