use yew::prelude::*;

use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let label = match props.theme {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    };

    html! {
        <button
            class={classes!("theme-toggle", props.theme.class())}
            onclick={onclick}
            aria-label={label}
            title={label}
        >
            {props.theme.toggle_icon()}
            <style>
                {r#"
                .theme-toggle {
                    padding: 0.6rem 0.75rem;
                    border: none;
                    border-radius: 0.5rem;
                    font-size: 1.1rem;
                    cursor: pointer;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    transition: transform 0.3s ease, background 0.3s ease;
                    animation: toggleIn 0.4s ease-out 0.5s both;
                }
                .theme-toggle:hover { transform: rotate(180deg); }
                .theme-toggle:active { transform: scale(0.9); }
                .theme-toggle.theme-light { background: #111827; color: #facc15; }
                .theme-toggle.theme-dark { background: #facc15; color: #111827; }
                @keyframes toggleIn {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </button>
    }
}
