use yew::prelude::*;

use crate::theme::ThemeProps;

// (size px, delay s, duration s, left, top)
const SHAPES: [(u32, u32, u32, &str, &str); 5] = [
    (300, 0, 20, "10%", "20%"),
    (200, 2, 15, "80%", "60%"),
    (150, 4, 18, "70%", "10%"),
    (250, 1, 22, "20%", "70%"),
    (180, 3, 16, "50%", "40%"),
];

/// Slowly drifting blurred blobs behind a section.
#[function_component(FloatingShapes)]
pub fn floating_shapes(props: &ThemeProps) -> Html {
    html! {
        <div class={classes!("floating-shapes", props.theme.class())}>
            { for SHAPES.iter().map(|(size, delay, duration, left, top)| html! {
                <div
                    class="floating-shape"
                    style={format!(
                        "width: {size}px; height: {size}px; left: {left}; top: {top}; animation-delay: {delay}s; animation-duration: {duration}s;"
                    )}
                />
            }) }
            <style>
                {r#"
                .floating-shapes {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                }
                .floating-shape {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                    animation-name: drift;
                    animation-iteration-count: infinite;
                    animation-timing-function: ease-in-out;
                }
                .floating-shapes.theme-light .floating-shape {
                    background: linear-gradient(135deg, rgba(191, 219, 254, 0.4), rgba(233, 213, 255, 0.4), rgba(251, 207, 232, 0.4));
                }
                .floating-shapes.theme-dark .floating-shape {
                    background: linear-gradient(135deg, rgba(59, 130, 246, 0.2), rgba(168, 85, 247, 0.2), rgba(236, 72, 153, 0.2));
                }
                @keyframes drift {
                    0%, 100% { transform: translate(0, 0) scale(1); }
                    33% { transform: translate(30px, -30px) scale(1.1); }
                    66% { transform: translate(-30px, 30px) scale(0.9); }
                }
                "#}
            </style>
        </div>
    }
}
