use yew::prelude::*;

use crate::components::floating_shapes::FloatingShapes;
use crate::theme::ThemeProps;

// (icon, title, description)
const FEATURES: [(&str, &str, &str); 4] = [
    (
        "🚀",
        "Innovation Hub",
        "We are a technology innovation studio that transforms ambitious ideas into market-ready solutions. Our team combines deep technical expertise with creative problem-solving to build products that matter.",
    ),
    (
        "🎯",
        "Strategic Partners",
        "We partner with forward-thinking companies to accelerate their digital transformation journey. From concept to deployment, we guide every step with precision and expertise.",
    ),
    (
        "💡",
        "Problem Solvers",
        "Complex challenges require innovative solutions. We specialize in tackling the toughest technical problems with cutting-edge technologies and proven methodologies.",
    ),
    (
        "⚡",
        "Rapid Execution",
        "Speed matters in today's market. Our agile approach ensures rapid prototyping, iterative development, and fast time-to-market without compromising quality.",
    ),
];

#[function_component(WhatItIs)]
pub fn what_it_is(props: &ThemeProps) -> Html {
    let theme = props.theme;

    html! {
        <section id="what-it-is" class={classes!("section", theme.class())}>
            <FloatingShapes theme={theme} />
            <div class="section__inner">
                <div class="section__header">
                    <span class="section-badge section-badge--blue">{"What It Is"}</span>
                    <h2 class="section-title">{"Who We Are & What We Do"}</h2>
                    <p class="section-lead">
                        {"Studio Zapminds is where ambitious visions become reality. We're a team of innovators, engineers, and strategists dedicated to building transformative digital solutions."}
                    </p>
                </div>

                <div class="what-grid">
                    { for FEATURES.iter().enumerate().map(|(index, (icon, title, description))| html! {
                        <div class="card what-card" style={format!("animation-delay: {}s;", index as f32 * 0.1)}>
                            <div class="what-card__icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .what-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                }
                .what-card__icon {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                    transition: transform 0.6s ease;
                }
                .what-card:hover .what-card__icon { transform: rotate(360deg) scale(1.1); }
                .what-card h3 { margin-bottom: 0.75rem; }
                "#}
            </style>
        </section>
    }
}
