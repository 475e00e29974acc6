use yew::prelude::*;

use crate::theme::ThemeProps;

// (icon, stat, label, description)
const IMPACTS: [(&str, &str, &str, &str); 4] = [
    ("📈", "500%", "Average ROI", "Our clients see significant return on investment through improved efficiency and market growth."),
    ("🛡️", "99.9%", "Uptime", "Enterprise-grade reliability and security built into every solution we deliver."),
    ("👥", "5M+", "Users Impacted", "Our solutions reach millions of end-users, creating real-world impact at scale."),
    ("🌍", "25+", "Countries", "Global reach with localized solutions serving diverse markets worldwide."),
];

const PROMISES: [&str; 3] = [
    "Scalable cloud-native architectures",
    "Security and compliance by design",
    "Continuous innovation and updates",
];

// (value, label)
const OUTCOMES: [(&str, &str); 4] = [
    ("3x", "Faster Time to Market"),
    ("40%", "Cost Reduction"),
    ("95%", "Customer Satisfaction"),
    ("98%", "Project Success Rate"),
];

#[function_component(WhyItMatters)]
pub fn why_it_matters(props: &ThemeProps) -> Html {
    let theme = props.theme;

    html! {
        <section id="why-it-matters" class={classes!("section", "section--tinted", theme.class())}>
            <div class="section__inner">
                <div class="section__header">
                    <span class="section-badge section-badge--purple">{"Why It Matters"}</span>
                    <h2 class="section-title">{"The Impact We Create"}</h2>
                    <p class="section-lead">
                        {"In a rapidly evolving digital landscape, partnering with the right technology team can be the difference between leading the market and falling behind. We don't just build software, we create competitive advantages."}
                    </p>
                </div>

                <div class="impact-grid">
                    { for IMPACTS.iter().map(|(icon, stat, label, description)| html! {
                        <div class="card impact-card">
                            <div class="impact-card__icon">{*icon}</div>
                            <div class="impact-card__stat">{*stat}</div>
                            <div class="impact-card__label">{*label}</div>
                            <p>{*description}</p>
                        </div>
                    }) }
                </div>

                <div class="future-panel">
                    <div>
                        <h3>{"Future-Proof Your Business"}</h3>
                        <p>
                            {"Technology moves fast. We help you stay ahead with scalable, maintainable solutions built on cutting-edge architectures. Our expertise ensures your investment today continues delivering value tomorrow."}
                        </p>
                        <ul>
                            { for PROMISES.iter().map(|promise| html! { <li>{"✓ "}{*promise}</li> }) }
                        </ul>
                    </div>
                    <div class="outcome-grid">
                        { for OUTCOMES.iter().map(|(value, label)| html! {
                            <div class="outcome">
                                <div class="outcome__value">{*value}</div>
                                <div class="outcome__label">{*label}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .impact-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                    margin-bottom: 4rem;
                }
                .impact-card { text-align: center; }
                .impact-card__icon { font-size: 1.75rem; margin-bottom: 1rem; }
                .impact-card__stat {
                    font-size: 2.25rem;
                    font-weight: 700;
                    background: linear-gradient(90deg, #2563eb, #9333ea);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .impact-card__label { font-weight: 600; margin-bottom: 0.5rem; }
                .future-panel {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 3rem;
                    align-items: center;
                    padding: 3rem;
                    border-radius: 1.5rem;
                    background: linear-gradient(135deg, #2563eb, #9333ea);
                    color: #fff;
                }
                .future-panel h3 { font-size: 1.75rem; margin-bottom: 1rem; }
                .future-panel ul { list-style: none; padding: 0; margin-top: 1.5rem; }
                .future-panel li { margin-bottom: 0.5rem; }
                .outcome-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }
                .outcome {
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(8px);
                    text-align: center;
                }
                .outcome__value { font-size: 2rem; font-weight: 700; }
                .outcome__label { font-size: 0.875rem; opacity: 0.9; }
                "#}
            </style>
        </section>
    }
}
