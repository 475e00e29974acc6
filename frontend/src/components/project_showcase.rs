use yew::prelude::*;

use crate::catalog::{
    categories, category_description, filter_by_category, ALL_CATEGORY,
    GENERIC_CATEGORY_DESCRIPTION, PROJECTS,
};
use crate::components::project_card::ProjectCard;
use crate::dom::scroll_to_section;
use crate::theme::ThemeProps;

/// The portfolio section: stats, one tab per category, and the filtered cards.
#[function_component(ProjectShowcase)]
pub fn project_showcase(props: &ThemeProps) -> Html {
    let theme = props.theme;
    let active_tab = use_state(|| ALL_CATEGORY.to_string());

    let tabs = categories(PROJECTS);
    let filtered = filter_by_category(PROJECTS, &active_tab);
    let description = category_description(&active_tab).unwrap_or_else(|| {
        log::warn!("No description for category `{}`", *active_tab);
        GENERIC_CATEGORY_DESCRIPTION
    });

    let stats = [
        ("💼", format!("{}+", PROJECTS.len()), "Projects Completed"),
        ("📈", "$500M+".to_string(), "Client Revenue Generated"),
        ("🏆", "98%".to_string(), "Client Satisfaction"),
        ("⚡", "15+".to_string(), "Industries Served"),
    ];

    html! {
        <section id="projects" class={classes!("section", "showcase", theme.class())}>
            <div class="section__inner">
                <div class="section__header">
                    <span class="section-badge section-badge--gradient">{"💼 Our Initiatives"}</span>
                    <h2 class="section-title">
                        {"Transformative Projects,"}
                        <br />
                        <span class="gradient-text">{"Measurable Results"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Explore our comprehensive portfolio of cutting-edge solutions that have helped businesses across industries achieve exponential growth and digital excellence."}
                    </p>

                    <div class="showcase__stats">
                        { for stats.into_iter().map(|(icon, value, label)| html! {
                            <div class="card showcase__stat">
                                <div class="showcase__stat-icon">{icon}</div>
                                <div class="showcase__stat-value">{value}</div>
                                <div class="showcase__stat-label">{label}</div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="showcase__tabs">
                    { for tabs.into_iter().map(|category| {
                        let is_active = *active_tab == category;
                        let onclick = {
                            let active_tab = active_tab.clone();
                            let category = category.to_string();
                            Callback::from(move |_: MouseEvent| {
                                log::debug!("Showcase tab selected: {}", category);
                                active_tab.set(category.clone());
                            })
                        };
                        html! {
                            <button
                                key={category}
                                class={classes!("showcase__tab", is_active.then_some("active"))}
                                onclick={onclick}
                            >
                                {category}
                                if is_active {
                                    <span class="showcase__count">{filtered.len()}</span>
                                }
                            </button>
                        }
                    }) }
                </div>
                <p key={(*active_tab).clone()} class="showcase__description">{description}</p>

                <div key={(*active_tab).clone()} class="showcase__grid">
                    { for filtered.iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard key={project.id} project={*project} theme={theme} index={index} />
                    }) }
                </div>

                <div class="showcase__cta">
                    <h3>{"Ready to Start Your Success Story?"}</h3>
                    <p>
                        {"Let's build something extraordinary together. Partner with us to transform your vision into a market-leading digital solution."}
                    </p>
                    <button onclick={Callback::from(|_: MouseEvent| scroll_to_section("contactUs"))}>
                        {"Talk to Us"}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .showcase__stats {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    margin-top: 3rem;
                }
                .showcase__stat { transition: transform 0.3s ease; }
                .showcase__stat:hover { transform: translateY(-5px) scale(1.05); }
                .showcase__stat-icon { font-size: 1.5rem; margin-bottom: 0.75rem; }
                .showcase__stat-value { font-weight: 700; font-size: 1.5rem; }
                .showcase__stat-label { font-size: 0.875rem; opacity: 0.7; }
                .showcase__tabs {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    padding: 0.75rem;
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.8);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.08);
                }
                .theme-dark .showcase__tabs { background: rgba(31, 41, 55, 0.8); }
                .showcase__tab {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 1rem;
                    background: transparent;
                    color: #4b5563;
                    font: inherit;
                    font-weight: 500;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .theme-dark .showcase__tab { color: #9ca3af; }
                .showcase__tab:hover { transform: scale(1.05); }
                .showcase__tab.active,
                .theme-dark .showcase__tab.active {
                    color: #fff;
                    background: linear-gradient(90deg, #2563eb, #9333ea, #db2777);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .showcase__count {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.2);
                    font-size: 0.75rem;
                }
                .showcase__description {
                    text-align: center;
                    margin: 1.5rem 0 3rem;
                    opacity: 0.75;
                    animation: fadeSwap 0.3s ease-out;
                }
                .showcase__grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    animation: fadeSwap 0.4s ease-out;
                }
                @keyframes fadeSwap {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .showcase__cta {
                    margin-top: 4rem;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    text-align: center;
                    background: linear-gradient(135deg, #eff6ff, #faf5ff);
                    border: 1px solid #bfdbfe;
                }
                .theme-dark .showcase__cta {
                    background: linear-gradient(135deg, rgba(30, 58, 138, 0.3), rgba(88, 28, 135, 0.3));
                    border-color: rgba(30, 64, 175, 0.5);
                }
                .showcase__cta p { max-width: 42rem; margin: 1rem auto 1.5rem; }
                .showcase__cta button {
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #2563eb, #9333ea);
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                }

                .project-card {
                    position: relative;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: #fff;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    cursor: pointer;
                    overflow: hidden;
                    transition: box-shadow 0.3s ease, transform 0.3s ease;
                    animation: fadeSwap 0.6s ease-out both;
                }
                .project-card.theme-dark { background: #1f2937; }
                .project-card.hovered { transform: translateY(-4px); box-shadow: 0 25px 50px rgba(0, 0, 0, 0.2); }
                .project-card__image { position: relative; border-radius: 1rem; overflow: hidden; }
                .project-card__image img {
                    width: 100%;
                    height: 16rem;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }
                .project-card.hovered .project-card__image img { transform: scale(1.1); }
                .project-card__category {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.9);
                    color: #111827;
                    font-size: 0.875rem;
                }
                .project-card__metrics {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 0.75rem;
                    margin-top: 1rem;
                }
                .project-card__metric {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                    background: rgba(59, 130, 246, 0.08);
                    text-align: center;
                }
                .project-card__metric-value { font-weight: 700; }
                .project-card__metric-label { font-size: 0.75rem; opacity: 0.7; }
                .project-card__client { color: #2563eb; margin-bottom: 1rem; }
                .project-card__description { opacity: 0.8; margin-bottom: 1.5rem; }
                .project-card__tech { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 0.75rem 0 1.5rem; }
                .tech-chip {
                    padding: 0.25rem 0.75rem;
                    border-radius: 0.5rem;
                    background: #eff6ff;
                    color: #1d4ed8;
                    font-size: 0.875rem;
                }
                .theme-dark .tech-chip { background: rgba(59, 130, 246, 0.2); color: #93c5fd; }
                .tech-chip--more { background: transparent; opacity: 0.7; }
                .project-card__details {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 600;
                    color: #2563eb;
                }
                .project-card__chevron { transition: transform 0.3s ease; }
                .project-card.hovered .project-card__chevron { transform: translateX(5px); }
                .project-card__accent {
                    position: absolute;
                    top: -3rem;
                    right: -3rem;
                    width: 8rem;
                    height: 8rem;
                    border-radius: 50%;
                    background: linear-gradient(135deg, rgba(59, 130, 246, 0.3), rgba(168, 85, 247, 0.3));
                    opacity: 0.5;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .project-card.hovered .project-card__accent { transform: scale(1.2); opacity: 1; }
                @media (max-width: 900px) {
                    .showcase__stats { grid-template-columns: repeat(2, 1fr); }
                    .project-card { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
