use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::{find_by_id, Project, PROJECTS};
use crate::components::{footer::Footer, theme_toggle::ThemeToggle};
use crate::theme::Theme;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub id: String,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(ProjectDetail)]
pub fn project_detail(props: &ProjectDetailProps) -> Html {
    match find_by_id(PROJECTS, &props.id) {
        Ok(project) => html! {
            <ProjectView
                project={project}
                theme={props.theme}
                on_toggle_theme={props.on_toggle_theme.clone()}
            />
        },
        Err(e) => {
            log::info!("Showing not-found page: {}", e);
            html! { <NotFound theme={props.theme} /> }
        }
    }
}

fn go_home(navigator: Option<Navigator>) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| match &navigator {
        Some(navigator) => navigator.push(&Route::Home),
        None => log::error!("No router available to navigate home"),
    })
}

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub theme: Theme,
}

/// Fallback for an unknown project id or path, with a way back to the catalog.
#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    let onclick = go_home(use_navigator());

    html! {
        <div class={classes!("not-found", props.theme.class())}>
            <div>
                <h2>{"Project not found"}</h2>
                <button onclick={onclick}>{"Go Back Home"}</button>
            </div>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                }
                .not-found.theme-light { background: #fff; color: #111827; }
                .not-found.theme-dark { background: #111827; color: #fff; }
                .not-found button {
                    margin-top: 1rem;
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #2563eb;
                    color: #fff;
                    cursor: pointer;
                }
                .not-found button:hover { background: #1d4ed8; }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectViewProps {
    project: &'static Project,
    theme: Theme,
    on_toggle_theme: Callback<()>,
}

#[function_component(ProjectView)]
fn project_view(props: &ProjectViewProps) -> Html {
    let ProjectViewProps { project, theme, on_toggle_theme } = props;
    let back = go_home(use_navigator());

    html! {
        <div class={classes!("page", "detail", theme.class())}>
            <div class="detail__header">
                <button class="detail__back" onclick={back}>
                    {"← "}
                    <span class="wide-only">{"Back to Projects"}</span>
                    <span class="narrow-only">{"Back"}</span>
                </button>
                <div class="detail__header-actions">
                    <ThemeToggle theme={*theme} on_toggle={on_toggle_theme.clone()} />
                    <button class="detail__visit">
                        {"↗ "}
                        <span class="wide-only">{"Visit Live Project"}</span>
                        <span class="narrow-only">{"Visit"}</span>
                    </button>
                </div>
            </div>

            <section class="detail__hero">
                <img src={project.image} alt={project.title} />
                <div class="detail__hero-shade"></div>
                <div class="detail__hero-text">
                    <span class="detail__category">{project.category}</span>
                    <h1>{project.title}</h1>
                    <p>{project.client}</p>
                </div>
            </section>

            <section class="detail__metrics">
                { for project.metrics.iter().map(|metric| html! {
                    <div class="detail__metric">
                        <div class="detail__metric-icon">
                            { metric.icon().map(|icon| icon.glyph()).unwrap_or_default() }
                        </div>
                        <div class="detail__metric-value">{metric.value}</div>
                        <div class="detail__metric-label">{metric.label}</div>
                    </div>
                }) }
            </section>

            <section class="detail__body">
                <div class="detail__block">
                    <h2>{"Project Overview"}</h2>
                    <p>{project.description}</p>
                </div>
                <div class="detail__block">
                    <h3>{"The Challenge"}</h3>
                    <p>{project.challenge}</p>
                </div>
                <div class="detail__block">
                    <h3>{"Our Solution"}</h3>
                    <p>{project.solution}</p>
                </div>
                <div class="detail__block">
                    <h3>{"Technologies Used"}</h3>
                    <div class="detail__tech">
                        { for project.technologies.iter().map(|tech| html! {
                            <span class="tech-chip">{*tech}</span>
                        }) }
                    </div>
                </div>
                <div class="detail__block">
                    <h3>{"Key Features"}</h3>
                    <div class="detail__features">
                        { for project.features.iter().map(|feature| html! {
                            <div class="detail__feature">
                                <span class="detail__check">{"✓"}</span>
                                <span>{*feature}</span>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="detail__results">
                    <h3>{"Results & Impact"}</h3>
                    <p>{project.results}</p>
                </div>
            </section>

            <Footer theme={*theme} />

            <style>
                {r#"
                .detail__header {
                    position: sticky;
                    top: 0;
                    z-index: 40;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 1rem 1.5rem;
                    backdrop-filter: blur(16px);
                    border-bottom: 1px solid #e5e7eb;
                    background: rgba(255, 255, 255, 0.8);
                }
                .detail.theme-dark .detail__header {
                    background: rgba(17, 24, 39, 0.8);
                    border-bottom-color: #1f2937;
                }
                .detail__header-actions { display: flex; align-items: center; gap: 0.75rem; }
                .detail__back {
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: transparent;
                    color: inherit;
                    font: inherit;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .detail__back:hover { transform: translateX(-5px); }
                .detail__visit {
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #2563eb;
                    color: #fff;
                    font: inherit;
                    cursor: pointer;
                }
                .detail__hero { position: relative; height: 60vh; overflow: hidden; }
                .detail__hero img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    animation: heroZoom 1.5s ease-out;
                }
                @keyframes heroZoom {
                    from { transform: scale(1.1); }
                    to { transform: scale(1); }
                }
                .detail__hero-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.4), transparent);
                }
                .detail__hero-text {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem 4rem;
                    color: #fff;
                }
                .detail__category {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(8px);
                    margin-bottom: 1rem;
                }
                .detail__hero-text p { font-size: 1.25rem; opacity: 0.9; }
                .detail__metrics {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                    padding: 3rem 1.5rem;
                    background: #f9fafb;
                    border-bottom: 1px solid #e5e7eb;
                }
                .detail.theme-dark .detail__metrics { background: #1f2937; border-bottom-color: #374151; }
                .detail__metric {
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: #fff;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                }
                .detail.theme-dark .detail__metric { background: #111827; }
                .detail__metric-icon { font-size: 1.5rem; margin-bottom: 0.75rem; }
                .detail__metric-value { font-weight: 700; font-size: 1.25rem; }
                .detail__metric-label { opacity: 0.7; }
                .detail__body { max-width: 64rem; margin: 0 auto; padding: 4rem 1.5rem; }
                .detail__block { margin-bottom: 4rem; }
                .detail__block h2, .detail__block h3 { margin-bottom: 1rem; }
                .detail__block p, .detail__results p { font-size: 1.125rem; line-height: 1.75; opacity: 0.85; }
                .detail__tech { display: flex; flex-wrap: wrap; gap: 0.75rem; }
                .detail__features {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1rem;
                }
                .detail__feature {
                    display: flex;
                    gap: 0.75rem;
                    padding: 1rem;
                    border-radius: 0.5rem;
                    background: #f9fafb;
                }
                .detail.theme-dark .detail__feature { background: #1f2937; }
                .detail__check { color: #16a34a; }
                .detail.theme-dark .detail__check { color: #4ade80; }
                .detail__results {
                    padding: 2rem;
                    border-radius: 1rem;
                    background: linear-gradient(135deg, #eff6ff, #faf5ff);
                    border: 1px solid #bfdbfe;
                }
                .detail.theme-dark .detail__results {
                    background: linear-gradient(135deg, rgba(30, 58, 138, 0.3), rgba(88, 28, 135, 0.3));
                    border-color: rgba(30, 64, 175, 0.5);
                }
                .narrow-only { display: none; }
                @media (max-width: 640px) {
                    .wide-only { display: none; }
                    .narrow-only { display: inline; }
                }
                "#}
            </style>
        </div>
    }
}
