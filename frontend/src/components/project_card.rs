use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::Project;
use crate::theme::Theme;
use crate::Route;

/// Technologies listed on a card before collapsing into "+N more".
const VISIBLE_TECHNOLOGIES: usize = 5;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: &'static Project,
    pub theme: Theme,
    pub index: usize,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let ProjectCardProps { project, theme, index } = props;
    let is_hovered = use_state(|| false);
    let navigator = use_navigator();

    let onclick = {
        let id = project.id.to_string();
        Callback::from(move |_: MouseEvent| match &navigator {
            Some(navigator) => navigator.push(&Route::Project { id: id.clone() }),
            None => log::error!("Project card rendered outside of a router"),
        })
    };
    let onmouseenter = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(true))
    };
    let onmouseleave = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(false))
    };

    let hidden_technologies = project.technologies.len().saturating_sub(VISIBLE_TECHNOLOGIES);

    html! {
        <div
            class={classes!("project-card", theme.class(), (*is_hovered).then_some("hovered"))}
            style={format!("animation-delay: {}s;", *index as f32 * 0.1)}
            onclick={onclick}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <div class="project-card__media">
                <div class="project-card__image">
                    <img src={project.image} alt={project.title} />
                    <span class="project-card__category">{project.category}</span>
                </div>
                <div class="project-card__metrics">
                    { for project.metrics.iter().map(|metric| html! {
                        <div class="project-card__metric">
                            <span class="project-card__metric-icon">
                                { metric.icon().map(|icon| icon.glyph()).unwrap_or_default() }
                            </span>
                            <span class="project-card__metric-value">{metric.value}</span>
                            <span class="project-card__metric-label">{metric.label}</span>
                        </div>
                    }) }
                </div>
            </div>

            <div class="project-card__body">
                <h3>{project.title}</h3>
                <p class="project-card__client">{project.client}</p>
                <p class="project-card__description">{project.description}</p>

                <h4>{"Technologies Used"}</h4>
                <div class="project-card__tech">
                    { for project.technologies.iter().take(VISIBLE_TECHNOLOGIES).map(|tech| html! {
                        <span class="tech-chip">{*tech}</span>
                    }) }
                    if hidden_technologies > 0 {
                        <span class="tech-chip tech-chip--more">{format!("+{} more", hidden_technologies)}</span>
                    }
                </div>

                <div class="project-card__details">
                    {"View Full Details"}
                    <span class="project-card__chevron">{"›"}</span>
                </div>
            </div>

            <div class="project-card__accent"></div>
        </div>
    }
}
