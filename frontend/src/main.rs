use log::{debug, info};
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod config;
mod contact;
mod dom;
mod preloader;
mod theme;
mod components {
    pub mod contact_us;
    pub mod floating_shapes;
    pub mod footer;
    pub mod hero;
    pub mod project_card;
    pub mod project_showcase;
    pub mod testimonials;
    pub mod theme_toggle;
    pub mod what_it_is;
    pub mod why_it_matters;
}
mod pages {
    pub mod home;
    pub mod project_detail;
}

use pages::{
    home::Home,
    project_detail::{NotFound, ProjectDetail},
};
use preloader::Preloader;
use theme::Theme;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/project/:id")]
    Project { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, theme: Theme, on_toggle_theme: &Callback<()>) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home theme={theme} on_toggle_theme={on_toggle_theme.clone()} /> }
        }
        Route::Project { id } => {
            info!("Rendering project page for {}", id);
            html! {
                <ProjectDetail
                    id={id}
                    theme={theme}
                    on_toggle_theme={on_toggle_theme.clone()}
                />
            }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound theme={theme} /> }
        }
    }
}

/// Document-wide rules: smooth scrolling, themed body colors, and the section
/// and card classes every page shares.
fn global_style(theme: Theme) -> Html {
    let style = css!(
        r#"
        html {
            scroll-behavior: smooth;
        }

        body {
            margin: 0;
            font-family: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
            background: ${background};
            color: ${text};
            transition: background 0.5s ease, color 0.5s ease;
        }

        *, *::before, *::after {
            box-sizing: border-box;
        }

        .page {
            min-height: 100vh;
            background: ${background};
            color: ${text};
        }

        .section {
            position: relative;
            padding: 6rem 1.5rem;
        }

        .section--tinted {
            background: ${tint};
        }

        .section__inner {
            position: relative;
            z-index: 1;
            max-width: 80rem;
            margin: 0 auto;
        }

        .section__header {
            text-align: center;
            margin-bottom: 4rem;
        }

        .section-badge {
            display: inline-block;
            padding: 0.5rem 1rem;
            margin-bottom: 1rem;
            border-radius: 9999px;
            font-size: 0.875rem;
            font-weight: 600;
        }

        .section-badge--blue {
            background: ${badge_blue_bg};
            color: ${badge_blue_fg};
        }

        .section-badge--purple {
            background: ${badge_purple_bg};
            color: ${badge_purple_fg};
        }

        .section-badge--green {
            background: ${badge_green_bg};
            color: ${badge_green_fg};
        }

        .section-badge--gradient {
            background: linear-gradient(90deg, #2563eb, #9333ea);
            color: #fff;
        }

        .section-title {
            font-size: clamp(2rem, 4vw, 3rem);
            font-weight: 700;
            margin: 0 0 1.5rem;
        }

        .section-lead {
            max-width: 48rem;
            margin: 0 auto;
            font-size: 1.25rem;
            line-height: 1.75;
            color: ${muted};
        }

        .card {
            padding: 2rem;
            border-radius: 1rem;
            background: ${card};
            border: 1px solid ${border};
            box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
        }

        .gradient-text {
            background: linear-gradient(90deg, #2563eb, #9333ea);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }

        .tech-chip {
            display: inline-block;
            padding: 0.375rem 0.75rem;
            border-radius: 0.5rem;
            font-size: 0.875rem;
            background: ${chip};
            color: ${chip_text};
        }
        "#,
        background = theme.pick("#ffffff", "#111827"),
        text = theme.pick("#111827", "#ffffff"),
        tint = theme.pick("#f9fafb", "#1f2937"),
        muted = theme.pick("#4b5563", "#d1d5db"),
        card = theme.pick("#ffffff", "#1f2937"),
        border = theme.pick("#e5e7eb", "#374151"),
        chip = theme.pick("#f3f4f6", "#374151"),
        chip_text = theme.pick("#374151", "#e5e7eb"),
        badge_blue_bg = theme.pick("#dbeafe", "rgba(30, 58, 138, 0.3)"),
        badge_blue_fg = theme.pick("#2563eb", "#60a5fa"),
        badge_purple_bg = theme.pick("#f3e8ff", "rgba(88, 28, 135, 0.3)"),
        badge_purple_fg = theme.pick("#9333ea", "#c084fc"),
        badge_green_bg = theme.pick("#dcfce7", "rgba(20, 83, 45, 0.3)"),
        badge_green_fg = theme.pick("#16a34a", "#4ade80"),
    );

    html! { <Global css={style} /> }
}

#[function_component(App)]
pub fn app() -> Html {
    let theme = use_state(Theme::default);
    let loading = use_state(|| true);

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggle();
            debug!("Switching theme to {:?}", next);
            theme.set(next);
        })
    };

    let on_preloader_complete = {
        let loading = loading.setter();
        Callback::from(move |_| {
            info!("Preloader finished, revealing content");
            loading.set(false);
        })
    };

    let current = *theme;

    html! {
        <>
            { global_style(current) }
            <BrowserRouter>
                <Switch<Route> render={move |route: Route| switch(route, current, &on_toggle_theme)} />
            </BrowserRouter>
            if *loading {
                <Preloader on_complete={on_preloader_complete} />
            }
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_route_carries_the_id() {
        assert_eq!(
            Route::recognize("/project/neobank-platform"),
            Some(Route::Project {
                id: "neobank-platform".to_string()
            })
        );
        assert_eq!(
            Route::Project {
                id: "assist-ai".to_string()
            }
            .to_path(),
            "/project/assist-ai"
        );
    }

    #[test]
    fn root_is_home_and_unknown_paths_fall_back() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/no/such/page"), Some(Route::NotFound));
    }
}
