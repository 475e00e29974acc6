use yew::prelude::*;

use crate::components::{
    contact_us::ContactUs, footer::Footer, hero::Hero, project_showcase::ProjectShowcase,
    testimonials::Testimonials, what_it_is::WhatItIs, why_it_matters::WhyItMatters,
};
use crate::theme::PageProps;

#[function_component(Home)]
pub fn home(props: &PageProps) -> Html {
    let theme = props.theme;

    html! {
        <div class={classes!("page", theme.class())}>
            <Hero theme={theme} on_toggle_theme={props.on_toggle_theme.clone()} />
            <WhatItIs theme={theme} />
            <WhyItMatters theme={theme} />
            <ProjectShowcase theme={theme} />
            <Testimonials theme={theme} />
            <ContactUs theme={theme} />
            <Footer theme={theme} />
        </div>
    }
}
