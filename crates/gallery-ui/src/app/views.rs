//! Hosts for the page-level views bound in the route table.
//!
//! The pages themselves live outside this crate; each host marks where a view mounts
//! and passes along what the route provides (model id, profile section).

use crate::core::names::ViewId;
use crate::core::route::{ProfileSection, Route};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ViewHostProps {
    pub(crate) route: Route,
}

#[function_component(ViewHost)]
pub(crate) fn view_host(props: &ViewHostProps) -> Html {
    let view = props.route.view();
    let body = match &props.route {
        Route::ModelDetail { id } => html! { <p class="muted">{format!("Model {}", id.as_str())}</p> },
        route => match route.profile_section() {
            Some(section) => html! { <p class="muted">{section_label(section)}</p> },
            None => html! {},
        },
    };
    html! {
        <section class="view-host" data-view={view.as_str()} data-route={props.route.name().as_str()}>
            <h2>{view_title(view)}</h2>
            {body}
        </section>
    }
}

const fn view_title(view: ViewId) -> &'static str {
    match view {
        ViewId::ModelList => "Models",
        ViewId::ModelDetail => "Model",
        ViewId::Search => "Search",
        ViewId::Generate => "Generate",
        ViewId::Training => "Training",
        ViewId::Login => "Sign in",
        ViewId::Profile => "Profile",
    }
}

const fn section_label(section: ProfileSection) -> &'static str {
    match section {
        ProfileSection::Overview => "Account overview",
        ProfileSection::MyModels => "Your uploaded models",
        ProfileSection::Favorites => "Models you favourited",
    }
}
