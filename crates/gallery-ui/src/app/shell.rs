//! Navigation chrome around the active view.

use crate::core::route::Route;
use yew::prelude::*;
use yew_router::prelude::{Link, use_route};

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub(crate) children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let active = use_route::<Route>();

    html! {
        <div class="app-shell">
            <aside class="sidebar">
                <strong class="brand">{"Model Gallery"}</strong>
                <nav>
                    {nav_item(Route::Models, "Models", active.as_ref())}
                    {nav_item(Route::Search, "Search", active.as_ref())}
                    {nav_item(Route::Generate, "Generate", active.as_ref())}
                    {nav_item(Route::Training, "Training", active.as_ref())}
                </nav>
                <nav class="account">
                    {nav_item(Route::Profile, "Profile", active.as_ref())}
                    {nav_item(Route::MyModels, "My models", active.as_ref())}
                    {nav_item(Route::Favorites, "Favorites", active.as_ref())}
                    {nav_item(Route::Login, "Sign in", active.as_ref())}
                </nav>
            </aside>
            <div class="main">
                <header class="topbar">
                    <Link<Route> to={Route::Home} classes={classes!("home-link")}>{"Home"}</Link<Route>>
                </header>
                <main>
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}

fn nav_item(route: Route, label: &str, active: Option<&Route>) -> Html {
    let classes = classes!(
        "nav-item",
        if active == Some(&route) {
            Some("active")
        } else {
            None
        }
    );
    html! {
        <Link<Route> to={route} classes={classes}>{label}</Link<Route>>
    }
}
