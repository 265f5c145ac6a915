//! Yew bootstrap: router construction, context wiring and the route switch.

use crate::core::error::ConfigError;
use crate::core::history::{BASE_URL_ENV, RouterConfig};
use crate::core::route::Route;
use crate::core::router::Router;
use gloo::console;
use gloo::utils::document;
use shell::AppShell;
use views::ViewHost;
use yew::prelude::*;
use yew_router::prelude::*;

mod shell;
mod views;

const TITLE_SUFFIX: &str = "Model Gallery";

#[derive(Properties, PartialEq)]
pub(crate) struct GalleryAppProps {
    pub(crate) router: Router,
}

#[function_component(GalleryApp)]
pub(crate) fn gallery_app(props: &GalleryAppProps) -> Html {
    let router = props.router.clone();
    {
        let router = router.clone();
        use_effect_with_deps(
            move |router: &Router| {
                let id = router.subscribe(|change| apply_title(&change.to));
                if let Some(route) = router.current() {
                    apply_title(&route);
                }
                let router = router.clone();
                move || {
                    router.unsubscribe(id);
                }
            },
            router,
        );
    }
    // Always explicit, so the browser router never falls back to `<base href>`.
    let basename = Some(AttrValue::from(router.config().base().as_str().to_string()));

    html! {
        <ContextProvider<Router> context={router}>
            <BrowserRouter basename={basename}>
                <RouteSync />
                <AppShell>
                    <Switch<Route> render={switch} />
                </AppShell>
            </BrowserRouter>
        </ContextProvider<Router>>
    }
}

fn switch(route: Route) -> Html {
    html! { <ViewHost route={route} /> }
}

/// Feeds browser locations into the injected router so listeners see every change.
#[function_component(RouteSync)]
fn route_sync() -> Html {
    let router = use_context::<Router>();
    let path = use_location().map(|location| location.path().to_string());
    use_effect_with_deps(
        move |path: &Option<String>| {
            if let (Some(router), Some(path)) = (router, path.as_deref()) {
                if let Err(err) = router.navigate(path) {
                    console::warn!("no route matches location", path, err.to_string());
                }
            }
            || ()
        },
        path,
    );
    html! {}
}

fn apply_title(route: &Route) {
    let title = match route {
        Route::ModelDetail { id } => format!("{} · {TITLE_SUFFIX}", id.as_str()),
        other => format!("{} · {TITLE_SUFFIX}", other.view()),
    };
    document().set_title(&title);
}

fn load_config() -> RouterConfig {
    match RouterConfig::from_build_env() {
        Ok(config) => config,
        Err(ConfigError::InvalidBasePath { value, reason }) => {
            console::error!("invalid base path; serving from /", BASE_URL_ENV, value, reason);
            RouterConfig::default()
        }
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let props = GalleryAppProps {
        router: Router::gallery(load_config()),
    };
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<GalleryApp>::with_root_and_props(root, props).render();
    } else {
        yew::Renderer::<GalleryApp>::with_props(props).render();
    }
}
