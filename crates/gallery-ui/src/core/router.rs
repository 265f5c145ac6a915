//! Router handle: the route table plus the active route and change listeners.
//!
//! # Design
//! - Constructed explicitly at bootstrap and passed down; there is no global instance.
//! - Single-threaded: cheap `Rc` clones share one state cell.
//! - Listeners run after the state borrow is released, so they may query or drive
//!   the router themselves.

use std::cell::RefCell;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use crate::core::error::{RouteError, RouteResult};
use crate::core::history::RouterConfig;
use crate::core::names::RouteName;
use crate::core::params::RouteParams;
use crate::core::route::Route;
use crate::core::table::RouteTable;

/// Handle returned by [`Router::subscribe`].
pub type ListenerId = u64;

type Listener = Rc<dyn Fn(&RouteChange)>;

/// Notification delivered when the active route changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteChange {
    /// Previously active route, if any.
    pub from: Option<Route>,
    /// Newly active route.
    pub to: Route,
    /// Browser location (base path included) for the new route.
    pub location: String,
}

/// Shared router handle.
#[derive(Clone)]
pub struct Router {
    inner: Rc<RouterInner>,
}

struct RouterInner {
    table: RouteTable,
    config: RouterConfig,
    state: RefCell<RouterState>,
}

#[derive(Default)]
struct RouterState {
    active: Option<Route>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: ListenerId,
}

impl Router {
    /// Wrap `table` with the given configuration.
    #[must_use]
    pub fn new(table: RouteTable, config: RouterConfig) -> Self {
        Self {
            inner: Rc::new(RouterInner {
                table,
                config,
                state: RefCell::new(RouterState::default()),
            }),
        }
    }

    /// Router over the gallery route table.
    #[must_use]
    pub fn gallery(config: RouterConfig) -> Self {
        Self::new(RouteTable::gallery(), config)
    }

    /// Route table backing the router.
    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.inner.table
    }

    /// Configuration the router was built with.
    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.inner.config
    }

    /// Currently active route.
    #[must_use]
    pub fn current(&self) -> Option<Route> {
        self.inner.state.borrow().active.clone()
    }

    /// Resolve a browser location (base path included) to a route.
    #[must_use]
    pub fn resolve_path(&self, location: &str) -> Option<Route> {
        let path = self.inner.config.base().strip(location)?;
        self.inner.table.resolve(path)
    }

    /// Browser location for `route`.
    #[must_use]
    pub fn href(&self, route: &Route) -> String {
        self.inner.config.base().join(&route.path())
    }

    /// Browser location for a route name and its parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteError`] when `params` do not fit `name`.
    pub fn href_for(&self, name: RouteName, params: &RouteParams) -> RouteResult<String> {
        let path = self.inner.table.href(name, params)?;
        Ok(self.inner.config.base().join(&path))
    }

    /// Activate the route matching `location`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Unmatched`] when no route matches; the active route is kept.
    pub fn navigate(&self, location: &str) -> RouteResult<Route> {
        let route = self
            .resolve_path(location)
            .ok_or_else(|| RouteError::Unmatched {
                path: location.to_string(),
            })?;
        self.activate(route.clone());
        Ok(route)
    }

    /// Activate `route` directly.
    pub fn push(&self, route: Route) {
        self.activate(route);
    }

    /// Register a listener for route changes.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&RouteChange) + 'static,
    {
        let mut state = self.inner.state.borrow_mut();
        state.next_listener = state.next_listener.saturating_add(1);
        let id = state.next_listener;
        state.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` when the id is unknown.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut state = self.inner.state.borrow_mut();
        let before = state.listeners.len();
        state.listeners.retain(|(listener_id, _)| *listener_id != id);
        state.listeners.len() != before
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.state.borrow().listeners.len()
    }

    fn activate(&self, route: Route) {
        let (change, listeners) = {
            let mut state = self.inner.state.borrow_mut();
            if state.active.as_ref() == Some(&route) {
                return;
            }
            let from = state.active.replace(route.clone());
            let change = RouteChange {
                from,
                location: self.href(&route),
                to: route,
            };
            let listeners = state
                .listeners
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect::<Vec<_>>();
            (change, listeners)
        };
        for listener in listeners {
            listener(&change);
        }
    }
}

impl PartialEq for Router {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Debug for Router {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Router")
            .field("base", self.inner.config.base())
            .field("routes", &self.inner.table.len())
            .field("active", &self.current())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::ModelId;
    use std::cell::Cell;
    use yew_router::Routable;
    use std::error::Error;

    fn router_at(base: &str) -> Result<Router, Box<dyn Error>> {
        Ok(Router::gallery(RouterConfig::from_base_url(Some(base))?))
    }

    #[test]
    fn resolve_path_strips_base() -> Result<(), Box<dyn Error>> {
        let router = router_at("/gallery")?;
        assert_eq!(router.resolve_path("/gallery"), Some(Route::Home));
        assert_eq!(
            router.resolve_path("/gallery/models/9"),
            Some(Route::model(ModelId::new("9")?))
        );
        assert_eq!(router.resolve_path("/models/9"), None);
        Ok(())
    }

    #[test]
    fn hrefs_include_base() -> Result<(), Box<dyn Error>> {
        let router = router_at("/gallery/")?;
        assert_eq!(router.href(&Route::Favorites), "/gallery/favorites");
        assert_eq!(
            router.href_for(
                RouteName::ModelDetail,
                &RouteParams::model(ModelId::new("42")?)
            )?,
            "/gallery/models/42"
        );
        assert!(matches!(
            router.href_for(RouteName::ModelDetail, &RouteParams::None),
            Err(RouteError::MissingParam { .. })
        ));
        Ok(())
    }

    #[test]
    fn navigate_notifies_listeners_on_change_only() -> Result<(), Box<dyn Error>> {
        let router = router_at("/")?;
        let seen = Rc::new(RefCell::new(Vec::new()));
        let id = {
            let seen = Rc::clone(&seen);
            router.subscribe(move |change| seen.borrow_mut().push(change.clone()))
        };

        router.navigate("/search")?;
        router.navigate("/search?q=cats")?;
        router.navigate("/profile")?;

        let seen_changes = seen.borrow().clone();
        assert_eq!(seen_changes.len(), 2);
        assert_eq!(seen_changes[0].from, None);
        assert_eq!(seen_changes[0].to, Route::Search);
        assert_eq!(seen_changes[1].from, Some(Route::Search));
        assert_eq!(seen_changes[1].location, "/profile");

        assert!(router.unsubscribe(id));
        assert!(!router.unsubscribe(id));
        router.push(Route::Login);
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(router.current(), Some(Route::Login));
        Ok(())
    }

    #[test]
    fn unmatched_navigation_keeps_active_route() -> Result<(), Box<dyn Error>> {
        let router = router_at("/")?;
        router.push(Route::Training);
        let err = router.navigate("/does-not-exist").err();
        assert_eq!(
            err,
            Some(RouteError::Unmatched {
                path: "/does-not-exist".to_string()
            })
        );
        assert_eq!(router.current(), Some(Route::Training));
        Ok(())
    }

    #[test]
    fn navigate_accepts_whitespace_model_id() -> Result<(), Box<dyn Error>> {
        let router = router_at("/")?;
        let route = router.navigate("/models/%20")?;
        assert_eq!(route, Route::model(ModelId::new(" ")?));
        assert_eq!(router.href(&route), "/models/%20");
        Ok(())
    }

    #[test]
    fn router_and_switch_recognise_the_same_paths() -> Result<(), Box<dyn Error>> {
        let router = router_at("/gallery")?;
        for path in [
            "/",
            "/models",
            "/models/42",
            "/models/%20",
            "/models/%FF",
            "/Search",
            "/search",
            "/favorites",
            "/models/42/files",
            "/does-not-exist",
        ] {
            let location = router.config().base().join(path);
            assert_eq!(router.resolve_path(&location), Route::recognize(path), "{path}");
        }
        Ok(())
    }

    #[test]
    fn listeners_may_reenter_router() -> Result<(), Box<dyn Error>> {
        let router = router_at("/")?;
        let observed = Rc::new(Cell::new(0_usize));
        {
            let handle = router.clone();
            let observed = Rc::clone(&observed);
            router.subscribe(move |change| {
                assert_eq!(handle.current().as_ref(), Some(&change.to));
                observed.set(observed.get() + 1);
                if change.to == Route::Login {
                    handle.push(Route::Home);
                }
            });
        }
        router.navigate("/login")?;
        assert_eq!(observed.get(), 2);
        assert_eq!(router.current(), Some(Route::Home));
        Ok(())
    }

    #[test]
    fn clones_share_state_and_compare_equal() -> Result<(), Box<dyn Error>> {
        let router = router_at("/")?;
        let other = router.clone();
        other.push(Route::Generate);
        assert_eq!(router.current(), Some(Route::Generate));
        assert_eq!(router, other);
        assert_ne!(router, router_at("/")?);
        Ok(())
    }
}
