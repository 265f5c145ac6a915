//! The gallery route table: ordered path → name → view bindings.

use std::collections::HashSet;

use crate::core::error::{RouteError, RouteResult};
use crate::core::names::{RouteName, ViewId};
use crate::core::params::RouteParams;
use crate::core::route::Route;
use yew_router::Routable;

/// One navigable endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDefinition {
    /// Path pattern, e.g. `/models/:id`.
    pub path: &'static str,
    /// Unique symbolic name.
    pub name: RouteName,
    /// View rendered while the route is active.
    pub view: ViewId,
}

impl RouteDefinition {
    /// Bind a pattern to a name and view.
    #[must_use]
    pub const fn new(path: &'static str, name: RouteName, view: ViewId) -> Self {
        Self { path, name, view }
    }
}

/// Route bindings served by the gallery UI, in declaration order.
pub const GALLERY_ROUTES: [RouteDefinition; 10] = [
    RouteDefinition::new("/", RouteName::Home, ViewId::ModelList),
    RouteDefinition::new("/models", RouteName::Models, ViewId::ModelList),
    RouteDefinition::new("/models/:id", RouteName::ModelDetail, ViewId::ModelDetail),
    RouteDefinition::new("/search", RouteName::Search, ViewId::Search),
    RouteDefinition::new("/generate", RouteName::Generate, ViewId::Generate),
    RouteDefinition::new("/training", RouteName::Training, ViewId::Training),
    RouteDefinition::new("/login", RouteName::Login, ViewId::Login),
    RouteDefinition::new("/profile", RouteName::Profile, ViewId::Profile),
    RouteDefinition::new("/my-models", RouteName::MyModels, ViewId::Profile),
    RouteDefinition::new("/favorites", RouteName::Favorites, ViewId::Profile),
];

/// Compile-time check that the gallery table lists every name once, in
/// [`RouteName::all`] order, bound to the pattern its typed route declares.
const fn follows_route_names(routes: &[RouteDefinition]) -> bool {
    let names = RouteName::all();
    if routes.len() != names.len() {
        return false;
    }
    let mut index = 0;
    while index < routes.len() {
        let definition = routes[index];
        if definition.name as u8 != names[index] as u8
            || !same_text(definition.path, definition.name.pattern())
        {
            return false;
        }
        index += 1;
    }
    true
}

const fn same_text(left: &str, right: &str) -> bool {
    let (left, right) = (left.as_bytes(), right.as_bytes());
    if left.len() != right.len() {
        return false;
    }
    let mut index = 0;
    while index < left.len() {
        if left[index] != right[index] {
            return false;
        }
        index += 1;
    }
    true
}

const _: () = assert!(
    follows_route_names(&GALLERY_ROUTES),
    "GALLERY_ROUTES must follow RouteName order and patterns"
);

/// Drop any query string or fragment from a location.
fn path_only(location: &str) -> &str {
    location
        .find(['?', '#'])
        .map_or(location, |end| &location[..end])
}

/// Result of matching a location against the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    /// Definition that matched.
    pub definition: &'a RouteDefinition,
    /// Typed route recognised from the path, parameters decoded.
    pub route: Route,
}

impl RouteMatch<'_> {
    /// Typed parameters carried by the match.
    #[must_use]
    pub fn params(&self) -> RouteParams {
        self.route.params()
    }
}

/// Immutable, ordered set of route definitions.
///
/// Matching is delegated to [`Route`]'s `Routable` recogniser; the table decides
/// which names are served and which view each one binds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteDefinition>,
}

impl RouteTable {
    /// Build a table, enforcing unique names and the pattern each name declares.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteError`] describing the first offending definition.
    pub fn new(definitions: impl IntoIterator<Item = RouteDefinition>) -> RouteResult<Self> {
        let mut names = HashSet::new();
        let mut entries = Vec::new();
        for definition in definitions {
            if !names.insert(definition.name) {
                return Err(RouteError::DuplicateName {
                    name: definition.name,
                });
            }
            if definition.path != definition.name.pattern() {
                return Err(RouteError::PatternMismatch {
                    name: definition.name,
                    pattern: definition.path,
                });
            }
            entries.push(definition);
        }
        Ok(Self { entries })
    }

    /// The ten gallery routes.
    #[must_use]
    pub fn gallery() -> Self {
        Self {
            entries: GALLERY_ROUTES.to_vec(),
        }
    }

    /// Number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no routes are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteDefinition> + '_ {
        self.entries.iter()
    }

    /// Declared names in order.
    pub fn names(&self) -> impl Iterator<Item = RouteName> + '_ {
        self.iter().map(|definition| definition.name)
    }

    /// Pattern strings in order.
    pub fn patterns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().map(|definition| definition.path)
    }

    /// Definition registered under `name`.
    #[must_use]
    pub fn definition(&self, name: RouteName) -> Option<&RouteDefinition> {
        self.iter().find(|definition| definition.name == name)
    }

    /// View bound to `name`.
    #[must_use]
    pub fn view_for(&self, name: RouteName) -> Option<ViewId> {
        self.definition(name).map(|definition| definition.view)
    }

    /// Match an absolute `path` (query and fragment ignored) against the served routes.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_>> {
        let path = path_only(path);
        if !path.starts_with('/') {
            return None;
        }
        let route = Route::recognize(path)?;
        let definition = self.definition(route.name())?;
        Some(RouteMatch { definition, route })
    }

    /// Resolve `path` to a typed route.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<Route> {
        self.match_path(path).map(|matched| matched.route)
    }

    /// Render the concrete path for `name` with `params`.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteError`] when `name` is not declared or `params` do not fit it.
    pub fn href(&self, name: RouteName, params: &RouteParams) -> RouteResult<String> {
        if self.definition(name).is_none() {
            return Err(RouteError::UnknownName {
                value: name.as_str().to_string(),
            });
        }
        Ok(Route::from_name(name, params.clone())?.path())
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::gallery()
    }
}
