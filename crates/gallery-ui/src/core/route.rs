//! Strongly typed navigation targets.
//!
//! `Route` is the single path matcher of the crate: `#[derive(Routable)]` turns the
//! `#[at]` patterns into yew-router's recogniser, and the route table layers names
//! and views on top of it.
use yew_router::prelude::*;

use crate::core::error::{RouteError, RouteResult};
use crate::core::names::{RouteName, ViewId};
use crate::core::params::{ModelId, RouteParams};

/// A concrete destination in the gallery UI.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Routable)]
pub enum Route {
    /// Landing page.
    #[at("/")]
    Home,
    /// Model catalogue.
    #[at("/models")]
    Models,
    /// Single model page.
    #[at("/models/:id")]
    ModelDetail {
        /// Model being shown.
        id: ModelId,
    },
    /// Search page.
    #[at("/search")]
    Search,
    /// Generation workspace.
    #[at("/generate")]
    Generate,
    /// Training jobs.
    #[at("/training")]
    Training,
    /// Sign-in page.
    #[at("/login")]
    Login,
    /// Profile overview.
    #[at("/profile")]
    Profile,
    /// Models owned by the user.
    #[at("/my-models")]
    MyModels,
    /// Models the user favourited.
    #[at("/favorites")]
    Favorites,
}

/// Which profile-backed route activated the shared profile view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileSection {
    /// Account overview.
    Overview,
    /// Models owned by the user.
    MyModels,
    /// Models the user favourited.
    Favorites,
}

impl Route {
    /// Build a route from its name and typed parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteError`] when `params` do not fit `name`.
    pub fn from_name(name: RouteName, params: RouteParams) -> RouteResult<Self> {
        let id = params.expect_for(name)?.cloned();
        Ok(match (name, id) {
            (RouteName::ModelDetail, Some(id)) => Self::ModelDetail { id },
            (RouteName::Home, _) => Self::Home,
            (RouteName::Models, _) => Self::Models,
            (RouteName::Search, _) => Self::Search,
            (RouteName::Generate, _) => Self::Generate,
            (RouteName::Training, _) => Self::Training,
            (RouteName::Login, _) => Self::Login,
            (RouteName::Profile, _) => Self::Profile,
            (RouteName::MyModels, _) => Self::MyModels,
            (RouteName::Favorites, _) => Self::Favorites,
            (RouteName::ModelDetail, None) => {
                return Err(RouteError::MissingParam {
                    name,
                    param: "id",
                });
            }
        })
    }

    /// Shorthand for the model detail route.
    #[must_use]
    pub const fn model(id: ModelId) -> Self {
        Self::ModelDetail { id }
    }

    /// Symbolic name of the route.
    #[must_use]
    pub const fn name(&self) -> RouteName {
        match self {
            Self::Home => RouteName::Home,
            Self::Models => RouteName::Models,
            Self::ModelDetail { .. } => RouteName::ModelDetail,
            Self::Search => RouteName::Search,
            Self::Generate => RouteName::Generate,
            Self::Training => RouteName::Training,
            Self::Login => RouteName::Login,
            Self::Profile => RouteName::Profile,
            Self::MyModels => RouteName::MyModels,
            Self::Favorites => RouteName::Favorites,
        }
    }

    /// Typed parameters carried by the route.
    #[must_use]
    pub fn params(&self) -> RouteParams {
        match self {
            Self::ModelDetail { id } => RouteParams::model(id.clone()),
            _ => RouteParams::None,
        }
    }

    /// View rendered for the route.
    #[must_use]
    pub const fn view(&self) -> ViewId {
        match self {
            Self::Home | Self::Models => ViewId::ModelList,
            Self::ModelDetail { .. } => ViewId::ModelDetail,
            Self::Search => ViewId::Search,
            Self::Generate => ViewId::Generate,
            Self::Training => ViewId::Training,
            Self::Login => ViewId::Login,
            Self::Profile | Self::MyModels | Self::Favorites => ViewId::Profile,
        }
    }

    /// Section of the shared profile view, for profile-backed routes.
    #[must_use]
    pub const fn profile_section(&self) -> Option<ProfileSection> {
        match self {
            Self::Profile => Some(ProfileSection::Overview),
            Self::MyModels => Some(ProfileSection::MyModels),
            Self::Favorites => Some(ProfileSection::Favorites),
            _ => None,
        }
    }

    /// Percent-encoded path of the route relative to the base path.
    #[must_use]
    pub fn path(&self) -> String {
        self.to_path()
    }
}
