//! Symbolic route names and the view identifiers they bind to.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::RouteError;

/// Symbolic identifier used for programmatic navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteName {
    /// Landing page listing models.
    Home,
    /// Model catalogue.
    Models,
    /// Single model page keyed by id.
    ModelDetail,
    /// Search page.
    Search,
    /// Image generation workspace.
    Generate,
    /// Training jobs.
    Training,
    /// Sign-in page.
    Login,
    /// Current user's profile.
    Profile,
    /// Models owned by the current user.
    MyModels,
    /// Models favourited by the current user.
    Favorites,
}

impl RouteName {
    /// Every declared name in table order.
    #[must_use]
    pub const fn all() -> [Self; 10] {
        [
            Self::Home,
            Self::Models,
            Self::ModelDetail,
            Self::Search,
            Self::Generate,
            Self::Training,
            Self::Login,
            Self::Profile,
            Self::MyModels,
            Self::Favorites,
        ]
    }

    /// Kebab-case identifier used in links and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Models => "models",
            Self::ModelDetail => "model-detail",
            Self::Search => "search",
            Self::Generate => "generate",
            Self::Training => "training",
            Self::Login => "login",
            Self::Profile => "profile",
            Self::MyModels => "my-models",
            Self::Favorites => "favorites",
        }
    }

    /// Path pattern declared for the name on [`crate::core::route::Route`].
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Models => "/models",
            Self::ModelDetail => "/models/:id",
            Self::Search => "/search",
            Self::Generate => "/generate",
            Self::Training => "/training",
            Self::Login => "/login",
            Self::Profile => "/profile",
            Self::MyModels => "/my-models",
            Self::Favorites => "/favorites",
        }
    }

    /// Parameters the route requires to render a concrete path.
    #[must_use]
    pub const fn param_kind(self) -> ParamKind {
        match self {
            Self::ModelDetail => ParamKind::ModelId,
            _ => ParamKind::None,
        }
    }
}

impl Display for RouteName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for RouteName {
    type Err = RouteError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|name| name.as_str() == value)
            .ok_or_else(|| RouteError::UnknownName {
                value: value.to_string(),
            })
    }
}

/// Parameter shape declared by a route name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    /// Static path with no parameters.
    None,
    /// Path carrying a single `:id` model identifier.
    ModelId,
}

/// Page-level view a route renders. Views live outside the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    /// Model list page.
    ModelList,
    /// Model detail page.
    ModelDetail,
    /// Search page.
    Search,
    /// Generation page.
    Generate,
    /// Training page.
    Training,
    /// Login page.
    Login,
    /// Profile page, shared by the profile, my-models and favorites routes.
    Profile,
}

impl ViewId {
    /// Identifier of the view component.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ModelList => "ModelList",
            Self::ModelDetail => "ModelDetail",
            Self::Search => "Search",
            Self::Generate => "Generate",
            Self::Training => "Training",
            Self::Login => "Login",
            Self::Profile => "Profile",
        }
    }
}

impl Display for ViewId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn names_parse_from_their_display_form() -> Result<(), Box<dyn Error>> {
        for name in RouteName::all() {
            assert_eq!(name.to_string().parse::<RouteName>()?, name);
        }
        Ok(())
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "settings".parse::<RouteName>().err();
        assert_eq!(
            err,
            Some(RouteError::UnknownName {
                value: "settings".to_string()
            })
        );
    }

    #[test]
    fn serde_uses_symbolic_names() -> Result<(), Box<dyn Error>> {
        assert_eq!(
            serde_json::to_string(&RouteName::ModelDetail)?,
            "\"model-detail\""
        );
        assert_eq!(
            serde_json::from_str::<RouteName>("\"my-models\"")?,
            RouteName::MyModels
        );
        assert_eq!(serde_json::to_string(&ViewId::ModelList)?, "\"ModelList\"");
        Ok(())
    }

    #[test]
    fn only_model_detail_takes_parameters() {
        for name in RouteName::all() {
            let expected = if name == RouteName::ModelDetail {
                ParamKind::ModelId
            } else {
                ParamKind::None
            };
            assert_eq!(name.param_kind(), expected, "{name}");
            assert_eq!(name.pattern().contains(':'), expected == ParamKind::ModelId);
        }
    }
}
