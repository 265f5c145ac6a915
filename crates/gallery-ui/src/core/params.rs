//! Typed route parameters.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::core::error::{RouteError, RouteResult};
use crate::core::names::{ParamKind, RouteName};

/// Model identifier captured from `/models/:id`.
///
/// `Display` writes the percent-encoded path segment and `FromStr` decodes one, which
/// is the contract `#[derive(Routable)]` relies on for `ModelDetail { id }`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(String);

impl ModelId {
    /// Validate and wrap a decoded model identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidParam`] when the value is empty or contains `/`.
    pub fn new(value: impl Into<String>) -> RouteResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(RouteError::InvalidParam {
                param: "id",
                reason: "empty",
            });
        }
        if value.contains('/') {
            return Err(RouteError::InvalidParam {
                param: "id",
                reason: "contains_separator",
            });
        }
        Ok(Self(value))
    }

    /// Decode a raw path segment into an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidParam`] when the segment is not valid
    /// percent-encoded UTF-8 or decodes to an invalid identifier.
    pub fn from_segment(segment: &str) -> RouteResult<Self> {
        let decoded = urlencoding::decode(segment).map_err(|_| RouteError::InvalidParam {
            param: "id",
            reason: "invalid_encoding",
        })?;
        Self::new(decoded.into_owned())
    }

    /// Decoded identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form suitable for a single path segment.
    #[must_use]
    pub fn to_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl Display for ModelId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&urlencoding::encode(&self.0))
    }
}

impl FromStr for ModelId {
    type Err = RouteError;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        Self::from_segment(segment)
    }
}

/// Parameters supplied when resolving a route by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RouteParams {
    /// No parameters.
    #[default]
    None,
    /// Model-scoped parameters.
    Model {
        /// Target model.
        id: ModelId,
    },
}

impl RouteParams {
    /// Shorthand for model-scoped parameters.
    #[must_use]
    pub const fn model(id: ModelId) -> Self {
        Self::Model { id }
    }

    /// Check the parameters against what `name` declares and return the model id if any.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::MissingParam`] or [`RouteError::UnexpectedParam`] when the
    /// supplied shape disagrees with the route.
    pub fn expect_for(&self, name: RouteName) -> RouteResult<Option<&ModelId>> {
        match (name.param_kind(), self) {
            (ParamKind::None, Self::None) => Ok(None),
            (ParamKind::ModelId, Self::Model { id }) => Ok(Some(id)),
            (ParamKind::ModelId, Self::None) => Err(RouteError::MissingParam { name, param: "id" }),
            (ParamKind::None, Self::Model { .. }) => {
                Err(RouteError::UnexpectedParam { name, param: "id" })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn model_id_rejects_empty_and_separators() {
        assert!(matches!(
            ModelId::new(""),
            Err(RouteError::InvalidParam { reason: "empty", .. })
        ));
        assert!(matches!(
            ModelId::new("a/b"),
            Err(RouteError::InvalidParam {
                reason: "contains_separator",
                ..
            })
        ));
    }

    #[test]
    fn segments_are_percent_encoded() -> Result<(), Box<dyn Error>> {
        let id = ModelId::new("sdxl base 1.0")?;
        assert_eq!(id.to_segment(), "sdxl%20base%201.0");
        assert_eq!(ModelId::from_segment("sdxl%20base%201.0")?, id);
        Ok(())
    }

    #[test]
    fn whitespace_ids_are_kept_verbatim() -> Result<(), Box<dyn Error>> {
        let id = "%20".parse::<ModelId>()?;
        assert_eq!(id.as_str(), " ");
        assert_eq!(id.to_string(), "%20");
        Ok(())
    }

    #[test]
    fn encoded_separator_is_still_rejected() {
        assert!(ModelId::from_segment("a%2Fb").is_err());
        assert!(ModelId::from_segment("%FF").is_err());
    }

    #[test]
    fn params_are_checked_against_route_name() -> Result<(), Box<dyn Error>> {
        let params = RouteParams::model(ModelId::new("42")?);
        assert_eq!(
            params.expect_for(RouteName::ModelDetail)?.map(ModelId::as_str),
            Some("42")
        );
        assert_eq!(
            params.expect_for(RouteName::Search),
            Err(RouteError::UnexpectedParam {
                name: RouteName::Search,
                param: "id"
            })
        );
        assert_eq!(
            RouteParams::None.expect_for(RouteName::ModelDetail),
            Err(RouteError::MissingParam {
                name: RouteName::ModelDetail,
                param: "id"
            })
        );
        Ok(())
    }
}
