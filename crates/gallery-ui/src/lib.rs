#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Model gallery web UI.
//! This crate holds the route table, the injected router handle and the Yew entrypoint
//! that mounts it under browser-history navigation.

pub mod core;

pub use crate::core::error::{ConfigError, RouteError};
pub use crate::core::history::{BasePath, HistoryMode, RouterConfig};
pub use crate::core::names::{RouteName, ViewId};
pub use crate::core::params::{ModelId, RouteParams};
pub use crate::core::route::{ProfileSection, Route};
pub use crate::core::router::{RouteChange, Router};
pub use crate::core::table::{GALLERY_ROUTES, RouteDefinition, RouteTable};

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::{RouteName, RouterConfig, Router, ViewId};

    #[test]
    fn gallery_router_exposes_ten_routes() {
        let router = Router::gallery(RouterConfig::default());
        assert_eq!(router.table().len(), 10);
        assert_eq!(router.current(), None);
    }

    #[test]
    fn profile_aliases_share_one_view() {
        let router = Router::gallery(RouterConfig::default());
        for name in [RouteName::Profile, RouteName::MyModels, RouteName::Favorites] {
            assert_eq!(router.table().view_for(name), Some(ViewId::Profile));
        }
    }
}
