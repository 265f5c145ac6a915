//! Core, DOM-free routing primitives for the gallery UI.
pub mod error;
pub mod history;
pub mod names;
pub mod params;
pub mod route;
pub mod router;
pub mod table;
