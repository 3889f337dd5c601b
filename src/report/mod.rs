//! Report module - summarizing wizard results and scheme catalogs

pub mod summary;

pub use summary::*;
