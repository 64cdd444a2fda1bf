//! Data-driven formation content and loaders.
//!
//! This crate houses the reference formation list and loads content from files:
//! - Formation catalogs (data-driven via RON)
//! - Host configuration (data-driven via TOML)
//!
//! Content is turned into a populated [`crystal_core::CrystalSetRegistry`]
//! once at startup and is never mutated afterwards.

pub mod catalog;
pub mod config;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{CrystalCatalog, CrystalSetSpec, builtin_catalog};
pub use config::HostConfig;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ContentFactory, HostConfigLoader, LoadResult};
