//! Modules layer - Infrastructure components
//!
//! Contains the persistence adapters the feature services are built on.

pub mod store;
