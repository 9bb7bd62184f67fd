//! starcat core - entity model, catalog store, and schema migrations.
//!
//! This crate provides the data layer of the starcat catalog: the five
//! entity types (users, profiles, people, planets, favorites), their JSON
//! projections, the sled-backed store with its application-level integrity
//! checks, and the versioned schema migrations applied at open.

pub mod cascade;
pub mod error;
pub mod migration;
pub mod model;
pub mod store;

pub use error::Error;
pub use model::{Favorite, Person, Planet, Profile, User};
pub use store::{CatalogStore, StoreConfig};
