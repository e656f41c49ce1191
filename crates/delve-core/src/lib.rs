//! delve-core: item classification and randomized attributes
//!
//! This crate turns immutable object templates into concrete, stackable,
//! identifiable items. It also hosts the two numeric subsystems the rest of
//! the game leans on: the discretized normal sampler and the blows table.
//!
//! Static catalog data lives in `delve-data`; this crate has no tables of
//! names and no I/O.

pub mod color;
pub mod combat;
pub mod config;
pub mod error;
pub mod object;
pub mod rng;
pub mod sampler;

pub use color::Color;
pub use config::{ItemRules, MagicRules};
pub use error::{ItemError, RegistryError};
pub use rng::GameRng;
