//! Seeded random obstacle grids.
//!
//! [`generate`] draws one uniform sample per cell and turns it into a wall
//! with probability [`GenConfig::wall_probability`]. The top-left (start) and
//! bottom-right (goal) cells are always left open. Generation is fully
//! determined by the configuration and the seed.

pub mod config;
pub mod error;
pub mod mapgen;

pub use config::{DEFAULT_WALL_PROBABILITY, GenConfig};
pub use error::GenError;
pub use mapgen::{Generated, generate, generate_with_rng};
