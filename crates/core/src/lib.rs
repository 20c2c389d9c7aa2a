//! Baccarat shoe simulation core. Keep this crate free of IO and platform
//! concerns.

pub mod cards;
pub mod config;
pub mod engine;
pub mod events;
pub mod hand;
pub mod rng;
pub mod road;
pub mod rules;
pub mod shoe;
pub mod stats;
pub mod strategy;

pub use cards::*;
pub use config::*;
pub use engine::*;
pub use events::*;
pub use hand::*;
pub use rng::*;
pub use road::*;
pub use rules::*;
pub use shoe::*;
pub use stats::*;
pub use strategy::*;
