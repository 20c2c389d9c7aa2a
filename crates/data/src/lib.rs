//! Loading and layering of simulation configuration.

pub mod load;

pub use load::*;
