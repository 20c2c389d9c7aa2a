//! Drives a shoe engine hand by hand and reports on the result.

mod config;
mod error;
mod multi;
mod report;
mod session;

pub use config::*;
pub use error::*;
pub use multi::*;
pub use report::*;
pub use session::*;
