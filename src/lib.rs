//! Everyday calculator helpers gathered behind one import.
//!
//! Each concern lives in its own workspace crate; this facade re-exports them
//! so a front-end (the bundled binaries, a scratch program, a notebook kernel)
//! can reach every constant and function by path from a single dependency.

pub mod cli;

pub use desk_config as config;
pub use desk_core::{constants, geometry, si, stats, trig, vector};
pub use desk_dataplan as dataplan;
pub use desk_diceware as diceware;
pub use desk_format as format;
pub use desk_thermo as thermo;
pub use desk_units as units;

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
