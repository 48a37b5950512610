//! __rcellauto-lib__ is a small engine for two-state, life-like cellular
//! automata on a fixed-size grid with hard edges (no wraparound).
//!
//! A [`World`] owns the grid and advances it one generation at a time
//! according to a [`Rule`], which tells for each neighbor count whether a
//! dead cell is born and whether a living cell survives. Rules come from a
//! named [`Preset`] or from explicit birth/survival digit strings.
//!
//! The usual entry point is a [`Config`]:
//!
//! ```rust
//! use rcellauto_lib::Config;
//!
//! let mut world = Config::new(28, 28)
//!     .set_ruleset(Some(String::from("highlife")))
//!     .set_density(50)
//!     .world()?;
//! world.step();
//! # Ok::<(), rcellauto_lib::Error>(())
//! ```
//!
//! The engine itself is purely computational: rendering, timers and
//! command-line parsing belong to a frontend that calls [`World::step`] and
//! [`World::randomize`] and reads the grid back.

mod cells;
mod config;
mod error;
mod rules;
mod world;

pub use cells::{Coord, State};
pub use config::Config;
pub use error::Error;
pub use rules::{Preset, Rule, PRESETS};
pub use world::World;
