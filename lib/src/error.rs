//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
///
/// These can only arise when a world is configured; once a [`World`] is
/// built, stepping and randomizing it cannot fail.
///
/// [`World`]: crate::World
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Width / height should be positive.
    NonPositiveError,
    /// Density should be a percentage between 0 and 100, got {0}.
    DensityError(u32),
}
