//! Core functionalities.
mod env;
mod step;
pub use env::Env;
use std::fmt::Debug;
pub use step::{Info, Step};

/// An observation emitted by an environment.
///
/// The interface is written for a single environment instance, so
/// [Obs]`::len()` is expected to return 1.
pub trait Obs: Clone + Debug {
    /// Returns a placeholder observation.
    ///
    /// Used where the interface requires an observation that no caller
    /// will look at, for example as `init_obs` of a step that did not end
    /// an episode.
    fn dummy(n: usize) -> Self;

    /// Returns the number of observations in the object.
    fn len(&self) -> usize;
}

/// An action applied to an environment.
pub trait Act: Clone + Debug {
    /// Returns the number of actions in the object.
    fn len(&self) -> usize;
}
