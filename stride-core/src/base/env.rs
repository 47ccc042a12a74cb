//! Environment.
use super::{Act, Info, Obs, Step};
use crate::record::Record;
use anyhow::Result;

/// An environment, typically an MDP.
///
/// An environment is constructed from a configuration and a random seed,
/// then driven through alternating `reset` and `step` calls. Every step
/// returns a [`Step`] object together with a [`Record`] of per-step
/// diagnostic values.
pub trait Env {
    /// Configuration of the environment.
    type Config: Clone;

    /// Observation emitted by the environment.
    type Obs: Obs;

    /// Action accepted by the environment.
    type Act: Act;

    /// Additional information attached to every [`Step`].
    type Info: Info;

    /// Builds the environment. `seed` initializes whatever randomness the
    /// environment owns.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Applies an action and advances the environment by one control step.
    fn step(&mut self, a: &Self::Act) -> (Step<Self>, Record)
    where
        Self: Sized;

    /// Resets the environment and returns the initial observation.
    ///
    /// With `is_done = None` the environment always resets. Otherwise
    /// `is_done` is expected to hold a single flag and the reset happens
    /// only if it is nonzero; a dummy observation is returned when the
    /// reset is skipped.
    fn reset(&mut self, is_done: Option<&Vec<i8>>) -> Result<Self::Obs>;

    /// Like [`Env::step`], but resets the environment when the step ends
    /// the episode. The observation of the new episode is stored in the
    /// `init_obs` field of the returned [`Step`].
    fn step_with_reset(&mut self, a: &Self::Act) -> (Step<Self>, Record)
    where
        Self: Sized;

    /// Resets the environment with a given index.
    ///
    /// The index is used in an environment-defined way, typically as a
    /// random seed so that evaluation episodes are reproducible.
    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs>;
}
