//! Environment step.
use super::Env;

/// Additional information attached to `Obs` and `Act` at every step.
pub trait Info {}

impl Info for () {}

/// The result of one interaction step: the applied action, the observation
/// and reward that followed it, and the episode-end flags.
///
/// Callers may use consecutive [`Step`] objects to assemble transitions
/// `(o_t, a_t, o_t+1, r_t)`.
pub struct Step<E: Env> {
    /// Action applied at this step.
    pub act: E::Act,

    /// Observation after the step.
    pub obs: E::Obs,

    /// Reward of the step.
    pub reward: Vec<f32>,

    /// Nonzero if the episode terminated at this step.
    pub is_terminated: Vec<i8>,

    /// Nonzero if the episode was truncated at this step.
    pub is_truncated: Vec<i8>,

    /// Information defined by the environment.
    pub info: E::Info,

    /// Initial observation of the next episode. Ignored unless the episode
    /// ended at this step.
    pub init_obs: E::Obs,
}

impl<E: Env> Step<E> {
    /// Constructs a [`Step`] object.
    pub fn new(
        obs: E::Obs,
        act: E::Act,
        reward: Vec<f32>,
        is_terminated: Vec<i8>,
        is_truncated: Vec<i8>,
        info: E::Info,
        init_obs: E::Obs,
    ) -> Self {
        Step {
            act,
            obs,
            reward,
            is_terminated,
            is_truncated,
            info,
            init_obs,
        }
    }

    #[inline]
    /// Terminated or truncated.
    pub fn is_done(&self) -> bool {
        self.is_terminated[0] == 1 || self.is_truncated[0] == 1
    }
}
