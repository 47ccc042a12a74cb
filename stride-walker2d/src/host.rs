//! Boundary with the physics engine that owns the simulated state.
use anyhow::Result;
use ndarray::{Array1, ArrayView1};

/// Rendering camera settings.
///
/// Render-only; applying these has no effect on the simulation, the reward
/// or the observation.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    /// Index of the body tracked by the camera.
    pub trackbodyid: i64,

    /// Distance from the camera to the tracked body.
    pub distance: f64,

    /// Look-at point. `None` components leave the host's value unchanged.
    pub lookat: [Option<f64>; 3],

    /// Camera elevation in degrees.
    pub elevation: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            trackbodyid: 2,
            distance: 4.0,
            lookat: [None, None, Some(1.15)],
            elevation: -20.0,
        }
    }
}

/// Owns the simulated physical state of a model and advances it.
///
/// The state consists of a generalized position vector `qpos` and a
/// generalized velocity vector `qvel`. The environment reads and replaces
/// the state only through this trait; how the host integrates it is opaque.
/// The host also owns the seeded random sampler so that episodes are
/// reproducible for a given seed.
pub trait PhysicsHost {
    /// Loads a named model description and establishes the initial state.
    ///
    /// `seed` initializes the host's random sampler.
    fn load(model_name: &str, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Advances the state by `n_frames` integration steps under `ctrl`.
    ///
    /// This is the sole state-mutating call during an environment step.
    /// Fails if `ctrl` does not match the dimensionality expected by the
    /// loaded model.
    fn advance(&mut self, ctrl: ArrayView1<'_, f64>, n_frames: usize) -> Result<()>;

    /// Current generalized positions.
    fn qpos(&self) -> &Array1<f64>;

    /// Current generalized velocities.
    fn qvel(&self) -> &Array1<f64>;

    /// Replaces the full physical state.
    fn set_state(&mut self, qpos: Array1<f64>, qvel: Array1<f64>);

    /// Positions of the canonical rest pose of the loaded model.
    fn init_qpos(&self) -> &Array1<f64>;

    /// Velocities of the canonical rest pose of the loaded model.
    fn init_qvel(&self) -> &Array1<f64>;

    /// Number of generalized position coordinates.
    fn nq(&self) -> usize {
        self.init_qpos().len()
    }

    /// Number of generalized velocity coordinates.
    fn nv(&self) -> usize {
        self.init_qvel().len()
    }

    /// Duration of one integration step in seconds.
    fn timestep(&self) -> f64;

    /// Draws `n` samples uniformly from `[low, high)` with the host's
    /// seeded generator.
    fn uniform(&mut self, low: f64, high: f64, n: usize) -> Array1<f64>;

    /// Reseeds the host's generator.
    fn reseed(&mut self, seed: i64);

    /// Applies camera settings. Hosts without a viewer ignore this.
    fn set_camera(&mut self, _config: &CameraConfig) {}
}
