#![warn(missing_docs)]
//! A biped locomotion (Walker2d) environment implementing
//! [`stride_core::Env`].
//!
//! The environment is a thin adapter over a physics engine reached through
//! the [`PhysicsHost`] trait: it asks the host to advance the simulated body
//! under an action, reads back the generalized positions and velocities, and
//! turns them into an observation, a scalar reward and a termination flag.
//! The reward is `forward_reward_weight * x_velocity + survive_reward -
//! ctrl_cost_weight * sum(action^2)`; the episode terminates when the torso
//! height or tilt angle leaves its healthy range.
//!
//! The physics integration itself is delegated entirely to the host. The
//! crate ships [`util::KinematicHost`], a deterministic headless host used
//! by the tests and the bundled example:
//!
//! ```rust
//! use anyhow::Result;
//! use stride_core::Env as _;
//! use stride_walker2d::{util::KinematicHost, Walker2dAct, Walker2dEnv, Walker2dEnvConfig};
//!
//! fn main() -> Result<()> {
//!     let config = Walker2dEnvConfig::default();
//!     let mut env = Walker2dEnv::<KinematicHost>::build(&config, 42)?;
//!
//!     let mut obs = env.reset(None)?;
//!     for _ in 0..10 {
//!         let act = Walker2dAct::from(vec![0.0; 6]);
//!         let (step, _record) = env.step(&act);
//!         if step.is_done() {
//!             obs = env.reset(None)?;
//!         } else {
//!             obs = step.obs;
//!         }
//!     }
//!     let _ = obs;
//!
//!     Ok(())
//! }
//! ```
mod act;
mod config;
mod env;
mod host;
mod obs;
pub mod util;
pub use act::Walker2dAct;
pub use config::Walker2dEnvConfig;
pub use env::{Walker2dEnv, Walker2dInfo, FRAME_SKIP};
pub use host::{CameraConfig, PhysicsHost};
pub use obs::Walker2dObs;
