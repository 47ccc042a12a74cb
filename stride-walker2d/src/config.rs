//! Configuration of [`Walker2dEnv`](super::Walker2dEnv).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`Walker2dEnv`](super::Walker2dEnv).
///
/// All values are fixed for the lifetime of one environment instance.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Walker2dEnvConfig {
    /// Scales the horizontal-velocity reward term.
    pub forward_reward_weight: f64,

    /// Scales the quadratic control-effort penalty.
    pub ctrl_cost_weight: f64,

    /// Fixed bonus added to the reward at every step while alive.
    pub survive_reward: f64,

    /// Allowed torso-height interval, exclusive on both sides.
    pub healthy_z_range: (f64, f64),

    /// Allowed torso-tilt-angle interval, exclusive on both sides.
    pub healthy_angle_range: (f64, f64),

    /// Whether the horizontal displacement is dropped from the observation.
    pub exclude_current_positions_from_observation: bool,

    /// Truncates an episode after this many steps, if set.
    pub max_steps: Option<usize>,
}

impl Default for Walker2dEnvConfig {
    fn default() -> Self {
        Self {
            forward_reward_weight: 1.0,
            ctrl_cost_weight: 1e-3,
            survive_reward: 1.0,
            healthy_z_range: (0.8, 2.0),
            healthy_angle_range: (-1.0, 1.0),
            exclude_current_positions_from_observation: true,
            max_steps: None,
        }
    }
}

impl Walker2dEnvConfig {
    /// Sets the weight of the horizontal-velocity reward term.
    pub fn forward_reward_weight(mut self, v: f64) -> Self {
        self.forward_reward_weight = v;
        self
    }

    /// Sets the weight of the control-effort penalty.
    pub fn ctrl_cost_weight(mut self, v: f64) -> Self {
        self.ctrl_cost_weight = v;
        self
    }

    /// Sets the per-step survival bonus.
    pub fn survive_reward(mut self, v: f64) -> Self {
        self.survive_reward = v;
        self
    }

    /// Sets the allowed torso-height interval.
    pub fn healthy_z_range(mut self, v: (f64, f64)) -> Self {
        self.healthy_z_range = v;
        self
    }

    /// Sets the allowed torso-tilt-angle interval.
    pub fn healthy_angle_range(mut self, v: (f64, f64)) -> Self {
        self.healthy_angle_range = v;
        self
    }

    /// Sets whether the horizontal displacement is dropped from the
    /// observation.
    pub fn exclude_current_positions_from_observation(mut self, v: bool) -> Self {
        self.exclude_current_positions_from_observation = v;
        self
    }

    /// Sets the maximum number of steps in an episode.
    pub fn max_steps(mut self, v: Option<usize>) -> Self {
        self.max_steps = v;
        self
    }

    /// Constructs [`Walker2dEnvConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let config = serde_yaml::from_reader(rdr)?;
        Ok(config)
    }

    /// Saves [`Walker2dEnvConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
