//! The Walker2d environment.
use crate::{CameraConfig, PhysicsHost, Walker2dAct, Walker2dEnvConfig, Walker2dObs};
use anyhow::Result;
use log::trace;
use ndarray::Array1;
use stride_core::{
    record::{Record, RecordValue},
    Env, Info, Obs, Step,
};

/// Number of physics integration steps per control step.
pub const FRAME_SKIP: usize = 4;

/// Name of the model description loaded into the physics host.
const MODEL_NAME: &str = "walker2d";

/// Bound of the uniform perturbation applied to the rest pose on reset.
///
/// Keeps the reset state close to the canonical rest pose while avoiding
/// deterministic repeats across episodes.
const RESET_NOISE: f64 = 5e-3;

/// Velocities are clamped to this magnitude in the observation.
const VELOCITY_CLIP: f64 = 10.0;

/// Information given at every step of the interaction with the environment.
///
/// Currently, it is empty and used to match the type signature.
pub struct Walker2dInfo {}

impl Info for Walker2dInfo {}

/// A biped locomotion environment over a physics host `H`.
///
/// The host owns the simulated state; this type only configures reward
/// weights and termination thresholds, translates the host's state into an
/// observation vector, computes the scalar reward and decides episode
/// termination. Termination does not gate further [`Env::step`] calls; the
/// caller is expected to reset after an episode ends.
pub struct Walker2dEnv<H: PhysicsHost> {
    host: H,

    forward_reward_weight: f64,

    ctrl_cost_weight: f64,

    survive_reward: f64,

    healthy_z_range: (f64, f64),

    healthy_angle_range: (f64, f64),

    exclude_current_positions_from_observation: bool,

    max_steps: Option<usize>,

    count_steps: usize,

    /// Applied to the host's sampler at the next call of the reset method.
    initial_seed: Option<i64>,
}

impl<H: PhysicsHost> Walker2dEnv<H> {
    /// Returns the quadratic control-effort penalty of `act`.
    pub fn control_cost(&self, act: &Walker2dAct) -> f64 {
        self.ctrl_cost_weight * act.act.iter().map(|a| a * a).sum::<f64>()
    }

    /// True iff the torso height and tilt angle are strictly inside their
    /// healthy ranges.
    pub fn is_healthy(&self) -> bool {
        let qpos = self.host.qpos();
        let (z, angle) = (qpos[1], qpos[2]);

        let (min_z, max_z) = self.healthy_z_range;
        let (min_angle, max_angle) = self.healthy_angle_range;

        let healthy_z = min_z < z && z < max_z;
        let healthy_angle = min_angle < angle && angle < max_angle;

        healthy_z && healthy_angle
    }

    /// Negation of [`Self::is_healthy`].
    pub fn done(&self) -> bool {
        !self.is_healthy()
    }

    /// Duration of one control step in seconds.
    pub fn dt(&self) -> f64 {
        self.host.timestep() * FRAME_SKIP as f64
    }

    /// Builds the observation vector from the current state.
    pub fn observation(&self) -> Walker2dObs {
        let qpos = self.host.qpos();
        let qvel = self.host.qvel();

        let skip = if self.exclude_current_positions_from_observation {
            1
        } else {
            0
        };
        let mut obs = Vec::with_capacity(qpos.len() - skip + qvel.len());
        obs.extend(qpos.iter().skip(skip));
        obs.extend(
            qvel.iter()
                .map(|v| v.clamp(-VELOCITY_CLIP, VELOCITY_CLIP)),
        );

        Array1::from(obs).into()
    }

    /// Replaces the state with the rest pose plus a small uniform
    /// perturbation and returns the resulting observation.
    fn reset_model(&mut self) -> Walker2dObs {
        let (nq, nv) = (self.host.nq(), self.host.nv());
        let noise_pos = self.host.uniform(-RESET_NOISE, RESET_NOISE, nq);
        let noise_vel = self.host.uniform(-RESET_NOISE, RESET_NOISE, nv);

        let qpos = self.host.init_qpos() + &noise_pos;
        let qvel = self.host.init_qvel() + &noise_vel;
        self.host.set_state(qpos, qvel);

        self.observation()
    }

    /// Configures the host's rendering camera. Render-only.
    pub fn viewer_setup(&mut self) {
        self.host.set_camera(&CameraConfig::default());
    }

    /// Returns the physics host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the physics host mutably, for direct state injection.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H: PhysicsHost> Env for Walker2dEnv<H> {
    type Config = Walker2dEnvConfig;
    type Obs = Walker2dObs;
    type Act = Walker2dAct;
    type Info = Walker2dInfo;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        let host = H::load(MODEL_NAME, seed)?;

        Ok(Self {
            host,
            forward_reward_weight: config.forward_reward_weight,
            ctrl_cost_weight: config.ctrl_cost_weight,
            survive_reward: config.survive_reward,
            healthy_z_range: config.healthy_z_range,
            healthy_angle_range: config.healthy_angle_range,
            exclude_current_positions_from_observation: config
                .exclude_current_positions_from_observation,
            max_steps: config.max_steps,
            count_steps: 0,
            initial_seed: None,
        })
    }

    /// Runs a step of the environment's dynamics.
    ///
    /// The returned [`Record`] carries the reward terms of the step.
    fn step(&mut self, a: &Self::Act) -> (Step<Self>, Record) {
        trace!("Walker2dEnv::step()");

        let x_position_before = self.host.qpos()[0];
        self.host
            .advance(a.act.view(), FRAME_SKIP)
            .expect("the physics host failed to advance the state");
        let x_position_after = self.host.qpos()[0];
        let x_velocity = (x_position_after - x_position_before) / self.dt();

        let ctrl_cost = self.control_cost(a);
        let forward_reward = self.forward_reward_weight * x_velocity;
        let reward = forward_reward + self.survive_reward - ctrl_cost;

        let observation = self.observation();
        let is_terminated = vec![if self.done() { 1 } else { 0 }];
        let mut is_truncated = vec![0];

        self.count_steps += 1;
        if let Some(max_steps) = self.max_steps {
            if self.count_steps >= max_steps {
                is_truncated[0] = 1;
                self.count_steps = 0;
            }
        }

        let record = Record::from_slice(&[
            ("x_velocity", RecordValue::Scalar(x_velocity as f32)),
            ("forward_reward", RecordValue::Scalar(forward_reward as f32)),
            ("ctrl_cost", RecordValue::Scalar(ctrl_cost as f32)),
        ]);

        let step = Step::new(
            observation,
            a.clone(),
            vec![reward as f32],
            is_terminated,
            is_truncated,
            Walker2dInfo {},
            Walker2dObs::dummy(1),
        );

        (step, record)
    }

    /// Resets the environment and returns an observation.
    ///
    /// The new state is the host's rest pose with every position and
    /// velocity coordinate perturbed uniformly in the reset-noise bound.
    fn reset(&mut self, is_done: Option<&Vec<i8>>) -> Result<Self::Obs> {
        trace!("Walker2dEnv::reset()");

        let reset = match is_done {
            None => true,
            Some(v) => {
                debug_assert_eq!(v.len(), 1);
                v[0] != 0
            }
        };

        if !reset {
            return Ok(Walker2dObs::dummy(1));
        }

        if let Some(seed) = self.initial_seed.take() {
            self.host.reseed(seed);
        }
        self.count_steps = 0;

        Ok(self.reset_model())
    }

    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs> {
        self.initial_seed = Some(ix as _);
        self.reset(None)
    }

    fn step_with_reset(&mut self, a: &Self::Act) -> (Step<Self>, Record)
    where
        Self: Sized,
    {
        let (step, record) = self.step(a);
        let step = if step.is_done() {
            let init_obs = self.reset(None).expect("reset failed after episode end");
            Step {
                act: step.act,
                obs: step.obs,
                reward: step.reward,
                is_terminated: step.is_terminated,
                is_truncated: step.is_truncated,
                info: step.info,
                init_obs,
            }
        } else {
            step
        };

        (step, record)
    }
}
