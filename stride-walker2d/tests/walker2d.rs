//! Behavior of the Walker2d environment over the kinematic test host.
use anyhow::Result;
use ndarray::Array1;
use stride_core::Env as _;
use stride_walker2d::{
    util::KinematicHost, CameraConfig, PhysicsHost, Walker2dAct, Walker2dEnv, Walker2dEnvConfig,
};

type Env = Walker2dEnv<KinematicHost>;

const NQ: usize = 9;
const NV: usize = 9;
const REST_HEIGHT: f64 = 1.25;

fn build_env(config: &Walker2dEnvConfig) -> Env {
    Env::build(config, 42).unwrap()
}

fn zero_act() -> Walker2dAct {
    Walker2dAct::from(vec![0.0; 6])
}

/// Sets the host state to the rest pose with the given height, angle and
/// velocities.
fn set_state(env: &mut Env, z: f64, angle: f64, qvel: Vec<f64>) {
    let mut qpos = Array1::zeros(NQ);
    qpos[1] = z;
    qpos[2] = angle;
    env.host_mut().set_state(qpos, Array1::from(qvel));
}

#[test]
fn test_control_cost() {
    let env = build_env(&Walker2dEnvConfig::default());

    assert_eq!(env.control_cost(&zero_act()), 0.0);

    let act = Walker2dAct::from(vec![0.1, -0.2, 0.3, 0.0, 0.5, -1.0]);
    let sum_sq: f64 = act.act.iter().map(|a| a * a).sum();
    assert_eq!(env.control_cost(&act), 1e-3 * sum_sq);

    let env = build_env(&Walker2dEnvConfig::default().ctrl_cost_weight(2.0));
    assert_eq!(env.control_cost(&act), 2.0 * sum_sq);
}

#[test]
fn test_is_healthy_at_rest_pose() {
    let mut env = build_env(&Walker2dEnvConfig::default());
    set_state(&mut env, REST_HEIGHT, 0.0, vec![0.0; NV]);
    assert!(env.is_healthy());
    assert!(!env.done());
}

#[test]
fn test_unhealthy_height_regardless_of_angle() {
    let mut env = build_env(&Walker2dEnvConfig::default());
    for angle in [-0.5, 0.0, 0.5] {
        set_state(&mut env, 0.5, angle, vec![0.0; NV]);
        assert!(!env.is_healthy());
        assert!(env.done());
    }
}

#[test]
fn test_healthy_bounds_are_exclusive() {
    let mut env = build_env(&Walker2dEnvConfig::default());

    // Boundary values count as unhealthy.
    set_state(&mut env, 0.8, 0.0, vec![0.0; NV]);
    assert!(!env.is_healthy());
    set_state(&mut env, 2.0, 0.0, vec![0.0; NV]);
    assert!(!env.is_healthy());
    set_state(&mut env, REST_HEIGHT, -1.0, vec![0.0; NV]);
    assert!(!env.is_healthy());
    set_state(&mut env, REST_HEIGHT, 1.0, vec![0.0; NV]);
    assert!(!env.is_healthy());

    set_state(&mut env, 0.81, 0.99, vec![0.0; NV]);
    assert!(env.is_healthy());
}

#[test]
fn test_observation_length() {
    let env = build_env(&Walker2dEnvConfig::default());
    assert_eq!(env.observation().obs.len(), NQ - 1 + NV);

    let config =
        Walker2dEnvConfig::default().exclude_current_positions_from_observation(false);
    let env = build_env(&config);
    assert_eq!(env.observation().obs.len(), NQ + NV);
}

#[test]
fn test_observation_includes_x_position_when_not_excluded() {
    let config =
        Walker2dEnvConfig::default().exclude_current_positions_from_observation(false);
    let mut env = build_env(&config);

    let mut qpos = Array1::zeros(NQ);
    qpos[0] = 3.7;
    qpos[1] = REST_HEIGHT;
    env.host_mut().set_state(qpos, Array1::zeros(NV));

    assert_eq!(env.observation().obs[0], 3.7);
}

#[test]
fn test_observation_clamps_velocities() {
    let mut env = build_env(&Walker2dEnvConfig::default());
    let mut qvel = vec![0.0; NV];
    qvel[3] = 15.0;
    qvel[4] = -15.0;
    qvel[5] = 3.0;
    set_state(&mut env, REST_HEIGHT, 0.0, qvel);

    let obs = env.observation().obs;
    // Velocities follow the 8 shaped position coordinates.
    assert_eq!(obs[8 + 3], 10.0);
    assert_eq!(obs[8 + 4], -10.0);
    assert_eq!(obs[8 + 5], 3.0);
}

#[test]
fn test_step_reward() {
    let mut env = build_env(&Walker2dEnvConfig::default());

    // Constant x velocity of 10: over dt = 4 * 0.002 the displacement is
    // 0.08, so the recovered velocity is 10 again.
    let mut qvel = vec![0.0; NV];
    qvel[0] = 10.0;
    set_state(&mut env, REST_HEIGHT, 0.0, qvel);

    // Two unit controls: ctrl_cost = 1e-3 * 2 = 0.002.
    let act = Walker2dAct::from(vec![1.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
    let (step, record) = env.step(&act);

    assert!((step.reward[0] - 10.998).abs() < 1e-5);
    assert_eq!(step.is_terminated[0], 0);
    assert_eq!(step.is_truncated[0], 0);
    assert!((record.get_scalar("x_velocity").unwrap() - 10.0).abs() < 1e-5);
    assert!((record.get_scalar("ctrl_cost").unwrap() - 0.002).abs() < 1e-8);
}

#[test]
fn test_step_terminates_when_unhealthy() {
    let mut env = build_env(&Walker2dEnvConfig::default());

    // Falling fast enough to leave the healthy height range in one step.
    let mut qvel = vec![0.0; NV];
    qvel[1] = -100.0;
    set_state(&mut env, REST_HEIGHT, 0.0, qvel);

    let (step, _) = env.step(&zero_act());
    assert_eq!(step.is_terminated[0], 1);
    assert!(step.is_done());
}

#[test]
fn test_reset_perturbation_bounds() -> Result<()> {
    let mut env = build_env(&Walker2dEnvConfig::default());

    for _ in 0..1000 {
        let obs = env.reset(None)?.obs;
        assert_eq!(obs.len(), NQ - 1 + NV);

        // First element is the torso height around the rest pose; every
        // other coordinate starts at zero.
        assert!((obs[0] - REST_HEIGHT).abs() <= 5e-3);
        for v in obs.iter().skip(1) {
            assert!(v.abs() <= 5e-3);
        }
    }

    Ok(())
}

#[test]
fn test_reset_with_index_is_reproducible() -> Result<()> {
    let mut env = build_env(&Walker2dEnvConfig::default());

    let obs1 = env.reset_with_index(7)?.obs;
    let obs2 = env.reset_with_index(7)?.obs;
    assert_eq!(obs1, obs2);

    Ok(())
}

#[test]
fn test_reset_skipped_when_not_done() -> Result<()> {
    let mut env = build_env(&Walker2dEnvConfig::default());

    let obs = env.reset(Some(&vec![0]))?;
    assert_eq!(obs.obs.len(), 0);

    let obs = env.reset(Some(&vec![1]))?;
    assert_eq!(obs.obs.len(), NQ - 1 + NV);

    Ok(())
}

#[test]
fn test_truncation_by_max_steps() -> Result<()> {
    let mut env = build_env(&Walker2dEnvConfig::default().max_steps(Some(5)));
    env.reset(None)?;

    for i in 1..=5 {
        let (step, _) = env.step(&zero_act());
        if i < 5 {
            assert!(!step.is_done());
        } else {
            assert_eq!(step.is_truncated[0], 1);
            assert!(step.is_done());
        }
    }

    Ok(())
}

#[test]
fn test_step_with_reset_provides_init_obs() -> Result<()> {
    let mut env = build_env(&Walker2dEnvConfig::default().max_steps(Some(1)));
    env.reset(None)?;

    let (step, _) = env.step_with_reset(&zero_act());
    assert!(step.is_done());
    assert_eq!(step.init_obs.obs.len(), NQ - 1 + NV);

    Ok(())
}

#[test]
fn test_viewer_setup_applies_default_camera() {
    let mut env = build_env(&Walker2dEnvConfig::default());
    assert!(env.host().camera().is_none());

    env.viewer_setup();
    assert_eq!(env.host().camera(), Some(&CameraConfig::default()));
}

#[test]
fn test_host_rejects_bad_inputs() {
    assert!(KinematicHost::load("hopper", 0).is_err());

    let mut host = KinematicHost::load("walker2d", 0).unwrap();
    let ctrl = Array1::zeros(4);
    assert!(host.advance(ctrl.view(), 4).is_err());
}
