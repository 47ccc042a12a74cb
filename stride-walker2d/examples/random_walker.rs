use anyhow::Result;
use stride_core::Env as _;
use stride_walker2d::{util::KinematicHost, Walker2dAct, Walker2dEnv, Walker2dEnvConfig};

type Env = Walker2dEnv<KinematicHost>;

fn random_act() -> Walker2dAct {
    (0..6)
        .map(|_| 2.0 * fastrand::f64() - 1.0)
        .collect::<Vec<_>>()
        .into()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    fastrand::seed(42);

    let config = Walker2dEnvConfig::default().max_steps(Some(200));
    let mut env = Env::build(&config, 42)?;
    env.viewer_setup();

    let mut r_total = 0f32;
    let _ = env.reset(None)?;
    for _ in 0..1000 {
        let (step, record) = env.step_with_reset(&random_act());
        r_total += step.reward[0];
        if step.is_done() {
            log::info!(
                "episode ended, last x_velocity = {}",
                record.get_scalar("x_velocity")?
            );
        }
    }
    log::info!("total reward over 1000 steps = {}", r_total);

    Ok(())
}
