//! Observation of [`Walker2dEnv`](crate::Walker2dEnv).
use ndarray::Array1;
use stride_core::Obs;

/// Observation of [`Walker2dEnv`](crate::Walker2dEnv).
///
/// One flat vector: the generalized positions, optionally without the
/// horizontal displacement, followed by the generalized velocities clamped
/// element-wise to `[-10, 10]`.
#[derive(Clone, Debug)]
pub struct Walker2dObs {
    /// The observation vector.
    pub obs: Array1<f64>,
}

impl From<Array1<f64>> for Walker2dObs {
    fn from(obs: Array1<f64>) -> Self {
        Self { obs }
    }
}

impl Obs for Walker2dObs {
    fn dummy(_n: usize) -> Self {
        Self {
            obs: Array1::zeros(0),
        }
    }

    fn len(&self) -> usize {
        1
    }
}
