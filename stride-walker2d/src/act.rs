//! Action for [`Walker2dEnv`](crate::Walker2dEnv).
use ndarray::Array1;
use stride_core::Act;

/// Action for [`Walker2dEnv`](crate::Walker2dEnv).
///
/// One control value per actuated joint of the loaded model.
#[derive(Clone, Debug)]
pub struct Walker2dAct {
    /// Control vector.
    pub act: Array1<f64>,
}

impl Walker2dAct {
    /// Constructs an action.
    pub fn new(act: Array1<f64>) -> Self {
        Self { act }
    }
}

impl From<Vec<f64>> for Walker2dAct {
    fn from(act: Vec<f64>) -> Self {
        Self {
            act: Array1::from(act),
        }
    }
}

impl Act for Walker2dAct {
    fn len(&self) -> usize {
        1
    }
}
