use crate::model::params::Parameters;
use crate::model::propagate::Gradients;

/// Plain batch gradient descent.
pub struct GradientDescent {
    pub learning_rate: f64,
}

impl GradientDescent {
    pub fn new(learning_rate: f64) -> GradientDescent {
        GradientDescent { learning_rate }
    }

    /// Applies one update in place: `w -= α·dw`, `b -= α·db`.
    pub fn step(&self, params: &mut Parameters, grads: &Gradients) {
        let lr = self.learning_rate;
        for (w, dw) in params.w.iter_mut().zip(grads.dw.iter()) {
            *w -= lr * dw;
        }
        params.b -= lr * grads.db;
    }
}
