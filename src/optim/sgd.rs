use crate::{errors::ShapeError, network::params::{Gradients, Params}};

/// Plain fixed-step gradient descent: `p -= lr * g`. No state is carried
/// between steps.
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one update to all four parameter arrays. Shapes are checked
    /// for every array before any of them is written.
    pub fn step(&self, params: &mut Params, grads: &Gradients) -> Result<(), ShapeError> {
        params.hidden.check_gradients(&grads.hidden)?;
        params.output.check_gradients(&grads.output)?;

        params.hidden.apply_gradients(&grads.hidden, self.learning_rate)?;
        params.output.apply_gradients(&grads.output, self.learning_rate)?;
        Ok(())
    }
}
