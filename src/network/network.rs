use crate::{
    activation::activation::Relu,
    errors::ShapeError,
    loss::mse::MseLoss,
    math::matrix::Matrix,
    network::params::{Gradients, Params},
};

/// Intermediate values of a forward pass, kept for the backward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardCache {
    /// inputs · W1 + b1
    pub hidden_pre: Matrix,
    /// max(hidden_pre, 0)
    pub hidden_act: Matrix,
    /// hidden_act · W2 + b2
    pub output: Matrix,
}

pub fn forward(params: &Params, inputs: &Matrix) -> Result<ForwardCache, ShapeError> {
    let hidden_pre = params.hidden.linear(inputs)?;
    let hidden_act = Relu::forward(&hidden_pre);
    let output = params.output.linear(&hidden_act)?;
    Ok(ForwardCache { hidden_pre, hidden_act, output })
}

/// Closed-form gradients of the MSE loss w.r.t. every parameter.
pub fn backward(
    params: &Params,
    inputs: &Matrix,
    targets: &Matrix,
    cache: &ForwardCache,
) -> Result<Gradients, ShapeError> {
    let d_output = MseLoss::derivative(&cache.output, targets)?;
    let output = params.output.compute_gradients(&cache.hidden_act, &d_output)?;

    let d_hidden_act = params.output.backprop_delta(&d_output)?;
    let d_hidden_pre = d_hidden_act.hadamard(&Relu::mask(&cache.hidden_pre))?;
    let hidden = params.hidden.compute_gradients(inputs, &d_hidden_pre)?;

    Ok(Gradients { hidden, output })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::dense::Dense;

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_data(rows).unwrap()
    }

    // F = 1, H = 2, hand-checked values.
    fn tiny_params() -> Params {
        Params {
            hidden: Dense { weights: m(vec![vec![1.0, -1.0]]), biases: m(vec![vec![0.0, 0.0]]) },
            output: Dense { weights: m(vec![vec![2.0], vec![3.0]]), biases: m(vec![vec![0.5]]) },
        }
    }

    #[test]
    fn forward_known_values() {
        let cache = forward(&tiny_params(), &m(vec![vec![2.0]])).unwrap();
        assert_eq!(cache.hidden_pre.data, vec![vec![2.0, -2.0]]);
        assert_eq!(cache.hidden_act.data, vec![vec![2.0, 0.0]]);
        assert_eq!(cache.output.data, vec![vec![4.5]]);
    }

    #[test]
    fn backward_known_values() {
        let params = tiny_params();
        let x = m(vec![vec![2.0]]);
        let y = m(vec![vec![0.5]]);
        let cache = forward(&params, &x).unwrap();
        let g = backward(&params, &x, &y, &cache).unwrap();

        // d_output = 2 * (4.5 - 0.5) / 1 = 8
        assert_eq!(g.output.biases.data, vec![vec![8.0]]);
        assert_eq!(g.output.weights.data, vec![vec![16.0], vec![0.0]]);
        // d_hidden_act = 8 * [2, 3]; second unit is inactive
        assert_eq!(g.hidden.biases.data, vec![vec![16.0, 0.0]]);
        assert_eq!(g.hidden.weights.data, vec![vec![32.0, 0.0]]);
    }

    #[test]
    fn zero_pre_activation_blocks_gradient() {
        let mut params = tiny_params();
        params.hidden.weights = m(vec![vec![0.0, 1.0]]);
        let x = m(vec![vec![1.0]]);
        let y = m(vec![vec![0.0]]);
        let cache = forward(&params, &x).unwrap();
        assert_eq!(cache.hidden_pre.data[0][0], 0.0);

        let g = backward(&params, &x, &y, &cache).unwrap();
        assert_eq!(g.hidden.weights.data[0][0], 0.0);
        assert_eq!(g.hidden.biases.data[0][0], 0.0);
    }
}
