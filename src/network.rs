//! A feedforward network made of sigmoid units, trained one example at a time
//! by backpropagating the output error and descending the gradient in place.

use rand::Rng;
use rand_distr::Distribution;

pub mod error;

use error::NetworkError;

/// The logistic squashing function, `1 / (1 + e^(-x))`.
///
/// Saturates instead of failing at the extremes: for very negative `x` the
/// exponential overflows to infinity and the result is 0, for very positive
/// `x` it vanishes and the result is 1.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// A single neuron holding a set of weights and a bias.
///
/// The number of weights is fixed at construction and equals the length of the
/// input vector the unit will be fed. Weights and bias are only ever mutated
/// by [`Network::train_step`].
#[derive(Debug, Clone)]
pub struct Unit {
    weights: Vec<f64>,
    bias: f64,
}

impl Unit {
    /// Create a new unit with randomized weights and bias.
    fn new<R, D>(fan_in: usize, rng: &mut R, distribution: D) -> Self
    where
        R: Rng,
        D: Distribution<f64> + Copy,
    {
        Self {
            weights: (0..fan_in).map(|_| rng.sample(distribution)).collect(),
            bias: rng.sample(distribution),
        }
    }

    /// Get the unit's weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Get the unit's bias.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Compute the unit's activation, the sigmoid of the bias plus the
    /// weighted sum of the inputs. Pure; mutates nothing.
    ///
    /// # Panics
    ///
    /// Panics if the input length does not match the unit's fan-in. Going
    /// through [`Network::predict`] or [`Network::train_step`] validates the
    /// length up front and returns an error instead.
    pub fn activate(&self, inputs: &[f64]) -> f64 {
        assert_eq!(inputs.len(), self.weights.len());
        let sum = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias, |acc, (w, x)| acc + w * x);
        sigmoid(sum)
    }
}

/// A network of two layers of units, one hidden and one output.
///
/// Layer sizes are immutable after construction. [`Network::predict`] takes
/// `&self` and [`Network::train_step`] takes `&mut self`, so the borrow
/// checker enforces the exclusive-writer, shared-reader discipline; a host
/// sharing one instance across threads wraps it in a lock.
#[derive(Debug, Clone)]
pub struct Network {
    input_size: usize,
    hidden_size: usize,
    output_size: usize,
    hidden_layer: Vec<Unit>,
    output_layer: Vec<Unit>,
}

impl Network {
    /// Create a new network with randomized units, with every weight and bias
    /// drawn independently from the given distribution.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidConfiguration`] if any layer size is zero.
    pub fn new<R, D>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        rng: &mut R,
        distribution: D,
    ) -> Result<Self, NetworkError>
    where
        R: Rng,
        D: Distribution<f64> + Copy,
    {
        if input_size == 0 || hidden_size == 0 || output_size == 0 {
            return Err(NetworkError::InvalidConfiguration(
                input_size,
                hidden_size,
                output_size,
            ));
        }
        let hidden_layer = (0..hidden_size)
            .map(|_| Unit::new(input_size, rng, distribution))
            .collect();
        let output_layer = (0..output_size)
            .map(|_| Unit::new(hidden_size, rng, distribution))
            .collect();
        Ok(Self {
            input_size,
            hidden_size,
            output_size,
            hidden_layer,
            output_layer,
        })
    }

    /// Get the length of the input vector the network accepts.
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Get the number of hidden units.
    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Get the length of the output vector the network produces.
    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// Get the units of the hidden layer.
    pub fn hidden_layer(&self) -> &[Unit] {
        &self.hidden_layer
    }

    /// Get the units of the output layer.
    pub fn output_layer(&self) -> &[Unit] {
        &self.output_layer
    }

    /// Feed the inputs forward through both layers and return the output
    /// activations. Deterministic given the current weights; mutates nothing.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::DimensionMismatch`] if the input length does
    /// not match the network's input size.
    pub fn predict(&self, inputs: &[f64]) -> Result<Vec<f64>, NetworkError> {
        if inputs.len() != self.input_size {
            return Err(NetworkError::DimensionMismatch(
                self.input_size,
                inputs.len(),
            ));
        }
        let hidden_outputs: Vec<_> = self
            .hidden_layer
            .iter()
            .map(|unit| unit.activate(inputs))
            .collect();
        Ok(self
            .output_layer
            .iter()
            .map(|unit| unit.activate(&hidden_outputs))
            .collect())
    }

    /// Perform one step of online training: a forward pass, error
    /// backpropagation, and an in-place gradient-descent update of every
    /// weight and bias, scaled by the learning rate.
    ///
    /// A learning rate of zero is a legal no-op.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::DimensionMismatch`] if the input or target
    /// length does not match the corresponding layer size. The check happens
    /// before any update, so a failed call leaves the network untouched.
    pub fn train_step(
        &mut self,
        inputs: &[f64],
        targets: &[f64],
        learning_rate: f64,
    ) -> Result<(), NetworkError> {
        if inputs.len() != self.input_size {
            return Err(NetworkError::DimensionMismatch(
                self.input_size,
                inputs.len(),
            ));
        }
        if targets.len() != self.output_size {
            return Err(NetworkError::DimensionMismatch(
                self.output_size,
                targets.len(),
            ));
        }

        let hidden_outputs: Vec<_> = self
            .hidden_layer
            .iter()
            .map(|unit| unit.activate(inputs))
            .collect();
        let outputs: Vec<_> = self
            .output_layer
            .iter()
            .map(|unit| unit.activate(&hidden_outputs))
            .collect();

        let output_errors: Vec<_> = targets
            .iter()
            .zip(&outputs)
            .map(|(target, output)| target - output)
            .collect();

        // The hidden errors must come from the output weights as they were
        // before this step's update.
        let hidden_errors: Vec<f64> = (0..self.hidden_size)
            .map(|h| {
                self.output_layer
                    .iter()
                    .zip(&output_errors)
                    .map(|(unit, err)| unit.weights[h] * err)
                    .sum()
            })
            .collect();

        for (i, unit) in self.output_layer.iter_mut().enumerate() {
            let delta = output_errors[i] * outputs[i] * (1.0 - outputs[i]);
            for (weight, hidden_output) in unit.weights.iter_mut().zip(&hidden_outputs) {
                *weight += learning_rate * delta * hidden_output;
            }
            unit.bias += learning_rate * delta;
        }

        for (h, unit) in self.hidden_layer.iter_mut().enumerate() {
            let delta = hidden_errors[h] * hidden_outputs[h] * (1.0 - hidden_outputs[h]);
            for (weight, input) in unit.weights.iter_mut().zip(inputs) {
                *weight += learning_rate * delta * input;
            }
            unit.bias += learning_rate * delta;
        }

        Ok(())
    }
}
