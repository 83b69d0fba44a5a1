use rand::Rng;

use crate::{activation::heaviside, PerceptronError};


#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    bias: f64,
    weights: Vec<f64>,
}

#[inline(always)]
fn rand_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>() * 2. - 1.
}

impl Perceptron {
    /// Perceptron with `input_count` weights and a bias, all drawn from [-1, 1).
    pub fn new<R: Rng + ?Sized>(input_count: usize, rng: &mut R) -> Result<Self, PerceptronError> {
        if input_count == 0 {
            return Err(PerceptronError::InvalidConstruction(input_count));
        }
        let weights = (0..input_count).map(|_| rand_unit(rng)).collect();
        Ok(Self { weights, bias: rand_unit(rng) })
    }

    pub fn from_parts(weights: Vec<f64>, bias: f64) -> Result<Self, PerceptronError> {
        if weights.is_empty() {
            return Err(PerceptronError::InvalidConstruction(0));
        }
        Ok(Self { weights, bias })
    }

    #[inline(always)]
    pub fn bias(&self) -> f64 { self.bias }
    #[inline(always)]
    pub fn weights(&self) -> &[f64] { &self.weights }
    #[inline(always)]
    pub fn input_count(&self) -> usize { self.weights.len() }

    #[inline(always)]
    pub fn check_inputs(&self, got: usize) -> Result<(), PerceptronError> {
        if got != self.weights.len() {
            return Err(PerceptronError::DimensionMismatch { expected: self.weights.len(), got });
        }
        Ok(())
    }

    #[inline(always)]
    fn sum(&self, inputs: &[f64]) -> f64 {
        let mut sum = self.bias;
        for (input, weight) in inputs.iter().zip(self.weights.iter()) {
            sum += input * weight;
        }
        sum
    }

    /// `bias + sum(weights[i] * inputs[i])`, before activation.
    pub fn weighted_sum(&self, inputs: &[f64]) -> Result<f64, PerceptronError> {
        self.check_inputs(inputs.len())?;
        Ok(self.sum(inputs))
    }

    pub fn predict(&self, inputs: &[f64]) -> Result<u8, PerceptronError> {
        self.weighted_sum(inputs).map(heaviside)
    }

    /// Caller must have passed `inputs.len()` through `check_inputs`.
    #[inline(always)]
    pub(crate) fn predict_unchecked(&self, inputs: &[f64]) -> u8 {
        heaviside(self.sum(inputs))
    }

    /// Perceptron learning rule. `delta` is expected label minus predicted label.
    pub fn adjust(&mut self, inputs: &[f64], delta: i32, learning_rate: f64) -> Result<(), PerceptronError> {
        self.check_inputs(inputs.len())?;
        self.adjust_unchecked(inputs, delta, learning_rate);
        Ok(())
    }

    /// Caller must have passed `inputs.len()` through `check_inputs`.
    #[inline(always)]
    pub(crate) fn adjust_unchecked(&mut self, inputs: &[f64], delta: i32, learning_rate: f64) {
        if delta == 0 {
            return;
        }
        let delta = delta as f64;
        for (weight, input) in self.weights.iter_mut().zip(inputs.iter()) {
            *weight += input * delta * learning_rate;
        }
        self.bias += delta * learning_rate;
    }
}
