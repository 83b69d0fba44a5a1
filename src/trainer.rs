use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::{label_point, Line, Perceptron, PerceptronError, Point};


/// Points drawn by a verification pass. Fixed, so the correct count reads as a percentage.
pub const VERIFY_SAMPLES: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrainStats {
    pub iterations: usize,
    /// Steps where the prediction was wrong and the weights moved.
    pub adjustments: usize,
}

/// Fixed-budget online trainer. Runs exactly `iterations` steps, no early stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trainer {
    pub learning_rate: f64,
    pub iterations: usize,
}

impl Default for Trainer {
    fn default() -> Self {
        Self { learning_rate: 0.1, iterations: 100000 }
    }
}

impl Trainer {
    pub fn new(iterations: usize, learning_rate: f64) -> Self {
        Self { learning_rate, iterations }
    }

    pub fn train<R: Rng + ?Sized>(&self, perceptron: &mut Perceptron, line: &Line, rng: &mut R) -> Result<TrainStats, PerceptronError> {
        perceptron.check_inputs(2)?;
        if !(self.learning_rate > 0.) {
            return Err(PerceptronError::InvalidLearningRate(self.learning_rate));
        }

        let report_every = (self.iterations / 10).max(1);
        let mut stats = TrainStats { iterations: self.iterations, adjustments: 0 };

        for i in 0..self.iterations {
            let point = Point::random(rng);
            let inputs = point.inputs();

            let actual = perceptron.predict_unchecked(&inputs);
            let expected = label_point(&point, line);
            let delta = expected as i32 - actual as i32;

            if delta != 0 {
                stats.adjustments += 1;
            }
            perceptron.adjust_unchecked(&inputs, delta, self.learning_rate);

            if (i + 1) % report_every == 0 {
                tracing::debug!(iteration = i + 1, adjustments = stats.adjustments, "training progress");
            }
        }

        tracing::info!(iterations = stats.iterations, adjustments = stats.adjustments, "training finished");
        Ok(stats)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub point: Point,
    pub predicted: u8,
    pub expected: u8,
}

impl Record {
    #[inline(always)]
    pub fn is_correct(&self) -> bool { self.predicted == self.expected }

    #[inline(always)]
    pub fn is_positive(&self) -> bool { self.predicted == 1 }
}

/// Lazy verification pass: yields exactly [`VERIFY_SAMPLES`] records, drawing
/// one fresh point from `rng` per record.
pub struct Verification<'a, R: Rng + ?Sized> {
    perceptron: &'a Perceptron,
    line: &'a Line,
    rng: &'a mut R,
    remaining: usize,
}

impl<'a, R: Rng + ?Sized> Verification<'a, R> {
    pub fn correct_count(self) -> usize {
        self.filter(Record::is_correct).count()
    }
}

impl<'a, R: Rng + ?Sized> Iterator for Verification<'a, R> {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let point = Point::random(&mut *self.rng);
        let record = Record {
            point,
            predicted: self.perceptron.predict_unchecked(&point.inputs()),
            expected: label_point(&point, self.line),
        };
        tracing::trace!(x = point.x, y = point.y, predicted = record.predicted, expected = record.expected, "verified point");
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, R: Rng + ?Sized> ExactSizeIterator for Verification<'a, R> {}

pub fn verify<'a, R: Rng + ?Sized>(perceptron: &'a Perceptron, line: &'a Line, rng: &'a mut R) -> Result<Verification<'a, R>, PerceptronError> {
    perceptron.check_inputs(2)?;
    Ok(Verification { perceptron, line, rng, remaining: VERIFY_SAMPLES })
}
