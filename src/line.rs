use rand::Rng;
use serde::{Serialize, Deserialize};


/// Lowest coordinate a sampled point can have.
pub const COORD_MIN: i32 = -101;
/// Number of distinct coordinate values a sampled point can have.
pub const COORD_SPAN: i32 = 201;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline(always)]
    pub fn new(x: i32, y: i32) -> Self { Self { x, y } }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(0..COORD_SPAN) + COORD_MIN,
            y: rng.gen_range(0..COORD_SPAN) + COORD_MIN,
        }
    }

    #[inline(always)]
    pub fn inputs(&self) -> [f64; 2] { [self.x as f64, self.y as f64] }
}

/// Ground truth boundary `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub slope: i32,
    pub intercept: i32,
}

impl Line {
    #[inline(always)]
    pub fn new(slope: i32, intercept: i32) -> Self { Self { slope, intercept } }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            slope: rng.gen_range(0..11) - 6,
            intercept: rng.gen_range(0..101) - 51,
        }
    }

    /// Widened to `i64` so any `i32` inputs evaluate without overflow.
    #[inline(always)]
    pub fn eval(&self, x: i32) -> i64 { self.slope as i64 * x as i64 + self.intercept as i64 }
}

/// 1 if the point lies strictly above the line, 0 otherwise (on the line included).
#[inline(always)]
pub fn label_point(point: &Point, line: &Line) -> u8 {
    if point.y as i64 > line.eval(point.x) { 1 } else { 0 }
}
