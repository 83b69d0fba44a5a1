mod activation;
mod error;
mod perceptron;
mod trainer;
mod canvas;
pub mod line;

pub use {
    activation::*,
    error::*,
    perceptron::*,
    trainer::*,
    canvas::*,
    line::{Line, Point, label_point}
};

use std::path::Path;

use colored::Colorize;


/// Writes the learned parameters to stderr, non-negative values in green, negative in red.
pub fn print_perceptron(comment: &str, perceptron: &Perceptron) {
    let paint = |v: f64| {
        let text = format!("{}{:.5}", if !(v < 0.) { "+" } else { "" }, v);
        if v < 0. { text.red() } else { text.green() }
    };

    let weights = perceptron.weights().iter().map(|w| paint(*w).to_string()).collect::<Vec<_>>();
    eprintln!("{}weights: [{}], bias: {}", comment, weights.join(", "), paint(perceptron.bias()));
}

/// Creates the directory an output file will be written into, if it has one.
pub fn create_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

pub fn report_line(correct: usize) -> String {
    format!("{}% of the answers were correct.", correct)
}
