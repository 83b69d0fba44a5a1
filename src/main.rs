use std::{path::PathBuf, time::{SystemTime, UNIX_EPOCH}};

use clap::Parser;
use line_perceptron::{create_parent_dir, print_perceptron, render_verification, report_line, verify, Canvas, ImageCanvas, Line, Perceptron, Record, Trainer};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;


/// Trains a perceptron to tell points above a random line from points below it.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Run {
    #[clap(long, default_value_t = 100000)]
    iterations: usize,
    #[clap(long, default_value_t = 0.1)]
    learning_rate: f64,
    /// Random seed; derived from the clock when omitted
    #[clap(long)]
    seed: Option<u64>,
    /// Where the rendered verification image goes
    #[clap(short, long, default_value = "result.png")]
    output: PathBuf,
    /// Also write the verification records as JSON
    #[clap(long)]
    records: Option<PathBuf>,
    #[clap(long)]
    no_image: bool,
}

impl Run {
    fn exec(self) -> anyhow::Result<()> {
        let seed = match self.seed {
            Some(seed) => seed,
            None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos() as u64,
        };
        tracing::info!(seed, "seeding random source");
        let mut rng = StdRng::seed_from_u64(seed);

        let line = Line::random(&mut rng);
        tracing::info!(slope = line.slope, intercept = line.intercept, "generated line");

        let mut perceptron = Perceptron::new(2, &mut rng)?;

        let trainer = Trainer::new(self.iterations, self.learning_rate);
        trainer.train(&mut perceptron, &line, &mut rng)?;
        print_perceptron("trained ", &perceptron);

        let records: Vec<Record> = verify(&perceptron, &line, &mut rng)?.collect();
        let correct = records.iter().filter(|r| r.is_correct()).count();

        if !self.no_image {
            let mut canvas = ImageCanvas::new(&self.output);
            render_verification(&mut canvas, &line, records.iter().copied());
            canvas.save()?;
            tracing::info!(path = %self.output.display(), "saved image");
        }

        if let Some(path) = self.records {
            create_parent_dir(&path)?;
            std::fs::write(&path, serde_json::to_string_pretty(&records)?)?;
            tracing::info!(path = %path.display(), "saved verification records");
        }

        println!("{}", report_line(correct));
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    Run::parse().exec()
}
