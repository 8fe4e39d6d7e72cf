//! Command line arguments.

use clap::Parser;
use puzzlen_core::ShuffleSeed;
use puzzlen_game::{DEFAULT_CELL_SIZE, DEFAULT_DIMENSION, PuzzleConfig, ShuffleMode};

/// Sliding-tile puzzle of N x M cells.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Number of columns, from 3 to 10.
    #[arg(value_name = "N", default_value_t = DEFAULT_DIMENSION)]
    pub width: usize,

    /// Number of rows, from 3 to 10. Defaults to N.
    #[arg(value_name = "M")]
    pub height: Option<usize>,

    /// Size of a cell in pixels, from 10 to 100.
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Only produce solvable layouts when shuffling.
    #[arg(long)]
    pub solvable: bool,

    /// Shuffle once at startup with this seed (1 to 16 hex digits).
    #[arg(long, value_name = "HEX")]
    pub seed: Option<ShuffleSeed>,
}

impl Args {
    /// Builds the (unvalidated) puzzle configuration.
    #[must_use]
    pub fn to_config(&self) -> PuzzleConfig {
        let shuffle_mode = if self.solvable {
            ShuffleMode::Solvable
        } else {
            ShuffleMode::Unconstrained
        };
        PuzzleConfig::new(self.width, self.height.unwrap_or(self.width))
            .with_cell_size(self.cell_size)
            .with_shuffle_mode(shuffle_mode)
    }
}
