//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::Value;
use crate::app::{DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_WIDTH, Settings, Strategy};
use crate::number_pool::{DEFAULT_COUNT, DEFAULT_MAX, DEFAULT_MIN, NumberPool};

/// Build a binary search tree from random unique numbers and draw it as SVG
#[derive(Parser, Debug)]
#[command(name = "bst-canvas")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Canvas width in pixels
    #[arg(long, env = "BST_CANVAS_WIDTH", default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, env = "BST_CANVAS_HEIGHT", default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// How many unique numbers to draw
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Smallest number that may be drawn
    #[arg(long, default_value_t = DEFAULT_MIN, allow_negative_numbers = true)]
    pub min: Value,

    /// Largest number that may be drawn
    #[arg(long, default_value_t = DEFAULT_MAX, allow_negative_numbers = true)]
    pub max: Value,

    /// Seed for a reproducible pool
    #[arg(long, env = "BST_CANVAS_SEED")]
    pub seed: Option<u64>,

    /// How the tree is built from the pool
    #[arg(long, value_enum, default_value_t = StrategyArg::Balanced)]
    pub strategy: StrategyArg,

    /// Where to write the SVG drawing
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Render without writing the SVG file
    #[arg(long)]
    pub dry_run: bool,

    /// Print the tree as text after drawing it
    #[arg(short, long)]
    pub print: bool,

    /// Debug level, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyArg {
    Balanced,
    Sequential,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Balanced => Strategy::Balanced,
            StrategyArg::Sequential => Strategy::Sequential,
        }
    }
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            width: self.width,
            height: self.height,
            pool: NumberPool::new(self.count, self.min, self.max),
            strategy: self.strategy.into(),
            seed: self.seed,
            output: self.output.clone(),
            dry_run: self.dry_run,
        }
    }
}
