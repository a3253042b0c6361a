//! Pool → tree → drawing pipeline.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::binary_search_tree::BinarySearchTree;
use crate::error::Result;
use crate::number_pool::NumberPool;
use crate::render::{RenderStats, TreeRenderer};
use crate::surface::{RecordingSurface, Surface};
use crate::svg::SvgSurface;

pub const DEFAULT_WIDTH: u32 = 1600;
pub const DEFAULT_HEIGHT: u32 = 900;
pub const DEFAULT_OUTPUT: &str = "tree.svg";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// sort the pool, then pick midpoints
    #[default]
    Balanced,
    /// insert the pool in draw order
    Sequential,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub pool: NumberPool,
    pub strategy: Strategy,
    pub seed: Option<u64>,
    pub output: PathBuf,
    /// render without writing the drawing anywhere
    pub dry_run: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            pool: NumberPool::default(),
            strategy: Strategy::default(),
            seed: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            dry_run: false,
        }
    }
}

/// Draws a fresh pool and builds a new tree from it.
pub fn build_tree(settings: &Settings) -> Result<BinarySearchTree> {
    let numbers = match settings.seed {
        Some(seed) => settings.pool.generate_with(&mut StdRng::seed_from_u64(seed))?,
        None => settings.pool.generate()?,
    };

    let tree = match settings.strategy {
        Strategy::Balanced => BinarySearchTree::from_sorted(&numbers),
        Strategy::Sequential => BinarySearchTree::from_insertions(&numbers),
    };
    Ok(tree)
}

pub fn visualize<S: Surface + ?Sized>(
    tree: &BinarySearchTree,
    renderer: &TreeRenderer,
    surface: &mut S,
) -> RenderStats {
    renderer.render(tree, surface)
}

/// Builds a tree, draws it to an SVG canvas and saves the canvas to
/// `settings.output`. With `dry_run` the drawing is only recorded and
/// nothing is written. Returns the tree for inspection.
pub fn run(settings: &Settings) -> Result<BinarySearchTree> {
    let tree = build_tree(settings)?;

    if settings.dry_run {
        let mut surface = RecordingSurface::new(settings.width as f64, settings.height as f64);
        let renderer = TreeRenderer::for_surface(&surface);
        let stats = visualize(&tree, &renderer, &mut surface);
        info!(
            nodes = stats.nodes,
            edges = stats.edges,
            height = tree.height(),
            "tree drawn (dry run)"
        );
        debug!("{tree:#?}");
        return Ok(tree);
    }

    let mut surface = SvgSurface::new(settings.width as f64, settings.height as f64);
    let renderer = TreeRenderer::for_surface(&surface);
    let stats = visualize(&tree, &renderer, &mut surface);
    surface.save(&settings.output)?;

    info!(
        nodes = stats.nodes,
        edges = stats.edges,
        height = tree.height(),
        output = %settings.output.display(),
        "tree drawn"
    );
    debug!("{tree:#?}");
    Ok(tree)
}
