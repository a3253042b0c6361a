use tracing::debug;

use crate::binary_search_tree::BinarySearchTree;
use crate::layout::Layout;
use crate::style::Style;
use crate::surface::Surface;

pub const DEFAULT_RADIUS: f64 = 20.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub nodes: usize,
    pub edges: usize,
}

/// Draws a tree onto a [`Surface`].
#[derive(Debug, Clone)]
pub struct TreeRenderer {
    pub layout: Layout,
    pub radius: f64,
    pub style: Style,
}

impl TreeRenderer {
    pub fn new(layout: Layout, radius: f64, style: Style) -> Self {
        Self { layout, radius, style }
    }

    /// Default geometry and style, root centered on `surface`.
    pub fn for_surface<S: Surface + ?Sized>(surface: &S) -> Self {
        Self::new(Layout::centered(surface.width()), DEFAULT_RADIUS, Style::default())
    }

    /// Clears `surface` and draws the whole tree: each node's edge to its
    /// parent first, then the node itself.
    pub fn render<S: Surface + ?Sized>(&self, tree: &BinarySearchTree, surface: &mut S) -> RenderStats {
        surface.clear();

        let mut stats = RenderStats::default();
        for placed in self.layout.place(tree) {
            if let Some(parent) = placed.parent {
                surface.draw_edge(placed.position, parent, &self.style);
                stats.edges += 1;
            }
            surface.draw_node(placed.position, self.radius, &placed.value.to_string(), &self.style);
            stats.nodes += 1;
        }

        debug!(nodes = stats.nodes, edges = stats.edges, "rendered tree");
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, Point, RecordingSurface};
    use rstest::rstest;

    fn recording() -> RecordingSurface {
        RecordingSurface::new(1000.0, 600.0)
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(5)]
    #[case(52)]
    fn test_draw_counts(#[case] n: i32) {
        let numbers: Vec<_> = (1..=n).collect();
        let tree = BinarySearchTree::from_sorted(&numbers);
        let mut surface = recording();
        let stats = TreeRenderer::for_surface(&surface).render(&tree, &mut surface);

        assert_eq!(stats.nodes, n as usize);
        assert_eq!(stats.edges, n as usize - 1);
        assert_eq!(surface.node_count(), n as usize);
        assert_eq!(surface.edge_count(), n as usize - 1);
    }

    #[test]
    fn test_empty_tree_draws_nothing() {
        let mut surface = recording();
        let stats = TreeRenderer::for_surface(&surface).render(&BinarySearchTree::new(), &mut surface);
        assert_eq!(stats, RenderStats::default());
        assert_eq!(surface.commands(), &[DrawCommand::Clear]);
    }

    #[test]
    fn test_render_clears_previous_drawing() {
        let tree = BinarySearchTree::from_sorted(&[1, 2, 3]);
        let mut surface = recording();
        let renderer = TreeRenderer::for_surface(&surface);
        renderer.render(&tree, &mut surface);
        renderer.render(&tree, &mut surface);

        assert_eq!(surface.commands()[0], DrawCommand::Clear);
        assert_eq!(surface.node_count(), 3);
        assert_eq!(surface.edge_count(), 2);
    }

    #[test]
    fn test_command_order() {
        let tree = BinarySearchTree::from_sorted(&[1, 2, 3]);
        let mut surface = recording();
        TreeRenderer::for_surface(&surface).render(&tree, &mut surface);

        let root = Point::new(500.0, 30.0);
        let left = Point::new(100.0, 90.0);
        let right = Point::new(900.0, 90.0);
        let node = |center, label: &str| DrawCommand::Node {
            center,
            radius: DEFAULT_RADIUS,
            label: label.to_string(),
        };
        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::Clear,
                node(root, "2"),
                DrawCommand::Edge { from: left, to: root },
                node(left, "1"),
                DrawCommand::Edge { from: right, to: root },
                node(right, "3"),
            ]
        );
    }
}
