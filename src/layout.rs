use tracing::trace;

use crate::Value;
use crate::binary_search_tree::{BinarySearchTree, TreeNode};
use crate::surface::Point;

pub const DEFAULT_ANCHOR_Y: f64 = 30.0;
pub const DEFAULT_SPACING: f64 = 800.0;
pub const DEFAULT_VERTICAL_STEP: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Root,
    Left,
    Right,
}

/// A node with its computed position on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    pub value: Value,
    /// edges from the root, counted during the walk
    pub depth: usize,
    pub side: Side,
    pub position: Point,
    pub parent: Option<Point>,
}

/// Positions nodes by halving the horizontal spread at every level.
///
/// The root sits on `anchor`. A child at depth `d` is shifted
/// `spacing / 2^d` left or right of its parent and `vertical_step` down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub anchor: Point,
    pub spacing: f64,
    pub vertical_step: f64,
}

impl Layout {
    /// Default geometry with the root centered horizontally.
    pub fn centered(width: f64) -> Self {
        Self {
            anchor: Point::new(width / 2.0, DEFAULT_ANCHOR_Y),
            spacing: DEFAULT_SPACING,
            vertical_step: DEFAULT_VERTICAL_STEP,
        }
    }

    pub fn horizontal_offset(&self, depth: usize) -> f64 {
        self.spacing / 2f64.powi(depth as i32)
    }

    pub fn child_position(&self, parent: Point, depth: usize, side: Side) -> Point {
        let offset = self.horizontal_offset(depth);
        let x = match side {
            Side::Left => parent.x - offset,
            Side::Right => parent.x + offset,
            Side::Root => parent.x,
        };
        Point::new(x, parent.y + self.vertical_step)
    }

    /// Places every node in preorder: node, left subtree, right subtree.
    pub fn place(&self, tree: &BinarySearchTree) -> Vec<PlacedNode> {
        let mut placed = Vec::with_capacity(tree.insertion_order().len());
        if let Some(root) = tree.root() {
            placed.push(PlacedNode {
                value: root.value(),
                depth: 0,
                side: Side::Root,
                position: self.anchor,
                parent: None,
            });
            self.place_children(root, self.anchor, 0, &mut placed);
        }
        placed
    }

    fn place_children(&self, node: &TreeNode, at: Point, depth: usize, placed: &mut Vec<PlacedNode>) {
        for (child, side) in [(node.left(), Side::Left), (node.right(), Side::Right)] {
            let Some(child) = child else {
                continue;
            };
            let position = self.child_position(at, depth + 1, side);
            trace!(value = child.value(), depth = depth + 1, x = position.x, y = position.y, "placed");
            placed.push(PlacedNode {
                value: child.value(),
                depth: depth + 1,
                side,
                position,
                parent: Some(at),
            });
            self.place_children(child, position, depth + 1, placed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 800.0)]
    #[case(1, 400.0)]
    #[case(2, 200.0)]
    #[case(3, 100.0)]
    #[case(6, 12.5)]
    fn test_horizontal_offset(#[case] depth: usize, #[case] expected: f64) {
        assert_eq!(Layout::centered(1000.0).horizontal_offset(depth), expected);
    }

    #[test]
    fn test_offset_strictly_decreases() {
        let layout = Layout::centered(1000.0);
        for depth in 1..20 {
            assert!(layout.horizontal_offset(depth + 1) < layout.horizontal_offset(depth));
        }
    }

    #[test]
    fn test_child_position() {
        let layout = Layout::centered(1000.0);
        let parent = Point::new(500.0, 30.0);
        assert_eq!(layout.child_position(parent, 1, Side::Left), Point::new(100.0, 90.0));
        assert_eq!(layout.child_position(parent, 1, Side::Right), Point::new(900.0, 90.0));
        assert_eq!(layout.child_position(parent, 2, Side::Right), Point::new(700.0, 90.0));
    }

    #[test]
    fn test_place_balanced_tree() {
        let tree = BinarySearchTree::from_sorted(&[1, 2, 3, 4, 5]);
        let placed = Layout::centered(1000.0).place(&tree);

        let summary: Vec<_> = placed.iter().map(|p| (p.value, p.depth, p.side)).collect();
        assert_eq!(
            summary,
            vec![
                (3, 0, Side::Root),
                (2, 1, Side::Left),
                (1, 2, Side::Left),
                (5, 1, Side::Right),
                (4, 2, Side::Left),
            ]
        );

        assert_eq!(placed[0].position, Point::new(500.0, 30.0));
        assert_eq!(placed[0].parent, None);
        assert_eq!(placed[1].position, Point::new(100.0, 90.0));
        assert_eq!(placed[2].position, Point::new(-100.0, 150.0));
        assert_eq!(placed[2].parent, Some(Point::new(100.0, 90.0)));
        assert_eq!(placed[3].position, Point::new(900.0, 90.0));
        assert_eq!(placed[4].position, Point::new(700.0, 150.0));
    }

    #[test]
    fn test_place_uses_walk_depth() {
        // a right-leaning chain still gets depth from the root
        let tree = BinarySearchTree::from_insertions(&[1, 2, 3, 4]);
        let placed = Layout::centered(1000.0).place(&tree);
        let xs: Vec<_> = placed.iter().map(|p| p.position.x).collect();
        assert_eq!(xs, vec![500.0, 900.0, 1100.0, 1200.0]);
        assert!(placed.iter().enumerate().all(|(i, p)| p.depth == i));
    }

    #[test]
    fn test_place_empty_tree() {
        assert!(Layout::centered(1000.0).place(&BinarySearchTree::new()).is_empty());
    }
}
