use tracing::{debug, trace};

use crate::Value;

#[derive(Debug, Default)]
pub struct BinarySearchTree {
    root: Option<Box<TreeNode>>,
    // every registered value, in the order nodes were created
    insertion_order: Vec<Value>,
    // raw numbers the tree was built from, as given
    numbers: Vec<Value>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode {
    value: Value,
    depth: usize,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn leaf(value: Value, depth: usize) -> Box<Self> {
        Box::new(Self {
            value,
            depth,
            left: None,
            right: None,
        })
    }

    pub fn value(&self) -> Value {
        self.value
    }

    /// distance from the root recorded when the node was created
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }
}

impl BinarySearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds by inserting `numbers` one at a time, in the given order.
    pub fn from_insertions(numbers: &[Value]) -> Self {
        let mut tree = Self::new();
        tree.numbers = numbers.to_vec();
        for &value in numbers {
            tree.insert(value);
        }
        debug!(nodes = tree.len(), height = tree.height(), "built tree by insertion");
        tree
    }

    /// Builds a height-balanced tree by picking the middle of the sorted
    /// numbers as each subtree's root.
    pub fn from_sorted(numbers: &[Value]) -> Self {
        let mut sorted = numbers.to_vec();
        sorted.sort();

        let mut insertion_order = Vec::with_capacity(sorted.len());
        let root = Self::balanced_from_sorted(&sorted, 0, &mut insertion_order);

        let tree = Self {
            root,
            insertion_order,
            numbers: numbers.to_vec(),
        };
        debug!(nodes = tree.len(), height = tree.height(), "built balanced tree");
        tree
    }

    // nodes are registered in preorder, the order their midpoints are chosen
    fn balanced_from_sorted(
        sorted: &[Value],
        depth: usize,
        registered: &mut Vec<Value>,
    ) -> Option<Box<TreeNode>> {
        match sorted {
            [] => None,
            [value] => {
                registered.push(*value);
                Some(TreeNode::leaf(*value, depth))
            }
            _ => {
                let mut mid = sorted.len() / 2;
                // equal values belong on the right
                while mid > 0 && sorted[mid - 1] == sorted[mid] {
                    mid -= 1;
                }
                let (lower, rest) = sorted.split_at(mid);
                let value = rest[0];
                registered.push(value);

                let mut node = TreeNode::leaf(value, depth);
                node.left = Self::balanced_from_sorted(lower, depth + 1, registered);
                node.right = Self::balanced_from_sorted(&rest[1..], depth + 1, registered);
                Some(node)
            }
        }
    }

    /// Inserts `value` with the usual comparison walk, ties going right.
    /// Returns the depth of the new node.
    pub fn insert(&mut self, value: Value) -> usize {
        let depth = Self::insert_recursive(&mut self.root, value, 0);
        self.insertion_order.push(value);
        trace!(value, depth, "inserted");
        depth
    }

    fn insert_recursive(node: &mut Option<Box<TreeNode>>, value: Value, depth: usize) -> usize {
        match node {
            None => {
                *node = Some(TreeNode::leaf(value, depth));
                depth
            }
            Some(n) => {
                if value < n.value {
                    Self::insert_recursive(&mut n.left, value, depth + 1)
                } else {
                    Self::insert_recursive(&mut n.right, value, depth + 1)
                }
            }
        }
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    pub fn numbers(&self) -> &[Value] {
        &self.numbers
    }

    pub fn insertion_order(&self) -> &[Value] {
        &self.insertion_order
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        Self::len_recursive(&self.root)
    }

    fn len_recursive(node: &Option<Box<TreeNode>>) -> usize {
        match node {
            None => 0,
            Some(n) => 1 + Self::len_recursive(&n.left) + Self::len_recursive(&n.right),
        }
    }

    /// number of levels; an empty tree has height 0
    pub fn height(&self) -> usize {
        Self::height_recursive(&self.root)
    }

    fn height_recursive(node: &Option<Box<TreeNode>>) -> usize {
        match node {
            None => 0,
            Some(n) => 1 + Self::height_recursive(&n.left).max(Self::height_recursive(&n.right)),
        }
    }

    pub fn contains(&self, value: Value) -> bool {
        Self::contains_recursive(&self.root, value)
    }

    fn contains_recursive(node: &Option<Box<TreeNode>>, value: Value) -> bool {
        match node {
            None => false,
            Some(n) => {
                if value == n.value {
                    true
                } else if value < n.value {
                    Self::contains_recursive(&n.left, value)
                } else {
                    Self::contains_recursive(&n.right, value)
                }
            }
        }
    }

    pub fn in_order(&self) -> Vec<Value> {
        let mut values = Vec::with_capacity(self.insertion_order.len());
        Self::in_order_recursive(&self.root, &mut values);
        values
    }

    fn in_order_recursive(node: &Option<Box<TreeNode>>, values: &mut Vec<Value>) {
        if let Some(n) = node {
            Self::in_order_recursive(&n.left, values);
            values.push(n.value);
            Self::in_order_recursive(&n.right, values);
        }
    }

    /// Checks left subtree < node <= right subtree at every node.
    pub fn is_ordered(&self) -> bool {
        Self::is_ordered_recursive(&self.root, None, None)
    }

    // lower is inclusive, upper is exclusive
    fn is_ordered_recursive(
        node: &Option<Box<TreeNode>>,
        lower: Option<Value>,
        upper: Option<Value>,
    ) -> bool {
        match node {
            None => true,
            Some(n) => {
                if lower.is_some_and(|lo| n.value < lo) || upper.is_some_and(|hi| n.value >= hi) {
                    return false;
                }
                Self::is_ordered_recursive(&n.left, lower, Some(n.value))
                    && Self::is_ordered_recursive(&n.right, Some(n.value), upper)
            }
        }
    }

    pub fn pretty_print(&self) {
        print!("{}", self.to_pretty_string());
    }

    pub fn to_pretty_string(&self) -> String {
        let mut out = String::from("\n=== Binary Search Tree ===\n");
        if self.root.is_none() {
            out.push_str("  (empty tree)\n");
        } else {
            Self::print_tree(&self.root, "", true, &mut out);
        }
        out.push_str("=========================\n\n");
        out
    }

    fn print_tree(node: &Option<Box<TreeNode>>, prefix: &str, is_tail: bool, out: &mut String) {
        if let Some(n) = node {
            out.push_str(&format!(
                "{}{} {}\n",
                prefix,
                if is_tail { "└──" } else { "├──" },
                n.value
            ));

            let new_prefix = format!("{}{}", prefix, if is_tail { "    " } else { "│   " });

            if n.right.is_some() {
                Self::print_tree(&n.right, &new_prefix, n.left.is_none(), out);
            }
            if n.left.is_some() {
                Self::print_tree(&n.left, &new_prefix, true, out);
            }
        }
    }
}
