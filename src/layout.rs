//! Tree layout engine
//!
//! Converts a `TreeNode` tree into absolute 2D geometry plus orthogonal
//! connector segments. The pass is arena-style: every placed node is pushed
//! into one `Vec<LayoutNode>` in pre-order, children are referenced by
//! index, and connectors are routed in a second pass over the finished
//! arena. All output is ephemeral; nothing here is persisted.
//!
//! Placement threads a y-cursor through the recursion as a return value:
//! a leaf returns `y + node_height + vertical_spacing`, an internal node
//! returns the cursor after its last child's subtree. A parent keeps the y
//! it was invoked with, so its row lines up with its first child's row
//! rather than being centered on its children's span. Downstream consumers
//! depend on that anchoring; changing it changes every rendered diagram.

use crate::models::{NodeKind, TreeNode};

/// x-coordinate of the root node
pub const START_X: i64 = 90;

/// Estimated label width per character; an approximation, not font metrics
const CHAR_WIDTH: i64 = 9;
/// Horizontal padding inside a node box (icon + gaps)
const LABEL_PADDING: i64 = 42;
/// Narrowest box emitted regardless of label
const MIN_NODE_WIDTH: i64 = 90;
/// Distance from a parent's right edge to its connector trunk
const TRUNK_OFFSET: i64 = 30;

/// Geometry computed for one tree node
#[derive(Debug)]
pub struct LayoutNode<'a> {
    /// The tree node this geometry belongs to
    pub node: &'a TreeNode,
    /// Left edge of the box
    pub x: i64,
    /// Vertical center-line of the box's row
    pub y: i64,
    /// Box width, derived from the label
    pub width: i64,
    /// Tree depth, root = 0
    pub depth: u32,
    /// Arena indices of this node's children, in placement order
    pub children: Vec<usize>,
}

impl LayoutNode<'_> {
    pub fn kind(&self) -> NodeKind {
        self.node.kind
    }

    /// x-coordinate of the box's right edge
    pub fn right(&self) -> i64 {
        self.x + self.width
    }
}

/// Orientation of a connector segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One straight connector segment between a parent and its children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub from: (i64, i64),
    pub to: (i64, i64),
    pub orientation: Orientation,
}

/// Spacing inputs for a layout pass
#[derive(Debug, Clone, Copy)]
pub struct LayoutParams {
    pub start_y: i64,
    pub node_height: i64,
    pub vertical_spacing: i64,
    pub horizontal_spacing: i64,
}

/// Result of laying out one tree
#[derive(Debug)]
pub struct Layout<'a> {
    /// Placed nodes in pre-order
    pub nodes: Vec<LayoutNode<'a>>,
    /// Connector segments, grouped per parent in node order
    pub connections: Vec<Connection>,
    /// Final y-cursor past the last row; canvas height derives from this
    pub max_y: i64,
}

/// Estimate the box width for a label.
///
/// Character count times a fixed per-char width, plus padding, floored at
/// the minimum box width. Monotone in label length.
pub fn node_width(name: &str) -> i64 {
    (name.chars().count() as i64 * CHAR_WIDTH + LABEL_PADDING).max(MIN_NODE_WIDTH)
}

/// Lay out a tree: place every node, then route connectors.
pub fn layout_tree<'a>(root: &'a TreeNode, params: &LayoutParams) -> Layout<'a> {
    let mut nodes = Vec::new();
    let max_y = place(root, START_X, params.start_y, 0, params, &mut nodes);

    let mut connections = Vec::new();
    for index in 0..nodes.len() {
        route(&nodes, index, &mut connections);
    }

    Layout {
        nodes,
        connections,
        max_y,
    }
}

/// Place `node` at (x, y) and recurse into its children.
///
/// Returns the y-cursor past this subtree's full extent.
fn place<'a>(
    node: &'a TreeNode,
    x: i64,
    y: i64,
    depth: u32,
    params: &LayoutParams,
    arena: &mut Vec<LayoutNode<'a>>,
) -> i64 {
    let index = arena.len();
    arena.push(LayoutNode {
        node,
        x,
        y,
        width: node_width(&node.name),
        depth,
        children: Vec::new(),
    });

    if node.children.is_empty() {
        return y + params.node_height + params.vertical_spacing;
    }

    // Depth alone fixes the child x-band; box widths never shift it.
    let child_x = x + params.horizontal_spacing;
    let mut cursor = y;
    let mut child_indices = Vec::with_capacity(node.children.len());
    for (i, child) in node.children.iter().enumerate() {
        if i > 0 {
            cursor += params.vertical_spacing;
        }
        child_indices.push(arena.len());
        cursor = place(child, child_x, cursor, depth + 1, params, arena);
    }
    arena[index].children = child_indices;
    cursor
}

/// Emit elbow connectors for one parent: a stub from its right edge to the
/// trunk, a trunk spanning first-to-last child when there are several, and
/// one segment from the trunk to each child's left edge.
fn route(nodes: &[LayoutNode], parent: usize, out: &mut Vec<Connection>) {
    let p = &nodes[parent];
    if p.children.is_empty() {
        return;
    }

    let trunk_x = p.right() + TRUNK_OFFSET;
    out.push(Connection {
        from: (p.right(), p.y),
        to: (trunk_x, p.y),
        orientation: Orientation::Horizontal,
    });

    if p.children.len() > 1 {
        let first = &nodes[p.children[0]];
        let last = &nodes[p.children[p.children.len() - 1]];
        out.push(Connection {
            from: (trunk_x, first.y),
            to: (trunk_x, last.y),
            orientation: Orientation::Vertical,
        });
    }

    for &child in &p.children {
        let c = &nodes[child];
        out.push(Connection {
            from: (trunk_x, c.y),
            to: (c.x, c.y),
            orientation: Orientation::Horizontal,
        });
    }
}
