//! Folder-tree diagram layout: turns a pre-order file list into connectors
//! and labels on a 2-D grid, wrapping into new columns when a column fills.

mod engine;

pub use engine::{layout_folder, layout_tree};

/// Grid geometry for the diagram, in drawing units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal distance between nesting levels.
    pub horizontal_step: f64,
    /// Vertical distance between consecutive nodes.
    pub vertical_step: f64,
    /// Horizontal offset added per wrap column.
    pub wrap_width: f64,
    /// Maximum vertical extent of one column before wrapping.
    pub column_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_step: 0.5,
            vertical_step: 0.5,
            wrap_width: 8.0,
            column_height: 30.0,
        }
    }
}

impl LayoutConfig {
    pub fn x(&self, depth: usize, wrap: usize) -> f64 {
        depth as f64 * self.horizontal_step + wrap as f64 * self.wrap_width
    }

    pub fn y(&self, node: usize, wrap: usize) -> f64 {
        -(node as f64 * self.vertical_step - wrap as f64 * self.column_height)
    }

    pub fn point(&self, depth: usize, node: usize, wrap: usize) -> Point {
        Point {
            x: self.x(depth, wrap),
            y: self.y(node, wrap),
        }
    }

    /// Whether placing `node` would run past the bottom of column `wrap`.
    pub(crate) fn overflows(&self, node: usize, wrap: usize) -> bool {
        node as f64 * self.vertical_step - wrap as f64 * self.column_height > self.column_height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Progress through the input: items consumed, nodes placed, wrap column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub item: usize,
    pub node: usize,
    pub wrap: usize,
}

/// A drawing primitive produced by the layout.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Right-angle line: down from `from`, then across to `to`.
    Connector { from: Point, to: Point },
    /// Folder name drawn over an opaque background.
    FolderLabel { text: String, at: Point },
    /// File name linked to its listing; `path` is the `/`-separated path
    /// the layout received, unique per file.
    FileLabel {
        text: String,
        path: String,
        at: Point,
    },
}

impl DrawCommand {
    /// Anchor of a label, or the end point of a connector.
    pub fn position(&self) -> Point {
        match self {
            DrawCommand::Connector { to, .. } => *to,
            DrawCommand::FolderLabel { at, .. } | DrawCommand::FileLabel { at, .. } => *at,
        }
    }
}

/// Commands produced by a (sub)tree layout plus the cursor after it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeLayout {
    pub connectors: Vec<DrawCommand>,
    pub labels: Vec<DrawCommand>,
    pub cursor: Cursor,
}

impl TreeLayout {
    fn starting_at(cursor: Cursor) -> Self {
        Self {
            connectors: Vec::new(),
            labels: Vec::new(),
            cursor,
        }
    }

    /// Append a child layout and adopt its cursor.
    fn absorb(&mut self, child: TreeLayout) {
        self.connectors.extend(child.connectors);
        self.labels.extend(child.labels);
        self.cursor = child.cursor;
    }

    /// True when every one of `len` input items was placed.
    pub fn is_complete(&self, len: usize) -> bool {
        self.cursor.item == len
    }
}
