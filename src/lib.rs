//! treesvg - render folder/file trees as themed SVG diagrams
//!
//! Takes a tree of named folder/file nodes - scanned from a directory or
//! deserialized from JSON - and renders it as a self-contained SVG with
//! orthogonal parent-child connectors and a GitHub-flavored theme.

pub mod error;
pub mod layout;
pub mod models;
pub mod render;
pub mod scan;
pub mod theme;

// Re-exports for convenience
pub use error::{TreeSvgError, TreeSvgResult};
pub use models::{NodeKind, TreeNode};
pub use render::{render_svg, RenderOptions};
pub use scan::{scan_directory, DEFAULT_MAX_DEPTH};
pub use theme::{Theme, GITHUB_DARK, GITHUB_LIGHT};
