//! SVG document assembly
//!
//! Turns a laid-out tree into a self-contained SVG string: background card,
//! optional title header, connector paths, and one styled group per node.
//! Rendering is a pure function of the tree and options; it performs no I/O
//! and never fails.

use std::fmt::Write as _;

use crate::layout::{self, LayoutParams, Orientation};
use crate::models::{NodeKind, TreeNode};
use crate::theme;

/// Root y-anchor when the title header is shown
const TITLE_START_Y: i64 = 160;
/// Root y-anchor without the title header
const PLAIN_START_Y: i64 = 80;
/// Space reserved below the last row
const BOTTOM_MARGIN: i64 = 80;

const FOLDER_ICON: &str = "\u{1F4C1}";
const FILE_ICON: &str = "\u{1F4C4}";

const FONT_STACK: &str =
    "ui-sans-serif, -apple-system, Segoe UI, Roboto, Ubuntu, Cantarell, Noto Sans, Arial";

/// Options controlling the rendered document
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Theme name; unknown names fall back to the dark palette
    pub theme: String,
    /// Title header text
    pub title: String,
    /// Whether to emit the title header
    pub show_title: bool,
    /// Canvas width in pixels
    pub width: u32,
    /// Height of every node box
    pub node_height: u32,
    /// Vertical gap between sibling rows
    pub vertical_spacing: u32,
    /// Horizontal gap between depth levels
    pub horizontal_spacing: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: "github-dark".to_string(),
            title: "Folder Structure".to_string(),
            show_title: true,
            width: 1200,
            node_height: 38,
            vertical_spacing: 16,
            horizontal_spacing: 180,
        }
    }
}

/// Replace the five reserved XML characters with entities.
///
/// Ampersand goes first so entities introduced by the later substitutions
/// are not double-escaped.
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Render a tree to a complete SVG document.
pub fn render_svg(tree: &TreeNode, options: &RenderOptions) -> String {
    let colors = theme::resolve(&options.theme);
    let node_height = i64::from(options.node_height);
    let params = LayoutParams {
        start_y: if options.show_title {
            TITLE_START_Y
        } else {
            PLAIN_START_Y
        },
        node_height,
        vertical_spacing: i64::from(options.vertical_spacing),
        horizontal_spacing: i64::from(options.horizontal_spacing),
    };
    let layout = layout::layout_tree(tree, &params);

    let width = i64::from(options.width);
    let height = layout.max_y + BOTTOM_MARGIN;
    let title = escape_xml(&options.title);

    let mut out = String::new();
    let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" role="img" aria-labelledby="title desc">"#
    );
    let _ = writeln!(out, r#"  <title id="title">{title}</title>"#);
    let _ = writeln!(
        out,
        r#"  <desc id="desc">Folder structure visualization</desc>"#
    );

    let _ = writeln!(out, "  <defs>");
    let _ = writeln!(out, "    <style>");
    let _ = writeln!(
        out,
        "      .card {{ fill: {}; stroke: {}; stroke-width: 1; }}",
        colors.card_bg, colors.card_border
    );
    let _ = writeln!(
        out,
        "      .title {{ font: 700 32px {FONT_STACK}; fill: {}; }}",
        colors.title_text
    );
    let _ = writeln!(
        out,
        "      .label {{ font: 600 15px {FONT_STACK}; fill: {}; }}",
        colors.text
    );
    let _ = writeln!(
        out,
        "      .line {{ stroke: {}; stroke-width: 2.5; stroke-linecap: round; fill: none; }}",
        colors.line
    );
    let _ = writeln!(
        out,
        "      .node-folder {{ fill: {}; stroke: {}; stroke-width: 1.5; }}",
        colors.folder_bg, colors.folder_border
    );
    let _ = writeln!(
        out,
        "      .node-file {{ fill: {}; stroke: {}; stroke-width: 1.5; }}",
        colors.file_bg, colors.file_border
    );
    let _ = writeln!(
        out,
        "      .dot {{ fill: {}; stroke: {}; stroke-width: 1.5; }}",
        colors.dot, colors.dot_stroke
    );
    let _ = writeln!(out, "      .node-folder, .node-file {{ filter: url(#nodeGlow); }}");
    let _ = writeln!(out, "    </style>");
    let _ = writeln!(
        out,
        r##"    <filter id="shadow" x="-50%" y="-50%" width="200%" height="200%">
      <feDropShadow dx="0" dy="6" stdDeviation="16" flood-color="#000" flood-opacity="0.3"/>
    </filter>
    <filter id="nodeGlow" x="-50%" y="-50%" width="200%" height="200%">
      <feDropShadow dx="0" dy="2" stdDeviation="4" flood-color="#000" flood-opacity="0.4"/>
    </filter>"##
    );
    let _ = writeln!(out, "  </defs>");

    let _ = writeln!(out);
    let _ = writeln!(out, "  <!-- Background card -->");
    let _ = writeln!(
        out,
        r#"  <rect class="card" x="28" y="28" width="{}" height="{}" rx="20" filter="url(#shadow)"/>"#,
        width - 56,
        height - 56
    );

    if options.show_title {
        let _ = writeln!(out);
        let _ = writeln!(out, "  <!-- Title -->");
        let _ = writeln!(out, r#"  <text class="title" x="70" y="95">{title}</text>"#);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "  <!-- Connections -->");
    let _ = writeln!(out, "  <g>");
    for conn in &layout.connections {
        debug_assert!(match conn.orientation {
            Orientation::Horizontal => conn.from.1 == conn.to.1,
            Orientation::Vertical => conn.from.0 == conn.to.0,
        });
        let _ = writeln!(
            out,
            r#"    <path class="line" d="M{},{} L{},{}"/>"#,
            conn.from.0, conn.from.1, conn.to.0, conn.to.1
        );
    }
    let _ = writeln!(out, "  </g>");

    let _ = writeln!(out);
    let _ = writeln!(out, "  <!-- Nodes -->");
    let _ = writeln!(out, "  <g>");
    for node in &layout.nodes {
        let (class, icon) = match node.kind() {
            NodeKind::Folder => ("node-folder", FOLDER_ICON),
            NodeKind::File => ("node-file", FILE_ICON),
        };
        let _ = writeln!(out, "    <g>");
        let _ = writeln!(
            out,
            r#"      <rect class="{class}" x="{}" y="{}" width="{}" height="{node_height}" rx="10"/>"#,
            node.x,
            node.y - node_height / 2,
            node.width
        );
        let _ = writeln!(
            out,
            r#"      <text class="label" x="{}" y="{}">{icon} {}</text>"#,
            node.x + 16,
            node.y + 5,
            escape_xml(&node.node.name)
        );
        let _ = writeln!(out, "    </g>");
    }
    let _ = writeln!(out, "  </g>");
    let _ = writeln!(out, "</svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TreeNode;

    fn opts() -> RenderOptions {
        RenderOptions::default()
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_leaf_canvas_height_and_no_connectors() {
        let svg = render_svg(&TreeNode::file("solo"), &opts());
        // 160 start + 38 row + 16 gap + 80 bottom margin
        assert!(svg.contains(r#"height="294""#));
        assert_eq!(count(&svg, r#"<path class="line""#), 0);
    }

    #[test]
    fn test_connector_counts_for_fanout() {
        let tree = TreeNode::folder(
            "root",
            vec![
                TreeNode::file("a"),
                TreeNode::file("b"),
                TreeNode::file("c"),
            ],
        );
        let svg = render_svg(&tree, &opts());
        // 1 parent stub + 1 trunk + 3 child segments
        assert_eq!(count(&svg, r#"<path class="line""#), 5);
    }

    #[test]
    fn test_every_name_appears_exactly_once_escaped() {
        let tree = TreeNode::folder(
            "A & B",
            vec![TreeNode::file("<index>.html"), TreeNode::file("it's")],
        );
        let svg = render_svg(&tree, &opts());
        assert_eq!(count(&svg, "A &amp; B"), 1);
        assert_eq!(count(&svg, "&lt;index&gt;.html"), 1);
        assert_eq!(count(&svg, "it&apos;s"), 1);
        assert!(!svg.contains("<index>"));
    }

    #[test]
    fn test_theme_selection_changes_fills() {
        let tree = TreeNode::folder("src", vec![TreeNode::file("lib.rs")]);
        let dark = render_svg(&tree, &opts());
        let light = render_svg(
            &tree,
            &RenderOptions {
                theme: "github-light".to_string(),
                ..opts()
            },
        );
        let unknown = render_svg(
            &tree,
            &RenderOptions {
                theme: "no-such-theme".to_string(),
                ..opts()
            },
        );
        assert!(dark.contains("#1f6feb"));
        assert!(light.contains("#0969da"));
        assert_ne!(dark, light);
        assert_eq!(dark, unknown);
    }

    #[test]
    fn test_hidden_title_is_absent_and_layout_rises() {
        let tree = TreeNode::file("solo");
        let shown = render_svg(&tree, &opts());
        let hidden = render_svg(
            &tree,
            &RenderOptions {
                show_title: false,
                ..opts()
            },
        );
        assert!(shown.contains(r#"<text class="title""#));
        assert!(!hidden.contains(r#"<text class="title""#));
        // Root row moves up by the 80px the header reserved.
        assert!(shown.contains(r#"y="141""#)); // 160 - 38/2
        assert!(hidden.contains(r#"y="61""#)); // 80 - 38/2
        assert!(hidden.contains(r#"height="214""#));
    }

    #[test]
    fn test_kind_glyphs_and_classes() {
        let tree = TreeNode::folder("src", vec![TreeNode::file("lib.rs")]);
        let svg = render_svg(&tree, &opts());
        assert_eq!(count(&svg, r#"<rect class="node-folder""#), 1);
        assert_eq!(count(&svg, r#"<rect class="node-file""#), 1);
        assert!(svg.contains("\u{1F4C1} src"));
        assert!(svg.contains("\u{1F4C4} lib.rs"));
    }

    #[test]
    fn test_card_and_viewbox_track_canvas() {
        let svg = render_svg(&TreeNode::file("solo"), &opts());
        assert!(svg.contains(r#"viewBox="0 0 1200 294""#));
        assert!(svg.contains(r#"<rect class="card" x="28" y="28" width="1144" height="238""#));
    }

    #[test]
    fn test_title_text_is_escaped() {
        let svg = render_svg(
            &TreeNode::file("solo"),
            &RenderOptions {
                title: "Docs & \"More\"".to_string(),
                ..opts()
            },
        );
        assert!(svg.contains("Docs &amp; &quot;More&quot;"));
    }

    #[test]
    fn test_escape_ampersand_first() {
        assert_eq!(escape_xml("&lt;"), "&amp;lt;");
        assert_eq!(escape_xml(r#"<a href="x">'&'</a>"#).matches("&amp;").count(), 1);
    }
}
