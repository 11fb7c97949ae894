//! Directory scanner
//!
//! Builds a `TreeNode` from a real directory: depth-limited recursive
//! listing, dotfile and `node_modules` filtering, folders-first ordering.
//! Read failures below the root degrade the affected subtree to an empty
//! folder instead of aborting the scan.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{TreeSvgError, TreeSvgResult};
use crate::models::{NodeKind, TreeNode};

/// Default depth cap for `--path` scans
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Directory name always excluded from scans
const IGNORED_NAME: &str = "node_modules";

/// Scan a path into a tree, descending at most `max_depth` levels.
///
/// Only the root failing to stat is an error; anything unreadable below it
/// becomes an empty folder.
pub fn scan_directory(path: &Path, max_depth: usize) -> TreeSvgResult<TreeNode> {
    let metadata = fs::metadata(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            TreeSvgError::PathNotFound {
                path: path.to_path_buf(),
            }
        } else {
            TreeSvgError::Io(err)
        }
    })?;
    Ok(scan_entry(path, metadata.is_dir(), max_depth, 0))
}

fn scan_entry(path: &Path, is_dir: bool, max_depth: usize, depth: usize) -> TreeNode {
    let name = entry_name(path);
    if !is_dir {
        return TreeNode::file(name);
    }
    if depth >= max_depth {
        return TreeNode::folder(name, Vec::new());
    }
    TreeNode::folder(name, scan_children(path, max_depth, depth))
}

fn scan_children(dir: &Path, max_depth: usize, depth: usize) -> Vec<TreeNode> {
    // Unreadable directory (permissions etc.) degrades to an empty folder.
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut children = Vec::new();
    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();
        if name.starts_with('.') || name == IGNORED_NAME {
            continue;
        }
        let path = entry.path();
        match fs::metadata(&path) {
            Ok(metadata) => {
                children.push(scan_entry(&path, metadata.is_dir(), max_depth, depth + 1));
            }
            // Unstat-able entry: keep it visible as an empty folder.
            Err(_) => children.push(TreeNode::folder(name.into_owned(), Vec::new())),
        }
    }

    // Folders first, then lexicographic by name.
    children.sort_by(|a, b| match (a.kind, b.kind) {
        (NodeKind::Folder, NodeKind::File) => std::cmp::Ordering::Less,
        (NodeKind::File, NodeKind::Folder) => std::cmp::Ordering::Greater,
        _ => a.name.cmp(&b.name),
    });
    children
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
