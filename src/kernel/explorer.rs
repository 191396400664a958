//! Lazy projection of the opened folder.
//!
//! Children are fetched the first time a directory is expanded and cached from then
//! on. Collapsing keeps the cache, so re-expanding shows what was listed last time.
//! Nothing here watches the filesystem; mutations must be followed by `refresh`.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::kernel::services::ports::DirEntry;

new_key_type! { pub struct NodeId; }

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Children {
    NotLoaded,
    Loading,
    Loaded(Vec<NodeId>),
    /// A re-listing is in flight; the previous children stay visible and reusable.
    Refreshing(Vec<NodeId>),
    Failed(String),
}

impl Children {
    fn ids(&self) -> &[NodeId] {
        match self {
            Children::Loaded(ids) | Children::Refreshing(ids) => ids,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone)]
pub struct TreeNode {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub expanded: bool,
    pub children: Children,
}

impl TreeNode {
    fn from_entry(entry: &DirEntry) -> Self {
        Self {
            name: entry.name.clone(),
            path: entry.path.clone(),
            is_dir: entry.is_dir,
            expanded: false,
            children: if entry.is_dir {
                Children::NotLoaded
            } else {
                Children::Loaded(Vec::new())
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    Entry { is_dir: bool, expanded: bool },
    Loading,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub depth: usize,
    pub name: String,
    pub path: PathBuf,
    pub kind: RowKind,
}

/// Directories first, then by name. See [`compare_names`].
pub fn sort_entries(entries: &mut [DirEntry]) {
    entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => compare_names(&a.name, &b.name),
    });
}

/// Case-insensitive name order with lowercase ahead of uppercase on ties. This matches
/// a locale collator for ASCII letters and digits only: punctuation and non-ASCII
/// letters fall back to code point order, so `{` and `é` sort after `z`.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    if folded != Ordering::Equal {
        return folded;
    }
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca == cb {
            continue;
        }
        match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => return ca.cmp(&cb),
        }
    }
    a.len().cmp(&b.len())
}

#[derive(Default)]
pub struct Explorer {
    arena: SlotMap<NodeId, TreeNode>,
    root: Option<NodeId>,
    by_path: FxHashMap<PathBuf, NodeId>,
}

impl Explorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn root_path(&self) -> Option<&Path> {
        self.root
            .and_then(|id| self.arena.get(id))
            .map(|n| n.path.as_path())
    }

    pub fn node(&self, path: &Path) -> Option<&TreeNode> {
        self.by_path.get(path).and_then(|id| self.arena.get(*id))
    }

    /// Children of a loaded directory, in display order.
    pub fn children(&self, path: &Path) -> Option<Vec<&TreeNode>> {
        match &self.node(path)?.children {
            Children::Loaded(ids) | Children::Refreshing(ids) => {
                Some(ids.iter().filter_map(|id| self.arena.get(*id)).collect())
            }
            _ => None,
        }
    }

    /// Replaces the whole tree with a fresh root. The caller lists the root next.
    pub fn set_root(&mut self, path: PathBuf) {
        self.arena.clear();
        self.by_path.clear();

        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        let id = self.arena.insert(TreeNode {
            name,
            path: path.clone(),
            is_dir: true,
            expanded: true,
            children: Children::Loading,
        });
        self.by_path.insert(path, id);
        self.root = Some(id);
    }

    /// Expands or collapses a directory. Returns the path to list when the expansion
    /// needs a fetch.
    pub fn toggle(&mut self, path: &Path) -> Option<PathBuf> {
        let id = *self.by_path.get(path)?;
        let node = self.arena.get_mut(id)?;
        if !node.is_dir {
            return None;
        }
        if node.expanded {
            node.expanded = false;
            return None;
        }
        node.expanded = true;
        match node.children {
            Children::NotLoaded | Children::Failed(_) => {
                node.children = Children::Loading;
                Some(node.path.clone())
            }
            Children::Loading | Children::Loaded(_) | Children::Refreshing(_) => None,
        }
    }

    /// Marks a directory that has been listed before for re-listing. Returns the path
    /// to list, or `None` when the directory is unknown, was never loaded, or already
    /// has a listing queued. Host requests run in order, so a queued listing always
    /// reflects every mutation answered before it.
    pub fn refresh(&mut self, path: &Path) -> Option<PathBuf> {
        let id = *self.by_path.get(path)?;
        let node = self.arena.get_mut(id)?;
        if !node.is_dir {
            return None;
        }
        match std::mem::replace(&mut node.children, Children::NotLoaded) {
            Children::Loaded(ids) => {
                node.children = Children::Refreshing(ids);
                Some(node.path.clone())
            }
            Children::Failed(_) => {
                node.children = Children::Loading;
                Some(node.path.clone())
            }
            pending @ (Children::NotLoaded | Children::Loading | Children::Refreshing(_)) => {
                node.children = pending;
                None
            }
        }
    }

    /// Installs a listing. Existing child nodes that still match (same path and kind)
    /// are kept together with their own expansion state and cache.
    pub fn apply_listing(&mut self, path: &Path, mut entries: Vec<DirEntry>) -> bool {
        let Some(&id) = self.by_path.get(path) else {
            return false;
        };
        if !self.arena.get(id).is_some_and(|n| n.is_dir) {
            return false;
        }

        sort_entries(&mut entries);

        let previous = self
            .arena
            .get(id)
            .map(|n| n.children.ids().to_vec())
            .unwrap_or_default();

        let mut kept = Vec::with_capacity(entries.len());
        for entry in &entries {
            let reuse = self
                .by_path
                .get(&entry.path)
                .copied()
                .filter(|child| previous.contains(child))
                .filter(|child| {
                    self.arena
                        .get(*child)
                        .is_some_and(|n| n.is_dir == entry.is_dir)
                });
            let child = match reuse {
                Some(child) => child,
                None => {
                    if let Some(stale) = self.by_path.get(&entry.path).copied() {
                        self.remove_subtree(stale);
                    }
                    let child = self.arena.insert(TreeNode::from_entry(entry));
                    self.by_path.insert(entry.path.clone(), child);
                    child
                }
            };
            kept.push(child);
        }

        for stale in previous.into_iter().filter(|old| !kept.contains(old)) {
            self.remove_subtree(stale);
        }

        if let Some(node) = self.arena.get_mut(id) {
            node.children = Children::Loaded(kept);
        }
        true
    }

    pub fn apply_list_error(&mut self, path: &Path, message: String) -> bool {
        let Some(&id) = self.by_path.get(path) else {
            return false;
        };
        let Some(node) = self.arena.get_mut(id) else {
            return false;
        };
        if !node.is_dir {
            return false;
        }
        let previous = std::mem::replace(&mut node.children, Children::Failed(message));
        for stale in previous.ids() {
            self.remove_subtree(*stale);
        }
        true
    }

    fn remove_subtree(&mut self, id: NodeId) {
        let Some(node) = self.arena.remove(id) else {
            return;
        };
        if self.by_path.get(&node.path) == Some(&id) {
            self.by_path.remove(&node.path);
        }
        for child in node.children.ids() {
            self.remove_subtree(*child);
        }
    }

    /// Visible rows, depth-first, root included at depth 0.
    pub fn rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        if let Some(root) = self.root {
            self.push_rows(root, 0, &mut rows);
        }
        rows
    }

    fn push_rows(&self, id: NodeId, depth: usize, rows: &mut Vec<TreeRow>) {
        let Some(node) = self.arena.get(id) else {
            return;
        };
        rows.push(TreeRow {
            depth,
            name: node.name.clone(),
            path: node.path.clone(),
            kind: RowKind::Entry {
                is_dir: node.is_dir,
                expanded: node.expanded,
            },
        });
        if !node.is_dir || !node.expanded {
            return;
        }
        match &node.children {
            Children::Loaded(ids) | Children::Refreshing(ids) => {
                for child in ids {
                    self.push_rows(*child, depth + 1, rows);
                }
            }
            Children::Loading => rows.push(TreeRow {
                depth: depth + 1,
                name: String::new(),
                path: node.path.clone(),
                kind: RowKind::Loading,
            }),
            Children::Failed(message) => rows.push(TreeRow {
                depth: depth + 1,
                name: String::new(),
                path: node.path.clone(),
                kind: RowKind::Error(message.clone()),
            }),
            Children::NotLoaded => {}
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/explorer.rs"]
mod tests;
