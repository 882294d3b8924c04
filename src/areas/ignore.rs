use std::collections::HashSet;
use std::path::Path;

/// Directory names that are never traversed, at any depth: version-control
/// metadata, dependency trees, virtual environments, build output and
/// bytecode caches.
pub const DEFAULT_IGNORED_DIRS: phf::Set<&'static str> = phf::phf_set! {
    ".git",
    "node_modules",
    "venv",
    "target",
    "dist",
    "build",
    "__pycache__",
};

/// The traversal exclusion policy, passed explicitly into [`Workspace`] so the
/// resolver core stays testable without any filesystem dependency.
///
/// Matching is by exact directory-name equality on every path component.
///
/// [`Workspace`]: crate::areas::workspace::Workspace
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    extra: HashSet<String>,
}

impl IgnoreSet {
    pub fn with_extra(names: impl IntoIterator<Item = String>) -> Self {
        IgnoreSet {
            extra: names.into_iter().collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        DEFAULT_IGNORED_DIRS.contains(name) || self.extra.contains(name)
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        // Check if any component of the path is an ignored directory name
        path.components().any(|component| {
            if let std::path::Component::Normal(name) = component {
                self.contains(&name.to_string_lossy())
            } else {
                false
            }
        })
    }
}
