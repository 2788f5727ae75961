//! Reconciliation of declared metadata against the actual values tree.
//!
//! Two passes share this module:
//!
//! - [`reconcile`] checks that every real path is declared and every
//!   declared path exists, ignoring skipped subtrees. It collects every
//!   mismatch before failing.
//! - [`merge`] copies values, types and schema flags from the real tree
//!   into the declarations and records undeclared paths as implicit skips.
//!
//! # Skipped subtrees
//!
//! A `@skip` declaration, or any declaration carrying a modifier, removes
//! its path and everything below it from the check:
//!
//! ```
//! use chartdoc::reconcile::SkipSet;
//! use chartdoc::Parameter;
//!
//! let declared = [
//!     Parameter::skip("db"),
//!     Parameter::new("tolerations[0].key").with_modifiers(["array"]),
//! ];
//! let skips = SkipSet::from_declared(&declared);
//!
//! assert!(skips.covers("db.host"));
//! assert!(skips.covers("tolerations[1]"));
//! assert!(!skips.covers("dbName"));
//! ```
//!
//! A sequence in the values tree with no declaration at or below its root
//! key is treated as skipped as well; the merge pass then records its
//! elements as implicit skips.

mod merge;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use merge::merge;

use crate::error::{Error, Result};
use crate::flatten::FlatEntry;
use crate::metadata::Parameter;
use std::collections::{BTreeSet, HashSet};

/// Roots of the subtrees excluded from validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipSet {
    roots: BTreeSet<String>,
}

impl SkipSet {
    /// Collect skip roots from declared parameters.
    ///
    /// Array index suffixes are cut, so `a[0].b` skips all of `a`.
    #[must_use]
    pub fn from_declared(declared: &[Parameter]) -> Self {
        let roots = declared
            .iter()
            .filter(|p| p.is_skip() || !p.modifiers.is_empty())
            .map(|p| subtree_root(&p.name).to_string())
            .collect();
        Self { roots }
    }

    /// Add the root key of every sequence in `real` that has no declaration
    /// at or below it.
    #[must_use]
    pub fn with_undocumented_sequences(mut self, real: &[FlatEntry], declared: &[Parameter]) -> Self {
        for entry in real.iter().filter(|e| e.path.contains('[')) {
            let root = subtree_root(&entry.path);
            if !declared.iter().any(|p| is_under(&p.name, root)) {
                self.roots.insert(root.to_string());
            }
        }
        self
    }

    /// Whether `path` equals a root or lies below one.
    #[must_use]
    pub fn covers(&self, path: &str) -> bool {
        self.roots.iter().any(|root| is_under(path, root))
    }

    /// Number of distinct roots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Returns true if nothing is skipped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Outcome of a successful reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Real paths that took part in the check.
    pub checked: usize,
    /// Real paths excluded by a skip root or an extra declaration.
    pub skipped: usize,
}

/// Check declared metadata against the flattened values tree.
///
/// Extra parameters are never reported: a real path named by an extra
/// declaration is left out of the check, and extra names are never orphans.
/// Missing keys are reported in the order of `real`, orphan keys in
/// declaration order.
///
/// # Errors
///
/// Returns [`Error::Validation`] carrying every missing and orphan path if
/// either list is non-empty.
pub fn reconcile(real: &[FlatEntry], declared: &[Parameter]) -> Result<ReconcileReport> {
    let skips = SkipSet::from_declared(declared).with_undocumented_sequences(real, declared);

    let extras: HashSet<&str> = declared
        .iter()
        .filter(|p| p.is_extra())
        .map(|p| p.name.as_str())
        .collect();

    let real_keys: Vec<&str> = real
        .iter()
        .map(|e| e.path.as_str())
        .filter(|p| !skips.covers(p) && !extras.contains(p))
        .collect();
    let declared_keys: Vec<&str> = declared
        .iter()
        .filter(|p| !p.is_extra())
        .map(|p| p.name.as_str())
        .filter(|p| !skips.covers(p))
        .collect();

    let missing = difference(&real_keys, &declared_keys);
    let orphan = difference(&declared_keys, &real_keys);

    if missing.is_empty() && orphan.is_empty() {
        log::debug!(
            "metadata matches: {} key(s) checked, {} skip root(s)",
            real_keys.len(),
            skips.len()
        );
        return Ok(ReconcileReport {
            checked: real_keys.len(),
            skipped: real.len() - real_keys.len(),
        });
    }

    Err(Error::Validation { missing, orphan })
}

/// `path` equals `root`, or continues it with `.` or `[`.
fn is_under(path: &str, root: &str) -> bool {
    path.strip_prefix(root)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.') || rest.starts_with('['))
}

fn subtree_root(name: &str) -> &str {
    name.find('[').map_or(name, |i| &name[..i])
}

fn difference(a: &[&str], b: &[&str]) -> Vec<String> {
    let exclude: HashSet<&str> = b.iter().copied().collect();
    a.iter()
        .filter(|x| !exclude.contains(*x))
        .map(|x| (*x).to_string())
        .collect()
}
