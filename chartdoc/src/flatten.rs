//! Flattening of the values tree into dot-paths.

use crate::value::{key_text, ParamType, Value};

/// One leaf of the values tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatEntry {
    /// Dot-path such as `image.tag` or `ports[0].name`.
    pub path: String,
    /// The leaf value; empty mappings and sequences are leaves too.
    pub value: Value,
    /// Inferred type of `value`.
    pub param_type: ParamType,
    /// False for anything inside a sequence, which the schema describes
    /// through the parent's `items` instead.
    pub schema: bool,
}

/// Flatten a parsed values document.
///
/// Every scalar leaf and every empty mapping or sequence produces one
/// entry. Tagged nodes are opaque leaves of type `unknown`. The result is
/// sorted by path.
///
/// # Examples
///
/// ```
/// use chartdoc::flatten::flatten;
///
/// let tree = serde_yaml::from_str("image: {tag: v1}\nports: [80]\nlabels: {}").unwrap();
/// let paths: Vec<_> = flatten(&tree).into_iter().map(|e| e.path).collect();
/// assert_eq!(paths, ["image.tag", "labels", "ports[0]"]);
/// ```
#[must_use]
pub fn flatten(tree: &serde_yaml::Value) -> Vec<FlatEntry> {
    let mut entries = Vec::new();

    // Only a mapping root has addressable keys.
    if let serde_yaml::Value::Mapping(map) = tree {
        for (key, child) in map {
            walk(&key_text(key), child, &mut entries);
        }
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    entries
}

/// Parse values text and flatten it.
///
/// # Errors
///
/// Returns [`crate::Error::Parse`] if `source` is not valid YAML.
pub fn flatten_str(source: &str) -> crate::Result<Vec<FlatEntry>> {
    let tree: serde_yaml::Value = serde_yaml::from_str(source)?;
    Ok(flatten(&tree))
}

fn walk(path: &str, node: &serde_yaml::Value, out: &mut Vec<FlatEntry>) {
    match node {
        serde_yaml::Value::Mapping(map) if !map.is_empty() => {
            for (key, child) in map {
                walk(&format!("{path}.{}", key_text(key)), child, out);
            }
        }
        serde_yaml::Value::Sequence(items) if !items.is_empty() => {
            for (i, child) in items.iter().enumerate() {
                walk(&format!("{path}[{i}]"), child, out);
            }
        }
        serde_yaml::Value::Tagged(_) => out.push(leaf(path, node, ParamType::Unknown)),
        _ => {
            let value = Value::from_yaml(node.clone());
            let param_type = value.param_type();
            out.push(FlatEntry {
                path: path.to_string(),
                value,
                param_type,
                schema: !path.contains('['),
            });
        }
    }
}

fn leaf(path: &str, node: &serde_yaml::Value, param_type: ParamType) -> FlatEntry {
    FlatEntry {
        path: path.to_string(),
        value: Value::from_yaml(node.clone()),
        param_type,
        schema: !path.contains('['),
    }
}
