//! Merging of real values into declared metadata.

use crate::flatten::FlatEntry;
use crate::metadata::{Metadata, Parameter};
use std::collections::{HashMap, HashSet};

/// Fill declared parameters from the values tree.
///
/// For every non-Extra declaration with an identical real path, the type
/// and schema flag are copied, and the value too if none is set yet. Real
/// paths with no declaration of any role are appended to
/// `metadata.parameters` as skip parameters, outside every section.
///
/// Returns the number of implicit skips appended.
///
/// # Examples
///
/// ```
/// use chartdoc::flatten::flatten_str;
/// use chartdoc::reconcile::merge;
/// use chartdoc::{Metadata, Parameter, Value};
///
/// let real = flatten_str("replicas: 2\nextraEnv: []\n").unwrap();
/// let mut metadata = Metadata::default();
/// metadata.add_parameter(Parameter::new("replicas"), None);
///
/// assert_eq!(merge(&mut metadata, &real), 1);
/// assert_eq!(metadata.parameters[0].value, Some(Value::from(2_i64)));
/// assert!(metadata.parameters[1].is_skip());
/// ```
pub fn merge(metadata: &mut Metadata, real: &[FlatEntry]) -> usize {
    let by_path: HashMap<&str, &FlatEntry> = real.iter().map(|e| (e.path.as_str(), e)).collect();

    for parameter in metadata.parameters.iter_mut().filter(|p| !p.is_extra()) {
        if let Some(entry) = by_path.get(parameter.name.as_str()) {
            if parameter.value.is_none() {
                parameter.value = Some(entry.value.clone());
            }
            parameter.param_type = Some(entry.param_type);
            parameter.schema = entry.schema;
        }
    }

    let declared: HashSet<String> = metadata.parameters.iter().map(|p| p.name.clone()).collect();
    let mut synthesized = 0;
    for entry in real.iter().filter(|e| !declared.contains(&e.path)) {
        let mut implicit = Parameter::skip(&entry.path);
        implicit.value = Some(entry.value.clone());
        implicit.param_type = Some(entry.param_type);
        implicit.schema = entry.schema;
        metadata.add_parameter(implicit, None);
        synthesized += 1;
    }

    if synthesized > 0 {
        log::debug!("added {synthesized} implicit skip parameter(s)");
    }
    synthesized
}
