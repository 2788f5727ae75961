//! JSON schema generation.

use super::OutputFormatter;
use crate::config::Settings;
use crate::metadata::Parameter;
use crate::modifiers::ResolvedMetadata;
use crate::value::{ParamType, Value};
use crate::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;

/// Title of the schema root object.
pub const SCHEMA_TITLE: &str = "Chart Values";

/// One schema node.
///
/// Fields are declared in alphabetical order so the serialized keys come
/// out sorted.
#[derive(Debug, Default, Serialize)]
struct SchemaNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<Box<SchemaNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nullable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<BTreeMap<String, SchemaNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'static str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<ParamType>,
}

impl SchemaNode {
    fn object() -> Self {
        Self {
            kind: Some(ParamType::Object),
            properties: Some(BTreeMap::new()),
            ..Self::default()
        }
    }
}

/// Builds a JSON schema from the resolved parameter list.
///
/// Extra parameters, parameters inside arrays and parameters carrying the
/// object modifier are left out. Dotted names become nested objects.
///
/// # Examples
///
/// ```
/// use chartdoc::config::Settings;
/// use chartdoc::modifiers::ResolvedMetadata;
/// use chartdoc::output::{OutputFormatter, SchemaFormatter};
///
/// let settings = Settings::default();
/// let schema = SchemaFormatter::new(&settings)
///     .format(&ResolvedMetadata::default())
///     .unwrap();
///
/// assert_eq!(
///     schema,
///     "{\n    \"properties\": {},\n    \"title\": \"Chart Values\",\n    \"type\": \"object\"\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SchemaFormatter {
    object: String,
    nullable: String,
}

impl SchemaFormatter {
    /// Create a formatter using the modifier tokens of `settings`.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            object: settings.modifiers.object.clone(),
            nullable: settings.modifiers.nullable.clone(),
        }
    }

    fn includes(&self, parameter: &Parameter) -> bool {
        !parameter.is_extra() && parameter.schema && !parameter.has_modifier(&self.object)
    }

    fn leaf(&self, parameter: &Parameter) -> SchemaNode {
        let items = (parameter.param_type == Some(ParamType::Array)).then(|| {
            let kind = match &parameter.value {
                Some(Value::Sequence(values)) => values.first().map(Value::param_type),
                _ => None,
            };
            Box::new(SchemaNode {
                kind,
                ..SchemaNode::default()
            })
        });

        SchemaNode {
            default: Some(parameter.value.clone().unwrap_or(Value::Null)),
            description: Some(parameter.description.clone()),
            items,
            nullable: parameter.has_modifier(&self.nullable).then_some(true),
            kind: parameter.param_type,
            ..SchemaNode::default()
        }
    }

    fn build(&self, parameters: &[Parameter]) -> SchemaNode {
        let mut root = SchemaNode {
            title: Some(SCHEMA_TITLE),
            ..SchemaNode::object()
        };

        for parameter in parameters.iter().filter(|p| self.includes(p)) {
            let mut segments: Vec<&str> = parameter.name.split('.').collect();
            let Some(last) = segments.pop() else {
                continue;
            };

            let mut properties = root.properties.get_or_insert_with(BTreeMap::new);
            for segment in segments {
                properties = properties
                    .entry(segment.to_string())
                    .or_insert_with(SchemaNode::object)
                    .properties
                    .get_or_insert_with(BTreeMap::new);
            }

            let mut leaf = self.leaf(parameter);
            if let Some(existing) = properties.remove(last) {
                leaf.properties = existing.properties;
            }
            properties.insert(last.to_string(), leaf);
        }

        root
    }
}

impl OutputFormatter for SchemaFormatter {
    fn format(&self, resolved: &ResolvedMetadata) -> Result<String> {
        let root = self.build(&resolved.parameters);

        let mut buffer = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        root.serialize(&mut serializer)?;

        let mut out = String::from_utf8_lossy(&buffer).into_owned();
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn typed(name: &str, param_type: ParamType, value: Value) -> Parameter {
        let mut parameter = Parameter::new(name).with_description(format!("{name} desc"));
        parameter.param_type = Some(param_type);
        parameter.value = Some(value);
        parameter
    }

    fn schema_of(parameters: Vec<Parameter>) -> serde_json::Value {
        let resolved = ResolvedMetadata {
            sections: vec![],
            parameters,
        };
        let text = SchemaFormatter::new(&Settings::default())
            .format(&resolved)
            .unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_nested_leaf() {
        let schema = schema_of(vec![typed("image.tag", ParamType::String, Value::from("v1"))]);
        assert_eq!(
            schema["properties"]["image"],
            json!({
                "type": "object",
                "properties": {
                    "tag": {"type": "string", "description": "image.tag desc", "default": "v1"}
                }
            })
        );
    }

    #[test]
    fn test_array_items() {
        let values = Value::Sequence(vec![Value::from(80_i64), Value::from(443_i64)]);
        let schema = schema_of(vec![
            typed("ports", ParamType::Array, values),
            typed("hosts", ParamType::Array, Value::empty_sequence()),
        ]);
        assert_eq!(schema["properties"]["ports"]["items"], json!({"type": "number"}));
        assert_eq!(schema["properties"]["hosts"]["items"], json!({}));
    }

    #[test]
    fn test_nullable_and_unset_default() {
        let mut parameter = Parameter::new("proxy").with_modifiers(["string", "nullable"]);
        parameter.param_type = Some(ParamType::String);
        parameter.value = Some(Value::Null);
        let schema = schema_of(vec![parameter, Parameter::new("untyped")]);

        assert_eq!(schema["properties"]["proxy"]["nullable"], json!(true));
        assert_eq!(schema["properties"]["proxy"]["default"], json!(null));
        assert_eq!(
            schema["properties"]["untyped"],
            json!({"description": "", "default": null})
        );
    }

    #[test]
    fn test_excluded_parameters() {
        let mut inside_array = typed("list[0]", ParamType::Number, Value::from(1_i64));
        inside_array.schema = false;
        let object = typed("labels", ParamType::Object, Value::empty_mapping()).with_modifiers(["object"]);
        let schema = schema_of(vec![inside_array, object, Parameter::extra("ingress.hosts")]);

        assert_eq!(schema["properties"], json!({}));
    }

    #[test]
    fn test_leaf_keeps_existing_children() {
        let schema = schema_of(vec![
            typed("a.b", ParamType::Number, Value::from(1_i64)),
            typed("a", ParamType::Object, Value::empty_mapping()),
            typed("a.c", ParamType::Boolean, Value::from(true)),
        ]);
        let a = &schema["properties"]["a"];
        assert_eq!(a["description"], json!("a desc"));
        assert_eq!(a["properties"]["b"]["default"], json!(1));
        assert_eq!(a["properties"]["c"]["type"], json!("boolean"));
    }

    #[test]
    fn test_four_space_indent_and_sorted_keys() {
        let parameters = vec![typed("zeta", ParamType::Number, Value::from(1_i64))];
        let text = SchemaFormatter::new(&Settings::default())
            .format(&ResolvedMetadata {
                sections: vec![],
                parameters,
            })
            .unwrap();
        let expected = r#"{
    "properties": {
        "zeta": {
            "default": 1,
            "description": "zeta desc",
            "type": "number"
        }
    },
    "title": "Chart Values",
    "type": "object"
}
"#;
        assert_eq!(text, expected);
    }
}
