//! Metadata model recovered from directive comments.
//!
//! [`Metadata`] owns every declared [`Parameter`] in file order; each
//! [`Section`] refers to its parameters by index into that list.

use crate::value::{ParamType, Value};

/// How a parameter takes part in validation and rendering.
///
/// # Examples
///
/// ```
/// use chartdoc::Role;
///
/// assert!(Role::Normal.validates() && Role::Normal.renders());
/// assert!(!Role::Skip.validates() && !Role::Skip.renders());
/// assert!(!Role::Extra.validates() && Role::Extra.renders());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Must exist in the values tree and is rendered.
    Normal,
    /// Excluded, together with its subtree, from validation and output.
    Skip,
    /// Documentation-only entry; never validated, rendered without a value.
    Extra,
}

impl Role {
    /// Whether the parameter is checked against the values tree.
    #[must_use]
    pub const fn validates(self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Whether the parameter appears in the README table.
    #[must_use]
    pub const fn renders(self) -> bool {
        matches!(self, Self::Normal | Self::Extra)
    }
}

/// One declared or inferred configuration entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Dot-path, with array elements as `[i]` segments.
    pub name: String,
    /// Free text description.
    pub description: String,
    /// Current value; `None` until merged with the values tree.
    pub value: Option<Value>,
    /// Current type; `None` until merged with the values tree.
    pub param_type: Option<ParamType>,
    /// Modifier tokens in declaration order.
    pub modifiers: Vec<String>,
    /// Index of the owning section in [`Metadata::sections`].
    pub section: Option<usize>,
    /// Whether the parameter may appear in the generated schema.
    pub schema: bool,
    role: Role,
}

impl Parameter {
    /// A [`Role::Normal`] parameter.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            value: None,
            param_type: None,
            modifiers: Vec::new(),
            section: None,
            schema: true,
            role: Role::Normal,
        }
    }

    /// A [`Role::Skip`] parameter.
    #[must_use]
    pub fn skip(name: impl Into<String>) -> Self {
        Self {
            role: Role::Skip,
            ..Self::new(name)
        }
    }

    /// A [`Role::Extra`] parameter; its value is the empty string.
    #[must_use]
    pub fn extra(name: impl Into<String>) -> Self {
        Self {
            role: Role::Extra,
            value: Some(Value::String(String::new())),
            ..Self::new(name)
        }
    }

    /// Builder-style description setter.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder-style modifiers setter.
    #[must_use]
    pub fn with_modifiers<I, S>(mut self, modifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modifiers = modifiers.into_iter().map(Into::into).collect();
        self
    }

    /// The parameter's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Shorthand for `role() == Role::Skip`.
    #[must_use]
    pub fn is_skip(&self) -> bool {
        self.role == Role::Skip
    }

    /// Shorthand for `role() == Role::Extra`.
    #[must_use]
    pub fn is_extra(&self) -> bool {
        self.role == Role::Extra
    }

    /// Whether `modifier` appears in the modifier list.
    #[must_use]
    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers.iter().any(|m| m == modifier)
    }

    /// Whether no value has been set, or the value is null.
    #[must_use]
    pub fn value_is_unset(&self) -> bool {
        self.value.as_ref().map_or(true, Value::is_null)
    }
}

/// A named group of parameters between one `@section` and the next.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    /// Heading text.
    pub name: String,
    /// Lines captured inside a description block.
    pub description_lines: Vec<String>,
    /// Indices into [`Metadata::parameters`], in file order.
    pub parameters: Vec<usize>,
}

impl Section {
    /// A section with no description and no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Description lines joined with newlines.
    #[must_use]
    pub fn description(&self) -> String {
        self.description_lines.join("\n")
    }
}

/// All sections and declared parameters of a values file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    /// Sections in file order.
    pub sections: Vec<Section>,
    /// Every declared parameter in file order.
    pub parameters: Vec<Parameter>,
}

impl Metadata {
    /// Append a section and return its index.
    pub fn add_section(&mut self, section: Section) -> usize {
        self.sections.push(section);
        self.sections.len() - 1
    }

    /// Append a parameter to the global list and, if `section` is given,
    /// to that section. Returns the parameter's index.
    ///
    /// # Examples
    ///
    /// ```
    /// use chartdoc::{Metadata, Parameter, Section};
    ///
    /// let mut metadata = Metadata::default();
    /// let section = metadata.add_section(Section::new("Global"));
    /// metadata.add_parameter(Parameter::new("replicaCount"), Some(section));
    /// metadata.add_parameter(Parameter::skip("podLabels"), None);
    ///
    /// assert_eq!(metadata.parameters.len(), 2);
    /// assert_eq!(metadata.sections[0].parameters, vec![0]);
    /// ```
    pub fn add_parameter(&mut self, mut parameter: Parameter, section: Option<usize>) -> usize {
        let index = self.parameters.len();
        parameter.section = section;
        if let Some(owner) = section.and_then(|i| self.sections.get_mut(i)) {
            owner.parameters.push(index);
        }
        self.parameters.push(parameter);
        index
    }

    /// Look up a parameter by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Parameters of a section, in order.
    pub fn section_parameters<'a>(
        &'a self,
        section: &'a Section,
    ) -> impl Iterator<Item = &'a Parameter> + 'a {
        section
            .parameters
            .iter()
            .filter_map(|&i| self.parameters.get(i))
    }
}
