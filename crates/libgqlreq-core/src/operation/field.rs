use crate::operation::Parameter;
use crate::operation::indent_block;

/// A named selection within an operation or parent field, optionally
/// parameterized and optionally expanding into subfields. Fields own their
/// parameters and subfields outright, so the selection is always a strict
/// tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    alias: Option<String>,
    name: String,
    parameters: Vec<Parameter>,
    subfields: Vec<Field>,
}
impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            name: name.into(),
            parameters: vec![],
            subfields: vec![],
        }
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn subfields(&self) -> &[Field] {
        &self.subfields
    }

    /// Select this field under a different response key; renders as
    /// `alias: name`.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Add a [`Parameter`] after any previously added `Parameter`s.
    pub fn add_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn add_parameters(
        mut self,
        parameters: impl IntoIterator<Item = Parameter>,
    ) -> Self {
        self.parameters.extend(parameters);
        self
    }

    /// Replace all previously added [`Parameter`]s.
    pub fn set_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Add a subfield after any previously added subfields.
    pub fn add_subfield(mut self, subfield: Field) -> Self {
        self.subfields.push(subfield);
        self
    }

    pub fn add_subfields(
        mut self,
        subfields: impl IntoIterator<Item = Field>,
    ) -> Self {
        self.subfields.extend(subfields);
        self
    }

    /// Replace all previously added subfields.
    pub fn set_subfields(mut self, subfields: Vec<Field>) -> Self {
        self.subfields = subfields;
        self
    }

    /// Render this field (and its whole subtree) as request text. Nested
    /// blocks indent one unit per level of the tree.
    pub fn to_request_string(&self) -> String {
        let mut request = match &self.alias {
            Some(alias) => format!("{alias}: {}", self.name),
            None => self.name.clone(),
        };
        if !self.parameters.is_empty() {
            let parameters = self.parameters.iter()
                .map(Parameter::to_request_string)
                .collect::<Vec<_>>()
                .join(",\n");
            request.push_str(&format!("(\n{}\n)", indent_block(&parameters)));
        }
        if !self.subfields.is_empty() {
            let subfields = self.subfields.iter()
                .map(Field::to_request_string)
                .collect::<Vec<_>>()
                .join("\n");
            request.push_str(&format!(" {{\n{}\n}}", indent_block(&subfields)));
        }
        request
    }
}
