use crate::operation::Field;
use crate::operation::Operation;
use crate::operation::OperationKind;
use crate::operation::Variable;
use thiserror::Error;

type Result<T> = std::result::Result<T, OperationBuildError>;

/// Assembles an [`Operation`] incrementally. Every mutator consumes and
/// returns the builder so calls can chain; [`OperationBuilder::build()`] is
/// the only step that can fail.
///
/// Beyond requiring a kind, nothing is validated here: duplicate variable
/// names, dangling `$var` references, and type mismatches are the caller's
/// responsibility.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OperationBuilder {
    fields: Vec<Field>,
    name: Option<String>,
    operation_kind: Option<OperationKind>,
    variables: Vec<Variable>,
}
impl OperationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_kind(mut self, kind: OperationKind) -> Self {
        self.operation_kind = Some(kind);
        self
    }

    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a [`Variable`] after any previously added `Variable`s.
    pub fn add_variable(mut self, variable: Variable) -> Self {
        self.variables.push(variable);
        self
    }

    pub fn add_variables(
        mut self,
        variables: impl IntoIterator<Item = Variable>,
    ) -> Self {
        self.variables.extend(variables);
        self
    }

    /// Replace all previously added [`Variable`]s.
    pub fn set_variables(mut self, variables: Vec<Variable>) -> Self {
        self.variables = variables;
        self
    }

    /// Add a [`Field`] after any previously added `Field`s.
    pub fn add_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn add_fields(
        mut self,
        fields: impl IntoIterator<Item = Field>,
    ) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Replace all previously added [`Field`]s.
    pub fn set_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    /// Consume this builder to produce an [`Operation`].
    ///
    /// An operation that declares variables but was never named gets the
    /// placeholder name `UnnamedOperation`, since a variable signature is
    /// only valid on a named operation.
    pub fn build(self) -> Result<Operation> {
        let Some(kind) = self.operation_kind else {
            return Err(OperationBuildError::MissingOperationKind);
        };

        let name = match self.name {
            Some(name) => Some(name),
            None if !self.variables.is_empty() =>
                Some("UnnamedOperation".to_string()),
            None => None,
        };

        tracing::debug!(
            kind = %kind,
            name = ?name,
            num_variables = self.variables.len(),
            num_fields = self.fields.len(),
            "built GraphQL operation"
        );

        Ok(Operation {
            fields: self.fields,
            kind,
            name,
            variables: self.variables,
        })
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum OperationBuildError {
    #[error("Must specify an operation kind for this operation: query or mutation")]
    MissingOperationKind,
}
