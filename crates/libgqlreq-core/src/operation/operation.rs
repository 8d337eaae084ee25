use crate::Value;
use crate::encoder::EncodeError;
use crate::encoder::Encoder;
use crate::operation::Field;
use crate::operation::OperationBuilder;
use crate::operation::OperationKind;
use crate::operation::Variable;
use crate::operation::indent_block;
use indexmap::IndexMap;

/// The top-level GraphQL request unit: a query or mutation with an optional
/// name, variable declarations, and a field selection.
///
/// An `Operation` produces the two halves of a request — the request text
/// ([`Operation::request_body()`]) and the variables JSON payload
/// ([`Operation::request_variables()`]) — which a transport layer outside
/// this crate sends over the wire.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub(super) fields: Vec<Field>,
    pub(super) kind: OperationKind,
    pub(super) name: Option<String>,
    pub(super) variables: Vec<Variable>,
}
impl Operation {
    /// Convenience wrapper around [`OperationBuilder::new()`].
    pub fn builder() -> OperationBuilder {
        OperationBuilder::new()
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Render the GraphQL request text: the kind keyword, the name (when
    /// present), the parenthesized `$name: Type` declarations (when variables
    /// exist), and the brace-delimited field block (when fields exist), with
    /// nested blocks indented one unit per level.
    ///
    /// Rendering is pure; calling this twice yields byte-identical output.
    pub fn request_body(&self) -> String {
        let mut body = format!("{} ", self.kind);
        if let Some(name) = &self.name {
            body.push_str(name);
        }
        if !self.variables.is_empty() {
            let declarations = self.variables.iter()
                .map(Variable::declaration)
                .collect::<Vec<_>>()
                .join(",\n");
            body.push_str(&format!("(\n{}\n)", indent_block(&declarations)));
        }
        if !self.fields.is_empty() {
            let fields = self.fields.iter()
                .map(Field::to_request_string)
                .collect::<Vec<_>>()
                .join("\n");
            body.push_str(&format!("{{\n{}\n}}", indent_block(&fields)));
        }
        body.trim_end().to_string()
    }

    /// Build the variables payload — variable name to value, in declaration
    /// order — and serialize it as pretty-printed JSON.
    pub fn request_variables(&self) -> Result<String, EncodeError> {
        let payload: IndexMap<String, Value> = self.variables.iter()
            .map(|variable| (variable.name().to_string(), variable.value().clone()))
            .collect();
        Encoder::json().encode(&Value::Object(payload))
    }
}
