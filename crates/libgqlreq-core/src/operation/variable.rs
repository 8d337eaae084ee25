use crate::Value;

/// A named, typed input declared on an
/// [`Operation`](crate::operation::Operation) and referenced from parameters
/// via a `$name` token. The type annotation is a raw GraphQL type string
/// (e.g. `String!`, `[ID!]!`); it is not validated here.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    name: String,
    type_annotation: String,
    value: Value,
}
impl Variable {
    pub fn new(
        name: impl Into<String>,
        type_annotation: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            type_annotation: type_annotation.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &str {
        self.type_annotation.as_str()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The `$name: Type` form used in an operation's signature.
    pub(super) fn declaration(&self) -> String {
        format!("${}: {}", self.name, self.type_annotation)
    }
}
