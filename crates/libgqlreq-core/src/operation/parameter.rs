/// A named argument attached to a [`Field`](crate::operation::Field), bound
/// either to a declared [`Variable`](crate::operation::Variable) or to a
/// literal value.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    binding: ParameterBinding,
    name: String,
}

#[derive(Clone, Debug, PartialEq)]
enum ParameterBinding {
    Literal {
        quote: bool,
        value: String,
    },
    Variable(String),
}

impl Parameter {
    /// A parameter that references a variable declared on the operation;
    /// renders as `name: $variable_name`.
    pub fn variable(
        name: impl Into<String>,
        variable_name: impl Into<String>,
    ) -> Self {
        Self {
            binding: ParameterBinding::Variable(variable_name.into()),
            name: name.into(),
        }
    }

    /// A parameter carrying a literal value. `quote` controls whether the
    /// value renders inside double quotes (`name: "value"`) or bare
    /// (`name: value`) for ints, bools, and enum tokens.
    pub fn literal(
        name: impl Into<String>,
        value: impl Into<String>,
        quote: bool,
    ) -> Self {
        Self {
            binding: ParameterBinding::Literal {
                quote,
                value: value.into(),
            },
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(super) fn to_request_string(&self) -> String {
        match &self.binding {
            ParameterBinding::Variable(variable_name) =>
                format!("{}: ${variable_name}", self.name),

            ParameterBinding::Literal { quote: true, value } =>
                format!(
                    "{}: \"{}\"",
                    self.name,
                    value.replace('\\', "\\\\").replace('"', "\\\""),
                ),

            ParameterBinding::Literal { quote: false, value } =>
                format!("{}: {value}", self.name),
        }
    }
}
