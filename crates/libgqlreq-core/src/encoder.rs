use crate::Value;
use thiserror::Error;

/// The indent unit used for pretty-printed output (and for request-body
/// rendering): two spaces per nesting level.
pub const INDENT_UNIT: &str = "  ";

/// Selects the textual syntax an [`Encoder`] produces from a [`Value`] tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncodeMode {
    /// Standard JSON. Enum-like values serialize as their quoted symbolic
    /// name; byte strings decode as UTF-8 text.
    Json,

    /// GraphQL literal syntax: object keys are emitted bare (unquoted) and
    /// enum-like values emit their bare symbolic token. String scalars stay
    /// quoted.
    GraphQL,
}

/// Serializes a [`Value`] tree into strict JSON or GraphQL literal text.
///
/// A single recursive-descent writer distinguishes object keys, enum tokens,
/// and string scalars before anything is written, so no textual post-pass is
/// needed to produce the unquoted GraphQL forms.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Encoder {
    indent: Option<String>,
    mode: EncodeMode,
}
impl Encoder {
    /// A strict-JSON encoder, pretty-printed with the two-space
    /// [`INDENT_UNIT`].
    pub fn json() -> Self {
        Self {
            indent: Some(INDENT_UNIT.to_string()),
            mode: EncodeMode::Json,
        }
    }

    /// A GraphQL-literal encoder with compact (single-line) output.
    pub fn graphql() -> Self {
        Self {
            indent: None,
            mode: EncodeMode::GraphQL,
        }
    }

    pub fn mode(&self) -> EncodeMode {
        self.mode
    }

    /// Pretty-print nested structures with `unit` per nesting level.
    pub fn with_indent(mut self, unit: impl Into<String>) -> Self {
        self.indent = Some(unit.into());
        self
    }

    /// Single-line output; items separated by `", "`.
    pub fn compact(mut self) -> Self {
        self.indent = None;
        self
    }

    pub fn encode(&self, value: &Value) -> Result<String, EncodeError> {
        tracing::debug!(mode = ?self.mode, "encoding value tree");
        let mut out = String::new();
        self.write_value(value, 0, &mut out)?;
        Ok(out)
    }

    fn write_value(
        &self,
        value: &Value,
        depth: usize,
        out: &mut String,
    ) -> Result<(), EncodeError> {
        match value {
            Value::Int(num) => out.push_str(&num.to_string()),

            Value::Float(num) => {
                if !num.is_finite() {
                    return Err(EncodeError::NonFiniteFloat(*num));
                }
                // `{:?}` keeps the decimal point on whole floats (`1.0`).
                out.push_str(&format!("{num:?}"));
            },

            Value::String(str) => write_quoted(str, out),

            Value::Bool(value) => out.push_str(if *value { "true" } else { "false" }),

            Value::Null => out.push_str("null"),

            Value::Enum(name) => match self.mode {
                EncodeMode::GraphQL => out.push_str(name),
                EncodeMode::Json => write_quoted(name, out),
            },

            Value::Bytes(bytes) => {
                let text = std::str::from_utf8(bytes)?;
                write_quoted(text, out);
            },

            Value::List(values) => self.write_list(values, depth, out)?,

            Value::Object(entries) => self.write_object(entries, depth, out)?,
        }
        Ok(())
    }

    fn write_list(
        &self,
        values: &[Value],
        depth: usize,
        out: &mut String,
    ) -> Result<(), EncodeError> {
        if values.is_empty() {
            out.push_str("[]");
            return Ok(());
        }

        out.push('[');
        for (idx, value) in values.iter().enumerate() {
            if idx > 0 {
                out.push(',');
            }
            self.open_item(depth + 1, idx, out);
            self.write_value(value, depth + 1, out)?;
        }
        self.close_block(depth, out);
        out.push(']');
        Ok(())
    }

    fn write_object(
        &self,
        entries: &indexmap::IndexMap<String, Value>,
        depth: usize,
        out: &mut String,
    ) -> Result<(), EncodeError> {
        if entries.is_empty() {
            out.push_str("{}");
            return Ok(());
        }

        out.push('{');
        for (idx, (key, value)) in entries.iter().enumerate() {
            if idx > 0 {
                out.push(',');
            }
            self.open_item(depth + 1, idx, out);
            match self.mode {
                EncodeMode::GraphQL => out.push_str(key),
                EncodeMode::Json => write_quoted(key, out),
            }
            out.push_str(": ");
            self.write_value(value, depth + 1, out)?;
        }
        self.close_block(depth, out);
        out.push('}');
        Ok(())
    }

    /// Whitespace between an opening bracket (or a separating comma) and the
    /// next item.
    fn open_item(&self, depth: usize, idx: usize, out: &mut String) {
        match &self.indent {
            Some(unit) => {
                out.push('\n');
                push_indent(unit, depth, out);
            },
            None => {
                if idx > 0 {
                    out.push(' ');
                }
            },
        }
    }

    /// Whitespace between the last item and a closing bracket.
    fn close_block(&self, depth: usize, out: &mut String) {
        if let Some(unit) = &self.indent {
            out.push('\n');
            push_indent(unit, depth, out);
        }
    }
}

fn push_indent(unit: &str, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(unit);
    }
}

fn write_quoted(text: &str, out: &mut String) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            ch if (ch as u32) < 0x20 =>
                out.push_str(&format!("\\u{:04x}", ch as u32)),
            ch => out.push(ch),
        }
    }
    out.push('"');
}

/// Encode `value` as pretty-printed strict JSON (two-space indent).
pub fn to_json_text(value: &Value) -> Result<String, EncodeError> {
    Encoder::json().encode(value)
}

/// Encode `value` as a compact GraphQL literal.
pub fn to_graphql_text(value: &Value) -> Result<String, EncodeError> {
    Encoder::graphql().encode(value)
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum EncodeError {
    #[error("Byte-string values must decode as UTF-8 to encode as text")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("JSON cannot represent the non-finite float value `{0}`")]
    NonFiniteFloat(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_and_id() -> Value {
        Value::object([
            ("status", Value::enum_value("ACTIVE")),
            ("id", Value::from("7")),
        ])
    }

    #[test]
    fn graphql_mode_unquotes_keys_and_enum_tokens() {
        let text = to_graphql_text(&status_and_id()).unwrap();
        assert_eq!(text, r#"{status: ACTIVE, id: "7"}"#);
    }

    #[test]
    fn json_mode_quotes_keys_and_enum_names() {
        let text = Encoder::json().compact().encode(&status_and_id()).unwrap();
        assert_eq!(text, r#"{"status": "ACTIVE", "id": "7"}"#);
    }

    #[test]
    fn json_mode_pretty_prints_by_default() {
        let text = to_json_text(&status_and_id()).unwrap();
        assert_eq!(text, "{\n  \"status\": \"ACTIVE\",\n  \"id\": \"7\"\n}");
    }

    #[test]
    fn graphql_mode_supports_indented_output() {
        let value = Value::object([
            ("filter", Value::object([("status", Value::enum_value("DONE"))])),
        ]);
        let text = Encoder::graphql().with_indent(INDENT_UNIT).encode(&value).unwrap();
        assert_eq!(text, "{\n  filter: {\n    status: DONE\n  }\n}");
    }

    #[test]
    fn nested_lists_indent_one_unit_per_level() {
        let value = Value::object([
            ("tags", Value::from(vec!["a", "b"])),
        ]);
        let text = to_json_text(&value).unwrap();
        assert_eq!(text, "{\n  \"tags\": [\n    \"a\",\n    \"b\"\n  ]\n}");
    }

    #[test]
    fn empty_containers_stay_collapsed() {
        assert_eq!(to_json_text(&Value::Object(indexmap::IndexMap::new())).unwrap(), "{}");
        assert_eq!(to_json_text(&Value::List(vec![])).unwrap(), "[]");
        let value = Value::object([("items", Value::List(vec![]))]);
        assert_eq!(to_json_text(&value).unwrap(), "{\n  \"items\": []\n}");
    }

    #[test]
    fn enums_in_lists_emit_bare_tokens_in_graphql_mode() {
        let value = Value::List(vec![
            Value::enum_value("ACTIVE"),
            Value::enum_value("DISABLED"),
        ]);
        assert_eq!(to_graphql_text(&value).unwrap(), "[ACTIVE, DISABLED]");
    }

    #[test]
    fn scalars_render_as_json_tokens() {
        assert_eq!(to_graphql_text(&Value::Int(42)).unwrap(), "42");
        assert_eq!(to_graphql_text(&Value::Bool(false)).unwrap(), "false");
        assert_eq!(to_graphql_text(&Value::Null).unwrap(), "null");
    }

    #[test]
    fn whole_floats_keep_their_decimal_point() {
        assert_eq!(to_json_text(&Value::Float(1.0)).unwrap(), "1.0");
        assert_eq!(to_json_text(&Value::Float(2.5)).unwrap(), "2.5");
    }

    #[test]
    fn non_finite_floats_are_an_error() {
        assert!(matches!(
            to_json_text(&Value::Float(f64::NAN)),
            Err(EncodeError::NonFiniteFloat(_)),
        ));
        assert!(matches!(
            to_json_text(&Value::Float(f64::INFINITY)),
            Err(EncodeError::NonFiniteFloat(_)),
        ));
    }

    #[test]
    fn bytes_decode_as_utf8_text() {
        let value = Value::object([("note", Value::Bytes("héllo".as_bytes().to_vec()))]);
        assert_eq!(
            Encoder::json().compact().encode(&value).unwrap(),
            r#"{"note": "héllo"}"#,
        );
    }

    #[test]
    fn invalid_utf8_bytes_are_an_error() {
        let value = Value::Bytes(vec![0xff, 0xfe]);
        assert!(matches!(
            to_json_text(&value),
            Err(EncodeError::InvalidUtf8(_)),
        ));
    }

    #[test]
    fn strings_escape_quotes_backslashes_and_control_chars() {
        let value = Value::from("a \"b\"\\\n\u{1}");
        assert_eq!(
            to_json_text(&value).unwrap(),
            "\"a \\\"b\\\"\\\\\\n\\u0001\"",
        );
    }

    #[test]
    fn string_values_stay_quoted_in_graphql_mode() {
        let value = Value::object([("title", Value::from("x"))]);
        assert_eq!(to_graphql_text(&value).unwrap(), r#"{title: "x"}"#);
    }
}
