use indexmap::IndexMap;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;
use serde::ser::SerializeSeq;

/// An owned tree of structured data attached to a request — variable values,
/// literal arguments, and anything a [`ToGraphQLValue`] implementation
/// produces.
///
/// `Enum` holds the bare symbolic token of an enum-like value (e.g. `ACTIVE`);
/// how it renders depends on the encoder mode. `Bytes` is decoded as UTF-8
/// text at encode time. `Object` preserves insertion order.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
    Enum(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// An enum-like value identified by its bare symbolic name.
    pub fn enum_value(name: impl Into<String>) -> Self {
        Value::Enum(name.into())
    }

    /// Build a [`Value::Object`] from `(key, value)` pairs, preserving
    /// insertion order.
    pub fn object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Object(
            entries.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}
impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}
impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value.into())
    }
}
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}
impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}
impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}
impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}
impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(values: Vec<V>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}
impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(value: Option<V>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Value::Object(entries)
    }
}
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(value) => Value::Bool(value),
            serde_json::Value::Number(number) =>
                if let Some(int) = number.as_i64() {
                    Value::Int(int)
                } else {
                    number.as_f64().map_or(Value::Null, Value::Float)
                },
            serde_json::Value::String(value) => Value::String(value),
            serde_json::Value::Array(values) =>
                Value::List(values.into_iter().map(Into::into).collect()),
            serde_json::Value::Object(entries) =>
                Value::Object(entries.into_iter().map(|(key, value)|
                    (key, value.into())
                ).collect()),
        }
    }
}

/// Serializes with strict-JSON semantics: enums as their quoted symbolic
/// name, bytes as UTF-8 text. Matches what
/// [`Encoder::json()`](crate::encoder::Encoder::json) produces, so a
/// [`Value`] can be fed to any serde-based sink.
impl Serialize for Value {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match self {
            Value::Int(num) => serializer.serialize_i64(*num),
            Value::Float(num) => serializer.serialize_f64(*num),
            Value::String(str) => serializer.serialize_str(str),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Null => serializer.serialize_unit(),
            Value::Enum(name) => serializer.serialize_str(name),
            Value::Bytes(bytes) =>
                match std::str::from_utf8(bytes) {
                    Ok(text) => serializer.serialize_str(text),
                    Err(err) => Err(serde::ser::Error::custom(err)),
                },
            Value::List(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            },
            Value::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            },
        }
    }
}

/// The capability a custom type implements to describe its own substructure
/// to the encoder. The returned [`Value`] is serialized recursively, so
/// nested custom objects convert themselves on the way in.
pub trait ToGraphQLValue {
    fn to_graphql_value(&self) -> Value;
}

impl ToGraphQLValue for Value {
    fn to_graphql_value(&self) -> Value {
        self.clone()
    }
}
impl ToGraphQLValue for str {
    fn to_graphql_value(&self) -> Value {
        Value::String(self.to_string())
    }
}
impl ToGraphQLValue for String {
    fn to_graphql_value(&self) -> Value {
        Value::String(self.clone())
    }
}
impl ToGraphQLValue for bool {
    fn to_graphql_value(&self) -> Value {
        Value::Bool(*self)
    }
}
impl ToGraphQLValue for i64 {
    fn to_graphql_value(&self) -> Value {
        Value::Int(*self)
    }
}
impl ToGraphQLValue for f64 {
    fn to_graphql_value(&self) -> Value {
        Value::Float(*self)
    }
}
impl<T: ToGraphQLValue> ToGraphQLValue for Vec<T> {
    fn to_graphql_value(&self) -> Value {
        Value::List(self.iter().map(ToGraphQLValue::to_graphql_value).collect())
    }
}
impl<T: ToGraphQLValue> ToGraphQLValue for Option<T> {
    fn to_graphql_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToGraphQLValue::to_graphql_value)
    }
}
impl<T: ToGraphQLValue> ToGraphQLValue for IndexMap<String, T> {
    fn to_graphql_value(&self) -> Value {
        Value::Object(self.iter().map(|(key, value)|
            (key.clone(), value.to_graphql_value())
        ).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_value_preserves_structure() {
        let json: serde_json::Value = serde_json::from_str(
            r#"{"id": "7", "count": 3, "tags": ["a", "b"], "extra": null}"#,
        ).unwrap();

        let value = Value::from(json);
        let Value::Object(entries) = value else {
            panic!("Expected an object, got {value:?}");
        };
        assert_eq!(entries["id"], Value::String("7".to_string()));
        assert_eq!(entries["count"], Value::Int(3));
        assert_eq!(entries["tags"], Value::List(vec![
            Value::String("a".to_string()),
            Value::String("b".to_string()),
        ]));
        assert_eq!(entries["extra"], Value::Null);
    }

    #[test]
    fn serialize_enum_and_bytes_as_strings() {
        let value = Value::object([
            ("status", Value::enum_value("ACTIVE")),
            ("note", Value::Bytes(b"hi".to_vec())),
        ]);
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"status":"ACTIVE","note":"hi"}"#,
        );
    }

    #[test]
    fn serialize_invalid_utf8_bytes_is_an_error() {
        let value = Value::Bytes(vec![0xff, 0xfe]);
        assert!(serde_json::to_string(&value).is_err());
    }

    #[test]
    fn to_graphql_value_is_identity_for_value() {
        let value = Value::object([("id", "7")]);
        assert_eq!(value.to_graphql_value(), value);
    }

    #[test]
    fn custom_type_converts_through_the_capability() {
        struct Item {
            title: String,
        }
        impl ToGraphQLValue for Item {
            fn to_graphql_value(&self) -> Value {
                Value::object([("title", self.title.as_str())])
            }
        }

        let item = Item { title: "x".to_string() };
        assert_eq!(
            item.to_graphql_value(),
            Value::object([("title", "x")]),
        );
    }
}
