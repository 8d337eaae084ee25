//! Build GraphQL query/mutation request strings and their JSON variable
//! payloads from an in-memory tree of operations, fields, and parameters.
//! No transport, no schema validation, no response parsing.

pub mod encoder;
pub mod operation;
mod value;

pub use value::ToGraphQLValue;
pub use value::Value;
