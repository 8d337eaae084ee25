use std::fmt;

/// The kind of request an [`Operation`](crate::operation::Operation)
/// represents. Renders as the lowercase keyword that opens the request text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
}
impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OperationKind::Mutation => "mutation",
            OperationKind::Query => "query",
        })
    }
}
