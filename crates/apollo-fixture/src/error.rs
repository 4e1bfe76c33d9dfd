use apollo_compiler::ast::OperationType;
use apollo_compiler::validation::DiagnosticList;
use apollo_compiler::Name;
use thiserror::Error;

/// Errors raised while assembling a [`ResolveInfo`][crate::ResolveInfo].
///
/// Fixture construction is all-or-nothing: every variant is raised at the
/// point of detection and surfaces to the caller unchanged.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The schema does not define a root type for the requested operation.
    #[error("schema does not define a {} root type", .operation_type.name())]
    MissingRootType { operation_type: OperationType },

    /// The requested root field does not exist on the root type.
    #[error("no such root field on type {type_name}: {field_name}")]
    UnknownField { type_name: Name, field_name: String },

    /// A field's named type has no definition in the schema. Cannot happen
    /// with a validated schema.
    #[error("type {name} is not defined by the schema")]
    UndefinedType { name: Name },

    /// The fragment source did not parse as a GraphQL document.
    #[error("syntax error in query: {errors}")]
    Syntax { errors: DiagnosticList },

    /// The parsed document does not start with a query operation.
    #[error("invalid query: {source_text}")]
    InvalidFragment { source_text: String },
}
