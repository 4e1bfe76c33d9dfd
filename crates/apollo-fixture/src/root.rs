use apollo_compiler::ast;
use apollo_compiler::ast::FieldDefinition;
use apollo_compiler::ast::OperationType;
use apollo_compiler::schema::Component;
use apollo_compiler::schema::ExtendedType;
use apollo_compiler::schema::ObjectType;
use apollo_compiler::Node;
use apollo_compiler::Schema;

use crate::error::FixtureError;

/// Returns the object type serving as the root of `operation_type`.
pub(crate) fn root_type<'schema>(
    schema: &'schema Schema,
    operation_type: OperationType,
) -> Result<&'schema Node<ObjectType>, FixtureError> {
    schema
        .root_operation(operation_type)
        .and_then(|name| schema.get_object(name))
        .ok_or(FixtureError::MissingRootType { operation_type })
}

/// Looks up `field_name` among the explicit fields of the root type for
/// `operation_type`, returning the root type together with the field
/// definition. Meta-fields are not considered.
pub(crate) fn root_field<'schema>(
    schema: &'schema Schema,
    operation_type: OperationType,
    field_name: &str,
) -> Result<(&'schema Node<ObjectType>, &'schema Component<FieldDefinition>), FixtureError> {
    let root = root_type(schema, operation_type)?;
    let field = root
        .fields
        .get(field_name)
        .ok_or_else(|| FixtureError::UnknownField {
            type_name: root.name.clone(),
            field_name: field_name.to_string(),
        })?;
    Ok((root, field))
}

/// Resolves `ty` to the definition of its underlying named type, stripping
/// every list and non-null wrapper.
pub(crate) fn named_type<'schema>(
    schema: &'schema Schema,
    ty: &ast::Type,
) -> Result<&'schema ExtendedType, FixtureError> {
    let name = ty.inner_named_type();
    schema
        .types
        .get(name)
        .ok_or_else(|| FixtureError::UndefinedType { name: name.clone() })
}

/// Resolves the named return type of a root field.
///
/// The field is looked up on the root type for `operation_type`; a mutation
/// or subscription against a schema lacking that root type fails with
/// [`FixtureError::MissingRootType`] before any field lookup happens. The
/// field's type is returned fully unwrapped: `[User!]!` and `User` both
/// resolve to the definition of `User`.
pub fn root_field_type<'schema>(
    schema: &'schema Schema,
    operation_type: OperationType,
    field_name: &str,
) -> Result<&'schema ExtendedType, FixtureError> {
    let (_root, field) = root_field(schema, operation_type, field_name)?;
    named_type(schema, &field.ty)
}
