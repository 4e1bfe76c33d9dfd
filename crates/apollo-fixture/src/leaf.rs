use apollo_compiler::ast;
use apollo_compiler::schema::ExtendedType;
use apollo_compiler::Schema;

/// Returns whether `ty` is scalar-like: a scalar or enum type, possibly
/// behind a single non-null marker.
///
/// Scalar-like fields need no sub-selection and are the ones
/// [`ResolveInfo::for_all_scalars`][crate::ResolveInfo::for_all_scalars]
/// selects automatically. Objects, interfaces, unions and lists are
/// composite. Exactly one level of non-null is unwrapped before testing, so
/// a non-null list is composite even when its items are scalars. A name with
/// no definition in the schema classifies as composite.
pub fn is_leaf_type(schema: &Schema, ty: &ast::Type) -> bool {
    match ty {
        ast::Type::Named(name) | ast::Type::NonNullNamed(name) => matches!(
            schema.types.get(name),
            Some(ExtendedType::Scalar(_) | ExtendedType::Enum(_))
        ),
        ast::Type::List(_) | ast::Type::NonNullList(_) => false,
    }
}
