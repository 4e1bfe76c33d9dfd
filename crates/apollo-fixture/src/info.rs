use apollo_compiler::ast;
use apollo_compiler::ast::OperationType;
use apollo_compiler::schema::ExtendedType;
use apollo_compiler::schema::ObjectType;
use apollo_compiler::Name;
use apollo_compiler::Node;
use apollo_compiler::Schema;
use indexmap::IndexMap;

use crate::error::FixtureError;
use crate::leaf::is_leaf_type;
use crate::root;

/// A JSON value as carried in variable values and resolver inputs.
pub type JsonValue = serde_json_bytes::Value;

/// A JSON object, in insertion order.
pub type JsonMap = serde_json_bytes::Map<serde_json_bytes::ByteString, JsonValue>;

/// Root operations a fixture can be built for.
///
/// Subscription resolvers are invoked through a different execution path and
/// cannot be exercised with these fixtures.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Operation {
    Query,
    Mutation,
}

impl Operation {
    /// The equivalent AST operation type.
    pub fn operation_type(self) -> OperationType {
        match self {
            Operation::Query => OperationType::Query,
            Operation::Mutation => OperationType::Mutation,
        }
    }
}

/// One step of a response path, as reported to resolvers during execution.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum PathSegment {
    /// A response key within the parent object.
    Key(Name),
    /// An offset within a list value.
    Index(usize),
}

/// A synthetic resolver-context fixture.
///
/// Mirrors the "resolve info" value an execution engine constructs and hands
/// to a field resolver: which field was requested with which sub-selections,
/// against which schema, under which operation. Built by
/// [`for_all_scalars`][Self::for_all_scalars] or
/// [`from_fragment`][Self::from_fragment], and passed by a test to whatever
/// invokes the resolver under test, together with parent, argument and
/// context values of the test's choosing.
///
/// The fixture borrows the schema and owns everything else. All AST nodes
/// are built fresh per fixture.
#[derive(Debug, Clone)]
pub struct ResolveInfo<'schema> {
    /// Selection nodes for the invoked field.
    ///
    /// At most one entry: the root field carrying its sub-selections.
    /// Empty when [`for_all_scalars`][Self::for_all_scalars] resolved a
    /// non-object return type.
    pub field_nodes: Vec<Node<ast::Field>>,
    /// Fragment definitions in scope for the selection. Always empty.
    pub fragments: IndexMap<Name, Node<ast::FragmentDefinition>>,
    /// The schema the fixture was built against.
    pub schema: &'schema Schema,
    /// Name of the invoked root field.
    pub field_name: Name,
    /// Definition of the field's return type, unwrapped to its named type.
    pub return_type: &'schema ExtendedType,
    /// The root operation type the invocation is attributed to.
    pub parent_type: &'schema Node<ObjectType>,
    /// Response path up to the invoked field. Always `None`.
    pub path: Option<Vec<PathSegment>>,
    /// Value provided to the root of the execution. Always null.
    pub root_value: JsonValue,
    /// Synthetic operation definition tagged with the requested operation
    /// kind. Its own selection set is empty: the real selections live in
    /// [`field_nodes`][Self::field_nodes].
    pub operation: Node<ast::OperationDefinition>,
    /// Coerced variable values. Always empty.
    pub variable_values: JsonMap,
}

impl<'schema> ResolveInfo<'schema> {
    /// Builds a fixture selecting every scalar-like field of the root
    /// field's return type.
    ///
    /// The root field is looked up on the schema's root type for
    /// `operation`, and its return type is unwrapped to the named type. When
    /// that type is an object type, the generated selection lists its
    /// scalar and enum fields in declaration order; fields returning
    /// objects, interfaces, unions or lists are left out, since they would
    /// need sub-selections of their own. A caller that wants them supplies
    /// the selection through [`from_fragment`][Self::from_fragment] instead.
    ///
    /// When the return type is not an object type, no selection nodes are
    /// generated at all and [`field_nodes`][Self::field_nodes] is empty.
    ///
    /// # Errors
    ///
    /// [`FixtureError::MissingRootType`] when `operation` is
    /// [`Operation::Mutation`] and the schema has no mutation type, and
    /// [`FixtureError::UnknownField`] when the root type has no field named
    /// `root_field_name`.
    pub fn for_all_scalars(
        root_field_name: &str,
        schema: &'schema Schema,
        operation: Operation,
    ) -> Result<Self, FixtureError> {
        let operation_type = operation.operation_type();
        let (_, field) = root::root_field(schema, operation_type, root_field_name)?;
        let return_type = root::named_type(schema, &field.ty)?;

        let mut field_nodes = Vec::new();
        if let ExtendedType::Object(object) = return_type {
            let selections = object
                .fields
                .values()
                .filter(|def| is_leaf_type(schema, &def.ty))
                .map(|def| ast::Selection::Field(field_node(def.name.clone(), Vec::new())))
                .collect();
            field_nodes.push(field_node(field.name.clone(), selections));
        }

        let parent_type = root::root_type(schema, operation_type)?;
        Ok(Self::assemble(
            field_nodes,
            schema,
            field.name.clone(),
            return_type,
            parent_type,
            operation,
        ))
    }

    /// Builds a fixture whose selection set is spliced verbatim from a
    /// hand-written query.
    ///
    /// `query_source` must parse to a document whose first definition is a
    /// `query` operation; that operation's selection set becomes the root
    /// field's sub-selection exactly as written, including aliases,
    /// arguments and nested selections. The source document must be a
    /// `query` even when `operation` is [`Operation::Mutation`], and the
    /// fixture's parent type is always the schema's query root type in this
    /// mode. Both are fixed behavior.
    ///
    /// # Errors
    ///
    /// The root field lookup fails as in
    /// [`for_all_scalars`][Self::for_all_scalars]. On top of that,
    /// [`FixtureError::Syntax`] when `query_source` does not parse, and
    /// [`FixtureError::InvalidFragment`] when the parsed document does not
    /// start with a query operation.
    pub fn from_fragment(
        root_field_name: &str,
        schema: &'schema Schema,
        operation: Operation,
        query_source: &str,
    ) -> Result<Self, FixtureError> {
        let (_, field) = root::root_field(schema, operation.operation_type(), root_field_name)?;
        let return_type = root::named_type(schema, &field.ty)?;

        let selections = extract_selection_set(query_source)?;
        let field_nodes = vec![field_node(field.name.clone(), selections)];

        let parent_type = root::root_type(schema, OperationType::Query)?;
        Ok(Self::assemble(
            field_nodes,
            schema,
            field.name.clone(),
            return_type,
            parent_type,
            operation,
        ))
    }

    fn assemble(
        field_nodes: Vec<Node<ast::Field>>,
        schema: &'schema Schema,
        field_name: Name,
        return_type: &'schema ExtendedType,
        parent_type: &'schema Node<ObjectType>,
        operation: Operation,
    ) -> Self {
        Self {
            field_nodes,
            fragments: IndexMap::new(),
            schema,
            field_name,
            return_type,
            parent_type,
            path: None,
            root_value: JsonValue::Null,
            operation: Node::new(ast::OperationDefinition {
                operation_type: operation.operation_type(),
                name: None,
                variables: Vec::new(),
                directives: ast::DirectiveList::default(),
                selection_set: Vec::new(),
            }),
            variable_values: JsonMap::new(),
        }
    }
}

fn field_node(name: Name, selection_set: Vec<ast::Selection>) -> Node<ast::Field> {
    Node::new(ast::Field {
        alias: None,
        name,
        arguments: Vec::new(),
        directives: ast::DirectiveList::default(),
        selection_set,
    })
}

/// Parses `query_source` and extracts the selection set of its first
/// definition, which must be a query operation.
fn extract_selection_set(query_source: &str) -> Result<Vec<ast::Selection>, FixtureError> {
    let document = ast::Document::parse(query_source, "fixture.graphql")
        .map_err(|invalid| FixtureError::Syntax {
            errors: invalid.errors,
        })?;
    match document.definitions.first() {
        Some(ast::Definition::OperationDefinition(operation))
            if operation.operation_type == OperationType::Query =>
        {
            Ok(operation.selection_set.clone())
        }
        _ => Err(FixtureError::InvalidFragment {
            source_text: query_source.to_string(),
        }),
    }
}
