use crate::ast;
use crate::ast::NamedNode;
use crate::DefinitionKind;

/// A parsed or synthesized GraphQL document: an ordered list of top-level
/// [`Definition`]s drawn from either the type-system or the executable
/// grammar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

impl Document {
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self { definitions }
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }
}

impl From<ast::schema::Document> for Document {
    fn from(doc: ast::schema::Document) -> Self {
        Self::new(
            doc.definitions.into_iter().map(Definition::TypeSystem).collect(),
        )
    }
}

impl From<ast::query::Document> for Document {
    fn from(doc: ast::query::Document) -> Self {
        Self::new(
            doc.definitions.into_iter().map(Definition::Executable).collect(),
        )
    }
}

/// One top-level declaration in a [`Document`].
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    TypeSystem(ast::schema::Definition),
    Executable(ast::query::Definition),

    /// `extend schema`. `graphql_parser` has no node for schema extensions,
    /// so the extension is held as the schema definition it would add:
    /// directives plus any root operation types.
    SchemaExtension(ast::schema::SchemaDefinition),
}

impl Definition {
    pub fn kind(&self) -> DefinitionKind {
        use ast::schema::Definition as SchemaDef;
        use ast::schema::TypeDefinition;
        use ast::schema::TypeExtension;
        match self {
            Self::TypeSystem(SchemaDef::DirectiveDefinition(_)) =>
                DefinitionKind::DirectiveDefinition,
            Self::TypeSystem(SchemaDef::SchemaDefinition(_)) =>
                DefinitionKind::SchemaDefinition,
            Self::TypeSystem(SchemaDef::TypeDefinition(def)) => match def {
                TypeDefinition::Enum(_) => DefinitionKind::EnumTypeDefinition,
                TypeDefinition::InputObject(_) => DefinitionKind::InputObjectTypeDefinition,
                TypeDefinition::Interface(_) => DefinitionKind::InterfaceTypeDefinition,
                TypeDefinition::Object(_) => DefinitionKind::ObjectTypeDefinition,
                TypeDefinition::Scalar(_) => DefinitionKind::ScalarTypeDefinition,
                TypeDefinition::Union(_) => DefinitionKind::UnionTypeDefinition,
            },
            Self::TypeSystem(SchemaDef::TypeExtension(ext)) => match ext {
                TypeExtension::Enum(_) => DefinitionKind::EnumTypeExtension,
                TypeExtension::InputObject(_) => DefinitionKind::InputObjectTypeExtension,
                TypeExtension::Interface(_) => DefinitionKind::InterfaceTypeExtension,
                TypeExtension::Object(_) => DefinitionKind::ObjectTypeExtension,
                TypeExtension::Scalar(_) => DefinitionKind::ScalarTypeExtension,
                TypeExtension::Union(_) => DefinitionKind::UnionTypeExtension,
            },
            Self::Executable(ast::query::Definition::Operation(_)) =>
                DefinitionKind::OperationDefinition,
            Self::Executable(ast::query::Definition::Fragment(_)) =>
                DefinitionKind::FragmentDefinition,
            Self::SchemaExtension(_) => DefinitionKind::SchemaExtension,
        }
    }

    /// The name this definition is ordered by, if its kind is ordered by
    /// name at all (see [`DefinitionKind::is_ordered_by_name()`]).
    pub fn name(&self) -> Option<&str> {
        use ast::schema::Definition as SchemaDef;
        match self {
            Self::TypeSystem(SchemaDef::DirectiveDefinition(def)) =>
                Some(def.node_name()),
            Self::TypeSystem(SchemaDef::TypeDefinition(def)) =>
                Some(def.node_name()),
            Self::TypeSystem(SchemaDef::TypeExtension(ext)) =>
                Some(ext.node_name()),
            Self::TypeSystem(SchemaDef::SchemaDefinition(_))
            | Self::Executable(_)
            | Self::SchemaExtension(_) => None,
        }
    }
}

impl From<ast::schema::TypeDefinition> for Definition {
    fn from(def: ast::schema::TypeDefinition) -> Self {
        Self::TypeSystem(ast::schema::Definition::TypeDefinition(def))
    }
}

impl From<ast::schema::DirectiveDefinition> for Definition {
    fn from(def: ast::schema::DirectiveDefinition) -> Self {
        Self::TypeSystem(ast::schema::Definition::DirectiveDefinition(def))
    }
}
