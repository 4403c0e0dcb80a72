use crate::schema::introspection;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaConfig;
use crate::schema::SchemaReflection;
use crate::types::Directive;
use crate::types::NamedType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// An already-built GraphQL schema.
///
/// Always contains the built-in scalars, the built-in directives and the
/// introspection types alongside whatever was loaded into it.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directives: IndexMap<String, Directive>,
    pub(crate) mutation_type_name: Option<String>,
    pub(crate) query_type_name: Option<String>,
    pub(crate) subscription_type_name: Option<String>,
    pub(crate) types: IndexMap<String, NamedType>,
}

impl Schema {
    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Builds a schema from SDL text. Every definition keeps the syntax
    /// node it was built from.
    pub fn from_sdl(sdl: &str) -> Result<Self> {
        SchemaBuilder::new().load_str(sdl)?.build()
    }

    /// Builds a schema from a JSON introspection result, with or without
    /// the `{"data": ...}` envelope. Nothing in the resulting schema has a
    /// syntax node.
    pub fn from_introspection_json(json: &str) -> Result<Self> {
        introspection::schema_from_json(json)
    }

    /// All directives in load order, built-ins first.
    pub fn directives(&self) -> impl Iterator<Item = &Directive> {
        self.directives.values()
    }

    pub fn get_directive(&self, name: &str) -> Option<&Directive> {
        self.directives.get(name)
    }

    pub fn get_type(&self, name: &str) -> Option<&NamedType> {
        self.types.get(name)
    }

    /// The name of the Mutation root operation type, if there is one.
    ///
    /// An explicit `schema { mutation: ... }` wins over an object type that
    /// happens to be named `Mutation`.
    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type_name.as_deref()
    }

    /// The name of the Query root operation type, if there is one.
    pub fn query_type_name(&self) -> Option<&str> {
        self.query_type_name.as_deref()
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type_name.as_deref()
    }

    /// All named types in load order, built-ins first.
    pub fn types(&self) -> impl Iterator<Item = &NamedType> {
        self.types.values()
    }
}

impl SchemaReflection for Schema {
    fn to_config(&self) -> SchemaConfig<'_> {
        SchemaConfig {
            directives: self.directives.values().collect(),
            types: self.types.values().collect(),
        }
    }
}
