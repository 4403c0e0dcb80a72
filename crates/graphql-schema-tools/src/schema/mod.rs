mod builtins;
mod introspection;
mod schema;
pub(crate) mod schema_builder;
mod schema_reflection;

pub use builtins::is_builtin_directive_name;
pub use builtins::is_builtin_type_name;
pub use schema::Schema;
pub use schema_builder::RootOperation;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::SchemaBuildError;
pub use schema_reflection::SchemaConfig;
pub use schema_reflection::SchemaReflection;
