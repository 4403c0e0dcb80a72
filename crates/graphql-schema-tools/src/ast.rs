//! `'static`, `String`-backed aliases for the `graphql_parser` AST.
//!
//! Every node handed across this crate's public API is one of these types,
//! so callers can build, inspect and print nodes with `graphql_parser`
//! directly.

pub mod query {
    pub use graphql_parser::query::ParseError;

    pub type Definition = graphql_parser::query::Definition<'static, String>;
    pub type Directive = graphql_parser::query::Directive<'static, String>;
    pub type Document = graphql_parser::query::Document<'static, String>;
    pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
    pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
    pub type Value = graphql_parser::query::Value<'static, String>;
}

pub mod schema {
    pub use graphql_parser::schema::DirectiveLocation;
    pub use graphql_parser::schema::ParseError;

    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type DirectiveDefinition = graphql_parser::schema::DirectiveDefinition<'static, String>;
    pub type Document = graphql_parser::schema::Document<'static, String>;
    pub type EnumType = graphql_parser::schema::EnumType<'static, String>;
    pub type EnumTypeExtension = graphql_parser::schema::EnumTypeExtension<'static, String>;
    pub type EnumValue = graphql_parser::schema::EnumValue<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type InputObjectType = graphql_parser::schema::InputObjectType<'static, String>;
    pub type InputObjectTypeExtension = graphql_parser::schema::InputObjectTypeExtension<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type InterfaceType = graphql_parser::schema::InterfaceType<'static, String>;
    pub type InterfaceTypeExtension = graphql_parser::schema::InterfaceTypeExtension<'static, String>;
    pub type ObjectType = graphql_parser::schema::ObjectType<'static, String>;
    pub type ObjectTypeExtension = graphql_parser::schema::ObjectTypeExtension<'static, String>;
    pub type ScalarType = graphql_parser::schema::ScalarType<'static, String>;
    pub type ScalarTypeExtension = graphql_parser::schema::ScalarTypeExtension<'static, String>;
    pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
    pub type Type = graphql_parser::schema::Type<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
    pub type UnionType = graphql_parser::schema::UnionType<'static, String>;
    pub type UnionTypeExtension = graphql_parser::schema::UnionTypeExtension<'static, String>;
    pub type Value = graphql_parser::schema::Value<'static, String>;
}

/// An AST node that carries a name.
pub trait NamedNode {
    fn node_name(&self) -> &str;
}

impl NamedNode for schema::DirectiveDefinition {
    fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

impl NamedNode for schema::TypeDefinition {
    fn node_name(&self) -> &str {
        use schema::TypeDefinition;
        match self {
            TypeDefinition::Enum(def) => def.name.as_str(),
            TypeDefinition::InputObject(def) => def.name.as_str(),
            TypeDefinition::Interface(def) => def.name.as_str(),
            TypeDefinition::Object(def) => def.name.as_str(),
            TypeDefinition::Scalar(def) => def.name.as_str(),
            TypeDefinition::Union(def) => def.name.as_str(),
        }
    }
}

impl NamedNode for schema::TypeExtension {
    fn node_name(&self) -> &str {
        use schema::TypeExtension;
        match self {
            TypeExtension::Enum(ext) => ext.name.as_str(),
            TypeExtension::InputObject(ext) => ext.name.as_str(),
            TypeExtension::Interface(ext) => ext.name.as_str(),
            TypeExtension::Object(ext) => ext.name.as_str(),
            TypeExtension::Scalar(ext) => ext.name.as_str(),
            TypeExtension::Union(ext) => ext.name.as_str(),
        }
    }
}

impl NamedNode for schema::Field {
    fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

impl NamedNode for schema::InputValue {
    fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

impl NamedNode for schema::EnumValue {
    fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

impl NamedNode for query::Directive {
    fn node_name(&self) -> &str {
        self.name.as_str()
    }
}
