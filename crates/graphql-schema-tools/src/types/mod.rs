//! The live (already-built) schema object model.
//!
//! Every type and directive optionally remembers the syntax node it was
//! built from. Types built from introspection results carry none, and
//! recover one by printing their own signature (see the `Display` impls)
//! and reparsing it.

mod deprecation;
mod directive;
mod enum_type;
mod enum_value_definition;
mod field_definition;
mod input_object_type;
mod input_value_definition;
mod interface_type;
mod named_type;
mod object_or_interface_type_data;
mod object_type;
mod scalar_type;
pub(crate) mod sdl_writer;
mod union_type;

pub(crate) use deprecation::deprecation_reason_from_ast;
pub use deprecation::DEFAULT_DEPRECATION_REASON;
pub use directive::Directive;
pub use enum_type::EnumType;
pub use enum_value_definition::EnumValueDefinition;
pub use field_definition::FieldDefinition;
pub use input_object_type::InputObjectType;
pub use input_value_definition::InputValueDefinition;
pub use interface_type::InterfaceType;
pub use named_type::NamedType;
pub(crate) use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_type::ObjectType;
pub(crate) use scalar_type::specified_by_url_from_ast;
pub use scalar_type::ScalarType;
pub use union_type::UnionType;
