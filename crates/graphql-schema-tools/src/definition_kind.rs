/// The kind of a top-level definition found in a GraphQL document.
///
/// Used to group definitions when ordering a document. Extension kinds are
/// distinct from the definitions they extend so that every extension sorts
/// after every base definition.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DefinitionKind {
    /// `directive @name on ...`
    DirectiveDefinition,

    /// `scalar Name`
    ScalarTypeDefinition,

    /// `enum Name { ... }`
    EnumTypeDefinition,

    /// `interface Name { ... }`
    InterfaceTypeDefinition,

    /// `type Name { ... }`
    ObjectTypeDefinition,

    /// `union Name = ...`
    UnionTypeDefinition,

    /// `input Name { ... }`
    InputObjectTypeDefinition,

    /// `extend scalar Name ...`
    ScalarTypeExtension,

    /// `extend enum Name ...`
    EnumTypeExtension,

    /// `extend interface Name ...`
    InterfaceTypeExtension,

    /// `extend type Name ...`
    ObjectTypeExtension,

    /// `extend union Name ...`
    UnionTypeExtension,

    /// `extend input Name ...`
    InputObjectTypeExtension,

    /// `schema { ... }`
    SchemaDefinition,

    /// `extend schema ...`
    SchemaExtension,

    /// `query`, `mutation`, `subscription`, or an anonymous `{ ... }`
    OperationDefinition,

    /// `fragment Name on Type { ... }`
    FragmentDefinition,
}

impl DefinitionKind {
    /// Every kind, in canonical document order.
    pub const ALL: [DefinitionKind; 17] = [
        DefinitionKind::DirectiveDefinition,
        DefinitionKind::ScalarTypeDefinition,
        DefinitionKind::EnumTypeDefinition,
        DefinitionKind::InterfaceTypeDefinition,
        DefinitionKind::ObjectTypeDefinition,
        DefinitionKind::UnionTypeDefinition,
        DefinitionKind::InputObjectTypeDefinition,
        DefinitionKind::ScalarTypeExtension,
        DefinitionKind::EnumTypeExtension,
        DefinitionKind::InterfaceTypeExtension,
        DefinitionKind::ObjectTypeExtension,
        DefinitionKind::UnionTypeExtension,
        DefinitionKind::InputObjectTypeExtension,
        DefinitionKind::SchemaDefinition,
        DefinitionKind::SchemaExtension,
        DefinitionKind::OperationDefinition,
        DefinitionKind::FragmentDefinition,
    ];

    /// Whether definitions of this kind are ordered by name within their
    /// kind group.
    ///
    /// Schema definitions and extensions, operations and fragments are
    /// ordered by kind only and otherwise keep their relative input order.
    pub fn is_ordered_by_name(&self) -> bool {
        !matches!(
            self,
            Self::SchemaDefinition
                | Self::SchemaExtension
                | Self::OperationDefinition
                | Self::FragmentDefinition
        )
    }

    /// Whether this kind belongs to the executable (operation) family rather
    /// than the type-system family.
    pub fn is_executable(&self) -> bool {
        matches!(self, Self::OperationDefinition | Self::FragmentDefinition)
    }
}
