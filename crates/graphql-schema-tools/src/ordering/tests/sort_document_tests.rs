use crate::ast;
use crate::parse;
use crate::print;
use crate::sort_document;
use crate::Definition;
use crate::DefinitionKind;
use crate::Document;
use crate::SyntaxError;

type Result<T> = std::result::Result<T, SyntaxError>;

fn sorted(source: &str) -> Result<Vec<Definition>> {
    Ok(sort_document(parse(source)?.definitions))
}

fn names(definitions: &[Definition]) -> Vec<Option<&str>> {
    definitions.iter().map(Definition::name).collect()
}

fn only_type_def(definitions: &[Definition]) -> &ast::schema::TypeDefinition {
    match definitions {
        [Definition::TypeSystem(ast::schema::Definition::TypeDefinition(def))] => def,
        other => panic!("expected a single type definition, found {other:?}"),
    }
}

mod top_level {
    use super::*;

    #[test]
    fn orders_same_kind_definitions_by_name() -> Result<()> {
        let definitions = sorted("type B { id: ID! } type A { name: String! }")?;
        assert_eq!(names(&definitions), vec![Some("A"), Some("B")]);
        Ok(())
    }

    #[test]
    fn groups_definitions_by_kind_before_name() -> Result<()> {
        let definitions = sorted("
            extend type A { extra: Int }
            input AInput { a: Int }
            union AUnion = A
            type A { a: Int }
            interface AInterface { a: Int }
            enum AEnum { ONE }
            scalar AScalar
            directive @z on FIELD_DEFINITION
            schema { query: A }
        ")?;

        let kinds: Vec<DefinitionKind> =
            definitions.iter().map(Definition::kind).collect();
        assert_eq!(kinds, vec![
            DefinitionKind::DirectiveDefinition,
            DefinitionKind::ScalarTypeDefinition,
            DefinitionKind::EnumTypeDefinition,
            DefinitionKind::InterfaceTypeDefinition,
            DefinitionKind::ObjectTypeDefinition,
            DefinitionKind::UnionTypeDefinition,
            DefinitionKind::InputObjectTypeDefinition,
            DefinitionKind::ObjectTypeExtension,
            DefinitionKind::SchemaDefinition,
        ]);
        Ok(())
    }

    #[test]
    fn operations_and_fragments_keep_their_input_order() -> Result<()> {
        let definitions = sorted("
            fragment Z on Query { a }
            query B { a }
            fragment Y on Query { a }
            query A { a }
        ")?;

        let operation_names: Vec<Option<&str>> = definitions.iter()
            .map(|def| match def {
                Definition::Executable(ast::query::Definition::Operation(
                    ast::query::OperationDefinition::Query(query),
                )) => query.name.as_deref(),
                Definition::Executable(ast::query::Definition::Fragment(fragment)) =>
                    Some(fragment.name.as_str()),
                other => panic!("unexpected definition: {other:?}"),
            })
            .collect();
        assert_eq!(
            operation_names,
            vec![Some("B"), Some("A"), Some("Z"), Some("Y")],
        );
        Ok(())
    }

    #[test]
    fn sorting_sorted_definitions_changes_nothing() -> Result<()> {
        let once = sorted("
            type Zebra implements Striped & Mammal @b @a { z: Int a(y: Int x: Int): Int }
            directive @b on OBJECT | ENUM
            enum Role { USER ADMIN }
        ")?;
        let twice = sort_document(once.clone());
        assert_eq!(once, twice);
        Ok(())
    }
}

mod children {
    use super::*;

    #[test]
    fn orders_fields_arguments_and_interfaces() -> Result<()> {
        let definitions = sorted(
            "type Zebra implements Striped & Mammal { z: Int a(y: Int x: Int): Int }",
        )?;

        let ast::schema::TypeDefinition::Object(object) = only_type_def(&definitions) else {
            panic!("expected an object type");
        };
        assert_eq!(object.implements_interfaces, vec!["Mammal", "Striped"]);

        let field_names: Vec<&str> =
            object.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(field_names, vec!["a", "z"]);

        let argument_names: Vec<&str> =
            object.fields[0].arguments.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(argument_names, vec!["x", "y"]);
        Ok(())
    }

    #[test]
    fn orders_applied_directives_and_their_arguments() -> Result<()> {
        let definitions = sorted(
            "type Query @auth(requires: USER, code: 99) @awesome { a: Int }",
        )?;

        let ast::schema::TypeDefinition::Object(object) = only_type_def(&definitions) else {
            panic!("expected an object type");
        };
        let directive_names: Vec<&str> =
            object.directives.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(directive_names, vec!["auth", "awesome"]);

        let argument_names: Vec<&str> = object.directives[0].arguments.iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(argument_names, vec!["code", "requires"]);
        Ok(())
    }

    #[test]
    fn orders_repeated_directives_by_their_arguments() -> Result<()> {
        let forward = sorted(r#"type T @tag(name: "b") @tag(name: "a") { id: ID }"#)?;
        let backward = sorted(r#"type T @tag(name: "a") @tag(name: "b") { id: ID }"#)?;

        let printed = print(&Document::new(forward));
        assert_eq!(printed, print(&Document::new(backward)));
        assert!(
            printed.contains(r#"@tag(name: "a") @tag(name: "b")"#),
            "unexpected output: {printed}",
        );
        Ok(())
    }

    #[test]
    fn orders_enum_values_and_union_members() -> Result<()> {
        let definitions = sorted("enum Role { USER ADMIN } union Friend = Zebra | Human")?;

        let values: Vec<&str> = match &definitions[0] {
            Definition::TypeSystem(ast::schema::Definition::TypeDefinition(
                ast::schema::TypeDefinition::Enum(def),
            )) => def.values.iter().map(|v| v.name.as_str()).collect(),
            other => panic!("expected an enum, found {other:?}"),
        };
        assert_eq!(values, vec!["ADMIN", "USER"]);

        let members: Vec<&str> = match &definitions[1] {
            Definition::TypeSystem(ast::schema::Definition::TypeDefinition(
                ast::schema::TypeDefinition::Union(def),
            )) => def.types.iter().map(String::as_str).collect(),
            other => panic!("expected a union, found {other:?}"),
        };
        assert_eq!(members, vec!["Human", "Zebra"]);
        Ok(())
    }

    #[test]
    fn orders_directive_locations_by_name() -> Result<()> {
        let definitions = sorted(
            "directive @auth(requires: Role, code: Int) on OBJECT | FIELD_DEFINITION | ENUM",
        )?;

        let Definition::TypeSystem(ast::schema::Definition::DirectiveDefinition(directive)) =
            &definitions[0]
        else {
            panic!("expected a directive definition");
        };
        let locations: Vec<&str> =
            directive.locations.iter().map(|l| l.as_str()).collect();
        assert_eq!(locations, vec!["ENUM", "FIELD_DEFINITION", "OBJECT"]);

        let argument_names: Vec<&str> =
            directive.arguments.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(argument_names, vec!["code", "requires"]);
        Ok(())
    }

    #[test]
    fn leaves_selection_sets_alone() -> Result<()> {
        let source = "query Friends { zebra { stripes name } address { city } }";
        let parsed = parse(source)?;
        let printed_before = print(&parsed);
        let printed_after = print(&Document::new(sort_document(parsed.definitions)));
        assert_eq!(printed_before, printed_after);
        Ok(())
    }
}
