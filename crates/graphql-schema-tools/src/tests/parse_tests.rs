use crate::parse;
use crate::print;
use crate::DefinitionKind;
use crate::SourceLocation;
use crate::SyntaxError;

type Result<T> = std::result::Result<T, SyntaxError>;

mod documents {
    use super::*;

    #[test]
    fn type_system_document() -> Result<()> {
        let document = parse("scalar Date\ntype Query { now: Date }")?;

        let kinds: Vec<_> = document.definitions.iter().map(|def| def.kind()).collect();
        assert_eq!(kinds, vec![
            DefinitionKind::ScalarTypeDefinition,
            DefinitionKind::ObjectTypeDefinition,
        ]);
        assert_eq!(document.definitions[1].name(), Some("Query"));
        Ok(())
    }

    #[test]
    fn executable_document() -> Result<()> {
        let document = parse("query Q { a } fragment F on T { b }")?;

        let kinds: Vec<_> = document.definitions.iter().map(|def| def.kind()).collect();
        assert_eq!(kinds, vec![
            DefinitionKind::OperationDefinition,
            DefinitionKind::FragmentDefinition,
        ]);
        assert_eq!(document.definitions[0].name(), None);
        Ok(())
    }

    #[test]
    fn printed_documents_reparse() -> Result<()> {
        let document = parse("extend type Query { a(x: Int = 1): [String!] }")?;
        let reparsed = parse(&print(&document))?;
        assert_eq!(print(&reparsed), print(&document));
        Ok(())
    }
}

mod errors {
    use super::*;

    #[test]
    fn reports_the_error_furthest_into_the_text() {
        let error = parse("type Query {\n  foo(): String\n}").unwrap_err();

        assert_eq!(error.locations(), &[SourceLocation::new(2, 7)]);
        assert_eq!(error.body(), Some("type Query {\n  foo(): String\n}"));
    }

    #[test]
    fn messages_drop_token_kind_annotations() {
        let error = parse("type Query {\n  foo(): String\n}").unwrap_err();

        assert!(error.message().starts_with("Syntax Error: "));
        assert!(!error.message().contains("[Punctuator]"));
    }

    #[test]
    fn errors_in_mixed_documents_keep_their_source_positions() {
        let error = parse("type Query { a: Int }\nquery {\n  a(: 1)\n}").unwrap_err();

        assert_eq!(error.locations(), &[SourceLocation::new(3, 5)]);
    }

    #[test]
    fn empty_schema_extension_is_rejected() {
        let error = parse("type Q { a: Int }\nextend schema\nquery { a }").unwrap_err();

        assert_eq!(error.locations(), &[SourceLocation::new(2, 1)]);
    }
}

mod mixed_documents {
    use super::*;

    fn kinds(source: &str) -> Result<Vec<DefinitionKind>> {
        Ok(parse(source)?.definitions.iter().map(|def| def.kind()).collect())
    }

    #[test]
    fn type_system_and_executable_definitions_parse_together() -> Result<()> {
        assert_eq!(kinds("type Query { a: Int } query { a }")?, vec![
            DefinitionKind::ObjectTypeDefinition,
            DefinitionKind::OperationDefinition,
        ]);
        Ok(())
    }

    #[test]
    fn definitions_keep_their_source_order() -> Result<()> {
        let source = r#"
            fragment F on Query { a }
            """A type"""
            type Query { a: Int }
            { ...F }
            scalar Date
        "#;
        assert_eq!(kinds(source)?, vec![
            DefinitionKind::FragmentDefinition,
            DefinitionKind::ObjectTypeDefinition,
            DefinitionKind::OperationDefinition,
            DefinitionKind::ScalarTypeDefinition,
        ]);
        Ok(())
    }

    #[test]
    fn schema_extensions_parse() -> Result<()> {
        let document = parse("schema { query: Q } extend schema @foo type Q { a: Int }")?;

        assert_eq!(
            document.definitions.iter().map(|def| def.kind()).collect::<Vec<_>>(),
            vec![
                DefinitionKind::SchemaDefinition,
                DefinitionKind::SchemaExtension,
                DefinitionKind::ObjectTypeDefinition,
            ],
        );
        let crate::Definition::SchemaExtension(ext) = &document.definitions[1] else {
            panic!("expected a schema extension");
        };
        assert_eq!(ext.directives[0].name, "foo");
        assert_eq!(ext.query, None);
        Ok(())
    }

    #[test]
    fn schema_extensions_with_operation_types_print_and_reparse() -> Result<()> {
        let document = parse(
            "extend schema @a { mutation: M }\nextend schema @b\ntype M { a: Int }",
        )?;
        let printed = print(&document);

        assert!(printed.starts_with("extend schema @a {\n  mutation: M\n}\n"), "{printed}");
        assert!(printed.contains("\nextend schema @b\n"), "{printed}");
        assert_eq!(print(&parse(&printed)?), printed);
        Ok(())
    }
}
