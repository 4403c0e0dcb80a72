use crate::minify;
use crate::normalize;
use crate::normalize_bytes;
use crate::tests::utils::EXPECTED;
use crate::tests::utils::SOURCE_ONE;
use crate::tests::utils::SOURCE_TWO;
use crate::DefinitionKind;
use crate::InputError;
use crate::KindPriority;
use crate::NormalizeOptions;

mod canonical_form {
    use super::*;

    /// Groups top-level definitions by kind and alphabetizes them along with
    /// their fields, directives, arguments, values, member types, interfaces
    /// and locations.
    #[test]
    fn stylistically_different_sources_normalize_identically() {
        let one = normalize(SOURCE_ONE, &NormalizeOptions::default());
        let two = normalize(SOURCE_TWO, &NormalizeOptions::default());

        assert_eq!(one.error, None);
        assert_eq!(two.error, None);
        assert_eq!(one.source, two.source);
        assert_eq!(one.source, EXPECTED);
    }

    #[test]
    fn minified_output_is_the_minified_canonical_form() {
        let one = normalize(SOURCE_ONE, &NormalizeOptions::minified());
        let two = normalize(SOURCE_TWO, &NormalizeOptions::minified());

        assert!(one.is_ok());
        assert!(two.is_ok());
        assert_eq!(one.source, two.source);
        assert_eq!(one.source, minify(EXPECTED));
    }

    #[test]
    fn orders_definitions_of_one_kind_by_name() {
        let result = normalize(
            "type B{id:ID!} type A{name:String!}",
            &NormalizeOptions::default(),
        );

        assert_eq!(
            result.source,
            "type A {\n  name: String!\n}\n\ntype B {\n  id: ID!\n}\n",
        );
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let once = normalize(SOURCE_ONE, &NormalizeOptions::default()).source;
        let twice = normalize(&once, &NormalizeOptions::default()).source;
        assert_eq!(once, twice);
    }

    #[test]
    fn operations_keep_their_relative_order() {
        let result = normalize(
            "query Zed { a } fragment F on Query { b } query Alpha { c }",
            &NormalizeOptions::default(),
        );

        assert!(result.is_ok());
        let zed = result.source.find("query Zed").unwrap();
        let alpha = result.source.find("query Alpha").unwrap();
        let fragment = result.source.find("fragment F").unwrap();
        assert!(zed < alpha);
        assert!(alpha < fragment);
    }

    #[test]
    fn custom_kind_priority_sorts_unranked_kinds_last() {
        let options = NormalizeOptions {
            kind_priority: KindPriority::from_ordered_kinds([
                DefinitionKind::ObjectTypeDefinition,
            ]),
            ..NormalizeOptions::default()
        };
        let result = normalize("scalar Date type Query { a: Int }", &options);

        assert_eq!(result.source, "type Query {\n  a: Int\n}\n\nscalar Date\n");
    }
}

mod syntax_errors {
    use super::*;

    #[test]
    fn error_is_reported_with_the_original_source() {
        let source = "
      type Query {
        foo(): String
      }";
        let result = normalize(source, &NormalizeOptions::default());

        assert_eq!(result.source, source);
        let error = result.error.expect("source has a syntax error");
        assert!(error.message().starts_with("Syntax Error"));
        assert!(
            error.message().ends_with(" Found near: `Query { foo(): String`."),
            "unexpected message: {}",
            error.message(),
        );
    }

    #[test]
    fn single_line_error_is_reported_like_the_multi_line_one() {
        let result = normalize("type Query { foo(): String }", &NormalizeOptions::default());

        let error = result.error.expect("source has a syntax error");
        assert!(
            error.message().ends_with(" Found near: `Query { foo(): String`."),
            "unexpected message: {}",
            error.message(),
        );
    }

    #[test]
    fn into_result_surfaces_the_error() {
        let result = normalize("type {", &NormalizeOptions::default());
        assert!(result.into_result().is_err());
    }
}

mod mixed_documents {
    use super::*;

    #[test]
    fn type_system_definitions_sort_before_operations() {
        let result = normalize("query { a } type Query { a: Int }", &NormalizeOptions::default());

        assert_eq!(result.error, None);
        assert_eq!(result.source, "type Query {\n  a: Int\n}\n\nquery {\n  a\n}\n");
    }

    #[test]
    fn schema_extensions_follow_the_schema_definition() {
        let result = normalize(
            "extend schema @b @a\ntype Q { a: Int }\nschema { query: Q }",
            &NormalizeOptions::default(),
        );

        assert_eq!(result.error, None);
        assert_eq!(
            result.source,
            "type Q {\n  a: Int\n}\n\nschema {\n  query: Q\n}\n\nextend schema @a @b\n",
        );
    }
}

mod input_errors {
    use super::*;

    #[test]
    fn non_utf8_bytes_are_rejected_before_parsing() {
        let result = normalize_bytes(&[0x74, 0x79, 0xff, 0xfe], &NormalizeOptions::default());
        assert!(matches!(result, Err(InputError::NotText(_))));
    }

    #[test]
    fn utf8_bytes_are_normalized() -> Result<(), InputError> {
        let result = normalize_bytes(b"scalar B scalar A", &NormalizeOptions::default())?;
        assert_eq!(result.source, "scalar A\n\nscalar B\n");
        Ok(())
    }
}
