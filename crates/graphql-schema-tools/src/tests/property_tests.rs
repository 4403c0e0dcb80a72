use crate::minify;
use crate::normalize;
use crate::parse;
use crate::print;
use crate::NormalizeOptions;
use proptest::prelude::*;

const DEFINITIONS: [&str; 9] = [
    "directive @auth(requires: Role = ADMIN, code: Int) on OBJECT | FIELD_DEFINITION",
    "directive @awesome on OBJECT | FIELD_DEFINITION",
    "enum Role { USER ADMIN REVIEWER }",
    "scalar Date",
    "interface Node { id: ID! }",
    "type Zebra implements Node @awesome @auth(code: 52) { stripes: Int! id: ID! born: Date }",
    "type Human implements Node { name(short: Boolean, lang: String): String! id: ID! }",
    "union Animal = Zebra | Human",
    "extend type Query { zebras(first: Int after: String): [Zebra!]! animal(id: ID!): Animal }",
];

fn canonical(definitions: &[&str], separator: &str) -> String {
    normalize(&definitions.join(separator), &NormalizeOptions::default()).source
}

/// A schema whose every orderable child collection is listed in the order
/// given.
#[allow(clippy::too_many_arguments)]
fn schema_with_children(
    directive_args: &[&str],
    locations: &[&str],
    enum_values: &[&str],
    interfaces: &[&str],
    fields: &[&str],
    applied_directives: &[&str],
    applied_args: &[&str],
    field_args: &[&str],
    members: &[&str],
) -> String {
    let applied = applied_directives.iter()
        .map(|name| match *name {
            "auth" => format!("@auth({})", applied_args.join(", ")),
            other => format!("@{other}"),
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "directive @auth({}) on {}\n\
        directive @awesome on OBJECT\n\
        enum Role {{ {} }}\n\
        interface Node {{ id: ID! }}\n\
        interface Striped {{ stripes: Int! }}\n\
        type Zebra implements {} {} {{ {} }}\n\
        type Human implements Node {{ id: ID! name({}): String! }}\n\
        union Animal = {}\n",
        directive_args.join(", "),
        locations.join(" | "),
        enum_values.join(" "),
        interfaces.join(" & "),
        applied,
        fields.join(" "),
        field_args.join(", "),
        members.join(" | "),
    )
}

fn shuffled(items: &[&'static str]) -> impl Strategy<Value = Vec<&'static str>> {
    Just(items.to_vec()).prop_shuffle()
}

const DIRECTIVE_ARGS: [&str; 2] = ["requires: Role = ADMIN", "code: Int"];
const LOCATIONS: [&str; 3] = ["OBJECT", "FIELD_DEFINITION", "ENUM"];
const ENUM_VALUES: [&str; 3] = ["USER", "ADMIN", "REVIEWER"];
const INTERFACES: [&str; 2] = ["Striped", "Node"];
const FIELDS: [&str; 3] = ["stripes: Int!", "id: ID!", "born: String"];
const APPLIED_DIRECTIVES: [&str; 2] = ["awesome", "auth"];
const APPLIED_ARGS: [&str; 2] = ["code: 52", "requires: USER"];
const FIELD_ARGS: [&str; 2] = ["short: Boolean", "lang: String"];
const MEMBERS: [&str; 2] = ["Zebra", "Human"];

fn reference_schema() -> String {
    schema_with_children(
        &DIRECTIVE_ARGS,
        &LOCATIONS,
        &ENUM_VALUES,
        &INTERFACES,
        &FIELDS,
        &APPLIED_DIRECTIVES,
        &APPLIED_ARGS,
        &FIELD_ARGS,
        &MEMBERS,
    )
}

/// `~` marks whitespace that must stay non-empty; `^` marks whitespace that
/// may disappear.
const SPREADABLE_SCHEMA: &str =
    "type~Query^{^animals^(^first^:^Int^=^10^)^:^[^Animal^!^]^!^}~\
    enum~Role^{^ADMIN~USER^}~\
    union~Animal^=^Zebra^|^Human~\
    type~Zebra~implements~Node^@^awesome^{^id^:^ID^!^}~\
    type~Human~implements~Node^{^id^:^ID^!~name^:^String^}~\
    interface~Node^{^id^:^ID^!^}";

/// `(` and `)` are left alone: the minifier keeps whitespace between them.
const SPREADABLE_BROKEN_SCHEMA: &str = "type~Query^{^foo():^String^}";

fn spread(template: &str, whitespace: &[String]) -> String {
    let mut gaps = whitespace.iter();
    let mut out = String::with_capacity(template.len() * 2);
    for c in template.chars() {
        match c {
            '~' | '^' => {
                let gap = gaps.next().map(String::as_str).unwrap_or(" ");
                out.push_str(if c == '~' && gap.is_empty() { " " } else { gap });
            },
            c => out.push(c),
        }
    }
    out
}

fn gap_count(template: &str) -> usize {
    template.chars().filter(|c| matches!(c, '~' | '^')).count()
}

fn gaps(template: &str) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ \t\n]{0,3}", gap_count(template))
}

proptest! {
    #[test]
    fn definition_order_does_not_matter(
        shuffled in Just(DEFINITIONS.to_vec()).prop_shuffle(),
    ) {
        prop_assert_eq!(canonical(&shuffled, "\n"), canonical(&DEFINITIONS, "\n"));
    }

    #[test]
    fn whitespace_between_definitions_does_not_matter(
        separator in "[ \t\n]{1,4}",
    ) {
        prop_assert_eq!(canonical(&DEFINITIONS, &separator), canonical(&DEFINITIONS, " "));
    }

    #[test]
    fn normalized_output_is_a_fixed_point(
        shuffled in Just(DEFINITIONS.to_vec()).prop_shuffle(),
    ) {
        let once = canonical(&shuffled, "\n");
        let twice = normalize(&once, &NormalizeOptions::default()).source;
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn minified_output_parses_to_the_same_document(
        shuffled in Just(DEFINITIONS.to_vec()).prop_shuffle(),
    ) {
        let normalized = canonical(&shuffled, "\n");
        let minified = minify(&normalized);
        let from_normalized = parse(&normalized).expect("normalized output parses");
        let from_minified = parse(&minified).expect("minified output parses");
        prop_assert_eq!(print(&from_minified), print(&from_normalized));
    }

    #[test]
    fn child_order_does_not_matter(
        directive_args in shuffled(&DIRECTIVE_ARGS),
        locations in shuffled(&LOCATIONS),
        enum_values in shuffled(&ENUM_VALUES),
        interfaces in shuffled(&INTERFACES),
        fields in shuffled(&FIELDS),
        applied_directives in shuffled(&APPLIED_DIRECTIVES),
        applied_args in shuffled(&APPLIED_ARGS),
        field_args in shuffled(&FIELD_ARGS),
        members in shuffled(&MEMBERS),
    ) {
        let source = schema_with_children(
            &directive_args,
            &locations,
            &enum_values,
            &interfaces,
            &fields,
            &applied_directives,
            &applied_args,
            &field_args,
            &members,
        );
        let reordered = normalize(&source, &NormalizeOptions::default());
        let reference = normalize(&reference_schema(), &NormalizeOptions::default());

        prop_assert_eq!(reordered.error, None);
        prop_assert_eq!(reordered.source, reference.source);
    }

    #[test]
    fn whitespace_inside_definitions_does_not_matter(
        whitespace in gaps(SPREADABLE_SCHEMA),
    ) {
        let spread_out = normalize(&spread(SPREADABLE_SCHEMA, &whitespace), &NormalizeOptions::default());
        let compact = normalize(&spread(SPREADABLE_SCHEMA, &[]), &NormalizeOptions::default());

        prop_assert_eq!(spread_out.error, None);
        prop_assert_eq!(spread_out.source, compact.source);
    }

    #[test]
    fn syntax_error_messages_do_not_depend_on_formatting(
        whitespace in gaps(SPREADABLE_BROKEN_SCHEMA),
    ) {
        let spread_out = normalize(&spread(SPREADABLE_BROKEN_SCHEMA, &whitespace), &NormalizeOptions::default());
        let message = spread_out.error.map(|err| err.message().to_string());

        prop_assert!(
            message.as_deref().is_some_and(|m| m.ends_with(" Found near: `Query { foo(): String`.")),
            "unexpected message: {:?}",
            message,
        );
        let compact = normalize(&spread(SPREADABLE_BROKEN_SCHEMA, &[]), &NormalizeOptions::default());
        prop_assert_eq!(message, compact.error.map(|err| err.message().to_string()));
    }
}
