use crate::parse;
use crate::Definition;
use crate::DefinitionKind;
use crate::DefinitionSorter;
use crate::KindPriority;
use crate::SyntaxError;
use std::cmp::Ordering;

#[test]
fn standard_ranks_every_kind_in_canonical_order() {
    let ranked: Vec<DefinitionKind> = KindPriority::standard().ranked_kinds().collect();
    assert_eq!(ranked, DefinitionKind::ALL.to_vec());
    assert_eq!(KindPriority::default(), *KindPriority::standard());
}

#[test]
fn repeated_kinds_keep_their_first_rank() {
    let priority = KindPriority::from_ordered_kinds([
        DefinitionKind::ObjectTypeDefinition,
        DefinitionKind::ScalarTypeDefinition,
        DefinitionKind::ObjectTypeDefinition,
    ]);
    assert_eq!(priority.rank(DefinitionKind::ObjectTypeDefinition), Some(0));
    assert_eq!(priority.rank(DefinitionKind::ScalarTypeDefinition), Some(1));
    assert_eq!(priority.rank(DefinitionKind::EnumTypeDefinition), None);
}

#[test]
fn unranked_kinds_sort_last_in_declaration_order() -> Result<(), SyntaxError> {
    let priority = KindPriority::from_ordered_kinds([
        DefinitionKind::ObjectTypeDefinition,
    ]);
    let document = parse("scalar A enum B { X } type C { c: Int }")?;
    let definitions = DefinitionSorter::new(&priority).sort(document.definitions);

    let names: Vec<Option<&str>> = definitions.iter().map(Definition::name).collect();
    assert_eq!(names, vec![Some("C"), Some("A"), Some("B")]);
    Ok(())
}

#[test]
fn unnamed_kinds_compare_equal_within_their_group() -> Result<(), SyntaxError> {
    let document = parse("query { a } query { b }")?;
    let sorter = DefinitionSorter::new(KindPriority::standard());
    assert_eq!(
        sorter.compare(&document.definitions[0], &document.definitions[1]),
        Ordering::Equal,
    );
    Ok(())
}

#[test]
fn only_type_system_kinds_are_ordered_by_name() {
    let unnamed: Vec<DefinitionKind> = DefinitionKind::ALL.into_iter()
        .filter(|kind| !kind.is_ordered_by_name())
        .collect();
    assert_eq!(unnamed, vec![
        DefinitionKind::SchemaDefinition,
        DefinitionKind::SchemaExtension,
        DefinitionKind::OperationDefinition,
        DefinitionKind::FragmentDefinition,
    ]);

    let executable: Vec<DefinitionKind> = DefinitionKind::ALL.into_iter()
        .filter(DefinitionKind::is_executable)
        .collect();
    assert_eq!(executable, vec![
        DefinitionKind::OperationDefinition,
        DefinitionKind::FragmentDefinition,
    ]);
}
