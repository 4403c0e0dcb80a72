use crate::SyntaxError;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ExtractError {
    #[error(
        "The `{type_name}.{field_name}` field has no syntax node and does not \
        appear in the printed signature of `{type_name}`"
    )]
    MissingSynthesizedField {
        type_name: String,
        field_name: String,
    },

    #[error("The printed signature of `{type_name}` failed to reparse: {error}")]
    Synthesis {
        type_name: String,
        error: SyntaxError,
    },

    #[error(
        "The printed signature of `{type_name}` did not reparse as exactly one \
        {type_kind} type definition"
    )]
    UnexpectedSynthesizedDefinition {
        type_name: String,
        type_kind: &'static str,
    },
}
