use crate::types::sdl_writer;
use crate::types::FieldDefinition;
use indexmap::IndexMap;
use std::fmt;

/// State shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, FieldDefinition>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) name: String,
}

impl ObjectOrInterfaceTypeData {
    pub(crate) fn fmt_signature(
        &self,
        f: &mut fmt::Formatter<'_>,
        keyword: &str,
    ) -> fmt::Result {
        sdl_writer::write_description(f, self.description.as_deref(), "")?;
        write!(f, "{keyword} {}", self.name)?;
        if !self.interfaces.is_empty() {
            write!(f, " implements {}", self.interfaces.join(" & "))?;
        }
        if self.fields.is_empty() {
            return writeln!(f);
        }
        writeln!(f, " {{")?;
        for field in self.fields.values() {
            write!(f, "{field}")?;
        }
        writeln!(f, "}}")
    }
}
