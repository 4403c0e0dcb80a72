use crate::ast;
use crate::ast::NamedNode;
use crate::types::sdl_writer::value_to_string;
use crate::Definition;

/// Recursively puts a node's orderable child collections into canonical
/// order.
///
/// Each node kind names the collections it owns explicitly; adding a new
/// node kind means adding an impl here.
pub(crate) trait SortChildren {
    fn sort_children(&mut self);
}

fn sort_nodes_by_name<N: NamedNode + SortChildren>(nodes: &mut [N]) {
    for node in nodes.iter_mut() {
        node.sort_children();
    }
    nodes.sort_by(|a, b| a.node_name().cmp(b.node_name()));
}

/// Orders directives by name. Repeated directives with the same name are
/// ordered by their printed arguments.
fn sort_directives(directives: &mut [ast::query::Directive]) {
    for directive in directives.iter_mut() {
        directive.sort_children();
    }
    directives.sort_by_cached_key(|directive| {
        (directive.name.clone(), printed_arguments(directive))
    });
}

fn printed_arguments(directive: &ast::query::Directive) -> String {
    directive.arguments.iter()
        .map(|(name, value)| format!("{name}: {}", value_to_string(value)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn sort_names(names: &mut [String]) {
    names.sort();
}

fn sort_locations(locations: &mut [ast::schema::DirectiveLocation]) {
    locations.sort_by(|a, b| a.as_str().cmp(b.as_str()));
}

impl SortChildren for Definition {
    fn sort_children(&mut self) {
        match self {
            Self::TypeSystem(def) => def.sort_children(),
            Self::Executable(def) => def.sort_children(),
            Self::SchemaExtension(ext) => ext.sort_children(),
        }
    }
}

impl SortChildren for ast::schema::Definition {
    fn sort_children(&mut self) {
        use ast::schema::Definition;
        match self {
            Definition::DirectiveDefinition(def) => def.sort_children(),
            Definition::SchemaDefinition(def) => def.sort_children(),
            Definition::TypeDefinition(def) => def.sort_children(),
            Definition::TypeExtension(ext) => ext.sort_children(),
        }
    }
}

impl SortChildren for ast::schema::SchemaDefinition {
    fn sort_children(&mut self) {
        sort_directives(&mut self.directives);
    }
}

impl SortChildren for ast::schema::DirectiveDefinition {
    fn sort_children(&mut self) {
        sort_nodes_by_name(&mut self.arguments);
        sort_locations(&mut self.locations);
    }
}

impl SortChildren for ast::schema::TypeDefinition {
    fn sort_children(&mut self) {
        use ast::schema::TypeDefinition;
        match self {
            TypeDefinition::Enum(def) => {
                sort_directives(&mut def.directives);
                sort_nodes_by_name(&mut def.values);
            },
            TypeDefinition::InputObject(def) => {
                sort_directives(&mut def.directives);
                sort_nodes_by_name(&mut def.fields);
            },
            TypeDefinition::Interface(def) => {
                sort_names(&mut def.implements_interfaces);
                sort_directives(&mut def.directives);
                sort_nodes_by_name(&mut def.fields);
            },
            TypeDefinition::Object(def) => {
                sort_names(&mut def.implements_interfaces);
                sort_directives(&mut def.directives);
                sort_nodes_by_name(&mut def.fields);
            },
            TypeDefinition::Scalar(def) => {
                sort_directives(&mut def.directives);
            },
            TypeDefinition::Union(def) => {
                sort_directives(&mut def.directives);
                sort_names(&mut def.types);
            },
        }
    }
}

impl SortChildren for ast::schema::TypeExtension {
    fn sort_children(&mut self) {
        use ast::schema::TypeExtension;
        match self {
            TypeExtension::Enum(ext) => {
                sort_directives(&mut ext.directives);
                sort_nodes_by_name(&mut ext.values);
            },
            TypeExtension::InputObject(ext) => {
                sort_directives(&mut ext.directives);
                sort_nodes_by_name(&mut ext.fields);
            },
            TypeExtension::Interface(ext) => {
                sort_names(&mut ext.implements_interfaces);
                sort_directives(&mut ext.directives);
                sort_nodes_by_name(&mut ext.fields);
            },
            TypeExtension::Object(ext) => {
                sort_names(&mut ext.implements_interfaces);
                sort_directives(&mut ext.directives);
                sort_nodes_by_name(&mut ext.fields);
            },
            TypeExtension::Scalar(ext) => {
                sort_directives(&mut ext.directives);
            },
            TypeExtension::Union(ext) => {
                sort_directives(&mut ext.directives);
                sort_names(&mut ext.types);
            },
        }
    }
}

impl SortChildren for ast::schema::Field {
    fn sort_children(&mut self) {
        sort_nodes_by_name(&mut self.arguments);
        sort_directives(&mut self.directives);
    }
}

impl SortChildren for ast::schema::InputValue {
    fn sort_children(&mut self) {
        sort_directives(&mut self.directives);
    }
}

impl SortChildren for ast::schema::EnumValue {
    fn sort_children(&mut self) {
        sort_directives(&mut self.directives);
    }
}

impl SortChildren for ast::query::Directive {
    fn sort_children(&mut self) {
        // Argument values are left as written; object values are already
        // key-ordered by the AST.
        self.arguments.sort_by(|(a, _), (b, _)| a.cmp(b));
    }
}

// Selection sets are never reordered: selection order determines response
// field order.
impl SortChildren for ast::query::Definition {
    fn sort_children(&mut self) {
        use ast::query::Definition;
        use ast::query::OperationDefinition;
        match self {
            Definition::Fragment(fragment) => {
                sort_directives(&mut fragment.directives);
            },
            Definition::Operation(OperationDefinition::Query(query)) => {
                sort_directives(&mut query.directives);
            },
            Definition::Operation(OperationDefinition::Mutation(mutation)) => {
                sort_directives(&mut mutation.directives);
            },
            Definition::Operation(OperationDefinition::Subscription(sub)) => {
                sort_directives(&mut sub.directives);
            },
            Definition::Operation(OperationDefinition::SelectionSet(_)) => (),
        }
    }
}
