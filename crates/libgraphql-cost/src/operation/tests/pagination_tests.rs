use crate::ast;
use crate::operation::VariableBindings;
use crate::operation::resolve_page_size;

/// Arguments of the first field selected by `query_src`.
fn first_field_arguments(query_src: &str) -> Vec<ast::Argument> {
    let document = ast::operation::parse(query_src).expect("test document parses");
    let Some(ast::operation::Definition::Operation(
        ast::operation::OperationDefinition::SelectionSet(selection_set),
    )) = document.definitions.first() else {
        panic!("expected a shorthand query");
    };
    let Some(ast::operation::Selection::Field(field)) = selection_set.items.first() else {
        panic!("expected a field selection");
    };
    field.arguments.clone()
}

fn page_size(query_src: &str) -> Option<u64> {
    resolve_page_size(&first_field_arguments(query_src), VariableBindings::empty())
}

mod literals {
    use super::*;

    #[test]
    fn first_literal() {
        assert_eq!(page_size("{ items(first: 10) { id } }"), Some(10));
    }

    #[test]
    fn last_literal() {
        assert_eq!(page_size("{ items(last: 25) { id } }"), Some(25));
    }

    #[test]
    fn zero_is_a_page_size() {
        assert_eq!(page_size("{ items(first: 0) { id } }"), Some(0));
    }

    #[test]
    fn negative_is_absent() {
        assert_eq!(page_size("{ items(first: -5) { id } }"), None);
    }

    #[test]
    fn no_arguments() {
        assert_eq!(page_size("{ items { id } }"), None);
    }

    #[test]
    fn other_arguments_are_ignored() {
        assert_eq!(page_size(r#"{ items(after: "abc", first: 3) { id } }"#), Some(3));
        assert_eq!(page_size(r#"{ items(after: "abc") { id } }"#), None);
    }

    #[test]
    fn leftmost_pagination_argument_wins() {
        assert_eq!(page_size("{ items(first: 5, last: 7) { id } }"), Some(5));
        assert_eq!(page_size("{ items(last: 7, first: 5) { id } }"), Some(7));
    }

    #[test]
    fn leftmost_wins_even_when_unresolvable() {
        assert_eq!(page_size("{ items(first: 1.5, last: 7) { id } }"), None);
    }

    #[test]
    fn non_integer_values_are_absent() {
        assert_eq!(page_size("{ items(first: 10.0) { id } }"), None);
        assert_eq!(page_size(r#"{ items(first: "10") { id } }"#), None);
        assert_eq!(page_size("{ items(first: TEN) { id } }"), None);
        assert_eq!(page_size("{ items(first: null) { id } }"), None);
        assert_eq!(page_size("{ items(first: [10]) { id } }"), None);
    }
}

mod variables {
    use super::*;

    #[test]
    fn bound_variable() {
        let arguments = first_field_arguments("{ items(first: $count) { id } }");
        let variables = VariableBindings::from_iter([("count", 40)]);

        assert_eq!(resolve_page_size(&arguments, &variables), Some(40));
    }

    #[test]
    fn unbound_variable_is_absent() {
        let arguments = first_field_arguments("{ items(first: $count) { id } }");
        let variables = VariableBindings::from_iter([("other", 40)]);

        assert_eq!(resolve_page_size(&arguments, &variables), None);
        assert_eq!(resolve_page_size(&arguments, VariableBindings::empty()), None);
    }

    #[test]
    fn negative_binding_is_absent() {
        let arguments = first_field_arguments("{ items(last: $count) { id } }");
        let variables = VariableBindings::from_iter([("count", -1)]);

        assert_eq!(resolve_page_size(&arguments, &variables), None);
    }
}
