use crate::ast;
use crate::operation::OperationKind;

fn operation_kinds(src: &str) -> Vec<OperationKind> {
    ast::operation::parse(src)
        .expect("test document parses")
        .definitions
        .iter()
        .filter_map(|def| match def {
            ast::operation::Definition::Operation(op_def) =>
                Some(OperationKind::from_ast(op_def)),
            ast::operation::Definition::Fragment(_) => None,
        })
        .collect()
}

#[test]
fn kinds_from_ast() {
    assert_eq!(
        operation_kinds("
            query Q { a }
            mutation M { b }
            subscription S { c }
        "),
        vec![
            OperationKind::Query,
            OperationKind::Mutation,
            OperationKind::Subscription,
        ],
    );
}

#[test]
fn shorthand_operation_is_a_query() {
    assert_eq!(operation_kinds("{ a }"), vec![OperationKind::Query]);
}

#[test]
fn default_root_type_names() {
    assert_eq!(OperationKind::Query.default_root_type_name(), "Query");
    assert_eq!(OperationKind::Mutation.default_root_type_name(), "Mutation");
    assert_eq!(OperationKind::Subscription.default_root_type_name(), "Subscription");
}

#[test]
fn display() {
    assert_eq!(OperationKind::Mutation.to_string(), "mutation");
}
