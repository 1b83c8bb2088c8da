use crate::estimate::TypeCostTable;
use crate::estimate::compute_cost;
use crate::estimate::compute_max_node;
use crate::operation::VariableBindings;
use crate::schema::Schema;
use crate::test;
use proptest::prelude::*;
use std::sync::OnceLock;

fn schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(test::repository_schema)
}

fn nested_connections_query(repositories: &str, issues: &str, labels: &str) -> String {
    format!("
        query Q($repos: Int, $issues: Int, $labels: Int) {{
          viewer {{
            repositories(first: {repositories}) {{
              edges {{
                node {{
                  issues(last: {issues}) {{
                    edges {{ node {{ labels(first: {labels}) {{ totalCount }} }} }}
                  }}
                }}
              }}
            }}
          }}
        }}
    ")
}

fn type_costs() -> TypeCostTable {
    TypeCostTable::from_iter([("IssueConnection", 3), ("LabelConnection", 2)])
}

proptest! {
    #[test]
    fn prop_metrics_monotonic_in_page_size(
        position in 0usize..3,
        smaller in 0i64..500,
        delta in 0i64..500,
        other_a in 0i64..100,
        other_b in 0i64..100,
    ) {
        let larger = smaller + delta;
        let query_with = |page_size: i64| {
            let page_size = page_size.to_string();
            let (a, b) = (other_a.to_string(), other_b.to_string());
            match position {
                0 => nested_connections_query(&page_size, &a, &b),
                1 => nested_connections_query(&a, &page_size, &b),
                _ => nested_connections_query(&a, &b, &page_size),
            }
        };
        let type_costs = type_costs();

        let small_query = query_with(smaller);
        let large_query = query_with(larger);

        let small_cost = compute_cost(schema(), &small_query, None, Some(&type_costs))?;
        let large_cost = compute_cost(schema(), &large_query, None, Some(&type_costs))?;
        prop_assert!(small_cost <= large_cost);

        let small_max_node = compute_max_node(schema(), &small_query, None)?;
        let large_max_node = compute_max_node(schema(), &large_query, None)?;
        prop_assert!(small_max_node <= large_max_node);
    }

    #[test]
    fn prop_variables_match_literals(
        repos in -10i64..1000,
        issues in -10i64..1000,
        labels in -10i64..1000,
    ) {
        let type_costs = type_costs();
        let with_variables = nested_connections_query("$repos", "$issues", "$labels");
        let with_literals = nested_connections_query(
            &repos.to_string(),
            &issues.to_string(),
            &labels.to_string(),
        );
        let variables = VariableBindings::from_iter([
            ("repos", repos),
            ("issues", issues),
            ("labels", labels),
        ]);

        prop_assert_eq!(
            compute_cost(schema(), &with_variables, Some(&variables), Some(&type_costs))?,
            compute_cost(schema(), &with_literals, None, Some(&type_costs))?,
        );
        prop_assert_eq!(
            compute_max_node(schema(), &with_variables, Some(&variables))?,
            compute_max_node(schema(), &with_literals, None)?,
        );
    }

    #[test]
    fn prop_leaf_only_queries_score_zero(
        field_count in 1usize..8,
    ) {
        let selections = ["login", "id", "__typename"]
            .iter()
            .cycle()
            .take(field_count)
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        let query = format!("{{ viewer {{ {selections} }} }}");

        // Only `viewer` itself is an object.
        prop_assert_eq!(compute_cost(schema(), &query, None, None)?, 0);
        prop_assert_eq!(compute_max_node(schema(), &query, None)?, 1);
    }
}
