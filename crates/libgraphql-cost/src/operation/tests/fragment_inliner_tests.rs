use crate::ast;
use crate::operation::CyclicFragmentError;
use crate::operation::DEFAULT_MAX_EXPANDED_SELECTIONS;
use crate::operation::FragmentInlineError;
use crate::operation::FragmentInliner;
use crate::operation::inline_fragments;

type Result<T> = std::result::Result<T, FragmentInlineError>;

fn parse(src: &str) -> ast::operation::Document {
    ast::operation::parse(src).expect("test document parses")
}

/// Compares documents by their printed form, which ignores source positions.
fn assert_same_document(
    actual: &ast::operation::Document,
    expected_src: &str,
) {
    assert_eq!(actual.to_string(), parse(expected_src).to_string());
}

mod inlining {
    use super::*;

    #[test]
    fn document_without_spreads_is_unchanged() -> Result<()> {
        let document = parse("
            query { item { id } items(first: 10) { totalCount } }
        ");

        assert_eq!(inline_fragments(&document)?, document);

        Ok(())
    }

    #[test]
    fn spread_becomes_inline_fragment() -> Result<()> {
        let document = parse("
            query { item { ...ItemFields } }
            fragment ItemFields on Item { id }
        ");

        let inlined = inline_fragments(&document)?;

        assert_same_document(&inlined, "
            query { item { ... on Item { id } } }
            fragment ItemFields on Item { id }
        ");

        Ok(())
    }

    #[test]
    fn nested_spreads_are_inlined_recursively() -> Result<()> {
        let document = parse("
            query { item { ...ItemFields } }
            fragment ItemFields on Item { id ...Liked }
            fragment Liked on Item { likedUsers(first: 10) { totalCount } }
        ");

        let inlined = inline_fragments(&document)?;

        assert_same_document(&inlined, "
            query {
              item {
                ... on Item {
                  id
                  ... on Item { likedUsers(first: 10) { totalCount } }
                }
              }
            }
            fragment ItemFields on Item {
              id
              ... on Item { likedUsers(first: 10) { totalCount } }
            }
            fragment Liked on Item { likedUsers(first: 10) { totalCount } }
        ");

        Ok(())
    }

    #[test]
    fn fragment_defined_before_use() -> Result<()> {
        let document = parse("
            fragment ItemFields on Item { id }
            query { item { ...ItemFields } }
        ");

        let inlined = inline_fragments(&document)?;

        assert_same_document(&inlined, "
            fragment ItemFields on Item { id }
            query { item { ... on Item { id } } }
        ");

        Ok(())
    }

    #[test]
    fn spread_directives_move_to_inline_fragment() -> Result<()> {
        let document = parse("
            query Q($withItem: Boolean!) {
              item { ...ItemFields @include(if: $withItem) }
            }
            fragment ItemFields on Item { id }
        ");

        let inlined = inline_fragments(&document)?;

        assert_same_document(&inlined, "
            query Q($withItem: Boolean!) {
              item { ... on Item @include(if: $withItem) { id } }
            }
            fragment ItemFields on Item { id }
        ");

        Ok(())
    }

    #[test]
    fn spreads_inside_inline_fragments() -> Result<()> {
        let document = parse("
            { node { ... on Item { ...ItemFields } } }
            fragment ItemFields on Item { id }
        ");

        let inlined = inline_fragments(&document)?;

        assert_same_document(&inlined, "
            { node { ... on Item { ... on Item { id } } } }
            fragment ItemFields on Item { id }
        ");

        Ok(())
    }

    #[test]
    fn unknown_spread_left_in_place() -> Result<()> {
        let document = parse("
            query { item { id ...Missing } }
        ");

        assert_eq!(inline_fragments(&document)?, document);

        Ok(())
    }

    #[test]
    fn every_operation_kind_is_inlined() -> Result<()> {
        let document = parse("
            mutation { updateItem(id: 1) { ...ItemFields } }
            subscription { itemChanged { ...ItemFields } }
            fragment ItemFields on Item { id }
        ");

        let inlined = inline_fragments(&document)?;

        assert_same_document(&inlined, "
            mutation { updateItem(id: 1) { ... on Item { id } } }
            subscription { itemChanged { ... on Item { id } } }
            fragment ItemFields on Item { id }
        ");

        Ok(())
    }

    #[test]
    fn inlining_is_idempotent() -> Result<()> {
        let document = parse("
            query { item { ...A } items(first: 2) { edges { node { ...B } } } }
            fragment A on Item { id ...B }
            fragment B on Item { likedUsers(last: 3) { totalCount } }
        ");

        let once = inline_fragments(&document)?;
        let twice = inline_fragments(&once)?;

        assert_eq!(twice, once);

        Ok(())
    }

    #[test]
    fn input_document_is_not_mutated() -> Result<()> {
        let document = parse("
            query { item { ...ItemFields } }
            fragment ItemFields on Item { id }
        ");
        let original = document.clone();

        let _ = inline_fragments(&document)?;

        assert_eq!(document, original);

        Ok(())
    }

    #[test]
    fn duplicate_fragment_names_use_first_definition() -> Result<()> {
        let document = parse("
            query { item { ...ItemFields } }
            fragment ItemFields on Item { id }
            fragment ItemFields on Item { likedUsers(first: 1) { totalCount } }
        ");

        let inliner = FragmentInliner::from_document(&document);
        assert_eq!(inliner.fragment_names().collect::<Vec<_>>(), vec!["ItemFields"]);

        let inlined = inliner.inline_document(&document)?;
        assert_same_document(&inlined, "
            query { item { ... on Item { id } } }
            fragment ItemFields on Item { id }
            fragment ItemFields on Item { likedUsers(first: 1) { totalCount } }
        ");

        Ok(())
    }
}

mod cycles {
    use super::*;

    #[test]
    fn two_fragment_cycle() {
        let document = parse("
            query { item { ...A } }
            fragment A on Item { id ...B }
            fragment B on Item { id ...A }
        ");

        assert_eq!(
            inline_fragments(&document),
            Err(CyclicFragmentError {
                cycle_path: vec!["A".to_string(), "B".to_string(), "A".to_string()],
            }.into()),
        );
    }

    #[test]
    fn self_referencing_fragment() {
        let document = parse("
            query { item { ...A } }
            fragment A on Item { id ...A }
        ");

        assert_eq!(
            inline_fragments(&document),
            Err(CyclicFragmentError {
                cycle_path: vec!["A".to_string(), "A".to_string()],
            }.into()),
        );
    }

    #[test]
    fn cycle_below_an_acyclic_prefix() {
        let document = parse("
            query { item { ...Entry } }
            fragment Entry on Item { ...B }
            fragment B on Item { ...C }
            fragment C on Item { ...B }
        ");

        assert_eq!(
            inline_fragments(&document),
            Err(CyclicFragmentError {
                cycle_path: vec!["B".to_string(), "C".to_string(), "B".to_string()],
            }.into()),
        );
    }

    #[test]
    fn cycle_among_unused_fragments() {
        let document = parse("
            query { item { id } }
            fragment A on Item { ...B }
            fragment B on Item { ...A }
        ");

        assert!(inline_fragments(&document).is_err());
    }

    #[test]
    fn repeated_spread_is_not_a_cycle() -> Result<()> {
        let document = parse("
            query { item { ...A ...A } other: item { ...A } }
            fragment A on Item { id }
        ");

        assert!(inline_fragments(&document).is_ok());

        Ok(())
    }

    #[test]
    fn error_message_shows_the_cycle() {
        let err = CyclicFragmentError {
            cycle_path: vec!["A".to_string(), "B".to_string(), "A".to_string()],
        };

        assert_eq!(err.to_string(), "Cycle detected in fragment spreads: A → B → A");
    }
}

mod expansion_limits {
    use super::*;

    /// `{ ...F0 }` where each `Fi` spreads `F(i+1)` twice, so the inlined
    /// query holds `2^depth` copies of `F<depth>`'s body.
    fn doubling_fragments(depth: usize) -> String {
        let mut src = "{ ...F0 }\n".to_string();
        for i in 0..depth {
            src.push_str(&format!(
                "fragment F{i} on Query {{ ...F{next} ...F{next} }}\n",
                next = i + 1,
            ));
        }
        src.push_str(&format!("fragment F{depth} on Query {{ hello }}\n"));
        src
    }

    #[test]
    fn doubling_fragments_hit_the_default_limit() {
        let document = parse(&doubling_fragments(22));

        assert_eq!(
            inline_fragments(&document),
            Err(FragmentInlineError::TooManySelections {
                max_selections: DEFAULT_MAX_EXPANDED_SELECTIONS,
            }),
        );
    }

    #[test]
    fn shallow_doubling_fits_under_the_default_limit() -> Result<()> {
        let document = parse(&doubling_fragments(4));

        let inlined = inline_fragments(&document)?;
        assert_eq!(inlined.definitions.len(), document.definitions.len());

        Ok(())
    }

    #[test]
    fn limit_counts_every_written_selection() -> Result<()> {
        let document = parse("
            { item { ...ItemFields } }
            fragment ItemFields on Item { id }
        ");

        // `item`, `... on Item`, `id`, plus `id` in the kept definition.
        let inlined = FragmentInliner::from_document(&document)
            .with_max_expanded_selections(4)
            .inline_document(&document)?;
        assert_same_document(&inlined, "
            { item { ... on Item { id } } }
            fragment ItemFields on Item { id }
        ");

        let too_small = FragmentInliner::from_document(&document)
            .with_max_expanded_selections(3)
            .inline_document(&document);
        assert_eq!(too_small, Err(FragmentInlineError::TooManySelections {
            max_selections: 3,
        }));

        Ok(())
    }

    #[test]
    fn error_message_names_the_limit() {
        let err = FragmentInlineError::TooManySelections { max_selections: 10 };

        assert_eq!(
            err.to_string(),
            "Inlining fragment spreads produces more than 10 selections",
        );
    }
}
