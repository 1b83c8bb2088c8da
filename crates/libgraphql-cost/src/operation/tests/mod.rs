mod fragment_inliner_tests;
mod operation_kind_tests;
mod pagination_tests;
