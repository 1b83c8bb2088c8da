mod multiplier_stack_tests;
mod property_tests;
