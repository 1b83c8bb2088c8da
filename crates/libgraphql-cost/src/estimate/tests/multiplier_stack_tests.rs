use crate::estimate::multiplier_stack::MultiplierStack;

#[test]
fn starts_at_one() {
    let stack = MultiplierStack::new();

    assert_eq!(stack.top(), 1);
    assert_eq!(stack.depth(), 0);
}

#[test]
fn page_sizes_multiply() {
    let mut stack = MultiplierStack::new();

    stack.push_for(Some(100));
    stack.push_for(None);
    stack.push_for(Some(50));

    assert_eq!(stack.top(), 5000);
    assert_eq!(stack.depth(), 3);
}

#[test]
fn pop_restores_previous_multiplier() {
    let mut stack = MultiplierStack::new();

    stack.push_for(Some(10));
    stack.push_for(Some(10));
    stack.pop();
    assert_eq!(stack.top(), 10);

    stack.pop();
    assert_eq!(stack.top(), 1);
    assert_eq!(stack, MultiplierStack::default());
}

#[test]
fn zero_page_size_zeroes_subtree() {
    let mut stack = MultiplierStack::new();

    stack.push_for(Some(0));
    stack.push_for(Some(25));

    assert_eq!(stack.top(), 0);
}

#[test]
fn multiplication_saturates() {
    let mut stack = MultiplierStack::new();

    stack.push_for(Some(u64::MAX / 2));
    stack.push_for(Some(3));

    assert_eq!(stack.top(), u64::MAX);
}
