use linear_collections::{Error, Stack};

#[test]
fn new_stack_is_empty() {
    let mut stack: Stack<i32> = Stack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.pop(), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
    assert!(stack.peek().is_err());
}

#[test]
fn push_increases_len() {
    let mut stack = Stack::new();
    stack.push("a");
    assert_eq!(stack.len(), 1);
    stack.push("b");
    assert_eq!(stack.len(), 2);
}

#[test]
fn pop_returns_values_in_reverse() {
    let mut stack = Stack::new();
    stack.push("a");
    stack.push("b");
    assert_eq!(stack.pop(), Ok("b"));
    assert_eq!(stack.pop(), Ok("a"));
    assert!(matches!(stack.pop(), Err(Error::IndexOutOfRange { .. })));
    assert!(stack.is_empty());
}

#[test]
fn peek_does_not_alter_state() {
    let mut stack = Stack::new();
    stack.push("a");
    assert_eq!(stack.peek(), Ok(&"a"));
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.pop(), Ok("a"));
}

#[test]
fn peek_mut_updates_top() {
    let mut stack: Stack<i32> = (1..=3).collect();
    *stack.peek_mut().unwrap() += 10;
    assert_eq!(stack.pop(), Ok(13));
    assert_eq!(stack.peek(), Ok(&2));
}

#[test]
fn interleaved_push_and_pop() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.pop(), Ok(2));
    stack.push(3);
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 1]);
    assert_eq!(stack.pop(), Ok(3));
    assert_eq!(stack.pop(), Ok(1));
    assert!(stack.pop().is_err());
}

#[test]
fn collected_stack_has_last_item_on_top() {
    let stack: Stack<char> = "abc".chars().collect();
    assert_eq!(stack.peek(), Ok(&'c'));
    assert_eq!(format!("{:?}", stack), "['c', 'b', 'a']");
    assert_eq!(stack.clone(), stack);
}

#[test]
fn clear_empties_stack() {
    let mut stack: Stack<i32> = (0..4).collect();
    stack.clear();
    assert!(stack.is_empty());
    assert!(stack.peek().is_err());
    stack.push(9);
    assert_eq!(stack.pop(), Ok(9));
}
