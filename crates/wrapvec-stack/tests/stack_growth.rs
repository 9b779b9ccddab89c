//! Integration test: stack growth under the shared growth policy.

use wrapvec_buffer::{BufferError, GrowthConfig};
use wrapvec_stack::{DynStack, StackError};
use wrapvec_test_utils::{random_ints, records, tight_config, Record};

#[test]
fn seventeen_pushes_grow_once() {
    let mut stack = DynStack::new();
    for v in random_ints(11, 16, 0, 1000) {
        stack.push(v).unwrap();
    }
    assert_eq!(stack.capacity(), 16);
    stack.push(-1).unwrap();
    assert_eq!(stack.capacity(), 32);
    assert_eq!(stack.peek().unwrap(), -1);
    assert_eq!(stack.len(), 17);
}

#[test]
fn failed_push_leaves_stack_unchanged() {
    let mut stack = DynStack::with_config(GrowthConfig::new(2, f32::MAX)).unwrap();
    stack.push_slice(&[1u32, 2]).unwrap();
    let err = stack.push(3).unwrap_err();
    assert!(matches!(
        err,
        StackError::Allocation(BufferError::AllocationFailed { .. })
    ));
    assert_eq!(stack.as_slice(), &[1, 2]);
    assert_eq!(stack.capacity(), 2);
}

#[test]
fn composite_elements() {
    let mut stack = DynStack::with_config(tight_config()).unwrap();
    stack.push_slice(&records(4)).unwrap();
    assert_eq!(*stack.top().unwrap(), Record::new(3, "odd"));
    stack.pop_silent().unwrap();
    assert_eq!(stack.pop().unwrap(), Record::new(2, "even"));
    assert_eq!(stack.len(), 2);
}
