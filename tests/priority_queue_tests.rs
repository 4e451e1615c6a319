use dijkstra_sssp::data_structures::PriorityQueue;
use dijkstra_sssp::Error;
use proptest::prelude::*;

#[test]
fn test_pop_returns_items_in_priority_order() {
    let mut queue = PriorityQueue::new();
    queue.push('a', 5);
    queue.push('b', 1);
    queue.push('c', 3);
    queue.push('d', 4);
    assert!(queue.is_heap_ordered());

    let priorities: Vec<i32> = std::iter::from_fn(|| queue.pop().ok())
        .map(|(_, priority)| priority)
        .collect();
    assert_eq!(priorities, vec![1, 3, 4, 5]);
    assert!(queue.is_empty());
}

#[test]
fn test_pop_empty_queue_fails() {
    let mut queue: PriorityQueue<u32, u32> = PriorityQueue::new();
    assert_eq!(queue.pop(), Err(Error::EmptyQueue));

    queue.push(1, 1);
    assert_eq!(queue.pop(), Ok((1, 1)));
    assert_eq!(queue.pop(), Err(Error::EmptyQueue));
}

#[test]
fn test_duplicate_vertices_coexist() {
    let mut queue = PriorityQueue::new();
    queue.push(7, 10);
    queue.push(7, 2);
    queue.push(7, 6);
    assert_eq!(queue.len(), 3);

    assert_eq!(queue.pop(), Ok((7, 2)));
    assert_eq!(queue.pop(), Ok((7, 6)));
    assert_eq!(queue.pop(), Ok((7, 10)));
}

#[test]
fn test_peek_does_not_remove() {
    let mut queue = PriorityQueue::new();
    assert_eq!(queue.peek(), None);
    queue.push("x", 9);
    queue.push("y", 4);
    assert_eq!(queue.peek(), Some(("y", 4)));
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_decrease_priority_moves_item_to_front() {
    let mut queue = PriorityQueue::new();
    queue.push(1, 10);
    queue.push(2, 20);
    let handle = queue.push(3, 30);

    queue.decrease_priority(handle, 5).unwrap();
    assert_eq!(queue.priority(handle), Some(5));
    assert!(queue.is_heap_ordered());
    assert_eq!(queue.pop(), Ok((3, 5)));
}

#[test]
fn test_decrease_priority_rejects_increase() {
    let mut queue = PriorityQueue::new();
    let handle = queue.push(1, 10);
    assert_eq!(queue.decrease_priority(handle, 11), Err(Error::PriorityIncrease));
    // Equal priority is allowed
    assert_eq!(queue.decrease_priority(handle, 10), Ok(()));
}

#[test]
fn test_popped_handle_is_stale() {
    let mut queue = PriorityQueue::new();
    let handle = queue.push(1, 10);
    queue.pop().unwrap();
    assert!(!queue.contains(handle));
    assert_eq!(queue.decrease_priority(handle, 1), Err(Error::StaleHandle));

    // The recycled slot must not validate the old handle
    let fresh = queue.push(2, 20);
    assert!(queue.contains(fresh));
    assert!(!queue.contains(handle));
    assert_eq!(queue.priority(handle), None);
}

#[test]
fn test_clear_invalidates_handles() {
    let mut queue = PriorityQueue::new();
    let a = queue.push(1, 1);
    let b = queue.push(2, 2);
    queue.clear();

    assert!(queue.is_empty());
    assert!(!queue.contains(a));
    assert!(!queue.contains(b));
    assert_eq!(queue.pop(), Err(Error::EmptyQueue));
}

proptest! {
    #[test]
    fn prop_pops_are_sorted(priorities in proptest::collection::vec(0u32..1000, 0..200)) {
        let mut queue = PriorityQueue::new();
        for (vertex, &priority) in priorities.iter().enumerate() {
            queue.push(vertex, priority);
            prop_assert!(queue.is_heap_ordered());
        }

        let mut popped = Vec::new();
        while let Ok((_, priority)) = queue.pop() {
            prop_assert!(queue.is_heap_ordered());
            popped.push(priority);
        }

        let mut expected = priorities.clone();
        expected.sort_unstable();
        prop_assert_eq!(popped, expected);
    }

    #[test]
    fn prop_decrease_priority_keeps_heap_order(
        priorities in proptest::collection::vec(100u32..1000, 1..100),
        updates in proptest::collection::vec((any::<prop::sample::Index>(), 0u32..100), 0..50),
    ) {
        let mut queue = PriorityQueue::new();
        let handles: Vec<_> = priorities
            .iter()
            .enumerate()
            .map(|(vertex, &priority)| queue.push(vertex, priority))
            .collect();
        let mut expected = priorities.clone();

        for (index, new_priority) in updates {
            let i = index.index(handles.len());
            if new_priority <= expected[i] {
                queue.decrease_priority(handles[i], new_priority).unwrap();
                expected[i] = new_priority;
            }
            prop_assert!(queue.is_heap_ordered());
        }

        let mut popped = Vec::new();
        while let Ok((vertex, priority)) = queue.pop() {
            prop_assert_eq!(priority, expected[vertex]);
            popped.push(priority);
        }
        expected.sort_unstable();
        prop_assert_eq!(popped, expected);
    }
}
