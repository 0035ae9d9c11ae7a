use crate::collection::LinkedDeque;
use alloc::collections::VecDeque;

#[kani::proof]
fn linked_deque() {
  let bytes = kani::vec::any_vec::<u8, 8>();
  let mut deque = LinkedDeque::new();
  let mut vec_deque = VecDeque::new();

  for byte in bytes.iter().copied() {
    deque.push_front(byte);
    vec_deque.push_front(byte);
  }
  assert_eq!(deque.len(), vec_deque.len());
  for _ in 0..(bytes.len() / 2) {
    assert_eq!(deque.first(), vec_deque.front());
    assert_eq!(deque.last(), vec_deque.back());
    assert_eq!(deque.get(0).ok(), vec_deque.get(0));
    assert_eq!(deque.get_mut(0).ok(), vec_deque.get_mut(0));
    assert_eq!(deque.pop_back().ok(), vec_deque.pop_back());
    assert_eq!(deque.first(), vec_deque.front());
    assert_eq!(deque.last(), vec_deque.back());
    assert_eq!(deque.get(0).ok(), vec_deque.get(0));
    assert_eq!(deque.get_mut(0).ok(), vec_deque.get_mut(0));
    assert_eq!(deque.pop_front().ok(), vec_deque.pop_front());
  }
  loop {
    if deque.len() == 0 {
      break;
    }
    assert_eq!(deque.get(0).ok(), vec_deque.get(0));
    assert_eq!(deque.pop_back().ok(), vec_deque.pop_back());
    if deque.len() == 0 {
      break;
    }
    assert_eq!(deque.get(0).ok(), vec_deque.get(0));
    assert_eq!(deque.pop_front().ok(), vec_deque.pop_front());
  }
  assert_eq!((deque.len(), vec_deque.len()), (0, 0));
}

#[kani::proof]
fn linked_deque_positional() {
  let bytes = kani::vec::any_vec::<u8, 6>();
  let mut deque = LinkedDeque::new();
  let mut vec_deque = VecDeque::new();

  for byte in bytes.iter().copied() {
    deque.push_back(byte);
    vec_deque.push_back(byte);
  }
  let at: usize = kani::any();
  kani::assume(at < 6);
  if at < vec_deque.len() {
    assert_eq!(deque.get(at).ok(), vec_deque.get(at));
    let _rslt = deque.insert(at, 0);
    vec_deque.insert(at, 0);
    assert_eq!(deque.len(), vec_deque.len());
    assert_eq!(deque.pop_from(at).ok(), Some(0));
    let _elem = vec_deque.remove(at);
    assert_eq!(deque.len(), vec_deque.len());
  } else {
    assert!(deque.get(at).is_err());
    assert!(deque.insert(at, 0).is_err());
    assert!(deque.pop_from(at).is_err());
  }
  while let Some(elem) = vec_deque.pop_front() {
    assert_eq!(deque.pop_front().ok(), Some(elem));
  }
  assert_eq!(deque.len(), 0);
}
