//! Linked deque

#![no_main]

use ldx::collection::LinkedDeque;
use std::collections::VecDeque;

libfuzzer_sys::fuzz_target!(|data: (LinkedDeque<u8>, Vec<(u8, u8)>)| {
  let (mut deque, ops) = data;
  let mut vec_deque = VecDeque::new();
  let mut idx = 0;
  while let Ok(elem) = deque.get(idx) {
    vec_deque.push_back(*elem);
    idx = idx.wrapping_add(1);
  }
  for (op, value) in ops {
    let at = usize::from(value) % vec_deque.len().max(1);
    match op % 6 {
      0 => {
        deque.push_front(value);
        vec_deque.push_front(value);
      }
      1 => {
        deque.push_back(value);
        vec_deque.push_back(value);
      }
      2 => {
        assert_eq!(deque.pop_front().ok(), vec_deque.pop_front());
      }
      3 => {
        assert_eq!(deque.pop_back().ok(), vec_deque.pop_back());
      }
      4 => {
        assert_eq!(deque.pop_from(at).ok(), vec_deque.remove(at));
      }
      _ => {
        if at < vec_deque.len() {
          assert!(deque.insert(at, value).is_ok());
          vec_deque.insert(at, value);
        } else {
          assert!(deque.insert(at, value).is_err());
        }
      }
    }
    assert_eq!(deque.len(), vec_deque.len());
    assert_eq!(deque.first(), vec_deque.front());
    assert_eq!(deque.last(), vec_deque.back());
  }
  while let Some(elem) = vec_deque.pop_front() {
    assert_eq!(deque.pop_front().ok(), Some(elem));
  }
  assert_eq!(deque.len(), 0);
});
