//! Positional operations of a doubly-linked double-ended queue.

extern crate ldx;
extern crate ldx_instances;

use ldx::collection::LinkedDeque;

fn main() -> ldx::Result<()> {
  let mut deque = LinkedDeque::new();
  for value in ldx_instances::values_from_args()? {
    deque.push_back(value);
  }
  println!("{}", deque);
  let popped = deque.pop_from(0)?;
  println!("popped: {}", popped);
  println!("{}", deque);
  deque.clear();
  println!("{}", deque);
  Ok(())
}
