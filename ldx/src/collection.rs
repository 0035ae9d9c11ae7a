//! Collection types

mod linked_deque;

pub use linked_deque::{LinkedDeque, LinkedDequeError};
