// 1. Slab and chain
//
// Elements are stored in a growable slab of slots and chained through slot indices instead of
// pointers. The logical order of the chain is independent from the physical order of the slab.
//
// | Occupied(B) | Vacant | Occupied(A) | Occupied(C) | Vacant |
//
//   front = 2 (A), rear = 3 (C), vacant = 4 -> 1
//
//   A (slot 2) <-> B (slot 0) <-> C (slot 3)
//
// 2. Links
//
// `next` indices form the single ownership path that goes from `front` to `rear`. `prev`
// indices are plain back-references used for reverse traversal and neighbor relinking. The
// sentinel `NIL` marks the absence of a neighbor on either end, an empty chain and the
// exhaustion of the vacant list.
//
// 3. Vacant list
//
// Removals turn occupied slots into vacant ones. Each vacant slot stores the index of the next
// vacant slot, forming an intrusive list headed by `vacant` that insertions consume before the
// slab is allowed to grow.

#[cfg(kani)]
mod kani;

use alloc::vec::Vec;
use core::{
  fmt::{Debug, Display, Formatter},
  mem::replace,
};

/// Marks the absence of a linked slot.
const NIL: usize = usize::MAX;

/// Errors of [LinkedDeque].
#[derive(Clone, Copy, Debug)]
pub enum LinkedDequeError {
  /// The operation requires at least one element but the structure is empty.
  EmptyDeque,
  /// The provided index does not point to an occupied position.
  InvalidAccess,
}

impl Display for LinkedDequeError {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl core::error::Error for LinkedDequeError {}

/// A double-ended queue backed by a doubly-linked chain of slab slots.
//
// # Illustration
//
// | Occupied(B) | Vacant | Occupied(A) | Occupied(C) | Vacant |
//        |          |           |             |          |
//        |          |           |             |          |--> vacant (head of the list)
//        |          |           |             |--> rear
//        |          |           |--> front
//        |          |--> second vacant slot
//        |--> interior node, A.next and C.prev point here
pub struct LinkedDeque<T> {
  front: usize,
  len: usize,
  rear: usize,
  slots: Vec<Slot<T>>,
  vacant: usize,
}

impl<T> LinkedDeque<T> {
  /// Creates a new empty instance.
  #[inline]
  pub const fn new() -> Self {
    Self { front: NIL, len: 0, rear: NIL, slots: Vec::new(), vacant: NIL }
  }

  /// Clears the deque, removing and dropping all values.
  ///
  /// ```rust
  /// let mut deque = ldx::collection::LinkedDeque::new();
  /// deque.push_back(1);
  /// deque.clear();
  /// assert_eq!(deque.len(), 0);
  /// ```
  #[inline]
  pub fn clear(&mut self) {
    let Self { front, len, rear, slots, vacant } = self;
    slots.clear();
    *front = NIL;
    *len = 0;
    *rear = NIL;
    *vacant = NIL;
  }

  /// Returns the first element.
  #[inline]
  pub fn first(&self) -> Option<&T> {
    Some(&self.node(self.front)?.value)
  }

  /// Returns the first mutable element.
  #[inline]
  pub fn first_mut(&mut self) -> Option<&mut T> {
    Some(&mut self.node_mut(self.front)?.value)
  }

  /// Provides a reference to the element at the given position counted from the front.
  ///
  /// The traversal always starts at the front and follows `idx` forward links.
  ///
  /// ```rust
  /// let mut deque = ldx::collection::LinkedDeque::new();
  /// deque.push_back(1);
  /// deque.push_back(3);
  /// assert_eq!(deque.get(1).unwrap(), &3);
  /// ```
  #[inline]
  pub fn get(&self, idx: usize) -> crate::Result<&T> {
    let slot = self.slot_at(idx).ok_or(LinkedDequeError::InvalidAccess)?;
    let Some(node) = self.node(slot) else {
      return Err(LinkedDequeError::InvalidAccess.into());
    };
    Ok(&node.value)
  }

  /// Mutable version of [`Self::get`].
  ///
  /// ```rust
  /// let mut deque = ldx::collection::LinkedDeque::new();
  /// deque.push_back(1);
  /// deque.push_back(3);
  /// *deque.get_mut(0).unwrap() = 7;
  /// assert_eq!(deque.get(0).unwrap(), &7);
  /// ```
  #[inline]
  pub fn get_mut(&mut self, idx: usize) -> crate::Result<&mut T> {
    let slot = self.slot_at(idx).ok_or(LinkedDequeError::InvalidAccess)?;
    let Some(node) = self.node_mut(slot) else {
      return Err(LinkedDequeError::InvalidAccess.into());
    };
    Ok(&mut node.value)
  }

  /// Inserts `value` at the given position counted from the front, shifting all subsequent
  /// elements towards the rear.
  ///
  /// The position must point to an already occupied slot, which makes appending through this
  /// method impossible. [`Self::push_back`] is the only way of placing an element past the
  /// last position.
  ///
  /// ```rust
  /// let mut deque = ldx::collection::LinkedDeque::new();
  /// deque.push_back(1);
  /// deque.push_back(5);
  /// deque.insert(1, 3).unwrap();
  /// assert_eq!(deque.get(1).unwrap(), &3);
  /// assert_eq!(deque.len(), 3);
  /// ```
  #[inline]
  pub fn insert(&mut self, idx: usize, value: T) -> crate::Result<()> {
    if idx >= self.len {
      return Err(LinkedDequeError::InvalidAccess.into());
    }
    if idx == 0 {
      self.push_front(value);
      return Ok(());
    }
    let curr = self.slot_at(idx).ok_or(LinkedDequeError::InvalidAccess)?;
    let Some(prev) = self.node(curr).map(|node| node.prev) else {
      return Err(LinkedDequeError::InvalidAccess.into());
    };
    let slot = self.occupy(Node { next: curr, prev, value });
    if let Some(node) = self.node_mut(prev) {
      node.next = slot;
    }
    if let Some(node) = self.node_mut(curr) {
      node.prev = slot;
    }
    self.len = self.len.wrapping_add(1);
    Ok(())
  }

  /// Indicates whether the structure contains elements.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns the last element.
  #[inline]
  pub fn last(&self) -> Option<&T> {
    Some(&self.node(self.rear)?.value)
  }

  /// Returns the last mutable element.
  #[inline]
  pub fn last_mut(&mut self) -> Option<&mut T> {
    Some(&mut self.node_mut(self.rear)?.value)
  }

  /// Returns the number of elements.
  #[inline]
  pub fn len(&self) -> usize {
    self.len
  }

  /// Removes the last element and returns it.
  ///
  /// ```rust
  /// let mut deque = ldx::collection::LinkedDeque::new();
  /// deque.push_back(1);
  /// deque.push_back(3);
  /// assert_eq!(deque.pop_back().unwrap(), 3);
  /// assert_eq!(deque.len(), 1);
  /// ```
  #[inline]
  pub fn pop_back(&mut self) -> crate::Result<T> {
    let node = self.release(self.rear).ok_or(LinkedDequeError::EmptyDeque)?;
    self.rear = node.prev;
    if let Some(prev) = self.node_mut(node.prev) {
      prev.next = NIL;
    } else {
      self.front = NIL;
    }
    self.len = self.len.wrapping_sub(1);
    Ok(node.value)
  }

  /// Removes the element at the given position counted from the front and returns it.
  ///
  /// The first position delegates to [`Self::pop_front`] and the last one delegates to
  /// [`Self::pop_back`]. Interior removals traverse `idx` forward links and then relink both
  /// neighbors directly to each other.
  ///
  /// ```rust
  /// let mut deque = ldx::collection::LinkedDeque::new();
  /// deque.push_back(1);
  /// deque.push_back(3);
  /// deque.push_back(5);
  /// assert_eq!(deque.pop_from(1).unwrap(), 3);
  /// assert_eq!(deque.len(), 2);
  /// ```
  #[inline]
  pub fn pop_from(&mut self, idx: usize) -> crate::Result<T> {
    if self.len == 0 {
      return Err(LinkedDequeError::EmptyDeque.into());
    }
    if idx >= self.len {
      return Err(LinkedDequeError::InvalidAccess.into());
    }
    if idx == 0 {
      return self.pop_front();
    }
    if idx == self.len.wrapping_sub(1) {
      return self.pop_back();
    }
    let slot = self.slot_at(idx).ok_or(LinkedDequeError::InvalidAccess)?;
    let node = self.release(slot).ok_or(LinkedDequeError::InvalidAccess)?;
    if let Some(prev) = self.node_mut(node.prev) {
      prev.next = node.next;
    }
    if let Some(next) = self.node_mut(node.next) {
      next.prev = node.prev;
    }
    self.len = self.len.wrapping_sub(1);
    Ok(node.value)
  }

  /// Removes the first element and returns it.
  ///
  /// ```rust
  /// let mut deque = ldx::collection::LinkedDeque::new();
  /// deque.push_back(1);
  /// deque.push_back(3);
  /// assert_eq!(deque.pop_front().unwrap(), 1);
  /// assert_eq!(deque.len(), 1);
  /// ```
  #[inline]
  pub fn pop_front(&mut self) -> crate::Result<T> {
    let node = self.release(self.front).ok_or(LinkedDequeError::EmptyDeque)?;
    self.front = node.next;
    if let Some(next) = self.node_mut(node.next) {
      next.prev = NIL;
    } else {
      self.rear = NIL;
    }
    self.len = self.len.wrapping_sub(1);
    Ok(node.value)
  }

  /// Appends an element to the rear of the deque.
  ///
  /// Memory exhaustion while growing the slab is treated as an unrecoverable condition that
  /// terminates the process.
  ///
  /// ```rust
  /// let mut deque = ldx::collection::LinkedDeque::new();
  /// deque.push_back(1);
  /// deque.push_back(3);
  /// assert_eq!(deque.last(), Some(&3));
  /// ```
  #[inline]
  pub fn push_back(&mut self, value: T) {
    let prev_rear = self.rear;
    let slot = self.occupy(Node { next: NIL, prev: prev_rear, value });
    if let Some(node) = self.node_mut(prev_rear) {
      node.next = slot;
    } else {
      self.front = slot;
    }
    self.rear = slot;
    self.len = self.len.wrapping_add(1);
  }

  /// Prepends an element to the front of the deque.
  ///
  /// Memory exhaustion while growing the slab is treated as an unrecoverable condition that
  /// terminates the process.
  ///
  /// ```rust
  /// let mut deque = ldx::collection::LinkedDeque::new();
  /// deque.push_front(1);
  /// deque.push_front(3);
  /// assert_eq!(deque.first(), Some(&3));
  /// ```
  #[inline]
  pub fn push_front(&mut self, value: T) {
    let prev_front = self.front;
    let slot = self.occupy(Node { next: prev_front, prev: NIL, value });
    if let Some(node) = self.node_mut(prev_front) {
      node.prev = slot;
    } else {
      self.rear = slot;
    }
    self.front = slot;
    self.len = self.len.wrapping_add(1);
  }

  fn node(&self, slot: usize) -> Option<&Node<T>> {
    match self.slots.get(slot) {
      Some(Slot::Occupied(node)) => Some(node),
      _ => None,
    }
  }

  fn node_mut(&mut self, slot: usize) -> Option<&mut Node<T>> {
    match self.slots.get_mut(slot) {
      Some(Slot::Occupied(node)) => Some(node),
      _ => None,
    }
  }

  fn occupy(&mut self, node: Node<T>) -> usize {
    let slot = self.vacant;
    match self.slots.get(slot) {
      Some(&Slot::Vacant { next }) => {
        self.vacant = next;
        self.slots[slot] = Slot::Occupied(node);
        slot
      }
      _ => {
        let end = self.slots.len();
        self.slots.push(Slot::Occupied(node));
        end
      }
    }
  }

  fn release(&mut self, slot: usize) -> Option<Node<T>> {
    let vacant = self.vacant;
    let stored = self.slots.get_mut(slot)?;
    match replace(&mut *stored, Slot::Vacant { next: vacant }) {
      Slot::Occupied(node) => {
        self.vacant = slot;
        Some(node)
      }
      old => {
        *stored = old;
        None
      }
    }
  }

  fn slot_at(&self, idx: usize) -> Option<usize> {
    if idx >= self.len {
      return None;
    }
    let mut cursor = self.front;
    for _ in 0..idx {
      cursor = self.node(cursor)?.next;
    }
    Some(cursor)
  }
}

impl<T> Clone for LinkedDeque<T>
where
  T: Clone,
{
  #[inline]
  fn clone(&self) -> Self {
    let mut instance = Self::new();
    let mut cursor = self.front;
    while let Some(node) = self.node(cursor) {
      instance.push_back(node.value.clone());
      cursor = node.next;
    }
    instance
  }
}

impl<T> Debug for LinkedDeque<T>
where
  T: Debug,
{
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
    let mut list = f.debug_list();
    let mut cursor = self.front;
    while let Some(node) = self.node(cursor) {
      list.entry(&node.value);
      cursor = node.next;
    }
    list.finish()
  }
}

impl<T> Default for LinkedDeque<T> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Display for LinkedDeque<T>
where
  T: Display,
{
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
    let mut cursor = self.front;
    while let Some(node) = self.node(cursor) {
      if cursor != self.front {
        f.write_str(" ")?;
      }
      write!(f, "{}", node.value)?;
      cursor = node.next;
    }
    Ok(())
  }
}

struct Node<T> {
  next: usize,
  prev: usize,
  value: T,
}

enum Slot<T> {
  Occupied(Node<T>),
  Vacant { next: usize },
}

#[cfg(feature = "arbitrary")]
mod arbitrary {
  use crate::collection::LinkedDeque;
  use arbitrary::{Arbitrary, Unstructured};

  impl<'any, T> Arbitrary<'any> for LinkedDeque<T>
  where
    T: Arbitrary<'any>,
  {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'any>) -> arbitrary::Result<Self> {
      let mut this = Self::new();
      for elem in u.arbitrary_iter()? {
        this.push_back(elem?);
      }
      Ok(this)
    }
  }
}

#[cfg(feature = "serde")]
mod serde {
  use crate::collection::LinkedDeque;
  use core::{fmt::Formatter, marker::PhantomData};
  use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{SeqAccess, Visitor},
    ser::SerializeSeq,
  };

  impl<'de, T> Deserialize<'de> for LinkedDeque<T>
  where
    T: Deserialize<'de>,
  {
    #[inline]
    fn deserialize<DE>(deserializer: DE) -> Result<Self, DE::Error>
    where
      DE: Deserializer<'de>,
    {
      struct LinkedDequeVisitor<T>(PhantomData<T>);

      impl<'de, T> Visitor<'de> for LinkedDequeVisitor<T>
      where
        T: Deserialize<'de>,
      {
        type Value = LinkedDeque<T>;

        #[inline]
        fn expecting(&self, formatter: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
          formatter.write_str("a sequence of elements")
        }

        #[inline]
        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
          A: SeqAccess<'de>,
        {
          let mut this = LinkedDeque::new();
          while let Some(elem) = seq.next_element()? {
            this.push_back(elem);
          }
          Ok(this)
        }
      }

      deserializer.deserialize_seq(LinkedDequeVisitor::<T>(PhantomData))
    }
  }

  impl<T> Serialize for LinkedDeque<T>
  where
    T: Serialize,
  {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      let mut seq = serializer.serialize_seq(Some(self.len()))?;
      let mut cursor = self.front;
      while let Some(node) = self.node(cursor) {
        seq.serialize_element(&node.value)?;
        cursor = node.next;
      }
      seq.end()
    }
  }
}
