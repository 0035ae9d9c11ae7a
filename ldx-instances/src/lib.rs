//! LDX instances

#![allow(
  clippy::allow_attributes_without_reason,
  clippy::arithmetic_side_effects,
  clippy::missing_inline_in_public_items,
  clippy::std_instead_of_alloc,
  missing_docs
)]

/// Sequence of values from arguments
#[inline]
pub fn values_from_args() -> ldx::Result<Vec<i32>> {
  let mut values = Vec::new();
  for arg in std::env::args().skip(1) {
    values.push(arg.parse()?);
  }
  if values.is_empty() {
    values = (0..10).map(|value| value * 10).collect();
  }
  Ok(values)
}
