//! A set of utility functions used when operating the core.

#[macro_use]
pub mod number;

#[cfg(test)]
pub(crate) mod test;
