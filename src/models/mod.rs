//! Models hold the currency itself and the pieces it is made of.

pub mod denomination;
pub mod stack;
pub mod currency;

#[cfg(test)]
mod props;
