//! The seam between a currency and whatever inventory system holds the actual
//! tokens. A currency only ever needs to know *what* a stack is and *how many*
//! tokens are in it.

#[cfg(feature = "with_serde")]
use serde_derive::{Serialize, Deserialize};

/// A quantity of one kind of token, or an empty slot.
pub trait ItemStack {
    /// The token kind type, compared against registered denominations.
    type Kind: PartialEq;

    /// The kind of token in this stack, or `None` if the stack is empty.
    fn kind(&self) -> Option<&Self::Kind>;

    /// How many tokens are in the stack.
    fn quantity(&self) -> u32;
}

/// A plain stack of tokens.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub struct Stack<K> {
    pub kind: K,
    pub quantity: u32,
}

impl<K> Stack<K> {
    pub fn new(kind: K, quantity: u32) -> Self {
        Self { kind, quantity }
    }
}

impl<K: PartialEq> ItemStack for Stack<K> {
    type Kind = K;

    fn kind(&self) -> Option<&K> {
        Some(&self.kind)
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// `None` is an empty slot.
impl<S: ItemStack> ItemStack for Option<S> {
    type Kind = S::Kind;

    fn kind(&self) -> Option<&S::Kind> {
        self.as_ref().and_then(|s| s.kind())
    }

    fn quantity(&self) -> u32 {
        self.as_ref().map(|s| s.quantity()).unwrap_or(0)
    }
}

impl<S: ItemStack + ?Sized> ItemStack for &S {
    type Kind = S::Kind;

    fn kind(&self) -> Option<&S::Kind> {
        (**self).kind()
    }

    fn quantity(&self) -> u32 {
        (**self).quantity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::Coin;

    #[test]
    fn stacks() {
        let stack = Stack::new(Coin::Gold, 12);
        assert_eq!(stack.kind(), Some(&Coin::Gold));
        assert_eq!(stack.quantity(), 12);

        let by_ref = &stack;
        assert_eq!(ItemStack::kind(&by_ref), Some(&Coin::Gold));
        assert_eq!(ItemStack::quantity(&by_ref), 12);
    }

    #[test]
    fn empty_slots() {
        let empty: Option<Stack<Coin>> = None;
        assert_eq!(empty.kind(), None);
        assert_eq!(empty.quantity(), 0);

        let full = Some(Stack::new(Coin::Copper, 3));
        assert_eq!(full.kind(), Some(&Coin::Copper));
        assert_eq!(full.quantity(), 3);
    }
}
