//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The canonical implementation of the literal trait is the [CLiteral] structure, made of an atom and a boolean.
//!
//! Literals also have an *index*: `2 * atom + polarity`.
//! The indicies of a literal and its negation are adjacent, and negating a literal amounts to flipping the lowest bit of its index.
//! Indicies are used wherever a structure is keyed by literals --- occurrence lists, equivalence mappings, and the nodes of an implication graph --- and [from_index](Literal::from_index) inverts [index](Literal::index) exactly.
//!
//! An example:
//!
//! ```rust
//! # use winnow_sat::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert_eq!(literal.index(), 159);
//! assert_eq!(literal.negate().index(), 158);
//! assert_eq!(CLiteral::from_index(159), literal);
//! ```
//!
//! Implementation of the literal trait requires implementation of [Ord]:
//! - Literals are ordered by atom and then polarity, with 'false' (strictly) less than 'true'.
//!   Equivalently, literals are ordered by index.
//!   Clauses are kept sorted by this order, a precondition of the [algebra](crate::algebra) routines.

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The index of the literal: `2 * atom + polarity`.
    fn index(&self) -> usize;

    /// The literal whose index is `index`.
    fn from_index(index: usize) -> Self;

    /// The literal in its integer form, with sign indicating polarity and magnitude `atom + 1`.
    fn as_int(&self) -> isize;
}

/// The canonical implementation of a literal: an atom paired with a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CLiteral {
    /// The atom of the literal.
    atom: Atom,

    /// The polarity of the literal.
    polarity: bool,
}

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> Atom {
        self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }

    fn index(&self) -> usize {
        ((self.atom as usize) << 1) | (self.polarity as usize)
    }

    fn from_index(index: usize) -> Self {
        Self {
            atom: (index >> 1) as Atom,
            polarity: (index & 1) == 1,
        }
    }

    fn as_int(&self) -> isize {
        match self.polarity {
            true => self.atom as isize + 1,
            false => -(self.atom as isize + 1),
        }
    }
}

// Traits

impl PartialOrd for CLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            self.polarity.cmp(&other.polarity)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}

// From

impl From<i32> for CLiteral {
    fn from(value: i32) -> Self {
        CLiteral::new(value.unsigned_abs() - 1, value.is_positive())
    }
}
