//! A (partial) function from atoms to truth values.
//!
//! The canonical representation of a valuation is a vector of optional booleans whose length is
//! the number of atoms in the problem, where:
//! - *v*\[a\] = Some(true) *if and only if* 𝐯(𝐚) = true.
//! - *v*\[a\] = Some(false) *if and only if* 𝐯(𝐚) = false.
//! - *v*\[a\] = None *if and only if* 𝐯(𝐚) is undefined.
//!
//! If all atoms are assigned a value the valuation is 'full', otherwise the valuation is 'partial'.
//!
//! ```rust
//! # use winnow_sat::structures::literal::{CLiteral, Literal};
//! # use winnow_sat::structures::valuation::Valuation;
//! let valuation = vec![Some(true), None, Some(false)];
//!
//! assert_eq!(valuation.value_of(0), Some(true));
//! assert_eq!(valuation.value_of(1), None);
//! assert_eq!(valuation.value_of_literal(&CLiteral::new(2, false)), Some(true));
//! ```

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical representation of a valuation.
pub type AtomValuation = Vec<Option<bool>>;

/// Something which stores some value of an atom and/or the information that the atom has no value.
pub trait Valuation {
    /// Some value of an atom under the valuation, or otherwise nothing.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// Some value of a literal under the valuation: true when the value of the atom matches the
    /// polarity of the literal, or otherwise nothing.
    fn value_of_literal(&self, literal: &CLiteral) -> Option<bool>;

    /// Sets the value of the atom of `literal` to the polarity of `literal`.
    ///
    /// Overwriting a conflicting value indicates corruption of whatever produced the valuation,
    /// and is checked in debug builds.
    fn set_literal(&mut self, literal: &CLiteral);

    /// The count of atoms in the valuation.
    fn atom_count(&self) -> usize;
}

impl Valuation for AtomValuation {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied().flatten()
    }

    fn value_of_literal(&self, literal: &CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    fn set_literal(&mut self, literal: &CLiteral) {
        let slot = &mut self[literal.atom() as usize];
        debug_assert!(slot.map_or(true, |value| value == literal.polarity()));
        *slot = Some(literal.polarity());
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}
