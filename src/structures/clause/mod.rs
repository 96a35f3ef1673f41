//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals, kept in *canonical form*:
//! strictly sorted by the literal order, with no duplicate literals and no complementary pair.
//! A clause containing a complementary pair is satisfied on every valuation, and such clauses are
//! dropped (and counted) rather than stored.
//!
//! Canonical form is a precondition of the [algebra](crate::algebra) routines, and every clause
//! held by a [presolver](crate::presolve) is in canonical form.
//!
//! ```rust
//! # use winnow_sat::structures::clause::{self, Canonical, Clause};
//! # use winnow_sat::structures::literal::{CLiteral, Literal};
//! let p = CLiteral::new(0, true);
//! let q = CLiteral::new(1, true);
//!
//! let mut clause = vec![q, p, q];
//! assert_eq!(clause::canonicalize(&mut clause), Canonical::Clause);
//! assert_eq!(clause, vec![p, q]);
//!
//! let mut trivial = vec![p, q, p.negate()];
//! assert_eq!(clause::canonicalize(&mut trivial), Canonical::Trivial);
//! ```
//!
//! - The empty clause is always false (never true).

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical implementation of a clause, as a vector of literals.
pub type CClause = Vec<CLiteral>;

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause.
    fn as_string(&self) -> String;

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in storage order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in storage order.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;
}

impl Clause for CClause {
    fn as_string(&self) -> String {
        let mut the_string = String::default();
        for literal in self {
            the_string.push_str(format!("{literal} ").as_str());
        }
        the_string.pop();
        the_string
    }

    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self {
            the_string.push_str(format!("{} ", literal.as_int()).as_str());
        }
        if zero {
            the_string += "0";
            the_string
        } else {
            the_string.pop();
            the_string
        }
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn canonical(self) -> CClause {
        self
    }
}

/// The outcome of putting a clause in canonical form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Canonical {
    /// The clause survives in canonical form (possibly empty).
    Clause,

    /// The clause contains a complementary pair of literals, and so is trivially satisfied.
    Trivial,
}

/// Puts `clause` in canonical form: sorted, with duplicate literals collapsed.
///
/// Returns [Canonical::Trivial] without further guarantees on the contents of `clause` when the
/// clause contains both polarities of some atom.
pub fn canonicalize(clause: &mut CClause) -> Canonical {
    clause.sort_unstable();
    clause.dedup();

    for pair in clause.windows(2) {
        if pair[0].atom() == pair[1].atom() {
            return Canonical::Trivial;
        }
    }

    Canonical::Clause
}

/// True exactly when `clause` is strictly sorted with no repeated atom.
pub(crate) fn is_canonical(clause: &CClause) -> bool {
    clause
        .windows(2)
        .all(|pair| pair[0].atom() < pair[1].atom())
}
