//! Occurrence lists: for each literal, the indicies of the clauses containing it.
//!
//! Lists are cleaned *lazily*. Removing a clause only decrements the live count of each of its
//! literals; the stale indicies stay in the lists until the list is next scanned, at which point
//! the scan compacts in passing (see
//! [process_clause_to_simplify_others](crate::presolve::Presolver::process_clause_to_simplify_others)).
//! So the raw length of a list is an upper bound on, and may diverge from, its live count, and the
//! live counts are held separately. Eager cleaning would turn every clause removal into a walk of
//! one list per literal; amortizing the cleaning into scans which walk the list anyway keeps
//! removal constant per literal.

use crate::{
    presolve::ClauseIndex,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// Occurrence lists over literal indicies, with live counts held apart from the lists.
#[derive(Default)]
pub struct OccurrenceLists {
    /// For each literal, the clauses containing it, stale entries included.
    lists: Vec<Vec<ClauseIndex>>,

    /// For each literal, the count of *live* clauses containing it.
    live: Vec<usize>,
}

impl OccurrenceLists {
    /// Grows the structure to address both literals of `atom`.
    pub fn grow_for_atom(&mut self, atom: Atom) {
        let required = 2 * (atom as usize + 1);
        if self.lists.len() < required {
            self.lists.resize_with(required, Vec::default);
            self.live.resize(required, 0);
        }
    }

    /// Notes `ci` as a live clause containing `literal`.
    pub fn register(&mut self, literal: &CLiteral, ci: ClauseIndex) {
        self.grow_for_atom(literal.atom());
        self.lists[literal.index()].push(ci);
        self.live[literal.index()] += 1;
    }

    /// Notes that some clause containing `literal` is no longer live.
    ///
    /// The stale index is left in the list, to be compacted by a later scan.
    pub fn note_removal(&mut self, literal: &CLiteral) {
        self.live[literal.index()] -= 1;
    }

    /// The count of live clauses containing `literal`.
    pub fn live_count(&self, literal: &CLiteral) -> usize {
        self.live.get(literal.index()).copied().unwrap_or(0)
    }

    /// The list for `literal`, stale entries included.
    pub fn list(&self, literal: &CLiteral) -> &[ClauseIndex] {
        match self.lists.get(literal.index()) {
            Some(list) => list,
            None => &[],
        }
    }

    /// Takes the list for `literal`, leaving an empty list behind.
    ///
    /// Used by scans which compact: the scan takes the list, drops stale entries while working
    /// through it, and restores the compacted list with [set_list](Self::set_list).
    pub fn take_list(&mut self, literal: &CLiteral) -> Vec<ClauseIndex> {
        self.grow_for_atom(literal.atom());
        std::mem::take(&mut self.lists[literal.index()])
    }

    /// Restores a compacted list for `literal`, resetting its live count to the list's length.
    pub fn set_list(&mut self, literal: &CLiteral, list: Vec<ClauseIndex>) {
        self.live[literal.index()] = list.len();
        self.lists[literal.index()] = list;
    }

    /// The count of addressable literals.
    pub fn literal_count(&self) -> usize {
        self.lists.len()
    }

    /// The count of addressable atoms.
    pub fn atom_count(&self) -> usize {
        self.lists.len() / 2
    }

    /// Releases all storage.
    pub fn clear(&mut self) {
        self.lists.clear();
        self.live.clear();
    }
}
