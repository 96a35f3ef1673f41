//! The elimination pass: bounded variable elimination by clause distribution.
//!
//! It is always possible to remove an atom by resolving each clause containing its positive
//! literal with each clause containing its negative literal and keeping the resolvants --- hence
//! the cross product name. Elimination is *bounded*: the replacement happens only when it does not
//! grow the problem, under a weighted size which counts a configured weight per clause plus one
//! per literal.
//!
//! Every removed clause is registered with the postsolver, associated with the literal of the
//! eliminated atom it contains, so the eliminated atom's value is reconstructible from any
//! solution of the remaining clauses.

use crate::{
    algebra,
    misc::log::targets::{self},
    postsolve::Postsolver,
    presolve::Presolver,
    structures::{
        clause::Clause,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

impl Presolver {
    /// Tries to eliminate the atom of `x` by clause distribution, returning true exactly when the
    /// atom was eliminated.
    ///
    /// Returns an error if the formula is proven unsatisfiable, by the resolvant of two unit
    /// clauses being empty.
    ///
    /// Exposed so a single elimination step can be tested without running the full fixpoint loop.
    pub fn cross_product(
        &mut self,
        x: CLiteral,
        postsolver: &mut Postsolver,
    ) -> Result<bool, err::PresolveError> {
        let not_x = x.negate();

        let positive_count = self.occurrences.live_count(&x);
        let negative_count = self.occurrences.live_count(&not_x);

        if positive_count == 0 && negative_count == 0 {
            return Ok(false);
        }

        // Cap the work spent deciding whether the atom is worth eliminating.
        if positive_count > 1
            && negative_count > 1
            && positive_count * negative_count > self.config.bve_occurrence_limit
        {
            return Ok(false);
        }

        // The weighted size of what elimination would replace.
        let clause_weight = self.config.bve_clause_weight;
        let mut replaced_size = 0;
        for side in [x, not_x] {
            for ci in self.occurrences.list(&side) {
                if self.clause_contains(*ci, &side) {
                    replaced_size += clause_weight + self.clauses[*ci as usize].size();
                }
            }
        }

        // The weighted size of the resolvants, abandoning the atom as soon as it is exceeded.
        let mut resolvant_size = 0;
        for ci in self.occurrences.list(&x) {
            if !self.clause_contains(*ci, &x) {
                continue;
            }
            for cj in self.occurrences.list(&not_x) {
                if !self.clause_contains(*cj, &not_x) {
                    continue;
                }
                let a = &self.clauses[*ci as usize];
                let b = &self.clauses[*cj as usize];
                if let Some(size) = algebra::compute_resolvant_size(x, a, b) {
                    resolvant_size += clause_weight + size;
                    if resolvant_size > replaced_size {
                        return Ok(false);
                    }
                }
            }
        }

        // Committed. Materialize the resolvants, then drop every clause mentioning the atom.
        let mut resolvants = Vec::new();
        for ci in self.occurrences.list(&x) {
            if !self.clause_contains(*ci, &x) {
                continue;
            }
            for cj in self.occurrences.list(&not_x) {
                if !self.clause_contains(*cj, &not_x) {
                    continue;
                }
                let a = &self.clauses[*ci as usize];
                let b = &self.clauses[*cj as usize];
                if let Some(resolvant) = algebra::compute_resolvant(x, a, b) {
                    if resolvant.is_empty() {
                        return Err(err::PresolveError::Unsatisfiable);
                    }
                    resolvants.push(resolvant);
                }
            }
        }

        log::debug!(
            target: targets::ELIMINATION,
            "Atom {} eliminated: {} clauses replaced by {} resolvants",
            x.atom(),
            positive_count + negative_count,
            resolvants.len(),
        );

        self.remove_and_register_all_containing(x, postsolver);
        self.remove_and_register_all_containing(not_x, postsolver);

        for resolvant in resolvants {
            let _ = self.store(resolvant);
        }

        Ok(true)
    }
}
