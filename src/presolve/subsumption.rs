//! The simplification pass: subsumption and self-subsuming resolution.
//!
//! Processing a clause *a* looks for clauses *b* which *a* subsumes (remove *b*) or strengthens by
//! self-subsumption (delete one literal of *b*). Candidates must share, up to one negation, every
//! literal of *a*, so the search is bounded by scanning only the occurrence lists of *a*'s least
//! occurring literal and of its negation, a cost heuristic from the original presolving
//! literature. Both scans compact stale occurrence entries in passing, settling the lazy part of
//! the [occurrence list](crate::presolve::occurrence) bargain.

use crate::{
    algebra::{self, Simplification},
    misc::log::targets::{self},
    presolve::{ClauseIndex, Presolver},
    structures::{clause::Clause, literal::Literal},
    types::err::{self},
};

impl Presolver {
    /// Takes the clause at `clause_index` and simplifies the clauses it subsumes or strengthens,
    /// queueing any strengthened clause for processing in turn.
    ///
    /// Returns an error if the formula is proven unsatisfiable, by some clause strengthening to
    /// empty.
    ///
    /// Exposed so a single simplification step can be tested without running the full fixpoint
    /// loop.
    pub fn process_clause_to_simplify_others(
        &mut self,
        clause_index: ClauseIndex,
    ) -> Result<(), err::PresolveError> {
        // Detach the clause so the borrow checker permits mutation of its peers. The clause is
        // restored before returning, except on proof of unsatisfiability.
        let clause = std::mem::take(&mut self.clauses[clause_index as usize]);
        if clause.is_empty() {
            return Ok(());
        }

        log::trace!(target: targets::SUBSUMPTION, "Processing {}", clause.as_string());
        let pivot = self.literal_with_shortest_occurrence_list(&clause);

        // Clauses containing the pivot may be subsumed or strengthened on another literal.
        let list = self.occurrences.take_list(&pivot);
        let mut compacted = Vec::with_capacity(list.len());

        for ci in list {
            if ci == clause_index {
                // The detached clause itself: live, just not at home right now.
                compacted.push(ci);
                continue;
            }
            if !self.clause_contains(ci, &pivot) {
                // Stale entry: removed, or strengthened out of the pivot. Compact away.
                continue;
            }

            match algebra::simplify_clause(&clause, &mut self.clauses[ci as usize]) {
                None => {}

                Some(Simplification::Subsumed) => {
                    log::trace!(target: targets::SUBSUMPTION, "{ci} subsumed by {clause_index}");
                    self.remove(ci);
                    continue;
                }

                Some(Simplification::Strengthened(literal)) => {
                    log::trace!(target: targets::SUBSUMPTION, "{ci} strengthened on {literal}");
                    let removed = literal.negate();
                    self.occurrences.note_removal(&removed);
                    self.refresh_elimination_weight(removed.atom());

                    if self.clauses[ci as usize].is_empty() {
                        self.clauses[clause_index as usize] = clause;
                        self.occurrences.set_list(&pivot, compacted);
                        return Err(err::PresolveError::Unsatisfiable);
                    }
                    self.enqueue_clause(ci);
                }
            }

            compacted.push(ci);
        }

        self.occurrences.set_list(&pivot, compacted);
        self.refresh_elimination_weight(pivot.atom());

        // Clauses containing the negated pivot can only be strengthened, on the pivot itself.
        let negated_pivot = pivot.negate();
        let list = self.occurrences.take_list(&negated_pivot);
        let mut compacted = Vec::with_capacity(list.len());

        for ci in list {
            if !self.clause_contains(ci, &negated_pivot) {
                continue;
            }

            match algebra::simplify_clause(&clause, &mut self.clauses[ci as usize]) {
                None => {}

                Some(Simplification::Subsumed) => {
                    // A subsumed clause would contain the pivot, and these contain its negation.
                    unreachable!()
                }

                Some(Simplification::Strengthened(literal)) => {
                    debug_assert_eq!(literal, pivot);
                    log::trace!(
                        target: targets::SUBSUMPTION,
                        "{ci} strengthened on the pivot {pivot}",
                    );

                    if self.clauses[ci as usize].is_empty() {
                        self.clauses[clause_index as usize] = clause;
                        self.occurrences.set_list(&negated_pivot, compacted);
                        return Err(err::PresolveError::Unsatisfiable);
                    }
                    self.enqueue_clause(ci);
                    // The clause lost the negated pivot, so it leaves this list.
                    continue;
                }
            }

            compacted.push(ci);
        }

        self.occurrences.set_list(&negated_pivot, compacted);
        self.refresh_elimination_weight(pivot.atom());

        self.clauses[clause_index as usize] = clause;
        Ok(())
    }
}
