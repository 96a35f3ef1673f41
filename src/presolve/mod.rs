/*!
The presolver: a clause database and the logic to simplify it.

A [Presolver] holds a formula as a set of clauses and presolves it by a series of subsumption,
self-subsuming resolution, and variable elimination by clause distribution, roughly following
"Effective Preprocessing in SAT through Variable and Clause Elimination" (Eén and Biere, SAT 2005).

At a high level:
- Clauses are added through [add_clause](Presolver::add_clause), which canonicalizes and drops
  trivially satisfied clauses.
- [presolve](Presolver::presolve) simplifies to fixpoint (or to a configured work budget, or to a
  proof of unsatisfiability), updating a [Postsolver](crate::postsolve::Postsolver) so solutions
  of the simplified formula lift back to the original.
- [variable_mapping](Presolver::variable_mapping) and
  [load_problem_into_solver](Presolver::load_problem_into_solver) hand the simplified formula,
  re-indexed to a dense variable range, to a search solver.

Clause storage is index-stable: a removed clause becomes empty, and its index is never reused or
compacted during a run. Occurrence lists and the processing queue hold clause indicies across
removals because of this, and stale occurrences are cleaned lazily (see [occurrence]).

Note, the presolver does propagate unit clauses, though far less efficiently than the propagation
of a search solver. It is better to fix variables with a solver before loading a problem here.

The presolver holds no value for any atom: fixed values only ever live in the postsolver.
*/

pub mod occurrence;

mod elimination;
mod subsumption;
mod transfer;

use std::collections::VecDeque;

use crate::{
    config::Config,
    generic::index_heap::IndexHeap,
    misc::log::targets::{self},
    postsolve::Postsolver,
    structures::{
        atom::Atom,
        clause::{self, CClause, Canonical, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

use occurrence::OccurrenceLists;

/// The index of a clause in a presolver.
///
/// Indicies are stable for the duration of a presolve run: a removed clause keeps its index, and
/// becomes empty.
pub type ClauseIndex = u32;

/// The outcome of adding a clause to a presolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was stored.
    Added,

    /// The clause contains a complementary pair of literals, and was dropped as trivially
    /// satisfied.
    Trivial,
}

/// A set of clauses, simplified in place by [presolve](Presolver::presolve).
pub struct Presolver {
    /// Configuration, read-only after construction.
    config: Config,

    /// The set of all clauses, indexed by [ClauseIndex]. An empty clause has been removed.
    clauses: Vec<CClause>,

    /// Occurrence lists with lazily maintained live counts.
    occurrences: OccurrenceLists,

    /// Clauses on which to call
    /// [process_clause_to_simplify_others](Presolver::process_clause_to_simplify_others),
    /// with a membership flag per clause to avoid duplicate queue entries.
    process_queue: VecDeque<ClauseIndex>,
    queued: Vec<bool>,

    /// Atoms to attempt elimination on, lightest (least occurring) first.
    elimination_queue: IndexHeap<f64>,

    /// True only while `presolve` maintains the elimination queue.
    elimination_queue_live: bool,

    /// Equivalent literal mapping, indexed by literal index. Empty means the identity.
    equivalence_mapping: Vec<CLiteral>,

    /// A count of clauses dropped as trivially satisfied.
    trivial_clause_count: usize,

    /// The dense variable mapping, computed when the clauses are transferred out.
    cached_mapping: Option<Vec<Option<Atom>>>,
}

impl Presolver {
    /// A fresh presolver, configured by `config`.
    pub fn new(config: Config) -> Self {
        Presolver {
            config,
            clauses: Vec::default(),
            occurrences: OccurrenceLists::default(),
            process_queue: VecDeque::default(),
            queued: Vec::default(),
            elimination_queue: IndexHeap::default(),
            elimination_queue_live: false,
            equivalence_mapping: Vec::default(),
            trivial_clause_count: 0,
            cached_mapping: None,
        }
    }

    /// Registers a mapping to encode equivalent literals, as found by
    /// [probing](crate::probing::probe_and_find_equivalent_literals).
    ///
    /// Every clause added after this call is rewritten literal by literal through the mapping.
    /// The mapping must be set before the clauses referencing merged atoms are added.
    pub fn set_equivalent_literal_mapping(&mut self, mapping: Vec<CLiteral>) {
        self.equivalence_mapping = mapping;
    }

    /// Adds a clause, canonicalizing first: literals are sorted, duplicates collapse, and a
    /// clause containing a complementary pair is dropped (and counted) as trivially satisfied.
    ///
    /// An (effectively) empty clause witnesses unsatisfiability.
    pub fn add_clause(&mut self, clause: CClause) -> Result<ClauseOk, err::PresolveError> {
        let mut clause = clause;

        if !self.equivalence_mapping.is_empty() {
            for literal in clause.iter_mut() {
                *literal = self
                    .equivalence_mapping
                    .get(literal.index())
                    .copied()
                    .unwrap_or(*literal);
            }
        }

        match clause::canonicalize(&mut clause) {
            Canonical::Trivial => {
                self.trivial_clause_count += 1;
                Ok(ClauseOk::Trivial)
            }

            Canonical::Clause => {
                if clause.is_empty() {
                    return Err(err::PresolveError::Unsatisfiable);
                }
                let _ = self.store(clause);
                Ok(ClauseOk::Added)
            }
        }
    }

    /// Adds the binary clause `a ∨ b`.
    pub fn add_binary_clause(
        &mut self,
        a: CLiteral,
        b: CLiteral,
    ) -> Result<ClauseOk, err::PresolveError> {
        self.add_clause(vec![a, b])
    }

    /// Presolves the problem currently loaded.
    ///
    /// Alternates simplification passes (subsumption and self-subsuming resolution over every
    /// queued clause) with elimination passes (bounded variable elimination, lightest atom first)
    /// until both queues are empty, the configured work budget runs out, or the formula is proven
    /// unsatisfiable.
    ///
    /// Every removed clause which is not redundant is registered with `postsolver`, so a solution
    /// of the presolved formula lifts back to the original.
    pub fn presolve(&mut self, postsolver: &mut Postsolver) -> Result<(), err::PresolveError> {
        let mut budget = self.config.work_budget.unwrap_or(u64::MAX);

        self.initialize_elimination_queue();

        // Queue every live clause, including any processed by an earlier call.
        for ci in 0..self.clauses.len() {
            if !self.clauses[ci].is_empty() {
                self.enqueue_clause(ci as ClauseIndex);
            }
        }

        self.process_all_clauses(&mut budget)?;

        while let Some(index) = self.elimination_queue.pop_min() {
            if budget == 0 {
                log::info!(target: targets::PRESOLVE, "Work budget exhausted");
                break;
            }
            budget -= 1;

            let x = CLiteral::new(index as Atom, true);
            if self.cross_product(x, postsolver)? {
                self.process_all_clauses(&mut budget)?;
            }
        }

        self.elimination_queue_live = false;
        log::info!(
            target: targets::PRESOLVE,
            "Fixpoint: {} of {} clauses live, {} trivial dropped",
            self.live_clause_count(),
            self.clause_count(),
            self.trivial_clause_count,
        );
        Ok(())
    }

    /// All the clauses managed by the presolver, removed (empty) clauses included.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// A count of the live clauses.
    pub fn live_clause_count(&self) -> usize {
        self.clauses.iter().filter(|clause| !clause.is_empty()).count()
    }

    /// The clause at `ci`. Empty when the clause has been removed.
    pub fn clause(&self, ci: ClauseIndex) -> &CClause {
        &self.clauses[ci as usize]
    }

    /// The count of atoms, derived from the clauses added.
    pub fn atom_count(&self) -> usize {
        self.occurrences.atom_count()
    }

    /// A count of clauses dropped as trivially satisfied.
    pub fn trivial_clause_count(&self) -> usize {
        self.trivial_clause_count
    }
}

// Internal methods on the clause database.
impl Presolver {
    /// Stores a canonical, non-empty clause: registers occurrences and queues the clause for
    /// simplification.
    ///
    /// Any instance of storing a clause should use this method, as it maintains the occurrence
    /// lists and both queues.
    fn store(&mut self, clause: CClause) -> ClauseIndex {
        debug_assert!(!clause.is_empty() && clause::is_canonical(&clause));

        let ci = self.clauses.len() as ClauseIndex;
        for literal in clause.literals() {
            self.occurrences.register(literal, ci);
        }
        for atom in clause.atoms() {
            self.refresh_elimination_weight(atom);
        }

        self.clauses.push(clause);
        self.queued.push(true);
        self.process_queue.push_back(ci);

        ci
    }

    /// Removes the clause at `ci`: the slot is emptied, live counts drop, and the elimination
    /// queue is refreshed. Stale occurrence entries are left for lazy cleaning.
    fn remove(&mut self, ci: ClauseIndex) {
        let clause = std::mem::take(&mut self.clauses[ci as usize]);
        debug_assert!(!clause.is_empty());

        for literal in clause.literals() {
            self.occurrences.note_removal(literal);
        }
        for atom in clause.atoms() {
            self.refresh_elimination_weight(atom);
        }
    }

    /// As [remove](Presolver::remove), but registers the clause with the postsolver, associated
    /// with its literal `x`, so the removal is reversible.
    fn remove_and_register_for_postsolve(
        &mut self,
        ci: ClauseIndex,
        x: CLiteral,
        postsolver: &mut Postsolver,
    ) {
        let clause = std::mem::take(&mut self.clauses[ci as usize]);
        debug_assert!(clause.contains(&x));

        for literal in clause.literals() {
            self.occurrences.note_removal(literal);
        }
        for atom in clause.atoms() {
            self.refresh_elimination_weight(atom);
        }

        postsolver.add(x, clause);
    }

    /// Removes every live clause containing `x`, registering each with the postsolver.
    fn remove_and_register_all_containing(&mut self, x: CLiteral, postsolver: &mut Postsolver) {
        let list = self.occurrences.take_list(&x);
        for ci in &list {
            if self.clause_contains(*ci, &x) {
                self.remove_and_register_for_postsolve(*ci, x, postsolver);
            }
        }
        debug_assert_eq!(self.occurrences.live_count(&x), 0);
        self.occurrences.set_list(&x, Vec::default());
    }

    /// Whether the clause at `ci` is live and contains `literal`.
    ///
    /// This is the liveness test for an occurrence list entry: a clause strengthened on a literal
    /// stays in that literal's list until the list is next compacted, so presence in a list
    /// guarantees nothing by itself.
    fn clause_contains(&self, ci: ClauseIndex, literal: &CLiteral) -> bool {
        let clause = &self.clauses[ci as usize];
        !clause.is_empty() && clause.binary_search(literal).is_ok()
    }

    /// Queues `ci` for simplification, if not already queued.
    fn enqueue_clause(&mut self, ci: ClauseIndex) {
        if !self.queued[ci as usize] {
            self.queued[ci as usize] = true;
            self.process_queue.push_back(ci);
        }
    }

    /// Calls [process_clause_to_simplify_others](Presolver::process_clause_to_simplify_others) on
    /// every queued clause, emptying the queue. While a clause is processed new clauses may be
    /// queued.
    fn process_all_clauses(&mut self, budget: &mut u64) -> Result<(), err::PresolveError> {
        while let Some(ci) = self.process_queue.pop_front() {
            self.queued[ci as usize] = false;
            if *budget == 0 {
                log::info!(target: targets::PRESOLVE, "Work budget exhausted");
                return Ok(());
            }
            *budget -= 1;

            self.process_clause_to_simplify_others(ci)?;
        }
        Ok(())
    }

    /// Fills the elimination queue with every atom, weighted by combined occurrence counts.
    fn initialize_elimination_queue(&mut self) {
        for atom in 0..self.atom_count() as Atom {
            self.elimination_queue
                .submit(atom as usize, self.elimination_weight(atom));
        }
        self.elimination_queue_live = true;
    }

    /// The elimination weight of `atom`: the combined live occurrence counts of its literals.
    /// Elimination cost grows with occurrence counts, so lighter atoms are tried first.
    fn elimination_weight(&self, atom: Atom) -> f64 {
        let positive = self.occurrences.live_count(&CLiteral::new(atom, true));
        let negative = self.occurrences.live_count(&CLiteral::new(atom, false));
        (positive + negative) as f64
    }

    /// Re-places `atom` on the elimination queue under its current weight.
    fn refresh_elimination_weight(&mut self, atom: Atom) {
        if self.elimination_queue_live {
            self.elimination_queue
                .submit(atom as usize, self.elimination_weight(atom));
        }
    }

    /// The literal of `clause` which occurs in the fewest live clauses.
    fn literal_with_shortest_occurrence_list(&self, clause: &CClause) -> CLiteral {
        let mut literals = clause.iter();
        let mut shortest = *literals.next().expect("clauses in the database are never empty");
        for literal in literals {
            if self.occurrences.live_count(literal) < self.occurrences.live_count(&shortest) {
                shortest = *literal;
            }
        }
        shortest
    }
}
