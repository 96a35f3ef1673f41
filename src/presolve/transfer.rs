//! Transferring a presolved problem out: dense re-indexing and the hand-off to a search solver.

use crate::{
    misc::log::targets::{self},
    presolve::Presolver,
    solver::SearchSolver,
    structures::{
        atom::Atom,
        clause::Clause,
        literal::{CLiteral, Literal},
    },
};

impl Presolver {
    /// The mapping from the atoms of the problem as added to a dense range of fresh atoms, with
    /// `None` for each atom no live clause mentions.
    ///
    /// Computed on first call and cached, so the mapping given to a
    /// [Postsolver](crate::postsolve::Postsolver) and the mapping applied by
    /// [load_problem_into_solver](Presolver::load_problem_into_solver) agree. Presolving again
    /// invalidates nothing here, as the cache is only set once the clauses are on their way out.
    pub fn variable_mapping(&mut self) -> &[Option<Atom>] {
        if self.cached_mapping.is_none() {
            self.cached_mapping = Some(self.compute_variable_mapping());
        }
        self.cached_mapping.as_deref().expect("the cache was just filled")
    }

    /// Re-indexes each live clause through [variable_mapping](Presolver::variable_mapping) and
    /// adds it to `solver`, then releases all clause storage.
    ///
    /// The caller is responsible for passing the same mapping to the postsolver, *before* any
    /// further postsolve records are made.
    pub fn load_problem_into_solver(&mut self, solver: &mut impl SearchSolver) {
        if self.cached_mapping.is_none() {
            self.cached_mapping = Some(self.compute_variable_mapping());
        }

        let clauses = std::mem::take(&mut self.clauses);
        let mapping = self.cached_mapping.as_deref().expect("the cache was just filled");
        let mut transferred = 0;
        for clause in clauses {
            if clause.is_empty() {
                continue;
            }

            let mut fresh = Vec::with_capacity(clause.size());
            for literal in clause.literals() {
                let atom = mapping[literal.atom() as usize]
                    .expect("atoms of live clauses are in the image of the mapping");
                fresh.push(CLiteral::new(atom, literal.polarity()));
            }
            // Dense re-indexing need not preserve atom order.
            fresh.sort_unstable();

            solver.add_clause(fresh);
            transferred += 1;
        }

        log::info!(target: targets::PRESOLVE, "{transferred} clauses transferred to the solver");

        self.occurrences.clear();
        self.process_queue.clear();
        self.queued.clear();
    }

    /// Walks the live clauses, mapping each mentioned atom to the next free dense index.
    fn compute_variable_mapping(&self) -> Vec<Option<Atom>> {
        let mut mapping: Vec<Option<Atom>> = vec![None; self.atom_count()];

        let mut next: Atom = 0;
        for clause in &self.clauses {
            for atom in clause.atoms() {
                if mapping[atom as usize].is_none() {
                    mapping[atom as usize] = Some(next);
                    next += 1;
                }
            }
        }

        mapping
    }
}
