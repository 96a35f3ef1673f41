//! The boundary to the companion search solver.
//!
//! Presolving does not search, does not decide satisfiability, and does not implement unit
//! propagation. Those belong to a search solver, which this library interacts with through the
//! [SearchSolver] trait alone:
//!
//! - [Presolver::load_problem_into_solver](crate::presolve::Presolver::load_problem_into_solver)
//!   hands the reduced formula over for solving.
//! - [Postsolver::extract_and_postsolve_solution](crate::postsolve::Postsolver::extract_and_postsolve_solution)
//!   reads the assignment the solver found.
//! - [probing](crate::probing) drives the solver's propagation to discover equivalent literals.

use crate::structures::{atom::Atom, clause::CClause, literal::CLiteral};

/// The capabilities the presolving layer requires of a search solver.
pub trait SearchSolver {
    /// The count of atoms known to the solver.
    fn atom_count(&self) -> usize;

    /// Adds a clause to the solver, growing the atom count as needed.
    fn add_clause(&mut self, clause: CClause);

    /// Some value of `atom` in the solver's current assignment, or otherwise nothing.
    ///
    /// After a satisfiable solve, every atom is expected to have some value.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// The literals the solver holds as true independent of any assumption or decision.
    fn fixed_literals(&self) -> Vec<CLiteral>;

    /// Propagates `assumption` from an otherwise clean state.
    ///
    /// Returns the literals (other than `assumption`) forced true by the assumption, or `None`
    /// when the assumption leads to a conflict. The solver state is unchanged either way.
    fn propagate(&mut self, assumption: CLiteral) -> Option<Vec<CLiteral>>;
}
