//! A library for presolving boolean formulas written in conjunctive normal form.
//!
//! winnow_sat simplifies a formula before it is handed to a search solver, using a handful of
//! techniques from the literature on preprocessing: subsumption, self-subsuming resolution,
//! bounded variable elimination by clause distribution (following "Effective Preprocessing in SAT
//! through Variable and Clause Elimination", Eén and Biere, SAT 2005), and equivalent literal
//! detection by probing.
//!
//! Simplification is *solution preserving* rather than solution equivalent: a presolved formula
//! may mention fewer atoms, and a solution of the presolved formula is not, directly, a solution
//! of the original.
//! So, every simplification is paired with a record in a [postsolver](crate::postsolve), and once
//! the presolved formula is solved the postsolver lifts the solution back to the original
//! formula.
//!
//! # Orientation
//!
//! The library is designed around two core structures, a [presolver](crate::presolve) and a
//! [postsolver](crate::postsolve), used in sequence:
//!
//! - Clauses are [added](crate::presolve::Presolver::add_clause) to a presolver, which
//!   canonicalizes each and drops any trivially satisfied.
//! - [presolve](crate::presolve::Presolver::presolve) simplifies the clauses to fixpoint, or to a
//!   configured work budget, or to a proof that the formula is unsatisfiable.
//! - The remaining clauses mention some subset of the original atoms, and a
//!   [variable mapping](crate::presolve::Presolver::variable_mapping) re-indexes them to a dense
//!   range. The mapping is applied to the postsolver, and the clauses are
//!   [loaded](crate::presolve::Presolver::load_problem_into_solver) into anything implementing
//!   [SearchSolver](crate::solver::SearchSolver).
//! - A solution found by the solver is passed through
//!   [postsolve_solution](crate::postsolve::Postsolver::postsolve_solution), which replays the
//!   record of simplifications in reverse to obtain a solution of the original formula.
//!
//! [Probing](crate::probing) is a separate, optional, first pass: it requires a search solver
//! able to propagate an assumption, and yields a mapping which collapses equivalent literals.
//! The mapping is [registered](crate::presolve::Presolver::set_equivalent_literal_mapping) with a
//! presolver before the clauses of the formula are added.
//!
//! Useful starting points, then, may be:
//! - The [presolve module](crate::presolve) to inspect the dynamics of simplification.
//! - The [postsolve module](crate::postsolve) for how solutions survive simplification.
//! - The [algebra module](crate::algebra) for the clause-level operations everything rests on.
//! - The [configuration](crate::config) to see which limits are tunable.
//!
//! # Example
//!
//! The formula (p ∨ q) ∧ (p ∨ ¬q) dissolves entirely: self-subsuming resolution strengthens the
//! second clause to p, which subsumes the first, and elimination of p then removes the rest.
//! Postsolving recovers values for both atoms from the empty solution of the empty formula.
//!
//! ```rust
//! # use winnow_sat::config::Config;
//! # use winnow_sat::postsolve::Postsolver;
//! # use winnow_sat::presolve::Presolver;
//! # use winnow_sat::structures::literal::CLiteral;
//! # use winnow_sat::types::err::PresolveError;
//! # fn main() -> Result<(), PresolveError> {
//! let mut presolver = Presolver::new(Config::default());
//! presolver.add_clause(vec![CLiteral::from(1), CLiteral::from(2)])?;
//! presolver.add_clause(vec![CLiteral::from(1), CLiteral::from(-2)])?;
//!
//! let mut postsolver = Postsolver::new(presolver.atom_count());
//! presolver.presolve(&mut postsolver)?;
//! assert_eq!(presolver.live_clause_count(), 0);
//!
//! postsolver.apply_mapping(presolver.variable_mapping());
//! let solution = postsolver.postsolve_solution(&[]);
//! assert_eq!(solution, vec![true, false]);
//! # Ok(())
//! # }
//! ```
//!
//! An unsatisfiable formula, in turn, is detected during the presolve:
//!
//! ```rust
//! # use winnow_sat::config::Config;
//! # use winnow_sat::postsolve::Postsolver;
//! # use winnow_sat::presolve::Presolver;
//! # use winnow_sat::structures::literal::CLiteral;
//! # use winnow_sat::types::err::PresolveError;
//! let mut presolver = Presolver::new(Config::default());
//! let _ = presolver.add_clause(vec![CLiteral::from(1)]);
//! let _ = presolver.add_clause(vec![CLiteral::from(-1)]);
//!
//! let mut postsolver = Postsolver::new(presolver.atom_count());
//! let result = presolver.presolve(&mut postsolver);
//! assert_eq!(result, Err(PresolveError::Unsatisfiable));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made throughout, and a variety of targets are
//! defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [elimination](crate::presolve::Presolver::cross_product) can be filtered
//!   with `RUST_LOG=elimination …` or,
//! - A summary of each presolve without details of the clauses touched can be found with
//!   `RUST_LOG=presolve=info …`

pub mod algebra;
pub mod config;
pub mod postsolve;
pub mod presolve;
pub mod probing;
pub mod solver;
pub mod structures;
pub mod types;

pub mod generic;

pub mod misc;
