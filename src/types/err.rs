//! Error types used in the library.
//!
//! - Unsatisfiability is *expected* from time to time, and is reported through these types rather
//!   than by panic: deriving the empty clause during presolving or probing proves the formula has
//!   no solution, and the caller should report as much upward.
//! - Violations of a caller contract (e.g. fixing a literal against an already recorded value, or
//!   handing unsorted clauses to the [algebra](crate::algebra) routines) are programming errors
//!   and are asserted, not returned.
//!
//! Names of the error enums overlap with corresponding structs, so throughout the library
//! `err::{self}` is used to prefix use of the types with `err::`.

/// A general error, wrapping the error of some specific part of the library.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Presolve(PresolveError),
    Probe(ProbeError),
}

/// Noted errors during presolving.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PresolveError {
    /// The empty clause was derived: the formula is unsatisfiable.
    ///
    /// Once returned the clause database of the presolver is no longer meaningful, and must not
    /// be used further except to report unsatisfiability upward.
    Unsatisfiable,
}

impl From<PresolveError> for ErrorKind {
    fn from(e: PresolveError) -> Self {
        ErrorKind::Presolve(e)
    }
}

/// Noted errors during probing for equivalent literals.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProbeError {
    /// Some literal and its negation were found to be equivalent: the formula is unsatisfiable.
    Unsatisfiable,
}

impl From<ProbeError> for ErrorKind {
    fn from(e: ProbeError) -> Self {
        ErrorKind::Probe(e)
    }
}
