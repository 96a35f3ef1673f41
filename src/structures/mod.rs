//! Key structures, such as literals and clauses.
//!
//! Most structures are made of a trait to capture the key features of the structure and a
//! 'canonical' implementation of the trait. Use of a trait or its canonical implementation within
//! the library is situational.
//!
//! A formula 𝐅 is a set of [clauses](clause), interpreted as the conjunction of those clauses.
//! The formula held by a [presolver](crate::presolve) is always *equisatisfiable* with the formula
//! given to it, and a [postsolver](crate::postsolve) bridges the gap between the two: a solution
//! to the presolved formula extends to a solution of the given formula by replaying the log of
//! simplifications backwards.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
