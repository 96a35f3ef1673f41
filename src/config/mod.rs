/*!
Configuration of a presolver.

All configuration is read once, when the presolver is built, and consulted by the simplification
heuristics during [presolve](crate::presolve::Presolver::presolve). There is no ambient or global
configuration state.
*/

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Bounded variable elimination of an atom is skipped when the product of the occurrence
    /// counts of its two literals exceeds this limit (and both counts exceed one).
    ///
    /// The product bounds the number of resolvant candidates examined, so this is a cap on the
    /// work spent deciding whether a single atom is worth eliminating.
    pub bve_occurrence_limit: usize,

    /// The weight of a clause, against one per literal, when comparing the size of the resolvants
    /// of an elimination to the size of the clauses the elimination would replace.
    ///
    /// A higher weight favours fewer clauses over fewer literals.
    pub bve_clause_weight: usize,

    /// An upper bound on the work of a single [presolve](crate::presolve::Presolver::presolve)
    /// call, counting one unit per clause processed for simplification and per attempted
    /// elimination. `None` runs to fixpoint.
    ///
    /// Presolving is sound at any point, so exhausting the budget ends the call early without
    /// error: the clause database is simply less reduced than it might have been.
    pub work_budget: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bve_occurrence_limit: 500,
            bve_clause_weight: 3,
            work_budget: None,
        }
    }
}
