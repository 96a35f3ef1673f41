/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [presolve](crate::presolve) fixpoint loop.
    pub const PRESOLVE: &str = "presolve";

    /// Logs related to subsumption and self-subsuming resolution.
    pub const SUBSUMPTION: &str = "subsumption";

    /// Logs related to bounded variable elimination.
    pub const ELIMINATION: &str = "elimination";

    /// Logs related to [postsolving](crate::postsolve).
    pub const POSTSOLVE: &str = "postsolve";

    /// Logs related to [probing](crate::probing) for equivalent literals.
    pub const PROBE: &str = "probe";
}
