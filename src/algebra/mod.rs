/*!
Clause algebra: subsumption, self-subsuming resolution, and resolvants.

The routines here are pure functions over clauses in [canonical form](crate::structures::clause)
(strictly sorted, no repeated atom). Canonical form is what makes each of them a single merge walk
over its inputs; it is a *precondition*, checked in debug builds only.

Terminology:
- Clause *a* **subsumes** clause *b* when *a* ⊆ *b* (as sets of literals). Then *b* is redundant
  given *a*.
- Clause *b* is **strengthened by self-subsumption** using *a* when *a* with exactly one literal
  negated is a subset of *b*. Resolving *a* and *b* on that literal then yields *b* minus the
  negated literal, so the literal may simply be deleted from *b*.
- The **resolvant** of *a* and *b* on a literal *x* (with *x* ∈ *a*, ¬*x* ∈ *b*) is the union of
  *a* and *b* with *x* and ¬*x* removed. A resolvant containing some literal and its negation is
  trivially true and useless.
*/

use crate::structures::{
    clause::{self, CClause},
    literal::{CLiteral, Literal},
};

/// How clause `a` relates `b`, as reported by [simplify_clause].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Simplification {
    /// `a` is a subset of `b`: `b` is subsumed.
    Subsumed,

    /// `a` with the contained literal negated is a subset of `b`: `b` was strengthened by
    /// removing the negation of the literal.
    Strengthened(CLiteral),
}

/// Tests whether `a` subsumes `b`, or `b` may be strengthened by self-subsumption using `a`.
///
/// Returns:
/// - `Some(Simplification::Subsumed)` when `a` ⊆ `b`. `b` is untouched.
/// - `Some(Simplification::Strengthened(l))` when `a` with `l` negated is a subset of `b`.
///   As a side effect the negation of `l` has been removed from `b`.
/// - `None` when neither relation holds. `b` is untouched.
///
/// Both clauses must be in canonical form.
pub fn simplify_clause(a: &CClause, b: &mut CClause) -> Option<Simplification> {
    debug_assert!(clause::is_canonical(a) && clause::is_canonical(b));

    if a.len() > b.len() {
        return None;
    }

    let mut opposite: Option<(usize, CLiteral)> = None;
    let mut ib = 0;

    'literals_of_a: for la in a {
        while ib < b.len() {
            let lb = b[ib];

            if lb.atom() == la.atom() {
                ib += 1;
                if lb.polarity() == la.polarity() {
                    continue 'literals_of_a;
                }
                // The one permitted negated occurrence.
                if opposite.is_some() {
                    return None;
                }
                opposite = Some((ib - 1, *la));
                continue 'literals_of_a;
            }

            if lb.atom() > la.atom() {
                return None;
            }
            ib += 1;
        }
        // `b` exhausted with `la` unmatched.
        return None;
    }

    match opposite {
        None => Some(Simplification::Subsumed),
        Some((index, literal)) => {
            let _ = b.remove(index);
            Some(Simplification::Strengthened(literal))
        }
    }
}

/// Computes the resolvant of `a` and `b` obtained by performing resolution on `x`.
///
/// `x` must be a literal of `a` and the negation of `x` a literal of `b`.
/// Returns `None` when the resolvant is trivially true, and otherwise the resolvant, in canonical
/// form.
pub fn compute_resolvant(x: CLiteral, a: &CClause, b: &CClause) -> Option<CClause> {
    debug_assert!(a.binary_search(&x).is_ok());
    debug_assert!(b.binary_search(&x.negate()).is_ok());

    let mut out = Vec::with_capacity(a.len() + b.len() - 2);
    let not_x = x.negate();

    let (mut ia, mut ib) = (0, 0);
    loop {
        if ia < a.len() && a[ia] == x {
            ia += 1;
            continue;
        }
        if ib < b.len() && b[ib] == not_x {
            ib += 1;
            continue;
        }

        match (a.get(ia), b.get(ib)) {
            (None, None) => break,

            (Some(la), None) => {
                out.push(*la);
                ia += 1;
            }

            (None, Some(lb)) => {
                out.push(*lb);
                ib += 1;
            }

            (Some(la), Some(lb)) => {
                if la.atom() == lb.atom() {
                    if la.polarity() != lb.polarity() {
                        return None;
                    }
                    out.push(*la);
                    ia += 1;
                    ib += 1;
                } else if la < lb {
                    out.push(*la);
                    ia += 1;
                } else {
                    out.push(*lb);
                    ib += 1;
                }
            }
        }
    }

    Some(out)
}

/// As [compute_resolvant], returning only the size of the resolvant without materializing it.
///
/// Returns `None` exactly when [compute_resolvant] would.
pub fn compute_resolvant_size(x: CLiteral, a: &CClause, b: &CClause) -> Option<usize> {
    debug_assert!(a.binary_search(&x).is_ok());
    debug_assert!(b.binary_search(&x.negate()).is_ok());

    let mut size = 0;
    let not_x = x.negate();

    let (mut ia, mut ib) = (0, 0);
    loop {
        if ia < a.len() && a[ia] == x {
            ia += 1;
            continue;
        }
        if ib < b.len() && b[ib] == not_x {
            ib += 1;
            continue;
        }

        match (a.get(ia), b.get(ib)) {
            (None, None) => break,

            (Some(_), None) => {
                size += 1;
                ia += 1;
            }

            (None, Some(_)) => {
                size += 1;
                ib += 1;
            }

            (Some(la), Some(lb)) => {
                if la.atom() == lb.atom() {
                    if la.polarity() != lb.polarity() {
                        return None;
                    }
                    size += 1;
                    ia += 1;
                    ib += 1;
                } else if la < lb {
                    size += 1;
                    ia += 1;
                } else {
                    size += 1;
                    ib += 1;
                }
            }
        }
    }

    Some(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(value: i32) -> CLiteral {
        CLiteral::from(value)
    }

    fn sorted(mut clause: CClause) -> CClause {
        clause.sort_unstable();
        clause
    }

    #[test]
    fn subsumption() {
        let a = sorted(vec![lit(1), lit(3)]);
        let mut b = sorted(vec![lit(1), lit(2), lit(3)]);

        assert_eq!(simplify_clause(&a, &mut b), Some(Simplification::Subsumed));
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn self_subsumption_strengthens() {
        let a = sorted(vec![lit(1), lit(3)]);
        let mut b = sorted(vec![lit(1), lit(2), lit(-3)]);

        assert_eq!(
            simplify_clause(&a, &mut b),
            Some(Simplification::Strengthened(lit(3))),
        );
        assert_eq!(b, sorted(vec![lit(1), lit(2)]));
    }

    #[test]
    fn unit_strengthens_to_empty() {
        let a = vec![lit(1)];
        let mut b = vec![lit(-1)];

        assert_eq!(
            simplify_clause(&a, &mut b),
            Some(Simplification::Strengthened(lit(1))),
        );
        assert!(b.is_empty());
    }

    #[test]
    fn no_relation() {
        let a = sorted(vec![lit(1), lit(4)]);
        let mut b = sorted(vec![lit(1), lit(2), lit(3)]);
        assert_eq!(simplify_clause(&a, &mut b), None);

        // Two negated occurrences are a resolvant, not a strengthening.
        let a = sorted(vec![lit(1), lit(2)]);
        let mut b = sorted(vec![lit(-1), lit(-2), lit(3)]);
        assert_eq!(simplify_clause(&a, &mut b), None);
        assert_eq!(b.len(), 3);

        // A longer clause never simplifies a shorter one.
        let a = sorted(vec![lit(1), lit(2), lit(3)]);
        let mut b = sorted(vec![lit(1), lit(2)]);
        assert_eq!(simplify_clause(&a, &mut b), None);
    }

    #[test]
    fn resolvant_plain() {
        let a = sorted(vec![lit(1), lit(2)]);
        let b = sorted(vec![lit(-1), lit(3)]);

        let resolvant = compute_resolvant(lit(1), &a, &b);
        assert_eq!(resolvant, Some(sorted(vec![lit(2), lit(3)])));
        assert_eq!(compute_resolvant_size(lit(1), &a, &b), Some(2));
    }

    #[test]
    fn resolvant_collapses_duplicates() {
        let a = sorted(vec![lit(1), lit(2), lit(4)]);
        let b = sorted(vec![lit(-1), lit(2), lit(5)]);

        let resolvant = compute_resolvant(lit(1), &a, &b);
        assert_eq!(resolvant, Some(sorted(vec![lit(2), lit(4), lit(5)])));
        assert_eq!(compute_resolvant_size(lit(1), &a, &b), Some(3));
    }

    #[test]
    fn resolvant_tautology() {
        let a = sorted(vec![lit(1), lit(2)]);
        let b = sorted(vec![lit(-1), lit(-2)]);

        assert_eq!(compute_resolvant(lit(1), &a, &b), None);
        assert_eq!(compute_resolvant_size(lit(1), &a, &b), None);
    }

    #[test]
    fn resolvant_of_units_is_empty() {
        let a = vec![lit(1)];
        let b = vec![lit(-1)];

        assert_eq!(compute_resolvant(lit(1), &a, &b), Some(vec![]));
        assert_eq!(compute_resolvant_size(lit(1), &a, &b), Some(0));
    }
}
