/*!
Postsolving: recovering a solution of the original formula from a solution of the presolved one.

Any simplification which removes clauses may update a [Postsolver], and at the end the postsolver
recovers a solution of the initial formula from a solution of the simplified formula.

Two kinds of record are kept, in one ordered log:

- An *add* record pairs a removed clause with one of its literals `x`, and means: if every other
  literal of the clause ends up false, `x` must be set true to satisfy the clause. Bounded
  variable elimination registers every clause it removes this way, as does the equivalence found
  by [probing](crate::probing).
- A *fix* record states a literal is unconditionally true in the original formula.

Reconstruction replays the add records in *reverse* order of insertion, so later simplifications
(whose clauses may mention atoms earlier simplifications removed) are resolved first. Atoms
untouched by any record default to false, an arbitrary legal value.

Whenever the variable set of the problem is re-indexed --- see
[variable_mapping](crate::presolve::Presolver::variable_mapping) --- the postsolver must be told
via [apply_mapping](Postsolver::apply_mapping). Records are translated back to *original* atom
indicies as they arrive, so the log is uniformly in terms of the initial formula.

A postsolver is used exactly once: reconstruction consumes it.
*/

use crate::{
    misc::log::targets::{self},
    solver::SearchSolver,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
        valuation::{AtomValuation, Valuation},
    },
};

/// A log of clause removals and literal fixes, replayable against a solution of the reduced
/// problem to obtain a solution of the original problem.
pub struct Postsolver {
    /// The index into `literals` at which the clause of each add record begins.
    starts: Vec<usize>,

    /// The literals of the clauses of all add records, flattened.
    literals: Vec<CLiteral>,

    /// The associated literal of each add record.
    associated: Vec<CLiteral>,

    /// For each atom of the *current* (most re-indexed) problem, the atom of the original
    /// problem it descends from. Composed across [apply_mapping](Postsolver::apply_mapping) calls.
    reverse_mapping: Vec<Atom>,

    /// Fixed values, over original atoms. During reconstruction this becomes the solution.
    assignment: AtomValuation,
}

impl Postsolver {
    /// A postsolver for a problem over `atom_count` atoms.
    pub fn new(atom_count: usize) -> Self {
        Postsolver {
            starts: Vec::default(),
            literals: Vec::default(),
            associated: Vec::default(),
            reverse_mapping: (0..atom_count as Atom).collect(),
            assignment: vec![None; atom_count],
        }
    }

    /// The count of atoms in the original problem.
    pub fn atom_count(&self) -> usize {
        self.assignment.len()
    }

    /// Records that `clause` was removed in favour of asserting `x` whenever the rest of the
    /// clause is false. `x` must be a literal of `clause`.
    pub fn add(&mut self, x: CLiteral, clause: CClause) {
        assert!(clause.contains(&x), "associated literal not in clause");

        self.starts.push(self.literals.len());
        for literal in clause.literals() {
            let original = self.apply_reverse_mapping(literal);
            self.literals.push(original);
        }
        self.associated.push(self.apply_reverse_mapping(&x));
    }

    /// Records that `x` is unconditionally true in the original problem.
    ///
    /// # Panics
    /// When the atom of `x` was already fixed to the opposite value.
    pub fn fix_literal(&mut self, x: CLiteral) {
        let original = self.apply_reverse_mapping(&x);
        match self.assignment.value_of(original.atom()) {
            None => self.assignment.set_literal(&original),
            Some(value) => {
                assert!(
                    value == original.polarity(),
                    "conflicting fix of atom {}",
                    original.atom(),
                );
            }
        }
    }

    /// Translates a literal of the current problem to the original atom it descends from.
    fn apply_reverse_mapping(&self, literal: &CLiteral) -> CLiteral {
        CLiteral::new(self.reverse_mapping[literal.atom() as usize], literal.polarity())
    }

    /// Declares that the problem was re-indexed by `mapping` (old atom → new atom, `None` for a
    /// removed atom): all subsequent records refer to the new indicies.
    ///
    /// May be called repeatedly; each call is relative to the variable set produced by the
    /// previous call. The mapping may be shorter than that variable set, as rewriting through an
    /// equivalence mapping can leave the highest atoms unmentioned: atoms past the end of the
    /// mapping count as removed. The images of `mapping` must form the dense range
    /// [0, image count).
    pub fn apply_mapping(&mut self, mapping: &[Option<Atom>]) {
        assert!(mapping.len() <= self.reverse_mapping.len());

        let image_count = mapping.iter().flatten().count();
        let mut fresh = vec![Atom::MAX; image_count];
        for (old, image) in mapping.iter().enumerate() {
            if let Some(new) = image {
                fresh[*new as usize] = self.reverse_mapping[old];
            }
        }
        debug_assert!(fresh.iter().all(|atom| *atom != Atom::MAX));

        log::debug!(target: targets::POSTSOLVE, "Mapping applied: {} atoms remain", image_count);
        self.reverse_mapping = fresh;
    }

    /// Extracts the assignment of the given solver and postsolves it.
    ///
    /// The solver is expected to hold a satisfying assignment of the problem produced by the most
    /// recent re-indexing.
    pub fn extract_and_postsolve_solution(self, solver: &impl SearchSolver) -> Vec<bool> {
        let solution = (0..solver.atom_count() as Atom)
            .map(|atom| solver.value_of(atom).unwrap_or(false))
            .collect::<Vec<_>>();
        self.postsolve_solution(&solution)
    }

    /// Postsolves `solution`, a satisfying assignment of the problem produced by the most recent
    /// re-indexing, into a satisfying assignment of the original problem, indexed by original
    /// atoms.
    ///
    /// Consumes the postsolver: the log supports a single replay.
    pub fn postsolve_solution(self, solution: &[bool]) -> Vec<bool> {
        assert!(solution.len() >= self.reverse_mapping.len());

        let Postsolver {
            starts,
            literals,
            associated,
            reverse_mapping,
            mut assignment,
        } = self;

        // Translate the solution to original indicies. Fixed values take precedence; a solution
        // of the reduced problem cannot disagree with one, as the fix survived as a unit clause.
        for (atom, original) in reverse_mapping.iter().enumerate() {
            if assignment.value_of(*original).is_none() {
                assignment.set_literal(&CLiteral::new(*original, solution[atom]));
            }
        }

        // Replay the add records, most recent first.
        for record in (0..starts.len()).rev() {
            let end = match starts.get(record + 1) {
                Some(start) => *start,
                None => literals.len(),
            };
            let clause = &literals[starts[record]..end];
            let x = associated[record];

            let satisfied = clause
                .iter()
                .any(|literal| *literal != x && assignment.value_of_literal(literal) == Some(true));

            if !satisfied {
                log::trace!(target: targets::POSTSOLVE, "Replay asserts {x}");
                // A direct write, as the replay may overturn the default value of the atom.
                assignment[x.atom() as usize] = Some(x.polarity());
            }
        }

        assignment
            .iter()
            .map(|value| value.unwrap_or(false))
            .collect()
    }
}
