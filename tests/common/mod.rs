//! A small search solver for exercising the presolving layer: unit propagation at the root, and
//! solving by enumeration. Only suitable for tiny problems.

#![allow(dead_code)]

use winnow_sat::{
    solver::SearchSolver,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
        valuation::{AtomValuation, Valuation},
    },
};

#[derive(Default)]
pub struct TestSolver {
    clauses: Vec<CClause>,
    atom_count: usize,

    /// The root assignment: consequences of unit propagation alone.
    root: AtomValuation,

    /// A satisfying assignment, when enumeration has found one.
    solution: Option<Vec<bool>>,
}

impl TestSolver {
    pub fn new() -> Self {
        TestSolver::default()
    }

    /// Searches for a satisfying assignment by enumeration, storing the first found.
    pub fn solve_by_enumeration(&mut self) -> bool {
        assert!(self.atom_count < 24, "enumeration only scales so far");

        for bits in 0u64..(1 << self.atom_count) {
            let assignment = (0..self.atom_count)
                .map(|atom| (bits >> atom) & 1 == 1)
                .collect::<Vec<_>>();

            let satisfied = self.clauses.iter().all(|clause| {
                clause
                    .iter()
                    .any(|literal| assignment[literal.atom() as usize] == literal.polarity())
            });

            if satisfied {
                self.solution = Some(assignment);
                return true;
            }
        }
        false
    }

    /// Runs unit propagation over `valuation` to fixpoint, false on conflict.
    fn propagate_to_fixpoint(&self, valuation: &mut AtomValuation) -> bool {
        loop {
            let mut changed = false;

            for clause in &self.clauses {
                let mut satisfied = false;
                let mut unassigned: Option<CLiteral> = None;
                let mut unassigned_count = 0;

                for literal in clause.literals() {
                    match valuation.value_of_literal(literal) {
                        Some(true) => {
                            satisfied = true;
                            break;
                        }
                        Some(false) => {}
                        None => {
                            unassigned_count += 1;
                            unassigned = Some(*literal);
                        }
                    }
                }

                if satisfied {
                    continue;
                }
                match unassigned_count {
                    0 => return false,
                    1 => {
                        valuation.set_literal(&unassigned.expect("a literal was counted"));
                        changed = true;
                    }
                    _ => {}
                }
            }

            if !changed {
                return true;
            }
        }
    }

    fn refresh_root(&mut self) {
        let mut root = vec![None; self.atom_count];
        let consistent = self.propagate_to_fixpoint(&mut root);
        assert!(consistent, "the root assignment conflicts");
        self.root = root;
    }
}

impl SearchSolver for TestSolver {
    fn atom_count(&self) -> usize {
        self.atom_count
    }

    fn add_clause(&mut self, clause: CClause) {
        for literal in clause.literals() {
            self.atom_count = std::cmp::max(self.atom_count, literal.atom() as usize + 1);
        }
        self.clauses.push(clause);
        self.refresh_root();
    }

    fn value_of(&self, atom: Atom) -> Option<bool> {
        match &self.solution {
            Some(solution) => solution.get(atom as usize).copied(),
            None => self.root.value_of(atom),
        }
    }

    fn fixed_literals(&self) -> Vec<CLiteral> {
        self.root
            .iter()
            .enumerate()
            .filter_map(|(atom, value)| value.map(|v| CLiteral::new(atom as Atom, v)))
            .collect()
    }

    fn propagate(&mut self, assumption: CLiteral) -> Option<Vec<CLiteral>> {
        if self.root.value_of_literal(&assumption) == Some(false) {
            return None;
        }

        let mut valuation = self.root.clone();
        valuation.set_literal(&assumption);
        if !self.propagate_to_fixpoint(&mut valuation) {
            return None;
        }

        let mut implied = Vec::new();
        for (atom, value) in valuation.iter().enumerate() {
            if atom == assumption.atom() as usize || self.root[atom].is_some() {
                continue;
            }
            if let Some(value) = value {
                implied.push(CLiteral::new(atom as Atom, *value));
            }
        }
        Some(implied)
    }
}

/// A clause from its DIMACS-style integer form.
pub fn clause_of(ints: &[i32]) -> CClause {
    ints.iter().copied().map(CLiteral::from).collect()
}

/// Whether `solution` satisfies every clause, clauses in DIMACS-style integer form.
pub fn satisfies(clauses: &[Vec<i32>], solution: &[bool]) -> bool {
    clauses.iter().all(|clause| {
        clause.iter().any(|int| {
            let literal = CLiteral::from(*int);
            solution[literal.atom() as usize] == literal.polarity()
        })
    })
}
