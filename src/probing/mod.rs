/*!
Probing: equivalent literal detection over the propagation graph.

Each unfixed literal *l* is assumed in turn and unit propagation is run. Every implied literal
*l′* contributes the edges *l* → *l′* and ¬*l′* → ¬*l* to a directed graph over literals, the
second edge keeping the graph symmetric under negation. A strongly connected component of the
graph is then a set of equivalent literals, and each is collapsed to its least literal.

Two extras fall out along the way:

- A literal whose assumption conflicts is a *failed* literal, and its negation is added to the
  solver as a unit clause (and recorded as fixed with the postsolver).
- A component containing both a literal and its negation witnesses unsatisfiability.

The returned mapping, indexed by [literal index](crate::structures::literal::Literal::index),
sends each literal to its representative, and is designed to be passed to
[set_equivalent_literal_mapping](crate::presolve::Presolver::set_equivalent_literal_mapping)
before the clauses of the problem are (re-)added to a presolver.
*/

use petgraph::{
    algo::tarjan_scc,
    graph::{DiGraph, NodeIndex},
};

use crate::{
    misc::log::targets::{self},
    postsolve::Postsolver,
    solver::SearchSolver,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        valuation::{AtomValuation, Valuation},
    },
};

use crate::types::err::{self};

/// Probes every unfixed literal of `solver` and returns a mapping from each literal to a chosen
/// representative of its equivalence class, or an empty vector when no two literals were found
/// equivalent.
///
/// Failed literals are fixed in the solver as probing goes, and every fixed literal is recorded
/// with `postsolver`. Each merged atom is recorded too, so its value is recoverable from the
/// value of its representative.
///
/// Returns an error if some literal is found equivalent to its own negation.
pub fn probe_and_find_equivalent_literals(
    solver: &mut impl SearchSolver,
    postsolver: &mut Postsolver,
) -> Result<Vec<CLiteral>, err::ProbeError> {
    let atom_count = solver.atom_count();

    let mut fixed: AtomValuation = vec![None; atom_count];
    record_fixed_literals(solver, postsolver, &mut fixed);

    let mut graph = DiGraph::<(), ()>::with_capacity(2 * atom_count, 0);
    for _ in 0..2 * atom_count {
        graph.add_node(());
    }

    for atom in 0..atom_count as Atom {
        if fixed.value_of(atom).is_some() {
            continue;
        }

        for polarity in [false, true] {
            let literal = CLiteral::new(atom, polarity);

            match solver.propagate(literal) {
                Some(implied) => {
                    for consequence in implied {
                        if consequence == literal {
                            continue;
                        }
                        graph.add_edge(
                            NodeIndex::new(literal.index()),
                            NodeIndex::new(consequence.index()),
                            (),
                        );
                        graph.add_edge(
                            NodeIndex::new(consequence.negate().index()),
                            NodeIndex::new(literal.negate().index()),
                            (),
                        );
                    }
                }

                None => {
                    let negation = literal.negate();
                    log::debug!(target: targets::PROBE, "Failed literal {literal}, fixing {negation}");
                    solver.add_clause(vec![negation]);
                    record_fixed_literals(solver, postsolver, &mut fixed);
                    // The atom is fixed, so the other polarity is settled too.
                    break;
                }
            }
        }
    }

    let mut mapping: Vec<CLiteral> = (0..2 * atom_count).map(CLiteral::from_index).collect();
    let mut merged = 0;

    for component in tarjan_scc(&graph) {
        if component.len() < 2 {
            continue;
        }

        let representative = component
            .iter()
            .map(|node| node.index())
            .min()
            .expect("the component holds at least two literals");

        // The graph is symmetric under negation, so a component holding any literal together
        // with its negation holds the representative's negation in particular.
        if component.contains(&NodeIndex::new(representative ^ 1)) {
            log::info!(target: targets::PROBE, "A literal is equivalent to its negation");
            return Err(err::ProbeError::Unsatisfiable);
        }

        // Literals fixed by failed literal probing keep their identity mapping.
        if component
            .iter()
            .any(|node| fixed.value_of((node.index() >> 1) as Atom).is_some())
        {
            continue;
        }

        let representative = CLiteral::from_index(representative);
        for node in &component {
            if node.index() != representative.index() {
                mapping[node.index()] = representative;
                merged += 1;
            }
        }
    }

    if merged == 0 {
        log::info!(target: targets::PROBE, "No equivalent literals found");
        return Ok(Vec::default());
    }

    // One record per merged atom: if the representative is true the atom must be too, and the
    // default value of an unmentioned atom covers the other direction.
    for atom in 0..atom_count as Atom {
        let literal = CLiteral::new(atom, true);
        let representative = mapping[literal.index()];
        if representative != literal {
            let mut clause = vec![literal, representative.negate()];
            clause.sort_unstable();
            postsolver.add(literal, clause);
        }
    }

    log::info!(target: targets::PROBE, "{merged} literals merged");
    Ok(mapping)
}

/// Records with `postsolver` every literal fixed in `solver` but not yet noted in `fixed`.
fn record_fixed_literals(
    solver: &impl SearchSolver,
    postsolver: &mut Postsolver,
    fixed: &mut AtomValuation,
) {
    for literal in solver.fixed_literals() {
        if fixed.value_of(literal.atom()).is_none() {
            fixed.set_literal(&literal);
            postsolver.fix_literal(literal);
        }
    }
}
