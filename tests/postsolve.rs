use winnow_sat::{postsolve::Postsolver, structures::literal::CLiteral};

mod common;
use common::clause_of;

#[test]
fn replay_recovers_an_eliminated_atom() {
    let mut postsolver = Postsolver::new(2);

    // Atom 1 was eliminated; the clause 1 ∨ 2 was removed in favour of asserting 2 whenever
    // 1 is false.
    postsolver.add(CLiteral::from(2), clause_of(&[1, 2]));

    let solution = postsolver.postsolve_solution(&[false, false]);
    assert_eq!(solution, vec![false, true]);
}

#[test]
fn replay_leaves_satisfied_records_alone() {
    let mut postsolver = Postsolver::new(2);
    postsolver.add(CLiteral::from(2), clause_of(&[1, 2]));

    // 1 is true, so the record asserts nothing and 2 keeps its solution value.
    let solution = postsolver.postsolve_solution(&[true, false]);
    assert_eq!(solution, vec![true, false]);
}

#[test]
fn replay_is_newest_first() {
    let mut postsolver = Postsolver::new(2);

    // An older record mentions atom 2, which a newer record decides.
    postsolver.add(CLiteral::from(1), clause_of(&[1, -2]));
    postsolver.add(CLiteral::from(2), clause_of(&[2]));

    let solution = postsolver.postsolve_solution(&[false, false]);

    // The newer record sets 2 true, so the older must set 1 true in turn.
    assert_eq!(solution, vec![true, true]);
}

#[test]
fn fixed_values_take_precedence() {
    let mut postsolver = Postsolver::new(2);
    postsolver.fix_literal(CLiteral::from(-1));

    // Atom 1 is then dropped from the problem, leaving atom 2 re-indexed as atom 1.
    postsolver.apply_mapping(&[None, Some(0)]);

    let solution = postsolver.postsolve_solution(&[true]);
    assert_eq!(solution, vec![false, true]);
}

#[test]
fn a_short_mapping_drops_the_trailing_atoms() {
    let mut postsolver = Postsolver::new(3);

    // Atom 3 was merged into atom 1 before any presolving, so a later re-indexing need not
    // mention it at all.
    postsolver.add(CLiteral::from(3), clause_of(&[-1, 3]));
    postsolver.apply_mapping(&[Some(0), None]);

    let solution = postsolver.postsolve_solution(&[true]);
    assert_eq!(solution, vec![true, false, true]);
}

#[test]
fn unmentioned_atoms_default_to_false() {
    let mut postsolver = Postsolver::new(3);

    // Every atom is dropped without a record: the empty solution lifts to all false.
    postsolver.apply_mapping(&[None, None, None]);
    let solution = postsolver.postsolve_solution(&[]);
    assert_eq!(solution, vec![false, false, false]);
}
