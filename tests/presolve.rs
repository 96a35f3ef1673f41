use winnow_sat::{
    config::Config,
    postsolve::Postsolver,
    presolve::{ClauseOk, Presolver},
    structures::literal::{CLiteral, Literal},
    types::err::PresolveError,
};

mod common;
use common::clause_of;

mod adding {
    use super::*;

    #[test]
    fn trivial_clause_dropped() {
        let mut presolver = Presolver::new(Config::default());

        assert_eq!(Ok(ClauseOk::Trivial), presolver.add_clause(clause_of(&[1, -1])));
        assert_eq!(presolver.trivial_clause_count(), 1);
        assert_eq!(presolver.live_clause_count(), 0);
    }

    #[test]
    fn duplicate_literals_collapse() {
        let mut presolver = Presolver::new(Config::default());

        assert_eq!(Ok(ClauseOk::Added), presolver.add_clause(clause_of(&[2, 1, 2])));
        assert_eq!(presolver.clause(0), &clause_of(&[1, 2]));
    }

    #[test]
    fn binary_clauses_follow_the_clause_contract() {
        let mut presolver = Presolver::new(Config::default());
        let p = CLiteral::from(1);
        let q = CLiteral::from(2);

        assert_eq!(Ok(ClauseOk::Added), presolver.add_binary_clause(q, p));
        assert_eq!(presolver.clause(0), &clause_of(&[1, 2]));

        assert_eq!(Ok(ClauseOk::Trivial), presolver.add_binary_clause(p, p.negate()));
        assert_eq!(presolver.trivial_clause_count(), 1);
        assert_eq!(presolver.live_clause_count(), 1);
    }

    #[test]
    fn empty_clause_is_unsatisfiable() {
        let mut presolver = Presolver::new(Config::default());

        assert_eq!(Err(PresolveError::Unsatisfiable), presolver.add_clause(vec![]));
    }
}

mod subsumption {
    use super::*;

    #[test]
    fn duplicate_clauses_absorb() {
        let mut presolver = Presolver::new(Config::default());
        let _ = presolver.add_clause(clause_of(&[1, 2]));
        let _ = presolver.add_clause(clause_of(&[1, 2]));

        assert!(presolver.process_clause_to_simplify_others(0).is_ok());

        assert_eq!(presolver.live_clause_count(), 1);
        assert_eq!(presolver.clause(0), &clause_of(&[1, 2]));
    }

    #[test]
    fn supersets_absorb() {
        let mut presolver = Presolver::new(Config::default());
        let _ = presolver.add_clause(clause_of(&[1, 2, 3]));
        let _ = presolver.add_clause(clause_of(&[1, 3]));

        assert!(presolver.process_clause_to_simplify_others(1).is_ok());

        assert_eq!(presolver.live_clause_count(), 1);
        assert!(presolver.clause(0).is_empty());
    }

    #[test]
    fn self_subsumption_strengthens() {
        let mut presolver = Presolver::new(Config::default());
        let _ = presolver.add_clause(clause_of(&[1, 2]));
        let _ = presolver.add_clause(clause_of(&[1, -2]));

        assert!(presolver.process_clause_to_simplify_others(0).is_ok());

        // The second clause lost ¬2, and the first is untouched.
        assert_eq!(presolver.clause(1), &clause_of(&[1]));
        assert_eq!(presolver.clause(0), &clause_of(&[1, 2]));
    }

    #[test]
    fn strengthening_to_empty_is_unsatisfiable() {
        let mut presolver = Presolver::new(Config::default());
        let _ = presolver.add_clause(clause_of(&[1]));
        let _ = presolver.add_clause(clause_of(&[-1]));

        assert_eq!(
            Err(PresolveError::Unsatisfiable),
            presolver.process_clause_to_simplify_others(0),
        );
    }
}

mod elimination {
    use super::*;

    #[test]
    fn distribution_replaces_clauses() {
        let mut presolver = Presolver::new(Config::default());
        let _ = presolver.add_clause(clause_of(&[1, 2]));
        let _ = presolver.add_clause(clause_of(&[1, -2]));

        let mut postsolver = Postsolver::new(presolver.atom_count());
        let eliminated = presolver.cross_product(CLiteral::from(2), &mut postsolver);
        assert_eq!(eliminated, Ok(true));

        // Both clauses resolve to the unit 1, stored once each resolvant.
        assert_eq!(presolver.live_clause_count(), 1);
        assert_eq!(presolver.clause(2), &clause_of(&[1]));

        assert_eq!(presolver.variable_mapping(), vec![Some(0), None]);
        postsolver.apply_mapping(&[Some(0), None]);

        let solution = postsolver.postsolve_solution(&[true]);
        assert_eq!(solution, vec![true, false]);
    }

    #[test]
    fn resolving_contradictory_units_is_unsatisfiable() {
        let mut presolver = Presolver::new(Config::default());
        let _ = presolver.add_clause(clause_of(&[1]));
        let _ = presolver.add_clause(clause_of(&[-1]));

        let mut postsolver = Postsolver::new(presolver.atom_count());
        assert_eq!(
            Err(PresolveError::Unsatisfiable),
            presolver.cross_product(CLiteral::from(1), &mut postsolver),
        );
    }

    #[test]
    fn absent_atoms_are_skipped() {
        let mut presolver = Presolver::new(Config::default());
        let _ = presolver.add_clause(clause_of(&[1, 2]));

        let mut postsolver = Postsolver::new(presolver.atom_count());
        let eliminated = presolver.cross_product(CLiteral::from(3), &mut postsolver);
        assert_eq!(eliminated, Ok(false));
    }
}

mod fixpoint {
    use super::*;

    #[test]
    fn strengthening_then_elimination_dissolves() {
        let mut presolver = Presolver::new(Config::default());
        let _ = presolver.add_clause(clause_of(&[2]));
        let _ = presolver.add_clause(clause_of(&[1, -2]));

        let mut postsolver = Postsolver::new(presolver.atom_count());
        assert!(presolver.presolve(&mut postsolver).is_ok());

        assert_eq!(presolver.live_clause_count(), 0);
        assert_eq!(presolver.variable_mapping(), vec![None, None]);

        postsolver.apply_mapping(&[None, None]);
        let solution = postsolver.postsolve_solution(&[]);
        assert_eq!(solution, vec![true, true]);
    }

    #[test]
    fn a_reducing_presolve_reaches_a_fixpoint() {
        let mut presolver = Presolver::new(Config::default());
        let _ = presolver.add_clause(clause_of(&[2]));
        let _ = presolver.add_clause(clause_of(&[1, -2]));

        let mut postsolver = Postsolver::new(presolver.atom_count());
        assert!(presolver.presolve(&mut postsolver).is_ok());
        assert_eq!(presolver.live_clause_count(), 0);
        let stored = presolver.clause_count();

        // The second call finds nothing live to process and stores no resolvants.
        assert!(presolver.presolve(&mut postsolver).is_ok());
        assert_eq!(presolver.live_clause_count(), 0);
        assert_eq!(presolver.clause_count(), stored);
    }

    #[test]
    fn forced_opposite_values_are_unsatisfiable() {
        let mut presolver = Presolver::new(Config::default());
        // The unit ¬2 forces 1 both ways through the binary clauses.
        let _ = presolver.add_clause(clause_of(&[1, 2]));
        let _ = presolver.add_clause(clause_of(&[-1, 2]));
        let _ = presolver.add_clause(clause_of(&[-2]));

        let mut postsolver = Postsolver::new(presolver.atom_count());
        assert_eq!(Err(PresolveError::Unsatisfiable), presolver.presolve(&mut postsolver));
    }

    #[test]
    fn contradiction_is_found() {
        let mut presolver = Presolver::new(Config::default());
        for ints in [[1, 2], [-1, 2], [1, -2], [-1, -2]] {
            let _ = presolver.add_clause(clause_of(&ints));
        }

        let mut postsolver = Postsolver::new(presolver.atom_count());
        assert_eq!(Err(PresolveError::Unsatisfiable), presolver.presolve(&mut postsolver));
    }

    #[test]
    fn occurrence_limit_holds_elimination_back() {
        let config = Config {
            bve_occurrence_limit: 3,
            ..Config::default()
        };
        let mut presolver = Presolver::new(config);

        // An xor-style triangle: no clause simplifies another, and each atom has two occurrences
        // of each polarity, so 2 * 2 resolvant candidates exceeds the limit of 3.
        let triangle = [[1, 2], [-1, -2], [2, 3], [-2, -3], [3, 1], [-3, -1]];
        for ints in &triangle {
            let _ = presolver.add_clause(clause_of(ints));
        }

        let mut postsolver = Postsolver::new(presolver.atom_count());
        assert!(presolver.presolve(&mut postsolver).is_ok());
        assert_eq!(presolver.live_clause_count(), triangle.len());

        // And nothing changes on a second call, the first found a fixpoint.
        assert!(presolver.presolve(&mut postsolver).is_ok());
        assert_eq!(presolver.live_clause_count(), triangle.len());
    }

    #[test]
    fn work_budget_is_respected() {
        let config = Config {
            work_budget: Some(0),
            ..Config::default()
        };
        let mut presolver = Presolver::new(config);
        let _ = presolver.add_clause(clause_of(&[1, 2]));
        let _ = presolver.add_clause(clause_of(&[1, -2]));

        let mut postsolver = Postsolver::new(presolver.atom_count());
        assert!(presolver.presolve(&mut postsolver).is_ok());

        // No budget, no simplification.
        assert_eq!(presolver.live_clause_count(), 2);
    }
}
