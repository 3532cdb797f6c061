use antopt_aco::baselines::{one_plus_one_ea, random_search};
use antopt_benchmarks::{get_problem, ProblemId};

#[test]
fn test_one_plus_one_ea_solves_onemax() {
    let problem = get_problem(ProblemId::OneMax, 30).unwrap();
    let report = one_plus_one_ea(&problem, None, Some(80));
    assert!(report.success, "{}", report.message);
    assert_eq!(report.fitness, 30.0);
    assert!(report.evaluations <= 50 * 30 * 30);
}

#[test]
fn test_random_search_solves_tiny_onemax() {
    // 2^8 patterns against 3200 draws: the all-ones string shows up
    let problem = get_problem(ProblemId::OneMax, 8).unwrap();
    let report = random_search(&problem, None, Some(81));
    assert!(report.success, "{}", report.message);
    assert_eq!(report.fitness, 8.0);
}

#[test]
fn test_random_search_respects_budget() {
    let problem = get_problem(ProblemId::Labs, 16).unwrap();
    let report = random_search(&problem, Some(100), Some(82));
    assert!(!report.success);
    assert_eq!(report.evaluations, 100);
    assert_eq!(problem.evaluations(), 100);
}

#[test]
fn test_ea_keeps_strictly_best_solution() {
    // on a deceptive landscape the EA may stall, but the report always
    // carries a finite best-found fitness and a matching solution
    let problem = get_problem(ProblemId::ConcatenatedTrap, 20).unwrap();
    let report = one_plus_one_ea(&problem, Some(2_000), Some(83));
    assert_eq!(report.solution.len(), 20);
    let check = problem.evaluate(&report.solution);
    assert_eq!(check, report.fitness);
}
