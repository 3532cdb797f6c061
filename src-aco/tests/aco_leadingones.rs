use antopt_aco::{ant_colony_optimization, AcoConfigBuilder, LocalSearchPolicy};
use antopt_benchmarks::{get_problem, ProblemId};

#[test]
fn test_aco_leadingones_n15() {
    // LeadingOnes has long plateaus; probes that extend the prefix plus
    // trail reinforcement must still finish inside the budget
    let problem = get_problem(ProblemId::LeadingOnes, 15).unwrap();
    for seed in [21, 22] {
        let config = AcoConfigBuilder::new()
            .seed(seed)
            .population_size(15)
            .generation_count(3000)
            .build();
        let report = ant_colony_optimization(&problem, config).unwrap();
        assert!(
            report.success,
            "seed {} did not reach the optimum: {}",
            seed, report.message
        );
        assert_eq!(report.fitness, 15.0);
        problem.reset();
    }
}

#[test]
fn test_aco_leadingones_with_sweep_refinement() {
    // a full first-improvement sweep walks the prefix in one generation
    let problem = get_problem(ProblemId::LeadingOnes, 12).unwrap();
    let config = AcoConfigBuilder::new()
        .seed(31)
        .population_size(8)
        .generation_count(500)
        .local_search(Some(LocalSearchPolicy::FirstImprovementSweep { max_sweeps: 3 }))
        .build();
    let report = ant_colony_optimization(&problem, config).unwrap();
    assert!(report.success, "{}", report.message);
}
