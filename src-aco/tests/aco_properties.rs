use std::cell::RefCell;
use std::rc::Rc;

use antopt_aco::{
    ant_colony_optimization, AcoConfigBuilder, CallbackAction, ConfigError,
};
use antopt_benchmarks::{get_problem, ProblemId};

#[test]
fn test_incumbent_fitness_is_monotone() {
    let problem = get_problem(ProblemId::LeadingOnes, 10).unwrap();
    let trace: Rc<RefCell<Vec<f64>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = trace.clone();
    let config = AcoConfigBuilder::new()
        .seed(61)
        .population_size(5)
        .generation_count(200)
        .callback(Box::new(move |intermediate| {
            sink.borrow_mut().push(intermediate.fitness);
            CallbackAction::Continue
        }))
        .build();
    ant_colony_optimization(&problem, config).unwrap();

    let trace = trace.borrow();
    assert!(!trace.is_empty());
    for pair in trace.windows(2) {
        assert!(pair[1] >= pair[0], "incumbent fitness decreased: {:?}", pair);
    }
}

#[test]
fn test_callback_can_stop_early() {
    let problem = get_problem(ProblemId::Labs, 16).unwrap();
    let config = AcoConfigBuilder::new()
        .seed(62)
        .population_size(5)
        .generation_count(10_000)
        .callback(Box::new(|intermediate| {
            if intermediate.generation >= 5 {
                CallbackAction::Stop
            } else {
                CallbackAction::Continue
            }
        }))
        .build();
    let report = ant_colony_optimization(&problem, config).unwrap();
    assert!(!report.success);
    assert_eq!(report.generations, 5);
    assert!(report.message.contains("callback"), "{}", report.message);
}

#[test]
fn test_invalid_configs_are_rejected_before_running() {
    let problem = get_problem(ProblemId::OneMax, 8).unwrap();

    let config = AcoConfigBuilder::new().evaporation_rate(-0.2).build();
    assert_eq!(
        ant_colony_optimization(&problem, config).unwrap_err(),
        ConfigError::EvaporationRate(-0.2)
    );
    // nothing may have been evaluated
    assert_eq!(problem.evaluations(), 0);

    let config = AcoConfigBuilder::new().alpha(f64::NAN).build();
    assert!(ant_colony_optimization(&problem, config).is_err());

    let config = AcoConfigBuilder::new().elite_fraction(1.5).build();
    assert_eq!(
        ant_colony_optimization(&problem, config).unwrap_err(),
        ConfigError::EliteFraction(1.5)
    );

    let config = AcoConfigBuilder::new().tau_bounds(0.0, 10.0).build();
    assert!(matches!(
        ant_colony_optimization(&problem, config).unwrap_err(),
        ConfigError::PheromoneBounds { .. }
    ));
}
