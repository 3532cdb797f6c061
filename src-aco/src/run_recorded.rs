//! Recording wrapper for colony runs for testing purposes

use std::fs::create_dir_all;
use std::sync::Arc;

use antopt_benchmarks::BenchmarkProblem;

use crate::colony::ant_colony_optimization;
use crate::recorder::EvaluationRecorder;
use crate::{AcoConfig, RunReport};

/// Run the colony with every fitness evaluation recorded to CSV.
///
/// This wrapper is primarily used for testing and analysis: it attaches a
/// fresh recorder to the problem, runs one colony, saves the trace and
/// detaches again.
pub fn run_recorded_colony(
    problem: &BenchmarkProblem,
    config: AcoConfig,
    output_dir: &str,
) -> Result<(RunReport, String), Box<dyn std::error::Error>> {
    create_dir_all(output_dir)?;

    let recorder = Arc::new(EvaluationRecorder::with_output_dir(problem.name(), output_dir));
    problem.attach_sink(recorder.clone());
    problem.reset();

    let result = ant_colony_optimization(problem, config);
    problem.detach_sink();
    let report = result?;

    let csv_path = recorder.save_to_csv()?;
    Ok((report, csv_path))
}
