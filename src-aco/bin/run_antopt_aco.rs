use std::fs::{create_dir_all, File};
use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use serde::Serialize;

use antopt_aco::{
	ant_colony_optimization, max_min_ant_system, AcoConfigBuilder, DepositionPolicy,
	EvaluationRecorder, LocalSearchPolicy, MmasConfig, MmasVariant, RunReport,
};
use antopt_aco::baselines::{one_plus_one_ea, random_search};
use antopt_benchmarks::{get_problem, BenchmarkProblem, ProblemId};

/// CLI arguments for the benchmark experiment driver
#[derive(Parser)]
#[command(name = "run_antopt_aco")]
#[command(about = "Run pheromone-guided optimizers over the pseudo-boolean benchmark suite")]
struct Args {
	/// Comma-separated problems (names or numeric ids)
	#[arg(short, long, default_value = "1,2,3,18,23,24")]
	problems: String,

	/// Problem dimensionality (bits)
	#[arg(short = 'n', long, default_value = "100")]
	dimension: usize,

	/// Independent runs per problem
	#[arg(short, long, default_value = "10")]
	runs: usize,

	/// Algorithm: aco | mmas | mmas-star | ea | random
	#[arg(short, long, default_value = "aco")]
	algorithm: String,

	/// Colony population size
	#[arg(long, default_value = "50")]
	population_size: usize,

	/// Colony generation budget
	#[arg(long, default_value = "10000")]
	generations: usize,

	/// Pheromone influence exponent
	#[arg(long, default_value = "1.0")]
	alpha: f64,

	/// Heuristic influence exponent
	#[arg(long, default_value = "1.0")]
	beta: f64,

	/// Colony evaporation rate
	#[arg(long, default_value = "0.1")]
	evaporation_rate: f64,

	/// Deposition policy: best | rank | weighted
	#[arg(long, default_value = "rank")]
	deposition: String,

	/// Local search: probe | sweep | off
	#[arg(long, default_value = "probe")]
	local_search: String,

	/// MMAS reinforcement strength; defaults to 1/sqrt(n)
	#[arg(long)]
	rho: Option<f64>,

	/// Evaluation budget for mmas / ea / random; defaults to 50 * n^2
	#[arg(long)]
	budget: Option<usize>,

	/// Base seed; run r uses seed + r
	#[arg(long)]
	seed: Option<u64>,

	/// Output directory for CSV traces and the JSON summary
	#[arg(short, long, default_value = "./data_generated/runs")]
	output_dir: String,

	/// Print per-generation progress
	#[arg(long)]
	disp: bool,
}

/// One line of the JSON summary
#[derive(Serialize)]
struct RunSummary {
	problem: String,
	fid: u32,
	dimension: usize,
	run: usize,
	seed: Option<u64>,
	fitness: f64,
	optimum: f64,
	success: bool,
	generations: usize,
	evaluations: usize,
	message: String,
}

fn parse_problems(list: &str) -> Result<Vec<ProblemId>, String> {
	list.split(',')
		.map(|token| token.trim().parse::<ProblemId>().map_err(|e| e.to_string()))
		.collect()
}

fn run_once(
	args: &Args,
	problem: &BenchmarkProblem,
	seed: Option<u64>,
) -> Result<RunReport, Box<dyn std::error::Error>> {
	match args.algorithm.as_str() {
		"aco" => {
			let deposition: DepositionPolicy = args.deposition.parse()?;
			let local_search = match args.local_search.as_str() {
				"probe" => Some(LocalSearchPolicy::SingleBitProbe { probability: 1.0 }),
				"sweep" => Some(LocalSearchPolicy::FirstImprovementSweep { max_sweeps: 1 }),
				"off" => None,
				other => return Err(format!("unknown local search: {}", other).into()),
			};
			let mut builder = AcoConfigBuilder::new()
				.population_size(args.population_size)
				.generation_count(args.generations)
				.alpha(args.alpha)
				.beta(args.beta)
				.evaporation_rate(args.evaporation_rate)
				.deposition(deposition)
				.local_search(local_search)
				.disp(args.disp);
			if let Some(s) = seed {
				builder = builder.seed(s);
			}
			Ok(ant_colony_optimization(problem, builder.build())?)
		}
		"mmas" | "mmas-star" => {
			let variant: MmasVariant = args.algorithm.parse()?;
			let n = problem.dimensionality();
			let config = MmasConfig {
				rho: args.rho.unwrap_or(1.0 / (n as f64).sqrt()),
				evaluation_budget: args.budget,
				variant,
				seed,
				disp: args.disp,
			};
			Ok(max_min_ant_system(problem, config)?)
		}
		"ea" => Ok(one_plus_one_ea(problem, args.budget, seed)),
		"random" => Ok(random_search(problem, args.budget, seed)),
		other => Err(format!("unknown algorithm: {}", other).into()),
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();
	let problems = parse_problems(&args.problems)?;
	create_dir_all(&args.output_dir)?;

	println!("{}", "=".repeat(60));
	println!(
		"Running: {} on {} problems, n={}, {} runs each",
		args.algorithm,
		problems.len(),
		args.dimension,
		args.runs
	);
	println!("{}", "=".repeat(60));

	let mut summaries: Vec<RunSummary> = Vec::new();

	for id in problems {
		let problem = get_problem(id, args.dimension)?;
		println!("\nProblem {}: {}", id.fid(), problem.name());

		let recorder = Arc::new(EvaluationRecorder::with_output_dir(
			problem.name(),
			&args.output_dir,
		));
		problem.attach_sink(recorder.clone());

		for run in 0..args.runs {
			let seed = args.seed.map(|s| s + run as u64);
			let report = run_once(&args, &problem, seed)?;
			println!(
				"  Run {}/{}: best={:.4} ({})",
				run + 1,
				args.runs,
				report.fitness,
				report.message
			);
			summaries.push(RunSummary {
				problem: problem.name().to_string(),
				fid: id.fid(),
				dimension: args.dimension,
				run,
				seed,
				fitness: report.fitness,
				optimum: problem.known_optimum(),
				success: report.success,
				generations: report.generations,
				evaluations: report.evaluations,
				message: report.message,
			});
			problem.reset();
		}

		let csv_path = recorder.save_to_csv()?;
		problem.detach_sink();
		println!("  Trace saved to {}", csv_path);
	}

	let summary_path = format!("{}/summary_{}.json", args.output_dir, args.algorithm);
	let mut file = File::create(&summary_path)?;
	writeln!(file, "{}", serde_json::to_string_pretty(&summaries)?)?;
	println!("\nSummary saved to {}", summary_path);

	Ok(())
}
