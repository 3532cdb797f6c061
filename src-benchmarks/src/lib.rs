//! Pseudo-boolean benchmark problems
//!
//! This library provides a small suite of benchmark functions over binary
//! vectors for testing and comparing bitstring optimizers. Problems are
//! organized by category:
//!
//! - **Monotone**: separable functions with an obvious gradient towards the
//!   optimum (onemax, leadingones, linear_harmonic)
//! - **Rugged**: functions with plateaus, deception or hard constraints
//!   (labs, n_queens, concatenated_trap)
//!
//! Each problem instance knows its dimensionality and its target optimum,
//! counts fitness evaluations and can forward every evaluation to an
//! attached sink for offline analysis.
//!
//! # Example
//!
//! ```rust
//! use antopt_benchmarks::{get_problem, ProblemId};
//!
//! let problem = get_problem(ProblemId::OneMax, 20).unwrap();
//! let fitness = problem.evaluate(&vec![1u8; 20]);
//! assert_eq!(fitness, problem.known_optimum());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use thiserror::Error;

pub mod functions;
pub use functions::*;

/// Passive observer of fitness evaluations.
///
/// Sinks are write-only from the optimizer's point of view: the problem
/// forwards every `(evaluation index, fitness)` pair and signals run
/// boundaries, and nothing is ever read back.
pub trait EvaluationSink: Send + Sync {
    /// Called once per fitness evaluation with the 1-based evaluation index.
    fn record(&self, evaluation: usize, fitness: f64);

    /// Called when the problem is reset between independent runs.
    fn start_run(&self) {}
}

/// Identifier of a benchmark problem.
///
/// The numeric ids are stable and match the ones used by the experiment
/// drivers, so result folders stay comparable across sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemId {
    OneMax,
    LeadingOnes,
    LinearHarmonic,
    Labs,
    NQueens,
    ConcatenatedTrap,
}

impl ProblemId {
    /// All problems in the suite, in id order.
    pub const ALL: [ProblemId; 6] = [
        ProblemId::OneMax,
        ProblemId::LeadingOnes,
        ProblemId::LinearHarmonic,
        ProblemId::Labs,
        ProblemId::NQueens,
        ProblemId::ConcatenatedTrap,
    ];

    /// Stable numeric id.
    pub fn fid(&self) -> u32 {
        match self {
            ProblemId::OneMax => 1,
            ProblemId::LeadingOnes => 2,
            ProblemId::LinearHarmonic => 3,
            ProblemId::Labs => 18,
            ProblemId::NQueens => 23,
            ProblemId::ConcatenatedTrap => 24,
        }
    }

    /// Short lowercase name used in CLI arguments and output files.
    pub fn name(&self) -> &'static str {
        match self {
            ProblemId::OneMax => "onemax",
            ProblemId::LeadingOnes => "leadingones",
            ProblemId::LinearHarmonic => "linear_harmonic",
            ProblemId::Labs => "labs",
            ProblemId::NQueens => "n_queens",
            ProblemId::ConcatenatedTrap => "concatenated_trap",
        }
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ProblemId {
    type Err = ProblemError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.to_lowercase();
        match t.as_str() {
            "onemax" | "one_max" | "one-max" | "1" => Ok(ProblemId::OneMax),
            "leadingones" | "leading_ones" | "leading-ones" | "2" => Ok(ProblemId::LeadingOnes),
            "linear" | "linear_harmonic" | "linear-harmonic" | "3" => Ok(ProblemId::LinearHarmonic),
            "labs" | "18" => Ok(ProblemId::Labs),
            "nqueens" | "n_queens" | "n-queens" | "queens" | "23" => Ok(ProblemId::NQueens),
            "trap" | "concatenated_trap" | "concatenated-trap" | "24" => {
                Ok(ProblemId::ConcatenatedTrap)
            }
            _ => Err(ProblemError::UnknownProblem(s.to_string())),
        }
    }
}

/// Errors raised while building a problem instance.
#[derive(Debug, Error, PartialEq)]
pub enum ProblemError {
    #[error("unknown problem: {0}")]
    UnknownProblem(String),
    #[error("{id} requires a dimensionality of at least {min}, got n={n}")]
    DimensionTooSmall { id: ProblemId, min: usize, n: usize },
    #[error("n_queens requires a square dimensionality (k*k board), got n={0}")]
    NotSquare(usize),
}

/// Per-problem optimum overrides, keyed by `(fid, dimensionality)`.
///
/// Some instances have a better target than the generic lookup yields;
/// keeping them here as data keeps the optimizers free of any
/// problem-specific knowledge. The default table carries the single known
/// case: labs at n=32 reaches a merit factor of 8.
#[derive(Debug, Clone)]
pub struct OptimumOverrides {
    table: HashMap<(u32, usize), f64>,
}

impl Default for OptimumOverrides {
    fn default() -> Self {
        let mut table = HashMap::new();
        table.insert((ProblemId::Labs.fid(), 32), 8.0);
        Self { table }
    }
}

impl OptimumOverrides {
    /// An empty table (generic optimum lookup only).
    pub fn empty() -> Self {
        Self { table: HashMap::new() }
    }

    /// Register or replace an override.
    pub fn insert(&mut self, fid: u32, n: usize, optimum: f64) {
        self.table.insert((fid, n), optimum);
    }

    pub fn lookup(&self, fid: u32, n: usize) -> Option<f64> {
        self.table.get(&(fid, n)).copied()
    }
}

/// One benchmark problem instance of fixed dimensionality.
///
/// Evaluation takes `&self` so that population members can be scored in
/// parallel; the evaluation counter and the attached sink live behind
/// interior mutability.
pub struct BenchmarkProblem {
    id: ProblemId,
    n: usize,
    optimum: f64,
    func: fn(&[u8]) -> f64,
    evaluations: AtomicUsize,
    sink: Mutex<Option<Arc<dyn EvaluationSink>>>,
}

impl fmt::Debug for BenchmarkProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchmarkProblem")
            .field("id", &self.id)
            .field("n", &self.n)
            .field("optimum", &self.optimum)
            .field("evaluations", &self.evaluations.load(Ordering::Relaxed))
            .finish()
    }
}

impl BenchmarkProblem {
    /// Score one candidate.
    ///
    /// A candidate of the wrong length or with non-binary entries is a
    /// programming error in the caller, not a recoverable condition.
    pub fn evaluate(&self, bits: &[u8]) -> f64 {
        assert_eq!(
            bits.len(),
            self.n,
            "candidate length {} does not match problem dimensionality {}",
            bits.len(),
            self.n
        );
        assert!(
            bits.iter().all(|&b| b <= 1),
            "candidate for {} contains non-binary entries",
            self.id
        );
        let fitness = (self.func)(bits);
        let evaluation = self.evaluations.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(sink) = self.sink.lock().unwrap().as_ref() {
            sink.record(evaluation, fitness);
        }
        fitness
    }

    pub fn id(&self) -> ProblemId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn dimensionality(&self) -> usize {
        self.n
    }

    /// Target fitness; `f64::INFINITY` when no finite target is known.
    pub fn known_optimum(&self) -> f64 {
        self.optimum
    }

    /// Number of `evaluate` calls since construction or the last `reset`.
    pub fn evaluations(&self) -> usize {
        self.evaluations.load(Ordering::SeqCst)
    }

    /// Clear per-run state between independent runs of the same instance.
    pub fn reset(&self) {
        self.evaluations.store(0, Ordering::SeqCst);
        if let Some(sink) = self.sink.lock().unwrap().as_ref() {
            sink.start_run();
        }
    }

    /// Attach a write-only evaluation sink. Replaces any previous one.
    pub fn attach_sink(&self, sink: Arc<dyn EvaluationSink>) {
        *self.sink.lock().unwrap() = Some(sink);
    }

    pub fn detach_sink(&self) {
        *self.sink.lock().unwrap() = None;
    }
}

/// Build a problem instance with the default optimum overrides.
pub fn get_problem(id: ProblemId, n: usize) -> Result<BenchmarkProblem, ProblemError> {
    get_problem_with_overrides(id, n, &OptimumOverrides::default())
}

/// Build a problem instance, resolving the optimum through `overrides`
/// before falling back to the generic per-problem value.
pub fn get_problem_with_overrides(
    id: ProblemId,
    n: usize,
    overrides: &OptimumOverrides,
) -> Result<BenchmarkProblem, ProblemError> {
    let (func, natural_optimum): (fn(&[u8]) -> f64, f64) = match id {
        ProblemId::OneMax => {
            require_min(id, n, 1)?;
            (one_max, n as f64)
        }
        ProblemId::LeadingOnes => {
            require_min(id, n, 1)?;
            (leading_ones, n as f64)
        }
        ProblemId::LinearHarmonic => {
            require_min(id, n, 1)?;
            (linear_harmonic, (n * (n + 1)) as f64 / 2.0)
        }
        ProblemId::Labs => {
            require_min(id, n, 2)?;
            // Best merit factors have no closed form; without an override
            // the run is budget-bound.
            (labs, f64::INFINITY)
        }
        ProblemId::NQueens => {
            let k = (n as f64).sqrt().round() as usize;
            if k * k != n {
                return Err(ProblemError::NotSquare(n));
            }
            require_min(id, n, 1)?;
            (n_queens, k as f64)
        }
        ProblemId::ConcatenatedTrap => {
            require_min(id, n, 1)?;
            (concatenated_trap, n as f64)
        }
    };
    let optimum = overrides.lookup(id.fid(), n).unwrap_or(natural_optimum);
    Ok(BenchmarkProblem {
        id,
        n,
        optimum,
        func,
        evaluations: AtomicUsize::new(0),
        sink: Mutex::new(None),
    })
}

fn require_min(id: ProblemId, n: usize, min: usize) -> Result<(), ProblemError> {
    if n < min {
        Err(ProblemError::DimensionTooSmall { id, min, n })
    } else {
        Ok(())
    }
}

/// Metadata for a benchmark problem
#[derive(Debug, Clone)]
pub struct ProblemMetadata {
    /// Problem name
    pub name: String,
    /// Stable numeric id
    pub fid: u32,
    /// Description of the landscape
    pub description: String,
    /// Whether the function decomposes over independent bits
    pub separable: bool,
    /// Constraint on the dimensionality, if any
    pub dimension_constraint: Option<String>,
}

/// Get metadata for all problems in the suite
pub fn get_problem_metadata() -> HashMap<String, ProblemMetadata> {
    let mut metadata = HashMap::new();

    metadata.insert(
        "onemax".to_string(),
        ProblemMetadata {
            name: "onemax".to_string(),
            fid: 1,
            description: "Count of one-bits; maximum n at the all-ones string".to_string(),
            separable: true,
            dimension_constraint: None,
        },
    );

    metadata.insert(
        "leadingones".to_string(),
        ProblemMetadata {
            name: "leadingones".to_string(),
            fid: 2,
            description: "Length of the all-ones prefix; long plateaus".to_string(),
            separable: false,
            dimension_constraint: None,
        },
    );

    metadata.insert(
        "linear_harmonic".to_string(),
        ProblemMetadata {
            name: "linear_harmonic".to_string(),
            fid: 3,
            description: "Linear function with harmonic weights i+1".to_string(),
            separable: true,
            dimension_constraint: None,
        },
    );

    metadata.insert(
        "labs".to_string(),
        ProblemMetadata {
            name: "labs".to_string(),
            fid: 18,
            description: "Low-autocorrelation binary sequences merit factor".to_string(),
            separable: false,
            dimension_constraint: Some("n >= 2".to_string()),
        },
    );

    metadata.insert(
        "n_queens".to_string(),
        ProblemMetadata {
            name: "n_queens".to_string(),
            fid: 23,
            description: "Queens count minus per-line conflict penalties on a k*k board"
                .to_string(),
            separable: false,
            dimension_constraint: Some("n = k*k".to_string()),
        },
    );

    metadata.insert(
        "concatenated_trap".to_string(),
        ProblemMetadata {
            name: "concatenated_trap".to_string(),
            fid: 24,
            description: "Deceptive trap blocks of 5 bits; maximum n".to_string(),
            separable: false,
            dimension_constraint: None,
        },
    );

    metadata
}
