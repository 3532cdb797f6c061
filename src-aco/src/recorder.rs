//! Evaluation recorder
//!
//! A write-only sink that a benchmark problem forwards every fitness
//! evaluation to. Records accumulate across independent runs (the run
//! index advances on each problem reset) and can be saved as one CSV per
//! problem for offline analysis.

use std::fs::create_dir_all;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use antopt_benchmarks::EvaluationSink;
use serde::Serialize;

/// A single recorded fitness evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRecord {
    /// Independent run index (advances on problem reset)
    pub run: usize,
    /// 1-based evaluation index within the run
    pub evaluation: usize,
    /// Fitness of the evaluated candidate
    pub fitness: f64,
    /// Best fitness seen so far in this run
    pub best_so_far: f64,
}

/// Records every evaluation forwarded by an attached benchmark problem
#[derive(Debug)]
pub struct EvaluationRecorder {
    /// Problem name (used for the CSV filename)
    problem_name: String,
    output_dir: String,
    records: Mutex<Vec<EvaluationRecord>>,
    run: AtomicUsize,
    best: Mutex<Option<f64>>,
}

impl EvaluationRecorder {
    /// Create a recorder writing to the default records directory
    pub fn new(problem_name: &str) -> Self {
        Self::with_output_dir(problem_name, "./data_generated/records")
    }

    /// Create a recorder for the given problem writing to `output_dir`
    pub fn with_output_dir(problem_name: &str, output_dir: &str) -> Self {
        Self {
            problem_name: problem_name.to_string(),
            output_dir: output_dir.to_string(),
            records: Mutex::new(Vec::new()),
            run: AtomicUsize::new(0),
            best: Mutex::new(None),
        }
    }

    /// Get a copy of all recorded evaluations
    pub fn records(&self) -> Vec<EvaluationRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Number of evaluations recorded across all runs
    pub fn num_evaluations(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Clear all records and run state
    pub fn clear(&self) {
        self.records.lock().unwrap().clear();
        self.run.store(0, Ordering::SeqCst);
        *self.best.lock().unwrap() = None;
    }

    /// Save all recorded evaluations to `<output_dir>/<problem>.csv`
    pub fn save_to_csv(&self) -> Result<String, Box<dyn std::error::Error>> {
        create_dir_all(&self.output_dir)?;
        let filename = format!("{}/{}.csv", self.output_dir, self.problem_name);
        let mut writer = csv::Writer::from_path(&filename)?;
        for record in self.records.lock().unwrap().iter() {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(filename)
    }
}

impl EvaluationSink for EvaluationRecorder {
    fn record(&self, evaluation: usize, fitness: f64) {
        let mut best_guard = self.best.lock().unwrap();
        let best_so_far = match *best_guard {
            Some(best) if best >= fitness => best,
            _ => {
                *best_guard = Some(fitness);
                fitness
            }
        };
        drop(best_guard);

        self.records.lock().unwrap().push(EvaluationRecord {
            run: self.run.load(Ordering::SeqCst),
            evaluation,
            fitness,
            best_so_far,
        });
    }

    fn start_run(&self) {
        self.run.fetch_add(1, Ordering::SeqCst);
        *self.best.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_tracks_best_so_far() {
        let recorder = EvaluationRecorder::new("test_problem");
        recorder.record(1, 5.0);
        recorder.record(2, 3.0);
        recorder.record(3, 7.0);

        let records = recorder.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].best_so_far, 5.0);
        assert_eq!(records[1].best_so_far, 5.0);
        assert_eq!(records[2].best_so_far, 7.0);
    }

    #[test]
    fn test_run_boundary_resets_best() {
        let recorder = EvaluationRecorder::new("test_problem");
        recorder.record(1, 9.0);
        recorder.start_run();
        recorder.record(1, 2.0);

        let records = recorder.records();
        assert_eq!(records[0].run, 0);
        assert_eq!(records[1].run, 1);
        assert_eq!(records[1].best_so_far, 2.0);
    }

    #[test]
    fn test_save_to_csv() {
        let dir = tempfile::tempdir().unwrap();
        let recorder =
            EvaluationRecorder::with_output_dir("csv_check", dir.path().to_str().unwrap());
        recorder.record(1, 1.5);
        recorder.record(2, 2.5);

        let path = recorder.save_to_csv().unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next().unwrap(), "run,evaluation,fitness,best_so_far");
        assert_eq!(lines.next().unwrap(), "0,1,1.5,1.5");
        assert_eq!(lines.next().unwrap(), "0,2,2.5,2.5");
    }

    #[test]
    fn test_clear() {
        let recorder = EvaluationRecorder::new("test_problem");
        recorder.record(1, 1.0);
        recorder.start_run();
        recorder.clear();
        assert_eq!(recorder.num_evaluations(), 0);
        recorder.record(1, 4.0);
        assert_eq!(recorder.records()[0].run, 0);
    }
}
