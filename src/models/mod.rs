//! Shared data models for check results and run reports.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Outcome of checking one discovered file.
pub struct CheckResult {
    pub file: String,
    pub formatted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Aggregated counts used by printers.
pub struct Counts {
    pub total: usize,
    pub formatted: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Everything a completed run produced, in discovery order.
pub struct RunReport {
    pub results: Vec<CheckResult>,
    /// Failing paths, order-preserving subsequence of `results`.
    pub failed: Vec<String>,
}

impl RunReport {
    pub fn push(&mut self, result: CheckResult) {
        if !result.formatted {
            self.failed.push(result.file.clone());
        }
        self.results.push(result);
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn counts(&self) -> Counts {
        Counts {
            total: self.results.len(),
            formatted: self.results.len() - self.failed.len(),
            failed: self.failed.len(),
        }
    }
}
