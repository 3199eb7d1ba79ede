//! Worked examples and a runner that checks `find` against expected answers.
//!
//! Cases use the same JSON shape as the problem's published examples:
//!
//! ```json
//! [{"input": {"nums": [2, 7, 11, 15], "target": 9}, "output": [0, 1]}]
//! ```
//!
//! An empty `output` means that no pair sums to the target.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::two_sum;

/// Failure to obtain a list of cases.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The case file could not be opened or read. The I/O error is the source.
    #[error("reading {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The data was not a JSON array of cases.
    #[error("malformed case data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Arguments to `find`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub nums: Vec<i64>,
    pub target: i64,
}

/// An input together with the answer `find` should give for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub input: Input,
    /// Expected indices, or empty if there is no answer.
    pub output: Vec<usize>,
}

impl Case {
    /// Builds a case from its parts. An empty `output` expects no pair.
    pub fn new(nums: Vec<i64>, target: i64, output: Vec<usize>) -> Self {
        Case {
            input: Input { nums, target },
            output,
        }
    }
}

/// The result of running one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// 1-based position of the case in its list.
    pub example: usize,
    pub input: Input,
    pub expected: Vec<usize>,
    pub actual: Vec<usize>,
    pub passed: bool,
}

/// The problem's three worked examples.
pub fn builtin() -> Vec<Case> {
    vec![
        Case::new(vec![2, 7, 11, 15], 9, vec![0, 1]),
        Case::new(vec![3, 2, 4], 6, vec![1, 2]),
        Case::new(vec![3, 3], 6, vec![0, 1]),
    ]
}

/// Reads a JSON array of cases.
pub fn load<R: Read>(reader: R) -> Result<Vec<Case>, Error> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads a JSON array of cases from the file at `path`.
pub fn load_path(path: &Path) -> Result<Vec<Case>, Error> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cases = load(BufReader::new(file))?;
    log::debug!("loaded {} cases from {}", cases.len(), path.display());
    Ok(cases)
}

/// Runs `find` on every case, in order.
pub fn run(cases: &[Case]) -> Vec<Outcome> {
    cases
        .iter()
        .enumerate()
        .map(|(i, case)| {
            let actual = two_sum::find(&case.input.nums, case.input.target)
                .map(|pair| pair.indices().to_vec())
                .unwrap_or_default();
            let passed = actual == case.output;
            if !passed {
                log::warn!(
                    "example {}: expected {:?}, got {:?}",
                    i + 1,
                    case.output,
                    actual
                );
            }
            Outcome {
                example: i + 1,
                input: case.input.clone(),
                expected: case.output.clone(),
                actual,
                passed,
            }
        })
        .collect()
}

/// Pass and fail counts over a run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    /// Tallies a list of outcomes.
    pub fn of(outcomes: &[Outcome]) -> Self {
        let passed = outcomes.iter().filter(|o| o.passed).count();
        Summary {
            passed,
            failed: outcomes.len() - passed,
        }
    }

    /// Whether no outcome failed. True for an empty run.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
