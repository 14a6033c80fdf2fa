use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MotifError, Result};

/// The motif search heuristic to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Greedy,
    Randomized,
    Gibbs,
}

impl FromStr for Algorithm {
    type Err = MotifError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "greedy" => Ok(Algorithm::Greedy),
            "randomized" => Ok(Algorithm::Randomized),
            "gibbs" => Ok(Algorithm::Gibbs),
            _ => Err(MotifError::invalid_parameter(
                "algorithm",
                s,
                "expected one of greedy, randomized, gibbs",
            )),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Greedy => "greedy",
            Algorithm::Randomized => "randomized",
            Algorithm::Gibbs => "gibbs",
        };
        write!(f, "{}", name)
    }
}

/// Parameters of a motif search run through [`crate::restart::run_search`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Motif length
    pub k: usize,
    /// Number of leading sequences to search; all sequences when `None`
    pub t: Option<usize>,
    pub algorithm: Algorithm,
    /// Gibbs sampler iterations per restart
    pub iterations: usize,
    /// Independent restarts of the randomized algorithms
    pub restarts: usize,
    /// Seed of the random source
    pub seed: u64,
    /// Spread restarts over the rayon thread pool
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            k: 8,
            t: None,
            algorithm: Algorithm::Gibbs,
            iterations: 100,
            restarts: 20,
            seed: 0,
            parallel: true,
        }
    }
}

impl SearchConfig {
    /// Checks the parameters that do not depend on the input sequences.
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(MotifError::invalid_parameter("k", self.k, "must be positive"));
        }
        if self.t == Some(0) {
            return Err(MotifError::invalid_parameter("t", 0, "must be positive"));
        }
        if self.algorithm != Algorithm::Greedy && self.restarts == 0 {
            return Err(MotifError::invalid_parameter(
                "restarts",
                self.restarts,
                "randomized searches need at least one restart",
            ));
        }
        if self.algorithm == Algorithm::Gibbs && self.iterations == 0 {
            return Err(MotifError::invalid_parameter(
                "iterations",
                self.iterations,
                "the Gibbs sampler needs at least one iteration",
            ));
        }
        Ok(())
    }
}
