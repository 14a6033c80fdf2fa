//! Greedy, randomized and Gibbs sampling motif search over collections of DNA sequences

pub mod config;
pub mod error;
pub mod fasta;
pub mod gibbs;
pub mod greedy;
pub mod logging;
pub mod profile;
pub mod randomized;
pub mod replication;
pub mod restart;
pub mod sampling;
pub mod types;
