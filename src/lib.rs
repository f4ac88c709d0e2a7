pub mod config;
pub mod constants;
pub mod error;
pub mod hdpath;
pub mod ledger;
pub mod matcher;
pub mod oracle;
pub mod pathspace;
pub mod runner;
pub mod telemetry;

#[cfg(test)]
mod runner_tests;
