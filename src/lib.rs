//! # ab-stats
//!
//! Simulation and statistical analysis of two-group conversion experiments.
//!
//! This crate generates synthetic conversion outcomes for a control and a treatment
//! group under known true success rates, summarizes each group, compares the two
//! groups with a two-sample significance test and reports a confidence interval for
//! the difference in conversion rates. It is written for experiment prototyping:
//! every run owns its random source, so a seeded run is reproducible bit for bit.
//!
//! ## Core Features
//!
//! - **Outcome Simulation**: binomial draws per visitor with an explicitly seeded,
//!   caller-owned random source
//! - **Two-Sample Testing**: Student's and Welch's t-tests, a pooled two-proportion
//!   z-test and a Mann-Whitney U test, with one- and two-sided alternatives
//! - **Interval Estimation**: Wald confidence interval for the difference of two
//!   proportions
//! - **Effect Size Calculations**: Cohen's h and Cohen's d, absolute and relative lift
//!
//! ## Quick Start
//!
//! Build an [`experiment::ExperimentConfig`], call [`experiment::run`] and render the
//! outcome with [`report::render_report`]. The `ab-stats` binary wraps exactly that
//! pipeline behind a command line.
//!
//! ## Module Organization
//!
//! - **[`simulation`]**: synthetic outcome generation
//! - **[`summary`]**: per-group summary statistics
//! - **[`testing`]**: statistical tests, intervals and effect sizes
//! - **[`experiment`]**: configuration, validation and the single-run pipeline
//! - **[`report`]**: human-readable report rendering

pub mod cli;
pub mod error;
pub mod experiment;
pub mod report;
pub mod simulation;
pub mod summary;
pub mod testing;

pub use error::ExperimentError;
