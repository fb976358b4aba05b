//! Ranks a label to metric mapping with three sorting algorithms (counting,
//! merge, selection), times every run and reports the fastest.

pub mod benchmark;
pub mod cliopt;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod parser;
pub mod rank;
pub mod runner;
