use std::path::PathBuf;
use std::str::FromStr;

use structopt::StructOpt;

use crate::benchmark::BenchmarkConfig;
use crate::error::{Error, Result};
use crate::model::MetricValue;
use crate::rank::MAX_COUNTING_LIMIT;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "rankbench",
    about = "Rank labeled metrics with counting, merge and selection sort and report the fastest"
)]
pub struct CliOpt {
    /// Input file. Reads stdin when omitted.
    #[structopt(parse(from_os_str))]
    pub path: Option<PathBuf>,

    /// Input format: "lines" (one `label value` per line) or "dict"
    /// (a single `{'label': value, ...}` literal).
    #[structopt(long = "input", short = "i", default_value = "lines")]
    pub input: InputFormat,

    /// Regex with named captures `label` and `value` for line input.
    #[structopt(long = "decode", short = "d")]
    pub decode: Option<String>,

    /// Output encoding: "h" (human readable), "json" or "json-pretty".
    #[structopt(long = "encode", short = "e", default_value = "h")]
    pub encode: Encoding,

    /// Largest value counting sort accepts (it allocates one bucket per value).
    #[structopt(long = "max-value", short = "m", default_value = "1000000")]
    pub max_value: MetricValue,

    /// Log ranker timings and input statistics to stderr.
    #[structopt(long = "verbose", short = "v")]
    pub verbose: bool,
}

impl CliOpt {
    pub fn config(&self) -> Result<BenchmarkConfig> {
        if self.max_value < 0 {
            return Err(Error::malformed("--max-value must not be negative"));
        }
        if self.max_value > MAX_COUNTING_LIMIT {
            return Err(Error::malformed(format!(
                "--max-value must not exceed {}",
                MAX_COUNTING_LIMIT
            )));
        }
        Ok(BenchmarkConfig {
            max_counting_value: self.max_value,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputFormat {
    Lines,
    Dict,
}

impl FromStr for InputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lines" => Ok(InputFormat::Lines),
            "dict" => Ok(InputFormat::Dict),
            _ => Err(format!("unknown input format '{}'", s).into()),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Encoding {
    HumanReadable,
    JSON,
    PrettyJSON,
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "h" => Ok(Encoding::HumanReadable),
            "json" => Ok(Encoding::JSON),
            "json-pretty" => Ok(Encoding::PrettyJSON),
            _ => Err(format!("unknown encoding '{}'", s).into()),
        }
    }
}
