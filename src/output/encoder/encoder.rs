use crate::benchmark::BenchmarkReport;
use crate::error::Result;

pub trait Encoder {
    fn encode(&self, report: &BenchmarkReport) -> Result<Vec<u8>>;
}
