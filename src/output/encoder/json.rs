use serde::Serialize;

use super::encoder::Encoder;
use crate::benchmark::{BenchmarkReport, TimingRecord};
use crate::error::{ErrorKind, Result};
use crate::model::{LabeledMetric, MetricValue};
use crate::rank::Algorithm;

// {
//   "startedAt": "2021-01-01T00:00:00+00:00",
//   "entries": 4,
//   "maxValue": 3,
//   "rankings": [
//     {"algorithm": "Counting Sort", "result": [{"label": "b", "value": 1}, ...]},
//     ...
//   ],
//   "timings": [
//     {"algorithm": "Counting Sort", "seconds": "0.0000015000", "nanos": 1500},
//     ...
//   ],
//   "fastest": "Merge Sort"
// }
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportRepr<'a> {
    started_at: String,
    entries: usize,
    max_value: Option<MetricValue>,
    rankings: Vec<RankingRepr<'a>>,
    timings: Vec<TimingRepr>,
    fastest: Algorithm,
}

#[derive(Serialize)]
struct RankingRepr<'a> {
    algorithm: Algorithm,
    result: &'a [LabeledMetric],
}

#[derive(Serialize)]
struct TimingRepr {
    algorithm: Algorithm,
    seconds: String,
    nanos: u64,
}

impl From<&TimingRecord> for TimingRepr {
    fn from(timing: &TimingRecord) -> Self {
        Self {
            algorithm: timing.algorithm(),
            seconds: timing.seconds(),
            nanos: timing.elapsed().as_nanos() as u64,
        }
    }
}

pub struct JSONEncoder {
    pretty: bool,
}

impl JSONEncoder {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Encoder for JSONEncoder {
    fn encode(&self, report: &BenchmarkReport) -> Result<Vec<u8>> {
        let repr = ReportRepr {
            started_at: report.started_at().to_rfc3339(),
            entries: report.entries(),
            max_value: report.max_value(),
            rankings: report
                .rankings()
                .iter()
                .map(|r| RankingRepr {
                    algorithm: r.algorithm,
                    result: r.result.entries(),
                })
                .collect(),
            timings: report.timings().iter().map(TimingRepr::from).collect(),
            fastest: report.fastest(),
        };

        let buf = if self.pretty {
            serde_json::to_vec_pretty(&repr)
        } else {
            serde_json::to_vec(&repr)
        };
        buf.map_err(|e| (ErrorKind::Other, "JSON serialization failed", e).into())
    }
}
