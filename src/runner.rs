use std::io::BufRead;

use tracing::{debug, warn};

use crate::benchmark::{BenchmarkConfig, BenchmarkCoordinator, BenchmarkReport};
use crate::cliopt::{CliOpt, Encoding, InputFormat};
use crate::error::Result;
use crate::input::{DelimReader, DictSource, LineSource, MetricSource, RegexDecoder};
use crate::output::{Encoder, HumanReadableEncoder, JSONEncoder, Output, Writer};

// MetricSource -> MetricMapping -> BenchmarkCoordinator -> BenchmarkReport -> (Encoder -> Writer)
//   producer                          engine                                   consumer
//
// LineSource == Reader -> Decoder (regex)   ->  MetricMapping
// DictSource == Reader -> nom dict parser   ->  MetricMapping

pub struct Runner {
    source: Box<dyn MetricSource>,
    coordinator: BenchmarkCoordinator,
    output: Output,
}

impl Runner {
    pub fn new(
        source: Box<dyn MetricSource>,
        config: BenchmarkConfig,
        encoder: Box<dyn Encoder>,
        writer: Box<dyn Writer>,
    ) -> Self {
        Self {
            source,
            coordinator: BenchmarkCoordinator::new(config),
            output: Output::new(writer, encoder),
        }
    }

    pub fn from_opt(
        opt: &CliOpt,
        reader: Box<dyn BufRead>,
        writer: Box<dyn Writer>,
    ) -> Result<Self> {
        let source: Box<dyn MetricSource> = match opt.input {
            InputFormat::Lines => {
                let decoder = match &opt.decode {
                    Some(pattern) => RegexDecoder::new(pattern)?,
                    None => RegexDecoder::default(),
                };
                Box::new(LineSource::new(
                    Box::new(DelimReader::new(reader)),
                    Box::new(decoder),
                ))
            }
            InputFormat::Dict => {
                if opt.decode.is_some() {
                    warn!("--decode is ignored for dictionary input");
                }
                Box::new(DictSource::new(Box::new(reader)))
            }
        };

        let encoder: Box<dyn Encoder> = match opt.encode {
            Encoding::HumanReadable => Box::new(HumanReadableEncoder::new()),
            Encoding::JSON => Box::new(JSONEncoder::new(false)),
            Encoding::PrettyJSON => Box::new(JSONEncoder::new(true)),
        };

        Ok(Self::new(source, opt.config()?, encoder, writer))
    }

    pub fn run(&mut self) -> Result<BenchmarkReport> {
        let mapping = self.source.read_mapping()?;
        debug!(
            entries = mapping.len(),
            max_value = ?mapping.max_value(),
            "input mapping ready"
        );

        let report = self.coordinator.run(&mapping)?;
        self.output.write(&report)?;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    use structopt::StructOpt;

    use super::*;
    use crate::error::ErrorKind;
    use crate::rank::Algorithm;

    struct SharedWriter(Rc<RefCell<Vec<u8>>>);

    impl Writer for SharedWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<()> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(())
        }
    }

    fn run(args: &[&str], input: &'static str) -> (Result<BenchmarkReport>, String) {
        let opt = CliOpt::from_iter_safe(args).expect("valid args");
        let buf = Rc::new(RefCell::new(Vec::new()));
        let report = Runner::from_opt(
            &opt,
            Box::new(input.as_bytes()),
            Box::new(SharedWriter(Rc::clone(&buf))),
        )
        .and_then(|mut runner| runner.run());
        let out = String::from_utf8(buf.borrow().clone()).expect("UTF-8 output");
        (report, out)
    }

    #[test]
    fn test_lines_to_human() {
        let (report, out) = run(&["rankbench"], "a 3\nb 1\nc 1\nd 2\n");
        let report = report.expect("run succeeds");
        assert_eq!(4, report.entries());
        assert!(
            out.starts_with("--- Final Image Counts Dictionary ---\n{'a': 3, 'b': 1, 'c': 1, 'd': 2}\n"),
            "{}",
            out
        );
        assert!(out.contains("Merge Sort Result:\n{'b': 1, 'c': 1, 'd': 2, 'a': 3}"), "{}", out);
        assert!(out.contains(&format!("**{}**", report.fastest())), "{}", out);
    }

    #[test]
    fn test_dict_to_json() {
        let (report, out) = run(&["rankbench", "-i", "dict", "-e", "json"], "{'only': 5}");
        let report = report.expect("run succeeds");
        for algorithm in &Algorithm::ALL {
            assert_eq!(vec!["only"], report.ranking(*algorithm).unwrap().labels());
        }
        let doc: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
        assert_eq!(1, doc["entries"]);
    }

    #[test]
    fn test_custom_decoder() {
        let (report, _) = run(
            &["rankbench", "-d", r"^(?P<value>\d+),(?P<label>.+)$"],
            "3,a\n1,b\n",
        );
        assert_eq!(vec!["b", "a"], report.unwrap().ranking(Algorithm::Merge).unwrap().labels());
    }

    #[test]
    fn test_negative_value_fails_whole_run() {
        let (report, out) = run(&["rankbench", "-i", "dict"], "{'x': -1}");
        assert_eq!(ErrorKind::PreconditionViolation, report.unwrap_err().kind());
        assert!(out.is_empty());
    }

    #[test]
    fn test_bad_decoder_pattern() {
        let (report, _) = run(&["rankbench", "-d", r"(\d+)"], "");
        assert_eq!(ErrorKind::MalformedInput, report.unwrap_err().kind());
    }
}
