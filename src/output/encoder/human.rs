use super::encoder::Encoder;
use crate::benchmark::BenchmarkReport;
use crate::error::Result;
use crate::model::LabeledMetric;

/// Console layout: input dictionary, sorted dictionaries, timings, conclusion.
pub struct HumanReadableEncoder {}

impl HumanReadableEncoder {
    pub fn new() -> Self {
        Self {}
    }

    fn format_dict<'a, I>(&self, metrics: I) -> String
    where
        I: IntoIterator<Item = &'a LabeledMetric>,
    {
        let items = metrics
            .into_iter()
            .map(|m| format!("{}: {}", quote(m.label()), m.value()))
            .collect::<Vec<_>>();
        format!("{{{}}}", items.join(", "))
    }
}

impl Default for HumanReadableEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for HumanReadableEncoder {
    fn encode(&self, report: &BenchmarkReport) -> Result<Vec<u8>> {
        let mut lines = vec![
            "--- Final Image Counts Dictionary ---".to_string(),
            self.format_dict(report.input()),
            String::new(),
            "--- Sorted Dictionaries ---".to_string(),
        ];

        for ranking in report.rankings() {
            lines.push(String::new());
            lines.push(format!("{} Result:", ranking.algorithm));
            lines.push(self.format_dict(&ranking.result));
        }

        lines.push(String::new());
        lines.push("--- Timing ---".to_string());
        for timing in report.timings() {
            lines.push(format!(
                "{} Time: {} seconds",
                timing.algorithm(),
                timing.seconds()
            ));
        }

        lines.push(String::new());
        lines.push("--- Conclusion ---".to_string());
        lines.push(format!(
            "The fastest sorting algorithm for this problem is **{}**.",
            report.fastest()
        ));

        if let Some(buckets) = report.counting_buckets() {
            if buckets > report.entries() {
                lines.push(format!(
                    "Note: Counting Sort allocated {} buckets for {} entries; \
                     its cost grows with the largest value, not just the entry count.",
                    buckets,
                    report.entries()
                ));
            }
        }

        Ok(String::into_bytes(lines.join("\n")))
    }
}

/// Quotes a label the way Python's `repr` does, so the dictionary lines can be
/// fed back through `--input dict`.
fn quote(label: &str) -> String {
    let quote = if label.contains('\'') && !label.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(label.len() + 2);
    out.push(quote);
    for c in label.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
