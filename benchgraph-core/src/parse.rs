use std::str::FromStr;

use regex::Regex;

use crate::report::{Method, Report};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid report pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("line {line}: unknown method `{name}` (expected GET, POST, or WebSocket)")]
    UnknownMethod { line: usize, name: String },

    #[error("line {line}: no numeric value after `{label}` in `{text}`")]
    MissingValue {
        line: usize,
        label: &'static str,
        text: String,
    },
}

const SECTION_PATTERN: &str = r"=== (.*?) Benchmark ===";
const RPS_PATTERN: &str = r"Requests/second:\s*(\d+(?:\.\d+)?)";
const MPS_PATTERN: &str = r"messages/second:\s*(\d+(?:\.\d+)?)";

const METHOD_PREFIX: &str = "Method: ";
const RPS_LABEL: &str = "Requests/second:";
const MPS_LABEL: &str = "messages/second:";

/// Single-pass scanner for plaintext benchmark reports.
///
/// Two pieces of scan state persist across lines: the configuration label
/// from the latest section header and the method from the latest `Method:`
/// marker. Both are last-write-wins; any interleaving is accepted.
pub struct ReportParser {
    section: Regex,
    rps: Regex,
    mps: Regex,
}

impl ReportParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            section: Regex::new(SECTION_PATTERN)?,
            rps: Regex::new(RPS_PATTERN)?,
            mps: Regex::new(MPS_PATTERN)?,
        })
    }

    /// Scans `text` line by line and aggregates every recognized sample.
    ///
    /// Patterns are checked in precedence order per line (section marker,
    /// method marker, request throughput, message rate); lines matching
    /// none are ignored. Throughput values seen before any method marker
    /// are dropped; message rates never require a method marker.
    pub fn parse(&self, text: &str) -> Result<Report> {
        let mut report = Report::default();
        let mut current_config: Option<String> = None;
        let mut current_method: Option<Method> = None;

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;

            if let Some(caps) = self.section.captures(line) {
                current_config = Some(caps[1].to_string());
            } else if let Some((_, rest)) = line.split_once(METHOD_PREFIX) {
                let name = rest.trim();
                current_method =
                    Some(Method::from_str(name).map_err(|_| Error::UnknownMethod {
                        line: line_no,
                        name: name.to_string(),
                    })?);
            } else if line.contains(RPS_LABEL) {
                let value = extract_value(&self.rps, line, line_no, RPS_LABEL)?;
                if let Some(method) = current_method {
                    report
                        .series_mut(method)
                        .push(value, current_config.as_deref().unwrap_or(""));
                }
            } else if line.contains(MPS_LABEL) {
                let value = extract_value(&self.mps, line, line_no, MPS_LABEL)?;
                report
                    .series_mut(Method::WebSocket)
                    .push(value, current_config.as_deref().unwrap_or(""));
            }
        }

        Ok(report)
    }
}

fn extract_value(
    pattern: &Regex,
    line: &str,
    line_no: usize,
    label: &'static str,
) -> Result<f64> {
    let missing = || Error::MissingValue {
        line: line_no,
        label,
        text: line.trim().to_string(),
    };

    let caps = pattern.captures(line).ok_or_else(missing)?;
    caps[1].parse().map_err(|_| missing())
}
