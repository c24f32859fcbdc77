pub mod charts;
pub mod export;
pub mod parse;
pub mod report;

pub use charts::Error as ChartError;
pub use export::Error as ExportError;
pub use parse::{Error as ParseError, ReportParser};
pub use report::{Method, MethodSeries, Report, Sample};
