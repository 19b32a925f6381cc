pub mod report;

pub use report::{NewReport, Outcome, Report, Severity};
