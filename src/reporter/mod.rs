pub mod json;
pub mod terminal;

use crate::report::ScanReport;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;

pub trait Reporter {
    fn report(&self, report: &ScanReport) -> crate::error::Result<String>;
}
