use std::process::ExitCode;

use crate::issues::Report;

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): Command completed successfully, every key accounted for
/// - `Failure` (1): Command completed but found undefined or unused keys
/// - `Error` (2): Command failed due to an input error (missing file, invalid JSON, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully, no problems found.
    Success,
    /// Command completed but found problems.
    Failure,
    /// Command failed due to an input or internal error.
    Error,
}

impl ExitStatus {
    pub fn from_report(report: &Report) -> Self {
        if report.passed() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
