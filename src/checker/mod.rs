mod issue;
mod rules;

pub use issue::{Issue, IssueValue, Severity};
pub use rules::{ConfigChecker, DEFAULT_EXPECTED_LISTENERS};
