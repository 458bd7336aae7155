//! Validation result shared by every validator

use serde::{Deserialize, Serialize};

/// Result of validating a document or a single entity.
///
/// Errors make the subject unusable (a commit is refused); warnings are advisory.
/// `valid` is always `errors.is_empty()`. Messages are complete sentences in a fixed order
/// so they can be rendered directly and asserted on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[must_use = "validation results should be checked for errors and warnings"]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationReport {
    /// An empty, valid report
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// A report holding a single error
    pub fn from_error(message: impl Into<String>) -> Self {
        let mut report = Self::new();
        report.error(message);
        report
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.valid = false;
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Append another report's messages after this one's
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.valid = self.errors.is_empty();
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tracks_errors() {
        let mut report = ValidationReport::new();
        report.warning("advisory");
        assert!(report.valid);

        let mut other = ValidationReport::new();
        other.error("broken");
        report.merge(other);
        assert!(!report.valid);
        assert_eq!(report.errors, vec!["broken"]);
        assert_eq!(report.warnings, vec!["advisory"]);
    }

    #[test]
    fn test_default_is_valid() {
        let report = ValidationReport::default();
        assert!(report.valid);
        assert!(!ValidationReport::from_error("x").valid);
    }
}
