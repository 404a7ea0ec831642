//! The ephemeral cycle entry built from one form submission.

use std::fmt;

/// Styling class applied to the message panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageClass {
    Error,
    Success,
}

impl MessageClass {
    pub fn class_name(self) -> &'static str {
        match self {
            MessageClass::Error => "message error",
            MessageClass::Success => "message success",
        }
    }
}

impl fmt::Display for MessageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// A cycle as entered in the form. Lives only as long as the submission that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleEntry {
    pub start_date: String,
    pub end_date: String,
    pub symptoms: Vec<String>,
}

impl CycleEntry {
    pub fn from_fields(start_date: &str, end_date: &str, symptoms: &str) -> Self {
        Self {
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            symptoms: parse_symptoms(symptoms),
        }
    }

    /// Text shown in the message panel after a successful submission.
    pub fn confirmation(&self) -> String {
        format!(
            "Cycle added: Start Date: {}, End Date: {}, Symptoms: {}",
            self.start_date,
            self.end_date,
            self.symptoms.join(", ")
        )
    }
}

/// Split a raw symptom list on commas and trim each piece.
///
/// Blank pieces are kept, so `""` yields `[""]` and `"a,"` yields `["a", ""]`.
pub fn parse_symptoms(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symptoms_trims_and_keeps_order() {
        assert_eq!(
            parse_symptoms(" cramps ,headache,  nausea"),
            vec!["cramps", "headache", "nausea"]
        );
    }

    #[test]
    fn test_parse_symptoms_keeps_blanks() {
        assert_eq!(parse_symptoms(""), vec![""]);
        assert_eq!(parse_symptoms("cramps,"), vec!["cramps", ""]);
        assert_eq!(parse_symptoms(" , "), vec!["", ""]);
    }

    #[test]
    fn test_confirmation_text() {
        let entry = CycleEntry::from_fields("2024-01-01", "2024-01-10", "cramps, headache");
        assert_eq!(
            entry.confirmation(),
            "Cycle added: Start Date: 2024-01-01, End Date: 2024-01-10, Symptoms: cramps, headache"
        );
    }

    #[test]
    fn test_confirmation_with_no_symptoms() {
        let entry = CycleEntry::from_fields("2024-01-01", "2024-01-10", "");
        assert!(entry.confirmation().ends_with("Symptoms: "));
    }

    #[test]
    fn test_class_names() {
        assert_eq!(MessageClass::Error.class_name(), "message error");
        assert_eq!(MessageClass::Success.to_string(), "message success");
    }
}
