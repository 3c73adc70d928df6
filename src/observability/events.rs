//! Observable ledger events
//!
//! Events are explicit and typed; the logger only ever receives names
//! from this set.

use std::fmt;

/// Observable events in defectdb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Ledger operations
    /// A new defect was recorded
    DefectLogged,
    /// An existing defect changed status
    DefectStatusUpdated,
    /// A status update referenced an unknown id
    DefectNotFound,
    /// Caller input was rejected at the model boundary
    ValidationRejected,

    // Reporting
    /// An aggregate report was computed
    ReportComputed,

    // Store operations
    /// The record set could not be loaded
    StoreLoadFailed,
    /// The record set could not be saved
    StoreSaveFailed,
}

impl Event {
    /// Returns the event name string
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::DefectLogged => "DEFECT_LOGGED",
            Event::DefectStatusUpdated => "DEFECT_STATUS_UPDATED",
            Event::DefectNotFound => "DEFECT_NOT_FOUND",
            Event::ValidationRejected => "VALIDATION_REJECTED",
            Event::ReportComputed => "REPORT_COMPUTED",
            Event::StoreLoadFailed => "STORE_LOAD_FAILED",
            Event::StoreSaveFailed => "STORE_SAVE_FAILED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_snake_case() {
        let events = [
            Event::DefectLogged,
            Event::DefectStatusUpdated,
            Event::DefectNotFound,
            Event::ValidationRejected,
            Event::ReportComputed,
            Event::StoreLoadFailed,
            Event::StoreSaveFailed,
        ];
        for event in events {
            let name = event.as_str();
            assert!(name
                .chars()
                .all(|c| c.is_ascii_uppercase() || c == '_'));
            assert_eq!(format!("{}", event), name);
        }
    }
}
