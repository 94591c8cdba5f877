//! Design lifecycle constants and validation functions.
//!
//! A design moves through a three-state machine: it is created `pending`
//! and is moved exactly once to either `approved` or `rejected` by the
//! review workflow. Both end states are terminal.

use crate::error::CoreError;

/// Design awaits a review decision. Initial state.
pub const STATUS_PENDING: &str = "pending";

/// Design was approved and may generate a technical sheet. Terminal.
pub const STATUS_APPROVED: &str = "approved";

/// Design was rejected. Terminal.
pub const STATUS_REJECTED: &str = "rejected";

/// All valid design status values.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_APPROVED, STATUS_REJECTED];

/// Validate that a status string is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid design status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// True for states that permit no further transition.
pub fn is_terminal(status: &str) -> bool {
    status == STATUS_APPROVED || status == STATUS_REJECTED
}

/// True when `from -> to` is a legal transition.
///
/// The only legal transitions are `pending -> approved` and
/// `pending -> rejected`.
pub fn can_transition(from: &str, to: &str) -> bool {
    from == STATUS_PENDING && is_terminal(to)
}

/// Require that a design is still reviewable (i.e. `pending`).
pub fn ensure_reviewable(status: &str) -> Result<(), CoreError> {
    if status == STATUS_PENDING {
        Ok(())
    } else {
        Err(CoreError::InvalidState(
            "Only pending designs can be reviewed".to_string(),
        ))
    }
}

/// Require that a design may generate a technical sheet (i.e. `approved`).
pub fn ensure_sheet_ready(status: &str) -> Result<(), CoreError> {
    if status == STATUS_APPROVED {
        Ok(())
    } else {
        Err(CoreError::InvalidState(
            "Only approved designs can generate technical sheets".to_string(),
        ))
    }
}

/// Require that a design may still be edited by its owner (i.e. `pending`).
pub fn ensure_editable(status: &str) -> Result<(), CoreError> {
    if status == STATUS_PENDING {
        Ok(())
    } else {
        Err(CoreError::InvalidState(
            "Only pending designs can be updated".to_string(),
        ))
    }
}

/// Validate a color choice against a product's available colors.
pub fn validate_color_choice(available_colors: &[String], color: &str) -> Result<(), CoreError> {
    if color.trim().is_empty() {
        return Err(CoreError::Validation(
            "Color must not be empty".to_string(),
        ));
    }
    if available_colors.iter().any(|c| c == color) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Color {color} is not available for this product"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_statuses_accepted() {
        assert!(validate_status(STATUS_PENDING).is_ok());
        assert!(validate_status(STATUS_APPROVED).is_ok());
        assert!(validate_status(STATUS_REJECTED).is_ok());
    }

    #[test]
    fn test_invalid_status_rejected() {
        let result = validate_status("draft");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid design status"));
    }

    #[test]
    fn test_empty_status_rejected() {
        assert!(validate_status("").is_err());
    }

    #[test]
    fn test_only_pending_transitions() {
        assert!(can_transition(STATUS_PENDING, STATUS_APPROVED));
        assert!(can_transition(STATUS_PENDING, STATUS_REJECTED));

        // Terminal states never transition again.
        assert!(!can_transition(STATUS_APPROVED, STATUS_REJECTED));
        assert!(!can_transition(STATUS_APPROVED, STATUS_PENDING));
        assert!(!can_transition(STATUS_REJECTED, STATUS_APPROVED));
        assert!(!can_transition(STATUS_REJECTED, STATUS_PENDING));

        // No self-transitions.
        assert!(!can_transition(STATUS_PENDING, STATUS_PENDING));
    }

    #[test]
    fn test_terminal_states() {
        assert!(!is_terminal(STATUS_PENDING));
        assert!(is_terminal(STATUS_APPROVED));
        assert!(is_terminal(STATUS_REJECTED));
    }

    #[test]
    fn test_ensure_reviewable() {
        assert!(ensure_reviewable(STATUS_PENDING).is_ok());

        let err = ensure_reviewable(STATUS_APPROVED).unwrap_err();
        assert!(err
            .to_string()
            .contains("Only pending designs can be reviewed"));
        assert!(ensure_reviewable(STATUS_REJECTED).is_err());
    }

    #[test]
    fn test_ensure_sheet_ready() {
        assert!(ensure_sheet_ready(STATUS_APPROVED).is_ok());

        let err = ensure_sheet_ready(STATUS_PENDING).unwrap_err();
        assert!(err
            .to_string()
            .contains("Only approved designs can generate technical sheets"));
        assert!(ensure_sheet_ready(STATUS_REJECTED).is_err());
    }

    #[test]
    fn test_ensure_editable() {
        assert!(ensure_editable(STATUS_PENDING).is_ok());
        assert!(ensure_editable(STATUS_APPROVED).is_err());
        assert!(ensure_editable(STATUS_REJECTED).is_err());
    }

    #[test]
    fn test_color_in_catalog_accepted() {
        let colors = vec!["white".to_string(), "black".to_string()];
        assert!(validate_color_choice(&colors, "white").is_ok());
        assert!(validate_color_choice(&colors, "black").is_ok());
    }

    #[test]
    fn test_color_not_in_catalog_rejected() {
        let colors = vec!["white".to_string(), "black".to_string()];
        let err = validate_color_choice(&colors, "purple").unwrap_err();
        assert!(err
            .to_string()
            .contains("Color purple is not available for this product"));
    }

    #[test]
    fn test_color_match_is_exact() {
        let colors = vec!["white".to_string()];
        assert!(validate_color_choice(&colors, "White").is_err());
        assert!(validate_color_choice(&colors, " white").is_err());
    }

    #[test]
    fn test_empty_color_rejected() {
        let colors = vec!["white".to_string()];
        assert!(validate_color_choice(&colors, "").is_err());
        assert!(validate_color_choice(&colors, "   ").is_err());
    }
}
