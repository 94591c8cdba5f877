//! Review decision constants and validation functions.
//!
//! A review is the immutable audit record of why a design left `pending`.
//! Approvals may carry an optional comment; rejections must explain
//! themselves, so their comment is mandatory.

use crate::error::CoreError;

/// Design was approved for production.
pub const DECISION_APPROVED: &str = "approved";

/// Design was rejected and returned to the client.
pub const DECISION_REJECTED: &str = "rejected";

/// All valid decision values.
pub const VALID_DECISIONS: &[&str] = &[DECISION_APPROVED, DECISION_REJECTED];

/// Maximum length for a review comment.
pub const MAX_COMMENT_LENGTH: usize = 2_000;

/// Validate that a decision string is one of the accepted values.
pub fn validate_decision(decision: &str) -> Result<(), CoreError> {
    if VALID_DECISIONS.contains(&decision) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid decision '{decision}'. Must be one of: {}",
            VALID_DECISIONS.join(", ")
        )))
    }
}

/// Validate a review comment against the decision being recorded.
///
/// A rejection without a non-blank comment fails before any state is
/// touched; an approval comment is optional. Over-long comments are
/// rejected for both decisions.
pub fn validate_comment(decision: &str, comment: Option<&str>) -> Result<(), CoreError> {
    let has_comment = comment.is_some_and(|c| !c.trim().is_empty());

    if decision == DECISION_REJECTED && !has_comment {
        return Err(CoreError::Validation(
            "Comment is required for rejection".to_string(),
        ));
    }

    if let Some(c) = comment {
        if c.len() > MAX_COMMENT_LENGTH {
            return Err(CoreError::Validation(format!(
                "Comment exceeds maximum length of {MAX_COMMENT_LENGTH} characters"
            )));
        }
    }

    Ok(())
}
