//! Authorization policy for design access.
//!
//! Every design-touching operation consults these functions instead of
//! re-implementing the owner-or-elevated-role check inline. The rules:
//!
//! - clients may view, update, and delete only their own designs;
//! - designers and admins may view any design (they review them);
//! - updates are owner-only; deletes are owner-or-admin;
//! - nobody changes `status` through a plain update -- transitions happen
//!   only in the review workflow.

use crate::error::CoreError;
use crate::roles::{is_elevated, ROLE_ADMIN};
use crate::types::DbId;

/// May `caller` read the design owned by `owner_id`?
pub fn ensure_can_view(role: &str, caller_id: DbId, owner_id: DbId) -> Result<(), CoreError> {
    if caller_id == owner_id || is_elevated(role) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(
            "Unauthorized to view this design".to_string(),
        ))
    }
}

/// May `caller` update the design owned by `owner_id`?
///
/// Only the owner edits a design; reviewers act through the review
/// workflow, not through updates.
pub fn ensure_can_update(_role: &str, caller_id: DbId, owner_id: DbId) -> Result<(), CoreError> {
    if caller_id == owner_id {
        Ok(())
    } else {
        Err(CoreError::Forbidden(
            "Unauthorized to update this design".to_string(),
        ))
    }
}

/// May `caller` delete the design owned by `owner_id`?
pub fn ensure_can_delete(role: &str, caller_id: DbId, owner_id: DbId) -> Result<(), CoreError> {
    if caller_id == owner_id || role == ROLE_ADMIN {
        Ok(())
    } else {
        Err(CoreError::Forbidden(
            "Unauthorized to delete this design".to_string(),
        ))
    }
}

/// Reject any update payload that tries to set `status`.
///
/// Clients get the historical client-facing message; elevated roles are
/// pointed at the review endpoints instead.
pub fn ensure_no_status_change(role: &str, wants_status: bool) -> Result<(), CoreError> {
    if !wants_status {
        return Ok(());
    }
    if is_elevated(role) {
        Err(CoreError::Validation(
            "Design status can only be changed through the review workflow".to_string(),
        ))
    } else {
        Err(CoreError::Forbidden(
            "Clients cannot change design status".to_string(),
        ))
    }
}

/// May `role` invoke review operations (approve/reject/technical sheet)?
pub fn ensure_can_review(role: &str) -> Result<(), CoreError> {
    if is_elevated(role) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(
            "Designer or Admin role required".to_string(),
        ))
    }
}
