//! Pre-submission checks for the compare form and teleport search.

use crate::error::ValidationError;

/// Both pickers must hold a selection and the selections must differ.
pub fn validate_selection(user1: &str, user2: &str) -> Result<(), ValidationError> {
    if user1.is_empty() || user2.is_empty() {
        return Err(ValidationError::MissingSelection);
    }
    if user1 == user2 {
        return Err(ValidationError::IdenticalSelection);
    }
    Ok(())
}

/// The teleport search needs a non-blank world id.
pub fn validate_world_id(world_id: &str) -> Result<&str, ValidationError> {
    let world_id = world_id.trim();
    if world_id.is_empty() {
        Err(ValidationError::MissingWorldId)
    } else {
        Ok(world_id)
    }
}
