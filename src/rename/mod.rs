mod plan;

pub(crate) use plan::{NamePolicy, RenamePlan};

use std::fs;

use crate::error::RenameError;

/// Move the recording to its new name within the same folder.
///
/// Uses the platform's atomic rename; an existing destination is replaced
/// where the platform allows it.
pub(crate) fn perform(plan: &RenamePlan) -> Result<(), RenameError> {
    fs::rename(&plan.original, &plan.new_path).map_err(|source| RenameError::Io {
        from: plan.original.clone(),
        source,
    })
}
