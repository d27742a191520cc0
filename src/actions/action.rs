use std::collections::HashMap;

use thiserror::Error;

/// Reasons an action cannot be listed or run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("name field is empty")]
    EmptyName,
    #[error("script field is empty")]
    EmptyScript,
}

/// A named script together with its per-action overrides
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Action {
    pub name: String,
    pub desc: Option<String>,
    pub script: String,
    pub shell: Option<String>,
    pub env: HashMap<String, String>,
}

impl Action {
    /// Check that the action has both a name and a script.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::EmptyName` or `ActionError::EmptyScript`.
    pub fn validate(&self) -> Result<(), ActionError> {
        if self.name.is_empty() {
            return Err(ActionError::EmptyName);
        }
        if self.script.is_empty() {
            return Err(ActionError::EmptyScript);
        }
        Ok(())
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
