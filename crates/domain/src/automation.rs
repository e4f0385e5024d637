//! Automation rule — a free-text trigger/action pair shown on the dashboard.
//!
//! Rules are descriptive only; nothing evaluates them.

use serde::{Deserialize, Serialize};

use crate::error::{HomeboardError, ValidationError};
use crate::id::RuleId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationRule {
    pub id: RuleId,
    pub name: String,
    /// Condition description, e.g. `"Sunset"`.
    pub trigger: String,
    /// Effect description, e.g. `"Turn on all lights"`.
    pub action: String,
    pub enabled: bool,
    /// Time of day, e.g. `"18:00"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
}

impl AutomationRule {
    /// Create a new enabled rule with a generated id.
    ///
    /// # Errors
    ///
    /// Returns [`HomeboardError::Validation`] when `name` is empty.
    pub fn new(
        name: impl Into<String>,
        trigger: impl Into<String>,
        action: impl Into<String>,
    ) -> Result<Self, HomeboardError> {
        let rule = Self {
            id: RuleId::new(),
            name: name.into(),
            trigger: trigger.into(),
            action: action.into(),
            enabled: true,
            schedule: None,
        };
        rule.validate()?;
        Ok(rule)
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<RuleId>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn with_schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = Some(schedule.into());
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HomeboardError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), HomeboardError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}
