use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Descriptive flag on a configuration; carries no behavior of its own.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfigStatus {
    Active,
    Inactive,
}

impl Default for ConfigStatus {
    fn default() -> Self {
        Self::Inactive
    }
}

/// A stored configuration record. Hypermedia links are attached by the
/// HTTP layer on the way out and never live here.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Configuration {
    pub id: u32,
    pub content: String,
    pub status: ConfigStatus,
}

/// Create/update input model: no id, the store assigns one.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigurationInput {
    pub content: Option<String>,
    #[serde(default)]
    pub status: ConfigStatus,
}

impl ConfigurationInput {
    /// Required-content check shared by create and update.
    pub fn validate(&self) -> Result<String, ServiceError> {
        match self.content.as_deref() {
            Some(c) if !c.trim().is_empty() => Ok(c.to_string()),
            _ => Err(ServiceError::Validation("Config content not found".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&ConfigStatus::Active).unwrap(), "\"ACTIVE\"");
        assert_eq!(serde_json::to_string(&ConfigStatus::Inactive).unwrap(), "\"INACTIVE\"");
    }

    #[test]
    fn input_without_status_defaults_to_inactive() {
        let input: ConfigurationInput = serde_json::from_str(r#"{"content":"c"}"#).unwrap();
        assert_eq!(input.status, ConfigStatus::Inactive);
    }

    #[test]
    fn blank_content_is_rejected() {
        let input = ConfigurationInput { content: Some("   ".into()), status: ConfigStatus::Active };
        assert!(matches!(input.validate(), Err(ServiceError::Validation(_))));
        let input = ConfigurationInput { content: None, status: ConfigStatus::Active };
        assert!(matches!(input.validate(), Err(ServiceError::Validation(_))));
    }
}
