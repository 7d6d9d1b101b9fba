//! Naming request types

use serde::{Deserialize, Serialize};

/// Source of the title and body being named
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    #[default]
    Issue,
    #[serde(rename = "pr")]
    PullRequest,
}

impl EntityType {
    /// Wording used in prompts
    pub fn noun(&self) -> &'static str {
        match self {
            EntityType::Issue => "issue",
            EntityType::PullRequest => "pull request",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Issue => write!(f, "issue"),
            EntityType::PullRequest => write!(f, "pr"),
        }
    }
}

impl std::str::FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "issue" => Ok(EntityType::Issue),
            "pr" | "pull-request" | "pull_request" => Ok(EntityType::PullRequest),
            _ => Err(format!(
                "Unknown entity type: {}. Valid values: issue, pr",
                s
            )),
        }
    }
}

/// Title, body and entity type of the thing being named
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub title: String,
    /// May be empty
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub entity_type: EntityType,
}

impl GenerationRequest {
    pub fn new(title: impl Into<String>, body: impl Into<String>, entity_type: EntityType) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            entity_type,
        }
    }

    pub fn issue(title: impl Into<String>) -> Self {
        Self::new(title, String::new(), EntityType::Issue)
    }

    pub fn pull_request(title: impl Into<String>) -> Self {
        Self::new(title, String::new(), EntityType::PullRequest)
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_parse() {
        assert_eq!("issue".parse::<EntityType>(), Ok(EntityType::Issue));
        assert_eq!("PR".parse::<EntityType>(), Ok(EntityType::PullRequest));
        assert_eq!(
            "pull-request".parse::<EntityType>(),
            Ok(EntityType::PullRequest)
        );
        assert!("epic".parse::<EntityType>().is_err());
    }

    #[test]
    fn test_entity_type_serde() {
        let json = serde_json::to_string(&EntityType::PullRequest).unwrap();
        assert_eq!(json, "\"pr\"");
        let back: EntityType = serde_json::from_str("\"issue\"").unwrap();
        assert_eq!(back, EntityType::Issue);
    }

    #[test]
    fn test_request_builders() {
        let request = GenerationRequest::pull_request("Add caching").with_body("details");
        assert_eq!(request.entity_type, EntityType::PullRequest);
        assert!(request.has_body());
        assert!(!GenerationRequest::issue("x").has_body());
    }
}
