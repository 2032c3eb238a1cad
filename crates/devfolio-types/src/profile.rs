use serde::{Deserialize, Serialize};

/// A developer profile as served by the hub API
///
/// The email is the natural key: profiles are fetched and updated by it and
/// it never changes once the profile exists. List fields default to empty
/// because older server records may omit them entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub education: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub work: Vec<WorkEntry>,
    #[serde(default)]
    pub links: SocialLinks,
}

/// A project shown on a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ProjectEntry {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        link: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            link,
        }
    }
}

/// A work-history entry shown on a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl WorkEntry {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Optional social links attached to a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
}

impl SocialLinks {
    pub fn is_empty(&self) -> bool {
        self.github.is_none() && self.linkedin.is_none() && self.portfolio.is_none()
    }
}
