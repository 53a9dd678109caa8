use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Raw profile payload from `GET /users/{username}`.
///
/// Most fields are nullable upstream; mapping into a `ResumeRecord` degrades
/// missing values to display placeholders instead of failing.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubProfile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub blog: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub followers: u64,
    pub created_at: DateTime<Utc>,
}

/// One entry of `GET /users/{username}/repos`. Transient: consumed into a
/// `projects` entry during the fetch and then discarded.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub fork: bool,
}
