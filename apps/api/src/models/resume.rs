use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The normalized, template-agnostic résumé record.
///
/// Owned by the single slot in `AppState` and replaced wholesale on every
/// fetch or committed edit — never merged, never partially mutated in place.
/// Wire names are camelCase to match the collaborating UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub qualifications: Vec<Qualification>,
    pub achievements: Vec<String>,
    pub projects: Vec<Project>,
    pub skills: Vec<String>,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub social_impact: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Qualification {
    pub year: String,
    pub degree: String,
    pub institute: String,
    pub performance: String,
}

/// One résumé project, derived 1:1 from a GitHub repository or added by hand.
///
/// `id` is a synthetic stable identifier assigned at creation time. All
/// project-manager mutations address items by this id; positions are only
/// derived at the presentation boundary (see `resume::projects::position_of`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub link: String,
    #[serde(rename = "type")]
    pub project_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub title: String,
    pub organization: String,
    pub duration: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

impl Project {
    pub fn new(title: String, description: String, link: String, project_type: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            link,
            project_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_trips_through_json_with_camel_case() {
        let record = ResumeRecord {
            name: "Octocat".to_string(),
            job_title: "Mascot".to_string(),
            email: "octo@github.com".to_string(),
            phone: "Not provided".to_string(),
            linkedin: "Not provided".to_string(),
            github: "https://github.com/octocat".to_string(),
            qualifications: vec![],
            achievements: vec!["Followers: 3".to_string()],
            projects: vec![Project::new(
                "hello-world".to_string(),
                "First repo".to_string(),
                "https://github.com/octocat/hello-world".to_string(),
                "Personal Project".to_string(),
            )],
            skills: vec!["Rust".to_string()],
            courses: vec![],
            positions: vec![],
            social_impact: vec![],
        };

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("jobTitle").is_some(), "jobTitle must be camelCase");
        assert!(json.get("socialImpact").is_some());
        assert_eq!(json["projects"][0]["type"], "Personal Project");

        let back: ResumeRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_project_without_id_gets_synthetic_one() {
        // UI payloads predating stable ids omit the field entirely.
        let json = serde_json::json!({
            "title": "legacy",
            "description": "no id in payload",
            "link": "",
            "type": "Personal Project"
        });
        let project: Project = serde_json::from_value(json).unwrap();
        assert!(!project.id.is_nil());
    }
}
