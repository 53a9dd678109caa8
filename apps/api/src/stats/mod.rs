//! Statistics aggregator — chart-ready datasets derived from the record.
//!
//! Two views: how often each skill is mentioned across project descriptions
//! (case-insensitive substring match, floored at one so every skill shows up
//! on the chart), and the split of projects by origin.

use serde::Serialize;

use crate::models::resume::ResumeRecord;

const TYPE_PERSONAL: &str = "Personal Project";
const TYPE_FORKED: &str = "Forked Project";

/// Labels and values in lockstep, the shape charting front-ends consume.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub data: Vec<u64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub skill_mentions: ChartDataset,
    pub project_types: ChartDataset,
}

pub fn aggregate(record: &ResumeRecord) -> StatsResponse {
    StatsResponse {
        skill_mentions: skill_mentions(record),
        project_types: project_types(record),
    }
}

/// Counts, per skill, how many project descriptions mention it. A skill with
/// no mentions still charts with a count of one.
fn skill_mentions(record: &ResumeRecord) -> ChartDataset {
    let descriptions: Vec<String> = record
        .projects
        .iter()
        .map(|p| p.description.to_lowercase())
        .collect();

    let mut labels = Vec::with_capacity(record.skills.len());
    let mut data = Vec::with_capacity(record.skills.len());
    for skill in &record.skills {
        let needle = skill.to_lowercase();
        let mentions = descriptions.iter().filter(|d| d.contains(&needle)).count() as u64;
        labels.push(skill.clone());
        data.push(mentions.max(1));
    }
    ChartDataset { labels, data }
}

/// Three-way split by the project's `type` string: the two well-known
/// origins, everything else counts as a contribution.
fn project_types(record: &ResumeRecord) -> ChartDataset {
    let mut personal = 0u64;
    let mut forked = 0u64;
    let mut contributed = 0u64;
    for project in &record.projects {
        match project.project_type.as_str() {
            TYPE_PERSONAL => personal += 1,
            TYPE_FORKED => forked += 1,
            _ => contributed += 1,
        }
    }
    ChartDataset {
        labels: vec![
            "Personal".to_string(),
            "Forked".to_string(),
            "Contributed".to_string(),
        ],
        data: vec![personal, forked, contributed],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Project;

    fn record(skills: &[&str], projects: &[(&str, &str, &str)]) -> ResumeRecord {
        ResumeRecord {
            name: "x".to_string(),
            job_title: "dev".to_string(),
            email: "x@example.com".to_string(),
            phone: "Not provided".to_string(),
            linkedin: "Not provided".to_string(),
            github: "https://github.com/x".to_string(),
            qualifications: vec![],
            achievements: vec![],
            projects: projects
                .iter()
                .map(|(title, desc, ty)| {
                    Project::new(
                        title.to_string(),
                        desc.to_string(),
                        String::new(),
                        ty.to_string(),
                    )
                })
                .collect(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            courses: vec![],
            positions: vec![],
            social_impact: vec![],
        }
    }

    #[test]
    fn test_skill_mentions_are_case_insensitive() {
        let r = record(
            &["Rust", "Python"],
            &[
                ("a", "A RUST web service", "Personal Project"),
                ("b", "more rust, no snakes", "Personal Project"),
            ],
        );
        let stats = skill_mentions(&r);
        assert_eq!(stats.labels, vec!["Rust", "Python"]);
        assert_eq!(stats.data[0], 2, "both descriptions mention rust");
        assert_eq!(stats.data[1], 1, "unmentioned skill floors at one");
    }

    #[test]
    fn test_skill_with_no_projects_still_charts() {
        let r = record(&["Go"], &[]);
        let stats = skill_mentions(&r);
        assert_eq!(stats.data, vec![1]);
    }

    #[test]
    fn test_project_type_split() {
        let r = record(
            &[],
            &[
                ("a", "", "Personal Project"),
                ("b", "", "Personal Project"),
                ("c", "", "Forked Project"),
                ("d", "", "Open Source Contribution"),
                ("e", "", ""),
            ],
        );
        let stats = project_types(&r);
        assert_eq!(stats.labels, vec!["Personal", "Forked", "Contributed"]);
        assert_eq!(stats.data, vec![2, 1, 2], "unknown types count as contributed");
    }

    #[test]
    fn test_aggregate_serializes_camel_case() {
        let r = record(&["Rust"], &[("a", "rust", "Personal Project")]);
        let json = serde_json::to_value(aggregate(&r)).unwrap();
        assert!(json.get("skillMentions").is_some());
        assert!(json.get("projectTypes").is_some());
    }
}
