//! GitHub data adapter — fetches a profile plus the complete (paginated)
//! repository list and maps them into a normalized `ResumeRecord`.
//!
//! Pages are requested strictly sequentially and concatenated in request
//! order, preserving the upstream listing order. The loop continues while
//! the most recent page is exactly `PAGE_SIZE` long and stops on the first
//! short page.

pub mod models;

use reqwest::{Client, StatusCode};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{Project, Qualification, ResumeRecord};
use models::{GithubProfile, RepoSummary};

/// Fixed number of repositories requested per listing call.
pub const PAGE_SIZE: usize = 100;

const NOT_PROVIDED: &str = "Not provided";
const NO_JOB_TITLE: &str = "No job title available";
const NO_DESCRIPTION: &str = "No description available";

#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    base: String,
}

impl GithubClient {
    pub fn new(base: String) -> Self {
        Self {
            // GitHub rejects requests without a User-Agent.
            client: Client::builder()
                .user_agent(concat!("octoresume-api/", env!("CARGO_PKG_VERSION")))
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            base,
        }
    }

    /// Fetches profile + full repository list and builds the résumé record.
    pub async fn fetch_resume(&self, username: &str) -> Result<ResumeRecord, AppError> {
        let profile = self.fetch_profile(username).await?;
        let repos = self.fetch_all_repos(username).await?;
        info!(
            "Fetched GitHub data for '{username}': {} repositories",
            repos.len()
        );
        Ok(build_record(&profile, &repos))
    }

    pub async fn fetch_profile(&self, username: &str) -> Result<GithubProfile, AppError> {
        let url = format!("{}/users/{username}", self.base);
        let response = self.client.get(&url).send().await?;

        match response.status() {
            s if s.is_success() => Ok(response.json().await?),
            StatusCode::NOT_FOUND => Err(AppError::NotFound(format!(
                "GitHub user '{username}' not found"
            ))),
            s => Err(AppError::Network(format!(
                "GitHub profile request failed with status {s}"
            ))),
        }
    }

    /// Fetches every page of the repository listing, sequentially.
    pub async fn fetch_all_repos(&self, username: &str) -> Result<Vec<RepoSummary>, AppError> {
        let mut all = Vec::new();
        let mut page = 1u32;

        loop {
            let url = format!("{}/users/{username}/repos", self.base);
            let response = self
                .client
                .get(&url)
                .query(&[("per_page", PAGE_SIZE.to_string()), ("page", page.to_string())])
                .send()
                .await?;

            let status = response.status();
            if status == StatusCode::NOT_FOUND {
                return Err(AppError::NotFound(format!(
                    "GitHub user '{username}' not found"
                )));
            }
            if !status.is_success() {
                return Err(AppError::Network(format!(
                    "GitHub repository listing failed with status {status}"
                )));
            }

            let repos: Vec<RepoSummary> = response.json().await?;
            debug!("Repo page {page}: {} entries", repos.len());
            let page_len = repos.len();
            all.extend(repos);

            if !has_more(page_len) {
                break;
            }
            page += 1;
        }

        Ok(all)
    }
}

/// Pagination halting rule: another page exists only while the most recent
/// page came back exactly full.
pub fn has_more(page_len: usize) -> bool {
    page_len == PAGE_SIZE
}

/// Pure mapping from raw GitHub data to the résumé record.
///
/// Missing upstream values degrade to display placeholders. Like the UI this
/// serves, an empty string counts as missing, not as a value.
pub fn build_record(profile: &GithubProfile, repos: &[RepoSummary]) -> ResumeRecord {
    let achievements = vec![
        format!(
            "GitHub Profile created on {}",
            profile.created_at.format("%-d/%-m/%Y")
        ),
        format!("Followers: {}", profile.followers),
        format!("Public Repositories: {}", repos.len()),
    ];

    let projects = repos
        .iter()
        .map(|repo| Project {
            id: Uuid::new_v4(),
            title: repo.name.clone(),
            description: or_placeholder(repo.description.as_deref(), NO_DESCRIPTION),
            link: repo.html_url.clone(),
            project_type: if repo.fork {
                "Forked Project".to_string()
            } else {
                "Personal Project".to_string()
            },
        })
        .collect();

    ResumeRecord {
        name: or_placeholder(profile.name.as_deref(), &profile.login),
        job_title: or_placeholder(profile.bio.as_deref(), NO_JOB_TITLE),
        email: or_placeholder(profile.email.as_deref(), NOT_PROVIDED),
        phone: NOT_PROVIDED.to_string(),
        linkedin: or_placeholder(profile.blog.as_deref(), NOT_PROVIDED),
        github: profile.html_url.clone(),
        qualifications: seed_qualifications(),
        achievements,
        projects,
        skills: seed_skills(),
        courses: seed_courses(),
        positions: vec![],
        social_impact: vec![],
    }
}

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}

/// Seed data — the upstream profile carries no structured education, skill or
/// course information, so these start from fixed lists the user then edits.
fn seed_qualifications() -> Vec<Qualification> {
    vec![Qualification {
        year: "2022 - Present".to_string(),
        degree: "B.Tech".to_string(),
        institute: "Your Institute".to_string(),
        performance: "—".to_string(),
    }]
}

fn seed_skills() -> Vec<String> {
    [
        "Java",
        "Python",
        "JavaScript",
        "TypeScript",
        "SQL",
        "Node.js",
        "ReactJS",
        "Next.js",
        "Tailwind CSS",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn seed_courses() -> Vec<String> {
    [
        "Applied Probability And Statistics",
        "Machine Learning Specialization",
        "Web Development",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
