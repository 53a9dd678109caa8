//! Project manager — CRUD over `ResumeRecord.projects`.
//!
//! Items are addressed by their stable synthetic id; indices are derived
//! from the current list at the presentation boundary only and never cached
//! across a mutation. Add and update require a non-empty title and
//! description; link and type are optional.

use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{DescriptionGenerator, DescriptionRequest, GenerationError};
use crate::models::resume::{Project, ResumeRecord};

/// The working form for adding or updating a project.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(rename = "type", default)]
    pub project_type: String,
}

impl ProjectForm {
    fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err(AppError::Validation(
                "project title and description are required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Appends a new project and returns its id.
pub fn add_project(record: &mut ResumeRecord, form: ProjectForm) -> Result<Uuid, AppError> {
    form.validate()?;
    let project = Project::new(form.title, form.description, form.link, form.project_type);
    let id = project.id;
    record.projects.push(project);
    Ok(id)
}

/// Writes the form back to the project with the given id, keeping the id.
pub fn update_project(
    record: &mut ResumeRecord,
    id: Uuid,
    form: ProjectForm,
) -> Result<(), AppError> {
    form.validate()?;
    let project = record
        .projects
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| AppError::NotFound(format!("project {id} not found")))?;
    project.title = form.title;
    project.description = form.description;
    project.link = form.link;
    project.project_type = form.project_type;
    Ok(())
}

/// Removes the project with the given id; later items shift down by one.
pub fn delete_project(record: &mut ResumeRecord, id: Uuid) -> Result<(), AppError> {
    let before = record.projects.len();
    record.projects.retain(|p| p.id != id);
    if record.projects.len() == before {
        return Err(AppError::NotFound(format!("project {id} not found")));
    }
    Ok(())
}

/// Id → index translation at the presentation boundary. Re-derive on every
/// render; a position is stale the moment the list mutates.
pub fn position_of(projects: &[Project], id: Uuid) -> Option<usize> {
    projects.iter().position(|p| p.id == id)
}

/// Generates a description for the form via the external collaborator.
///
/// Returns the new text on success; on failure the caller's form is left
/// exactly as it was and the error propagates to the general error channel.
pub async fn generate_description(
    form_title: &str,
    form_type: &str,
    current_description: &str,
    generator: &dyn DescriptionGenerator,
) -> Result<String, GenerationError> {
    let req = DescriptionRequest {
        project_name: form_title.to_string(),
        project_type: form_type.to_string(),
        existing_description: if current_description.is_empty() {
            None
        } else {
            Some(current_description.to_string())
        },
    };
    generator.describe(&req).await
}
