//! Field editor — works on a cloned copy of the committed record and commits
//! atomically. Three edit shapes are supported:
//!
//! - scalar: replace one top-level field,
//! - text list: replace the whole list (skills arrive as a single text box
//!   split on the literal `", "` separator),
//! - struct-list item: replace one field of the item at one index, leaving
//!   every sibling untouched.
//!
//! A batch either applies completely or not at all; `cancel` drops the
//! working copy and restores the committed record.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;

/// Literal separator for the skills round-trip. Joining on it and
/// re-splitting must reproduce the original list exactly.
pub const SKILLS_SEPARATOR: &str = ", ";

pub fn split_skills(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return vec![];
    }
    raw.split(SKILLS_SEPARATOR).map(str::to_string).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarField {
    Name,
    JobTitle,
    Email,
    Phone,
    Linkedin,
    Github,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextListField {
    Skills,
    Achievements,
    Courses,
    SocialImpact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StructListField {
    Qualifications,
    Projects,
    Positions,
}

/// One edit operation against the working copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    SetField {
        field: ScalarField,
        value: String,
    },
    SetTextList {
        field: TextListField,
        values: Vec<String>,
    },
    /// Skills arrive from the UI as one text box; the separator contract
    /// lives in `split_skills`.
    SetSkillsText {
        text: String,
    },
    SetItemField {
        list: StructListField,
        index: usize,
        field: String,
        value: String,
    },
}

/// Applies one op to a record in place. Fails on out-of-range indices and
/// unknown item fields without touching anything.
pub fn apply_op(record: &mut ResumeRecord, op: &EditOp) -> Result<(), AppError> {
    match op {
        EditOp::SetField { field, value } => {
            let slot = match field {
                ScalarField::Name => &mut record.name,
                ScalarField::JobTitle => &mut record.job_title,
                ScalarField::Email => &mut record.email,
                ScalarField::Phone => &mut record.phone,
                ScalarField::Linkedin => &mut record.linkedin,
                ScalarField::Github => &mut record.github,
            };
            *slot = value.clone();
        }
        EditOp::SetTextList { field, values } => {
            let slot = match field {
                TextListField::Skills => &mut record.skills,
                TextListField::Achievements => &mut record.achievements,
                TextListField::Courses => &mut record.courses,
                TextListField::SocialImpact => &mut record.social_impact,
            };
            *slot = values.clone();
        }
        EditOp::SetSkillsText { text } => {
            record.skills = split_skills(text);
        }
        EditOp::SetItemField {
            list,
            index,
            field,
            value,
        } => set_item_field(record, *list, *index, field, value)?,
    }
    Ok(())
}

fn set_item_field(
    record: &mut ResumeRecord,
    list: StructListField,
    index: usize,
    field: &str,
    value: &str,
) -> Result<(), AppError> {
    let out_of_range = |len: usize| {
        AppError::Validation(format!(
            "index {index} out of range for {list:?} (len {len})"
        ))
    };
    let unknown_field =
        || AppError::Validation(format!("unknown field '{field}' for {list:?} item"));

    match list {
        StructListField::Qualifications => {
            let len = record.qualifications.len();
            let item = record
                .qualifications
                .get_mut(index)
                .ok_or_else(|| out_of_range(len))?;
            match field {
                "year" => item.year = value.to_string(),
                "degree" => item.degree = value.to_string(),
                "institute" => item.institute = value.to_string(),
                "performance" => item.performance = value.to_string(),
                _ => return Err(unknown_field()),
            }
        }
        StructListField::Projects => {
            let len = record.projects.len();
            let item = record
                .projects
                .get_mut(index)
                .ok_or_else(|| out_of_range(len))?;
            match field {
                "title" => item.title = value.to_string(),
                "description" => item.description = value.to_string(),
                "link" => item.link = value.to_string(),
                "type" => item.project_type = value.to_string(),
                _ => return Err(unknown_field()),
            }
        }
        StructListField::Positions => {
            let len = record.positions.len();
            let item = record
                .positions
                .get_mut(index)
                .ok_or_else(|| out_of_range(len))?;
            match field {
                "title" => item.title = value.to_string(),
                "organization" => item.organization = value.to_string(),
                "duration" => item.duration = value.to_string(),
                _ => return Err(unknown_field()),
            }
        }
    }
    Ok(())
}

/// A working copy over a committed record.
///
/// `save` replaces the committed record with the working copy in one step —
/// no partial save is observable. `cancel` discards the working copy.
#[derive(Debug, Clone)]
pub struct EditSession {
    committed: ResumeRecord,
    working: ResumeRecord,
}

impl EditSession {
    pub fn begin(record: ResumeRecord) -> Self {
        Self {
            working: record.clone(),
            committed: record,
        }
    }

    pub fn apply(&mut self, op: &EditOp) -> Result<(), AppError> {
        apply_op(&mut self.working, op)
    }

    /// Discards pending edits, returning the previously committed record.
    pub fn cancel(self) -> ResumeRecord {
        self.committed
    }

    /// Commits the working copy as the new record.
    pub fn save(self) -> ResumeRecord {
        self.working
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Project, Qualification};

    fn record() -> ResumeRecord {
        ResumeRecord {
            name: "Octocat".to_string(),
            job_title: "Mascot".to_string(),
            email: "octo@github.com".to_string(),
            phone: "Not provided".to_string(),
            linkedin: "Not provided".to_string(),
            github: "https://github.com/octocat".to_string(),
            qualifications: vec![
                Qualification {
                    year: "2018".to_string(),
                    degree: "B.Sc".to_string(),
                    institute: "Cat University".to_string(),
                    performance: "8.0/10".to_string(),
                },
                Qualification {
                    year: "2022".to_string(),
                    degree: "M.Sc".to_string(),
                    institute: "Cat University".to_string(),
                    performance: "9.0/10".to_string(),
                },
            ],
            achievements: vec!["Followers: 1".to_string()],
            projects: vec![
                Project::new("a".to_string(), "first".to_string(), String::new(), "Personal Project".to_string()),
                Project::new("b".to_string(), "second".to_string(), String::new(), "Forked Project".to_string()),
            ],
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            courses: vec![],
            positions: vec![],
            social_impact: vec![],
        }
    }

    #[test]
    fn test_scalar_edit_replaces_only_that_field() {
        let mut r = record();
        let before = r.clone();
        apply_op(
            &mut r,
            &EditOp::SetField {
                field: ScalarField::JobTitle,
                value: "Chief Mascot".to_string(),
            },
        )
        .unwrap();
        assert_eq!(r.job_title, "Chief Mascot");
        assert_eq!(r.name, before.name);
        assert_eq!(r.projects, before.projects);
    }

    #[test]
    fn test_item_field_edit_leaves_siblings_untouched() {
        let mut r = record();
        let sibling_before = r.qualifications[0].clone();
        apply_op(
            &mut r,
            &EditOp::SetItemField {
                list: StructListField::Qualifications,
                index: 1,
                field: "performance".to_string(),
                value: "9.5/10".to_string(),
            },
        )
        .unwrap();
        assert_eq!(r.qualifications[1].performance, "9.5/10");
        assert_eq!(r.qualifications[1].degree, "M.Sc", "other fields intact");
        assert_eq!(r.qualifications[0], sibling_before, "sibling untouched");
    }

    #[test]
    fn test_item_field_edit_rejects_out_of_range_index() {
        let mut r = record();
        let before = r.clone();
        let err = apply_op(
            &mut r,
            &EditOp::SetItemField {
                list: StructListField::Projects,
                index: 2,
                field: "title".to_string(),
                value: "x".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(r, before, "failed op must not mutate");
    }

    #[test]
    fn test_item_field_edit_rejects_unknown_field() {
        let mut r = record();
        let err = apply_op(
            &mut r,
            &EditOp::SetItemField {
                list: StructListField::Projects,
                index: 0,
                field: "id".to_string(),
                value: "nope".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_skills_round_trip_on_literal_separator() {
        let skills: Vec<String> = ["Java", "Node.js", "Tailwind CSS"]
            .into_iter()
            .map(str::to_string)
            .collect();
        assert_eq!(split_skills(&skills.join(SKILLS_SEPARATOR)), skills);
        assert_eq!(split_skills(""), Vec::<String>::new());
        // A single skill survives unchanged.
        assert_eq!(split_skills("Rust"), vec!["Rust".to_string()]);
    }

    #[test]
    fn test_skills_text_edit_splits_the_text_box() {
        let mut r = record();
        apply_op(
            &mut r,
            &EditOp::SetSkillsText {
                text: "Rust, Node.js, SQL".to_string(),
            },
        )
        .unwrap();
        assert_eq!(
            r.skills,
            vec!["Rust".to_string(), "Node.js".to_string(), "SQL".to_string()]
        );
    }

    #[test]
    fn test_session_save_commits_and_cancel_restores() {
        let original = record();

        let mut session = EditSession::begin(original.clone());
        session
            .apply(&EditOp::SetField {
                field: ScalarField::Name,
                value: "Edited".to_string(),
            })
            .unwrap();
        let saved = session.save();
        assert_eq!(saved.name, "Edited");

        let mut session = EditSession::begin(original.clone());
        session
            .apply(&EditOp::SetField {
                field: ScalarField::Name,
                value: "Discarded".to_string(),
            })
            .unwrap();
        assert_eq!(session.cancel(), original);
    }

    #[test]
    fn test_text_list_replacement_is_wholesale() {
        let mut r = record();
        apply_op(
            &mut r,
            &EditOp::SetTextList {
                field: TextListField::Skills,
                values: split_skills("Go, Zig"),
            },
        )
        .unwrap();
        assert_eq!(r.skills, vec!["Go".to_string(), "Zig".to_string()]);
    }
}
