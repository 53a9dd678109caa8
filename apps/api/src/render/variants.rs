//! The three layout variants. Each defines its own section ordering and
//! grouping, but all of them emit the identity header, projects,
//! achievements, skills and education — no variant loses data.

use crate::models::resume::ResumeRecord;
use crate::render::Block;

/// Modern: accent header, projects and achievements in the main column,
/// skills and education in the side column.
pub fn modern(record: &ResumeRecord) -> Vec<Block> {
    let mut blocks = vec![
        Block::Heading {
            level: 1,
            text: record.name.clone(),
        },
        Block::Paragraph {
            text: record.job_title.clone(),
        },
        Block::ContactRow {
            entries: vec![
                record.email.clone(),
                record.phone.clone(),
                record.linkedin.clone(),
            ],
        },
        Block::Heading {
            level: 2,
            text: "Projects".to_string(),
        },
    ];
    for project in &record.projects {
        blocks.push(Block::Heading {
            level: 3,
            text: project.title.clone(),
        });
        blocks.push(Block::Paragraph {
            text: project.description.clone(),
        });
    }
    blocks.push(Block::Heading {
        level: 2,
        text: "Achievements".to_string(),
    });
    blocks.push(Block::BulletList {
        items: record.achievements.clone(),
    });
    blocks.push(Block::Heading {
        level: 2,
        text: "Skills".to_string(),
    });
    blocks.push(Block::TagRow {
        tags: record.skills.clone(),
    });
    blocks.push(Block::Heading {
        level: 2,
        text: "Education".to_string(),
    });
    for qual in &record.qualifications {
        blocks.push(Block::Heading {
            level: 3,
            text: qual.degree.clone(),
        });
        blocks.push(Block::Paragraph {
            text: qual.institute.clone(),
        });
        blocks.push(Block::Paragraph {
            text: qual.year.clone(),
        });
    }
    blocks
}

/// Classic: centered header, skills first, projects presented as experience,
/// education and achievements side by side at the bottom.
pub fn classic(record: &ResumeRecord) -> Vec<Block> {
    let mut blocks = vec![
        Block::Heading {
            level: 1,
            text: record.name.clone(),
        },
        Block::Paragraph {
            text: record.job_title.clone(),
        },
        Block::ContactRow {
            entries: vec![
                record.email.clone(),
                record.phone.clone(),
                record.linkedin.clone(),
            ],
        },
        Block::Divider,
        Block::Heading {
            level: 2,
            text: "Skills".to_string(),
        },
        Block::TagRow {
            tags: record.skills.clone(),
        },
        Block::Heading {
            level: 2,
            text: "Experience".to_string(),
        },
    ];
    for project in &record.projects {
        blocks.push(Block::Heading {
            level: 3,
            text: project.title.clone(),
        });
        blocks.push(Block::Paragraph {
            text: project.project_type.clone(),
        });
        blocks.push(Block::Paragraph {
            text: project.description.clone(),
        });
    }
    blocks.push(Block::Heading {
        level: 2,
        text: "Education".to_string(),
    });
    for qual in &record.qualifications {
        blocks.push(Block::Heading {
            level: 3,
            text: qual.degree.clone(),
        });
        blocks.push(Block::Paragraph {
            text: qual.institute.clone(),
        });
        blocks.push(Block::Paragraph {
            text: qual.year.clone(),
        });
    }
    blocks.push(Block::Heading {
        level: 2,
        text: "Achievements".to_string(),
    });
    blocks.push(Block::BulletList {
        items: record.achievements.clone(),
    });
    blocks
}

/// Minimal: single column, uppercase section labels, skills joined into one
/// line instead of chips.
pub fn minimal(record: &ResumeRecord) -> Vec<Block> {
    let mut blocks = vec![
        Block::Heading {
            level: 1,
            text: record.name.clone(),
        },
        Block::Paragraph {
            text: record.job_title.clone(),
        },
        Block::Paragraph {
            text: record.email.clone(),
        },
        Block::Paragraph {
            text: record.phone.clone(),
        },
        Block::Paragraph {
            text: record.linkedin.clone(),
        },
        Block::Heading {
            level: 2,
            text: "SKILLS".to_string(),
        },
        Block::Paragraph {
            text: record.skills.join(" • "),
        },
        Block::Heading {
            level: 2,
            text: "EXPERIENCE".to_string(),
        },
    ];
    for project in &record.projects {
        blocks.push(Block::Heading {
            level: 3,
            text: project.title.clone(),
        });
        blocks.push(Block::Paragraph {
            text: project.project_type.clone(),
        });
        blocks.push(Block::Paragraph {
            text: project.description.clone(),
        });
    }
    blocks.push(Block::Heading {
        level: 2,
        text: "EDUCATION".to_string(),
    });
    for qual in &record.qualifications {
        blocks.push(Block::Heading {
            level: 3,
            text: qual.degree.clone(),
        });
        blocks.push(Block::Paragraph {
            text: qual.institute.clone(),
        });
        blocks.push(Block::Paragraph {
            text: qual.year.clone(),
        });
    }
    blocks.push(Block::Heading {
        level: 2,
        text: "ACHIEVEMENTS".to_string(),
    });
    blocks.push(Block::BulletList {
        items: record.achievements.clone(),
    });
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Project, Qualification};
    use crate::render::{render, TemplateVariant};

    fn sample_record() -> ResumeRecord {
        ResumeRecord {
            name: "Octocat".to_string(),
            job_title: "Mascot".to_string(),
            email: "octo@github.com".to_string(),
            phone: "Not provided".to_string(),
            linkedin: "https://example.com".to_string(),
            github: "https://github.com/octocat".to_string(),
            qualifications: vec![Qualification {
                year: "2020".to_string(),
                degree: "B.Sc".to_string(),
                institute: "Cat University".to_string(),
                performance: "9.1/10".to_string(),
            }],
            achievements: vec!["Followers: 9000".to_string()],
            projects: vec![
                Project::new(
                    "hello-world".to_string(),
                    "First repo".to_string(),
                    "https://github.com/octocat/hello-world".to_string(),
                    "Personal Project".to_string(),
                ),
                Project::new(
                    "spoon-knife".to_string(),
                    "Fork me".to_string(),
                    "https://github.com/octocat/spoon-knife".to_string(),
                    "Forked Project".to_string(),
                ),
            ],
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            courses: vec![],
            positions: vec![],
            social_impact: vec![],
        }
    }

    /// Every text fragment of the tree, flattened for containment checks.
    fn all_text(blocks: &[Block]) -> Vec<String> {
        let mut out = Vec::new();
        for block in blocks {
            match block {
                Block::Heading { text, .. } | Block::Paragraph { text } => out.push(text.clone()),
                Block::BulletList { items } => out.extend(items.iter().cloned()),
                Block::TagRow { tags } => out.extend(tags.iter().cloned()),
                Block::ContactRow { entries } => out.extend(entries.iter().cloned()),
                Block::Divider => {}
            }
        }
        out
    }

    #[test]
    fn test_all_variants_preserve_projects_skills_and_qualifications() {
        let record = sample_record();
        for variant in [
            TemplateVariant::Modern,
            TemplateVariant::Classic,
            TemplateVariant::Minimal,
        ] {
            let tree = render(&record, variant);
            let text = all_text(&tree.blocks).join("\n");
            for project in &record.projects {
                assert!(
                    text.contains(&project.title),
                    "{variant:?} lost project '{}'",
                    project.title
                );
            }
            for skill in &record.skills {
                assert!(text.contains(skill), "{variant:?} lost skill '{skill}'");
            }
            for qual in &record.qualifications {
                assert!(
                    text.contains(&qual.degree) && text.contains(&qual.institute),
                    "{variant:?} lost qualification '{}'",
                    qual.degree
                );
            }
            for achievement in &record.achievements {
                assert!(text.contains(achievement), "{variant:?} lost achievement");
            }
            assert!(text.contains(&record.name));
            assert!(text.contains(&record.job_title));
        }
    }

    #[test]
    fn test_empty_lists_still_render() {
        let mut record = sample_record();
        record.projects.clear();
        record.achievements.clear();
        for variant in [
            TemplateVariant::Modern,
            TemplateVariant::Classic,
            TemplateVariant::Minimal,
        ] {
            let tree = render(&record, variant);
            assert!(
                !tree.blocks.is_empty(),
                "{variant:?} should render the header even with empty sections"
            );
        }
    }

    #[test]
    fn test_variant_changes_section_order_not_content() {
        let record = sample_record();
        let modern = render(&record, TemplateVariant::Modern);
        let classic = render(&record, TemplateVariant::Classic);
        assert_ne!(modern.blocks, classic.blocks, "variants must differ");

        let mut modern_text = all_text(&modern.blocks);
        let mut classic_text = all_text(&classic.blocks);
        // Same project titles regardless of grouping.
        modern_text.retain(|t| t == "hello-world" || t == "spoon-knife");
        classic_text.retain(|t| t == "hello-world" || t == "spoon-knife");
        assert_eq!(modern_text, classic_text);
    }
}
