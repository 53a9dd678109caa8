//! Template renderer — a pure mapping `(ResumeRecord, variant) → DocumentTree`.
//!
//! The tree is deliberately presentation-poor: a flat block list the UI layer
//! styles and the export rasterizer draws. Switching variants is a pure
//! re-render of the same record; no variant mutates data or performs I/O.

pub mod variants;

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;

/// The three interchangeable layout variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    #[default]
    Modern,
    Classic,
    Minimal,
}

/// One visual block of the rendered document, top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Section or document heading; level 1 is the document title.
    Heading { level: u8, text: String },
    Paragraph { text: String },
    BulletList { items: Vec<String> },
    /// Short labels laid out side by side (skills chips).
    TagRow { tags: Vec<String> },
    /// Contact entries joined on one line.
    ContactRow { entries: Vec<String> },
    Divider,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentTree {
    pub variant: TemplateVariant,
    pub blocks: Vec<Block>,
}

/// Renders the record under the selected variant. Pure.
pub fn render(record: &ResumeRecord, variant: TemplateVariant) -> DocumentTree {
    let blocks = match variant {
        TemplateVariant::Modern => variants::modern(record),
        TemplateVariant::Classic => variants::classic(record),
        TemplateVariant::Minimal => variants::minimal(record),
    };
    DocumentTree { variant, blocks }
}
