use std::sync::Arc;

use tokio::sync::RwLock;

use crate::export::raster::Rasterizer;
use crate::github::GithubClient;
use crate::llm_client::DescriptionGenerator;
use crate::models::resume::ResumeRecord;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub github: GithubClient,
    /// Pluggable description generator. Production: GeminiClient.
    pub generator: Arc<dyn DescriptionGenerator>,
    pub rasterizer: Arc<Rasterizer>,
    pub resume: Arc<RwLock<ResumeSlot>>,
}

/// The single in-memory résumé plus a fetch fence.
///
/// Each fetch takes a ticket before its network round-trip and commits only
/// if no newer ticket was issued meanwhile, so a slow older fetch can never
/// clobber the result of a newer one.
#[derive(Debug, Default)]
pub struct ResumeSlot {
    record: Option<ResumeRecord>,
    issued: u64,
}

impl ResumeSlot {
    pub fn record(&self) -> Option<&ResumeRecord> {
        self.record.as_ref()
    }

    pub fn record_mut(&mut self) -> Option<&mut ResumeRecord> {
        self.record.as_mut()
    }

    /// Issues a fetch ticket. Later tickets always win over earlier ones.
    pub fn begin_fetch(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Commits a fetched record unless a newer fetch has started meanwhile.
    /// Returns whether the record was accepted.
    pub fn commit_fetch(&mut self, ticket: u64, record: ResumeRecord) -> bool {
        if ticket < self.issued {
            return false;
        }
        self.record = Some(record);
        true
    }

    /// Direct replacement, used by edits and full PUTs (not fenced — edits
    /// operate on whatever record is current).
    pub fn replace(&mut self, record: ResumeRecord) {
        self.record = Some(record);
    }
}
