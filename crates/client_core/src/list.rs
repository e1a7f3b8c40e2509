//! In-memory mirror of one directory collection.
//!
//! Local state only changes after the server confirms a write, so a failed
//! call never needs to be rolled back.

use std::{cmp::Ordering, sync::Arc};

use icu_collator::{Collator, CollatorOptions, Strength};
use shared::{
    domain::{RecordId, SortOrder},
    error::{DirectoryError, WriteOp},
    protocol::DirectoryRecord,
};
use tracing::{error, info, warn};

use crate::transport::RecordApi;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data. Please try again later.";

pub fn write_success_message(op: WriteOp) -> &'static str {
    match op {
        WriteOp::Create => "Entry added successfully",
        WriteOp::Update => "Entry updated successfully",
        WriteOp::Delete => "Entry deleted successfully",
    }
}

pub fn write_failure_message(op: WriteOp) -> &'static str {
    match op {
        WriteOp::Create | WriteOp::Update => "Failed to save data",
        WriteOp::Delete => "Failed to delete entry",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading,
    Loaded,
    LoadError,
}

pub struct ListController<R: DirectoryRecord> {
    api: Arc<dyn RecordApi<R>>,
    records: Vec<R>,
    phase: ListPhase,
    error: Option<String>,
}

impl<R: DirectoryRecord> ListController<R> {
    pub fn new(api: Arc<dyn RecordApi<R>>) -> Self {
        Self {
            api,
            records: Vec::new(),
            phase: ListPhase::Idle,
            error: None,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    /// User-facing load error, cleared by the next successful load.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces the local set on success. On failure prior records stay.
    pub async fn load(&mut self) -> Result<usize, DirectoryError> {
        self.phase = ListPhase::Loading;
        match self.api.list().await {
            Ok(records) => {
                self.records = records;
                self.error = None;
                self.phase = ListPhase::Loaded;
                info!(kind = %R::KIND, count = self.records.len(), "collection loaded");
                Ok(self.records.len())
            }
            Err(source) => {
                error!(kind = %R::KIND, error = %source, "error fetching data");
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
                self.phase = ListPhase::LoadError;
                Err(DirectoryError::FetchFailed {
                    kind: R::KIND,
                    source,
                })
            }
        }
    }

    pub async fn create(&mut self, draft: &R::Draft) -> Result<RecordId, DirectoryError> {
        let record = self
            .api
            .create(draft)
            .await
            .map_err(|source| write_failed::<R>(WriteOp::Create, None, source))?;
        let id = record.id().clone();
        info!(kind = %R::KIND, %id, "record created");
        self.records.push(record);
        Ok(id)
    }

    pub async fn update(&mut self, id: &RecordId, draft: &R::Draft) -> Result<(), DirectoryError> {
        let record = self
            .api
            .update(id, draft)
            .await
            .map_err(|source| write_failed::<R>(WriteOp::Update, Some(id), source))?;
        info!(kind = %R::KIND, %id, "record updated");
        if let Some(slot) = self.records.iter_mut().find(|r| r.id() == id) {
            *slot = record;
        }
        Ok(())
    }

    pub async fn remove(&mut self, id: &RecordId) -> Result<(), DirectoryError> {
        self.api
            .delete(id)
            .await
            .map_err(|source| write_failed::<R>(WriteOp::Delete, Some(id), source))?;
        info!(kind = %R::KIND, %id, "record deleted");
        self.records.retain(|r| r.id() != id);
        Ok(())
    }

    /// Ordering of the current set by locale-aware, case-insensitive
    /// collation of the sort key. Ties fall back to the record id so
    /// descending is the exact reverse of ascending.
    pub fn sorted(&self, order: SortOrder) -> Vec<&R> {
        self.visible("", Some(order))
    }

    pub fn filtered(&self, query: &str) -> Vec<&R> {
        let needle = query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| needle.is_empty() || r.matches(&needle))
            .collect()
    }

    /// Filter, then optionally sort. Recomputed on every call.
    pub fn visible(&self, query: &str, order: Option<SortOrder>) -> Vec<&R> {
        let mut view = self.filtered(query);
        if let Some(order) = order {
            let compare = sort_key_comparator();
            view.sort_by(|a, b| {
                compare(a.sort_key(), b.sort_key()).then_with(|| a.id().cmp(b.id()))
            });
            if order == SortOrder::Desc {
                view.reverse();
            }
        }
        view
    }
}

/// Root-locale collator at secondary strength: accents count, case does not.
fn sort_key_comparator() -> Box<dyn Fn(&str, &str) -> Ordering> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Secondary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Box::new(move |a, b| collator.compare(a, b)),
        Err(err) => {
            warn!(error = %err, "collator unavailable, sorting by lowercase code points");
            Box::new(|a, b| a.to_lowercase().cmp(&b.to_lowercase()))
        }
    }
}

fn write_failed<R: DirectoryRecord>(
    op: WriteOp,
    id: Option<&RecordId>,
    source: anyhow::Error,
) -> DirectoryError {
    match id {
        Some(id) => error!(
            kind = %R::KIND,
            op = op.as_str(),
            %id,
            error = %source,
            "error saving data"
        ),
        None => error!(
            kind = %R::KIND,
            op = op.as_str(),
            error = %source,
            "error saving data"
        ),
    }
    DirectoryError::WriteFailed {
        kind: R::KIND,
        op,
        source,
    }
}
