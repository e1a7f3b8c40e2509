//! HTTP transport for the directory collection endpoints.

use std::marker::PhantomData;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::RecordId, protocol::DirectoryRecord};
use tracing::debug;
use url::Url;

/// Collection-style access to one resource kind.
#[async_trait]
pub trait RecordApi<R: DirectoryRecord>: Send + Sync {
    async fn list(&self) -> Result<Vec<R>>;
    async fn create(&self, draft: &R::Draft) -> Result<R>;
    async fn update(&self, id: &RecordId, draft: &R::Draft) -> Result<R>;
    async fn delete(&self, id: &RecordId) -> Result<()>;
}

pub struct HttpRecordApi<R> {
    http: Client,
    endpoint: Url,
    _record: PhantomData<fn() -> R>,
}

impl<R: DirectoryRecord> HttpRecordApi<R> {
    pub fn new(http: Client, endpoint: Url) -> Self {
        Self {
            http,
            endpoint,
            _record: PhantomData,
        }
    }

    fn item_url(&self, id: &RecordId) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("endpoint {} cannot carry a record id", self.endpoint))?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }
}

#[async_trait]
impl<R: DirectoryRecord> RecordApi<R> for HttpRecordApi<R> {
    async fn list(&self) -> Result<Vec<R>> {
        debug!(kind = %R::KIND, url = %self.endpoint, "fetching collection");
        let records = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(records)
    }

    async fn create(&self, draft: &R::Draft) -> Result<R> {
        debug!(kind = %R::KIND, "creating record");
        let record = self
            .http
            .post(self.endpoint.clone())
            .json(draft)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(record)
    }

    async fn update(&self, id: &RecordId, draft: &R::Draft) -> Result<R> {
        debug!(kind = %R::KIND, %id, "replacing record");
        let record = self
            .http
            .put(self.item_url(id)?)
            .json(draft)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(record)
    }

    async fn delete(&self, id: &RecordId) -> Result<()> {
        debug!(kind = %R::KIND, %id, "deleting record");
        self.http
            .delete(self.item_url(id)?)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
