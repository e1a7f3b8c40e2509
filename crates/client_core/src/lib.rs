use std::{sync::Arc, time::Duration};

use reqwest::Client;
use shared::{
    domain::ResourceKind,
    error::DirectoryError,
    protocol::{ChairpersonRecord, CommitteeRecord, DirectoryRecord, PreceptorRecord},
};
use tracing::info;

pub mod config;
pub mod form;
pub mod list;
pub mod notification;
pub mod transport;
pub mod view;

pub use config::{load_settings, Settings};
pub use form::{
    CommitteeField, CommitteeFields, ContactField, ContactFields, FormFields, RecordForm,
};
pub use list::{ListController, ListPhase};
pub use notification::{Notification, NotificationChannel};
pub use transport::{HttpRecordApi, RecordApi};
pub use view::{ViewEvent, ViewState};

pub type CommitteeView = ViewState<CommitteeFields>;
pub type PreceptorView = ViewState<ContactFields<PreceptorRecord>>;
pub type ChairpersonView = ViewState<ContactFields<ChairpersonRecord>>;

/// Builds independently scoped views that share one HTTP connection pool.
pub struct DirectoryClient {
    http: Client,
    settings: Settings,
}

impl DirectoryClient {
    pub fn new(settings: Settings) -> Result<Self, DirectoryError> {
        for kind in ResourceKind::ALL {
            let endpoint = settings.endpoint(kind)?;
            info!(%kind, %endpoint, "directory endpoint configured");
        }
        Ok(Self {
            http: Client::new(),
            settings,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn api<R: DirectoryRecord>(&self) -> Result<Arc<dyn RecordApi<R>>, DirectoryError> {
        let endpoint = self.settings.endpoint(R::KIND)?;
        Ok(Arc::new(HttpRecordApi::<R>::new(self.http.clone(), endpoint)))
    }

    fn auto_dismiss(&self) -> Duration {
        self.settings.notification_timeout
    }

    pub fn committee_view(&self) -> Result<CommitteeView, DirectoryError> {
        let fields = CommitteeFields::with_catalog(self.settings.committee_catalog());
        Ok(ViewState::new(
            self.api::<CommitteeRecord>()?,
            fields,
            self.auto_dismiss(),
        ))
    }

    pub fn preceptor_view(&self) -> Result<PreceptorView, DirectoryError> {
        Ok(ViewState::new(
            self.api::<PreceptorRecord>()?,
            ContactFields::default(),
            self.auto_dismiss(),
        ))
    }

    pub fn chairperson_view(&self) -> Result<ChairpersonView, DirectoryError> {
        Ok(ViewState::new(
            self.api::<ChairpersonRecord>()?,
            ContactFields::default(),
            self.auto_dismiss(),
        ))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
