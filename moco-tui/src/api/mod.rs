use anyhow::Result;
use async_trait::async_trait;
use moco::{MocoClient, NewTimeEntry, Project, TimeEntry};
use time::Date;

mod dev_backend;

pub use dev_backend::DevBackend;

/// The remote operations the UI needs. Implemented by the MOCO client and by
/// the in-memory dev backend.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn fetch_projects(&self) -> Result<Vec<Project>>;

    /// Entries of the trailing window that ends at `reference`.
    async fn fetch_time_entries(&self, reference: Date) -> Result<Vec<TimeEntry>>;

    /// Returns the id assigned to the new entry.
    async fn create_time_entry(&self, entry: &NewTimeEntry) -> Result<i64>;

    async fn delete_time_entry(&self, id: i64) -> Result<()>;
}

#[async_trait]
impl Backend for MocoClient {
    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        Ok(MocoClient::fetch_projects(self).await?)
    }

    async fn fetch_time_entries(&self, reference: Date) -> Result<Vec<TimeEntry>> {
        Ok(MocoClient::fetch_time_entries(self, reference).await?)
    }

    async fn create_time_entry(&self, entry: &NewTimeEntry) -> Result<i64> {
        Ok(MocoClient::create_time_entry(self, entry).await?)
    }

    async fn delete_time_entry(&self, id: i64) -> Result<()> {
        Ok(MocoClient::delete_time_entry(self, id).await?)
    }
}
