//! Polygon service — use-cases for writing and reading polygon counters.

use polystat_domain::error::{NotFoundError, PolystatError};
use polystat_domain::id::PolygonKey;
use polystat_domain::record::{PolygonRecord, PolygonSnapshot};
use polystat_domain::submission::PolygonSubmission;

use crate::ports::PolygonRepository;

/// Application service for polygon writes and lookups.
pub struct PolygonService<R> {
    repo: R,
}

impl<R: PolygonRepository> PolygonService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validate a submission and replace the polygon's stored records with
    /// the single record it describes. Nothing is stored when validation
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns [`PolystatError::Validation`] if the submission is rejected,
    /// or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, submission))]
    pub async fn submit(&self, submission: PolygonSubmission) -> Result<PolygonKey, PolystatError> {
        let (id, record) = submission.into_record()?;
        let key = id.key();
        let records = vec![record];
        self.repo.replace(key.clone(), records.clone()).await?;
        tracing::info!(polygon_id = %id, ?records, "polygon data updated");
        Ok(key)
    }

    /// Look up the records stored for a polygon.
    ///
    /// # Errors
    ///
    /// Returns [`PolystatError::NotFound`] when nothing (or an empty list) is
    /// stored under `key`, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, key: &PolygonKey) -> Result<Vec<PolygonRecord>, PolystatError> {
        self.repo
            .get(key)
            .await?
            .filter(|records| !records.is_empty())
            .ok_or_else(|| {
                NotFoundError {
                    key: key.to_string(),
                }
                .into()
            })
    }

    /// List every stored polygon.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list(&self) -> Result<PolygonSnapshot, PolystatError> {
        self.repo.get_all().await.map(PolygonSnapshot::new)
    }
}
