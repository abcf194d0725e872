//! Storage port — repository trait for polygon records.

use std::future::Future;

use polystat_domain::error::PolystatError;
use polystat_domain::id::PolygonKey;
use polystat_domain::record::PolygonRecord;

/// Key-value store mapping a [`PolygonKey`] to its record list.
///
/// Implementations keep keys in first-insertion order; replacing an existing
/// key keeps its position.
pub trait PolygonRepository {
    /// Store `records` under `key`, discarding whatever was there before.
    fn replace(
        &self,
        key: PolygonKey,
        records: Vec<PolygonRecord>,
    ) -> impl Future<Output = Result<(), PolystatError>> + Send;

    /// Get the records stored under `key`, if any.
    fn get(
        &self,
        key: &PolygonKey,
    ) -> impl Future<Output = Result<Option<Vec<PolygonRecord>>, PolystatError>> + Send;

    /// Get every entry, in key insertion order.
    fn get_all(
        &self,
    ) -> impl Future<Output = Result<Vec<(PolygonKey, Vec<PolygonRecord>)>, PolystatError>> + Send;
}
