//! Polygon record — the operational counters captured for one polygon.

use serde::{Serialize, Serializer};

use crate::id::PolygonKey;

/// An operating/cancelled counter.
///
/// `None` marks input that did not parse as an integer. It is kept rather
/// than rejected and serializes as JSON `null`.
pub type Count = Option<i64>;

/// Counters and route lists for one polygon at one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonRecord {
    /// Caller-supplied date, stored uninterpreted.
    pub date: String,
    pub rtl_operating: Count,
    pub rtl_cancelled: Count,
    pub cfn_operating: Count,
    pub cfn_cancelled: Count,
    pub rtl_operating_routes: String,
    pub rtl_cancelled_routes: String,
    pub cfn_operating_routes: String,
    pub cfn_cancelled_routes: String,
}

/// Every stored polygon, in key insertion order.
///
/// Serializes as a JSON object mapping each key to its record list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolygonSnapshot(Vec<(PolygonKey, Vec<PolygonRecord>)>);

impl PolygonSnapshot {
    #[must_use]
    pub fn new(entries: Vec<(PolygonKey, Vec<PolygonRecord>)>) -> Self {
        Self(entries)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Records stored under `key`.
    #[must_use]
    pub fn get(&self, key: &PolygonKey) -> Option<&[PolygonRecord]> {
        self.0
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, records)| records.as_slice())
    }

    /// Iterate over the stored keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &PolygonKey> {
        self.0.iter().map(|(key, _)| key)
    }
}

impl Serialize for PolygonSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(key, records)| (key, records)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> PolygonRecord {
        PolygonRecord {
            date: "2024-01-01".to_string(),
            rtl_operating: Some(5),
            rtl_cancelled: Some(0),
            cfn_operating: None,
            cfn_cancelled: Some(1),
            rtl_operating_routes: "R1".to_string(),
            rtl_cancelled_routes: "N/A".to_string(),
            cfn_operating_routes: "N/A".to_string(),
            cfn_cancelled_routes: "C9".to_string(),
        }
    }

    #[test]
    fn should_serialize_with_dashboard_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "date": "2024-01-01",
                "rtlOperating": 5,
                "rtlCancelled": 0,
                "cfnOperating": null,
                "cfnCancelled": 1,
                "rtlOperatingRoutes": "R1",
                "rtlCancelledRoutes": "N/A",
                "cfnOperatingRoutes": "N/A",
                "cfnCancelledRoutes": "C9",
            })
        );
    }

    #[test]
    fn should_serialize_snapshot_as_ordered_object() {
        let snapshot = PolygonSnapshot::new(vec![
            (PolygonKey::from("zeta"), vec![sample()]),
            (PolygonKey::from("alpha"), vec![sample()]),
        ]);
        let json = serde_json::to_string(&snapshot).unwrap();
        let zeta = json.find("\"zeta\"").unwrap();
        let alpha = json.find("\"alpha\"").unwrap();
        assert!(zeta < alpha);
        assert_eq!(snapshot.keys().count(), 2);
        assert_eq!(snapshot.get(&PolygonKey::from("alpha")).unwrap().len(), 1);
    }

    #[test]
    fn should_serialize_empty_snapshot_as_empty_object() {
        let json = serde_json::to_string(&PolygonSnapshot::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
