//! Write submissions — the raw body a dashboard posts for one polygon.

use serde::Deserialize;
use serde_json::Value;

use crate::coerce::{date_text, is_truthy, parse_int, route_text};
use crate::error::ValidationError;
use crate::id::PolygonId;
use crate::record::PolygonRecord;

/// Untyped write body. Every field is optional here; [`into_record`]
/// decides what is required.
///
/// [`into_record`]: PolygonSubmission::into_record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonSubmission {
    pub polygon_id: Option<Value>,
    pub current_date: Option<Value>,
    pub rtl_operating: Option<Value>,
    pub rtl_cancelled: Option<Value>,
    pub cfn_operating: Option<Value>,
    pub cfn_cancelled: Option<Value>,
    pub rtl_operating_routes: Option<Value>,
    pub rtl_cancelled_routes: Option<Value>,
    pub cfn_operating_routes: Option<Value>,
    pub cfn_cancelled_routes: Option<Value>,
}

impl PolygonSubmission {
    /// Validate the submission and build the record it describes.
    ///
    /// Checks run in order: first presence (`polygonId` and `currentDate`
    /// must be filled in, counters must not be null; zero is a valid
    /// counter), then the identifier type.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] or
    /// [`ValidationError::InvalidPolygonId`].
    pub fn into_record(self) -> Result<(PolygonId, PolygonRecord), ValidationError> {
        let (
            Some(polygon_id),
            Some(current_date),
            Some(rtl_operating),
            Some(rtl_cancelled),
            Some(cfn_operating),
            Some(cfn_cancelled),
        ) = (
            self.polygon_id.filter(is_truthy),
            self.current_date.filter(is_truthy),
            self.rtl_operating,
            self.rtl_cancelled,
            self.cfn_operating,
            self.cfn_cancelled,
        )
        else {
            return Err(ValidationError::MissingFields);
        };

        let id = PolygonId::from_json(&polygon_id)?;

        let record = PolygonRecord {
            date: date_text(&current_date),
            rtl_operating: parse_int(&rtl_operating),
            rtl_cancelled: parse_int(&rtl_cancelled),
            cfn_operating: parse_int(&cfn_operating),
            cfn_cancelled: parse_int(&cfn_cancelled),
            rtl_operating_routes: route_text(self.rtl_operating_routes.as_ref()),
            rtl_cancelled_routes: route_text(self.rtl_cancelled_routes.as_ref()),
            cfn_operating_routes: route_text(self.cfn_operating_routes.as_ref()),
            cfn_cancelled_routes: route_text(self.cfn_cancelled_routes.as_ref()),
        };
        Ok((id, record))
    }
}
