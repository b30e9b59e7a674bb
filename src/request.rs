//! The wedding builder form as submitted by the caller.
//! The shape mirrors the builder UI payload; wedgen deserializes it
//! as-is and fills absent fields with neutral defaults instead of
//! rejecting the request.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A keyed string map describing one event, family member or registry.
pub type Detail = IndexMap<String, String>;

/// Details grouped by side ("bride", "groom", ...).
pub type DetailGroups = IndexMap<String, Vec<Detail>>;

/// One generation request, owned by the handler for its full duration.
///
/// Only the name, date, location, password, color, font and the three
/// notification flags are substituted into the generated app today. The
/// remaining fields are accepted from the builder form but deliberately
/// left unconsumed until the corresponding app modules are wired up.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationRequest {
    pub bride_name: String,
    pub groom_name: String,
    pub wedding_date: String,
    pub wedding_location: Option<String>,
    pub app_password: Option<String>,
    pub selected_color: Option<String>,
    pub selected_font: Option<String>,

    #[serde(rename = "enableRSVPNotification")]
    pub enable_rsvp_notification: bool,
    pub enable_event_notification: bool,
    pub enable_planner_updates: bool,

    // Accepted but not consumed by generation yet.
    pub enable_family: bool,
    pub enable_gallery: bool,
    pub enable_itinerary: bool,
    pub enable_settings: bool,
    pub rsvp_sheet_url: Option<String>,
    pub gallery_drive_url: Option<String>,
    pub bride_events: Vec<Detail>,
    pub groom_events: Vec<Detail>,
    pub wedding_events: Vec<Detail>,
    pub family_details: DetailGroups,
    pub wedding_party: DetailGroups,
    pub registries: Vec<Detail>,
}

impl GenerationRequest {
    /// Parses a request from the raw JSON payload of the builder form.
    pub fn from_json(payload: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}
