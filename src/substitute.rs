//! Placeholder token substitution.
//! The template's main source file carries a fixed set of literal
//! `{{TOKEN}}` markers; this module rewrites that file in place with
//! values taken from the builder form. No template language is
//! involved, every replacement is a plain substring substitution.

use log::debug;
use std::fs;
use std::path::Path;

use crate::constants::{DEFAULT_COLOR, DEFAULT_FONT};
use crate::error::{Error, Result};
use crate::request::GenerationRequest;

/// The tokens are disjoint, so replacement order does not matter.
const BRIDE_NAME: &str = "{{BRIDE_NAME}}";
const GROOM_NAME: &str = "{{GROOM_NAME}}";
const WEDDING_DATE: &str = "{{WEDDING_DATE}}";
const WEDDING_LOCATION: &str = "{{WEDDING_LOCATION}}";
const APP_PASSWORD: &str = "{{APP_PASSWORD}}";
const SELECTED_COLOR: &str = "{{SELECTED_COLOR}}";
const SELECTED_FONT: &str = "{{SELECTED_FONT}}";
const ENABLE_RSVP_NOTIFICATION: &str = "{{ENABLE_RSVP_NOTIFICATION}}";
const ENABLE_EVENT_NOTIFICATION: &str = "{{ENABLE_EVENT_NOTIFICATION}}";
const ENABLE_PLANNER_UPDATES: &str = "{{ENABLE_PLANNER_UPDATES}}";

fn value_or<'a>(field: &'a Option<String>, default: &'a str) -> &'a str {
    match field {
        Some(value) if !value.is_empty() => value,
        _ => default,
    }
}

/// Builds the fixed token to replacement-value pairs for one request.
///
/// Location and password fall back to the empty string, color and font
/// to the builder defaults; booleans render as "true"/"false".
pub fn placeholder_map(request: &GenerationRequest) -> Vec<(&'static str, String)> {
    vec![
        (BRIDE_NAME, request.bride_name.clone()),
        (GROOM_NAME, request.groom_name.clone()),
        (WEDDING_DATE, request.wedding_date.clone()),
        (WEDDING_LOCATION, value_or(&request.wedding_location, "").to_string()),
        (APP_PASSWORD, value_or(&request.app_password, "").to_string()),
        (SELECTED_COLOR, value_or(&request.selected_color, DEFAULT_COLOR).to_string()),
        (SELECTED_FONT, value_or(&request.selected_font, DEFAULT_FONT).to_string()),
        (ENABLE_RSVP_NOTIFICATION, request.enable_rsvp_notification.to_string()),
        (ENABLE_EVENT_NOTIFICATION, request.enable_event_notification.to_string()),
        (ENABLE_PLANNER_UPDATES, request.enable_planner_updates.to_string()),
    ]
}

/// Replaces every token occurrence in one source file, in place.
///
/// Tokens absent from the file are silently skipped; a missing target
/// file aborts the generation.
///
/// # Errors
/// * `Error::SubstitutionError` if the target file does not exist
/// * `Error::IoError` on read or write failure, including files that
///   are not valid UTF-8
pub fn substitute_file(target: &Path, request: &GenerationRequest) -> Result<()> {
    if !target.exists() {
        return Err(Error::SubstitutionError(format!(
            "substitution target does not exist: {}",
            target.display()
        )));
    }

    let mut content = fs::read_to_string(target)?;
    for (token, value) in placeholder_map(request) {
        content = content.replace(token, &value);
    }

    debug!("Writing substituted file: {}", target.display());
    fs::write(target, content)?;
    Ok(())
}
