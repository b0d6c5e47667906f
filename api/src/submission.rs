//! The stand-in for posting a report. It only logs.

use crate::report::ReportDraft;
use crate::ApiError;
use dioxus_logger::tracing::info;

/// "Submits" a draft by logging it as JSON. Returns the logged payload.
///
/// Callers are expected to have already waited out the simulated latency.
/// The draft is not stored anywhere.
pub fn submit_report(draft: &ReportDraft) -> Result<String, ApiError> {
    let json = serde_json::to_string(draft)?;
    info!("Submitting report: {}", json);
    Ok(json)
}
