use crate::error::{AoideError, Result};

/// Extracts a platform entity ID from a raw ID or a share link.
///
/// Recognizes the well-known share-link path patterns `/playlist/<id>`
/// and `/track/<id>`, taking the path segment and stripping any query
/// string or fragment. A bare alphanumeric string passes through as-is.
pub fn extract_entity_id(reference: &str) -> Result<String> {
    let reference = reference.trim();

    for marker in ["/playlist/", "/track/"] {
        if let Some(pos) = reference.find(marker) {
            let rest = &reference[pos + marker.len()..];
            let id: String = rest
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric())
                .collect();
            if id.is_empty() {
                return Err(AoideError::InvalidIdentifier(reference.to_string()));
            }
            return Ok(id);
        }
    }

    if !reference.is_empty() && reference.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Ok(reference.to_string());
    }

    Err(AoideError::InvalidIdentifier(reference.to_string()))
}

/// Formats a millisecond duration as `m:ss`.
pub fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Formats an optional feature value for table output.
pub fn format_feature(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "-".to_string(),
    }
}
