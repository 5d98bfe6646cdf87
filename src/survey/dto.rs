use serde::{Deserialize, Serialize};

use crate::forecast::dto::SeriesPoint;

/// Request body for a daily survey submission.
#[derive(Debug, Deserialize)]
pub struct SubmitSurveyRequest {
    pub rating: i32,
}

/// Plain confirmation payload. The `Message` casing matches the rest of the
/// API's confirmation bodies.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    #[serde(rename = "Message")]
    pub message: String,
}

/// Wrapper returned by the history endpoint.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub predictions: Vec<SeriesPoint>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_serializes_under_message_key() {
        let json = serde_json::to_string(&MessageResponse {
            message: "Survey saved successfully!".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"Message":"Survey saved successfully!"}"#);
    }

    #[test]
    fn empty_history_keeps_lowercase_wrapper_fields() {
        let json = serde_json::to_string(&HistoryResponse {
            success: true,
            predictions: vec![],
            message: "No data available".into(),
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"success":true,"predictions":[],"message":"No data available"}"#
        );
    }

    #[test]
    fn history_points_serialize_as_ds_y() {
        let json = serde_json::to_string(&HistoryResponse {
            success: true,
            predictions: vec![SeriesPoint {
                ds: "2026-01-10 14:00:00".into(),
                y: 5,
            }],
            message: "History loaded".into(),
        })
        .unwrap();
        assert!(json.contains(r#""predictions":[{"ds":"2026-01-10 14:00:00","y":5}]"#));
    }
}
