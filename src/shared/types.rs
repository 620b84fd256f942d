use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Standard response envelope for every JSON endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    /// Free-form envelope metadata; forecast responses leave it null
    #[schema(value_type = Option<Object>)]
    pub meta: Option<Value>,
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Value>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_serializes_null_meta() {
        let body = serde_json::to_value(ApiResponse::success(Some(1), None, None)).unwrap();
        assert_eq!(
            body,
            json!({"success": true, "data": 1, "message": null, "meta": null, "errors": null})
        );
    }

    #[test]
    fn test_error_envelope_has_no_data() {
        let body = serde_json::to_value(ApiResponse::<()>::error(
            Some("Location must be 1-255 characters".to_string()),
            Some(vec!["location".to_string()]),
        ))
        .unwrap();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["data"], Value::Null);
        assert_eq!(body["errors"], json!(["location"]));
    }
}
