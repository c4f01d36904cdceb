#[cfg(test)]
mod tests {
    use crate::error::{conflict, not_found, parse_error, validation_error, BookingError, HttpStatusCode};
    use axum::response::IntoResponse;
    use http_body_util::BodyExt;

    #[test]
    fn test_status_codes() {
        assert_eq!(parse_error("bad json").status_code(), 400);
        assert_eq!(validation_error("bad card").status_code(), 422);
        assert_eq!(not_found("session").status_code(), 404);
        assert_eq!(conflict("wrong step").status_code(), 409);
        assert_eq!(
            BookingError::ConfigError("missing".to_string()).status_code(),
            500
        );
    }

    #[test]
    fn test_io_error_is_internal() {
        let err: BookingError =
            std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use").into();
        assert!(matches!(err, BookingError::InternalError(_)));
        assert_eq!(err.to_string(), "Internal error: address in use");
    }

    #[tokio::test]
    async fn test_error_response_body() {
        let response = conflict("wrong step").into_response();
        assert_eq!(response.status().as_u16(), 409);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], 409);
        assert_eq!(body["error"]["message"], "Conflict: wrong step");
    }
}
