//! # Generic Classifier
//!
//! Pure mapping for everything outside the three specific categories:
//! request shape, routing, permissions, and the unclassified remainder.
//! `Unhandled` always matches, which is what makes `resolve` total.

use axum::http::StatusCode;

use crate::errors::FrameworkError;
use crate::result::ResultCode;

pub fn classify(err: &FrameworkError) -> (ResultCode, StatusCode) {
    match err {
        FrameworkError::UnreadableBody(_)
        | FrameworkError::TypeMismatch { .. }
        | FrameworkError::MissingParameter { .. } => {
            (ResultCode::BadRequest, StatusCode::BAD_REQUEST)
        }
        FrameworkError::NoRoute { .. } => (ResultCode::NotFound, StatusCode::NOT_FOUND),
        FrameworkError::MethodNotAllowed { .. } => {
            (ResultCode::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED)
        }
        FrameworkError::MediaTypeNotAcceptable(_) => {
            (ResultCode::MediaTypeNotAcceptable, StatusCode::BAD_REQUEST)
        }
        // Normally short-circuited by the dispatcher before reaching here.
        FrameworkError::InvalidMethodArgument { .. } => {
            (ResultCode::Alert, StatusCode::BAD_REQUEST)
        }
        FrameworkError::IllegalArgument(_) => (ResultCode::Alert, StatusCode::BAD_REQUEST),
        FrameworkError::AccessDenied(_) => (ResultCode::AccessDenied, StatusCode::FORBIDDEN),
        FrameworkError::Unhandled(_) => (ResultCode::Error, StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape_failures_are_400() {
        let cases = [
            FrameworkError::UnreadableBody("unexpected end of input".into()),
            FrameworkError::TypeMismatch { name: "page".into() },
            FrameworkError::MissingParameter { name: "client_id".into() },
        ];
        for err in cases {
            let (code, status) = classify(&err);
            assert_eq!(code, ResultCode::BadRequest, "{err:?}");
            assert_eq!(status, StatusCode::BAD_REQUEST, "{err:?}");
        }
    }

    #[test]
    fn test_routing_failures() {
        let (code, status) = classify(&FrameworkError::NoRoute {
            method: "GET".into(),
            path: "/missing".into(),
        });
        assert_eq!(code, ResultCode::NotFound);
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (code, status) = classify(&FrameworkError::MethodNotAllowed {
            method: "DELETE".into(),
            path: "/api/users".into(),
        });
        assert_eq!(code, ResultCode::MethodNotAllowed);
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_media_type_is_400_not_406() {
        let (code, status) = classify(&FrameworkError::MediaTypeNotAcceptable(
            "application/xml".into(),
        ));
        assert_eq!(code, ResultCode::MediaTypeNotAcceptable);
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_illegal_argument_is_alert() {
        let (code, status) = classify(&FrameworkError::IllegalArgument(
            "page size must be positive".into(),
        ));
        assert_eq!(code, ResultCode::Alert);
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_access_denied_is_403() {
        let (code, status) = classify(&FrameworkError::AccessDenied("Access is denied".into()));
        assert_eq!(code, ResultCode::AccessDenied);
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_unhandled_is_500() {
        let (code, status) = classify(&FrameworkError::Unhandled("connection reset".into()));
        assert_eq!(code, ResultCode::Error);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
