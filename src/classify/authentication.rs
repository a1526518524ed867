//! # Authentication Classifier
//!
//! Pure mapping from an authentication failure to (code, status).
//! Everything in this category is 401; sub-kinds only pick the code.

use axum::http::StatusCode;

use crate::errors::AuthError;
use crate::result::ResultCode;

pub fn classify(err: &AuthError) -> (ResultCode, StatusCode) {
    let code = match err {
        AuthError::UsernameNotFound(_) => ResultCode::UsernameNotFound,
        AuthError::BadCredentials(_) => ResultCode::BadCredentials,
        AuthError::AccountExpired(_) => ResultCode::AccountExpired,
        AuthError::AccountLocked(_) => ResultCode::AccountLocked,
        AuthError::AccountDisabled(_) => ResultCode::AccountDisabled,
        AuthError::CredentialsExpired(_) => ResultCode::CredentialsExpired,
        AuthError::InsufficientAuthentication(_) => ResultCode::Unauthorized,
        AuthError::Other(_) => ResultCode::Error,
    };
    (code, StatusCode::UNAUTHORIZED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sub_kind_is_401() {
        let cases = [
            (
                AuthError::UsernameNotFound("no such user".into()),
                ResultCode::UsernameNotFound,
            ),
            (
                AuthError::BadCredentials("Bad credentials".into()),
                ResultCode::BadCredentials,
            ),
            (
                AuthError::AccountExpired("Account expired".into()),
                ResultCode::AccountExpired,
            ),
            (
                AuthError::AccountLocked("User account is locked".into()),
                ResultCode::AccountLocked,
            ),
            (
                AuthError::AccountDisabled("User is disabled".into()),
                ResultCode::AccountDisabled,
            ),
            (
                AuthError::CredentialsExpired("Credentials expired".into()),
                ResultCode::CredentialsExpired,
            ),
            (
                AuthError::InsufficientAuthentication("Full authentication required".into()),
                ResultCode::Unauthorized,
            ),
        ];
        for (err, expected) in cases {
            let (code, status) = classify(&err);
            assert_eq!(code, expected, "{err:?}");
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{err:?}");
        }
    }

    #[test]
    fn test_category_fallback() {
        let (code, status) = classify(&AuthError::Other("unexpected".into()));
        assert_eq!(code, ResultCode::Error);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
