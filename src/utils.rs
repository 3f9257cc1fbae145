use crate::error::ApiError;

/// Basic syntactic gate only: one `@` split with a non-empty local part
/// and a non-empty domain.
pub fn validate_email(email: &str) -> Result<(), ApiError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ApiError::InvalidEmail),
    }
}
