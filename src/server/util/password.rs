use crate::server::error::Error;

/// Minimum accepted password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Hash a plaintext password with bcrypt's default cost.
pub fn hash_password(password: &str) -> Result<String, Error> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?)
}

/// Check a plaintext password against a stored bcrypt hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, Error> {
    Ok(bcrypt::verify(password, password_hash)?)
}

/// Reject passwords shorter than `MIN_PASSWORD_LENGTH`.
pub fn validate_password(password: &str) -> Result<(), Error> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(Error::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    Ok(())
}
