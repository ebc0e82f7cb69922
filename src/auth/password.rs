use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::Hmac;
use pbkdf2::pbkdf2;
use rand::Rng;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const ITERATIONS: u32 = 260_000;
const KEY_LENGTH: usize = 32;
const SALT_LENGTH: usize = 16;

/// Hash a password with PBKDF2-HMAC-SHA256 and a fresh random salt.
/// Stored as `pbkdf2:sha256:<iterations>$<salt>$<hash>`, both parts base64
/// URL-safe without padding.
pub fn hash_password(password: &str) -> Result<String, String> {
    let mut salt = [0u8; SALT_LENGTH];
    rand::thread_rng().fill(&mut salt);

    let mut key = [0u8; KEY_LENGTH];
    pbkdf2::<HmacSha256>(password.as_bytes(), &salt, ITERATIONS, &mut key)
        .map_err(|e| format!("Password hashing failed: {e}"))?;

    Ok(format!(
        "pbkdf2:sha256:{}${}${}",
        ITERATIONS,
        URL_SAFE_NO_PAD.encode(salt),
        URL_SAFE_NO_PAD.encode(key)
    ))
}

/// Verify a password against a stored `pbkdf2:sha256:...` hash.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, String> {
    let parts: Vec<&str> = stored_hash.split('$').collect();
    if parts.len() != 3 {
        return Err("Invalid hash format".to_string());
    }

    let header: Vec<&str> = parts[0].split(':').collect();
    if header.len() != 3 || header[0] != "pbkdf2" || header[1] != "sha256" {
        return Err("Invalid hash header".to_string());
    }
    let iterations: u32 = header[2]
        .parse()
        .map_err(|_| "Invalid iteration count".to_string())?;

    let salt = URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| format!("Salt decode failed: {e}"))?;
    let expected = URL_SAFE_NO_PAD
        .decode(parts[2])
        .map_err(|e| format!("Hash decode failed: {e}"))?;

    let mut computed = vec![0u8; expected.len()];
    pbkdf2::<HmacSha256>(password.as_bytes(), &salt, iterations, &mut computed)
        .map_err(|e| format!("Password verification failed: {e}"))?;

    Ok(computed == expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trips() {
        let hash = hash_password("hunter2!").unwrap();
        assert!(hash.starts_with("pbkdf2:sha256:"));
        assert!(verify_password("hunter2!", &hash).unwrap());
    }

    #[test]
    fn wrong_password_fails_verification() {
        let hash = hash_password("correct horse").unwrap();
        assert!(!verify_password("battery staple", &hash).unwrap());
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("x", "not-a-hash").is_err());
        assert!(verify_password("x", "bcrypt:10$abc$def").is_err());
    }
}
