//! Placeholder auth helpers
//!
//! The login/signup screens simulate a one-time-passcode flow without any
//! delivery backend: no code is ever sent, and acceptance is purely
//! syntactic.

/// Length of the simulated one-time passcode.
pub const OTP_LEN: usize = 6;

/// Placeholder acceptance: exactly six ASCII digits.
pub fn validate_otp(code: &str) -> bool {
    code.len() == OTP_LEN && code.bytes().all(|b| b.is_ascii_digit())
}

/// Masks the local part of an address for "we sent a code to ..." copy,
/// keeping the first character and the domain.
pub fn mask_email(addr: &str) -> String {
    match addr.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
            let first = local.chars().next().unwrap_or('•');
            format!("{first}•••@{domain}")
        }
        _ => addr.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_accepts_six_digits() {
        assert!(validate_otp("000000"));
        assert!(validate_otp("123456"));
    }

    #[test]
    fn test_otp_rejects_everything_else() {
        assert!(!validate_otp(""));
        assert!(!validate_otp("12345"));
        assert!(!validate_otp("1234567"));
        assert!(!validate_otp("12345a"));
        assert!(!validate_otp("12 456"));
        assert!(!validate_otp("١٢٣٤٥٦")); // non-ASCII digits
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("karthik@example.com"), "k•••@example.com");
        assert_eq!(mask_email("a@b.io"), "a•••@b.io");
        // unparseable addresses pass through untouched
        assert_eq!(mask_email("not-an-email"), "not-an-email");
        assert_eq!(mask_email("@example.com"), "@example.com");
    }
}
