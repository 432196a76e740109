/// Checks the shape of an email address: exactly one `@`, and at least one
/// `.` somewhere in the domain part. Nothing else is enforced.
pub fn is_email_valid(candidate: &str) -> bool {
    let mut parts = candidate.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_local), Some(domain), None) => domain.contains('.'),
        _ => false,
    }
}

/// Lowercase form of an email address, used as the uniqueness key.
pub fn normalize_email(raw: &str) -> String {
    raw.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email() {
        assert!(is_email_valid("test@example.com"));
    }

    #[test]
    fn email_without_at_is_rejected() {
        assert!(!is_email_valid("testexample.com"));
    }

    #[test]
    fn email_with_multiple_at_is_rejected() {
        assert!(!is_email_valid("test@foo@example.com"));
    }

    #[test]
    fn email_without_dot_is_rejected() {
        assert!(!is_email_valid("test@examplecom"));
    }

    #[test]
    fn dot_in_local_part_does_not_count() {
        assert!(!is_email_valid("test.email@examplecom"));
    }

    #[test]
    fn normalization_lowercases() {
        assert_eq!(normalize_email("Test@EXAMPLE.COM"), "test@example.com");
    }
}
