//! Name and email builders.
//!
//! These do not draw; they shape the strings built from drawn pool entries.

/// `"{first} {last}"`.
pub fn full_name(first: &str, last: &str) -> String {
    format!("{first} {last}")
}

/// `"{first}.{last}"` lowercased with whitespace removed, then the row id
/// and the domain: `"mary.ann.smith12@example.com"`.
pub fn email(first: &str, last: &str, id: u64, domain: &str) -> String {
    let local: String = format!("{first}.{last}")
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    format!("{local}{id}@{domain}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(full_name("Alice", "Smith"), "Alice Smith");
    }

    #[test]
    fn test_email_lowercases_and_embeds_id() {
        assert_eq!(
            email("Charlie", "Smith", 1, "datamotion.dev"),
            "charlie.smith1@datamotion.dev"
        );
    }

    #[test]
    fn test_email_strips_whitespace() {
        assert_eq!(
            email("Mary Ann", "Van Dyke", 12, "example.com"),
            "maryann.vandyke12@example.com"
        );
    }
}
