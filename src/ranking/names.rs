//! Display name formatting used by celebrations

/// First name token of a display name.
///
/// Surrounding and repeated whitespace is ignored. A blank name yields an
/// empty string.
pub fn first_name(display_name: &str) -> String {
    display_name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

/// English ordinal for a podium rank ("1st", "2nd", "3rd").
pub fn ordinal(rank: u8) -> String {
    let suffix = match (rank % 10, rank % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", rank, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name_multi_word() {
        assert_eq!(first_name("Ana Silva"), "Ana");
        assert_eq!(first_name("Carlos de Oliveira Neto"), "Carlos");
    }

    #[test]
    fn test_first_name_single_word() {
        assert_eq!(first_name("Mariana"), "Mariana");
    }

    #[test]
    fn test_first_name_extra_whitespace() {
        assert_eq!(first_name("  Pedro   Costa "), "Pedro");
        assert_eq!(first_name("Juliana\tLima"), "Juliana");
    }

    #[test]
    fn test_first_name_blank() {
        assert_eq!(first_name(""), "");
        assert_eq!(first_name("   "), "");
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(22), "22nd");
    }
}
