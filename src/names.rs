//! Name data and the per-name helpers every pipeline shares.

/// Key characters from William Shakespeare's Hamlet, as a literal list.
pub const CHARACTERS: [&str; 6] = [
    "horatio", "claudius", "Gertrude", "Hamlet", "laertes", "Ophelia",
];

/// The same characters joined into one comma-delimited blob.
pub const CHARACTERS_CSV: &str = "horatio,claudius,Gertrude,Hamlet,laertes,Ophelia";

pub const DELIMITER: char = ',';

/// Owned copy of the literal list, ready to be mutated in place.
pub fn literal_names() -> Vec<String> {
    CHARACTERS.iter().map(|s| s.to_string()).collect()
}

/// Split a delimited blob into names. Lazy: nothing is allocated.
pub fn split_names(blob: &str) -> impl Iterator<Item = &str> {
    blob.split(DELIMITER)
}

/// Uppercase the first character and lowercase the rest.
///
/// Pure and total: the empty string comes back unchanged.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
    }
}

/// Does the name start with 'h' or 'H'?
///
/// An empty name has no first character, so it never matches.
pub fn starts_with_h(name: &str) -> bool {
    name.chars()
        .next()
        .is_some_and(|first| first.to_lowercase().eq(['h']))
}

/// Length of a name in characters, not bytes.
pub fn name_length(name: &str) -> usize {
    name.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_capitalize_examples() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize("HELLO"), "Hello");
        assert_eq!(capitalize("wOrLD"), "World");
        assert_eq!(capitalize("horatio"), "Horatio");
    }

    #[test]
    fn test_capitalize_non_ascii() {
        assert_eq!(capitalize("éLODIE"), "Élodie");
        assert_eq!(name_length("Élodie"), 6);
    }

    #[test]
    fn test_starts_with_h() {
        assert!(starts_with_h("horatio"));
        assert!(starts_with_h("Hamlet"));
        assert!(!starts_with_h("Ophelia"));
        assert!(!starts_with_h(""));
        assert!(!starts_with_h(" hamlet"));
    }

    #[test]
    fn test_both_inputs_hold_the_same_names() {
        let split: Vec<&str> = split_names(CHARACTERS_CSV).collect();
        assert_eq!(split, CHARACTERS);
        assert_eq!(literal_names(), CHARACTERS);
    }

    #[test]
    fn test_split_keeps_empty_segments() {
        let split: Vec<&str> = split_names("hamlet,,horatio").collect();
        assert_eq!(split, vec!["hamlet", "", "horatio"]);
    }

    proptest! {
        #[test]
        fn test_capitalize_shape(name in "[a-zA-Z]{1,12}") {
            let capitalized = capitalize(&name);

            prop_assert_eq!(capitalized.len(), name.len());
            prop_assert!(capitalized.chars().next().unwrap().is_ascii_uppercase());
            prop_assert!(capitalized.chars().skip(1).all(|c| c.is_ascii_lowercase()));
            prop_assert!(capitalized.eq_ignore_ascii_case(&name));
        }

        #[test]
        fn test_capitalize_is_idempotent_on_ascii(name in "[a-zA-Z]{0,12}") {
            let once = capitalize(&name);
            prop_assert_eq!(capitalize(&once), once);
        }
    }
}
