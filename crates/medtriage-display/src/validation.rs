// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Password and email acceptance rules.
//!
//! Each password rule is exposed separately so a checklist can show
//! progress while the user types.

use std::sync::LazyLock;

use regex::Regex;

pub const MIN_PASSWORD_LENGTH: usize = 8;

static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{Lu}").unwrap());

static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{Nd}").unwrap());

// Neither letter, digit, nor whitespace.
static SPECIAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\p{L}\p{Nd}\s]").unwrap());

// Only gmail.com addresses are accepted.
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@gmail\.com$").unwrap());

pub fn has_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

pub fn has_uppercase(password: &str) -> bool {
    UPPERCASE.is_match(password)
}

pub fn has_digit(password: &str) -> bool {
    DIGIT.is_match(password)
}

pub fn has_special(password: &str) -> bool {
    SPECIAL.is_match(password)
}

/// Per-rule result for incremental feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordChecklist {
    pub min_length: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl PasswordChecklist {
    pub fn check(password: &str) -> Self {
        Self {
            min_length: has_min_length(password),
            uppercase: has_uppercase(password),
            digit: has_digit(password),
            special: has_special(password),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.min_length && self.uppercase && self.digit && self.special
    }

    /// `(rule description, satisfied)` in display order.
    pub fn items(&self) -> [(&'static str, bool); 4] {
        [
            ("At least 8 characters", self.min_length),
            ("One uppercase letter", self.uppercase),
            ("One number", self.digit),
            ("One special character", self.special),
        ]
    }
}

pub fn is_valid_password(password: &str) -> bool {
    PasswordChecklist::check(password).is_satisfied()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn password_examples() {
        assert!(is_valid_password("Abcdef1!"));
        assert!(!is_valid_password("abcdefg1!"));
        assert!(!is_valid_password("Abcdefgh"));
        assert!(!is_valid_password("Ab1!"));
    }

    #[test]
    fn individual_rules() {
        let checklist = PasswordChecklist::check("abcdefg1!");
        assert!(checklist.min_length);
        assert!(!checklist.uppercase);
        assert!(checklist.digit);
        assert!(checklist.special);

        assert!(!has_special("Abcdefg1 "));
        assert!(has_special("Abc_defg1"));
        assert!(has_uppercase("ÉCOLE"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(!has_min_length("éééééé"));
        assert!(has_min_length("éééééééé"));
    }

    #[test]
    fn checklist_items_follow_rules() {
        let items = PasswordChecklist::check("Ab1!").items();
        assert_eq!(items[0], ("At least 8 characters", false));
        assert!(items[1..].iter().all(|(_, ok)| *ok));
    }

    #[test]
    fn email_examples() {
        assert!(is_valid_email("user@gmail.com"));
        assert!(is_valid_email("first.last+tag@gmail.com"));
        assert!(!is_valid_email("user@yahoo.com"));
        assert!(!is_valid_email("bad@gmail.co"));
        assert!(!is_valid_email("user@gmail.com.evil"));
        assert!(!is_valid_email("@gmail.com"));
        assert!(!is_valid_email("us er@gmail.com"));
    }

    proptest! {
        #[test]
        fn combined_check_is_conjunction(s in "\\PC{0,16}") {
            let expected = has_min_length(&s) && has_uppercase(&s) && has_digit(&s) && has_special(&s);
            prop_assert_eq!(is_valid_password(&s), expected);
        }
    }
}
