//! Property tests for the validation predicates

use core_kernel::validation::{is_blank, is_valid_email, is_valid_postal_code, is_valid_phone};
use proptest::prelude::*;

proptest! {
    #[test]
    fn five_ascii_digits_always_valid(code in "[0-9]{5}") {
        prop_assert!(is_valid_postal_code(&code));
    }

    #[test]
    fn wrong_length_never_valid(code in "[0-9]{0,4}|[0-9]{6,12}") {
        prop_assert!(!is_valid_postal_code(&code));
    }

    #[test]
    fn embedded_letter_never_valid(code in "[0-9]{2}[A-Za-z][0-9]{2}") {
        prop_assert!(!is_valid_postal_code(&code));
    }

    #[test]
    fn whitespace_only_is_blank(ws in "[ \t\n]{0,10}") {
        prop_assert!(is_blank(&ws));
    }

    #[test]
    fn any_nonspace_char_is_not_blank(s in "[ ]{0,3}[a-z0-9]{1,5}[ ]{0,3}") {
        prop_assert!(!is_blank(&s));
    }

    #[test]
    fn simple_addresses_are_valid_emails(
        local in "[a-z0-9]{1,10}",
        domain in "[a-z0-9]{1,10}",
        tld in "[a-z]{2,4}",
    ) {
        let address = format!("{local}@{domain}.{tld}");
        prop_assert!(is_valid_email(&address));
    }

    #[test]
    fn address_without_at_sign_is_invalid(s in "[a-z0-9.]{1,20}") {
        prop_assert!(!is_valid_email(&s));
    }

    #[test]
    fn bare_ten_digit_numbers_are_valid_phones(
        lead in "[1-9]",
        rest in "[0-9]{8}",
    ) {
        let phone = format!("0{lead}{rest}");
        prop_assert!(is_valid_phone(&phone));
    }

    #[test]
    fn separator_choice_does_not_matter(
        lead in "[1-9]",
        pairs in prop::collection::vec("[0-9]{2}", 4),
        sep in prop::sample::select(vec![" ", ".", "-", ""]),
    ) {
        let phone = format!("0{lead}{sep}{}", pairs.join(sep));
        prop_assert!(is_valid_phone(&phone));
    }
}
