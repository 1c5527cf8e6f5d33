use crate::knowledge::KnowledgeBase;

pub const LOCAL_NUMBER_MAX_LEN: usize = 8;

pub fn normalize_domestic(kb: &KnowledgeBase, digits: &str, country: &str, city: &str) -> String {
    let Some(info) = kb.country(country) else {
        return digits.to_string();
    };

    let local = info.trunk_rule().apply(digits);

    // An eight-digit number that already carries a different area code still
    // gets this one prepended.
    if !city.is_empty() && local.len() <= LOCAL_NUMBER_MAX_LEN {
        if let Some(area_code) = info.area_code(city) {
            if !area_code.is_empty() && !local.starts_with(area_code) {
                return format!("{area_code}{local}");
            }
        }
    }

    local.to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize_domestic;
    use crate::knowledge::builtin;

    #[test]
    fn unknown_country_passes_through() {
        assert_eq!(normalize_domestic(builtin(), "05551234", "Atlantis", ""), "05551234");
    }

    #[test]
    fn trunk_rule_runs_before_area_code() {
        assert_eq!(
            normalize_domestic(builtin(), "012345678", "Australia", "Melbourne"),
            "312345678"
        );
    }

    #[test]
    fn area_code_prepended_to_short_numbers() {
        assert_eq!(normalize_domestic(builtin(), "5551234", "USA", "NYC"), "2125551234");
        assert_eq!(
            normalize_domestic(builtin(), "12345678", "Australia", "Melbourne"),
            "312345678"
        );
    }

    #[test]
    fn area_code_not_repeated() {
        assert_eq!(
            normalize_domestic(builtin(), "32345678", "Australia", "Melbourne"),
            "32345678"
        );
    }

    #[test]
    fn long_numbers_keep_their_digits() {
        assert_eq!(
            normalize_domestic(builtin(), "123456789", "Australia", "Melbourne"),
            "123456789"
        );
    }

    #[test]
    fn empty_area_code_and_unknown_city_are_ignored() {
        assert_eq!(
            normalize_domestic(builtin(), "62217555", "Singapore", "Singapore"),
            "62217555"
        );
        assert_eq!(normalize_domestic(builtin(), "5551234", "USA", "Atlantis"), "5551234");
        assert_eq!(normalize_domestic(builtin(), "5551234", "USA", ""), "5551234");
    }

    #[test]
    fn eight_digit_number_with_other_area_code_is_prefixed_again() {
        assert_eq!(
            normalize_domestic(builtin(), "71234567", "Australia", "Melbourne"),
            "371234567"
        );
    }
}
