use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum TrunkRule {
    DropZero,
    KeepZero,
    #[serde(rename = "france_10digit")]
    France10Digit,
    None,
}

impl TrunkRule {
    pub const fn as_str(self) -> &'static str {
        match self {
            TrunkRule::DropZero => "drop_zero",
            TrunkRule::KeepZero => "keep_zero",
            TrunkRule::France10Digit => "france_10digit",
            TrunkRule::None => "none",
        }
    }

    pub const fn all() -> &'static [TrunkRule] {
        &[
            TrunkRule::DropZero,
            TrunkRule::KeepZero,
            TrunkRule::France10Digit,
            TrunkRule::None,
        ]
    }

    pub fn apply(self, digits: &str) -> &str {
        match self {
            TrunkRule::DropZero => digits.strip_prefix('0').unwrap_or(digits),
            TrunkRule::France10Digit if digits.len() == 10 => {
                digits.strip_prefix('0').unwrap_or(digits)
            }
            TrunkRule::France10Digit | TrunkRule::KeepZero | TrunkRule::None => digits,
        }
    }
}

impl fmt::Display for TrunkRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for TrunkRule {
    type Error = CoreError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl FromStr for TrunkRule {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim().to_ascii_lowercase();
        match value.as_str() {
            "drop_zero" | "drop-zero" => Ok(TrunkRule::DropZero),
            "keep_zero" | "keep-zero" => Ok(TrunkRule::KeepZero),
            "france_10digit" | "france-10digit" => Ok(TrunkRule::France10Digit),
            "none" => Ok(TrunkRule::None),
            _ => Err(CoreError::InvalidTrunkRule(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TrunkRule;
    use std::str::FromStr;

    #[test]
    fn drop_zero_strips_single_leading_zero() {
        assert_eq!(TrunkRule::DropZero.apply("02012345678"), "2012345678");
        assert_eq!(TrunkRule::DropZero.apply("0012345678"), "012345678");
        assert_eq!(TrunkRule::DropZero.apply("2012345678"), "2012345678");
    }

    #[test]
    fn keep_zero_and_none_leave_digits_alone() {
        assert_eq!(TrunkRule::KeepZero.apply("022123456"), "022123456");
        assert_eq!(TrunkRule::None.apply("0212555123"), "0212555123");
    }

    #[test]
    fn france_rule_only_strips_ten_digit_numbers() {
        assert_eq!(TrunkRule::France10Digit.apply("0142345678"), "142345678");
        assert_eq!(TrunkRule::France10Digit.apply("042345678"), "042345678");
        assert_eq!(TrunkRule::France10Digit.apply("01423456789"), "01423456789");
        assert_eq!(TrunkRule::France10Digit.apply("1423456789"), "1423456789");
    }

    #[test]
    fn from_str_accepts_canonical_names() {
        for rule in TrunkRule::all() {
            assert_eq!(TrunkRule::from_str(rule.as_str()).expect("parse"), *rule);
        }
        assert!(TrunkRule::from_str("strip").is_err());
    }

    #[test]
    fn try_from_accepts_the_same_spellings_as_from_str() {
        assert_eq!(
            TrunkRule::try_from("drop-zero".to_string()),
            Ok(TrunkRule::DropZero)
        );
        assert_eq!(
            TrunkRule::try_from(" KEEP_ZERO ".to_string()),
            Ok(TrunkRule::KeepZero)
        );
        assert_eq!(
            TrunkRule::try_from("france-10digit".to_string()),
            Ok(TrunkRule::France10Digit)
        );
        assert!(TrunkRule::try_from("strip".to_string()).is_err());
    }
}
