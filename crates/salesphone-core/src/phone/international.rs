use crate::error::NormalizeError;
use crate::knowledge::KnowledgeBase;

pub fn parse_international<'kb, 'a>(
    kb: &'kb KnowledgeBase,
    number: &'a str,
) -> Result<(&'kb str, &'a str), NormalizeError> {
    let digits = number.strip_prefix('+').unwrap_or(number);
    if digits.is_empty() {
        return Err(NormalizeError::MalformedNationalNumber);
    }

    let code = kb
        .calling_codes()
        .iter()
        .find(|code| digits.starts_with(code.as_str()))
        .ok_or(NormalizeError::UnknownCallingCode)?;

    let national = &digits[code.len()..];
    if national.is_empty() {
        return Err(NormalizeError::DegenerateMatch);
    }

    Ok((code.as_str(), national))
}

#[cfg(test)]
mod tests {
    use super::parse_international;
    use crate::domain::TrunkRule;
    use crate::error::NormalizeError;
    use crate::knowledge::{builtin, KnowledgeBase};

    #[test]
    fn parse_splits_known_codes() {
        let kb = builtin();
        assert_eq!(
            parse_international(kb, "+442012345678"),
            Ok(("44", "2012345678"))
        );
        assert_eq!(
            parse_international(kb, "+12125551234"),
            Ok(("1", "2125551234"))
        );
        assert_eq!(parse_international(kb, "+35891234567"), Ok(("358", "91234567")));
    }

    #[test]
    fn parse_prefers_longest_code() {
        let mut builder = KnowledgeBase::builder();
        builder
            .country("Atlantis", "1", TrunkRule::None, Vec::new())
            .expect("atlantis");
        builder
            .country("Lemuria", "12", TrunkRule::DropZero, Vec::new())
            .expect("lemuria");
        let kb = builder.build();

        assert_eq!(kb.calling_codes(), ["12", "1"]);
        assert_eq!(parse_international(&kb, "+1234567890"), Ok(("12", "34567890")));
        assert_eq!(parse_international(&kb, "+1334567890"), Ok(("1", "334567890")));
    }

    #[test]
    fn parse_rejects_unknown_code() {
        assert_eq!(
            parse_international(builtin(), "+999123456789"),
            Err(NormalizeError::UnknownCallingCode)
        );
    }

    #[test]
    fn parse_rejects_code_without_subscriber() {
        assert_eq!(
            parse_international(builtin(), "+358"),
            Err(NormalizeError::DegenerateMatch)
        );
        assert_eq!(
            parse_international(builtin(), "+1"),
            Err(NormalizeError::DegenerateMatch)
        );
    }

    #[test]
    fn parse_rejects_bare_marker() {
        assert_eq!(
            parse_international(builtin(), "+"),
            Err(NormalizeError::MalformedNationalNumber)
        );
        assert_eq!(
            parse_international(builtin(), ""),
            Err(NormalizeError::MalformedNationalNumber)
        );
    }
}
