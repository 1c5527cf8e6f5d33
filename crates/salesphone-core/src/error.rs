use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid country name: {0:?}")]
    InvalidCountryName(String),
    #[error("unknown country: {0}")]
    UnknownCountry(String),
    #[error("invalid calling code for {country}: {code:?}")]
    InvalidCallingCode { country: String, code: String },
    #[error("invalid city name for {country}: {city:?}")]
    InvalidCityName { country: String, city: String },
    #[error("invalid area code for {country}/{city}: {code:?}")]
    InvalidAreaCode {
        country: String,
        city: String,
        code: String,
    },
    #[error("invalid trunk rule: {0}")]
    InvalidTrunkRule(String),
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
pub enum NormalizeError {
    #[error("phone value is empty")]
    EmptyInput,
    #[error("domestic number without a country")]
    MissingCountry,
    #[error("country has no dialing information")]
    UnknownCountry,
    #[error("no known calling code matches")]
    UnknownCallingCode,
    #[error("calling code leaves no subscriber digits")]
    DegenerateMatch,
    #[error("national number is empty or contains non-digits")]
    MalformedNationalNumber,
    #[error("national number has the wrong length")]
    InvalidLength,
}

impl NormalizeError {
    pub const fn as_str(self) -> &'static str {
        match self {
            NormalizeError::EmptyInput => "empty-input",
            NormalizeError::MissingCountry => "missing-country",
            NormalizeError::UnknownCountry => "unknown-country",
            NormalizeError::UnknownCallingCode => "unknown-calling-code",
            NormalizeError::DegenerateMatch => "degenerate-match",
            NormalizeError::MalformedNationalNumber => "malformed-national-number",
            NormalizeError::InvalidLength => "invalid-length",
        }
    }

    pub const fn all() -> &'static [NormalizeError] {
        &[
            NormalizeError::EmptyInput,
            NormalizeError::MissingCountry,
            NormalizeError::UnknownCountry,
            NormalizeError::UnknownCallingCode,
            NormalizeError::DegenerateMatch,
            NormalizeError::MalformedNationalNumber,
            NormalizeError::InvalidLength,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::NormalizeError;
    use std::collections::HashSet;

    #[test]
    fn normalize_error_codes_are_unique() {
        let codes: HashSet<&str> = NormalizeError::all().iter().map(|e| e.as_str()).collect();
        assert_eq!(codes.len(), NormalizeError::all().len());
    }
}
