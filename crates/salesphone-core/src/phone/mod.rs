mod domestic;
mod extract;
mod format;
mod international;

pub use domestic::{normalize_domestic, LOCAL_NUMBER_MAX_LEN};
pub use extract::extract_digits;
pub use format::format_e164;
pub use international::parse_international;

use crate::error::NormalizeError;
use crate::knowledge::{builtin, KnowledgeBase};
use extract::clean_text;

pub fn normalize_to_e164(raw: Option<&str>, country: Option<&str>, city: Option<&str>) -> String {
    Normalizer::builtin().normalize(raw, country, city)
}

pub fn try_normalize_to_e164(
    raw: Option<&str>,
    country: Option<&str>,
    city: Option<&str>,
) -> Result<String, NormalizeError> {
    Normalizer::builtin().try_normalize(raw, country, city)
}

#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'kb> {
    kb: &'kb KnowledgeBase,
}

impl Normalizer<'static> {
    pub fn builtin() -> Self {
        Self { kb: builtin() }
    }
}

impl<'kb> Normalizer<'kb> {
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        Self { kb }
    }

    pub fn knowledge_base(&self) -> &'kb KnowledgeBase {
        self.kb
    }

    pub fn normalize(
        &self,
        raw: Option<&str>,
        country: Option<&str>,
        city: Option<&str>,
    ) -> String {
        self.try_normalize(raw, country, city).unwrap_or_default()
    }

    pub fn try_normalize(
        &self,
        raw: Option<&str>,
        country: Option<&str>,
        city: Option<&str>,
    ) -> Result<String, NormalizeError> {
        let cleaned = extract_digits(raw);
        if cleaned.is_empty() {
            return Err(NormalizeError::EmptyInput);
        }

        let country = clean_text(country);
        let city = clean_text(city);
        let international = cleaned.starts_with('+');

        if country.is_empty() && !international {
            return Err(NormalizeError::MissingCountry);
        }

        if international {
            let (calling_code, national) = parse_international(self.kb, &cleaned)?;
            return format_e164(calling_code, national);
        }

        let info = self
            .kb
            .country(country)
            .ok_or(NormalizeError::UnknownCountry)?;
        let national = normalize_domestic(self.kb, &cleaned, country, city);
        format_e164(info.country_code(), &national)
    }
}
