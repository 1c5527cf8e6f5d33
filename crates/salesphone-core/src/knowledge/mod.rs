mod builtin;

use crate::domain::{CountryInfo, TrunkRule};
use crate::error::CoreError;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

static BUILTIN: OnceLock<KnowledgeBase> = OnceLock::new();

pub fn builtin() -> &'static KnowledgeBase {
    BUILTIN.get_or_init(builtin::knowledge_base)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    countries: BTreeMap<String, CountryInfo>,
    calling_codes: Vec<String>,
}

impl KnowledgeBase {
    pub fn builder() -> KnowledgeBaseBuilder {
        KnowledgeBaseBuilder::default()
    }

    pub fn to_builder(&self) -> KnowledgeBaseBuilder {
        KnowledgeBaseBuilder {
            countries: self.countries.clone(),
        }
    }

    pub fn country(&self, name: &str) -> Option<&CountryInfo> {
        self.countries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.countries.contains_key(name)
    }

    pub fn countries(&self) -> impl Iterator<Item = (&str, &CountryInfo)> {
        self.countries
            .iter()
            .map(|(name, info)| (name.as_str(), info))
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn calling_codes(&self) -> &[String] {
        &self.calling_codes
    }

    fn from_countries(countries: BTreeMap<String, CountryInfo>) -> Self {
        let distinct: BTreeSet<&str> = countries.values().map(CountryInfo::country_code).collect();
        let mut calling_codes: Vec<String> = distinct.into_iter().map(str::to_string).collect();
        // Longest first, so `12` is tried before `1`.
        calling_codes.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        Self {
            countries,
            calling_codes,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct KnowledgeBaseBuilder {
    countries: BTreeMap<String, CountryInfo>,
}

impl KnowledgeBaseBuilder {
    pub fn get(&self, name: &str) -> Option<&CountryInfo> {
        self.countries.get(name)
    }

    pub fn country<I>(
        &mut self,
        name: &str,
        calling_code: &str,
        trunk_rule: TrunkRule,
        cities: I,
    ) -> Result<&mut Self, CoreError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let name = validate_country_name(name)?;
        let info = CountryInfo::new(name, calling_code, trunk_rule, cities)?;
        self.countries.insert(name.to_string(), info);
        Ok(self)
    }

    pub fn city(
        &mut self,
        country: &str,
        city: &str,
        area_code: &str,
    ) -> Result<&mut Self, CoreError> {
        let info = self
            .countries
            .get_mut(country)
            .ok_or_else(|| CoreError::UnknownCountry(country.to_string()))?;
        info.insert_city(country, city.to_string(), area_code.to_string())?;
        Ok(self)
    }

    pub fn build(self) -> KnowledgeBase {
        KnowledgeBase::from_countries(self.countries)
    }
}

fn validate_country_name(name: &str) -> Result<&str, CoreError> {
    if name.trim().is_empty() || name.trim() != name {
        return Err(CoreError::InvalidCountryName(name.to_string()));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::{builtin, KnowledgeBase};
    use crate::domain::TrunkRule;
    use crate::error::CoreError;

    #[test]
    fn calling_codes_are_distinct_and_longest_first() {
        let kb = builtin();
        let codes = kb.calling_codes();
        assert!(codes.windows(2).all(|pair| pair[0].len() >= pair[1].len()));
        assert_eq!(codes.iter().filter(|code| code.as_str() == "1").count(), 1);
        assert_eq!(codes.last().map(String::as_str), Some("1"));
        assert!(codes[..2].contains(&"353".to_string()));
        assert!(codes[..2].contains(&"358".to_string()));
    }

    #[test]
    fn builtin_is_shared() {
        assert!(std::ptr::eq(builtin(), builtin()));
    }

    #[test]
    fn builtin_covers_dataset_countries() {
        let kb = builtin();
        assert_eq!(kb.len(), 19);
        for name in ["USA", "UK", "France", "Norway", "Singapore", "Australia"] {
            assert!(kb.contains(name), "missing {name}");
        }
        let usa = kb.country("USA").expect("usa");
        assert_eq!(usa.country_code(), "1");
        assert_eq!(usa.trunk_rule(), TrunkRule::None);
        assert_eq!(usa.area_code("NYC"), Some("212"));
        let france = kb.country("France").expect("france");
        assert_eq!(france.trunk_rule(), TrunkRule::France10Digit);
    }

    #[test]
    fn builtin_rebuilds_through_validation() {
        let kb = builtin();
        let mut builder = KnowledgeBase::builder();
        for (name, info) in kb.countries() {
            let cities = info
                .cities()
                .map(|(city, code)| (city.to_string(), code.to_string()));
            builder
                .country(name, info.country_code(), info.trunk_rule(), cities)
                .expect("valid builtin entry");
        }
        assert_eq!(&builder.build(), kb);
    }

    #[test]
    fn builder_city_requires_known_country() {
        let mut builder = KnowledgeBase::builder();
        let err = builder.city("Atlantis", "Poseidonis", "7").unwrap_err();
        assert_eq!(err, CoreError::UnknownCountry("Atlantis".to_string()));
    }

    #[test]
    fn builder_rejects_padded_country_name() {
        let mut builder = KnowledgeBase::builder();
        let err = builder
            .country(" USA", "1", TrunkRule::None, Vec::new())
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidCountryName(_)));
    }

    #[test]
    fn builder_city_rejects_padded_name() {
        let mut builder = builtin().to_builder();
        let err = builder.city("USA", " Seattle ", "206").unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidCityName {
                country: "USA".to_string(),
                city: " Seattle ".to_string(),
            }
        );
        let kb = builder.build();
        let usa = kb.country("USA").expect("usa");
        assert_eq!(usa.area_code(" Seattle "), None);
    }

    #[test]
    fn to_builder_extends_existing_country() {
        let mut builder = builtin().to_builder();
        builder.city("USA", "Seattle", "206").expect("add city");
        let kb = builder.build();
        let extended = kb.country("USA").expect("usa");
        assert_eq!(extended.area_code("Seattle"), Some("206"));
        let original = builtin().country("USA").expect("usa");
        assert_eq!(original.area_code("Seattle"), None);
    }
}
