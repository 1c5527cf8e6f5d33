use crate::domain::TrunkRule;
use crate::error::CoreError;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryInfo {
    country_code: String,
    trunk_rule: TrunkRule,
    national_destination_code: BTreeMap<String, String>,
}

impl CountryInfo {
    pub fn new(
        country: &str,
        country_code: &str,
        trunk_rule: TrunkRule,
        cities: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, CoreError> {
        if !is_digits(country_code) {
            return Err(CoreError::InvalidCallingCode {
                country: country.to_string(),
                code: country_code.to_string(),
            });
        }

        let mut info = Self {
            country_code: country_code.to_string(),
            trunk_rule,
            national_destination_code: BTreeMap::new(),
        };
        for (city, code) in cities {
            info.insert_city(country, city, code)?;
        }
        Ok(info)
    }

    pub(crate) fn from_static(
        country_code: &'static str,
        trunk_rule: TrunkRule,
        cities: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            country_code: country_code.to_string(),
            trunk_rule,
            national_destination_code: cities
                .iter()
                .map(|(city, code)| (city.to_string(), code.to_string()))
                .collect(),
        }
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn trunk_rule(&self) -> TrunkRule {
        self.trunk_rule
    }

    pub fn area_code(&self, city: &str) -> Option<&str> {
        self.national_destination_code.get(city).map(String::as_str)
    }

    pub fn cities(&self) -> impl Iterator<Item = (&str, &str)> {
        self.national_destination_code
            .iter()
            .map(|(city, code)| (city.as_str(), code.as_str()))
    }

    pub fn city_count(&self) -> usize {
        self.national_destination_code.len()
    }

    pub(crate) fn insert_city(
        &mut self,
        country: &str,
        city: String,
        code: String,
    ) -> Result<(), CoreError> {
        if city.trim().is_empty() || city.trim() != city {
            return Err(CoreError::InvalidCityName {
                country: country.to_string(),
                city,
            });
        }
        if !(code.is_empty() || is_digits(&code)) {
            return Err(CoreError::InvalidAreaCode {
                country: country.to_string(),
                city,
                code,
            });
        }
        self.national_destination_code.insert(city, code);
        Ok(())
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
