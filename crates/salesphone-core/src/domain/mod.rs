pub mod country;
pub mod trunk;

pub use country::CountryInfo;
pub use trunk::TrunkRule;
