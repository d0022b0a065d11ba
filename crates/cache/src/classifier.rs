//! Calling-code directory and the non-geographical classifier port

use phonemeta_core::{Error, Result, REGION_CODE_FOR_NON_GEO_ENTITY};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Decides whether a calling code designates a non-geographical entity
pub trait NonGeographicalClassifier: Send + Sync {
    fn is_non_geographical(&self, country_code: i32) -> bool;
}

/// Static mapping from calling code to the ordered regions sharing it.
///
/// The first region listed for a code is its main region. A code listing
/// only the non-geographical sentinel is a non-geographical calling code.
#[derive(Debug, Clone, Default)]
pub struct CountryCodeDirectory {
    regions_by_code: BTreeMap<i32, Vec<String>>,
    code_by_region: HashMap<String, i32>,
    non_geographical: HashSet<i32>,
}

impl CountryCodeDirectory {
    /// Build a directory, rejecting codes with no regions
    pub fn new(regions_by_code: impl IntoIterator<Item = (i32, Vec<String>)>) -> Result<Self> {
        let regions_by_code: BTreeMap<i32, Vec<String>> = regions_by_code.into_iter().collect();

        let mut code_by_region = HashMap::new();
        let mut non_geographical = HashSet::new();
        for (&code, regions) in &regions_by_code {
            if regions.is_empty() {
                return Err(Error::configuration(format!(
                    "calling code {code} maps to no region codes"
                )));
            }
            if regions.len() == 1 && regions[0] == REGION_CODE_FOR_NON_GEO_ENTITY {
                non_geographical.insert(code);
                continue;
            }
            for region in regions {
                if region == REGION_CODE_FOR_NON_GEO_ENTITY {
                    continue;
                }
                // A region belongs to the first code that lists it
                code_by_region.entry(region.clone()).or_insert(code);
            }
        }

        Ok(Self {
            regions_by_code,
            code_by_region,
            non_geographical,
        })
    }

    /// Convenience constructor over string slices
    pub fn from_entries<'a, I, R>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i32, R)>,
        R: IntoIterator<Item = &'a str>,
    {
        Self::new(entries.into_iter().map(|(code, regions)| {
            (code, regions.into_iter().map(str::to_string).collect())
        }))
    }

    /// Regions sharing `country_code`, main region first; empty when unknown
    pub fn region_codes_for(&self, country_code: i32) -> &[String] {
        self.regions_by_code
            .get(&country_code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn main_region_for(&self, country_code: i32) -> Option<&str> {
        self.region_codes_for(country_code).first().map(String::as_str)
    }

    pub fn country_code_for_region(&self, region_code: &str) -> Option<i32> {
        self.code_by_region.get(region_code).copied()
    }

    /// True for geographic regions listed under some calling code
    pub fn is_supported_region(&self, region_code: &str) -> bool {
        self.code_by_region.contains_key(region_code)
    }

    /// Geographic regions, sorted
    pub fn supported_regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = self.code_by_region.keys().map(String::as_str).collect();
        regions.sort_unstable();
        regions
    }

    /// Non-geographical calling codes, ascending
    pub fn non_geographical_codes(&self) -> Vec<i32> {
        let mut codes: Vec<i32> = self.non_geographical.iter().copied().collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.regions_by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions_by_code.is_empty()
    }
}

impl NonGeographicalClassifier for CountryCodeDirectory {
    fn is_non_geographical(&self, country_code: i32) -> bool {
        self.non_geographical.contains(&country_code)
    }
}
