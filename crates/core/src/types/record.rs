//! Numbering-plan records

use crate::constants::REGION_CODE_FOR_NON_GEO_ENTITY;
use serde::{Deserialize, Serialize};

/// Description of one class of numbers (fixed line, mobile, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumberDesc {
    /// Pattern matched against the national significant number
    pub national_number_pattern: Option<String>,
    /// Lengths a number of this class may have
    pub possible_lengths: Vec<u8>,
    /// A representative number
    pub example_number: Option<String>,
}

impl PhoneNumberDesc {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            national_number_pattern: Some(pattern.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_possible_lengths(mut self, lengths: impl Into<Vec<u8>>) -> Self {
        self.possible_lengths = lengths.into();
        self
    }

    #[must_use]
    pub fn with_example_number(mut self, example: impl Into<String>) -> Self {
        self.example_number = Some(example.into());
        self
    }
}

/// A formatting rule applied to matching numbers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub pattern: String,
    pub format: String,
    pub leading_digits_patterns: Vec<String>,
    pub national_prefix_formatting_rule: Option<String>,
}

/// Immutable numbering-plan description for a region or non-geographical entity.
///
/// Records whose `id` is [`REGION_CODE_FOR_NON_GEO_ENTITY`] are keyed by their
/// calling code rather than by `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Region code, or the non-geographical sentinel
    pub id: String,
    /// Country calling code
    pub country_code: i32,
    pub international_prefix: Option<String>,
    pub preferred_international_prefix: Option<String>,
    pub national_prefix: Option<String>,
    pub national_prefix_for_parsing: Option<String>,
    pub leading_digits: Option<String>,
    /// Whether this region is the main one for a shared calling code
    pub main_country_for_code: bool,
    pub general_desc: Option<PhoneNumberDesc>,
    pub fixed_line: Option<PhoneNumberDesc>,
    pub mobile: Option<PhoneNumberDesc>,
    pub toll_free: Option<PhoneNumberDesc>,
    pub premium_rate: Option<PhoneNumberDesc>,
    pub voip: Option<PhoneNumberDesc>,
    pub number_formats: Vec<NumberFormat>,
}

impl MetadataRecord {
    pub fn new(id: impl Into<String>, country_code: i32) -> Self {
        Self {
            id: id.into(),
            country_code,
            ..Self::default()
        }
    }

    /// Create a record for a non-geographical entity
    pub fn non_geographical(country_code: i32) -> Self {
        Self::new(REGION_CODE_FOR_NON_GEO_ENTITY, country_code)
    }

    /// True when the record describes a non-geographical entity
    pub fn is_non_geographical(&self) -> bool {
        self.id == REGION_CODE_FOR_NON_GEO_ENTITY
    }

    #[must_use]
    pub fn with_international_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.international_prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn with_national_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.national_prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn with_main_country_for_code(mut self, main: bool) -> Self {
        self.main_country_for_code = main;
        self
    }

    #[must_use]
    pub fn with_general_desc(mut self, desc: PhoneNumberDesc) -> Self {
        self.general_desc = Some(desc);
        self
    }

    #[must_use]
    pub fn with_fixed_line(mut self, desc: PhoneNumberDesc) -> Self {
        self.fixed_line = Some(desc);
        self
    }

    #[must_use]
    pub fn with_mobile(mut self, desc: PhoneNumberDesc) -> Self {
        self.mobile = Some(desc);
        self
    }

    #[must_use]
    pub fn with_toll_free(mut self, desc: PhoneNumberDesc) -> Self {
        self.toll_free = Some(desc);
        self
    }

    #[must_use]
    pub fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.number_formats.push(format);
        self
    }
}
