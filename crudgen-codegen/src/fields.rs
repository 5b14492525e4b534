//! Record fields shared by every generated resource.
//!
//! Each resource carries a required `name`, an optional `description` and a
//! non-negative `price`. The limits here are rendered into model schemas and
//! service validation so both layers agree.

/// Validation limits for the generated record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    pub name_max_length: usize,
    pub description_max_length: usize,
    pub price_min: u32,
}

impl FieldRules {
    pub const DEFAULT: FieldRules = FieldRules {
        name_max_length: 255,
        description_max_length: 2000,
        price_min: 0,
    };
}

impl Default for FieldRules {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A record the in-memory backend starts with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRecord {
    pub name: &'static str,
    pub description: &'static str,
    pub price: f64,
}

/// Seed data for in-memory models.
pub const SAMPLE_RECORDS: [SampleRecord; 2] = [
    SampleRecord {
        name: "Sample Item 1",
        description: "This is the first sample item",
        price: 19.99,
    },
    SampleRecord {
        name: "Sample Item 2",
        description: "This is the second sample item",
        price: 29.99,
    },
];
