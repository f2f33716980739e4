use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use rand::RngCore;

use mockdata_core::normalize_key;

pub mod domain;
pub mod faker_rs;
pub mod primitives;

use crate::faker_rs::FakerKind;
use faker_rs::FakerGenerator;

/// Identifier of the generator used for field types without a rule.
pub const FALLBACK_ID: &str = "fallback.word";

/// Generated value for a field.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    Text(String),
    Int(i64),
    /// Fixed-point rendering with `scale` decimals.
    Float {
        value: f64,
        scale: usize,
    },
    Date(NaiveDate),
    Time(NaiveTime),
}

impl GeneratedValue {
    /// Textual form handed to callers and exporters.
    pub fn render(&self) -> String {
        match self {
            GeneratedValue::Text(value) => value.clone(),
            GeneratedValue::Int(value) => value.to_string(),
            GeneratedValue::Float { value, scale } => format!("{value:.scale$}"),
            GeneratedValue::Date(value) => value.format("%Y-%m-%d").to_string(),
            GeneratedValue::Time(value) => value.format("%-I:%M:%S %p").to_string(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GeneratedValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GeneratedValue::Int(value) => Some(*value as f64),
            GeneratedValue::Float { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GeneratedValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for GeneratedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Inputs shared by every generator call of one synthesis request.
///
/// `now` carries the caller's UTC offset: dates and epoch values are taken
/// in UTC, wall-clock times in that offset.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorContext {
    /// Reference instant for relative dates ("recent", "past", birthdates).
    pub now: DateTime<FixedOffset>,
}

impl GeneratorContext {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }

    /// Context pinned to the local clock.
    pub fn local_now() -> Self {
        Self::new(chrono::Local::now().fixed_offset())
    }

    /// Calendar date of `now` in UTC.
    pub fn today(&self) -> NaiveDate {
        self.now.naive_utc().date()
    }
}

impl Default for GeneratorContext {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::UNIX_EPOCH.fixed_offset())
    }
}

/// A rule producing one value for one field type.
pub trait Generator: Send + Sync {
    /// Canonical field type label this rule answers to.
    fn id(&self) -> &'static str;

    fn generate(&self, ctx: &GeneratorContext, rng: &mut dyn RngCore) -> GeneratedValue;
}

/// Field type -> generator table, built once and read-only afterwards.
pub struct GeneratorRegistry {
    generators: HashMap<String, Box<dyn Generator>>,
    fallback: Box<dyn Generator>,
}

impl GeneratorRegistry {
    /// Registry with every built-in rule registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        domain::register(&mut registry);
        registry
    }

    /// Registry holding only the fallback rule.
    pub fn empty() -> Self {
        Self {
            generators: HashMap::new(),
            fallback: Box::new(FakerGenerator::new(FALLBACK_ID, FakerKind::Word)),
        }
    }

    /// Register a rule under its id. A later rule for the same id replaces the earlier one.
    pub fn register_generator(&mut self, generator: Box<dyn Generator>) {
        self.generators.insert(normalize_key(generator.id()), generator);
    }

    pub fn generator(&self, field_type: &str) -> Option<&dyn Generator> {
        self.generators
            .get(&normalize_key(field_type))
            .map(|generator| &**generator)
    }

    /// Rule for `field_type`, or the fallback when none is registered.
    pub fn resolve(&self, field_type: &str) -> &dyn Generator {
        self.generator(field_type).unwrap_or_else(|| self.fallback())
    }

    pub fn fallback(&self) -> &dyn Generator {
        &*self.fallback
    }

    pub fn is_known(&self, field_type: &str) -> bool {
        self.generators.contains_key(&normalize_key(field_type))
    }

    /// Registered ids, sorted.
    pub fn generator_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self
            .generators
            .values()
            .map(|generator| generator.id())
            .collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("generators", &self.generators.len())
            .field("fallback", &self.fallback.id())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_each_variant() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap_or_default();
        let time = NaiveTime::from_hms_opt(15, 4, 5).unwrap_or_default();

        assert_eq!(GeneratedValue::Int(42).render(), "42");
        assert_eq!(
            GeneratedValue::Float {
                value: 3.0,
                scale: 1
            }
            .render(),
            "3.0"
        );
        assert_eq!(GeneratedValue::Date(date).render(), "2024-03-09");
        assert_eq!(GeneratedValue::Time(time).render(), "3:04:05 PM");
    }

    #[test]
    fn lookup_ignores_case_and_falls_back() {
        let registry = GeneratorRegistry::new();
        assert!(registry.is_known("blood type"));
        assert_eq!(registry.resolve("BLOOD TYPE").id(), "Blood Type");
        assert_eq!(registry.resolve("no such field").id(), FALLBACK_ID);
    }
}
