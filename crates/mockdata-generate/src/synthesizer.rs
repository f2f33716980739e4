use std::time::Instant;

use chrono::{DateTime, FixedOffset};
use rand::RngCore;
use tracing::{debug, info, warn};

use mockdata_core::{FieldType, validate_count};

use crate::dataset::DataSet;
use crate::errors::SynthesisError;
use crate::generators::{GeneratorContext, GeneratorRegistry};
use crate::rng::RandomSource;

/// Options shared by every request of a [`ValueSynthesizer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SynthesisOptions {
    /// Reference instant for relative dates. `None` reads the local clock per request.
    pub now: Option<DateTime<FixedOffset>>,
}

/// Maps a field type and a count to generated values.
#[derive(Debug, Default)]
pub struct ValueSynthesizer {
    registry: GeneratorRegistry,
    options: SynthesisOptions,
}

impl ValueSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SynthesisOptions) -> Self {
        Self::with_registry(GeneratorRegistry::new(), options)
    }

    pub fn with_registry(registry: GeneratorRegistry, options: SynthesisOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    pub fn options(&self) -> &SynthesisOptions {
        &self.options
    }

    fn context(&self) -> GeneratorContext {
        self.options
            .now
            .map_or_else(GeneratorContext::local_now, GeneratorContext::new)
    }

    /// Exactly `count` independently drawn values for `field_type`.
    ///
    /// Lookup is case-insensitive; a type without a rule gets random words.
    pub fn synthesize(&self, field_type: &str, count: usize, rng: &mut dyn RngCore) -> Vec<String> {
        if !self.registry.is_known(field_type) {
            warn!(field_type, count, "no generator for field type, using fallback");
        }
        let generator = self.registry.resolve(field_type);
        let ctx = self.context();
        (0..count)
            .map(|_| generator.generate(&ctx, rng).render())
            .collect()
    }

    /// [`synthesize`](Self::synthesize) for a raw signed count; negative counts are rejected.
    pub fn synthesize_checked(
        &self,
        field_type: &str,
        count: i64,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<String>, SynthesisError> {
        let count = validate_count(count)?;
        Ok(self.synthesize(field_type, count, rng))
    }

    /// One column per selected field type, in selection order.
    pub fn generate_dataset(
        &self,
        selection: &[FieldType],
        count: usize,
        source: RandomSource,
    ) -> Result<DataSet, SynthesisError> {
        let start = Instant::now();
        let mut dataset = DataSet::new(count);

        for field_type in selection {
            let mut rng = source.rng_for(&field_type.key())?;
            let values = self.synthesize(field_type.as_str(), count, &mut rng);
            debug!(field_type = %field_type, count = values.len(), "column generated");
            dataset.insert(field_type.clone(), values);
        }

        info!(
            columns = dataset.len(),
            count,
            seed = source.seed(),
            duration_ms = start.elapsed().as_millis() as u64,
            "dataset generated"
        );
        Ok(dataset)
    }
}
