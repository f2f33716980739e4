use std::sync::{Arc, RwLock};

use mockdata_core::FieldType;

use crate::dataset::DataSet;
use crate::errors::SynthesisError;
use crate::rng::RandomSource;
use crate::synthesizer::ValueSynthesizer;

/// Holds the current data set; regeneration swaps it whole.
///
/// Readers get an `Arc` snapshot and never observe a partially built set.
#[derive(Debug, Default)]
pub struct DataSetSlot {
    current: RwLock<Arc<DataSet>>,
}

impl DataSetSlot {
    pub fn new(dataset: DataSet) -> Self {
        Self {
            current: RwLock::new(Arc::new(dataset)),
        }
    }

    pub fn snapshot(&self) -> Arc<DataSet> {
        let guard = self
            .current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Install `dataset`, returning the one it replaced. Last write wins.
    pub fn replace(&self, dataset: DataSet) -> Arc<DataSet> {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::replace(&mut *guard, Arc::new(dataset))
    }

    /// Generate a fresh set and install it. The slot is untouched on error.
    pub fn regenerate(
        &self,
        synthesizer: &ValueSynthesizer,
        selection: &[FieldType],
        count: usize,
        source: RandomSource,
    ) -> Result<Arc<DataSet>, SynthesisError> {
        let dataset = Arc::new(synthesizer.generate_dataset(selection, count, source)?);
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::clone(&dataset);
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_survives_replace() {
        let slot = DataSetSlot::default();
        let mut first = DataSet::new(1);
        first.insert(FieldType::from("Name"), vec!["Ann".to_string()]);
        slot.replace(first.clone());

        let before = slot.snapshot();
        let previous = slot.replace(DataSet::new(0));

        assert_eq!(*before, first);
        assert_eq!(*previous, first);
        assert!(slot.snapshot().is_empty());
    }
}
