use std::collections::BTreeMap;

use mapcycle_core::config::{BoostRule, SizeClass};
use mapcycle_core::traits::WeightPolicy;
use mapcycle_core::RotationConfig;

use super::{base, boost};

/// Weight policy driven by the config's size-class table and boost rules.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredWeightPolicy {
    size_classes: BTreeMap<String, SizeClass>,
    boosts: Vec<BoostRule>,
}

impl ConfiguredWeightPolicy {
    pub fn new(size_classes: BTreeMap<String, SizeClass>, boosts: Vec<BoostRule>) -> Self {
        Self {
            size_classes,
            boosts,
        }
    }

    pub fn from_config(config: &RotationConfig) -> Self {
        Self::new(config.size_classes.clone(), config.boosts.clone())
    }
}

impl WeightPolicy for ConfiguredWeightPolicy {
    fn base_weight(&self, entry: &str) -> u32 {
        base::base_weight(&self.size_classes, entry)
    }

    fn weight_for(&self, entry: &str, period_number: usize) -> u32 {
        let multiplier = boost::boost_multiplier(&self.boosts, entry, period_number);
        self.base_weight(entry).saturating_mul(multiplier)
    }
}
