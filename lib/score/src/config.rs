//! Configuration for the reference vectorizer and estimator
//!
//! Both structs deserialize with defaults for every omitted field, so a
//! minimal JSON object such as `{"bits": 18}` is a valid configuration.

use hotvect_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Feature hashing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HashingConfig {
    /// Index space is `2^bits`
    #[serde(default = "default_bits")]
    pub bits: u8,

    /// Seed mixed into every hash
    #[serde(default)]
    pub seed: u64,
}

fn default_bits() -> u8 {
    20
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            bits: default_bits(),
            seed: 0,
        }
    }
}

impl HashingConfig {
    pub const MAX_BITS: u8 = 31;

    pub fn new(bits: u8) -> Self {
        Self { bits, seed: 0 }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.bits == 0 || self.bits > Self::MAX_BITS {
            return Err(Error::InvalidConfig(format!(
                "hashing bits must be in 1..={}, got {}",
                Self::MAX_BITS,
                self.bits
            )));
        }
        Ok(())
    }

    /// Mask selecting the low `bits` bits of a hash
    pub fn mask(&self) -> Result<u32> {
        self.validate()?;
        Ok(((1u64 << self.bits) - 1) as u32)
    }
}

/// Function applied to the linear margin
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Link {
    /// Score is the margin itself (regression)
    #[default]
    Identity,
    /// Score is `1 / (1 + e^-margin)` (logistic regression)
    Logistic,
}

impl Link {
    #[inline]
    pub fn apply(self, margin: f64) -> f64 {
        match self {
            Link::Identity => margin,
            Link::Logistic => 1.0 / (1.0 + (-margin).exp()),
        }
    }
}

/// Weights of a linear model over a sparse index space
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LinearModel {
    #[serde(default)]
    pub bias: f64,

    /// (index, weight) pairs; unlisted indices weigh zero
    #[serde(default)]
    pub weights: Vec<(u32, f64)>,

    #[serde(default)]
    pub link: Link,
}

impl LinearModel {
    pub fn new(bias: f64, weights: Vec<(u32, f64)>) -> Self {
        Self {
            bias,
            weights,
            link: Link::Identity,
        }
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.link = link;
        self
    }

    /// Reject non-finite parameters and indices listed twice
    pub fn validate(&self) -> Result<()> {
        if !self.bias.is_finite() {
            return Err(Error::InvalidConfig(format!("bias {} is not finite", self.bias)));
        }

        let mut seen = ahash::AHashSet::with_capacity(self.weights.len());
        for &(index, weight) in &self.weights {
            if !weight.is_finite() {
                return Err(Error::InvalidConfig(format!(
                    "weight {} at index {} is not finite",
                    weight, index
                )));
            }
            if !seen.insert(index) {
                return Err(Error::InvalidConfig(format!(
                    "index {} has more than one weight",
                    index
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashing_defaults() {
        let config: HashingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, HashingConfig::default());
        assert_eq!(config.bits, 20);
        assert_eq!(config.mask().unwrap(), (1 << 20) - 1);
    }

    #[test]
    fn test_hashing_bits_range() {
        assert!(HashingConfig::new(1).validate().is_ok());
        assert!(HashingConfig::new(31).validate().is_ok());
        assert_eq!(HashingConfig::new(31).mask().unwrap(), i32::MAX as u32);
        assert!(matches!(HashingConfig::new(0).validate(), Err(Error::InvalidConfig(_))));
        assert!(matches!(HashingConfig::new(32).validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_mask_rejects_out_of_range_bits() {
        let config: HashingConfig = serde_json::from_str(r#"{"bits": 64}"#).unwrap();
        assert!(matches!(config.mask(), Err(Error::InvalidConfig(_))));
        assert!(matches!(HashingConfig::new(40).mask(), Err(Error::InvalidConfig(_))));
        assert!(matches!(HashingConfig::new(0).mask(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_link() {
        assert_eq!(Link::Identity.apply(2.5), 2.5);
        assert!((Link::Logistic.apply(0.0) - 0.5).abs() < 1e-12);
        assert!(Link::Logistic.apply(10.0) > 0.99);
    }

    #[test]
    fn test_model_serde_roundtrip() {
        let model = LinearModel::new(0.5, vec![(1, 2.0), (7, -1.0)]).with_link(Link::Logistic);
        let json = serde_json::to_string(&model).unwrap();
        let parsed: LinearModel = serde_json::from_str(&json).unwrap();
        assert_eq!(model, parsed);

        let minimal: LinearModel = serde_json::from_str(r#"{"weights": [[3, 1.5]]}"#).unwrap();
        assert_eq!(minimal.bias, 0.0);
        assert_eq!(minimal.link, Link::Identity);
        assert_eq!(minimal.weights, vec![(3, 1.5)]);
    }

    #[test]
    fn test_model_validation() {
        assert!(LinearModel::new(0.0, vec![(1, 1.0)]).validate().is_ok());
        assert!(LinearModel::new(f64::NAN, vec![]).validate().is_err());
        assert!(LinearModel::new(0.0, vec![(1, f64::INFINITY)]).validate().is_err());
        assert!(matches!(
            LinearModel::new(0.0, vec![(4, 1.0), (4, 2.0)]).validate(),
            Err(Error::InvalidConfig(ref msg)) if msg.contains("index 4")
        ));
    }
}
