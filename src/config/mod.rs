//! Configuration module for timbrecheckr

mod features;

pub use features::FeatureConfig;
