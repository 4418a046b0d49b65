//! Build-time configuration
//!
//! `build.rs` validates dryer.toml and renders it as `DRYER_CONFIG`.

use dryer_core::config::{
    CadenceConfig, DryerConfig, RegulationConfig, TargetLimits, ThermistorConfig,
};

include!(concat!(env!("OUT_DIR"), "/dryer_config.rs"));
