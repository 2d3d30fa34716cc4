//! phenolink-common — Shared types, errors, and configuration used across all Phenolink crates.

pub mod error;
pub mod entities;
pub mod prioritiser_config;

// Re-export commonly used types
pub use entities::{GeneId, GeneMatch, Organism, PhenotypeMatchModel};
pub use error::{PhenolinkError, Result};
pub use prioritiser_config::{HitSelection, NetworkScoringConfig, OutputConfig, OutputFormat, PrioritiserConfig};
