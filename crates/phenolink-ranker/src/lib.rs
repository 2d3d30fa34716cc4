//! phenolink-ranker — Phenotype-weighted protein interaction network scoring.
//!
//! Selects genes with high-quality phenotype matches, projects the PPI
//! interaction matrix onto them and resolves, per query gene, the best
//! network-supported neighbour.

pub mod matrix_provider;
pub mod phenotype_store;
pub mod selector;
pub mod projection;
pub mod scorer;
pub mod report;

pub use matrix_provider::{InteractionMatrix, InteractionMatrixProvider};
pub use phenotype_store::{PhenotypeMatchIndex, PhenotypeMatchStore};
pub use report::{render_matches, render_top_matches};
pub use scorer::{ProteinInteractionScorer, WALKER_SCORE_OFFSET};
