//! Shared fixtures for Phenolink tests.
//!
//! Fixtures are plain data (gene ids, `ndarray` matrices, phenotype models) so
//! any crate can wrap them in its own providers.

use ndarray::{array, Array2};
use phenolink_common::{GeneId, Organism, PhenotypeMatchModel};
use tracing_subscriber::EnvFilter;

pub use pretty_assertions::{assert_eq, assert_ne};

/// Install a test subscriber once. Honours RUST_LOG, defaults to warnings.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

pub fn gene_ids(ids: &[u32]) -> Vec<GeneId> {
    ids.iter().copied().map(GeneId).collect()
}

/// Symmetric network over genes 1, 2, 3 (row order 1, 2, 3).
///
/// column(2) = [0.1, 0.0, 0.4], column(3) = [0.3, 0.4, 0.0].
pub fn three_gene_network() -> (Vec<GeneId>, Array2<f64>) {
    (
        gene_ids(&[1, 2, 3]),
        array![
            [0.0, 0.1, 0.3],
            [0.1, 0.0, 0.4],
            [0.3, 0.4, 0.0]
        ],
    )
}

/// Small FGFR-family network: 2260 FGFR1, 2263 FGFR2, 2261 FGFR3, 2264 FGFR4,
/// 5781 PTPN11 (row order as listed).
pub fn fgfr_network() -> (Vec<GeneId>, Array2<f64>) {
    (
        gene_ids(&[2260, 2263, 2261, 2264, 5781]),
        array![
            [0.00, 0.30, 0.25, 0.10, 0.05],
            [0.30, 0.00, 0.30, 0.15, 0.02],
            [0.25, 0.30, 0.00, 0.20, 0.00],
            [0.10, 0.15, 0.20, 0.00, 0.00],
            [0.05, 0.02, 0.00, 0.00, 0.00]
        ],
    )
}

/// One model per `(gene, symbol, score)` in order, with a disease id derived from the gene.
pub fn phenotype_models(entries: &[(u32, &str, f64)]) -> Vec<PhenotypeMatchModel> {
    entries
        .iter()
        .map(|&(gene, symbol, score)| {
            PhenotypeMatchModel::new(gene, symbol, score, format!("OMIM:{gene}"), Organism::Human)
        })
        .collect()
}
