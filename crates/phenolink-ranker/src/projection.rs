//! Phenotype-weighted projection of the interaction matrix.
//!
//! The source matrix is square and symmetric. The projection keeps all of its
//! rows but only the high-quality gene columns, each scaled by that gene's
//! best phenotype score.

use ndarray::{Array2, ArrayView1, ArrayView2};
use tracing::{debug, info};

use crate::matrix_provider::InteractionMatrixProvider;
use crate::selector::HighQualityScores;

/// Rows = interaction matrix rows, columns = high-quality genes in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedProjection {
    matrix: Array2<f64>,
}

impl WeightedProjection {
    /// Build the projection once. Genes missing from the matrix keep an
    /// all-zero column.
    pub fn build(matrix: &dyn InteractionMatrixProvider, high_quality: &HighQualityScores) -> Self {
        info!("Making weighted-score protein-protein interaction sub-matrix from high quality phenotypic gene matches...");
        info!(
            "Source interaction matrix ({} rows * {} columns)",
            matrix.row_count(),
            matrix.column_count()
        );

        let rows = matrix.row_count();
        let mut projected = Array2::<f64>::zeros((rows, high_quality.len()));

        for (c, (gene, score)) in high_quality.iter().enumerate() {
            match matrix.column_for_gene(gene) {
                Some(column) if column.len() == rows => {
                    projected.column_mut(c).assign(&column.mapv(|v| v * score));
                }
                Some(column) => {
                    debug!(
                        "Column for gene {} has {} values, expected {}; leaving it empty",
                        gene,
                        column.len(),
                        rows
                    );
                }
                None => debug!("Gene {} not in interaction matrix; leaving column {} empty", gene, c),
            }
        }

        info!(
            "Made high quality interaction matrix ({} rows * {} columns)",
            projected.nrows(),
            projected.ncols()
        );
        Self { matrix: projected }
    }

    pub fn empty() -> Self {
        Self {
            matrix: Array2::zeros((0, 0)),
        }
    }

    /// Weighted cell, None outside the matrix.
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.matrix.get((row, column)).copied()
    }

    /// One query row across every high-quality column.
    pub fn row(&self, row: usize) -> ArrayView1<'_, f64> {
        self.matrix.row(row)
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.matrix.view()
    }

    pub fn nrows(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.matrix.ncols()
    }
}

impl Default for WeightedProjection {
    fn default() -> Self {
        Self::empty()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix_provider::InteractionMatrix;
    use crate::phenotype_store::PhenotypeMatchIndex;
    use crate::selector::select_high_quality_scores;
    use ndarray::array;
    use phenolink_common::{GeneId, Organism, PhenotypeMatchModel};
    use pretty_assertions::assert_eq;

    fn matrix() -> InteractionMatrix {
        InteractionMatrix::new(
            vec![GeneId(1), GeneId(2), GeneId(3)],
            array![[1.0, 0.1, 0.2], [0.1, 1.0, 0.4], [0.2, 0.4, 1.0]],
        )
        .unwrap()
    }

    fn high_quality(models: &[(u32, f64)]) -> HighQualityScores {
        let store = PhenotypeMatchIndex::from_models(models.iter().map(|&(g, s)| {
            PhenotypeMatchModel::new(g, format!("GENE{g}"), s, "OMIM:1", Organism::Human)
        }))
        .unwrap();
        select_high_quality_scores(&store, 0.5).unwrap()
    }

    #[test]
    fn test_columns_scaled_by_score() {
        let hq = high_quality(&[(3, 0.8), (1, 0.6)]);
        let p = WeightedProjection::build(&matrix(), &hq);

        assert_eq!((p.nrows(), p.ncols()), (3, 2));
        assert_eq!(p.view().column(0).to_vec(), vec![0.2 * 0.8, 0.4 * 0.8, 1.0 * 0.8]);
        assert_eq!(p.view().column(1).to_vec(), vec![1.0 * 0.6, 0.1 * 0.6, 0.2 * 0.6]);
    }

    #[test]
    fn test_gene_absent_from_matrix_gets_zero_column() {
        let hq = high_quality(&[(99, 0.9), (2, 0.7)]);
        let p = WeightedProjection::build(&matrix(), &hq);

        assert_eq!(p.view().column(0).to_vec(), vec![0.0, 0.0, 0.0]);
        assert_eq!(p.get(2, 1), Some(0.4 * 0.7));
    }

    #[test]
    fn test_no_high_quality_genes() {
        let p = WeightedProjection::build(&matrix(), &HighQualityScores::default());
        assert_eq!((p.nrows(), p.ncols()), (3, 0));
        assert_eq!(p.get(0, 0), None);
    }

    #[test]
    fn test_empty_matrix() {
        let hq = high_quality(&[(1, 0.9)]);
        let p = WeightedProjection::build(&InteractionMatrix::empty(), &hq);
        assert_eq!((p.nrows(), p.ncols()), (0, 1));
    }
}
