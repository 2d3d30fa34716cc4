//! Trait for protein-protein interaction matrix access.
//!
//! Provides an abstraction over the precomputed random-walk interaction
//! matrix, so the network scorer can read gene columns without knowing how
//! the matrix was loaded or where it lives.

use std::collections::HashMap;

use ndarray::{Array2, ArrayView1};
use phenolink_common::{GeneId, PhenolinkError, Result};

/// Trait for reading a symmetric gene-gene interaction-strength matrix.
///
/// Implementations must keep a consistent gene <-> index bijection for
/// their whole lifetime. The scorer only ever reads columns.
pub trait InteractionMatrixProvider: Send + Sync {
    /// Check if a gene has a row/column in the matrix.
    fn contains_gene(&self, gene: GeneId) -> bool;

    /// Row index of a gene, None if the gene is not in the matrix.
    fn row_index_for_gene(&self, gene: GeneId) -> Option<usize>;

    /// Interaction column of a gene, None if the gene is not in the matrix.
    fn column_for_gene(&self, gene: GeneId) -> Option<ArrayView1<'_, f64>>;

    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;
}

// ── In-memory matrix ─────────────────────────────────────────────────────────

/// Dense in-memory interaction matrix.
#[derive(Debug, Clone)]
pub struct InteractionMatrix {
    matrix: Array2<f64>,
    gene_index: HashMap<GeneId, usize>,
}

impl InteractionMatrix {
    /// Build a matrix from its gene ordering and square values.
    ///
    /// `genes[i]` names row i and column i. Fails on a non-square matrix,
    /// a gene list that does not match the dimension, duplicate genes or
    /// non-finite cells.
    pub fn new(genes: Vec<GeneId>, matrix: Array2<f64>) -> Result<Self> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(PhenolinkError::InvalidMatrix(format!(
                "matrix must be square, got {} rows * {} columns",
                rows, cols
            )));
        }
        if genes.len() != rows {
            return Err(PhenolinkError::InvalidMatrix(format!(
                "{} gene ids for a {} * {} matrix",
                genes.len(),
                rows,
                cols
            )));
        }
        if let Some(((r, c), v)) = matrix.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(PhenolinkError::InvalidMatrix(format!(
                "non-finite value {} at ({}, {})",
                v, r, c
            )));
        }

        let mut gene_index = HashMap::with_capacity(genes.len());
        for (i, gene) in genes.into_iter().enumerate() {
            if gene_index.insert(gene, i).is_some() {
                return Err(PhenolinkError::InvalidMatrix(format!(
                    "duplicate gene id {}",
                    gene
                )));
            }
        }

        Ok(Self { matrix, gene_index })
    }

    /// Build from row vectors, e.g. parsed from a delimited file upstream.
    pub fn from_rows(genes: Vec<GeneId>, rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if let Some(bad) = rows.iter().find(|r| r.len() != n) {
            return Err(PhenolinkError::InvalidMatrix(format!(
                "matrix must be square, got a row of length {} in a {}-row matrix",
                bad.len(),
                n
            )));
        }
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let matrix = Array2::from_shape_vec((n, n), flat)
            .map_err(|e| PhenolinkError::InvalidMatrix(e.to_string()))?;
        Self::new(genes, matrix)
    }

    /// Matrix with no genes. Every lookup misses.
    pub fn empty() -> Self {
        Self {
            matrix: Array2::zeros((0, 0)),
            gene_index: HashMap::new(),
        }
    }

    pub fn gene_count(&self) -> usize {
        self.gene_index.len()
    }
}

impl Default for InteractionMatrix {
    fn default() -> Self {
        Self::empty()
    }
}

impl InteractionMatrixProvider for InteractionMatrix {
    fn contains_gene(&self, gene: GeneId) -> bool {
        self.gene_index.contains_key(&gene)
    }

    fn row_index_for_gene(&self, gene: GeneId) -> Option<usize> {
        self.gene_index.get(&gene).copied()
    }

    fn column_for_gene(&self, gene: GeneId) -> Option<ArrayView1<'_, f64>> {
        self.row_index_for_gene(gene).map(|i| self.matrix.column(i))
    }

    fn row_count(&self) -> usize {
        self.matrix.nrows()
    }

    fn column_count(&self) -> usize {
        self.matrix.ncols()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
