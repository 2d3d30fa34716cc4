//! Phenotype-weighted protein interaction network scorer.
//!
//! Genes without a strong direct phenotype match can still rank well when
//! they sit close, in the PPI network, to genes that do have one. The scorer
//! freezes the high-quality selection and the weighted projection at build
//! time; queries only read that state.

use std::fmt;
use std::sync::Arc;

use phenolink_common::{GeneId, GeneMatch, HitSelection, NetworkScoringConfig, Result};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::matrix_provider::{InteractionMatrix, InteractionMatrixProvider};
use crate::phenotype_store::{PhenotypeMatchIndex, PhenotypeMatchStore};
use crate::projection::WeightedProjection;
use crate::selector::{select_high_quality_scores, HighQualityScores};

/// Calibration offset letting walker scores compete with weak direct phenotype scores.
pub const WALKER_SCORE_OFFSET: f64 = 0.5;

pub struct ProteinInteractionScorer {
    matrix: Arc<dyn InteractionMatrixProvider>,
    store: Arc<dyn PhenotypeMatchStore>,
    high_quality: HighQualityScores,
    projection: WeightedProjection,
    walker_score_offset: f64,
    hit_selection: HitSelection,
}

impl ProteinInteractionScorer {
    /// Select the high-quality genes and build the weighted projection.
    ///
    /// Fails on a non-finite cutoff/offset or on a negative or non-finite
    /// model score. A matrix or store without usable data is not an error;
    /// every query on it resolves to `GeneMatch::NO_HIT`.
    pub fn build(
        matrix: Arc<dyn InteractionMatrixProvider>,
        store: Arc<dyn PhenotypeMatchStore>,
        config: &NetworkScoringConfig,
    ) -> Result<Self> {
        config.validate()?;

        let high_quality = select_high_quality_scores(store.as_ref(), config.high_quality_cutoff)?;
        let projection = WeightedProjection::build(matrix.as_ref(), &high_quality);

        info!(
            "Protein interaction scorer ready: {} high quality genes, hit selection {:?}",
            high_quality.len(),
            config.hit_selection
        );

        Ok(Self {
            matrix,
            store,
            high_quality,
            projection,
            walker_score_offset: config.walker_score_offset,
            hit_selection: config.hit_selection,
        })
    }

    /// `build` with the given cutoff and default offset and hit selection.
    pub fn with_cutoff(
        matrix: Arc<dyn InteractionMatrixProvider>,
        store: Arc<dyn PhenotypeMatchStore>,
        high_quality_cutoff: f64,
    ) -> Result<Self> {
        Self::build(matrix, store, &NetworkScoringConfig::with_cutoff(high_quality_cutoff))
    }

    /// Scorer with no interaction data. Every query returns `GeneMatch::NO_HIT`.
    pub fn empty() -> Self {
        Self {
            matrix: Arc::new(InteractionMatrix::empty()),
            store: Arc::new(PhenotypeMatchIndex::new()),
            high_quality: HighQualityScores::default(),
            projection: WeightedProjection::empty(),
            walker_score_offset: WALKER_SCORE_OFFSET,
            hit_selection: HitSelection::default(),
        }
    }

    /// Best network-supported high-quality neighbour of `gene`.
    pub fn closest_network_match(&self, gene: GeneId) -> GeneMatch {
        if !self.matrix.contains_gene(gene) || self.high_quality.is_empty() {
            return GeneMatch::NO_HIT;
        }
        let Some(row) = self.matrix.row_index_for_gene(gene) else {
            return GeneMatch::NO_HIT;
        };
        if row >= self.projection.nrows() {
            debug!("Row {} for gene {} is outside the weighted matrix", row, gene);
            return GeneMatch::NO_HIT;
        }

        let best = match self.hit_selection {
            HitSelection::LastMaximum => self.last_maximum_index(row, gene),
            HitSelection::StrictImprovement => self.strict_improvement_index(row, gene),
        };
        let Some(column) = best else {
            debug!("No high quality network neighbour for gene {}", gene);
            return GeneMatch::NO_HIT;
        };

        let cell = self.projection.get(row, column).unwrap_or(0.0);
        let walker_score = self.walker_score_offset + cell;

        let closest_gene = self.high_quality.gene_ids()[column];
        let models = self.store.models_for_gene(closest_gene).to_vec();

        GeneMatch {
            query_gene_id: Some(gene),
            match_gene_id: Some(closest_gene),
            score: walker_score,
            best_match_models: models,
        }
    }

    /// Closest matches for many genes, in input order.
    pub fn closest_network_matches(&self, genes: &[GeneId]) -> Vec<GeneMatch> {
        genes
            .par_iter()
            .map(|&gene| self.closest_network_match(gene))
            .collect()
    }

    // Exact `==` against the running maximum: the last column reaching the
    // maximum wins, and an all-zero row resolves to the last scanned column.
    fn last_maximum_index(&self, row: usize, query: GeneId) -> Option<usize> {
        let cells = self.projection.row(row);
        let mut best_index = None;
        let mut best_score = 0.0_f64;
        for (i, (&candidate, &cell)) in self.high_quality.gene_ids().iter().zip(cells.iter()).enumerate() {
            if candidate == query {
                continue;
            }
            best_score = best_score.max(cell);
            if cell == best_score {
                best_index = Some(i);
            }
        }
        best_index
    }

    // Only cells above zero count, so high-quality genes missing from the
    // matrix (all-zero columns) can never win.
    fn strict_improvement_index(&self, row: usize, query: GeneId) -> Option<usize> {
        let cells = self.projection.row(row);
        let mut best_index = None;
        let mut best_score = 0.0_f64;
        for (i, (&candidate, &cell)) in self.high_quality.gene_ids().iter().zip(cells.iter()).enumerate() {
            if candidate == query {
                continue;
            }
            if cell > best_score {
                best_score = cell;
                best_index = Some(i);
            }
        }
        best_index
    }

    /// High-quality genes in projection column order.
    pub fn high_quality_gene_ids(&self) -> &[GeneId] {
        self.high_quality.gene_ids()
    }

    pub fn high_quality_score(&self, gene: GeneId) -> Option<f64> {
        self.high_quality.score(gene)
    }

    pub fn weighted_projection(&self) -> &WeightedProjection {
        &self.projection
    }

    pub fn hit_selection(&self) -> HitSelection {
        self.hit_selection
    }
}

impl Default for ProteinInteractionScorer {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for ProteinInteractionScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProteinInteractionScorer")
            .field("matrix_rows", &self.matrix.row_count())
            .field("high_quality_genes", &self.high_quality.len())
            .field("walker_score_offset", &self.walker_score_offset)
            .field("hit_selection", &self.hit_selection)
            .finish()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
