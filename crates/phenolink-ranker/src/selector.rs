//! High-quality phenotype match selection.
//!
//! Only genes whose best model beats the cutoff seed the interaction network.
//! The order genes are first seen in becomes the projection column order, and
//! the resolver's tie-break depends on it.

use std::collections::HashMap;

use phenolink_common::{GeneId, PhenolinkError, Result};
use tracing::{debug, info};

use crate::phenotype_store::PhenotypeMatchStore;

/// Insertion-ordered gene -> best phenotype score table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighQualityScores {
    gene_ids: Vec<GeneId>,
    scores: HashMap<GeneId, f64>,
}

impl HighQualityScores {
    /// Gene ids in column order.
    pub fn gene_ids(&self) -> &[GeneId] {
        &self.gene_ids
    }

    pub fn score(&self, gene: GeneId) -> Option<f64> {
        self.scores.get(&gene).copied()
    }

    /// (gene, score) pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (GeneId, f64)> + '_ {
        self.gene_ids.iter().map(move |g| (*g, self.scores[g]))
    }

    pub fn len(&self) -> usize {
        self.gene_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gene_ids.is_empty()
    }

    /// Keep `score` for `gene` if it beats the current best.
    fn offer(&mut self, gene: GeneId, score: f64) {
        match self.scores.get_mut(&gene) {
            Some(best) => {
                if score > *best {
                    *best = score;
                }
            }
            None => {
                self.gene_ids.push(gene);
                self.scores.insert(gene, score);
            }
        }
    }
}

/// Select the best phenotype score of every gene with a model scoring
/// strictly above `cutoff`.
///
/// Fails only if the store hands back a negative or non-finite score.
pub fn select_high_quality_scores(
    store: &dyn PhenotypeMatchStore,
    cutoff: f64,
) -> Result<HighQualityScores> {
    let mut selected = HighQualityScores::default();

    for gene in store.gene_ids() {
        for model in store.models_for_gene(gene) {
            if !model.score.is_finite() || model.score < 0.0 {
                return Err(PhenolinkError::InvalidScore {
                    gene_id: gene.value(),
                    score: model.score,
                });
            }
            if model.score > cutoff {
                debug!(
                    "Adding high quality score for {} score={}",
                    model.gene_symbol, model.score
                );
                selected.offer(gene, model.score);
            }
        }
    }

    info!(
        "Using {} high quality phenotypic gene match scores (score > {})",
        selected.len(),
        cutoff
    );
    Ok(selected)
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phenotype_store::PhenotypeMatchIndex;
    use phenolink_common::{Organism, PhenotypeMatchModel};
    use pretty_assertions::assert_eq;

    fn model(gene: u32, score: f64) -> PhenotypeMatchModel {
        PhenotypeMatchModel::new(gene, format!("GENE{gene}"), score, format!("OMIM:{gene}"), Organism::Human)
    }

    fn store(models: Vec<PhenotypeMatchModel>) -> PhenotypeMatchIndex {
        PhenotypeMatchIndex::from_models(models).unwrap()
    }

    #[test]
    fn test_cutoff_is_strict() {
        let s = store(vec![model(1, 0.5), model(2, 0.5 + f64::EPSILON)]);
        let hq = select_high_quality_scores(&s, 0.5).unwrap();
        assert_eq!(hq.gene_ids(), &[GeneId(2)]);
        assert_eq!(hq.score(GeneId(1)), None);
    }

    #[test]
    fn test_keeps_max_score_per_gene() {
        let s = store(vec![model(1, 0.3), model(1, 0.9), model(1, 0.1)]);
        let hq = select_high_quality_scores(&s, 0.2).unwrap();
        assert_eq!(hq.len(), 1);
        assert_eq!(hq.score(GeneId(1)), Some(0.9));
    }

    #[test]
    fn test_first_seen_order_is_column_order() {
        // Gene 4 only qualifies on its second model, it still keeps its first-seen slot.
        let s = store(vec![
            model(4, 0.1),
            model(9, 0.7),
            model(4, 0.8),
            model(2, 0.6),
        ]);
        let hq = select_high_quality_scores(&s, 0.5).unwrap();
        assert_eq!(hq.gene_ids(), &[GeneId(4), GeneId(9), GeneId(2)]);
        let pairs: Vec<(GeneId, f64)> = hq.iter().collect();
        assert_eq!(pairs, vec![(GeneId(4), 0.8), (GeneId(9), 0.7), (GeneId(2), 0.6)]);
    }

    #[test]
    fn test_nothing_passes() {
        let s = store(vec![model(1, 0.1), model(2, 0.2)]);
        let hq = select_high_quality_scores(&s, 0.9).unwrap();
        assert!(hq.is_empty());
    }

    #[test]
    fn test_empty_store() {
        let hq = select_high_quality_scores(&PhenotypeMatchIndex::new(), 0.0).unwrap();
        assert!(hq.is_empty());
    }
}
