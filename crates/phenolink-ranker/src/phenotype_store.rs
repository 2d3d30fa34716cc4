//! Trait for per-gene phenotype match data access.

use std::collections::HashMap;

use phenolink_common::{GeneId, PhenolinkError, PhenotypeMatchModel, Result};

/// Trait for reading the phenotype-match models computed per gene.
pub trait PhenotypeMatchStore: Send + Sync {
    /// Models for a gene in insertion order. Empty if the gene has none.
    fn models_for_gene(&self, gene: GeneId) -> &[PhenotypeMatchModel];

    /// Every gene with at least one model, in first-insertion order.
    ///
    /// High-quality column order follows this, so implementations must
    /// return the same order on every call.
    fn gene_ids(&self) -> Vec<GeneId>;
}

// ── In-memory store ─────────────────────────────────────────────────────────

/// Insertion-ordered gene -> models index.
#[derive(Debug, Clone, Default)]
pub struct PhenotypeMatchIndex {
    order: Vec<GeneId>,
    models: HashMap<GeneId, Vec<PhenotypeMatchModel>>,
}

impl PhenotypeMatchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from models in order. Fails on the first invalid score.
    pub fn from_models(models: impl IntoIterator<Item = PhenotypeMatchModel>) -> Result<Self> {
        let mut index = Self::new();
        for model in models {
            index.insert(model)?;
        }
        Ok(index)
    }

    /// Append a model under its own gene id.
    pub fn insert(&mut self, model: PhenotypeMatchModel) -> Result<()> {
        if !model.score.is_finite() || model.score < 0.0 {
            return Err(PhenolinkError::InvalidScore {
                gene_id: model.gene_id.value(),
                score: model.score,
            });
        }
        let gene = model.gene_id;
        let entry = self.models.entry(gene).or_default();
        if entry.is_empty() {
            self.order.push(gene);
        }
        entry.push(model);
        Ok(())
    }

    /// Builder-style insert, for fixtures.
    pub fn with(mut self, model: PhenotypeMatchModel) -> Result<Self> {
        self.insert(model)?;
        Ok(self)
    }

    pub fn gene_count(&self) -> usize {
        self.order.len()
    }

    pub fn model_count(&self) -> usize {
        self.models.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl PhenotypeMatchStore for PhenotypeMatchIndex {
    fn models_for_gene(&self, gene: GeneId) -> &[PhenotypeMatchModel] {
        self.models.get(&gene).map(Vec::as_slice).unwrap_or(&[])
    }

    fn gene_ids(&self) -> Vec<GeneId> {
        self.order.clone()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
