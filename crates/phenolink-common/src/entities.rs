//! Core entity types shared by the phenotype stores, the interaction
//! network scorer and the result renderers.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Gene identifier
// ---------------------------------------------------------------------------

/// Opaque integer gene identifier (Entrez-style), stable across the
/// interaction matrix and the phenotype match store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneId(pub u32);

impl GeneId {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for GeneId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for GeneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Phenotype match model
// ---------------------------------------------------------------------------

/// Organism the matched gene model was curated in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Organism {
    Human,
    Mouse,
    Fish,
}

/// One phenotype-match record: how well a gene's known disease or
/// model-organism phenotypes match the patient profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhenotypeMatchModel {
    pub gene_id: GeneId,
    pub gene_symbol: String,
    /// Similarity score, >= 0.0
    pub score: f64,
    /// Disease or model identifier this match was computed against, e.g. OMIM:101600 or MGI:95523
    pub model_id: String,
    pub organism: Organism,
}

impl PhenotypeMatchModel {
    pub fn new(
        gene_id: impl Into<GeneId>,
        gene_symbol: impl Into<String>,
        score: f64,
        model_id: impl Into<String>,
        organism: Organism,
    ) -> Self {
        Self {
            gene_id: gene_id.into(),
            gene_symbol: gene_symbol.into(),
            score,
            model_id: model_id.into(),
            organism,
        }
    }
}

// ---------------------------------------------------------------------------
// Network match result
// ---------------------------------------------------------------------------

/// Best network-supported match for a query gene.
///
/// `GeneMatch::NO_HIT` is the only failure value callers need to handle:
/// unknown genes, missing high-quality evidence and self-only evidence all
/// resolve to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneMatch {
    pub query_gene_id: Option<GeneId>,
    pub match_gene_id: Option<GeneId>,
    pub score: f64,
    pub best_match_models: Vec<PhenotypeMatchModel>,
}

impl GeneMatch {
    pub const NO_HIT: GeneMatch = GeneMatch {
        query_gene_id: None,
        match_gene_id: None,
        score: 0.0,
        best_match_models: Vec::new(),
    };

    pub fn is_no_hit(&self) -> bool {
        self.match_gene_id.is_none()
    }

    /// Highest scoring model of the matched gene, first one wins on ties.
    pub fn best_model(&self) -> Option<&PhenotypeMatchModel> {
        self.best_match_models
            .iter()
            .fold(None, |best: Option<&PhenotypeMatchModel>, m| match best {
                Some(b) if b.score >= m.score => Some(b),
                _ => Some(m),
            })
    }
}

impl Default for GeneMatch {
    fn default() -> Self {
        Self::NO_HIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_hit_sentinel() {
        let m = GeneMatch::default();
        assert!(m.is_no_hit());
        assert_eq!(m, GeneMatch::NO_HIT);
        assert_eq!(m.score, 0.0);
        assert!(m.best_model().is_none());
    }

    #[test]
    fn test_best_model_prefers_first_on_ties() {
        let m = GeneMatch {
            query_gene_id: Some(GeneId(1)),
            match_gene_id: Some(GeneId(2)),
            score: 0.9,
            best_match_models: vec![
                PhenotypeMatchModel::new(2, "FGFR2", 0.7, "OMIM:101600", Organism::Human),
                PhenotypeMatchModel::new(2, "FGFR2", 0.7, "MGI:95523", Organism::Mouse),
                PhenotypeMatchModel::new(2, "FGFR2", 0.2, "ZFIN:ZDB-GENE-1", Organism::Fish),
            ],
        };
        assert_eq!(m.best_model().unwrap().model_id, "OMIM:101600");
    }

    #[test]
    fn test_organism_labels() {
        assert_eq!(serde_json::to_string(&Organism::Mouse).unwrap(), "\"mouse\"");
    }

    #[test]
    fn test_gene_id_serialises_as_integer() {
        let json = serde_json::to_string(&GeneId(2263)).unwrap();
        assert_eq!(json, "2263");
    }
}
