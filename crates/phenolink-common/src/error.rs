use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhenolinkError {
    #[error("Invalid interaction matrix: {0}")]
    InvalidMatrix(String),

    #[error("Invalid phenotype score for gene {gene_id}: {score}")]
    InvalidScore { gene_id: u32, score: f64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PhenolinkError>;
