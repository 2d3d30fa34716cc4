//! Rendering of network match results.
//!
//! The pipeline picks an `OutputFormat` from configuration and renders the
//! match list to a string; writing the report is left to the caller.

use phenolink_common::{GeneMatch, OutputConfig, OutputFormat, PhenolinkError, Result};

const TSV_HEADER: [&str; 6] = [
    "QUERY_GENE_ID",
    "MATCH_GENE_ID",
    "MATCH_GENE_SYMBOL",
    "WALKER_SCORE",
    "BEST_MODEL_ID",
    "BEST_MODEL_SCORE",
];

/// Render matches in the order given.
///
/// A `GeneMatch::NO_HIT` carries no query id, so in TSV it renders as a row
/// of empty cells with score 0.
pub fn render_matches(format: OutputFormat, matches: &[GeneMatch]) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(matches)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(matches)?),
        OutputFormat::Tsv  => render_tsv(matches),
    }
}

/// Drop NO_HIT results, sort by descending walker score (stable), keep
/// `top_n` and render in the configured format.
pub fn render_top_matches(matches: &[GeneMatch], output: &OutputConfig) -> Result<String> {
    let format = output.output_format()?;
    let mut ranked: Vec<GeneMatch> = matches.iter().filter(|m| !m.is_no_hit()).cloned().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(output.top_n);
    render_matches(format, &ranked)
}

fn render_tsv(matches: &[GeneMatch]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(Vec::new());
    writer.write_record(TSV_HEADER)?;

    for m in matches {
        let best = m.best_model();
        writer.write_record([
            m.query_gene_id.map(|g| g.to_string()).unwrap_or_default(),
            m.match_gene_id.map(|g| g.to_string()).unwrap_or_default(),
            best.map(|b| b.gene_symbol.clone()).unwrap_or_default(),
            format!("{:.4}", m.score),
            best.map(|b| b.model_id.clone()).unwrap_or_default(),
            best.map(|b| format!("{:.4}", b.score)).unwrap_or_default(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PhenolinkError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| PhenolinkError::Other(e.into()))
}

// ── Tests ───────────────────────────────────────────────────────────────────
