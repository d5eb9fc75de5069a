/// Nagios performance-data parsing.
use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::types::DataSource;

/// RRDtool limits data-source names to 19 characters.
const MAX_DS_NAME: usize = 19;

/// Parses a performance-data line (`'label'=value[uom];warn;crit;min;max`
/// tokens) into ordered data-source descriptors. The label becomes the
/// legend label as-is and, sanitized, the RRD data-source name.
pub fn parse(line: &str) -> Result<Vec<DataSource>> {
    let mut sources = Vec::new();
    let mut rest = line.trim();
    while !rest.is_empty() {
        let (label, after) = take_label(rest)?;
        if label.is_empty() {
            bail!("empty data source label in performance data");
        }
        let (field, remainder) = split_token(after);
        validate_value(label, field)?;
        let name = sanitize_name(label);
        debug!(label, name = %name, "parsed data source");
        sources.push(DataSource {
            name,
            label: label.to_string(),
        });
        rest = remainder;
    }
    if sources.is_empty() {
        bail!("no data sources found in performance data");
    }
    Ok(sources)
}

fn take_label(input: &str) -> Result<(&str, &str)> {
    if let Some(quoted) = input.strip_prefix('\'') {
        let end = quoted
            .find("'=")
            .context("unterminated quoted label in performance data")?;
        Ok((&quoted[..end], &quoted[end + 2..]))
    } else {
        let eq = input
            .find('=')
            .context("performance data token has no '=' separator")?;
        let label = &input[..eq];
        if label.chars().any(char::is_whitespace) {
            bail!("malformed performance data near '{label}'");
        }
        Ok((label, &input[eq + 1..]))
    }
}

fn split_token(input: &str) -> (&str, &str) {
    match input.find(char::is_whitespace) {
        Some(pos) => (&input[..pos], input[pos..].trim_start()),
        None => (input, ""),
    }
}

fn validate_value(label: &str, field: &str) -> Result<()> {
    let value = field.split(';').next().unwrap_or("");
    // "U" is the engine's marker for an unknown sample.
    if value.eq_ignore_ascii_case("u") {
        return Ok(());
    }
    let numeric = value.trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%');
    if numeric.is_empty() || numeric.parse::<f64>().is_err() {
        bail!("data source '{label}' has a non-numeric value '{value}'");
    }
    Ok(())
}

fn sanitize_name(label: &str) -> String {
    let mut name: String = label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    name.truncate(MAX_DS_NAME);
    name
}
