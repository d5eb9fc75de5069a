/// RRDtool graph command assembly.
use anyhow::{Result, bail};
use rand::RngExt;

use crate::color;
use crate::types::{DataSource, RrdMap};

/// Builds the fixed options string for a host's thin pool graph.
pub fn options(hostname: &str) -> String {
    format!(
        "--vertical-label \"Thin pool utilization\" -l 0 --title \"Thin pool utilization for {hostname}\" --slope-mode -N -u 100"
    )
}

/// Options string with an optional graph window appended as epoch bounds.
pub fn options_with_window(hostname: &str, start: Option<i64>, end: Option<i64>) -> String {
    let mut opt = options(hostname);
    if let Some(start) = start {
        opt.push_str(&format!(" --start {start}"));
    }
    if let Some(end) = end {
        opt.push_str(&format!(" --end {end}"));
    }
    opt
}

/// Builds the DEF/LINE1/GPRINT directive string for the given data sources,
/// in sequence order. Each series is drawn with `line_color` when given,
/// otherwise with a fresh random color drawn from `rng`.
pub fn definition(
    sources: &[DataSource],
    rrd_files: &RrdMap,
    line_color: Option<&str>,
    rng: &mut impl RngExt,
) -> Result<String> {
    let mut def = String::new();
    for source in sources {
        let rrd_file = match rrd_files.get(&source.name) {
            Some(path) => path,
            None => bail!("no RRD file mapped for data source '{}'", source.name),
        };
        let color = match line_color {
            Some(fixed) => fixed.to_string(),
            None => color::random_hex(rng),
        };
        def.push_str(&format!(
            "DEF:var{name}={file}:{name}:AVERAGE ",
            name = source.name,
            file = rrd_file.display()
        ));
        def.push_str(&format!(
            "LINE1:var{name}#{color}:\"{label}      \" ",
            name = source.name,
            label = source.label
        ));
        def.push_str(&format!(
            "GPRINT:var{name}:LAST:\"last\\: %3.4lg%% \" ",
            name = source.name
        ));
        def.push_str(&format!(
            "GPRINT:var{name}:MAX:\"max\\: %3.4lg%% \" ",
            name = source.name
        ));
        // "\n " is RRDtool's legend line break, not a newline character.
        def.push_str(&format!(
            "GPRINT:var{name}:AVERAGE:\"average\\: %3.4lg%% \"\\n ",
            name = source.name
        ));
    }
    Ok(def)
}
