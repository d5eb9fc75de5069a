/// CLI argument parsing and command handling.
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Local};
use clap::{Parser, Subcommand};

use crate::{color, graph, perfdata, rrd, updater};

#[derive(Parser)]
#[command(
    name = "vmaxgraph",
    version,
    about = "Vmaxgraph - RRDtool graph definitions for VMAX thin pool monitoring"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Graph {
        #[arg(long = "host")]
        host: String,
        #[arg(short = 'p', long = "perfdata")]
        perfdata: Option<String>,
        #[arg(short = 'f', long = "perfdata-file")]
        perfdata_file: Option<PathBuf>,
        #[arg(long = "rrd-base")]
        rrd_base: Option<PathBuf>,
        #[arg(long = "service", default_value = "check_vmax")]
        service: String,
        #[arg(long = "color")]
        color: Option<String>,
        #[arg(short = 's', long = "start")]
        start: Option<String>,
        #[arg(short = 'e', long = "end")]
        end: Option<String>,
    },
    Sources {
        #[arg(short = 'p', long = "perfdata")]
        perfdata: Option<String>,
        #[arg(short = 'f', long = "perfdata-file")]
        perfdata_file: Option<PathBuf>,
    },
    Update,
}

/// Execute a CLI command (graph, sources, or update).
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Graph {
            host,
            perfdata,
            perfdata_file,
            rrd_base,
            service,
            color,
            start,
            end,
        } => handle_graph(
            host,
            perfdata,
            perfdata_file,
            rrd_base,
            service,
            color,
            start,
            end,
        )?,
        Command::Sources {
            perfdata,
            perfdata_file,
        } => handle_sources(perfdata, perfdata_file)?,
        Command::Update => handle_update()?,
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_graph(
    host: String,
    perfdata: Option<String>,
    perfdata_file: Option<PathBuf>,
    rrd_base: Option<PathBuf>,
    service: String,
    color: Option<String>,
    start: Option<String>,
    end: Option<String>,
) -> Result<()> {
    let line = read_perfdata(perfdata, perfdata_file)?;
    let sources = perfdata::parse(&line)?;
    let base = rrd_base.unwrap_or_else(rrd::default_base_dir);
    let files = rrd::map_sources(&base, &host, &service, &sources);

    let line_color = match color {
        Some(c) => {
            if !color::is_valid_hex(&c) {
                bail!("invalid color '{c}', expected a hex code like #RRGGBB");
            }
            Some(c.trim_start_matches('#').to_string())
        }
        None => None,
    };

    let start_time = parse_optional_datetime(start)?;
    let end_time = parse_optional_datetime(end)?;
    if start_time.is_none() && end_time.is_some() {
        bail!("--end requires --start");
    }

    let options = graph::options_with_window(
        &host,
        start_time.map(|dt| dt.timestamp()),
        end_time.map(|dt| dt.timestamp()),
    );
    let mut rng = rand::rng();
    let definition = graph::definition(&sources, &files, line_color.as_deref(), &mut rng)?;

    println!("{options}");
    println!("{definition}");
    Ok(())
}

fn handle_sources(perfdata: Option<String>, perfdata_file: Option<PathBuf>) -> Result<()> {
    let line = read_perfdata(perfdata, perfdata_file)?;
    let sources = perfdata::parse(&line)?;
    for source in &sources {
        println!("{:<19}  {}", source.name, source.label);
    }
    Ok(())
}

fn handle_update() -> Result<()> {
    match updater::check_for_updates()? {
        Some(version) => {
            println!("Updating to version {version}...");
            updater::perform_update()?;
        }
        None => println!("Already up to date"),
    }
    Ok(())
}

fn read_perfdata(inline: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match (inline, file) {
        (Some(line), None) => Ok(line),
        (None, Some(path)) => {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("cannot read perfdata file {}", path.display()))?;
            contents
                .lines()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .map(str::to_string)
                .context("perfdata file is empty")
        }
        (Some(_), Some(_)) => bail!("pass either --perfdata or --perfdata-file, not both"),
        (None, None) => bail!("one of --perfdata or --perfdata-file is required"),
    }
}

fn parse_optional_datetime(value: Option<String>) -> Result<Option<DateTime<Local>>> {
    match value {
        Some(s) => {
            let dt = DateTime::parse_from_rfc3339(&s)?.with_timezone(&Local);
            Ok(Some(dt))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn read_perfdata_prefers_first_non_empty_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  pool_SILVER=45%;80;90  ").unwrap();
        writeln!(file, "pool_GOLD=12%").unwrap();

        let line = read_perfdata(None, Some(file.path().to_path_buf())).unwrap();
        assert_eq!(line, "pool_SILVER=45%;80;90");
    }

    #[test]
    fn read_perfdata_requires_exactly_one_input() {
        assert!(read_perfdata(None, None).is_err());
        assert!(
            read_perfdata(
                Some("a=1".to_string()),
                Some(PathBuf::from("/tmp/perfdata"))
            )
            .is_err()
        );
    }

    #[test]
    fn read_perfdata_rejects_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(read_perfdata(None, Some(file.path().to_path_buf())).is_err());
    }

    #[test]
    fn parse_optional_datetime_roundtrips_rfc3339() {
        let parsed = parse_optional_datetime(Some("2024-05-01T12:00:00+00:00".to_string()))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.timestamp(), 1714564800);
        assert!(parse_optional_datetime(None).unwrap().is_none());
        assert!(parse_optional_datetime(Some("yesterday".to_string())).is_err());
    }
}
