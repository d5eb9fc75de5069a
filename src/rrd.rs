/// RRD file layout of the graphing engine's perfdata tree.
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::types::{DataSource, RrdMap};

const SYSTEM_BASE: &str = "/var/lib/pnp4nagios/perfdata";

/// Returns the RRD base directory: the system perfdata tree when present,
/// otherwise a directory inside the user's local data dir.
/// Falls back to `./perfdata` when no data dir is found.
pub fn default_base_dir() -> PathBuf {
    let system = PathBuf::from(SYSTEM_BASE);
    if system.is_dir() {
        return system;
    }
    if let Some(data_dir) = dirs::data_local_dir() {
        data_dir.join("vmaxgraph").join("perfdata")
    } else {
        PathBuf::from("perfdata")
    }
}

/// Path of the RRD file holding one data source of a host's service.
pub fn source_path(base: &Path, host: &str, service: &str, ds: &str) -> PathBuf {
    base.join(host).join(format!("{service}_{ds}.rrd"))
}

/// Maps every descriptor to its RRD file under `base`.
pub fn map_sources(base: &Path, host: &str, service: &str, sources: &[DataSource]) -> RrdMap {
    let mut map = RrdMap::new();
    for source in sources {
        let path = source_path(base, host, service, &source.name);
        debug!(source = %source.name, path = %path.display(), "resolved RRD file");
        map.insert(source.name.clone(), path);
    }
    map
}
