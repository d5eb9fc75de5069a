use std::collections::HashMap;
use std::path::PathBuf;

/// Maps a data-source name to the RRD file holding its samples.
pub type RrdMap = HashMap<String, PathBuf>;

///A single graph series: the RRD data-source name and its legend label
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DataSource {
    pub name: String,
    pub label: String,
}
