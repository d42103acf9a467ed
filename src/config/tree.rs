//! Tree command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::impl_builder;

#[derive(Debug, Clone)]
pub struct TreeOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub format: GraphFormat,
    pub show_group_ids: bool,
    pub show_artifact_ids: bool,
    pub show_versions_on_nodes: bool,
    pub show_versions_on_edges: bool,
    pub show_scopes_on_edges: bool,
    pub merge_versions: bool,
    pub exclude_optional: bool,
}

impl TreeOptions {
    pub fn builder() -> TreeOptionsBuilder {
        TreeOptionsBuilder::new()
    }
}

impl_builder! {
    TreeOptionsBuilder => TreeOptions {
        with_input => input: PathBuf,
        with_output => output: Option<PathBuf>,
        with_format => format: GraphFormat,
        with_show_group_ids => show_group_ids: bool,
        with_show_artifact_ids => show_artifact_ids: bool,
        with_show_versions_on_nodes => show_versions_on_nodes: bool,
        with_show_versions_on_edges => show_versions_on_edges: bool,
        with_show_scopes_on_edges => show_scopes_on_edges: bool,
        with_merge_versions => merge_versions: bool,
        with_exclude_optional => exclude_optional: bool,
    }
}
