//! Input documents
//!
//! The surrounding build tooling hands depviz a JSON document: either a
//! resolved dependency tree rooted at one project, or a reactor listing the
//! modules of a multi-module build in build order together with their
//! downstream modules. This module owns the serde models and file loading;
//! it performs no graph work.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::ConfigBuilder;
use crate::error::DepvizError;
use crate::graph::{DependencyNode, Provenance};

/// One artifact as supplied by the build tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactRecord {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub optional: bool,
}

impl ArtifactRecord {
    pub fn to_node(&self, provenance: Provenance) -> Result<DependencyNode, DepvizError> {
        DependencyNode::builder()
            .with_group_id(&self.group_id)
            .with_artifact_id(&self.artifact_id)
            .with_version(&self.version)
            .with_classifier(self.classifier.clone())
            .with_scope(self.scope.clone())
            .with_optional(self.optional)
            .with_provenance(provenance)
            .build()
    }
}

/// A resolved dependency tree rooted at one project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyTreeNode {
    pub artifact: ArtifactRecord,
    #[serde(default)]
    pub dependencies: Vec<DependencyTreeNode>,
}

/// A module of a multi-module build, with references (by artifact id) to the
/// modules directly downstream of it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactorProject {
    pub artifact: ArtifactRecord,
    #[serde(default)]
    pub downstream: Vec<String>,
}

/// The whole reactor, projects listed in build order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactorModel {
    pub projects: Vec<ReactorProject>,
}

pub fn load_dependency_tree(path: &Path) -> Result<DependencyTreeNode, DepvizError> {
    parse(path)
}

pub fn load_reactor(path: &Path) -> Result<ReactorModel, DepvizError> {
    parse(path)
}

fn parse<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, DepvizError> {
    let content = fs::read_to_string(path).map_err(|source| DepvizError::FileReadError {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| DepvizError::JsonParseError {
        file: path.display().to_string(),
        source,
    })
}
