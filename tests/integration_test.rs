//! End-to-end tests driving the command executors against files on disk

use std::fs;
use std::path::PathBuf;

use depviz::cli::GraphFormat;
use depviz::common::ConfigBuilder;
use depviz::config::{ReactorOptions, TreeOptions};
use depviz::executors::CommandExecutor;
use depviz::executors::reactor::ReactorExecutor;
use depviz::executors::tree::TreeExecutor;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const TREE_JSON: &str = r#"{
    "artifact": {"group_id": "com.example", "artifact_id": "app", "version": "1.0.0"},
    "dependencies": [
        {
            "artifact": {"group_id": "com.example", "artifact_id": "lib-a", "version": "2.0.0", "scope": "compile"},
            "dependencies": [
                {"artifact": {"group_id": "com.example", "artifact_id": "lib-c", "version": "3.0.0", "scope": "compile"}}
            ]
        },
        {"artifact": {"group_id": "com.example", "artifact_id": "lib-b", "version": "1.5.0", "scope": "runtime", "optional": true}}
    ]
}"#;

const REACTOR_JSON: &str = r#"{
    "projects": [
        {
            "artifact": {"group_id": "com.example", "artifact_id": "module-a", "version": "1.0.0"},
            "downstream": ["module-b", "module-c"]
        },
        {
            "artifact": {"group_id": "com.example", "artifact_id": "module-b", "version": "1.0.0"},
            "downstream": ["module-c"]
        },
        {
            "artifact": {"group_id": "com.example", "artifact_id": "module-c", "version": "1.0.0"}
        }
    ]
}"#;

fn write_input(temp_dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn tree_options(input: PathBuf, output: PathBuf, format: GraphFormat) -> TreeOptions {
    TreeOptions::builder()
        .with_input(input)
        .with_output(Some(output))
        .with_format(format)
        .with_show_group_ids(false)
        .with_show_artifact_ids(true)
        .with_show_versions_on_nodes(false)
        .with_show_versions_on_edges(false)
        .with_show_scopes_on_edges(false)
        .with_merge_versions(false)
        .with_exclude_optional(false)
        .build()
        .unwrap()
}

#[test]
fn test_tree_command_writes_dot_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "deps.json", TREE_JSON);
    let output = temp_dir.path().join("graph.dot");

    TreeExecutor::execute(tree_options(input, output.clone(), GraphFormat::Dot)).unwrap();

    let rendered = fs::read_to_string(&output).unwrap();
    assert!(rendered.starts_with("digraph \"G\" {"));
    assert!(rendered.contains("\"com.example:app:1.0.0\" -> \"com.example:lib-a:2.0.0\""));
    assert!(rendered.contains("\"com.example:lib-a:2.0.0\" -> \"com.example:lib-c:3.0.0\""));
    assert!(rendered.contains("lib-b"));
}

#[test]
fn test_tree_command_excludes_optional() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "deps.json", TREE_JSON);
    let output = temp_dir.path().join("graph.dot");

    let config = TreeOptions::builder()
        .with_input(input)
        .with_output(Some(output.clone()))
        .with_format(GraphFormat::Dot)
        .with_show_group_ids(false)
        .with_show_artifact_ids(true)
        .with_show_versions_on_nodes(false)
        .with_show_versions_on_edges(false)
        .with_show_scopes_on_edges(false)
        .with_merge_versions(false)
        .with_exclude_optional(true)
        .build()
        .unwrap();
    TreeExecutor::execute(config).unwrap();

    let rendered = fs::read_to_string(&output).unwrap();
    assert!(!rendered.contains("lib-b"));
    assert!(rendered.contains("lib-a"));
}

#[test]
fn test_tree_command_text_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "deps.json", TREE_JSON);
    let output = temp_dir.path().join("graph.txt");

    TreeExecutor::execute(tree_options(input, output.clone(), GraphFormat::Text)).unwrap();

    let rendered = fs::read_to_string(&output).unwrap();
    assert_eq!(
        rendered,
        "app\n\
         +- lib-a\n\
         |  \\- lib-c\n\
         \\- lib-b\n"
    );
}

#[test]
fn test_tree_command_text_output_with_edge_decorations() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "deps.json", TREE_JSON);
    let output = temp_dir.path().join("graph.txt");

    let config = TreeOptions::builder()
        .with_input(input)
        .with_output(Some(output.clone()))
        .with_format(GraphFormat::Text)
        .with_show_group_ids(false)
        .with_show_artifact_ids(true)
        .with_show_versions_on_nodes(false)
        .with_show_versions_on_edges(false)
        .with_show_scopes_on_edges(true)
        .with_merge_versions(false)
        .with_exclude_optional(false)
        .build()
        .unwrap();
    TreeExecutor::execute(config).unwrap();

    let rendered = fs::read_to_string(&output).unwrap();
    assert_eq!(
        rendered,
        "app\n\
         +- lib-a (compile)\n\
         |  \\- lib-c (compile)\n\
         \\- lib-b (runtime optional)\n"
    );
}

#[test]
fn test_tree_command_missing_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("graph.dot");

    let result = TreeExecutor::execute(tree_options(
        temp_dir.path().join("missing.json"),
        output,
        GraphFormat::Dot,
    ));

    assert!(result.is_err());
}

#[test]
fn test_tree_command_malformed_json_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "deps.json", "{ not json");
    let output = temp_dir.path().join("graph.dot");

    let result = TreeExecutor::execute(tree_options(input, output, GraphFormat::Dot));

    assert!(result.is_err());
}

#[test]
fn test_reactor_command_writes_gml_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "reactor.json", REACTOR_JSON);
    let output = temp_dir.path().join("modules.gml");

    let config = ReactorOptions::builder()
        .with_input(input)
        .with_output(Some(output.clone()))
        .with_format(GraphFormat::Gml)
        .with_show_group_ids(false)
        .with_show_artifact_ids(true)
        .with_show_versions_on_nodes(false)
        .with_show_versions_on_edges(false)
        .with_show_scopes_on_edges(false)
        .with_merge_versions(false)
        .build()
        .unwrap();
    ReactorExecutor::execute(config).unwrap();

    let rendered = fs::read_to_string(&output).unwrap();
    assert!(rendered.starts_with("graph ["));
    assert_eq!(rendered.matches("node [").count(), 3);
    assert_eq!(rendered.matches("edge [").count(), 3);
}

#[test]
fn test_reactor_command_empty_reactor_is_a_no_op() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "reactor.json", r#"{"projects": []}"#);
    let output = temp_dir.path().join("modules.gml");

    let config = ReactorOptions::builder()
        .with_input(input)
        .with_output(Some(output.clone()))
        .with_format(GraphFormat::Gml)
        .with_show_group_ids(false)
        .with_show_artifact_ids(true)
        .with_show_versions_on_nodes(false)
        .with_show_versions_on_edges(false)
        .with_show_scopes_on_edges(false)
        .with_merge_versions(false)
        .build()
        .unwrap();
    ReactorExecutor::execute(config).unwrap();

    assert!(!output.exists());
}
