//! Tests for the graph factories through the library interface

use depviz::graph::{
    GraphBuilder, GraphFormat, GraphStyleConfigurer, ReactorGraphFactory, TreeGraphFactory,
};
use depviz::input::{DependencyTreeNode, ReactorModel};
use pretty_assertions::assert_eq;

fn tree_from_json(json: &str) -> DependencyTreeNode {
    serde_json::from_str(json).unwrap()
}

fn reactor_from_json(json: &str) -> ReactorModel {
    serde_json::from_str(json).unwrap()
}

fn builder_for(format: GraphFormat) -> GraphBuilder {
    GraphStyleConfigurer::new(format)
        .configure(GraphBuilder::new())
        .unwrap()
}

#[test]
fn test_tree_with_repeated_artifact_renders_once() {
    // lib-c is reachable through both lib-a and lib-b
    let tree = tree_from_json(
        r#"{
            "artifact": {"group_id": "com.example", "artifact_id": "app", "version": "1.0.0"},
            "dependencies": [
                {
                    "artifact": {"group_id": "com.example", "artifact_id": "lib-a", "version": "1.0.0"},
                    "dependencies": [
                        {"artifact": {"group_id": "com.example", "artifact_id": "lib-c", "version": "1.0.0"}}
                    ]
                },
                {
                    "artifact": {"group_id": "com.example", "artifact_id": "lib-b", "version": "1.0.0"},
                    "dependencies": [
                        {"artifact": {"group_id": "com.example", "artifact_id": "lib-c", "version": "1.0.0"}}
                    ]
                }
            ]
        }"#,
    );

    let output = TreeGraphFactory::new(builder_for(GraphFormat::Gml), true)
        .create_graph(&tree)
        .unwrap();

    assert_eq!(output.matches("node [").count(), 4);
    assert_eq!(output.matches("edge [").count(), 4);
}

#[test]
fn test_tree_text_rendering_shows_shared_subtree_twice() {
    let tree = tree_from_json(
        r#"{
            "artifact": {"group_id": "com.example", "artifact_id": "app", "version": "1.0.0"},
            "dependencies": [
                {
                    "artifact": {"group_id": "com.example", "artifact_id": "lib-a", "version": "1.0.0"},
                    "dependencies": [
                        {"artifact": {"group_id": "com.example", "artifact_id": "lib-c", "version": "1.0.0"}}
                    ]
                },
                {
                    "artifact": {"group_id": "com.example", "artifact_id": "lib-b", "version": "1.0.0"},
                    "dependencies": [
                        {"artifact": {"group_id": "com.example", "artifact_id": "lib-c", "version": "1.0.0"}}
                    ]
                }
            ]
        }"#,
    );

    let output = TreeGraphFactory::new(builder_for(GraphFormat::Text), true)
        .create_graph(&tree)
        .unwrap();

    // The graph holds lib-c once; the tree rendering expands it under each
    // parent
    assert_eq!(
        output,
        "app\n\
         +- lib-a\n\
         |  \\- lib-c\n\
         \\- lib-b\n\
         \x20\x20\x20\\- lib-c\n"
    );
}

#[test]
fn test_tree_merges_scopes_of_duplicate_dependency() {
    let tree = tree_from_json(
        r#"{
            "artifact": {"group_id": "com.example", "artifact_id": "app", "version": "1.0.0"},
            "dependencies": [
                {"artifact": {"group_id": "com.example", "artifact_id": "lib-a", "version": "1.0.0", "scope": "compile"}},
                {"artifact": {"group_id": "com.example", "artifact_id": "lib-a", "version": "1.0.0", "scope": "test"}}
            ]
        }"#,
    );

    let builder = GraphStyleConfigurer::new(GraphFormat::Dot)
        .show_scopes_on_edges(true)
        .configure(GraphBuilder::new())
        .unwrap();
    let output = TreeGraphFactory::new(builder, true)
        .create_graph(&tree)
        .unwrap();

    assert_eq!(output.matches("->").count(), 1);
    assert!(output.contains("[label=\"compile, test\"]"));
}

#[test]
fn test_reactor_full_scenario() {
    // Build order [A, B, C] with A -> {B, C} and B -> {C}
    let reactor = reactor_from_json(
        r#"{
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
        }"#,
    );

    let output = ReactorGraphFactory::new(builder_for(GraphFormat::Dot))
        .create_graph(&reactor)
        .unwrap();

    assert!(output.contains("\"com.example:module-a:1.0.0\" -> \"com.example:module-b:1.0.0\""));
    assert!(output.contains("\"com.example:module-a:1.0.0\" -> \"com.example:module-c:1.0.0\""));
    assert!(output.contains("\"com.example:module-b:1.0.0\" -> \"com.example:module-c:1.0.0\""));
    assert_eq!(output.matches("->").count(), 3);
}

#[test]
fn test_reactor_text_rendering_roots_at_upstream_module() {
    let reactor = reactor_from_json(
        r#"{
            "projects": [
                {
                    "artifact": {"group_id": "com.example", "artifact_id": "module-a", "version": "1.0.0"},
                    "downstream": ["module-b"]
                },
                {
                    "artifact": {"group_id": "com.example", "artifact_id": "module-b", "version": "1.0.0"}
                }
            ]
        }"#,
    );

    let output = ReactorGraphFactory::new(builder_for(GraphFormat::Text))
        .create_graph(&reactor)
        .unwrap();

    assert_eq!(output, "module-a\n\\- module-b\n");
}
