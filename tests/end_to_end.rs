use std::io::Write;

use rstest::rstest;
use spacing_cluster_analyzer::cluster::max_spacing_clustering;
use spacing_cluster_analyzer::data::load_edge_list;
use spacing_cluster_analyzer::ClusterError;
use tempfile::NamedTempFile;

fn input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp input");
    file.write_all(contents.as_bytes()).expect("write temp input");
    file
}

fn answer(contents: &str, k: usize) -> Result<u64, ClusterError> {
    let file = input_file(contents);
    let graph = load_edge_list(file.path())?;
    Ok(max_spacing_clustering(&graph, k)?.max_distance)
}

#[test]
fn chain_with_long_closing_edge() {
    assert_eq!(answer("4\n1 2 1\n2 3 2\n3 4 3\n1 4 10\n", 2).unwrap(), 2);
}

#[test]
fn triangles_joined_by_an_expensive_edge() {
    let input = "6\n\
                 1 2 3\n2 3 5\n1 3 4\n\
                 4 5 2\n5 6 7\n4 6 6\n\
                 3 4 50\n";
    let result = answer(input, 2).unwrap();
    assert_eq!(result, 6);
    assert!(result < 50);
}

#[rstest]
#[case::default_target(3, 1)]
#[case::two_clusters(2, 2)]
#[case::single_cluster(1, 10)]
#[case::every_vertex_alone(4, 0)]
fn target_cluster_count_is_configurable(#[case] k: usize, #[case] expected: u64) {
    let input = "4\n1 2 1\n2 3 2\n3 4 10\n4 1 20\n";
    assert_eq!(answer(input, k).unwrap(), expected);
}

#[test]
fn equal_costs_give_that_cost() {
    assert_eq!(answer("4\n1 2 7\n3 4 7\n2 3 7\n4 1 7\n", 2).unwrap(), 7);
}

#[test]
fn malformed_line_aborts() {
    let err = answer("3\n1 2 3\n2 three 4\n", 2).unwrap_err();
    assert!(matches!(err, ClusterError::Parse { line: 3, .. }));
    assert!(err.to_string().contains("line 3"));
}

#[test]
fn too_few_edges_for_target_is_an_error() {
    let err = answer("4\n1 2 1\n3 4 2\n", 1).unwrap_err();
    assert!(matches!(err, ClusterError::Exhausted { clusters: 2, target: 1 }));
}
