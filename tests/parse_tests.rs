use dijkstra_sssp::graph::{parse_edge_json, parse_edge_list, Graph};
use dijkstra_sssp::{shortest_paths, DirectedGraph, Error};

#[test]
fn test_parse_edge_list() {
    let input = "\
# reference graph
1 2 2
1 3 4   # second edge of node 1
2 3 1

2 4 7
";
    let graph: DirectedGraph<i64, i64> = parse_edge_list(input).unwrap();
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.node_count(), 2);

    let targets: Vec<i64> = graph.outgoing_edges(1).iter().map(|e| e.to).collect();
    assert_eq!(targets, vec![2, 3]);
    assert_eq!(shortest_paths(&graph, 1)[&4], 9);
}

#[test]
fn test_parse_edge_list_rejects_bad_lines() {
    let err = parse_edge_list::<i64, i64>("1 2 3\n1 2\n").unwrap_err();
    assert!(matches!(err, Error::InvalidInput(ref msg) if msg.starts_with("line 2")));

    let err = parse_edge_list::<i64, u32>("1 2 -3\n").unwrap_err();
    assert!(matches!(err, Error::InvalidInput(ref msg) if msg.contains("weight")));

    let err = parse_edge_list::<u8, u32>("1 x 3\n").unwrap_err();
    assert!(matches!(err, Error::InvalidInput(ref msg) if msg.contains("destination")));
}

#[test]
fn test_parse_edge_json() {
    let input = r#"[
        {"from": 1, "to": 2, "weight": 2},
        {"from": 2, "to": 3, "weight": 1},
        {"from": 1, "to": 3, "weight": 4}
    ]"#;
    let graph: DirectedGraph<u32, u32> = parse_edge_json(input).unwrap();
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(shortest_paths(&graph, 1)[&3], 3);

    assert!(matches!(
        parse_edge_json::<u32, u32>("{\"from\": 1}"),
        Err(Error::InvalidInput(_))
    ));
}
