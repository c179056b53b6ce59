use waypoint_astar::{dataset, prelude::*, table};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn a_to_f() {
    init();
    for config in [GraphConfig::DECLARED, GraphConfig::MUTUAL] {
        let graph = Graph::new(dataset::sample_points(), config);
        let path = graph.find_path("A", "F").unwrap();

        assert_eq!(path, vec!["A", "B", "D", "F"]);
        assert!(close(
            path.cost(),
            2f64.sqrt() + 52f64.sqrt() + 26f64.sqrt()
        ));
        assert!(close(path.cost(), graph.path_cost(&path).unwrap()));
        // the runner-up is only slightly more expensive
        let runner_up = graph.path_cost(&["A", "C", "D", "F"]).unwrap();
        assert!(path.cost() < runner_up);
    }
}

#[test]
fn edge_weights_are_euclidean() {
    init();
    let graph = Graph::new(dataset::sample_points(), GraphConfig::default());
    for point in graph.points() {
        for (to, cost) in graph.edges(&point.name).unwrap() {
            let other = graph.point(to).unwrap();
            let expected = ((point.x - other.x).powi(2) + (point.y - other.y).powi(2)).sqrt();

            assert!(close(cost, expected));
            assert!(cost >= 0.0);
        }
    }
}

#[test]
fn both_policies_agree_on_sample() {
    init();
    let declared = Graph::new(dataset::sample_points(), GraphConfig::DECLARED);
    let mutual = Graph::new(dataset::sample_points(), GraphConfig::MUTUAL);

    assert_eq!(
        table::adjacency_rows(&declared),
        table::adjacency_rows(&mutual)
    );
}

#[test]
fn one_sided_declaration() {
    init();
    let points = vec![
        Point::new("A", 0.0, 0.0, ["B"]),
        Point::new("B", 0.0, 3.0, ["C"]),
        Point::new("C", 4.0, 3.0, Vec::<String>::new()),
    ];

    let declared = Graph::new(points.clone(), GraphConfig::DECLARED);
    let path = declared.find_path("A", "C").unwrap();
    assert_eq!(path, vec!["A", "B", "C"]);
    assert_eq!(path.cost(), 7.0);
    assert!(matches!(
        declared.find_path("C", "A"),
        Err(SearchError::NoPath { .. })
    ));

    let mutual = Graph::new(points, GraphConfig::MUTUAL);
    assert_eq!(
        mutual.find_path("A", "C"),
        Err(SearchError::NoPath {
            start: "A".to_string(),
            goal: "C".to_string(),
        })
    );
}

#[test]
fn batch_matches_single_searches() {
    init();
    let graph = Graph::new(dataset::sample_points(), GraphConfig::default());
    let names: Vec<String> = graph.points().map(|p| p.name.clone()).collect();

    let mut queries: Vec<(String, String)> = vec![];
    for start in names.iter() {
        for goal in names.iter() {
            queries.push((start.clone(), goal.clone()));
        }
    }
    queries.push(("A".to_string(), "Nowhere".to_string()));

    let results = graph.find_paths(&queries);

    assert_eq!(results.len(), queries.len());
    for ((start, goal), result) in queries.iter().zip(results) {
        assert_eq!(result, graph.find_path(start, goal));
    }
}

#[test]
fn shared_between_threads() {
    init();
    let graph = Graph::new(dataset::sample_points(), GraphConfig::default());
    let graph = &graph;

    std::thread::scope(|scope| {
        let handles: Vec<_> = ["A", "B", "C", "H"]
            .iter()
            .map(|&start| scope.spawn(move || graph.find_path(start, "F")))
            .collect();
        for handle in handles {
            let path = handle.join().unwrap().unwrap();
            assert_eq!(path.last().map(String::as_str), Some("F"));
        }
    });
}

#[test]
fn error_messages() {
    init();
    let graph = Graph::new(dataset::sample_points(), GraphConfig::default());

    let err = graph.find_path("A", "Z").unwrap_err();
    assert_eq!(err.to_string(), "start or goal Point \"Z\" not found");

    let graph = Graph::new(
        vec![
            Point::new("A", 0.0, 0.0, Vec::<String>::new()),
            Point::new("B", 1.0, 0.0, Vec::<String>::new()),
        ],
        GraphConfig::default(),
    );
    let err = graph.find_path("A", "B").unwrap_err();
    assert_eq!(err.to_string(), "no valid Path from \"A\" to \"B\"");
}

#[test]
fn sample_table() {
    init();
    let graph = Graph::new(dataset::sample_points(), GraphConfig::default());
    let text = table::render(&table::adjacency_rows(&graph));
    let lines: Vec<&str> = text.lines().collect();

    // border, header, border, 8 Points, border
    assert_eq!(lines.len(), 12);
    assert!(lines[1].starts_with("| Point | X     | Y     | Connections"));
    assert!(lines[3].starts_with("| A     | 0.00  | 0.00  | B (1.41), C (2.83)"));
    assert!(lines.iter().all(|line| line.len() == lines[0].len()));
}
