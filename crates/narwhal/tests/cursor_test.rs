use narwhal::{Edge, Graph};
use std::collections::BTreeSet;

fn s(v: &str) -> String {
    v.to_string()
}

fn set(values: &[i32]) -> BTreeSet<i32> {
    values.iter().copied().collect()
}

#[test]
fn begin_is_first_edge() {
    let mut g: Graph<i32, BTreeSet<i32>> = Graph::from([1, 2, 3]);
    assert!(g.insert_edge(&2, &2, set(&[4])).unwrap());
    assert!(g.insert_edge(&2, &2, set(&[5])).unwrap());
    assert!(g.insert_edge(&2, &3, set(&[6])).unwrap());

    let mut it = g.begin();
    assert_eq!(it.get(), Some(&Edge::new(2, 2, set(&[4]))));
    it.move_next(&g);
    assert_eq!(it.get(), Some(&Edge::new(2, 2, set(&[5]))));
    it.move_next(&g);
    assert_eq!(it.get(), Some(&Edge::new(2, 3, set(&[6]))));
    it.move_next(&g);
    assert_eq!(it, g.end());
}

#[test]
fn step_within_one_bucket() {
    let mut g: Graph<i32, i32> = Graph::from([1]);
    assert!(g.insert_edge(&1, &1, 1).unwrap());
    assert!(g.insert_edge(&1, &1, 2).unwrap());

    let mut it = g.begin();
    it.move_next(&g);
    assert_eq!(it.get(), Some(&Edge::new(1, 1, 2)));
    it.move_prev(&g);
    assert_eq!(it.get(), Some(&Edge::new(1, 1, 1)));
    assert_eq!(it, g.begin());
}

#[test]
fn move_prev_from_end_reaches_last_edge() {
    let mut g: Graph<i32, BTreeSet<i32>> = Graph::from([1, 2, 3]);
    assert!(g.insert_edge(&3, &2, set(&[4])).unwrap());
    assert!(g.insert_edge(&3, &2, set(&[8])).unwrap());

    let mut it = g.end();
    it.move_prev(&g);
    assert_eq!(it.get(), Some(&Edge::new(3, 2, set(&[8]))));
}

#[test]
fn move_prev_from_end_when_last_node_has_no_edges() {
    let mut g: Graph<String, i32> = Graph::from([s("A"), s("B"), s("C"), s("D")]);
    assert!(g.insert_edge("A", "B", 1).unwrap());
    assert!(g.insert_edge("A", "C", 2).unwrap());

    let mut it = g.end();
    it.move_prev(&g);
    assert_eq!(it.get(), Some(&Edge::new(s("A"), s("C"), 2)));

    assert!(g.insert_edge("A", "D", 3).unwrap());
    let moved = g.take();
    let mut it = moved.end();
    it.move_prev(&moved);
    assert_eq!(it.get(), Some(&Edge::new(s("A"), s("D"), 3)));
}

#[test]
fn move_next_skips_nodes_without_edges() {
    let mut g: Graph<i32, i32> = Graph::from([1, 2, 3, 4]);
    assert!(g.insert_edge(&1, &2, 1).unwrap());
    assert!(g.insert_edge(&3, &1, 2).unwrap());
    assert!(g.insert_edge(&3, &1, 6).unwrap());

    let mut it = g.begin();
    it.move_next(&g);
    assert_eq!(it.get(), Some(&Edge::new(3, 1, 2)));

    let mut it = g.find(&1, &2, &1);
    it.move_next(&g);
    it.move_next(&g);
    assert_eq!(it.get(), Some(&Edge::new(3, 1, 6)));
    it.move_next(&g);
    assert_eq!(it, g.end());

    // Stepping past the end stays there.
    it.move_next(&g);
    assert!(it.is_end());
}

#[test]
fn move_prev_skips_nodes_without_edges() {
    let mut g: Graph<i32, i32> = Graph::from([1, 2, 3]);
    assert!(g.insert_edge(&1, &2, 1).unwrap());
    assert!(g.insert_edge(&3, &1, 2).unwrap());
    assert!(g.insert_edge(&3, &1, 6).unwrap());

    let mut it = g.end();
    it.move_prev(&g);
    assert_eq!(it.get(), Some(&Edge::new(3, 1, 6)));

    let mut it = g.find(&3, &1, &6);
    it.move_prev(&g);
    it.move_prev(&g);
    assert_eq!(it.get(), Some(&Edge::new(1, 2, 1)));
    assert_eq!(it, g.begin());

    // Stepping before the first edge leaves the cursor where it is.
    it.move_prev(&g);
    assert_eq!(it, g.begin());
}

#[test]
fn begin_equals_end_without_edges() {
    let g: Graph<i32, BTreeSet<i32>> = Graph::from([1, 2, 3]);
    assert_eq!(g.begin(), g.end());

    let empty: Graph<String, BTreeSet<i32>> = Graph::new();
    assert_eq!(empty.begin(), empty.end());

    let mut it = empty.end();
    it.move_prev(&empty);
    assert!(it.is_end());
}

#[test]
fn cursors_compare_by_position() {
    let mut g: Graph<String, String> = Graph::from([s("A"), s("B"), s("C"), s("D")]);
    assert!(g.insert_edge("A", "B", s("1")).unwrap());
    assert!(g.insert_edge("A", "C", s("2")).unwrap());
    assert!(g.insert_edge("B", "B", s("1")).unwrap());

    assert_eq!(g.begin(), g.begin());
    assert_eq!(g.find("A", "B", "1"), g.begin());

    let mut it = g.begin();
    let before = it.clone();
    it.move_next(&g);
    assert_ne!(it, before);
    it.move_prev(&g);
    assert_eq!(it, before);
}

#[test]
fn cursors_from_find_and_stepping_agree() {
    let mut g: Graph<i32, String> = Graph::from([1, 2, 3]);
    g.insert_edge(&2, &2, s("1")).unwrap();
    let mut it = g.find(&2, &2, "1");
    assert_eq!(it, g.begin());
    it.move_next(&g);
    it.move_prev(&g);
    assert_eq!(it, g.begin());

    g.insert_edge(&2, &2, s("2")).unwrap();
    g.insert_edge(&2, &3, s("3")).unwrap();
    let mut it = g.find(&2, &2, "2");
    it.move_prev(&g);
    assert_eq!(it, g.begin());
    it.move_next(&g);
    it.move_next(&g);
    assert_eq!(it, g.find(&2, &3, "3"));
}

#[test]
fn cursors_of_distinct_graphs_never_compare_equal() {
    let mut g: Graph<i32, String> = Graph::from([1, 2, 3]);
    let g2 = g.clone();
    assert_eq!(g, g2);
    assert_ne!(g.begin(), g2.begin());
    assert_ne!(g.end(), g2.end());

    g.insert_edge(&2, &2, s("1")).unwrap();
    let gc = g.clone();
    let gc2 = g.clone();
    assert_ne!(gc.end(), gc2.end());
    assert_ne!(gc.begin(), gc2.begin());
    assert_eq!(gc.begin().get(), gc2.begin().get());
}

#[test]
fn cursors_of_distinct_empty_graphs_never_compare_equal() {
    let g: Graph<i32, String> = Graph::new();
    let g2 = g.clone();
    assert_ne!(g.begin(), g2.begin());
    assert_ne!(g.end(), g2.end());
}

#[test]
fn dereferenced_triples_are_values() {
    let mut g: Graph<String, i32> = Graph::from([s("a"), s("b")]);
    g.insert_edge("a", "b", 1).unwrap();

    let it = g.begin();
    let edge = it.clone().into_edge().unwrap();
    g.replace_node("a", s("z")).unwrap();
    g.erase_edge("z", "b", &1).unwrap();

    assert_eq!(edge, Edge::new(s("a"), s("b"), 1));
    assert_eq!(it.get(), Some(&edge));
}

#[test]
fn stale_cursor_resumes_at_next_greater_edge() {
    let mut g: Graph<i32, i32> = Graph::from([1, 2, 3]);
    g.insert_edge(&1, &2, 1).unwrap();
    g.insert_edge(&1, &2, 2).unwrap();
    g.insert_edge(&3, &3, 1).unwrap();

    let mut it = g.find(&1, &2, &1);
    g.erase_edge(&1, &2, &1).unwrap();
    it.move_next(&g);
    assert_eq!(it.get(), Some(&Edge::new(1, 2, 2)));
}

#[test]
fn borrowing_iterator_matches_cursor_walk() {
    let mut g: Graph<i32, i32> = Graph::from([0, 1, 2, 3, 4]);
    for (a, b, w) in [(4, 0, 1), (1, 1, 3), (1, 1, 1), (1, 3, 2), (3, 0, 9)] {
        g.insert_edge(&a, &b, w).unwrap();
    }

    let mut walked = Vec::new();
    let mut it = g.begin();
    while let Some(edge) = it.get() {
        walked.push(edge.clone());
        it.move_next(&g);
    }
    let iterated: Vec<Edge<i32, i32>> = g.edges().map(|e| e.cloned()).collect();
    assert_eq!(walked, iterated);
    assert_eq!(
        iterated,
        vec![
            Edge::new(1, 1, 1),
            Edge::new(1, 1, 3),
            Edge::new(1, 3, 2),
            Edge::new(3, 0, 9),
            Edge::new(4, 0, 1),
        ]
    );

    let mut walked_back = Vec::new();
    let mut it = g.end();
    loop {
        it.move_prev(&g);
        let edge = it.get().cloned().unwrap();
        let done = it == g.begin();
        walked_back.push(edge);
        if done {
            break;
        }
    }
    let reversed: Vec<Edge<i32, i32>> = (&g).into_iter().rev().map(|e| e.cloned()).collect();
    assert_eq!(walked_back, reversed);
}

#[test]
fn long_runs_of_nodes_without_edges_are_skipped() {
    let mut g: Graph<i32, i32> = (0..100).collect();
    g.insert_edge(&0, &50, 1).unwrap();
    g.insert_edge(&0, &99, 2).unwrap();
    g.insert_edge(&99, &0, 3).unwrap();

    let mut it = g.begin();
    assert_eq!(it.get(), Some(&Edge::new(0, 50, 1)));
    it.move_next(&g);
    it.move_next(&g);
    assert_eq!(it.get(), Some(&Edge::new(99, 0, 3)));
    it.move_next(&g);
    assert!(it.is_end());

    it.move_prev(&g);
    it.move_prev(&g);
    assert_eq!(it.get(), Some(&Edge::new(0, 99, 2)));

    let after = g.erase_edge_range(it, g.end());
    assert!(after.is_end());
    assert_eq!(g.edge_count(), 1);
    let mut it = g.end();
    it.move_prev(&g);
    assert_eq!(it, g.begin());
}
