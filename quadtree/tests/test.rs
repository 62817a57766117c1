use geometry::Rectangle;
use quadtree::{Config, QuadTree, QuadtreeError, SceneNode};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

fn random_rect<R: Rng>(rng: &mut R, extent: f32, max_size: f32) -> Rectangle {
    Rectangle::new(
        rng.gen_range(0.0..extent),
        rng.gen_range(0.0..extent),
        rng.gen_range(0.0..max_size),
        rng.gen_range(0.0..max_size),
    )
}

#[test]
fn test_single_retrieve() {
    let mut qt = QuadTree::new(Rectangle::new(0.0, 0.0, 100.0, 100.0)).unwrap();
    qt.insert(0, Rectangle::new(0.0, 15.0, 100.0, 50.0));
    let mut candidates: Vec<u32> = Vec::new();
    qt.retrieve(&Rectangle::new(0.0, 0.0, 20.0, 20.0), &mut candidates);
    assert_eq!(candidates, vec![0]);
    assert_eq!(qt.len(), 1);
}

#[test]
fn test_invalid_bounds() {
    let err = QuadTree::new(Rectangle::new(0.0, 0.0, -1.0, 10.0)).err();
    assert_eq!(
        err,
        Some(QuadtreeError::InvalidBounds {
            x: 0.0,
            y: 0.0,
            width: -1.0,
            height: 10.0
        })
    );

    let mut qt = QuadTree::new(Rectangle::new(0.0, 0.0, 10.0, 10.0)).unwrap();
    assert!(qt
        .clear(Some(Rectangle::new(0.0, 0.0, f32::INFINITY, 1.0)))
        .is_err());
}

#[test]
fn test_split_redistributes_every_resident() {
    let mut qt = QuadTree::new(Rectangle::new(0.0, 0.0, 100.0, 100.0)).unwrap();
    qt.insert(0, Rectangle::new(10.0, 10.0, 1.0, 1.0));
    qt.insert(1, Rectangle::new(60.0, 10.0, 1.0, 1.0));
    qt.insert(2, Rectangle::new(10.0, 60.0, 1.0, 1.0));
    qt.insert(3, Rectangle::new(60.0, 60.0, 1.0, 1.0));
    assert!(!qt.has_children());
    assert_eq!(qt.depth_of(0), Some(0));

    qt.insert(4, Rectangle::new(70.0, 70.0, 1.0, 1.0));
    assert!(qt.has_children());
    assert_eq!(qt.node_count(), 5);
    for value in 0..5 {
        assert_eq!(qt.depth_of(value), Some(1));
    }

    let mut candidates = Vec::new();
    qt.retrieve(&Rectangle::new(80.0, 80.0, 5.0, 5.0), &mut candidates);
    let candidate_set: HashSet<_> = candidates.into_iter().collect();
    assert_eq!(candidate_set, HashSet::from([3, 4]));
}

#[test]
fn test_straddler_stays_at_coarser_node() {
    let mut qt = QuadTree::new(Rectangle::new(0.0, 0.0, 100.0, 100.0)).unwrap();
    for (i, (x, y)) in [(10.0, 10.0), (60.0, 10.0), (10.0, 60.0), (60.0, 60.0)]
        .into_iter()
        .enumerate()
    {
        qt.insert(i as u32, Rectangle::new(x, y, 1.0, 1.0));
    }
    // Touches the vertical midline exactly.
    qt.insert(4, Rectangle::new(45.0, 10.0, 5.0, 5.0));
    qt.insert(5, Rectangle::new(45.0, 45.0, 10.0, 10.0));
    assert!(qt.has_children());
    assert_eq!(qt.depth_of(4), Some(0));
    assert_eq!(qt.depth_of(5), Some(0));

    // A query straddling a midline visits all four children.
    let mut candidates = Vec::new();
    qt.retrieve(&Rectangle::new(40.0, 40.0, 20.0, 20.0), &mut candidates);
    assert_eq!(candidates.len(), 6);
}

#[test]
fn test_max_depth_stops_splitting() {
    let config = Config {
        max_objects_per_node: 2,
        max_depth: 2,
        ..Config::default()
    };
    let mut qt = QuadTree::new_with_config(Rectangle::new(0.0, 0.0, 100.0, 100.0), config).unwrap();
    for value in 0..100 {
        qt.insert(value, Rectangle::new(1.0, 1.0, 1.0, 1.0));
    }
    for value in 0..100 {
        assert_eq!(qt.depth_of(value), Some(2));
    }
    let mut candidates = Vec::new();
    qt.retrieve(&Rectangle::new(0.5, 0.5, 1.0, 1.0), &mut candidates);
    assert_eq!(candidates.len(), 100);
}

#[test]
fn test_no_false_negatives() {
    // Use a fixed seed for reproducibility.
    let mut rng: StdRng = SeedableRng::seed_from_u64(7);
    let mut qt = QuadTree::new(Rectangle::new(0.0, 0.0, 1000.0, 1000.0)).unwrap();
    let rects: Vec<Rectangle> = (0..500).map(|_| random_rect(&mut rng, 1000.0, 60.0)).collect();
    for (i, rect) in rects.iter().enumerate() {
        qt.insert(i as u32, *rect);
    }
    assert!(qt.node_count() > 1);

    let mut candidates = Vec::new();
    for _ in 0..200 {
        let query = random_rect(&mut rng, 1000.0, 120.0);
        candidates.clear();
        qt.retrieve(&query, &mut candidates);
        let candidate_set: HashSet<u32> = candidates.iter().copied().collect();
        assert_eq!(candidate_set.len(), candidates.len(), "duplicate candidates");
        for (i, rect) in rects.iter().enumerate() {
            if rect.overlaps(&query) {
                assert!(
                    candidate_set.contains(&(i as u32)),
                    "missed {:?} for query {:?}",
                    rect,
                    query
                );
            }
        }
    }
}

#[test]
fn test_clear_is_idempotent() {
    let mut rng: StdRng = SeedableRng::seed_from_u64(99);
    let rects: Vec<Rectangle> = (0..200).map(|_| random_rect(&mut rng, 500.0, 20.0)).collect();
    let queries: Vec<Rectangle> = (0..20).map(|_| random_rect(&mut rng, 500.0, 50.0)).collect();

    let mut qt = QuadTree::new(Rectangle::new(0.0, 0.0, 500.0, 500.0)).unwrap();
    let build = |qt: &mut QuadTree| {
        for (i, rect) in rects.iter().enumerate() {
            qt.insert(i as u32, *rect);
        }
    };
    let results = |qt: &QuadTree| -> Vec<Vec<u32>> {
        queries
            .iter()
            .map(|query| {
                let mut out = Vec::new();
                qt.retrieve(query, &mut out);
                out
            })
            .collect()
    };

    build(&mut qt);
    let first = results(&qt);
    let slots = qt.node_count() + qt.free_node_count();

    qt.clear(None).unwrap();
    assert!(qt.is_empty());
    assert!(qt.is_prunable());
    assert_eq!(qt.node_count(), 1);
    assert_eq!(qt.free_node_count(), slots - 1);
    for query in &queries {
        let mut out = Vec::new();
        qt.retrieve(query, &mut out);
        assert!(out.is_empty());
    }

    build(&mut qt);
    assert_eq!(results(&qt), first);
    // Rebuilding reuses pooled nodes instead of growing the arena.
    assert_eq!(qt.node_count() + qt.free_node_count(), slots);
}

#[test]
fn test_clear_with_new_bounds() {
    let mut qt = QuadTree::new(Rectangle::new(0.0, 0.0, 100.0, 100.0)).unwrap();
    qt.insert(0, Rectangle::new(10.0, 10.0, 5.0, 5.0));
    qt.clear(Some(Rectangle::new(-50.0, -50.0, 400.0, 300.0))).unwrap();
    assert_eq!(qt.bounds(), Rectangle::new(-50.0, -50.0, 400.0, 300.0));
    assert!(!qt.contains(0));
}

#[test]
fn test_remove_collapses_empty_quadrants() {
    let mut qt = QuadTree::new(Rectangle::new(0.0, 0.0, 100.0, 100.0)).unwrap();
    for value in 0..5 {
        qt.insert(value, Rectangle::new(10.0 + value as f32 * 12.0, 10.0, 1.0, 1.0));
    }
    assert!(qt.has_children());
    assert!(!qt.remove(42));

    for value in 0..5 {
        assert!(qt.remove(value));
    }
    assert!(!qt.has_children());
    assert!(qt.is_prunable());
    assert_eq!(qt.node_count(), 1);
    assert_eq!(qt.free_node_count(), 4);
}

#[test]
fn test_collapse_keeps_straddlers_until_next_insert() {
    let mut qt = QuadTree::new(Rectangle::new(0.0, 0.0, 100.0, 100.0)).unwrap();
    for (value, (x, y)) in [(10.0, 10.0), (60.0, 10.0), (10.0, 60.0), (60.0, 60.0), (20.0, 20.0)]
        .into_iter()
        .enumerate()
    {
        qt.insert(value as u32, Rectangle::new(x, y, 1.0, 1.0));
    }
    for value in 10..15 {
        qt.insert(value, Rectangle::new(45.0, 45.0, 10.0, 10.0));
    }
    assert!(qt.has_children());

    for value in 0..5 {
        assert!(qt.remove(value));
    }
    // Five straddlers now sit in a single leaf, over capacity.
    assert!(!qt.has_children());
    assert_eq!(qt.len(), 5);

    qt.insert(20, Rectangle::new(10.0, 10.0, 1.0, 1.0));
    assert!(qt.has_children());
    assert_eq!(qt.depth_of(20), Some(1));
    for value in 10..15 {
        assert_eq!(qt.depth_of(value), Some(0));
    }
}

#[test]
fn test_reinsert_moves_value() {
    let mut qt = QuadTree::new(Rectangle::new(0.0, 0.0, 100.0, 100.0)).unwrap();
    qt.insert(0, Rectangle::new(10.0, 10.0, 10.0, 10.0));
    qt.relocate(0, Rectangle::new(60.0, 60.0, 10.0, 10.0));
    assert_eq!(qt.len(), 1);
    let mut candidates: Vec<u32> = Vec::new();
    qt.retrieve(&Rectangle::new(60.0, 60.0, 10.0, 10.0), &mut candidates);
    assert_eq!(candidates, vec![0]);
}

#[test]
fn test_insert_container_skips_bodiless_and_recurses() {
    let scene = vec![
        SceneNode::Object {
            value: 1,
            bounds: Rectangle::new(0.0, 0.0, 10.0, 10.0),
            has_body: true,
        },
        SceneNode::Object {
            value: 2,
            bounds: Rectangle::new(0.0, 0.0, 10.0, 10.0),
            has_body: false,
        },
        SceneNode::Container {
            children: vec![
                SceneNode::Object {
                    value: 3,
                    bounds: Rectangle::new(50.0, 50.0, 10.0, 10.0),
                    has_body: true,
                },
                SceneNode::Container {
                    children: vec![SceneNode::Object {
                        value: 4,
                        bounds: Rectangle::new(80.0, 0.0, 10.0, 10.0),
                        has_body: true,
                    }],
                },
            ],
        },
    ];
    let mut qt = QuadTree::new(Rectangle::new(0.0, 0.0, 100.0, 100.0)).unwrap();
    qt.insert_container(&scene);
    assert_eq!(qt.len(), 3);
    assert!(qt.contains(1));
    assert!(!qt.contains(2));
    assert!(qt.contains(3));
    assert!(qt.contains(4));
}

#[test]
fn test_all_node_bounding_boxes() {
    let mut qt = QuadTree::new(Rectangle::new(0.0, 0.0, 100.0, 100.0)).unwrap();
    for value in 0..5 {
        qt.insert(value, Rectangle::new(10.0 + value as f32, 10.0, 1.0, 1.0));
    }
    let mut boxes = Vec::new();
    qt.all_node_bounding_boxes(&mut boxes);
    assert_eq!(boxes[0], Rectangle::new(0.0, 0.0, 100.0, 100.0));
    assert!(boxes.contains(&Rectangle::new(50.0, 0.0, 50.0, 50.0)));
    assert!(boxes.contains(&Rectangle::new(0.0, 0.0, 50.0, 50.0)));
    assert!(boxes.contains(&Rectangle::new(0.0, 50.0, 50.0, 50.0)));
    assert!(boxes.contains(&Rectangle::new(50.0, 50.0, 50.0, 50.0)));
}
