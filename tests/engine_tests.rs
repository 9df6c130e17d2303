//! Engine tests - group partition, removal, gravity, and compaction rules

use same_game::core::{removal_score, GridEngine};
use same_game::types::{GemKind, GemLayout};

/// Build a layout from pattern-letter rows, e.g. `&["RRV", "BBV"]`.
fn layout(rows: &[&str]) -> GemLayout {
    GemLayout::from_fn(rows.len(), rows[0].len(), |x, y| {
        GemKind::from_letter(rows[y].as_bytes()[x] as char).expect("bad test letter")
    })
}

#[test]
fn test_adjacent_equal_cells_always_share_a_group() {
    for seed in [1, 99, 2024, 31337] {
        let engine = GridEngine::random_default(seed);

        for y in 0..engine.rows() {
            for x in 0..engine.cols() {
                let here = engine.cell(x, y).flatten();
                if here.is_none() {
                    continue;
                }
                if x + 1 < engine.cols() && here == engine.cell(x + 1, y).flatten() {
                    assert_eq!(
                        engine.group_id_at(x, y),
                        engine.group_id_at(x + 1, y),
                        "horizontal neighbors at ({}, {}) split across groups",
                        x,
                        y
                    );
                }
                if y + 1 < engine.rows() && here == engine.cell(x, y + 1).flatten() {
                    assert_eq!(
                        engine.group_id_at(x, y),
                        engine.group_id_at(x, y + 1),
                        "vertical neighbors at ({}, {}) split across groups",
                        x,
                        y
                    );
                }
            }
        }
    }
}

#[test]
fn test_partition_is_complete_and_disjoint() {
    let engine = GridEngine::random_default(4242);

    let mut seen = vec![0u32; engine.rows() * engine.cols()];
    for id in 0..engine.group_count() {
        for &(x, y) in engine.group_by_id(id).expect("dense ids") {
            seen[y * engine.cols() + x] += 1;
        }
    }

    for y in 0..engine.rows() {
        for x in 0..engine.cols() {
            let expected = if engine.cell(x, y).flatten().is_some() {
                1
            } else {
                0
            };
            assert_eq!(seen[y * engine.cols() + x], expected);
        }
    }
}

#[test]
fn test_group_members_share_one_color() {
    let engine = GridEngine::random_default(808);

    for id in 0..engine.group_count() {
        let members = engine.group_by_id(id).expect("dense ids");
        let kind = engine.cell(members[0].0, members[0].1).flatten();
        assert!(kind.is_some());
        for &(x, y) in members {
            assert_eq!(engine.cell(x, y).flatten(), kind);
        }
    }
}

#[test]
fn test_removal_scores_by_group_size() {
    // Single-row boards with one group of each size; a lone gem scores
    // nothing and removes nothing.
    let cases: [(&str, usize, u32); 5] = [
        ("R", 0, 0),
        ("RR", 2, 0),
        ("RRR", 3, 1),
        ("RRRR", 4, 4),
        ("RRRRR", 5, 9),
    ];

    for (row, expected_removed, expected_score) in cases {
        let mut engine = GridEngine::from_layout(&layout(&[row]));
        let outcome = engine.play(0, 0);
        assert_eq!(outcome.removed, expected_removed, "board {:?}", row);
        assert_eq!(outcome.score, expected_score, "board {:?}", row);
    }

    assert_eq!(removal_score(1), 0);
    assert_eq!(removal_score(2), 0);
    assert_eq!(removal_score(3), 1);
    assert_eq!(removal_score(4), 4);
    assert_eq!(removal_score(5), 9);
}

#[test]
fn test_singleton_click_leaves_state_untouched() {
    let mut engine = GridEngine::from_layout(&layout(&[
        "RV", //
        "VR",
    ]));
    let before = engine.snapshot();

    for y in 0..2 {
        for x in 0..2 {
            let outcome = engine.play(x, y);
            assert_eq!(outcome.removed, 0);
            assert_eq!(outcome.score, 0);
        }
    }

    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_gravity_leaves_no_gem_floating() {
    let mut engine = GridEngine::from_layout(&layout(&[
        "VRV", //
        "RRV", //
        "BRB",
    ]));

    engine.play(1, 1);

    // Within every column, active cells sit below all Empty cells.
    for x in 0..engine.cols() {
        let mut seen_gem = false;
        for y in 0..engine.rows() {
            let active = engine.cell(x, y).flatten().is_some();
            if seen_gem {
                assert!(active, "empty cell below a gem in column {}", x);
            }
            seen_gem |= active;
        }
    }
}

#[test]
fn test_emptied_column_collapses_preserving_order() {
    let mut engine = GridEngine::from_layout(&layout(&[
        "VRB", //
        "VRB",
    ]));

    // Removing the middle pair empties column 1; column 2 must slide into
    // its place with its content order intact.
    let outcome = engine.play(1, 0);
    assert_eq!(outcome.removed, 2);
    assert_eq!(engine.available_columns(), 2);

    assert_eq!(engine.cell(0, 0), Some(Some(GemKind::Emerald)));
    assert_eq!(engine.cell(0, 1), Some(Some(GemKind::Emerald)));
    assert_eq!(engine.cell(1, 0), Some(Some(GemKind::Diamond)));
    assert_eq!(engine.cell(1, 1), Some(Some(GemKind::Diamond)));
    assert_eq!(engine.cell(2, 0), Some(None));
    assert_eq!(engine.cell(2, 1), Some(None));
}

#[test]
fn test_terminal_checkerboard_vs_single_pair() {
    // (x + y) % 3 gives every cell a different color than all four
    // neighbors, so no board built this way has a removable group.
    let checkerboard = GemLayout::from_fn(5, 6, |x, y| {
        GemKind::from_index((x + y) % 3).expect("palette index")
    });
    let engine = GridEngine::from_layout(&checkerboard);
    assert!(engine.is_terminal());

    let pair = GridEngine::from_layout(&layout(&[
        "RVB", //
        "VBB",
    ]));
    assert!(!pair.is_terminal());
}

#[test]
fn test_hover_is_a_pure_read() {
    let engine = GridEngine::random_default(555);
    let before = engine.snapshot();

    for y in 0..engine.rows() {
        for x in 0..engine.cols() {
            let members = engine.hover_group(x, y).len();
            assert!(members >= 1 || engine.cell(x, y) == Some(None));
        }
    }
    let _ = engine.hover_group(1000, 1000);

    assert_eq!(engine.snapshot(), before);
}
