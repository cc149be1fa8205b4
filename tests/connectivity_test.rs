// Core flood-fill behavior on single-layer boards
use std::collections::HashSet;

use copperfind::{Board, FindContext, LayerId, LayerKind, ObjId, Point};

fn single_layer_board() -> (Board, LayerId) {
    let mut board = Board::new();
    let grp = board.add_group("outer");
    let top = board.add_layer("top", LayerKind::Copper, grp);
    (board, top)
}

#[test]
fn test_two_overlapping_lines() {
    let (mut board, top) = single_layer_board();
    let a = board.add_line(top, Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1.0);
    let b = board.add_line(top, Point::new(10.0, 0.0), Point::new(10.0, 10.0), 1.0);

    let mut ctx = FindContext::new();
    ctx.list_found = true;
    let total = ctx.find_from_obj(&mut board, a).expect("traversal failed");

    assert_eq!(total, 2);
    let found: HashSet<ObjId> = ctx.found().iter().copied().collect();
    assert!(found.contains(&a));
    assert!(found.contains(&b));
    ctx.release();
}

#[test]
fn test_collinear_chain_is_transitive() {
    // A overlaps B, B overlaps C, A does not overlap C directly
    let (mut board, top) = single_layer_board();
    let a = board.add_line(top, Point::new(0.0, 0.0), Point::new(4.0, 0.0), 0.5);
    let b = board.add_line(top, Point::new(3.5, 0.0), Point::new(8.0, 0.0), 0.5);
    let c = board.add_line(top, Point::new(7.5, 0.0), Point::new(12.0, 0.0), 0.5);

    let mut ctx = FindContext::new();
    ctx.list_found = true;
    let total = ctx.find_from_obj(&mut board, a).expect("traversal failed");

    assert_eq!(total, 3);
    let found: HashSet<ObjId> = ctx.found().iter().copied().collect();
    assert_eq!(found, HashSet::from([a, b, c]));
    ctx.release();
}

#[test]
fn test_disjoint_lines_stay_separate() {
    let (mut board, top) = single_layer_board();
    let a = board.add_line(top, Point::new(0.0, 0.0), Point::new(1.0, 0.0), 0.5);
    let b = board.add_line(top, Point::new(10.0, 10.0), Point::new(11.0, 10.0), 0.5);

    let mut ctx = FindContext::new();
    assert_eq!(ctx.find_from_obj(&mut board, a).expect("traversal failed"), 1);
    ctx.release();
    assert_eq!(ctx.find_from_obj(&mut board, b).expect("traversal failed"), 1);
    ctx.release();
}

#[test]
fn test_unreleased_context_is_rejected_without_side_effects() {
    let (mut board, top) = single_layer_board();
    let a = board.add_line(top, Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1.0);
    board.add_line(top, Point::new(10.0, 0.0), Point::new(10.0, 10.0), 1.0);

    let mut ctx = FindContext::new();
    ctx.list_found = true;
    let first = ctx.find_from_obj(&mut board, a).expect("first traversal failed");
    assert_eq!(first, 2);

    // second traversal on the unreleased context must fail cleanly
    let second = ctx.find_from_obj(&mut board, a);
    assert!(second.is_err());
    assert_eq!(ctx.total(), 2);
    assert_eq!(ctx.found().len(), 2);

    // after release the context is reusable
    ctx.release();
    assert_eq!(ctx.find_from_obj(&mut board, a).expect("retry failed"), 2);
    ctx.release();
}

#[test]
fn test_no_double_visitation() {
    // a dense cluster where everything overlaps everything
    let (mut board, top) = single_layer_board();
    let mut ids = Vec::new();
    for i in 0..6 {
        let y = i as f64 * 0.2;
        ids.push(board.add_line(top, Point::new(0.0, y), Point::new(10.0, y), 1.0));
    }

    let mut ctx = FindContext::new();
    ctx.list_found = true;
    let total = ctx.find_from_obj(&mut board, ids[0]).expect("traversal failed");

    assert_eq!(total, 6);
    assert_eq!(ctx.found().len() as u64, total);
    let distinct: HashSet<ObjId> = ctx.found().iter().copied().collect();
    assert_eq!(distinct.len(), 6);
    ctx.release();
}

#[test]
fn test_confluence_any_seed_reaches_whole_component() {
    let (mut board, top) = single_layer_board();
    let a = board.add_line(top, Point::new(0.0, 0.0), Point::new(4.0, 0.0), 0.5);
    let b = board.add_line(top, Point::new(3.5, 0.0), Point::new(8.0, 0.0), 0.5);
    let c = board.add_arc(top, Point::new(8.0, 5.0), 5.0, 270.0, 90.0, 0.5);
    // arc starts at (8, 0), touching line b's endpoint
    let other = board.add_line(top, Point::new(50.0, 50.0), Point::new(60.0, 50.0), 0.5);

    let mut sets = Vec::new();
    for seed in [a, b, c] {
        let mut ctx = FindContext::new();
        ctx.list_found = true;
        let total = ctx.find_from_obj(&mut board, seed).expect("traversal failed");
        assert_eq!(total, 3);
        let set: HashSet<ObjId> = ctx.found().iter().copied().collect();
        assert!(!set.contains(&other));
        sets.push(set);
        ctx.release();
    }
    assert_eq!(sets[0], sets[1]);
    assert_eq!(sets[1], sets[2]);
}

#[test]
fn test_found_list_starts_at_seed() {
    let (mut board, top) = single_layer_board();
    let a = board.add_line(top, Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1.0);
    board.add_line(top, Point::new(5.0, -5.0), Point::new(5.0, 5.0), 1.0);

    let mut ctx = FindContext::new();
    ctx.list_found = true;
    ctx.find_from_obj(&mut board, a).expect("traversal failed");
    assert_eq!(ctx.found()[0], a);
    ctx.release();
}

#[test]
fn test_polygon_bridges_lines() {
    let (mut board, top) = single_layer_board();
    let plane = board.add_polygon(
        top,
        vec![
            Point::new(-5.0, -5.0),
            Point::new(5.0, -5.0),
            Point::new(5.0, 5.0),
            Point::new(-5.0, 5.0),
        ],
        vec![],
    );
    // both lines end inside the plane but never touch each other
    let left = board.add_line(top, Point::new(-20.0, 0.0), Point::new(-4.0, 0.0), 0.5);
    let right = board.add_line(top, Point::new(4.0, 3.0), Point::new(20.0, 3.0), 0.5);

    let mut ctx = FindContext::new();
    ctx.list_found = true;
    let total = ctx.find_from_obj(&mut board, left).expect("traversal failed");
    assert_eq!(total, 3);
    let found: HashSet<ObjId> = ctx.found().iter().copied().collect();
    assert_eq!(found, HashSet::from([plane, left, right]));
    ctx.release();
}
