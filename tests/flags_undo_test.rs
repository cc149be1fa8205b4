// Persistent result flags, undo grouping, callbacks and reports
use copperfind::{Board, FindContext, FindReport, LayerId, LayerKind, ObjFlags, Point};

fn board_with_two_nets() -> (Board, LayerId) {
    let mut board = Board::new();
    let grp = board.add_group("outer");
    let top = board.add_layer("top", LayerKind::Copper, grp);
    (board, top)
}

#[test]
fn test_result_flag_applied_to_found_objects() {
    let (mut board, top) = board_with_two_nets();
    let a = board.add_line(top, Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1.0);
    let b = board.add_line(top, Point::new(10.0, 0.0), Point::new(10.0, 10.0), 1.0);
    let other = board.add_line(top, Point::new(50.0, 50.0), Point::new(60.0, 50.0), 1.0);

    let mut ctx = FindContext::new();
    ctx.flag_set = ObjFlags::FOUND;
    ctx.find_from_obj(&mut board, a).expect("traversal failed");
    ctx.release();

    assert!(board.object(a).flags.contains(ObjFlags::FOUND));
    assert!(board.object(b).flags.contains(ObjFlags::FOUND));
    assert!(!board.object(other).flags.contains(ObjFlags::FOUND));
}

#[test]
fn test_undo_restores_one_serial_group_at_a_time() {
    let (mut board, top) = board_with_two_nets();
    // two disjoint nets
    let net1 = board.add_line(top, Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1.0);
    let net2 = board.add_line(top, Point::new(50.0, 50.0), Point::new(60.0, 50.0), 1.0);

    let mut ctx = FindContext::new();
    ctx.flag_set = ObjFlags::FOUND;
    ctx.flag_set_undoable = true;

    ctx.find_from_obj(&mut board, net1).expect("first traversal failed");
    ctx.release();
    ctx.find_from_obj(&mut board, net2).expect("second traversal failed");
    ctx.release();

    assert!(board.object(net1).flags.contains(ObjFlags::FOUND));
    assert!(board.object(net2).flags.contains(ObjFlags::FOUND));

    // most recent traversal first
    assert_eq!(board.undo_last(), 1);
    assert!(board.object(net1).flags.contains(ObjFlags::FOUND));
    assert!(!board.object(net2).flags.contains(ObjFlags::FOUND));

    assert_eq!(board.undo_last(), 1);
    assert!(!board.object(net1).flags.contains(ObjFlags::FOUND));
    assert!(board.undo.is_empty());
    assert_eq!(board.undo_last(), 0);
}

#[test]
fn test_undo_preserves_unrelated_flags() {
    let (mut board, top) = board_with_two_nets();
    let a = board.add_line(top, Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1.0);

    // a flag set by another subsystem before the traversal
    let mut ctx = FindContext::new();
    ctx.flag_set = ObjFlags::SELECTED;
    ctx.find_from_obj(&mut board, a).expect("pre-tag failed");
    ctx.release();

    let mut ctx = FindContext::new();
    ctx.flag_set = ObjFlags::FOUND;
    ctx.flag_set_undoable = true;
    ctx.find_from_obj(&mut board, a).expect("traversal failed");
    ctx.release();

    assert!(board.object(a).flags.contains(ObjFlags::FOUND | ObjFlags::SELECTED));
    board.undo_last();
    assert!(!board.object(a).flags.contains(ObjFlags::FOUND));
    assert!(board.object(a).flags.contains(ObjFlags::SELECTED));
}

#[test]
fn test_callback_can_stop_the_traversal() {
    let (mut board, top) = board_with_two_nets();
    let a = board.add_line(top, Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1.0);
    board.add_line(top, Point::new(10.0, 0.0), Point::new(10.0, 10.0), 1.0);
    board.add_line(top, Point::new(10.0, 10.0), Point::new(0.0, 10.0), 1.0);

    let mut ctx = FindContext::new();
    let mut seen = 0;
    let total = ctx
        .find_from_obj_with(&mut board, a, |_board, _id| {
            seen += 1;
            seen >= 2
        })
        .expect("traversal failed");

    assert_eq!(total, 2);
    assert_eq!(seen, 2);
    assert!(ctx.aborted());
    ctx.release();

    // without the early stop the same seed reaches the whole chain
    let total = ctx.find_from_obj(&mut board, a).expect("traversal failed");
    assert_eq!(total, 3);
    assert!(!ctx.aborted());
    ctx.release();
}

#[test]
fn test_report_serializes_found_set() {
    let (mut board, top) = board_with_two_nets();
    let a = board.add_line(top, Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1.0);
    board.add_arc(top, Point::new(10.0, 5.0), 5.0, 270.0, 90.0, 1.0);

    let mut ctx = FindContext::new();
    ctx.list_found = true;
    let total = ctx.find_from_obj(&mut board, a).expect("traversal failed");
    assert_eq!(total, 2);

    let report = FindReport::from_context(&ctx, &board);
    let json = report.to_json().expect("serialization failed");
    let value: serde_json::Value = serde_json::from_str(&json).expect("report is not valid JSON");

    assert_eq!(value["total"], 2);
    assert_eq!(value["aborted"], false);
    assert_eq!(value["objects"].as_array().map(|a| a.len()), Some(2));
    assert_eq!(value["objects"][0]["kind"], "line");
    assert_eq!(value["objects"][0]["layer"], "top");
    ctx.release();
}
