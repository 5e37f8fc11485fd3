extern crate rasterfill;

use rasterfill::{BuilderState, Error, Path, PathBuilder, PathSegment, Point, Rect, Transform};

fn rectangle() -> PathBuilder {
    let mut pb = PathBuilder::new();
    pb.move_to(0.0, 0.0);
    pb.line_to(10.0, 0.0).unwrap();
    pb.line_to(10.0, 20.0).unwrap();
    pb.line_to(0.0, 20.0).unwrap();
    pb.close().unwrap();
    pb
}

#[test]
fn rectangle_has_five_verbs() {
    let pb = rectangle();
    assert_eq!(pb.state(), BuilderState::Closed);
    assert_eq!(pb.len(), 5);
    let path = pb.finish();
    assert_eq!(path.len(), 5);
    assert_eq!(path.segments()[0], PathSegment::MoveTo(Point::new(0.0, 0.0)));
    assert_eq!(path.segments()[4], PathSegment::Close);
}

#[test]
fn line_to_without_move_to_fails() {
    let mut pb = PathBuilder::new();
    assert_eq!(pb.state(), BuilderState::Empty);
    match pb.line_to(1.0, 1.0) {
        Err(Error::NoOpenSubpath { verb }) => assert_eq!(verb, "line_to"),
        other => panic!("unexpected {:?}", other),
    }
    assert!(pb.is_empty());
}

#[test]
fn close_without_move_to_fails() {
    let mut pb = PathBuilder::new();
    assert!(matches!(pb.close(), Err(Error::NoOpenSubpath { verb: "close" })));
    assert!(matches!(pb.quad_to(1.0, 1.0, 2.0, 0.0), Err(Error::NoOpenSubpath { .. })));
    assert!(matches!(pb.cubic_to(1.0, 1.0, 2.0, 1.0, 3.0, 0.0),
                     Err(Error::NoOpenSubpath { .. })));
}

#[test]
fn segments_after_close_need_move_to() {
    let mut pb = rectangle();
    assert!(pb.line_to(5.0, 5.0).is_err());
    assert!(pb.close().is_err());
    assert_eq!(pb.len(), 5);
    pb.move_to(30.0, 30.0);
    assert_eq!(pb.state(), BuilderState::InSubpath);
    assert!(pb.line_to(40.0, 30.0).is_ok());
}

#[test]
fn failed_verbs_leave_builder_unchanged() {
    let mut pb = rectangle();
    let before = pb.clone().finish();
    let _ = pb.line_to(1.0, 2.0);
    assert_eq!(pb.finish(), before);
}

#[test]
fn multiple_subpaths() {
    let mut pb = rectangle();
    pb.move_to(30.0, 30.0);
    pb.line_to(40.0, 30.0).unwrap();
    pb.line_to(35.0, 40.0).unwrap();
    pb.close().unwrap();
    assert_eq!(pb.finish().len(), 9);
}

#[test]
fn consecutive_move_to_are_kept() {
    let mut pb = PathBuilder::new();
    pb.move_to(0.0, 0.0);
    pb.move_to(5.0, 5.0);
    assert_eq!(pb.current_point(), Some(Point::new(5.0, 5.0)));
    assert_eq!(pb.finish().len(), 2);
}

#[test]
fn curves_are_one_verb_each() {
    let mut pb = PathBuilder::new();
    pb.move_to(0.0, 0.0);
    pb.quad_to(10.0, 20.0, 20.0, 0.0).unwrap();
    pb.cubic_to(25.0, -10.0, 35.0, -10.0, 40.0, 0.0).unwrap();
    assert_eq!(pb.current_point(), Some(Point::new(40.0, 0.0)));
    pb.close().unwrap();
    assert_eq!(pb.current_point(), Some(Point::new(0.0, 0.0)));
    let path = pb.finish();
    assert_eq!(path.len(), 4);
    let b = path.bounds().unwrap();
    assert_eq!((b.x1, b.y1, b.x2, b.y2), (0.0, -10.0, 40.0, 20.0));
}

#[test]
fn empty_builder_finishes_empty() {
    let pb = PathBuilder::new();
    assert_eq!(pb.current_point(), None);
    let path = pb.finish();
    assert!(path.is_empty());
    assert_eq!(path.bounds(), None);
    assert_eq!(path, Path::default());
}

#[test]
fn rect_path() {
    let r = Rect::from_xywh(5.0, 5.0, 10.0, 4.0).unwrap();
    let path = PathBuilder::from_rect(r);
    assert_eq!(path.len(), 5);
    let b = path.bounds().unwrap();
    assert_eq!((b.x1, b.y1, b.x2, b.y2), (5.0, 5.0, 15.0, 9.0));
}

#[test]
fn invalid_rects() {
    assert!(matches!(Rect::from_ltrb(0.0, 0.0, 0.0, 10.0), Err(Error::InvalidRect { .. })));
    assert!(Rect::from_xywh(0.0, 0.0, 10.0, -1.0).is_err());
    assert!(Rect::from_ltrb(std::f64::NAN, 0.0, 1.0, 1.0).is_err());
}

#[test]
fn rounded_rect_corners() {
    let r = Rect::from_ltrb(0.0, 0.0, 40.0, 20.0).unwrap();
    let path = Path::rounded_rect(r, 5.0, 5.0);
    // move, 4 lines, 4 corners, close
    assert_eq!(path.len(), 10);
    let curves = path.segments().iter()
        .filter(|s| matches!(s, PathSegment::CubicTo(..)))
        .count();
    assert_eq!(curves, 4);
    let b = path.bounds().unwrap();
    assert_eq!((b.x1, b.y1, b.x2, b.y2), (0.0, 0.0, 40.0, 20.0));

    // Zero radius falls back to a plain rectangle
    assert_eq!(Path::rounded_rect(r, 0.0, 5.0), PathBuilder::from_rect(r));
}

#[test]
fn transform_path() {
    let path = rectangle().finish().transform(&Transform::translate(1.0, 2.0));
    assert_eq!(path.segments()[2], PathSegment::LineTo(Point::new(11.0, 22.0)));
    assert_eq!(path.len(), 5);
}
