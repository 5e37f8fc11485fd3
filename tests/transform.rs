extern crate rasterfill;

use rasterfill::{combine, Point, Transform};

use std::f64::consts::PI;

fn close(a: (f64, f64), b: (f64, f64)) -> bool {
    (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
}

fn same(a: &Transform, b: &Transform) -> bool {
    [a.sx - b.sx, a.shy - b.shy, a.shx - b.shx,
     a.sy - b.sy, a.tx - b.tx, a.ty - b.ty].iter().all(|v| v.abs() < 1e-9)
}

#[test]
fn identity_is_neutral() {
    let t = Transform::from_row(1.5, 0.25, -0.5, 2.0, 10.0, -3.0);
    let id = Transform::identity();
    assert_eq!(combine(id, t), t);
    assert_eq!(combine(t, id), t);
    assert!(id.is_identity());
    assert!(Transform::default().is_identity());
    assert_eq!(id.map_point(3.5, -7.0), (3.5, -7.0));
}

#[test]
fn combine_scales() {
    let t = combine(Transform::scale(2.0, 2.0), Transform::scale(3.0, 1.5));
    assert_eq!(t.sx, 6.0);
    assert_eq!(t.sy, 3.0);
}

#[test]
fn combine_applies_first_then_second() {
    let s = Transform::scale(2.0, 2.0);
    let t = Transform::translate(10.0, 0.0);
    // Scale, then move
    assert_eq!(combine(s, t).map_point(1.0, 1.0), (12.0, 2.0));
    // Move, then scale
    assert_eq!(combine(t, s).map_point(1.0, 1.0), (22.0, 2.0));
    assert_eq!(s * t, combine(s, t));
    assert_eq!(t.pre_then(&s), combine(s, t));
}

#[test]
fn combine_matches_sequential_mapping() {
    let a = Transform::from_row(1.2, 0.3, -0.7, 0.9, 4.0, -2.0);
    let b = Transform::rotate(0.4);
    let (x, y) = a.map_point(3.0, 5.0);
    assert!(close(combine(a, b).map_point(3.0, 5.0), b.map_point(x, y)));
}

#[test]
fn combine_is_associative() {
    let a = Transform::rotate(0.3);
    let b = Transform::from_row(2.0, 0.1, 0.2, 0.5, -1.0, 7.0);
    let c = Transform::translate(3.0, -4.0);
    assert!(same(&combine(combine(a, b), c), &combine(a, combine(b, c))));
}

#[test]
fn rotate_quarter_turn() {
    let r = Transform::rotate(PI / 2.0);
    assert!(close(r.map_point(1.0, 0.0), (0.0, 1.0)));
    assert!(close(r.map_point(0.0, 1.0), (-1.0, 0.0)));
}

#[test]
fn rotate_about_point() {
    let r = Transform::rotate_at(PI, 10.0, 10.0);
    assert!(close(r.map_point(10.0, 10.0), (10.0, 10.0)));
    assert!(close(r.map_point(12.0, 10.0), (8.0, 10.0)));
}

#[test]
fn skew_shears_axes() {
    let t = Transform::skew(0.5, 0.0);
    assert_eq!(t.map_point(0.0, 2.0), (1.0, 2.0));
    assert_eq!(t.map_point(2.0, 0.0), (2.0, 0.0));
}

#[test]
fn invert_round_trip() {
    let t = Transform::from_row(2.0, 0.5, -1.0, 3.0, 7.0, -5.0);
    let inv = t.invert().unwrap();
    assert!(same(&combine(t, inv), &Transform::identity()));
    assert!(close(inv.map_point(t.map_point(4.0, 9.0).0, t.map_point(4.0, 9.0).1),
                  (4.0, 9.0)));
}

#[test]
fn singular_transform_has_no_inverse() {
    assert_eq!(Transform::scale(0.0, 1.0).invert(), None);
    assert_eq!(Transform::from_row(1.0, 2.0, 2.0, 4.0, 0.0, 0.0).invert(), None);
    assert_eq!(Transform::scale(std::f64::NAN, 1.0).invert(), None);
}

#[test]
fn finite_check() {
    assert!(Transform::rotate(1.0).is_finite());
    assert!(!Transform::translate(std::f64::INFINITY, 0.0).is_finite());
}

#[test]
fn map_many_points() {
    let mut pts = vec![Point::new(0.0, 0.0), Point::new(1.0, 2.0)];
    Transform::translate(5.0, -1.0).map_points(&mut pts);
    assert_eq!(pts, vec![Point::new(5.0, -1.0), Point::new(6.0, 1.0)]);
}
