use glam::DVec2;

use super::*;

#[test]
fn constructors_reject_negative_extents() {
    let c = DVec2::new(1.0, 1.0);
    assert_eq!(
        Primitive::ellipse(c, DVec2::new(-1.0, 2.0), 0.0, &[1.0]),
        Err(Error::InvalidExtent(-1.0))
    );
    assert_eq!(
        Primitive::circle(c, -0.5, &[1.0]),
        Err(Error::InvalidExtent(-0.5))
    );
    assert!(Primitive::rectangle(c, DVec2::new(1.0, f64::NAN), &[1.0]).is_err());
    assert!(Primitive::circle(c, f64::INFINITY, &[1.0]).is_err());
}

#[test]
fn constructors_reject_non_finite_geometry_and_empty_colour() {
    assert_eq!(
        Primitive::point(DVec2::new(f64::NAN, 0.0), &[1.0]),
        Err(Error::NonFiniteGeometry)
    );
    assert_eq!(
        Primitive::ellipse(DVec2::ZERO, DVec2::ONE, f64::INFINITY, &[1.0]),
        Err(Error::NonFiniteGeometry)
    );
    assert_eq!(
        Primitive::point(DVec2::ZERO, &[]),
        Err(Error::EmptyColour)
    );
}

#[test]
fn zero_extents_are_valid() {
    let rect = Primitive::rectangle(DVec2::new(3.0, 3.0), DVec2::ZERO, &[9.0]).unwrap();
    assert_eq!(rect.axes_length(), DVec2::ZERO);
}

#[test]
fn axes_length_per_kind() {
    let ellipse = Primitive::ellipse(DVec2::ZERO, DVec2::new(4.0, 2.0), 30.0, &[1.0]).unwrap();
    let circle = Primitive::circle(DVec2::ZERO, 5.0, &[1.0]).unwrap();
    let rect = Primitive::rectangle(DVec2::ZERO, DVec2::new(3.0, 1.0), &[1.0]).unwrap();
    let point = Primitive::point(DVec2::ZERO, &[1.0]).unwrap();

    assert_eq!(ellipse.axes_length(), DVec2::new(4.0, 2.0));
    assert_eq!(circle.axes_length(), DVec2::new(5.0, 5.0));
    assert_eq!(rect.axes_length(), DVec2::new(3.0, 1.0));
    assert_eq!(point.axes_length(), DVec2::ZERO);

    assert_eq!(ellipse.kind(), ShapeKind::Ellipse);
    assert_eq!(circle.kind(), ShapeKind::Circle);
    assert_eq!(rect.kind(), ShapeKind::Rectangle);
    assert_eq!(point.kind(), ShapeKind::Point);
}

#[test]
fn angle_is_wrapped_into_full_turn() {
    let make = |angle| {
        Primitive::ellipse(DVec2::ZERO, DVec2::ONE, angle, &[1.0])
            .unwrap()
            .angle()
    };
    assert_eq!(make(0.0), 0.0);
    assert_eq!(make(360.0), 0.0);
    assert_eq!(make(370.0), 10.0);
    assert_eq!(make(-90.0), 270.0);
    assert!(make(-1e-20) < 360.0);
}

#[test]
fn angle_is_zero_for_unrotated_kinds() {
    let rect = Primitive::rectangle(DVec2::ZERO, DVec2::ONE, &[1.0]).unwrap();
    assert_eq!(rect.angle(), 0.0);
}

#[test]
fn resolution_factor_defaults_to_one_and_validates() {
    let point = Primitive::point(DVec2::ZERO, &[1.0]).unwrap();
    assert_eq!(point.resolution_factor(), 1.0);

    let scaled = point.clone().with_resolution_factor(4.0).unwrap();
    assert_eq!(scaled.resolution_factor(), 4.0);

    assert_eq!(
        point.clone().with_resolution_factor(0.0),
        Err(Error::InvalidResolutionFactor(0.0))
    );
    assert!(point.with_resolution_factor(f64::NAN).is_err());
}

#[test]
fn display_lists_fields() {
    let ellipse =
        Primitive::ellipse(DVec2::new(50.0, 40.0), DVec2::new(10.0, 5.0), 45.0, &[255.0]).unwrap();
    assert_eq!(
        ellipse.to_string(),
        "Ellipse center=(50, 40) axes=(10, 5) angle=45 colour=[255.0]"
    );
}

#[test]
fn serializes_for_diagnostics() {
    let circle = Primitive::circle(DVec2::new(1.0, 2.0), 3.0, &[10.0, 20.0, 30.0]).unwrap();
    let json = serde_json::to_value(&circle).unwrap();

    assert_eq!(json["shape"]["Circle"]["radius"], 3.0);
    assert_eq!(json["center"], serde_json::json!([1.0, 2.0]));
    assert_eq!(json["colour"], serde_json::json!([10.0, 20.0, 30.0]));
    assert_eq!(json["resolution_factor"], 1.0);
}

#[test]
fn trace_dump_does_not_panic() {
    crate::test_utils::init_tracing();
    let point = Primitive::point(DVec2::new(1.0, 1.0), &[1.0]).unwrap();
    point.trace_dump();
}
