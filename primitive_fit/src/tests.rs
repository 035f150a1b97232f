//! End-to-end checks of one search step: score, gate, accept.

use crate::prelude::*;
use crate::test_utils::{covered_pixels, gray, init_tracing};

const THRESHOLD: f64 = 1000.0;

fn ellipse_at(x: f64, y: f64) -> Primitive {
    Primitive::ellipse(DVec2::new(x, y), DVec2::new(10.0, 10.0), 0.0, &[255.0]).unwrap()
}

#[test]
fn matching_candidate_becomes_first_optimum() {
    init_tracing();

    let candidate = ellipse_at(50.0, 50.0);
    let mut patch = gray(100, 100);
    render(&mut patch, &candidate, CoordinateMode::Absolute).unwrap();

    let approximation = test_approximation(&patch, &candidate).unwrap();
    assert_eq!(approximation.fit_error, 0.0);
    assert!(!crate::is_blocked(
        approximation.fit_error,
        &candidate,
        None,
        THRESHOLD
    ));
}

#[test]
fn neighbouring_candidate_is_blocked_as_duplicate() {
    let optimum = ellipse_at(50.0, 50.0);
    let candidate = ellipse_at(55.0, 50.0);

    assert_eq!(crate::mean_radius(&candidate), 10.0);
    assert_eq!(candidate.center().distance_squared(optimum.center()), 25.0);
    assert!(overlaps(&candidate, &optimum));
    assert!(crate::is_blocked(1.0, &candidate, Some(&optimum), THRESHOLD));
}

#[test]
fn remote_candidate_is_a_new_detection() {
    let optimum = ellipse_at(50.0, 50.0);
    let candidate = ellipse_at(90.0, 90.0);

    assert_eq!(candidate.center().distance_squared(optimum.center()), 3200.0);
    assert!(!overlaps(&candidate, &optimum));
    assert!(!crate::is_blocked(1.0, &candidate, Some(&optimum), THRESHOLD));
}

#[test]
fn point_on_colour_raster_touches_channel_zero() {
    let mut raster = Raster::<u8>::new_filled(10, 10, &[1, 2, 3]).unwrap();
    let point = Primitive::point(DVec2::new(4.0, 4.0), &[255.0, 255.0, 255.0]).unwrap();
    render(&mut raster, &point, CoordinateMode::Absolute).unwrap();

    assert_eq!(raster.pixel(4, 4), &[255, 2, 3]);
}

#[test]
fn zero_rectangle_paints_at_most_one_pixel() {
    let rect = Primitive::rectangle(DVec2::new(5.0, 5.0), DVec2::ZERO, &[255.0]).unwrap();
    let mut raster = gray(10, 10);
    render(&mut raster, &rect, CoordinateMode::Absolute).unwrap();

    assert!(covered_pixels(&raster) <= 1);
}

#[test]
fn coarse_level_detection_maps_to_full_resolution() {
    // found on a half-resolution level of the pyramid
    let coarse = ellipse_at(25.0, 25.0).with_resolution_factor(2.0).unwrap();
    let canonical = coarse.to_canonical();
    assert_eq!(canonical.center(), DVec2::new(50.0, 50.0));
    assert_eq!(canonical.axes_length(), DVec2::new(20.0, 20.0));
    assert_eq!(normalize(&coarse, 2.0).unwrap().center(), canonical.center());

    let mut full = gray(100, 100);
    render(&mut full, &canonical, CoordinateMode::Absolute).unwrap();
    assert_eq!(test_approximation(&full, &canonical).unwrap().fit_error, 0.0);
}
