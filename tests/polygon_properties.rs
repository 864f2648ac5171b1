use std::f64::consts::{FRAC_PI_2, TAU};

use hexagon_pfp::{generate, Point2D, PolygonRequest};
use kurbo::Shape;

const EPS: f64 = 1e-9;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_point(p: Point2D, angle: f64) {
    assert!(
        (p.x - angle.cos()).abs() < EPS && (p.y - angle.sin()).abs() < EPS,
        "{:?} is not at {} rad",
        p,
        angle
    );
}

#[test]
fn sharp_polygons_sit_on_the_unit_circle() {
    init();
    for sides in 3..=16u32 {
        let p = generate(sides, 0.0, 0.0).unwrap();
        assert_eq!(p.bounds, 1.0);
        for (i, end) in p.endpoints().enumerate() {
            let angle = TAU * (i + 1) as f64 / sides as f64 - FRAC_PI_2;
            assert_point(end, angle);
            assert!((end.to_vec2().hypot() - 1.0).abs() < EPS);
        }
    }
}

#[test]
fn view_box_is_square_around_origin() {
    init();
    for sides in 3..=10 {
        for &rotation in &[0.0, 0.13, 0.5, 0.99] {
            for &smoothness in &[0.0, 0.25, 0.5, 0.75, 1.0] {
                let p = generate(sides, rotation, smoothness).unwrap();
                assert!(p.bounds >= 1.0);
                assert_eq!(p.width, 2.0 * p.bounds);
                assert_eq!(p.height, 2.0 * p.bounds);
                assert_eq!(p.x, -p.bounds);
                assert_eq!(p.y, -p.bounds);
            }
        }
    }
}

#[test]
fn generation_is_deterministic() {
    let a = generate(7, 0.31, 0.66).unwrap();
    let b = generate(7, 0.31, 0.66).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.d(), b.d());
}

#[test]
fn one_full_rotation_shifts_by_one_sector() {
    for sides in 3..=10u32 {
        let a = generate(sides, 0.2, 0.6).unwrap();
        let b = generate(sides, 1.2, 0.6).unwrap();
        assert_eq!(a.bounds, b.bounds);
        assert!((b.start.x - a.segments[0].end.x).abs() < EPS);
        assert!((b.start.y - a.segments[0].end.y).abs() < EPS);
        let n = sides as usize;
        for i in 0..n {
            let (sa, sb) = (a.segments[(i + 1) % n], b.segments[i]);
            for (pa, pb) in [(sa.c1, sb.c1), (sa.c2, sb.c2), (sa.end, sb.end)] {
                assert!((pa - pb).hypot() < EPS, "segment {} differs", i);
            }
        }
    }
}

#[test]
fn hexagon_scenario() {
    let p = generate(6, 0.0, 0.0).unwrap();
    assert_eq!(p.sides(), 6);
    assert_eq!(p.bounds, 1.0);
    assert_eq!(p.view_box(), "-1 -1 2 2");
    assert_eq!(p.d().matches('C').count(), 6);
}

#[test]
fn rounded_triangle_bulges_past_unit_circle() {
    let p = generate(3, 0.0, 1.0).unwrap();
    assert!(p.bounds > 1.0);
}

#[test]
fn decagon_scenario() {
    let p = PolygonRequest {
        sides: 10,
        rotation: 0.5,
        smoothness: 0.5,
    }
    .generate()
    .unwrap();
    assert_eq!(p.segments.len(), 10);
    assert_point(p.start, 0.5 * TAU / 10.0 - FRAC_PI_2);
}

#[test]
fn smoothing_never_shrinks_the_bounds() {
    for sides in 3..=10 {
        let sharp = generate(sides, 0.3, 0.0).unwrap().bounds;
        for step in 0..=20 {
            let b = generate(sides, 0.3, step as f64 / 20.0).unwrap().bounds;
            assert!(
                b >= sharp,
                "bounds dropped below {} at sides={} step={}",
                sharp,
                sides,
                step
            );
        }
    }
}

fn exact_extent(sides: u32, rotation: f64, smoothness: f64) -> (f64, f64) {
    let p = generate(sides, rotation, smoothness).unwrap();
    let bbox = p.to_bez_path().bounding_box();
    let extent = [bbox.x0, bbox.y0, bbox.x1, bbox.y1]
        .iter()
        .fold(0f64, |m, v| m.max(v.abs()));
    (extent, p.bounds)
}

#[test]
fn sampled_bounds_can_fall_short_of_the_curve() {
    let (extent, bounds) = exact_extent(7, 0.0, 1.0);
    assert!((extent - 1.1834).abs() < 1e-3, "extent {}", extent);
    assert!((bounds - 1.1585).abs() < 1e-3, "bounds {}", bounds);
    assert!(extent > bounds);
}

#[test]
fn sampled_bounds_stay_close_to_the_curve() {
    for sides in 3..=10 {
        for step in 0..=10 {
            let (extent, bounds) = exact_extent(sides, 0.0, step as f64 / 10.0);
            assert!(
                extent - bounds < 0.05,
                "sides={} step={} extent {} bounds {}",
                sides,
                step,
                extent,
                bounds
            );
        }
    }
}

#[test]
fn fewer_than_three_sides_is_an_error() {
    init();
    assert!(generate(2, 0.0, 0.5).is_err());
    let degenerate = PolygonRequest {
        sides: 0,
        rotation: 0.0,
        smoothness: 0.0,
    };
    assert!(degenerate.generate().is_err());
}
