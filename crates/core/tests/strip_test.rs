//! Inputs that stress the strip scan of the divide-and-conquer combine step.

#[path = "../benches/common/rng.rs"]
mod rng;

use nearpair_core::{Point, closest_pair_brute_force, closest_pair_divide_and_conquer};
use rng::XorShift64;

#[test]
fn test_dense_column_at_split_with_hidden_pair() {
    // 200 points within 2e-6 of x = 500, spaced 10 apart in y, plus a close
    // pair straddling the column between two of them.
    let mut pts: Vec<Point> = (0..200)
        .map(|k| Point::new(500.0 + (k % 3) as f64 * 1e-6, k as f64 * 10.0))
        .collect();
    pts.push(Point::new(499.995, 1005.0));
    pts.push(Point::new(500.005, 1005.004));

    let brute = closest_pair_brute_force(&pts).unwrap();
    let divide = closest_pair_divide_and_conquer(&pts).unwrap();
    assert_eq!(divide.distance, brute.distance);
    assert_eq!(divide.indices(), (200, 201));
    assert!(divide.distance < 0.011);
}

#[test]
fn test_two_interleaved_columns() {
    // Same-side neighbours are 2 apart, cross neighbours sqrt(2).
    let mut pts = Vec::new();
    for k in 0..500 {
        pts.push(Point::new(-0.5, (2 * k) as f64));
        pts.push(Point::new(0.5, (2 * k + 1) as f64));
    }
    let brute = closest_pair_brute_force(&pts).unwrap();
    let divide = closest_pair_divide_and_conquer(&pts).unwrap();
    assert_eq!(divide.distance, brute.distance);
    assert!((divide.distance - 2.0_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_wide_y_spread_near_midline() {
    let mut rng = XorShift64::new(0xFEED);
    let mut pts: Vec<Point> = (0..1000)
        .map(|_| Point::new(rng.gen_f64(-1e-3, 1e-3), rng.gen_f64(-1e6, 1e6)))
        .collect();
    // Background points far from the midline, sparse in x.
    pts.extend((0..200).map(|_| Point::new(rng.gen_f64(1e5, 1e6), rng.gen_f64(0.0, 1e6))));
    rng.shuffle(&mut pts);
    let brute = closest_pair_brute_force(&pts).unwrap();
    let divide = closest_pair_divide_and_conquer(&pts).unwrap();
    assert_eq!(divide.distance, brute.distance);
}

#[test]
fn test_tied_pairs_on_both_sides_of_split() {
    // Two pairs tie at distance 1, one of them with -0.0 against 0.0 in x.
    let pts = [
        Point::new(-3.0, 0.0),
        Point::new(-3.0, 1.0),
        Point::new(-10.0, 50.0),
        Point::new(-0.0, 10.0),
        Point::new(0.0, 11.0),
        Point::new(20.0, 80.0),
        Point::new(20.0, 95.0),
        Point::new(30.0, -40.0),
    ];
    let brute = closest_pair_brute_force(&pts).unwrap();
    let divide = closest_pair_divide_and_conquer(&pts).unwrap();
    assert_eq!(brute.distance, 1.0);
    assert_eq!(divide.distance, 1.0);
    assert_eq!(brute.indices(), (0, 1));
}
