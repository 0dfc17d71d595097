use physics_explorer::formulas::kinematics::{projectile_motion, trajectory};
use physics_explorer::symbolic::{flight_time_formula, solve_flight_time};
use physics_explorer::symbolic::trajectory::position_at;
use physics_explorer::units::deg_to_rad;

const G: f64 = 9.81;

#[test]
fn classroom_launch_matches_reference_values() {
    let result = projectile_motion(20.0, deg_to_rad(45.0), G).expect("projectile");
    assert!((result.time_of_flight_s - 2.88).abs() < 5e-3, "{}", result.time_of_flight_s);
    assert!((result.max_height_m - 10.19).abs() < 5e-3, "{}", result.max_height_m);
    assert!((result.range_m - 40.77).abs() < 5e-3, "{}", result.range_m);
}

#[test]
fn flight_time_matches_closed_form_across_angles() {
    for v0 in [1.0, 12.5, 60.0, 100.0] {
        for deg in [1.0, 15.0, 30.0, 45.0, 60.0, 89.0] {
            let theta = deg_to_rad(deg);
            let t = solve_flight_time(v0, theta, G).expect("flight time");
            let expected = 2.0 * v0 * theta.sin() / G;
            assert!((t - expected).abs() < 1e-12, "v0={v0} deg={deg}");

            let (_, y) = position_at(v0, theta, t, G);
            assert!(y.abs() < 1e-9, "landing height {y} for v0={v0} deg={deg}");
        }
    }
}

#[test]
fn complementary_angles_share_a_range() {
    for deg in [10.0, 25.0, 40.0] {
        let low = projectile_motion(30.0, deg_to_rad(deg), G).expect("low");
        let high = projectile_motion(30.0, deg_to_rad(90.0 - deg), G).expect("high");
        assert!((low.range_m - high.range_m).abs() < 1e-9);
        assert!(high.max_height_m > low.max_height_m);
    }
}

#[test]
fn trajectory_lands_at_the_range() {
    let theta = deg_to_rad(30.0);
    let summary = projectile_motion(25.0, theta, G).expect("projectile");
    let curve = trajectory(25.0, theta, G, 100).expect("trajectory");
    assert_eq!(curve.len(), 100);

    let (x0, y0) = curve.first().expect("first sample");
    assert!(x0.abs() < 1e-12 && y0.abs() < 1e-12);
    let (x_end, y_end) = curve.last().expect("last sample");
    assert!((x_end - summary.range_m).abs() < 1e-9);
    assert!(y_end.abs() < 1e-9);

    let apex = curve.y().iter().copied().fold(f64::MIN, f64::max);
    assert!(apex <= summary.max_height_m + 1e-9);
    assert!(summary.max_height_m - apex < 0.01 * summary.max_height_m);
}

#[test]
fn derived_formula_is_shared() {
    let first = flight_time_formula();
    let second = flight_time_formula();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.describe(), "2*v0*sin(theta)/g");
}
