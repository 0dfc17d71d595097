use physics_explorer::formulas::{
    EnergyBand, FormulaError, circular, kinematics, optics, orbit, oscillation, quantum, thermo,
};

#[test]
fn free_fall_from_ten_metres() {
    let result = kinematics::free_fall(10.0, 9.81).expect("free fall");
    assert!((result.fall_time_s - 1.43).abs() < 5e-3, "{}", result.fall_time_s);
    assert!((result.final_velocity_m_s - 14.01).abs() < 5e-3);
    let energy_check = result.final_velocity_m_s.powi(2) - 2.0 * 9.81 * 10.0;
    assert!(energy_check.abs() < 1e-9);
}

#[test]
fn one_kilogram_rest_energy() {
    let energy = quantum::mass_energy(1.0).expect("mass energy");
    assert!((energy - 9.0e16).abs() < 1.0);
    assert!(matches!(
        quantum::mass_energy(0.0),
        Err(FormulaError::OutOfRange { .. })
    ));
}

#[test]
fn lyman_alpha_transition() {
    let result = quantum::energy_transition(2, 1).expect("transition");
    assert!((result.wavelength_nm - 121.5).abs() < 0.1, "{}", result.wavelength_nm);
    assert_eq!(result.band, EnergyBand::Ultraviolet);
}

#[test]
fn upward_transitions_are_domain_violations() {
    for (ni, nf) in [(1, 3), (2, 2), (3, 5)] {
        let err = quantum::energy_transition(ni, nf).expect_err("upward");
        assert!(matches!(err, FormulaError::DomainViolation { .. }));
        assert!(err.is_domain_or_singular());
    }
}

#[test]
fn photon_bands_partition_the_spectrum() {
    let infrared = quantum::photon_energy(13.0).expect("photon");
    assert_eq!(infrared.band, EnergyBand::BelowVisible);
    let ultraviolet = quantum::photon_energy(15.0).expect("photon");
    assert_eq!(ultraviolet.band, EnergyBand::Ultraviolet);
    assert!((ultraviolet.frequency_hz - 1.0e15).abs() < 1.0);
    assert_eq!(quantum::energy_band(1.0e-19), EnergyBand::Visible);
    assert_eq!(quantum::energy_band(3.0e-19), EnergyBand::Ultraviolet);
    assert_eq!(quantum::energy_band(1.0e-16), EnergyBand::XRay);
}

#[test]
fn entropy_requires_a_temperature_rise() {
    let delta = thermo::entropy_change(1000.0, 300.0, 600.0).expect("entropy");
    assert!((delta - 1000.0 * (1.0 / 300.0 - 1.0 / 600.0)).abs() < 1e-12);
    for t_final in [300.0, 200.0] {
        assert!(matches!(
            thermo::entropy_change(1000.0, 300.0, t_final),
            Err(FormulaError::DomainViolation { .. })
        ));
    }
}

#[test]
fn lens_at_focal_point_is_singular() {
    assert!(matches!(
        optics::image_distance(0.2, 0.2),
        Err(FormulaError::SingularValue { .. })
    ));
    assert!(matches!(
        optics::lens_sweep(0.2, (0.1, 0.5), 50),
        Err(FormulaError::SingularValue { .. })
    ));
}

#[test]
fn circular_orbit_keeps_a_constant_radius() {
    let curve = orbit::orbit_curve(1.5, 0.0, 360).expect("orbit");
    for (x, y) in curve.points() {
        assert!(((x * x + y * y).sqrt() - 1.5).abs() < 1e-9);
    }
    let (x0, y0) = curve.first().expect("first");
    let (xn, yn) = curve.last().expect("last");
    assert!((x0 - xn).abs() < 1e-9 && (y0 - yn).abs() < 1e-9);

    let summary = orbit::orbit(1.5, 0.0).expect("orbit summary");
    assert!((summary.perihelion_au - summary.aphelion_au).abs() < 1e-12);
}

#[test]
fn eccentric_orbits_close_and_reach_their_apsides() {
    let a = 1.2;
    for e in [0.3, 0.9] {
        let curve = orbit::orbit_curve(a, e, 360).expect("orbit");
        assert_eq!(curve.len(), 360);
        let (x0, y0) = curve.first().expect("first");
        let (xn, yn) = curve.last().expect("last");
        assert!((x0 - xn).abs() < 1e-9 && (y0 - yn).abs() < 1e-9, "e={e}");

        let summary = orbit::orbit(a, e).expect("orbit summary");
        assert!((summary.perihelion_au - a * (1.0 - e)).abs() < 1e-12);
        assert!((summary.aphelion_au - a * (1.0 + e)).abs() < 1e-12);

        // the first sample sits at perihelion, on the +x axis
        assert!((x0 - summary.perihelion_au).abs() < 1e-12 && y0.abs() < 1e-12);
        let radii: Vec<f64> = curve.points().map(|(x, y)| x.hypot(y)).collect();
        let nearest = radii.iter().copied().fold(f64::INFINITY, f64::min);
        let farthest = radii.iter().copied().fold(0.0, f64::max);
        assert!((nearest - summary.perihelion_au).abs() < 1e-12, "e={e}");
        assert!(farthest <= summary.aphelion_au + 1e-12, "e={e}");
        assert!((summary.aphelion_au - farthest) / summary.aphelion_au < 1e-3, "e={e}");
    }
}

#[test]
fn curves_have_the_requested_length() {
    for points in [2, 37, 100] {
        let lengths = [
            kinematics::trajectory(20.0, 0.7, 9.81, points).expect("trajectory").len(),
            oscillation::shm_displacement(5.0, 3.0, points).expect("shm").len(),
            orbit::orbit_curve(1.0, 0.3, points).expect("orbit").len(),
            thermo::entropy_curve(1000.0, 300.0, 600.0, points).expect("entropy").len(),
            circular::centripetal_curve(1.0, 5.0, 10.0, points).expect("centripetal").len(),
            optics::lens_curve(0.1, 0.3, points).expect("lens").len(),
        ];
        assert!(lengths.iter().all(|&len| len == points), "{lengths:?}");
    }
}

#[test]
fn shm_starts_at_full_amplitude() {
    let curve = oscillation::shm_displacement(5.0, 3.0, 100).expect("shm");
    let (t0, x0) = curve.first().expect("first");
    assert!(t0.abs() < 1e-12);
    assert!((x0 - 3.0).abs() < 1e-12);
    assert!(curve.y().iter().all(|x| x.abs() <= 3.0 + 1e-12));
}
