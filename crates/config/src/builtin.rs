use crate::ParameterSpec;

pub(crate) fn topics() -> Vec<(&'static str, Vec<ParameterSpec>)> {
    use ParameterSpec as P;

    vec![
        (
            "projectile",
            vec![
                P::new("velocity", "Initial Velocity", "m/s", 1.0, 100.0, 20.0),
                P::new("angle", "Launch Angle", "deg", 1.0, 89.0, 45.0),
            ],
        ),
        (
            "free-fall",
            vec![P::new("height", "Initial Height", "m", 1.0, 100.0, 10.0)],
        ),
        (
            "shm",
            vec![
                P::new("period", "Time Period", "s", 1.0, 10.0, 5.0),
                P::new("amplitude", "Amplitude", "m", 1.0, 10.0, 3.0),
            ],
        ),
        (
            "orbit",
            vec![
                P::new("semi-major-axis", "Semi-Major Axis", "AU", 0.5, 2.0, 1.0),
                P::new("eccentricity", "Eccentricity", "", 0.0, 0.9, 0.0167),
            ],
        ),
        (
            "energy-transition",
            vec![
                P::new("n-initial", "Initial Energy Level (n)", "", 1.0, 5.0, 2.0),
                P::new("n-final", "Final Energy Level (n)", "", 1.0, 5.0, 1.0),
            ],
        ),
        (
            "photon-energy",
            vec![P::new(
                "frequency-exponent",
                "Frequency of Light (10^x Hz)",
                "",
                12.0,
                16.0,
                14.0,
            )],
        ),
        (
            "mass-energy",
            vec![P::new("mass", "Mass", "kg", 1.0e-6, 10.0, 1.0)],
        ),
        (
            "stress-strain",
            vec![
                P::new("force", "Applied Force", "N", 1.0, 1000.0, 100.0),
                P::new("area", "Cross-Sectional Area", "m²", 0.0001, 1.0, 0.01),
                P::new("length", "Original Length", "m", 0.1, 10.0, 1.0),
                P::new("extension", "Extension", "m", 0.0001, 1.0, 0.01),
            ],
        ),
        (
            "entropy",
            vec![
                P::new("heat", "Heat Transferred", "J", 1.0, 10_000.0, 1000.0),
                P::new("t-initial", "Initial Temperature", "K", 1.0, 1000.0, 300.0),
                P::new("t-final", "Final Temperature", "K", 1.0, 2000.0, 600.0),
            ],
        ),
        (
            "centripetal",
            vec![
                P::new("mass", "Mass", "kg", 0.1, 100.0, 1.0),
                P::new("radius", "Radius", "m", 0.1, 100.0, 5.0),
                P::new("velocity", "Velocity", "m/s", 0.1, 100.0, 10.0),
            ],
        ),
        (
            "lens",
            vec![
                P::new("focal-length", "Focal Length", "m", -1.0, 1.0, 0.1),
                P::new("object-distance", "Object Distance", "m", -5.0, 5.0, 0.3),
            ],
        ),
    ]
}
