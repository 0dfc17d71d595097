//! Core constants, unit helpers, and sampling grids shared across the Physics Explorer workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Newtonian constant of gravitation (m³/(kg·s²)).
    pub const G_M3_KG_S2: f64 = 6.674_30e-11;
    /// Solar mass (kg).
    pub const M_SUN_KG: f64 = 1.989e30;
    /// Planck constant (J·s).
    pub const PLANCK_J_S: f64 = 6.626_070_15e-34;
    /// Speed of light used by the explorer (m/s), rounded to 3e8.
    pub const SPEED_OF_LIGHT_M_S: f64 = 3.0e8;
    /// Rydberg constant for hydrogen (1/m).
    pub const RYDBERG_PER_M: f64 = 1.097e7;
    /// Standard gravity at Earth's surface (m/s²), rounded to 9.81.
    pub const EARTH_GRAVITY_M_S2: f64 = 9.81;
    /// Metres per astronomical unit.
    pub const AU_M: f64 = 1.495_978_707e11;
    /// Seconds per Julian year.
    pub const SECONDS_PER_YEAR: f64 = 31_557_600.0;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::{AU_M, SECONDS_PER_YEAR};

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(deg: f64) -> f64 {
        deg.to_radians()
    }

    /// Convert astronomical units to metres.
    #[inline]
    pub fn au_to_m(v: f64) -> f64 {
        v * AU_M
    }

    /// Convert metres to nanometres.
    #[inline]
    pub fn m_to_nm(v: f64) -> f64 {
        v * 1.0e9
    }

    /// Convert seconds to Julian years.
    #[inline]
    pub fn seconds_to_years(seconds: f64) -> f64 {
        seconds / SECONDS_PER_YEAR
    }
}

/// Evenly spaced sampling grids.
pub mod sampling {
    /// `n` evenly spaced values over `[start, end]`, both ends included.
    ///
    /// `n == 1` yields `[start]`; `n == 0` yields an empty grid.
    pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (end - start) / (n - 1) as f64;
                let mut grid: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
                // pin the endpoint so closed curves wrap exactly
                if let Some(last) = grid.last_mut() {
                    *last = end;
                }
                grid
            }
        }
    }

}
