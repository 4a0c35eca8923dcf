//! Core state types for the point-mass demos.
//!
//! A `System` holds the list of bodies and the current simulation time `t`.
//! Positions and velocities are 3-vectors; the drag model only moves bodies
//! along the fall axis but keeps full vectors so gravity and drag share one
//! representation.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass
    pub radius: f64, // cross-section radius (drag) or softening core (gravity)
}

impl Body {
    /// Speed `|v|`.
    pub fn speed(&self) -> f64 {
        self.v.norm()
    }

    /// Cross-sectional area of the sphere, `pi * radius^2`.
    pub fn cross_section(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    /// Kinetic energy `0.5 * m * |v|^2`.
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // time
}

impl System {
    /// Mass-weighted barycenter of all bodies.
    /// Assumes at least one body; total mass is positive by construction.
    pub fn barycenter(&self) -> NVec3 {
        let mut weighted = NVec3::zeros();
        let mut total_mass = 0.0;
        for b in &self.bodies {
            weighted += b.m * b.x;
            total_mass += b.m;
        }
        weighted / total_mass
    }
}
