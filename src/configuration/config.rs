//! Configuration types for loading scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! run. A scenario consists of:
//!
//! - [`EngineConfig`]     – model selection and fall stop rule
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example fall scenario matching these types:
//!
//! ```yaml
//! engine:
//!   model: "drag_fall"      # or "two_body"
//!   floor: -440.0           # stop below this altitude; omit to stop at
//!                           # terminal velocity instead
//!   # tolerance: 0.5        # terminal-velocity band; omit for the rounded check
//!
//! parameters:
//!   h0: 0.01                # fixed step size
//!   max_iter: 20000         # hard bound on steps
//!   g: 9.81                 # defaults shown; all constants may be omitted
//!   rho: 1.225
//!   cd: 0.5
//!   G: 6.6743e-11
//!   eps2: 0.0
//!
//! bodies:
//!   - x: [ 0.0, 0.0, 0.0 ]
//!     v: [ 0.0, 0.0, 0.0 ]
//!     m: 7.26
//!     radius: 0.10915
//! ```
//!
//! The engine maps this configuration into its runtime scenario
//! representation and rejects malformed values with a descriptive error.

use serde::Deserialize;

/// Which physical model the scenario runs.
/// `model: "drag_fall"` or `model: "two_body"`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelConfig {
    #[serde(rename = "drag_fall")] // falling spheres, explicit Euler
    DragFall,

    #[serde(rename = "two_body")] // mutual gravitation, velocity Verlet
    TwoBody,
}

/// High-level engine configuration.
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub model: ModelConfig, // which force law and integration scheme to run
    pub floor: Option<f64>, // fall-axis altitude that ends a fall run
    pub tolerance: Option<f64>, // terminal-velocity band; omitted = rounded check
}

/// Global numerical and physical parameters for a scenario.
/// The physical constants default to standard sea-level values.
#[derive(Deserialize, Debug, Clone)]
#[allow(non_snake_case)]
pub struct ParametersConfig {
    pub h0: f64, // step size
    pub max_iter: usize, // hard bound on integration steps
    #[serde(default = "default_g")]
    pub g: f64, // gravitational acceleration
    #[serde(default = "default_rho")]
    pub rho: f64, // air density
    #[serde(default = "default_cd")]
    pub cd: f64, // drag coefficient of a sphere
    #[serde(default = "default_big_g")]
    pub G: f64, // gravitational constant
    #[serde(default)]
    pub eps2: f64, // softening floor for pairwise gravity
}

fn default_g() -> f64 {
    9.81
}

fn default_rho() -> f64 {
    1.225
}

fn default_cd() -> f64 {
    0.5
}

fn default_big_g() -> f64 {
    6.67430e-11
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position, 3 components
    pub v: Vec<f64>, // initial velocity, 3 components
    pub m: f64, // mass
    pub radius: f64, // cross-section radius (fall) or softening core (orbit)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // model selection and stop rule
    pub parameters: ParametersConfig, // numerical parameters and constants
    pub bodies: Vec<BodyConfig>, // initial state of the system
}
