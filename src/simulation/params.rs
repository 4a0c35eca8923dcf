//! Numerical and physical parameters for a run.
//!
//! `Parameters` holds the fixed step size, the iteration ceiling that bounds
//! every loop, and the physical constants. It is built once from the scenario
//! configuration and passed into the core by reference, so tests can vary
//! the physics without touching any global state.

#[derive(Debug, Clone)]
#[allow(non_snake_case)]
pub struct Parameters {
    pub h0: f64, // step size
    pub max_iter: usize, // hard bound on integration steps
    pub g: f64, // gravitational acceleration at the surface
    pub rho: f64, // air density
    pub cd: f64, // drag coefficient
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening floor for pairwise gravity
}
