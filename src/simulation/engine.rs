//! High-level runtime engine settings.
//!
//! Selects which physical model a scenario runs and, for the fall model,
//! which stop rule ends the run. Built from `EngineConfig` when the scenario
//! is constructed.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    DragFall, // bodies falling under gravity plus quadratic drag, explicit Euler
    TwoBody, // mutual Newtonian attraction of two bodies, velocity Verlet
}

/// How a fall run decides that a body has reached terminal velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Convergence {
    /// Stop once the speed rounded to the nearest integer reaches the
    /// rounded terminal velocity. Integer-resolution, so the final speed can
    /// sit up to half a unit away from the exact terminal value.
    Rounded,
    /// Stop once the speed is within `eps` of terminal velocity.
    Tolerance(f64),
}

/// Stop rule for the fall model. The two policies terminate different
/// demonstrations and are not interchangeable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopRule {
    /// Integrate while the lead body is above this fall-axis coordinate.
    Floor(f64),
    /// Integrate until every body has reached its terminal velocity.
    Terminal(Convergence),
}

#[derive(Debug, Clone)]
pub struct Engine {
    pub model: ModelKind, // which force law and scheme the run uses
    pub stop: StopRule, // fall-model termination (ignored by the orbit model)
}
