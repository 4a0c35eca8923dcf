pub mod configuration;
pub mod observer;
pub mod simulation;

pub use simulation::states::{Body, NVec3, System};
pub use simulation::forces::{
    AccelSet, Acceleration, NewtonianGravity, QuadraticDrag, UniformGravity,
};
pub use simulation::integrator::{euler_integrator, verlet_integrator};
pub use simulation::params::Parameters;
pub use simulation::engine::{Convergence, Engine, ModelKind, StopRule};
pub use simulation::error::SimError;
pub use simulation::trajectory::{
    absolute_residuals, central_gradient, relative_residuals, Track,
};
pub use simulation::drag::{run_drag, BodyRecord, DragModel, DragOutcome};
pub use simulation::orbit::{pair_energies, run_two_body, EnergyBreakdown, OrbitOutcome};
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    BodyConfig, EngineConfig, ModelConfig, ParametersConfig, ScenarioConfig,
};

pub use observer::{NullObserver, StepObserver, TrailObserver};
