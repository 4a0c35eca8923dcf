//! Build fully-initialized runs from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! engine settings, numerical parameters, system state at t = 0, and the
//! force set matching the selected model. All input validation happens here,
//! so malformed scenarios fail with a descriptive error before any stepping.

use crate::configuration::config::{BodyConfig, ModelConfig, ScenarioConfig};
use crate::simulation::engine::{Convergence, Engine, ModelKind, StopRule};
use crate::simulation::error::SimError;
use crate::simulation::forces::{AccelSet, NewtonianGravity, QuadraticDrag, UniformGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// Runtime bundle for one run: engine settings, parameters, current system
/// state, and the set of active force laws. Built once per scenario and
/// consumed by the run loops.
#[derive(Debug)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Parameters (runtime) from ParametersConfig, checked up front.
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            h0: positive_finite("h0", p_cfg.h0)?,
            max_iter: p_cfg.max_iter,
            g: p_cfg.g,
            rho: p_cfg.rho,
            cd: p_cfg.cd,
            G: p_cfg.G,
            eps2: p_cfg.eps2,
        };
        if parameters.max_iter == 0 {
            return Err(SimError::InvalidParameter(
                "max_iter must be at least 1".into(),
            ));
        }

        let model = match cfg.engine.model {
            ModelConfig::DragFall => ModelKind::DragFall,
            ModelConfig::TwoBody => ModelKind::TwoBody,
        };

        // Model-specific constant checks. The fall model divides by the drag
        // factor, the orbit model scales by G.
        match model {
            ModelKind::DragFall => {
                positive_finite("g", parameters.g)?;
                positive_finite("rho", parameters.rho)?;
                positive_finite("cd", parameters.cd)?;
            }
            ModelKind::TwoBody => {
                positive_finite("G", parameters.G)?;
            }
        }

        // Bodies: map BodyConfig -> runtime Body using nalgebra vectors.
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| build_body(i, bc, model))
            .collect::<Result<Vec<_>, _>>()?;

        if model == ModelKind::TwoBody && bodies.len() != 2 {
            return Err(SimError::BodyCount {
                expected: 2,
                actual: bodies.len(),
            });
        }
        if bodies.is_empty() {
            return Err(SimError::InvalidParameter(
                "scenario defines no bodies".into(),
            ));
        }

        // Initial system state: bodies at t = 0.
        let system = System { bodies, t: 0.0 };

        // Stop rule: an explicit floor wins, a tolerance selects the robust
        // terminal check, neither selects the rounded heuristic.
        let stop = match (cfg.engine.floor, cfg.engine.tolerance) {
            (Some(_), Some(_)) => {
                return Err(SimError::InvalidParameter(
                    "floor and tolerance are mutually exclusive stop rules".into(),
                ))
            }
            (Some(floor), None) => StopRule::Floor(floor),
            (None, Some(eps)) => StopRule::Terminal(Convergence::Tolerance(positive_finite(
                "tolerance",
                eps,
            )?)),
            (None, None) => StopRule::Terminal(Convergence::Rounded),
        };

        let engine = Engine { model, stop };

        // Forces: the fall model combines constant gravity with quadratic
        // drag, the orbit model uses pairwise attraction alone.
        let forces = match model {
            ModelKind::DragFall => AccelSet::new()
                .with(UniformGravity { g: parameters.g })
                .with(QuadraticDrag {
                    rho: parameters.rho,
                    cd: parameters.cd,
                }),
            ModelKind::TwoBody => AccelSet::new().with(NewtonianGravity {
                G: parameters.G,
                eps2: parameters.eps2,
            }),
        };

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
        })
    }
}

fn build_body(index: usize, bc: &BodyConfig, model: ModelKind) -> Result<Body, SimError> {
    if !(bc.m > 0.0) || !bc.m.is_finite() {
        return Err(SimError::InvalidBody {
            index,
            reason: format!("mass must be positive and finite, got {}", bc.m),
        });
    }
    // The fall model needs a real cross section; the orbit model only uses
    // the radius as a softening core and accepts zero.
    if model == ModelKind::DragFall && !(bc.radius > 0.0) {
        return Err(SimError::InvalidBody {
            index,
            reason: format!("radius must be positive for a falling sphere, got {}", bc.radius),
        });
    }
    if !(bc.radius >= 0.0) || !bc.radius.is_finite() {
        return Err(SimError::InvalidBody {
            index,
            reason: format!("radius must be non-negative and finite, got {}", bc.radius),
        });
    }

    Ok(Body {
        x: component_vector(index, "x", &bc.x)?,
        v: component_vector(index, "v", &bc.v)?,
        m: bc.m,
        radius: bc.radius,
    })
}

fn component_vector(index: usize, name: &str, comps: &[f64]) -> Result<NVec3, SimError> {
    if comps.len() != 3 {
        return Err(SimError::InvalidBody {
            index,
            reason: format!("{name} needs 3 components, got {}", comps.len()),
        });
    }
    Ok(NVec3::new(comps[0], comps[1], comps[2]))
}

fn positive_finite(name: &str, value: f64) -> Result<f64, SimError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::InvalidParameter(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}
