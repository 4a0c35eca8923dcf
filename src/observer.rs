//! Seam for the rendering collaborator.
//!
//! The run loops notify an observer after every completed step with a
//! read-only view of the system. A renderer would move its on-screen markers
//! here; the observer never mutates simulation state.

use crate::simulation::states::{NVec3, System};

pub trait StepObserver {
    fn on_step(&mut self, sys: &System);
}

/// Observer that ignores every step.
pub struct NullObserver;

impl StepObserver for NullObserver {
    fn on_step(&mut self, _sys: &System) {}
}

/// Records each body's position after every step, the trailing path a
/// renderer would draw behind its marker.
#[derive(Debug, Clone, Default)]
pub struct TrailObserver {
    pub trails: Vec<Vec<NVec3>>,
}

impl TrailObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepObserver for TrailObserver {
    fn on_step(&mut self, sys: &System) {
        if self.trails.len() != sys.bodies.len() {
            self.trails.resize(sys.bodies.len(), Vec::new());
        }
        for (trail, b) in self.trails.iter_mut().zip(&sys.bodies) {
            trail.push(b.x);
        }
    }
}
