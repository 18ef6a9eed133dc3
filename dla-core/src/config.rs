use crate::error::GrowError;

/// Growth parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Escape margin: walkers straying past `radius + dr` are respawned,
    /// and the boundary re-expands whenever a stuck cell comes within
    /// `dr` of it.
    pub dr: i32,
    /// Optional cap on move steps per walk; `None` means unbounded.
    pub max_walk_steps: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dr: 15,
            max_walk_steps: None,
        }
    }
}

impl Config {
    /// Checks that the configuration describes a usable simulation.
    pub fn validate(&self) -> Result<(), GrowError> {
        if self.dr < 1 {
            return Err(GrowError::InvalidConfig {
                reason: format!("dr must be positive, got {}", self.dr),
            });
        }
        Ok(())
    }

    /// Spawn radius of a freshly seeded cluster.
    pub fn initial_radius(&self) -> f32 {
        (1 + self.dr) as f32
    }
}
