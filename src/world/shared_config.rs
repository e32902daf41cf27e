use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::SimulationConfig;

/// Config handle shared between the host's controls and the frame loop.
///
/// Writers always store a sanitized copy; the frame loop takes a snapshot
/// once per tick so a change lands on the next tick, never mid-step.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<SimulationConfig>>,
}

impl SharedConfig {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config.sanitized())),
        }
    }

    /// Copy of the config as it is right now.
    pub fn current(&self) -> SimulationConfig {
        *self.inner.read()
    }

    pub fn set(&self, config: SimulationConfig) {
        *self.inner.write() = config.sanitized();
    }

    /// Applies `f` to the stored config and sanitizes the result.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut SimulationConfig),
    {
        let mut guard = self.inner.write();
        f(&mut guard);
        *guard = guard.sanitized();
    }

    pub fn set_speed(&self, speed: f64) {
        self.update(|config| config.speed_multiplier = speed);
    }
}

impl From<SimulationConfig> for SharedConfig {
    fn from(config: SimulationConfig) -> Self {
        Self::new(config)
    }
}
