//! Growth models supplying per-cell target areas.
//!
//! A cell's target area is the area its current growth state "wants"; the
//! force engine reads it every evaluation and never writes it. Growth is a
//! capability: a cell either holds a model or it does not, and the force
//! engine fails fast on cells without one.

/// Capability interface: supplies a cell's current target area
///
/// The force engine only ever calls [`GrowthModel::target_area`]; advancing
/// the model in time is the simulation orchestrator's job.
pub trait GrowthModel: std::fmt::Debug {
    /// Current target area of the cell
    fn target_area(&self) -> f64;

    /// Advance the model by `dt`; no-op for time-independent targets
    fn update(&mut self, dt: f64) {
        let _ = dt;
    }
}

/// Read access to the growth model attached to each cell of a tissue
pub trait GrowthState {
    /// The growth model attached to a cell, if any
    fn growth_model(&self, cell_idx: usize) -> Option<&dyn GrowthModel>;
}

/// Target area held constant over time
#[derive(Debug, Clone)]
pub struct ConstantTargetArea {
    target_area: f64,
}

impl ConstantTargetArea {
    pub fn new(target_area: f64) -> Self {
        Self { target_area }
    }
}

impl GrowthModel for ConstantTargetArea {
    fn target_area(&self) -> f64 {
        self.target_area
    }
}

/// Target area growing linearly in time toward a division threshold
///
/// Newborn cells start at half the mature area and grow at a constant
/// rate; the target saturates at `max_target_area`, where the cell-cycle
/// machinery (external to this crate) would trigger division.
#[derive(Debug, Clone)]
pub struct AreaBasedGrowth {
    target_area: f64,
    growth_rate: f64,
    max_target_area: f64,
}

impl AreaBasedGrowth {
    pub fn new(initial_target_area: f64, growth_rate: f64, max_target_area: f64) -> Self {
        Self {
            target_area: initial_target_area,
            growth_rate,
            max_target_area,
        }
    }

    pub fn growth_rate(&self) -> f64 {
        self.growth_rate
    }

    pub fn set_growth_rate(&mut self, growth_rate: f64) {
        self.growth_rate = growth_rate;
    }
}

impl Default for AreaBasedGrowth {
    fn default() -> Self {
        Self {
            // Newborn cell at half the mature (unit) area
            target_area: 0.5,
            growth_rate: 0.1,
            max_target_area: 1.0,
        }
    }
}

impl GrowthModel for AreaBasedGrowth {
    fn target_area(&self) -> f64 {
        self.target_area
    }

    fn update(&mut self, dt: f64) {
        self.target_area = (self.target_area + self.growth_rate * dt).min(self.max_target_area);
    }
}
