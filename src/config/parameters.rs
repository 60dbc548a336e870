//! Force parameter structures.
//!
//! The default coefficients are Case I of Farhadifar et al., the reference
//! parameter regime for the vertex model of epithelial cell packing.
//!
//! Reference: Farhadifar et al., Curr Biol 2007

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Coefficients of the vertex-model energy functional
///
/// The tissue free energy per cell is
/// `K/2 (A - A0)^2 + Gamma/2 P^2 + sum Lambda l` over the cell's edges,
/// with area `A`, target area `A0`, perimeter `P` and edge lengths `l`.
/// All three coefficients are non-negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForceParameters {
    /// Area elasticity coefficient K
    /// Penalizes deviation of a cell's area from its target area.
    /// Source: Farhadifar et al., Curr Biol 2007 (Case I)
    pub area_elasticity: f64,

    /// Perimeter contractility coefficient Gamma
    /// Models the contractile actin-myosin ring along the cell cortex.
    /// Source: Farhadifar et al., Curr Biol 2007 (Case I)
    pub perimeter_contractility: f64,

    /// Line tension coefficient Lambda
    /// Energetic cost per unit length of cell-cell and cell-boundary
    /// interfaces.
    /// Source: Farhadifar et al., Curr Biol 2007 (Case I)
    pub line_tension: f64,
}

impl ForceParameters {
    /// Load from JSON file or return defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(params) => {
                    log::info!("Loaded force parameters from {:?}", path.as_ref());
                    params
                }
                Err(e) => {
                    log::warn!("Failed to parse force parameters: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Force parameters file not found, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for ForceParameters {
    fn default() -> Self {
        Self {
            // Farhadifar et al. 2007, Case I
            area_elasticity: 1.0,
            perimeter_contractility: 0.04,
            line_tension: 0.12,
        }
    }
}
