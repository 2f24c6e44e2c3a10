//! # Quantum
//! src/quantum.rs
//!
//! Máximo de unidades de tiempo que un proceso corre antes de ser
//! desalojado. La coerción desde un valor numérico crudo es explícita:
//! se trunca (floor) con mínimo 1, y NaN, infinito o valores <= 0 se
//! rechazan como entrada inválida.

use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantum de tiempo, siempre >= 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Quantum(u64);

impl Quantum {
    /// Crea un quantum a partir de un entero; 0 es inválido
    pub fn new(units: u64) -> SimResult<Self> {
        if units == 0 {
            return Err(SimError::invalid("quantum must be >= 1"));
        }
        Ok(Quantum(units))
    }

    /// Coerce un valor crudo (por ejemplo, leído de la CLI)
    ///
    /// # Ejemplo
    /// ```rust
    /// use rr_simulator::Quantum;
    ///
    /// assert_eq!(Quantum::coerce(2.9).unwrap().get(), 2);
    /// assert_eq!(Quantum::coerce(0.5).unwrap().get(), 1);
    /// assert!(Quantum::coerce(0.0).is_err());
    /// ```
    pub fn coerce(raw: f64) -> SimResult<Self> {
        if !raw.is_finite() {
            return Err(SimError::invalid(format!("quantum must be a finite number, got {}", raw)));
        }
        if raw <= 0.0 {
            return Err(SimError::invalid(format!("quantum must be positive, got {}", raw)));
        }
        // raw > 0 y finito: el floor cabe en u64 salvo valores absurdos, que se saturan
        let units = raw.floor() as u64;
        Ok(Quantum(units.max(1)))
    }

    /// Valor en unidades de tiempo
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for Quantum {
    type Error = SimError;

    fn try_from(units: u64) -> SimResult<Self> {
        Quantum::new(units)
    }
}

impl From<Quantum> for u64 {
    fn from(q: Quantum) -> u64 {
        q.0
    }
}

impl fmt::Display for Quantum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
