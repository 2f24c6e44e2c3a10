//! # Traza
//! src/sim/trace.rs
//!
//! Una `TraceStep` por unidad de tiempo simulada.

use super::process::Ticks;
use serde::{Deserialize, Serialize};

/// Estado del sistema durante una unidad de tiempo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    /// Valor del reloj al inicio de la unidad
    pub time: Ticks,

    /// Proceso en CPU; `None` (null en JSON) si la CPU estuvo ociosa
    pub running: Option<String>,

    /// Cola de listos, cabeza primero, sin incluir al proceso en CPU
    pub ready: Vec<String>,
}

impl TraceStep {
    pub fn busy(time: Ticks, running: &str, ready: Vec<String>) -> Self {
        Self {
            time,
            running: Some(running.to_string()),
            ready,
        }
    }

    pub fn idle(time: Ticks) -> Self {
        Self {
            time,
            running: None,
            ready: Vec::new(),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.running.is_none()
    }

    /// Etiqueta del proceso en CPU, "idle" si no hay ninguno
    pub fn running_label(&self) -> &str {
        self.running.as_deref().unwrap_or("idle")
    }
}
