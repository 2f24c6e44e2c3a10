//! # Procesos
//! src/sim/process.rs
//!
//! `ProcessSpec` es la entrada inmutable; `ProcessState` es el estado
//! derivado que el simulador muta durante una corrida.

use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

/// Tiempo simulado, en unidades enteras
pub type Ticks = u64;

/// Definición de un proceso tal como la entrega el llamador
///
/// Los campos numéricos son con signo para poder detectar y rechazar
/// llegadas negativas en lugar de fallar al deserializar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub id: String,
    pub arrival: i64,
    pub burst: i64,
}

impl ProcessSpec {
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
        }
    }

    /// Carga de trabajo de demostración: cinco procesos escalonados
    pub fn demo_set() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new("P1", 0, 5),
            ProcessSpec::new("P2", 2, 3),
            ProcessSpec::new("P3", 4, 4),
            ProcessSpec::new("P4", 6, 6),
            ProcessSpec::new("P5", 8, 2),
        ]
    }

    fn validate(&self) -> SimResult<()> {
        if self.id.trim().is_empty() {
            return Err(SimError::invalid("process id must not be empty"));
        }
        if self.arrival < 0 {
            return Err(SimError::invalid(format!(
                "process {} has negative arrival {}",
                self.id, self.arrival
            )));
        }
        if self.burst < 1 {
            return Err(SimError::invalid(format!(
                "process {} must have burst >= 1, got {}",
                self.id, self.burst
            )));
        }
        Ok(())
    }
}

/// Parsea `ID:ARRIVAL:BURST`, el formato de `--process`
impl FromStr for ProcessSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(format!("expected ID:ARRIVAL:BURST, got '{}'", s));
        }
        let arrival = parts[1]
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("invalid arrival '{}' in '{}'", parts[1], s))?;
        let burst = parts[2]
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("invalid burst '{}' in '{}'", parts[2], s))?;
        Ok(ProcessSpec::new(parts[0].trim(), arrival, burst))
    }
}

/// Valida la lista completa: no vacía, ids únicos, campos en rango
pub fn validate_specs(specs: &[ProcessSpec]) -> SimResult<()> {
    if specs.is_empty() {
        return Err(SimError::invalid("process list is empty"));
    }

    let mut seen = HashSet::with_capacity(specs.len());
    for spec in specs {
        spec.validate()?;
        if !seen.insert(spec.id.as_str()) {
            return Err(SimError::invalid(format!("duplicate process id {}", spec.id)));
        }
    }

    Ok(())
}

/// Estado de un proceso dentro de la simulación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    /// Todavía no llega (arrival > reloj)
    NotArrived,
    /// En la cola de listos
    Ready,
    /// Despachado, usando la CPU
    Running,
    /// Terminó; estado terminal
    Completed,
}

/// Estado derivado de un proceso durante una corrida
#[derive(Debug, Clone)]
pub struct ProcessState {
    pub id: String,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub remaining: Ticks,
    pub completion: Option<Ticks>,
    pub status: ProcessStatus,
}

impl ProcessState {
    /// Construye el estado a partir de una spec ya validada
    pub fn from_spec(spec: &ProcessSpec) -> SimResult<Self> {
        spec.validate()?;
        let arrival = spec.arrival as Ticks;
        let burst = spec.burst as Ticks;
        Ok(Self {
            id: spec.id.clone(),
            arrival,
            burst,
            remaining: burst,
            completion: None,
            status: ProcessStatus::NotArrived,
        })
    }

    /// NotArrived -> Ready (admisión) o Running -> Ready (desalojo)
    pub fn mark_ready(&mut self) {
        debug_assert!(
            matches!(self.status, ProcessStatus::NotArrived | ProcessStatus::Running),
            "process {} cannot become ready from {:?}",
            self.id,
            self.status
        );
        debug_assert!(self.remaining > 0, "process {} re-queued with no work left", self.id);
        self.status = ProcessStatus::Ready;
    }

    /// Ready -> Running (despacho)
    pub fn mark_running(&mut self) {
        debug_assert_eq!(
            self.status,
            ProcessStatus::Ready,
            "process {} dispatched while not ready",
            self.id
        );
        self.status = ProcessStatus::Running;
    }

    /// Consume una unidad de CPU
    pub fn run_unit(&mut self) {
        debug_assert_eq!(self.status, ProcessStatus::Running);
        debug_assert!(self.remaining > 0, "process {} ran past its burst", self.id);
        self.remaining -= 1;
    }

    /// Running -> Completed; la completion queda fija para siempre
    pub fn mark_completed(&mut self, clock: Ticks) {
        debug_assert_eq!(self.status, ProcessStatus::Running);
        debug_assert_eq!(self.remaining, 0);
        debug_assert!(self.completion.is_none(), "process {} completed twice", self.id);
        self.status = ProcessStatus::Completed;
        self.completion = Some(clock);
    }

    pub fn is_completed(&self) -> bool {
        self.status == ProcessStatus::Completed
    }
}
