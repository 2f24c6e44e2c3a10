//! # Simulación Round-Robin
//! src/sim/mod.rs
//!
//! Punto de entrada del motor. `simulate` es una función pura de
//! (procesos, quantum): la misma entrada produce siempre la misma traza
//! y las mismas estadísticas.
//!
//! ## Componentes
//!
//! - `admission`: admite llegadas a la cola de listos
//! - `stepper`: reloj, cola de listos y despacho por quantum
//! - `stats`: turnaround, espera y totales
//!
//! ## Ejemplo de uso
//!
//! ```rust
//! use rr_simulator::{simulate, ProcessSpec, Quantum};
//!
//! let procs = vec![ProcessSpec::new("P1", 0, 4), ProcessSpec::new("P2", 1, 3)];
//! let sim = simulate(&procs, Quantum::new(2).unwrap()).unwrap();
//! assert_eq!(sim.totals.busy_time, 7);
//! assert_eq!(sim.avg_wait, 2.5);
//! ```

pub mod admission;
pub mod process;
pub mod stats;
pub mod stepper;
pub mod trace;

pub use admission::ArrivalTimeline;
pub use process::{validate_specs, ProcessSpec, ProcessState, ProcessStatus, Ticks};
pub use stats::{Stat, Totals};
pub use stepper::SimContext;
pub use trace::TraceStep;

use crate::error::SimResult;
use crate::quantum::Quantum;
use tracing::info;

/// Resultado inmutable de una corrida
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    pub trace: Vec<TraceStep>,
    pub stats: Vec<Stat>,
    pub totals: Totals,
    pub avg_wait: f64,
    pub avg_turn: f64,
    /// Ids en el orden en que terminaron
    pub completion_order: Vec<String>,
}

impl Simulation {
    /// Busca las estadísticas de un proceso por id
    pub fn stat(&self, id: &str) -> Option<&Stat> {
        self.stats.iter().find(|s| s.id == id)
    }
}

/// Simula Round-Robin sobre `processes` con el `quantum` dado
///
/// Falla con `InvalidInput` si la lista está vacía, hay ids repetidos,
/// llegadas negativas o ráfagas no positivas. Nunca devuelve una traza
/// parcial.
pub fn simulate(processes: &[ProcessSpec], quantum: Quantum) -> SimResult<Simulation> {
    validate_specs(processes)?;

    let states = processes
        .iter()
        .map(ProcessState::from_spec)
        .collect::<SimResult<Vec<_>>>()?;

    let run = SimContext::new(states, quantum).run();
    let agg = stats::aggregate(&run.processes, &run.trace)?;

    info!(
        processes = processes.len(),
        quantum = quantum.get(),
        total_time = agg.totals.total_time,
        busy = agg.totals.busy_time,
        idle = agg.totals.idle_time,
        "simulation finished"
    );

    Ok(Simulation {
        trace: run.trace,
        stats: agg.stats,
        totals: agg.totals,
        avg_wait: agg.avg_wait,
        avg_turn: agg.avg_turn,
        completion_order: run.completion_order,
    })
}

/// Igual que `simulate`, pero con un quantum entero sin validar
pub fn simulate_units(processes: &[ProcessSpec], quantum: u64) -> SimResult<Simulation> {
    simulate(processes, Quantum::new(quantum)?)
}
