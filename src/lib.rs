//! # RR Simulator
//! src/lib.rs
//!
//! Simulador determinista de planificación Round-Robin: dada una lista de
//! procesos y un quantum, produce una traza por unidad de tiempo y las
//! estadísticas derivadas (turnaround, espera, utilización de CPU).
//!
//! ## Arquitectura
//!
//! - `sim`: el motor (admisión, despacho por quantum, estadísticas)
//! - `quantum`: quantum validado y su regla de coerción
//! - `error`: taxonomía de errores
//! - `export`: documento JSON `{trace, stats, totals}`
//! - `report`: salida para terminal
//! - `config`: argumentos CLI
//! - `logging`: inicialización de tracing
//!
//! ## Ejemplo de uso
//!
//! ```rust
//! use rr_simulator::{simulate, ProcessSpec, Quantum};
//!
//! let procs = vec![ProcessSpec::new("P1", 0, 2), ProcessSpec::new("P2", 5, 2)];
//! let sim = simulate(&procs, Quantum::new(2).unwrap()).unwrap();
//! assert_eq!(sim.totals.idle_time, 3);
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod quantum;
pub mod report;
pub mod sim;

pub use error::{SimError, SimResult};
pub use quantum::Quantum;
pub use sim::{simulate, simulate_units, ProcessSpec, Simulation, Stat, Totals, TraceStep};
