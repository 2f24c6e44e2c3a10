//! # Configuración del Simulador
//! src/config.rs
//!
//! Argumentos CLI con fallback a variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./rr_simulator --quantum 2 -p P1:0:4 -p P2:1:3
//! ./rr_simulator --input procs.json --export rr-trace.json
//! ./rr_simulator --demo --no-trace
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! RR_QUANTUM=3 RR_INPUT=procs.json ./rr_simulator
//! ```

use crate::error::SimResult;
use crate::export;
use crate::quantum::Quantum;
use crate::sim::ProcessSpec;
use clap::Parser;
use std::path::PathBuf;

/// Configuración del simulador Round-Robin
#[derive(Debug, Clone, Parser)]
#[command(name = "rr_simulator")]
#[command(about = "Simulador determinista de planificación Round-Robin")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Quantum de tiempo; se trunca y el mínimo es 1
    #[arg(short, long, default_value = "2", env = "RR_QUANTUM", allow_negative_numbers = true)]
    pub quantum: f64,

    /// Archivo JSON con un arreglo de {id, arrival, burst}
    #[arg(short, long, env = "RR_INPUT")]
    pub input: Option<PathBuf>,

    /// Proceso en formato ID:ARRIVAL:BURST (repetible)
    #[arg(short = 'p', long = "process")]
    pub processes: Vec<ProcessSpec>,

    /// Usa la carga de demostración de cinco procesos
    #[arg(long)]
    pub demo: bool,

    /// Archivo donde exportar {trace, stats, totals}
    #[arg(short, long, env = "RR_EXPORT")]
    pub export: Option<PathBuf>,

    /// No imprime la tabla paso a paso
    #[arg(long = "no-trace")]
    pub no_trace: bool,
}

impl Config {
    /// Parsea argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Valida la configuración
    ///
    /// Exactamente una fuente de procesos: `--input`, `--process` o `--demo`.
    pub fn validate(&self) -> Result<(), String> {
        let sources = [self.input.is_some(), !self.processes.is_empty(), self.demo]
            .iter()
            .filter(|s| **s)
            .count();

        if sources == 0 {
            return Err("No process source: use --input, --process or --demo".to_string());
        }
        if sources > 1 {
            return Err("Only one process source allowed: --input, --process or --demo".to_string());
        }

        Ok(())
    }

    /// Quantum coercionado
    pub fn quantum(&self) -> SimResult<Quantum> {
        Quantum::coerce(self.quantum)
    }

    /// Lista de procesos desde la fuente elegida
    pub fn load_processes(&self) -> SimResult<Vec<ProcessSpec>> {
        if let Some(path) = &self.input {
            return export::load_processes(path);
        }
        if self.demo {
            return Ok(ProcessSpec::demo_set());
        }
        Ok(self.processes.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quantum: 2.0,
            input: None,
            processes: Vec::new(),
            demo: false,
            export: None,
            no_trace: false,
        }
    }
}
