//! # Admission Manager
//! src/sim/admission.rs
//!
//! Dueño de la línea de tiempo de llegadas. Los procesos se ordenan por
//! llegada con un sort estable (empates en orden de entrada) y se admiten
//! a la cola de listos, en ese orden, cuando el reloj alcanza su llegada.

use super::process::{ProcessState, Ticks};
use std::collections::VecDeque;

/// Línea de tiempo de llegadas sobre procesos ya ordenados por arrival
#[derive(Debug)]
pub struct ArrivalTimeline {
    /// Llegadas en orden de la línea de tiempo
    arrivals: Vec<Ticks>,
    /// Índice del siguiente proceso aún no admitido
    cursor: usize,
}

impl ArrivalTimeline {
    /// Ordena `processes` por llegada (estable) y construye la línea de tiempo
    pub fn new(processes: &mut [ProcessState]) -> Self {
        processes.sort_by_key(|p| p.arrival);
        Self {
            arrivals: processes.iter().map(|p| p.arrival).collect(),
            cursor: 0,
        }
    }

    /// Mueve a la cola todo proceso no admitido con arrival <= clock
    ///
    /// Retorna cuántos procesos fueron admitidos.
    pub fn admit(
        &mut self,
        clock: Ticks,
        processes: &mut [ProcessState],
        ready: &mut VecDeque<usize>,
    ) -> usize {
        let start = self.cursor;
        // Contiguos, porque la línea de tiempo está ordenada
        while self.cursor < self.arrivals.len() && self.arrivals[self.cursor] <= clock {
            processes[self.cursor].mark_ready();
            ready.push_back(self.cursor);
            self.cursor += 1;
        }
        self.cursor - start
    }

    /// Llegada del próximo proceso sin admitir, si queda alguno
    pub fn next_arrival(&self) -> Option<Ticks> {
        self.arrivals.get(self.cursor).copied()
    }

    pub fn has_pending(&self) -> bool {
        self.cursor < self.arrivals.len()
    }
}
