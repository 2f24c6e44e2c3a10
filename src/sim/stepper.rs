//! # Execution Stepper
//! src/sim/stepper.rs
//!
//! Dueño del reloj simulado y de la cola de listos. Despacha la cabeza de
//! la cola por hasta un quantum, una unidad a la vez, admitiendo llegadas
//! después de cada avance del reloj.

use super::admission::ArrivalTimeline;
use super::process::{ProcessState, Ticks};
use super::trace::TraceStep;
use crate::quantum::Quantum;
use std::collections::VecDeque;
use tracing::debug;

/// Contexto de una corrida; nada de esto sobrevive entre corridas
#[derive(Debug)]
pub struct SimContext {
    clock: Ticks,
    quantum: Quantum,
    /// Procesos en orden de la línea de tiempo
    processes: Vec<ProcessState>,
    /// Índices a `processes`, cabeza primero
    ready: VecDeque<usize>,
    timeline: ArrivalTimeline,
    trace: Vec<TraceStep>,
    completion_order: Vec<usize>,
}

/// Lo que deja una corrida terminada
#[derive(Debug)]
pub struct FinishedRun {
    pub processes: Vec<ProcessState>,
    pub trace: Vec<TraceStep>,
    pub completion_order: Vec<String>,
}

impl SimContext {
    pub fn new(mut processes: Vec<ProcessState>, quantum: Quantum) -> Self {
        let timeline = ArrivalTimeline::new(&mut processes);
        let capacity = processes.len();
        Self {
            clock: 0,
            quantum,
            processes,
            ready: VecDeque::with_capacity(capacity),
            timeline,
            trace: Vec::new(),
            completion_order: Vec::with_capacity(capacity),
        }
    }

    /// Corre la simulación hasta que todos los procesos terminan
    pub fn run(mut self) -> FinishedRun {
        self.admit();

        while self.completion_order.len() < self.processes.len() {
            if self.ready.is_empty() {
                // Sin listos ni pendientes implicaría procesos perdidos
                if !self.timeline.has_pending() {
                    break;
                }
                self.idle_until_next_arrival();
                continue;
            }
            self.dispatch();
        }

        let completion_order = self
            .completion_order
            .iter()
            .map(|&idx| self.processes[idx].id.clone())
            .collect();

        FinishedRun {
            processes: self.processes,
            trace: self.trace,
            completion_order,
        }
    }

    fn admit(&mut self) {
        let admitted = self.timeline.admit(self.clock, &mut self.processes, &mut self.ready);
        if admitted > 0 {
            debug!(clock = self.clock, admitted, "admitted arrivals");
        }
    }

    /// CPU ociosa: una unidad a la vez, nunca más allá de la próxima llegada
    fn idle_until_next_arrival(&mut self) {
        let Some(next) = self.timeline.next_arrival() else {
            return;
        };
        debug!(from = self.clock, until = next, "cpu idle");
        while self.clock < next {
            self.trace.push(TraceStep::idle(self.clock));
            self.clock += 1;
            self.admit();
        }
    }

    /// Saca la cabeza de la cola y la corre por min(remaining, quantum)
    fn dispatch(&mut self) {
        let Some(idx) = self.ready.pop_front() else {
            return;
        };
        self.processes[idx].mark_running();

        let slice = self.processes[idx].remaining.min(self.quantum.get());
        debug!(
            clock = self.clock,
            process = %self.processes[idx].id,
            slice,
            "dispatch"
        );

        for _ in 0..slice {
            let ready_ids: Vec<String> = self
                .ready
                .iter()
                .map(|&i| self.processes[i].id.clone())
                .collect();
            self.trace
                .push(TraceStep::busy(self.clock, &self.processes[idx].id, ready_ids));

            self.processes[idx].run_unit();
            self.clock += 1;
            // Las llegadas durante el slice quedan delante del proceso desalojado
            self.admit();
        }

        let process = &mut self.processes[idx];
        if process.remaining == 0 {
            process.mark_completed(self.clock);
            self.completion_order.push(idx);
            debug!(clock = self.clock, process = %process.id, "completed");
        } else {
            process.mark_ready();
            self.ready.push_back(idx);
            debug!(
                clock = self.clock,
                process = %process.id,
                remaining = process.remaining,
                "preempted"
            );
        }
    }
}
