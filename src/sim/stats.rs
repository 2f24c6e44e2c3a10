//! # Statistics Aggregator
//! src/sim/stats.rs
//!
//! Deriva turnaround y espera por proceso, y los totales de la traza
//! (unidades ocupadas y ociosas).

use super::process::{ProcessState, Ticks};
use super::trace::TraceStep;
use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Estadísticas de un proceso terminado
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub id: String,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub completion: Ticks,
    /// completion - arrival
    pub turnaround: Ticks,
    /// turnaround - burst
    pub waiting: Ticks,
}

/// Totales sobre la traza completa
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// `time` del último paso de la traza
    pub total_time: Ticks,
    pub busy_time: Ticks,
    pub idle_time: Ticks,
}

impl Totals {
    /// Utilización de CPU: unidades ocupadas sobre unidades simuladas
    pub fn utilization(&self) -> f64 {
        let units = self.busy_time + self.idle_time;
        if units == 0 {
            return 0.0;
        }
        self.busy_time as f64 / units as f64
    }
}

/// Resultado agregado de una corrida
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub stats: Vec<Stat>,
    pub totals: Totals,
    pub avg_wait: f64,
    pub avg_turn: f64,
}

/// Calcula estadísticas por proceso y totales de la traza
pub fn aggregate(processes: &[ProcessState], trace: &[TraceStep]) -> SimResult<Aggregate> {
    if processes.is_empty() {
        return Err(SimError::ArithmeticDegenerate);
    }

    let mut seen = HashSet::with_capacity(processes.len());
    let mut stats = Vec::with_capacity(processes.len());
    for process in processes {
        if !seen.insert(process.id.as_str()) {
            return Err(SimError::invalid(format!("process {} appears twice", process.id)));
        }
        stats.push(stat_for(process)?);
    }

    let totals = totals_for(trace)?;

    let n = stats.len() as f64;
    let avg_wait = stats.iter().map(|s| s.waiting as f64).sum::<f64>() / n;
    let avg_turn = stats.iter().map(|s| s.turnaround as f64).sum::<f64>() / n;

    Ok(Aggregate {
        stats,
        totals,
        avg_wait,
        avg_turn,
    })
}

fn stat_for(process: &ProcessState) -> SimResult<Stat> {
    let completion = process.completion.ok_or_else(|| {
        SimError::invalid(format!("process {} has no completion time", process.id))
    })?;

    let turnaround = completion
        .checked_sub(process.arrival)
        .filter(|t| *t >= process.burst)
        .ok_or_else(|| {
            SimError::invalid(format!(
                "process {} completed at {} before arrival {} + burst {}",
                process.id, completion, process.arrival, process.burst
            ))
        })?;

    Ok(Stat {
        id: process.id.clone(),
        arrival: process.arrival,
        burst: process.burst,
        completion,
        turnaround,
        waiting: turnaround - process.burst,
    })
}

fn totals_for(trace: &[TraceStep]) -> SimResult<Totals> {
    let last = trace
        .last()
        .ok_or_else(|| SimError::invalid("trace is empty"))?;

    let busy_time = trace.iter().filter(|s| !s.is_idle()).count() as Ticks;
    let idle_time = trace.len() as Ticks - busy_time;

    Ok(Totals {
        total_time: last.time,
        busy_time,
        idle_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::process::ProcessSpec;

    fn finished(id: &str, arrival: i64, burst: i64, completion: Ticks) -> ProcessState {
        let mut p = ProcessState::from_spec(&ProcessSpec::new(id, arrival, burst)).unwrap();
        p.remaining = 0;
        p.completion = Some(completion);
        p
    }

    // ==================== Por proceso ====================

    #[test]
    fn test_turnaround_and_waiting() {
        let trace = vec![TraceStep::busy(0, "P1", vec![])];
        let agg = aggregate(&[finished("P1", 0, 4, 6), finished("P2", 1, 3, 7)], &trace).unwrap();

        assert_eq!(agg.stats[0].turnaround, 6);
        assert_eq!(agg.stats[0].waiting, 2);
        assert_eq!(agg.stats[1].turnaround, 6);
        assert_eq!(agg.stats[1].waiting, 3);
        assert_eq!(agg.avg_wait, 2.5);
        assert_eq!(agg.avg_turn, 6.0);
    }

    #[test]
    fn test_missing_completion_rejected() {
        let mut p = finished("P1", 0, 1, 1);
        p.completion = None;
        let trace = vec![TraceStep::busy(0, "P1", vec![])];
        assert!(aggregate(&[p], &trace).unwrap_err().to_string().contains("no completion"));
    }

    #[test]
    fn test_duplicate_process_rejected() {
        let trace = vec![TraceStep::busy(0, "P1", vec![])];
        let result = aggregate(&[finished("P1", 0, 1, 1), finished("P1", 0, 1, 2)], &trace);
        assert!(result.unwrap_err().to_string().contains("twice"));
    }

    #[test]
    fn test_impossible_completion_rejected() {
        let trace = vec![TraceStep::busy(0, "P1", vec![])];
        assert!(aggregate(&[finished("P1", 2, 3, 4)], &trace).is_err());
    }

    #[test]
    fn test_zero_processes_is_degenerate() {
        let result = aggregate(&[], &[TraceStep::idle(0)]);
        assert!(matches!(result, Err(SimError::ArithmeticDegenerate)));
    }

    // ==================== Totales ====================

    #[test]
    fn test_totals_count_busy_and_idle() {
        let trace = vec![
            TraceStep::busy(0, "P1", vec![]),
            TraceStep::idle(1),
            TraceStep::idle(2),
            TraceStep::busy(3, "P2", vec![]),
        ];
        let totals = totals_for(&trace).unwrap();
        assert_eq!(totals.total_time, 3);
        assert_eq!(totals.busy_time, 2);
        assert_eq!(totals.idle_time, 2);
        assert_eq!(totals.utilization(), 0.5);
    }

    #[test]
    fn test_totals_serialize_camel_case() {
        let totals = Totals {
            total_time: 6,
            busy_time: 7,
            idle_time: 0,
        };
        let json = serde_json::to_string(&totals).unwrap();
        assert_eq!(json, r#"{"totalTime":6,"busyTime":7,"idleTime":0}"#);
    }
}
