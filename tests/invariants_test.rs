//! Propiedades que toda corrida válida debe cumplir
//! tests/invariants_test.rs

use proptest::prelude::*;
use rr_simulator::{simulate_units, ProcessSpec};
use std::collections::HashMap;

/// Entre 1 y 8 procesos con ids únicos, llegadas 0..20 y ráfagas 1..8
fn process_list() -> impl Strategy<Value = Vec<ProcessSpec>> {
    prop::collection::vec((0i64..20, 1i64..8), 1..8).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst))| ProcessSpec::new(format!("P{}", i + 1), arrival, burst))
            .collect()
    })
}

proptest! {
    #[test]
    fn busy_plus_idle_covers_trace(procs in process_list(), quantum in 1u64..6) {
        let sim = simulate_units(&procs, quantum).unwrap();
        let t = &sim.totals;

        prop_assert_eq!(t.busy_time + t.idle_time, sim.trace.len() as u64);
        prop_assert_eq!(t.total_time, sim.trace.last().unwrap().time);

        let total_burst: i64 = procs.iter().map(|p| p.burst).sum();
        prop_assert_eq!(t.busy_time, total_burst as u64);
    }

    #[test]
    fn every_burst_unit_runs_exactly_once(procs in process_list(), quantum in 1u64..6) {
        let sim = simulate_units(&procs, quantum).unwrap();

        let mut counts: HashMap<&str, i64> = HashMap::new();
        for step in &sim.trace {
            if let Some(id) = &step.running {
                *counts.entry(id.as_str()).or_insert(0) += 1;
            }
        }
        for p in &procs {
            prop_assert_eq!(counts.get(p.id.as_str()).copied(), Some(p.burst));
        }
    }

    #[test]
    fn per_process_metrics_are_consistent(procs in process_list(), quantum in 1u64..6) {
        let sim = simulate_units(&procs, quantum).unwrap();
        prop_assert_eq!(sim.stats.len(), procs.len());

        for s in &sim.stats {
            prop_assert!(s.turnaround >= s.burst);
            prop_assert!(s.completion >= s.arrival + s.burst);
            prop_assert_eq!(s.turnaround, s.completion - s.arrival);
            prop_assert_eq!(s.waiting, s.turnaround - s.burst);
        }
    }

    #[test]
    fn trace_times_are_consecutive(procs in process_list(), quantum in 1u64..6) {
        let sim = simulate_units(&procs, quantum).unwrap();
        for (i, step) in sim.trace.iter().enumerate() {
            prop_assert_eq!(step.time, i as u64);
            if let Some(id) = &step.running {
                prop_assert!(!step.ready.contains(id));
            } else {
                prop_assert!(step.ready.is_empty());
            }
        }
    }

    #[test]
    fn simulation_is_deterministic(procs in process_list(), quantum in 1u64..6) {
        let a = simulate_units(&procs, quantum).unwrap();
        let b = simulate_units(&procs, quantum).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn quantum_above_all_bursts_never_preempts(procs in process_list()) {
        let sim = simulate_units(&procs, 8).unwrap();
        // Cada proceso ocupa un solo tramo contiguo de la traza
        let mut runs: HashMap<&str, usize> = HashMap::new();
        let mut prev: Option<&str> = None;
        for step in &sim.trace {
            let cur = step.running.as_deref();
            if cur != prev {
                if let Some(id) = cur {
                    *runs.entry(id).or_insert(0) += 1;
                }
            }
            prev = cur;
        }
        prop_assert!(runs.values().all(|&n| n == 1));
    }
}
