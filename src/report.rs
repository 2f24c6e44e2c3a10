//! # Reporte en Terminal
//! src/report.rs
//!
//! Formatea una `Simulation` terminada para la terminal: tabla de pasos,
//! tabla de estadísticas, totales y una tira de Gantt de una celda por
//! unidad de tiempo.

use crate::quantum::Quantum;
use crate::sim::Simulation;
use std::fmt::Write;

/// Tabla de la traza: tiempo, proceso en CPU y cola de listos
pub fn trace_table(sim: &Simulation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "   ┌────────┬──────────┬──────────────────────────────┐");
    let _ = writeln!(out, "   │ Time   │ Running  │ Ready (head → tail)          │");
    let _ = writeln!(out, "   ├────────┼──────────┼──────────────────────────────┤");
    for step in &sim.trace {
        let ready = if step.ready.is_empty() {
            "-".to_string()
        } else {
            step.ready.join(" ")
        };
        let _ = writeln!(
            out,
            "   │ {:>6} │ {:<8} │ {:<28} │",
            step.time,
            step.running_label(),
            ready
        );
    }
    let _ = writeln!(out, "   └────────┴──────────┴──────────────────────────────┘");
    out
}

/// Tabla de estadísticas por proceso
pub fn stats_table(sim: &Simulation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "   ┌──────────┬─────────┬───────┬────────────┬────────────┬─────────┐");
    let _ = writeln!(out, "   │ Process  │ Arrival │ Burst │ Completion │ Turnaround │ Waiting │");
    let _ = writeln!(out, "   ├──────────┼─────────┼───────┼────────────┼────────────┼─────────┤");
    for s in &sim.stats {
        let _ = writeln!(
            out,
            "   │ {:<8} │ {:>7} │ {:>5} │ {:>10} │ {:>10} │ {:>7} │",
            s.id, s.arrival, s.burst, s.completion, s.turnaround, s.waiting
        );
    }
    let _ = writeln!(out, "   └──────────┴─────────┴───────┴────────────┴────────────┴─────────┘");
    out
}

/// Una celda por unidad: la etiqueta del proceso, o `--` si la CPU está ociosa
pub fn gantt_strip(sim: &Simulation) -> String {
    let width = sim
        .trace
        .iter()
        .filter_map(|s| s.running.as_ref().map(|id| id.len()))
        .max()
        .unwrap_or(2)
        .max(2);

    let cells: Vec<String> = sim
        .trace
        .iter()
        .map(|s| match &s.running {
            Some(id) => format!("{:^width$}", id, width = width),
            None => format!("{:^width$}", "--", width = width),
        })
        .collect();

    format!("|{}|", cells.join("|"))
}

/// Totales y promedios con dos decimales
pub fn summary(sim: &Simulation, quantum: Quantum) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "   Quantum:          {}", quantum);
    let _ = writeln!(out, "   Total time:       {}", sim.totals.total_time);
    let _ = writeln!(out, "   CPU busy:         {}", sim.totals.busy_time);
    let _ = writeln!(out, "   CPU idle:         {}", sim.totals.idle_time);
    let _ = writeln!(
        out,
        "   Utilization:      {:.2}%",
        sim.totals.utilization() * 100.0
    );
    let _ = writeln!(out, "   Avg turnaround:   {:.2}", sim.avg_turn);
    let _ = writeln!(out, "   Avg waiting:      {:.2}", sim.avg_wait);
    let _ = writeln!(out, "   Completion order: {}", sim.completion_order.join(" → "));
    out
}

/// Imprime el reporte completo
pub fn print_report(sim: &Simulation, quantum: Quantum, show_trace: bool) {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              Round-Robin Scheduling Simulation               ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
    if show_trace {
        println!("🕒 Trace:");
        print!("{}", trace_table(sim));
        println!();
    }
    println!("📊 Gantt:");
    println!("   {}", gantt_strip(sim));
    println!();
    println!("📋 Processes:");
    print!("{}", stats_table(sim));
    println!();
    println!("📈 Totals:");
    print!("{}", summary(sim, quantum));
    println!();
}
