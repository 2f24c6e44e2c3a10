//! # RR Simulator - Entry Point
//! src/main.rs
//!
//! Lee procesos y quantum, corre la simulación, imprime el reporte y
//! opcionalmente exporta la traza a JSON.

use rr_simulator::config::Config;
use rr_simulator::{export, logging, report, simulate, SimResult};

fn main() {
    logging::init_tracing();

    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> SimResult<()> {
    let quantum = config.quantum()?;
    let processes = config.load_processes()?;

    let sim = simulate(&processes, quantum)?;
    report::print_report(&sim, quantum, !config.no_trace);

    if let Some(path) = &config.export {
        export::write_json(&sim, path)?;
        println!("💾 Traza exportada a {}", path.display());
    }

    Ok(())
}
