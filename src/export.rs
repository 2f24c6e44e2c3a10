//! # Exportación JSON
//! src/export.rs
//!
//! Documento `{trace, stats, totals}` indentado, y carga de listas de
//! procesos desde JSON. Es el único formato de archivo del simulador.

use crate::error::SimResult;
use crate::sim::{ProcessSpec, Simulation, Stat, Totals, TraceStep};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Forma serializada de una corrida
#[derive(Debug, Serialize)]
pub struct TraceDocument<'a> {
    pub trace: &'a [TraceStep],
    pub stats: &'a [Stat],
    pub totals: &'a Totals,
}

/// Documento leído de disco, con dueño
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OwnedTraceDocument {
    pub trace: Vec<TraceStep>,
    pub stats: Vec<Stat>,
    pub totals: Totals,
}

impl<'a> From<&'a Simulation> for TraceDocument<'a> {
    fn from(sim: &'a Simulation) -> Self {
        Self {
            trace: &sim.trace,
            stats: &sim.stats,
            totals: &sim.totals,
        }
    }
}

/// Serializa la corrida con indentación legible
pub fn to_json_string(sim: &Simulation) -> SimResult<String> {
    Ok(serde_json::to_string_pretty(&TraceDocument::from(sim))?)
}

/// Escribe la corrida en `path`
///
/// Escribe primero a un archivo temporal y luego renombra, para que un
/// lector nunca vea un documento a medias.
pub fn write_json(sim: &Simulation, path: impl AsRef<Path>) -> SimResult<()> {
    let path = path.as_ref();
    let temp_path = path.with_extension("json.tmp");

    {
        let file = File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &TraceDocument::from(sim))?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }

    fs::rename(&temp_path, path)?;
    info!(path = %path.display(), steps = sim.trace.len(), "trace exported");
    Ok(())
}

/// Lee un documento exportado
pub fn read_json(path: impl AsRef<Path>) -> SimResult<OwnedTraceDocument> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Carga un arreglo JSON de `{id, arrival, burst}`
pub fn load_processes(path: impl AsRef<Path>) -> SimResult<Vec<ProcessSpec>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::simulate_units;

    #[test]
    fn test_document_has_three_top_level_keys() {
        let sim = simulate_units(&[ProcessSpec::new("P1", 0, 1)], 1).unwrap();
        let json = to_json_string(&sim).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("trace"));
        assert!(obj.contains_key("stats"));
        assert_eq!(value["totals"]["busyTime"], 1);
        assert_eq!(value["trace"][0]["running"], "P1");
    }

    #[test]
    fn test_document_is_indented() {
        let sim = simulate_units(&[ProcessSpec::new("P1", 0, 1)], 1).unwrap();
        let json = to_json_string(&sim).unwrap();
        assert!(json.contains("\n  \"trace\""));
    }

    #[test]
    fn test_idle_running_is_null() {
        let procs = vec![ProcessSpec::new("P1", 1, 1)];
        let sim = simulate_units(&procs, 1).unwrap();
        let value: serde_json::Value = serde_json::from_str(&to_json_string(&sim).unwrap()).unwrap();
        assert!(value["trace"][0]["running"].is_null());
    }
}
