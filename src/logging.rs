//! # Logging
//! src/logging.rs
//!
//! Inicializa `tracing-subscriber`. La librería solo emite eventos; el
//! binario decide cómo mostrarlos.
//!
//! Variables de entorno:
//! - `RUST_LOG`: nivel de log (por defecto: warn)
//! - `RR_LOG_JSON`: salida JSON si vale `1` o `true`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Nivel usado cuando `RUST_LOG` no está definido
pub const DEFAULT_FILTER: &str = "warn";

/// Interpreta el valor de `RR_LOG_JSON`
pub fn json_requested(value: Option<&str>) -> bool {
    matches!(value, Some("1") | Some("true"))
}

/// Instala el subscriber global; llamadas repetidas se ignoran
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let use_json = json_requested(std::env::var("RR_LOG_JSON").ok().as_deref());

    let registry = tracing_subscriber::registry().with(env_filter);

    // Los logs van a stderr para no mezclarse con el reporte
    let result = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
