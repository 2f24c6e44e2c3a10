//! # Errores del Simulador
//! src/error.rs
//!
//! Taxonomía de errores. Toda falla es una violación de precondición:
//! se reporta de inmediato y nunca se devuelve una traza parcial.

use thiserror::Error;

/// Resultado de las operaciones del simulador
pub type SimResult<T> = Result<T, SimError>;

/// Errores del simulador
#[derive(Error, Debug)]
pub enum SimError {
    /// Lista vacía, ids repetidos, llegada negativa, ráfaga no positiva
    /// o quantum inválido
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Promedios sobre cero procesos
    #[error("Cannot average over zero processes")]
    ArithmeticDegenerate,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    /// Atajo para construir un `InvalidInput`
    pub fn invalid(msg: impl Into<String>) -> Self {
        SimError::InvalidInput(msg.into())
    }

    /// `ArithmeticDegenerate` es un sub-caso de entrada inválida
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SimError::InvalidInput(_) | SimError::ArithmeticDegenerate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = SimError::invalid("process list is empty");
        assert_eq!(err.to_string(), "Invalid input: process list is empty");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_degenerate_is_invalid_input() {
        assert!(SimError::ArithmeticDegenerate.is_invalid_input());
    }

    #[test]
    fn test_io_error_is_not_invalid_input() {
        let err: SimError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(!err.is_invalid_input());
        assert!(err.to_string().contains("missing"));
    }
}
