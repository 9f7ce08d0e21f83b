use thiserror::Error;

/// Errores del pipeline de resolución de métricas.
///
/// Todos son fatales para el comando: no hay reintentos ni resultados parciales.
/// El job duplicado NO es un error, ver [`crate::locator::AmbiguousJob`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("el job \"{0}\" no existe o no está en estado RUNNING")]
    JobNotFound(String),

    #[error("la task \"{task}\" no existe en el job \"{job}\"")]
    TaskNotFound { job: String, task: String },

    #[error("error de transporte: {0}")]
    Transport(String),

    #[error("valor no numérico para la métrica {id}: \"{value}\"")]
    MalformedMetricValue { id: String, value: String },
}

impl Error {
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Error::Transport(msg.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Transport(format!("respuesta JSON inválida: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_json_becomes_transport_error() {
        let err: Error = serde_json::from_str::<Vec<u32>>("{\"jid\": ").unwrap_err().into();
        assert!(matches!(err, Error::Transport(msg) if msg.contains("JSON")));
    }
}
