use thiserror::Error;

/// Mensaje único que ve el usuario, sea cual sea el fallo de carga.
pub const LOAD_FAILED_MESSAGE: &str =
    "Failed to load questions. Please make sure the JSON server is running.";

/// Fallos al traer el banco de preguntas. En pantalla todos se ven igual;
/// la variante concreta solo va al log.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("error de transporte pidiendo {url}: {message}")]
    Transport { url: String, message: String },

    #[error("el servidor devolvió HTTP {status} en {url}")]
    Http { url: String, status: u16 },

    #[error("respuesta con forma inválida: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("la carga terminó sin respuesta")]
    Disconnected,
}

impl LoadError {
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }
}
