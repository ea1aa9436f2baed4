use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// O pipeline em si nunca falha; estes erros são da camada de serviço/HTTP.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Relatório com {received} linhas excede o limite de {max}")]
    TooManyRows { max: usize, received: usize },

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::TooManyRows { .. } => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),

            AppError::InternalServerError(ref source) => {
                tracing::error!("Erro Interno do Servidor: {:?}", source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_rows_maps_to_413() {
        let response = AppError::TooManyRows { max: 2, received: 3 }.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn internal_errors_hide_details() {
        let err = AppError::from(anyhow::anyhow!("boom"));
        assert_eq!(err.to_string(), "Erro interno do servidor");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
