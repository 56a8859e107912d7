use axum::{
    Json,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use ttt_common::games::tictactoe::{SearchResult, solve};
use ttt_common::{SolverError, log, log_error};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveResponse {
    pub score: i8,
    pub depth: usize,
    pub location: [i32; 2],
}

impl From<SearchResult> for SolveResponse {
    fn from(result: SearchResult) -> Self {
        Self {
            score: result.score,
            depth: result.depth,
            location: result.location_or_sentinel(),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Rejected(SolverError),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Rejected(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<SolverError> for ApiError {
    fn from(err: SolverError) -> Self {
        ApiError::Rejected(err)
    }
}

pub async fn solve_handler(
    Path((row1, row2, row3, player_choice)): Path<(String, String, String, String)>,
) -> Result<Json<SolveResponse>, ApiError> {
    let rows = [row1, row2, row3];
    let request = rows.join("/");

    let outcome = tokio::task::spawn_blocking(move || solve(&rows, &player_choice))
        .await
        .map_err(|e| {
            log_error!("Solver task for {} failed: {}", request, e);
            ApiError::Internal("Solver task failed".to_string())
        })?;

    match outcome {
        Ok(result) => {
            let response = SolveResponse::from(result);
            log!(
                "Solved {}: location {:?}, score {}, depth {}",
                request, response.location, response.score, response.depth
            );
            Ok(Json(response))
        }
        Err(err) => {
            log!("Rejected {}: {}", request, err);
            Err(err.into())
        }
    }
}

pub async fn health_handler() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(rows: [&str; 3], player: &str) -> Path<(String, String, String, String)> {
        Path((
            rows[0].to_string(),
            rows[1].to_string(),
            rows[2].to_string(),
            player.to_string(),
        ))
    }

    #[tokio::test]
    async fn test_solve_handler_returns_winning_move() {
        let Json(response) = solve_handler(path(["OO0", "XX0", "000"], "X")).await.unwrap();

        assert_eq!(
            response,
            SolveResponse {
                score: 1,
                depth: 4,
                location: [0, 2],
            }
        );
    }

    #[tokio::test]
    async fn test_solve_handler_terminal_board_uses_sentinel() {
        let Json(response) = solve_handler(path(["XXX", "OO0", "000"], "O")).await.unwrap();

        assert_eq!(response.score, -1);
        assert_eq!(response.location, [-1, -1]);
    }

    #[tokio::test]
    async fn test_solve_handler_rejects_invalid_player() {
        let err = solve_handler(path(["000", "000", "000"], "Z")).await.unwrap_err();

        assert!(matches!(err, ApiError::Rejected(SolverError::InvalidPlayer(_))));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_solve_handler_rejects_bad_cell() {
        let err = solve_handler(path(["000", "0Q0", "000"], "X")).await.unwrap_err();

        assert!(matches!(err, ApiError::Rejected(SolverError::InvalidBoard(_))));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_response_wire_shape() {
        let response = SolveResponse {
            score: 0,
            depth: 0,
            location: [-1, -1],
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "score": 0, "depth": 0, "location": [-1, -1] })
        );
    }

    #[test]
    fn test_internal_error_maps_to_500() {
        let response = ApiError::Internal("boom".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_health_handler() {
        assert_eq!(health_handler().await, "ok");
    }
}
