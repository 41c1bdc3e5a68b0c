//! Sliding-window average endpoint.
//!
//! # Endpoints
//!
//! - `GET /numbers/{numberid}` - Fetch a batch for category `p`, `f`, `e` or `r`,
//!   merge it into the shared window, and report the window and its average
//!
//! # Flow
//!
//! validate → fetch (outside the lock) → merge (under the lock) → report.
//! Only validation and fetch can fail; an upstream timeout is an empty batch.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use types::{CategoryCode, NumberBatch, Window};
use window::{average, format_average};

use crate::error::{AppError, AppResult};
use crate::state::ServerState;

/// Response for `GET /numbers/{numberid}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumbersResponse {
    /// Window before this request's batch was merged.
    pub window_prev_state: Window,
    /// Window after the merge.
    pub window_curr_state: Window,
    /// Batch exactly as received from upstream, duplicates included.
    pub numbers: NumberBatch,
    /// Average of `window_curr_state`, two decimal places.
    pub avg: String,
}

/// Get numbers and running average: `GET /numbers/{numberid}`
pub async fn get_numbers(
    State(state): State<ServerState>,
    numberid: Result<Path<String>, PathRejection>,
) -> AppResult<Json<NumbersResponse>> {
    let Path(numberid) = numberid?;
    handle_numbers(&state, &numberid).await.map(Json)
}

/// Run one request end to end for a raw category code.
pub async fn handle_numbers(
    state: &ServerState,
    raw_category: &str,
) -> AppResult<NumbersResponse> {
    let category = CategoryCode::parse(raw_category)?;

    let numbers = state.upstream.fetch(category).await.map_err(|err| {
        error!(%category, error = %err, "upstream fetch failed");
        AppError::from(err)
    })?;

    let snapshot = state.window.merge_unique(&numbers).await;
    let avg = format_average(average(&snapshot.current));

    info!(
        %category,
        fetched = numbers.len(),
        inserted = snapshot.inserted().count(),
        evicted = snapshot.evicted().count(),
        %avg,
        "window updated"
    );

    Ok(NumbersResponse {
        window_prev_state: snapshot.previous,
        window_curr_state: snapshot.current,
        numbers,
        avg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::WindowStore;
    use crate::upstream::{UpstreamClient, UpstreamConfig};
    use std::time::Duration;

    fn offline_state() -> ServerState {
        // Port 9 (discard) on localhost; never reached by the validation tests.
        let upstream = UpstreamClient::new(&UpstreamConfig {
            base_url: "http://127.0.0.1:9".into(),
            timeout: Duration::from_millis(50),
        })
        .unwrap();
        ServerState::new(upstream, WindowStore::default())
    }

    #[test]
    fn test_response_field_names() {
        let response = NumbersResponse {
            window_prev_state: vec![],
            window_curr_state: vec![4, 8],
            numbers: vec![4, 8],
            avg: "6.00".into(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"windowPrevState":[],"windowCurrState":[4,8],"numbers":[4,8],"avg":"6.00"}"#
        );
    }

    #[tokio::test]
    async fn test_invalid_category_is_bad_request() {
        let state = offline_state();
        state.window.merge_unique(&[1, 2, 3]).await;

        let err = handle_numbers(&state, "x").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let snap = state.window.merge_unique(&[]).await;
        assert_eq!(snap.current, vec![1, 2, 3]);
    }
}
