// src/handlers/interpretation.rs

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    interpretation::{ReportAssembler, thresholds::Thresholds},
    models::{
        payload::{BatchInterpretationRequest, SessionPayload, ThresholdQuery},
        session::SessionStatus,
    },
};

/// Rejects payloads the engine should not be asked to interpret:
/// inconsistent scores (400) and sessions that are still running (409).
fn check_payload(payload: &SessionPayload) -> Result<(), AppError> {
    payload
        .session
        .check_score_bounds()
        .map_err(AppError::BadRequest)?;

    if payload.session.status == SessionStatus::Ongoing {
        return Err(AppError::Conflict(format!(
            "Session {} is still in progress",
            payload.session.id
        )));
    }

    Ok(())
}

/// Interprets a single scored session.
///
/// Body: `{session, answers}` as returned by the session-fetch API.
/// The report is rebuilt on every call and never cached.
pub async fn interpret_session(
    State(assembler): State<ReportAssembler>,
    Json(payload): Json<SessionPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    check_payload(&payload)?;

    let report = assembler.assemble(&payload.session, &payload.answers);
    tracing::info!(
        session_id = report.session_id,
        verdict = report.verdict_label,
        "Interpreted session"
    );

    Ok(Json(report))
}

/// Interprets many sessions at once.
///
/// * Every item is checked before any work starts; the first invalid item
///   fails the whole request with its index in the message.
/// * Reports are computed on the blocking pool, in request order.
pub async fn interpret_batch(
    State(assembler): State<ReportAssembler>,
    Json(payload): Json<BatchInterpretationRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    for (index, item) in payload.items.iter().enumerate() {
        check_payload(item).map_err(|e| match e {
            AppError::BadRequest(msg) => AppError::BadRequest(format!("items[{}]: {}", index, msg)),
            AppError::Conflict(msg) => AppError::Conflict(format!("items[{}]: {}", index, msg)),
            other => other,
        })?;
    }

    let items = payload.items;
    let reports = tokio::task::spawn_blocking(move || {
        items
            .iter()
            .map(|item| assembler.assemble(&item.session, &item.answers))
            .collect::<Vec<_>>()
    })
    .await?;

    tracing::info!("Interpreted batch of {} sessions", reports.len());

    Ok(Json(reports))
}

/// Previews the thresholds derived from a pass score.
/// Falls back to the configured default when `minimum_score` is omitted.
pub async fn preview_thresholds(
    State(config): State<Config>,
    Query(query): Query<ThresholdQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let minimum_score = query
        .minimum_score
        .unwrap_or(config.engine.default_minimum_score);

    Ok(Json(serde_json::json!({
        "minimum_score": minimum_score,
        "thresholds": Thresholds::derive(minimum_score),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::{CategoryScore, TestSession};

    fn payload(status: SessionStatus) -> SessionPayload {
        SessionPayload {
            session: TestSession {
                id: 3,
                test_id: 1,
                user_id: 1,
                status,
                score: 30,
                max_score: 40,
                start_time: None,
                end_time: None,
                minimum_score: None,
                category_breakdown: Default::default(),
                riasec: None,
                holland_code: None,
                aptitude_score_total: None,
                aptitude_max_score_total: None,
                multiple_intelligences: None,
            },
            answers: vec![],
        }
    }

    #[test]
    fn test_check_payload_accepts_finished_sessions() {
        assert!(check_payload(&payload(SessionStatus::Completed)).is_ok());
        assert!(check_payload(&payload(SessionStatus::Abandoned)).is_ok());
    }

    #[test]
    fn test_check_payload_rejects_ongoing_session() {
        let err = check_payload(&payload(SessionStatus::Ongoing)).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn test_check_payload_rejects_inconsistent_scores() {
        let mut p = payload(SessionStatus::Completed);
        p.session
            .category_breakdown
            .insert("TES_LOGIKA".to_string(), CategoryScore::new(11, 10));

        let err = check_payload(&p).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg.contains("TES_LOGIKA")));
    }
}
