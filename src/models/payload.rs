// src/models/payload.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{answer::Answer, session::TestSession};

/// Largest batch accepted by `POST /api/interpretations/batch`.
pub const MAX_BATCH_SIZE: u64 = 500;

/// DTO mirroring the `{session, answers}` body of the session-fetch API.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SessionPayload {
    #[validate(nested)]
    pub session: TestSession,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

/// DTO for interpreting many sessions in one request.
#[derive(Debug, Deserialize, Validate)]
pub struct BatchInterpretationRequest {
    #[validate(length(min = 1, max = MAX_BATCH_SIZE))]
    #[validate(nested)]
    pub items: Vec<SessionPayload>,
}

/// Query for previewing the thresholds of a pass score.
#[derive(Debug, Deserialize, Validate)]
pub struct ThresholdQuery {
    #[validate(range(max = 100))]
    pub minimum_score: Option<u8>,
}
