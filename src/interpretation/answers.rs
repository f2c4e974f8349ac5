// src/interpretation/answers.rs

use std::collections::BTreeMap;

use serde::Serialize;

use crate::interpretation::percentage::percentage;
use crate::models::{answer::Answer, session::CategoryScore};

const UNKNOWN_DIFFICULTY: &str = "UNKNOWN";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AccuracyCount {
    pub answered: u32,
    pub correct: u32,
    pub percentage: u8,
}

impl AccuracyCount {
    fn record(&mut self, is_correct: bool) {
        self.answered += 1;
        if is_correct {
            self.correct += 1;
        }
        self.percentage = percentage(self.correct, self.answered);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnswerStatistics {
    pub answered: u32,
    pub correct: u32,
    pub accuracy: u8,
    pub points_earned: u32,
    /// Keyed by upper-cased difficulty label.
    pub by_difficulty: BTreeMap<String, AccuracyCount>,
}

pub fn statistics(answers: &[Answer]) -> AnswerStatistics {
    let mut stats = AnswerStatistics::default();

    for answer in answers {
        stats.answered += 1;
        if answer.is_correct {
            stats.correct += 1;
        }
        stats.points_earned = stats.points_earned.saturating_add(answer.points_earned);

        let difficulty = answer
            .question
            .as_ref()
            .and_then(|q| q.difficulty.as_deref())
            .map(|d| d.trim().to_ascii_uppercase())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| UNKNOWN_DIFFICULTY.to_string());

        stats
            .by_difficulty
            .entry(difficulty)
            .or_default()
            .record(answer.is_correct);
    }

    stats.accuracy = percentage(stats.correct, stats.answered);
    stats
}

/// Rebuilds a category breakdown from answers when the session has none:
/// one point per correct answer out of the answers seen in that category.
/// Answers without an embedded question are skipped.
pub fn breakdown_from_answers(answers: &[Answer]) -> BTreeMap<String, CategoryScore> {
    let mut breakdown: BTreeMap<String, CategoryScore> = BTreeMap::new();

    for answer in answers {
        let Some(question) = &answer.question else {
            continue;
        };
        let code = question.category.trim().to_ascii_uppercase();
        if code.is_empty() {
            continue;
        }

        let entry = breakdown.entry(code).or_default();
        entry.max_score += 1;
        if answer.is_correct {
            entry.score += 1;
        }
    }

    breakdown
}
