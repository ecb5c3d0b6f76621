//! Shared test builders for answer vectors and catalog entries.
//!
//! Answer builders address questions by their 1-based number, the same way
//! the clinical instrument and the integration scenarios do.

use chrono::Utc;
use tizhi_core::constants::QUESTION_COUNT;
use tizhi_core::constitution::Constitution;
use tizhi_core::models::{Acupoint, Course, Ingredient, Recipe};
use uuid::Uuid;

/// An answer vector with every entry set to `value`.
pub fn answers_uniform(value: u8) -> [u8; QUESTION_COUNT] {
    [value; QUESTION_COUNT]
}

/// An answer vector of `base` everywhere, with `(question number, value)`
/// overrides applied on top.
pub fn answers_with(base: u8, overrides: &[(u8, u8)]) -> [u8; QUESTION_COUNT] {
    let mut answers = [base; QUESTION_COUNT];
    for &(number, value) in overrides {
        answers[usize::from(number - 1)] = value;
    }
    answers
}

/// An answer vector of `base` everywhere, with an inclusive question-number
/// range set to `value`.
pub fn answers_with_range(base: u8, from: u8, to: u8, value: u8) -> [u8; QUESTION_COUNT] {
    let mut answers = [base; QUESTION_COUNT];
    for number in from..=to {
        answers[usize::from(number - 1)] = value;
    }
    answers
}

/// A minimal ingredient suited to the given constitutions.
pub fn ingredient(name: &str, suitable: &[Constitution]) -> Ingredient {
    Ingredient {
        id: Uuid::new_v4(),
        name: name.to_string(),
        nature: "neutral".to_string(),
        flavor: "sweet".to_string(),
        functions: format!("{name} test functions"),
        suitable: suitable.to_vec(),
        avoid: Vec::new(),
        created_at: Utc::now(),
    }
}

/// A minimal recipe suited to the given constitutions.
pub fn recipe(name: &str, suitable: &[Constitution]) -> Recipe {
    let now = Utc::now();
    Recipe {
        id: Uuid::new_v4(),
        name: name.to_string(),
        summary: format!("{name} test summary"),
        ingredients: vec!["water".to_string()],
        steps: vec!["combine".to_string(), "simmer".to_string()],
        suitable: suitable.to_vec(),
        created_at: now,
        updated_at: now,
    }
}

/// A minimal acupoint suited to the given constitutions.
pub fn acupoint(name: &str, suitable: &[Constitution]) -> Acupoint {
    Acupoint {
        id: Uuid::new_v4(),
        name: name.to_string(),
        meridian: "stomach".to_string(),
        location: "below the knee".to_string(),
        indications: format!("{name} test indications"),
        suitable: suitable.to_vec(),
        created_at: Utc::now(),
    }
}

/// A minimal course suited to the given constitutions.
pub fn course(title: &str, suitable: &[Constitution]) -> Course {
    Course {
        id: Uuid::new_v4(),
        title: title.to_string(),
        summary: format!("{title} test summary"),
        category: "diet".to_string(),
        suitable: suitable.to_vec(),
        created_at: Utc::now(),
    }
}
