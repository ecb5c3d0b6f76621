//! Catalog entity records: ingredients, recipes, acupoints, courses.
//!
//! All four carry a `suitable` list of constitutions used as the
//! recommendation lookup key. Timestamps are UTC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constitution::Constitution;

/// A food ingredient with its TCM properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    /// Thermal nature, e.g. "warm", "cool", "neutral".
    pub nature: String,
    /// Flavor profile, e.g. "sweet", "bitter".
    pub flavor: String,
    /// What the ingredient is traditionally used for.
    pub functions: String,
    pub suitable: Vec<Constitution>,
    /// Constitutions that should avoid this ingredient.
    pub avoid: Vec<Constitution>,
    pub created_at: DateTime<Utc>,
}

/// A recipe built from catalog ingredients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub summary: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub suitable: Vec<Constitution>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An acupoint with location and indications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acupoint {
    pub id: Uuid,
    pub name: String,
    pub meridian: String,
    pub location: String,
    pub indications: String,
    pub suitable: Vec<Constitution>,
    pub created_at: DateTime<Utc>,
}

/// An educational course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub category: String,
    pub suitable: Vec<Constitution>,
    pub created_at: DateTime<Utc>,
}
