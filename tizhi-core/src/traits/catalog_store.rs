use uuid::Uuid;

use crate::constitution::Constitution;
use crate::errors::TizhiResult;
use crate::models::{Acupoint, Course, Ingredient, Recipe};

/// CRUD + constitution-indexed lookup over the four catalog kinds.
pub trait ICatalogStore: Send + Sync {
    // --- Ingredients ---
    fn create_ingredient(&self, ingredient: &Ingredient) -> TizhiResult<()>;
    fn get_ingredient(&self, id: &Uuid) -> TizhiResult<Option<Ingredient>>;
    fn update_ingredient(&self, ingredient: &Ingredient) -> TizhiResult<()>;
    fn delete_ingredient(&self, id: &Uuid) -> TizhiResult<()>;
    fn list_ingredients(&self) -> TizhiResult<Vec<Ingredient>>;
    fn ingredients_for(&self, constitution: Constitution) -> TizhiResult<Vec<Ingredient>>;

    // --- Recipes ---
    fn create_recipe(&self, recipe: &Recipe) -> TizhiResult<()>;
    fn get_recipe(&self, id: &Uuid) -> TizhiResult<Option<Recipe>>;
    fn update_recipe(&self, recipe: &Recipe) -> TizhiResult<()>;
    fn delete_recipe(&self, id: &Uuid) -> TizhiResult<()>;
    fn list_recipes(&self) -> TizhiResult<Vec<Recipe>>;
    fn recipes_for(&self, constitution: Constitution) -> TizhiResult<Vec<Recipe>>;

    // --- Acupoints ---
    fn create_acupoint(&self, acupoint: &Acupoint) -> TizhiResult<()>;
    fn get_acupoint(&self, id: &Uuid) -> TizhiResult<Option<Acupoint>>;
    fn update_acupoint(&self, acupoint: &Acupoint) -> TizhiResult<()>;
    fn delete_acupoint(&self, id: &Uuid) -> TizhiResult<()>;
    fn list_acupoints(&self) -> TizhiResult<Vec<Acupoint>>;
    fn acupoints_for(&self, constitution: Constitution) -> TizhiResult<Vec<Acupoint>>;

    // --- Courses ---
    fn create_course(&self, course: &Course) -> TizhiResult<()>;
    fn get_course(&self, id: &Uuid) -> TizhiResult<Option<Course>>;
    fn update_course(&self, course: &Course) -> TizhiResult<()>;
    fn delete_course(&self, id: &Uuid) -> TizhiResult<()>;
    fn list_courses(&self) -> TizhiResult<Vec<Course>>;
    fn courses_for(&self, constitution: Constitution) -> TizhiResult<Vec<Course>>;
}
