//! CatalogEngine — owns the SQLite connection, runs migrations on open,
//! implements ICatalogStore.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;
use uuid::Uuid;

use tizhi_core::constitution::Constitution;
use tizhi_core::errors::TizhiResult;
use tizhi_core::models::{Acupoint, Course, Ingredient, Recipe};
use tizhi_core::traits::ICatalogStore;

use crate::queries::{acupoint_ops, course_ops, ingredient_ops, recipe_ops};
use crate::{migrations, to_catalog_err};

/// SQLite-backed catalog store. The connection sits behind a mutex so the
/// engine can be shared across threads.
pub struct CatalogEngine {
    conn: Mutex<Connection>,
}

impl CatalogEngine {
    /// Open a catalog backed by a file on disk.
    pub fn open(path: &Path) -> TizhiResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_catalog_err(e.to_string()))?;
        let engine = Self {
            conn: Mutex::new(conn),
        };
        engine.initialize()?;
        tracing::info!(path = %path.display(), "catalog store opened");
        Ok(engine)
    }

    /// Open an in-memory catalog (for testing).
    pub fn open_in_memory() -> TizhiResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_catalog_err(e.to_string()))?;
        let engine = Self {
            conn: Mutex::new(conn),
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> TizhiResult<()> {
        self.with_conn(|conn| migrations::run_migrations(conn))
    }

    fn with_conn<F, T>(&self, f: F) -> TizhiResult<T>
    where
        F: FnOnce(&Connection) -> TizhiResult<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|_| to_catalog_err("connection mutex poisoned"))?;
        f(&conn)
    }
}

impl ICatalogStore for CatalogEngine {
    // --- Ingredients ---
    fn create_ingredient(&self, ingredient: &Ingredient) -> TizhiResult<()> {
        tracing::debug!(id = %ingredient.id, name = %ingredient.name, "create ingredient");
        self.with_conn(|conn| ingredient_ops::insert(conn, ingredient))
    }

    fn get_ingredient(&self, id: &Uuid) -> TizhiResult<Option<Ingredient>> {
        self.with_conn(|conn| ingredient_ops::get(conn, id))
    }

    fn update_ingredient(&self, ingredient: &Ingredient) -> TizhiResult<()> {
        tracing::debug!(id = %ingredient.id, "update ingredient");
        self.with_conn(|conn| ingredient_ops::update(conn, ingredient))
    }

    fn delete_ingredient(&self, id: &Uuid) -> TizhiResult<()> {
        tracing::debug!(%id, "delete ingredient");
        self.with_conn(|conn| ingredient_ops::delete(conn, id))
    }

    fn list_ingredients(&self) -> TizhiResult<Vec<Ingredient>> {
        self.with_conn(ingredient_ops::list)
    }

    fn ingredients_for(&self, constitution: Constitution) -> TizhiResult<Vec<Ingredient>> {
        self.with_conn(|conn| ingredient_ops::for_constitution(conn, constitution))
    }

    // --- Recipes ---
    fn create_recipe(&self, recipe: &Recipe) -> TizhiResult<()> {
        tracing::debug!(id = %recipe.id, name = %recipe.name, "create recipe");
        self.with_conn(|conn| recipe_ops::insert(conn, recipe))
    }

    fn get_recipe(&self, id: &Uuid) -> TizhiResult<Option<Recipe>> {
        self.with_conn(|conn| recipe_ops::get(conn, id))
    }

    fn update_recipe(&self, recipe: &Recipe) -> TizhiResult<()> {
        tracing::debug!(id = %recipe.id, "update recipe");
        self.with_conn(|conn| recipe_ops::update(conn, recipe))
    }

    fn delete_recipe(&self, id: &Uuid) -> TizhiResult<()> {
        tracing::debug!(%id, "delete recipe");
        self.with_conn(|conn| recipe_ops::delete(conn, id))
    }

    fn list_recipes(&self) -> TizhiResult<Vec<Recipe>> {
        self.with_conn(recipe_ops::list)
    }

    fn recipes_for(&self, constitution: Constitution) -> TizhiResult<Vec<Recipe>> {
        self.with_conn(|conn| recipe_ops::for_constitution(conn, constitution))
    }

    // --- Acupoints ---
    fn create_acupoint(&self, acupoint: &Acupoint) -> TizhiResult<()> {
        tracing::debug!(id = %acupoint.id, name = %acupoint.name, "create acupoint");
        self.with_conn(|conn| acupoint_ops::insert(conn, acupoint))
    }

    fn get_acupoint(&self, id: &Uuid) -> TizhiResult<Option<Acupoint>> {
        self.with_conn(|conn| acupoint_ops::get(conn, id))
    }

    fn update_acupoint(&self, acupoint: &Acupoint) -> TizhiResult<()> {
        tracing::debug!(id = %acupoint.id, "update acupoint");
        self.with_conn(|conn| acupoint_ops::update(conn, acupoint))
    }

    fn delete_acupoint(&self, id: &Uuid) -> TizhiResult<()> {
        tracing::debug!(%id, "delete acupoint");
        self.with_conn(|conn| acupoint_ops::delete(conn, id))
    }

    fn list_acupoints(&self) -> TizhiResult<Vec<Acupoint>> {
        self.with_conn(acupoint_ops::list)
    }

    fn acupoints_for(&self, constitution: Constitution) -> TizhiResult<Vec<Acupoint>> {
        self.with_conn(|conn| acupoint_ops::for_constitution(conn, constitution))
    }

    // --- Courses ---
    fn create_course(&self, course: &Course) -> TizhiResult<()> {
        tracing::debug!(id = %course.id, title = %course.title, "create course");
        self.with_conn(|conn| course_ops::insert(conn, course))
    }

    fn get_course(&self, id: &Uuid) -> TizhiResult<Option<Course>> {
        self.with_conn(|conn| course_ops::get(conn, id))
    }

    fn update_course(&self, course: &Course) -> TizhiResult<()> {
        tracing::debug!(id = %course.id, "update course");
        self.with_conn(|conn| course_ops::update(conn, course))
    }

    fn delete_course(&self, id: &Uuid) -> TizhiResult<()> {
        tracing::debug!(%id, "delete course");
        self.with_conn(|conn| course_ops::delete(conn, id))
    }

    fn list_courses(&self) -> TizhiResult<Vec<Course>> {
        self.with_conn(course_ops::list)
    }

    fn courses_for(&self, constitution: Constitution) -> TizhiResult<Vec<Course>> {
        self.with_conn(|conn| course_ops::for_constitution(conn, constitution))
    }
}
