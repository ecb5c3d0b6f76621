//! Constitution-keyed recommendation lookup.
//!
//! A plain indexed lookup once the classifier has produced a label: primary
//! hits first, then secondary hits when enabled, deduplicated by id and
//! truncated per kind.

use serde::Serialize;
use uuid::Uuid;

use tizhi_core::config::CatalogConfig;
use tizhi_core::constitution::Constitution;
use tizhi_core::errors::TizhiResult;
use tizhi_core::models::{Acupoint, Course, Ingredient, Recipe, Report};
use tizhi_core::traits::ICatalogStore;

/// Recommendations for one classification report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSet {
    pub ingredients: Vec<Ingredient>,
    pub recipes: Vec<Recipe>,
    pub acupoints: Vec<Acupoint>,
    pub courses: Vec<Course>,
}

/// Looks up catalog content for a classification report.
pub struct Recommender<'a> {
    store: &'a dyn ICatalogStore,
    config: CatalogConfig,
}

impl<'a> Recommender<'a> {
    pub fn new(store: &'a dyn ICatalogStore, config: CatalogConfig) -> Self {
        Self { store, config }
    }

    /// Gather recommendations for every catalog kind.
    pub fn for_report(&self, report: &Report) -> TizhiResult<RecommendationSet> {
        let keys = self.lookup_keys(report);
        tracing::debug!(primary = %report.primary, keys = keys.len(), "recommendation lookup");

        let ingredients = self
            .gather(&keys, |c| self.store.ingredients_for(c), |i: &Ingredient| i.id)?
            .into_iter()
            // Never recommend an ingredient the primary constitution should avoid.
            .filter(|i| !i.avoid.contains(&report.primary))
            .collect();

        Ok(RecommendationSet {
            ingredients,
            recipes: self.gather(&keys, |c| self.store.recipes_for(c), |r: &Recipe| r.id)?,
            acupoints: self.gather(&keys, |c| self.store.acupoints_for(c), |a: &Acupoint| a.id)?,
            courses: self.gather(&keys, |c| self.store.courses_for(c), |c: &Course| c.id)?,
        })
    }

    /// Primary first, then secondary constitutions in report order.
    fn lookup_keys(&self, report: &Report) -> Vec<Constitution> {
        let mut keys = vec![report.primary];
        if self.config.include_secondary {
            for &constitution in &report.secondary {
                if !keys.contains(&constitution) {
                    keys.push(constitution);
                }
            }
        }
        keys
    }

    fn gather<T, F>(&self, keys: &[Constitution], mut fetch: F, id_of: fn(&T) -> Uuid) -> TizhiResult<Vec<T>>
    where
        F: FnMut(Constitution) -> TizhiResult<Vec<T>>,
    {
        let mut out: Vec<T> = Vec::new();
        for &key in keys {
            for item in fetch(key)? {
                if out.iter().all(|seen| id_of(seen) != id_of(&item)) {
                    out.push(item);
                }
            }
        }
        out.truncate(self.config.recommendation_limit);
        Ok(out)
    }
}
