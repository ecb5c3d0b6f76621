use test_fixtures::{acupoint, course, ingredient, recipe};
use tizhi_catalog::CatalogEngine;
use tizhi_core::constitution::Constitution;
use tizhi_core::errors::{CatalogError, TizhiError};
use tizhi_core::traits::ICatalogStore;

// ── Ingredient CRUD ───────────────────────────────────────────────────────

#[test]
fn ingredient_round_trip() {
    let store = CatalogEngine::open_in_memory().unwrap();
    let mut goji = ingredient("goji berry", &[Constitution::YinDeficiency]);
    goji.avoid = vec![Constitution::DampHeat];

    store.create_ingredient(&goji).unwrap();
    let fetched = store.get_ingredient(&goji.id).unwrap().unwrap();
    assert_eq!(fetched.name, "goji berry");
    assert_eq!(fetched.suitable, vec![Constitution::YinDeficiency]);
    assert_eq!(fetched.avoid, vec![Constitution::DampHeat]);

    let mut updated = fetched.clone();
    updated.nature = "warm".to_string();
    store.update_ingredient(&updated).unwrap();
    assert_eq!(
        store.get_ingredient(&goji.id).unwrap().unwrap().nature,
        "warm"
    );

    store.delete_ingredient(&goji.id).unwrap();
    assert!(store.get_ingredient(&goji.id).unwrap().is_none());
}

#[test]
fn missing_ingredient_update_reports_not_found() {
    let store = CatalogEngine::open_in_memory().unwrap();
    let ghost = ingredient("ghost", &[Constitution::Peace]);
    match store.update_ingredient(&ghost) {
        Err(TizhiError::Catalog(CatalogError::NotFound { kind, .. })) => {
            assert_eq!(kind, "ingredient");
        }
        other => panic!("expected NotFound, got {:?}", other.err()),
    }
    assert!(store.delete_ingredient(&ghost.id).is_err());
}

// ── Recipe CRUD ───────────────────────────────────────────────────────────

#[test]
fn recipe_round_trip_preserves_lists() {
    let store = CatalogEngine::open_in_memory().unwrap();
    let mut congee = recipe(
        "millet congee",
        &[Constitution::QiDeficiency, Constitution::YangDeficiency],
    );
    congee.ingredients = vec!["millet".to_string(), "red date".to_string()];
    congee.steps = vec!["rinse".to_string(), "boil".to_string(), "rest".to_string()];

    store.create_recipe(&congee).unwrap();
    let fetched = store.get_recipe(&congee.id).unwrap().unwrap();
    assert_eq!(fetched.ingredients, congee.ingredients);
    assert_eq!(fetched.steps, congee.steps);
    assert_eq!(fetched.suitable.len(), 2);
}

// ── Listing ───────────────────────────────────────────────────────────────

#[test]
fn lists_are_ordered_by_name() {
    let store = CatalogEngine::open_in_memory().unwrap();
    store
        .create_acupoint(&acupoint("zusanli", &[Constitution::QiDeficiency]))
        .unwrap();
    store
        .create_acupoint(&acupoint("baihui", &[Constitution::QiDepression]))
        .unwrap();
    store
        .create_acupoint(&acupoint("guanyuan", &[Constitution::YangDeficiency]))
        .unwrap();

    let names: Vec<String> = store
        .list_acupoints()
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, vec!["baihui", "guanyuan", "zusanli"]);
}

// ── Constitution lookup ───────────────────────────────────────────────────

#[test]
fn constitution_lookup_filters_exactly() {
    let store = CatalogEngine::open_in_memory().unwrap();
    store
        .create_course(&course("warming foods", &[Constitution::YangDeficiency]))
        .unwrap();
    store
        .create_course(&course(
            "dampness basics",
            &[Constitution::PhlegmDamp, Constitution::DampHeat],
        ))
        .unwrap();
    store
        .create_course(&course("sleep hygiene", &[Constitution::Peace]))
        .unwrap();

    let damp = store.courses_for(Constitution::PhlegmDamp).unwrap();
    assert_eq!(damp.len(), 1);
    assert_eq!(damp[0].title, "dampness basics");

    let heat = store.courses_for(Constitution::DampHeat).unwrap();
    assert_eq!(heat.len(), 1);

    assert!(store.courses_for(Constitution::BloodStasis).unwrap().is_empty());
}

// ── File persistence ──────────────────────────────────────────────────────

#[test]
fn file_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");

    let mint = ingredient("mint", &[Constitution::DampHeat]);
    {
        let store = CatalogEngine::open(&path).unwrap();
        store.create_ingredient(&mint).unwrap();
    }

    let reopened = CatalogEngine::open(&path).unwrap();
    let fetched = reopened.get_ingredient(&mint.id).unwrap().unwrap();
    assert_eq!(fetched.name, "mint");
    assert_eq!(fetched.created_at, mint.created_at);
}
