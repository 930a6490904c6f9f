use catalog_admin::domain::category::Category;
use catalog_admin::domain::pagination::SearchQuery;
use catalog_admin::domain::types::CategoryId;
use catalog_admin::repository::{CategoryReader, CategoryWriter, RepositoryError};
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

mod common;

use common::seed_category;

fn names(categories: &[Category]) -> Vec<&str> {
    categories.iter().filter_map(Category::name).collect()
}

fn day(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, day)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("valid date")
}

fn seed_created_on(repo: &impl CategoryWriter, name: &str, created_at: NaiveDateTime) -> Category {
    let category = Category::with(
        CategoryId::unique(),
        Some(name.to_string()),
        None,
        true,
        created_at,
        created_at,
        None,
    );
    repo.create_category(&category).expect("should create category")
}

#[test]
fn create_category_round_trips_all_fields() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let category = Category::new_category(
        Some("Filmes".to_string()),
        Some("A categoria mais assistida".to_string()),
        true,
    );
    let created = repo.create_category(&category).expect("should create");
    assert_eq!(created, category);

    let found = repo
        .get_category_by_id(category.id())
        .expect("should query")
        .expect("should exist");
    assert_eq!(found, category);
    assert!(found.deleted_at().is_none());
}

#[test]
fn create_without_name_is_rejected() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let category = Category::new_category(None, None, true);
    let err = repo.create_category(&category).unwrap_err();
    assert!(matches!(err, RepositoryError::Constraint(_)));
}

#[test]
fn duplicate_id_is_reported_as_database_error() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let category = seed_category(&repo, "Filmes", None);
    let err = repo.create_category(&category).unwrap_err();
    assert!(matches!(err, RepositoryError::Database(_)));
}

#[test]
fn update_category_overwrites_state_and_clears_deleted_at() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let mut category = Category::new_category(Some("Film".to_string()), None, false);
    repo.create_category(&category).expect("should create");
    assert!(category.deleted_at().is_some());

    category.update(
        Some("Filmes".to_string()),
        Some("A categoria mais assistida".to_string()),
        true,
    );
    let updated = repo.update_category(&category).expect("should update");
    assert_eq!(updated, category);

    let found = repo
        .get_category_by_id(category.id())
        .expect("should query")
        .expect("should exist");
    assert_eq!(found.name(), Some("Filmes"));
    assert!(found.is_active());
    assert!(found.deleted_at().is_none());
    assert!(found.updated_at() > found.created_at());
}

#[test]
fn update_unknown_category_fails() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let category = Category::new_category(Some("Filmes".to_string()), None, true);
    let err = repo.update_category(&category).unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::Database(diesel::result::Error::NotFound)
    ));
}

#[test]
fn delete_category_is_idempotent() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let category = seed_category(&repo, "Filmes", None);

    assert_eq!(repo.delete_category(category.id()).expect("should delete"), 1);
    assert!(repo.get_category_by_id(category.id()).unwrap().is_none());
    assert_eq!(repo.delete_category(category.id()).expect("should no-op"), 0);

    let unknown = CategoryId::new("invalid").unwrap();
    assert_eq!(repo.delete_category(&unknown).expect("should no-op"), 0);
}

#[test]
fn find_by_unknown_id_returns_none() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let unknown = CategoryId::new("empty").unwrap();
    assert!(repo.get_category_by_id(&unknown).unwrap().is_none());
}

#[test]
fn list_categories_pages_by_name() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let filmes = seed_category(&repo, "Filmes", None);
    let series = seed_category(&repo, "Séries", None);
    let documentarios = seed_category(&repo, "Documentários", None);

    let expected = [documentarios.id(), filmes.id(), series.id()];
    for (page, expected_id) in expected.into_iter().enumerate() {
        let query = SearchQuery::new(page as u32, 1, "", "name", "asc");
        let result = repo.list_categories(&query).expect("should list");

        assert_eq!(result.current_page, page as u32);
        assert_eq!(result.per_page, 1);
        assert_eq!(result.total, 3);
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].id(), expected_id);
    }

    let past_end = repo
        .list_categories(&SearchQuery::new(3, 1, "", "name", "asc"))
        .expect("should list");
    assert_eq!(past_end.total, 3);
    assert!(past_end.items.is_empty());
}

#[test]
fn list_categories_on_empty_table() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let result = repo
        .list_categories(&SearchQuery::new(0, 1, "", "name", "asc"))
        .expect("should list");
    assert_eq!(result.current_page, 0);
    assert_eq!(result.per_page, 1);
    assert_eq!(result.total, 0);
    assert!(result.items.is_empty());
}

#[test]
fn list_categories_matches_terms_in_name_and_description() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    seed_category(&repo, "Filmes", Some("A categoria mais assistida"));
    seed_category(&repo, "Séries", Some("Uma categoria assistida"));
    let documentarios = seed_category(&repo, "Documentários", Some("A categoria menos assistida"));

    let by_name = repo
        .list_categories(&SearchQuery::new(0, 10, "DOC", "name", "asc"))
        .expect("should list");
    assert_eq!(by_name.total, 1);
    assert_eq!(by_name.items[0].id(), documentarios.id());

    let by_description = repo
        .list_categories(&SearchQuery::new(0, 10, "MAIS ASSISTIDA", "name", "asc"))
        .expect("should list");
    assert_eq!(names(&by_description.items), ["Filmes"]);

    let wildcard = repo
        .list_categories(&SearchQuery::new(0, 10, "%", "name", "asc"))
        .expect("should list");
    assert_eq!(wildcard.total, 0);
}

#[test]
fn list_categories_folds_case_of_accented_terms() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let series = seed_category(&repo, "Séries", None);
    let etica = seed_category(&repo, "Ética", Some("Ÿ ÂNGULO"));

    for (terms, expected) in [
        ("SÉRIES", &series),
        ("séries", &series),
        ("ética", &etica),
        ("ÉTICA", &etica),
        ("ÿ âng", &etica),
    ] {
        let result = repo
            .list_categories(&SearchQuery::default().search(terms))
            .expect("should list");
        assert_eq!(result.total, 1, "terms {terms:?}");
        assert_eq!(result.items[0].id(), expected.id(), "terms {terms:?}");
    }
}

#[test]
fn list_categories_sorts_descending() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    seed_created_on(&repo, "Filmes", day(1));
    seed_created_on(&repo, "Séries", day(2));
    seed_created_on(&repo, "Documentários", day(3));

    let result = repo
        .list_categories(&SearchQuery::new(0, 3, "", "name", "DESC"))
        .expect("should list");
    assert_eq!(names(&result.items), ["Séries", "Filmes", "Documentários"]);

    let by_creation = repo
        .list_categories(&SearchQuery::new(0, 3, "", "createdAt", "asc"))
        .expect("should list");
    assert_eq!(names(&by_creation.items), ["Filmes", "Séries", "Documentários"]);
}

#[test]
fn list_categories_rejects_unknown_sort() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let err = repo
        .list_categories(&SearchQuery::new(0, 1, "", "rank", "asc"))
        .unwrap_err();
    assert!(matches!(err, RepositoryError::InvalidQuery(_)));

    let err = repo
        .list_categories(&SearchQuery::new(0, 1, "", "name", "sideways"))
        .unwrap_err();
    assert!(matches!(err, RepositoryError::InvalidQuery(_)));
}

#[test]
fn deleted_at_is_stored_for_inactive_categories() {
    let test_db = common::TestDb::new();
    let repo = test_db.repository();

    let category = Category::new_category(Some("Filmes".to_string()), None, false);
    repo.create_category(&category).expect("should create");

    use catalog_admin::schema::categories;
    let mut conn = test_db.pool().get().expect("should acquire connection");
    let (active, deleted_at): (bool, Option<chrono::NaiveDateTime>) = categories::table
        .find(category.id().as_str())
        .select((categories::active, categories::deleted_at))
        .first(&mut conn)
        .expect("row should exist");

    assert!(!active);
    assert_eq!(deleted_at, category.deleted_at());
}
