use std::str::FromStr;

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::db::unicode_lower;
use crate::domain::category::Category;
use crate::domain::pagination::{Pagination, SearchQuery};
use crate::domain::types::CategoryId;
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::{
    CategoryReader, CategoryWriter, DieselRepository, RepositoryError, RepositoryResult,
};
use crate::schema::categories;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortField {
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}

impl FromStr for SortField {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "description" => Ok(Self::Description),
            "created_at" | "createdAt" => Ok(Self::CreatedAt),
            "updated_at" | "updatedAt" => Ok(Self::UpdatedAt),
            other => Err(RepositoryError::InvalidQuery(format!(
                "unknown sort field '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(RepositoryError::InvalidQuery(format!(
                "unknown sort direction '{s}'"
            )))
        }
    }
}

fn apply_sort<'a>(
    query: categories::BoxedQuery<'a, Sqlite>,
    field: SortField,
    direction: SortDirection,
) -> categories::BoxedQuery<'a, Sqlite> {
    use SortDirection::{Asc, Desc};

    let query = match (field, direction) {
        (SortField::Name, Asc) => query.order(categories::name.asc()),
        (SortField::Name, Desc) => query.order(categories::name.desc()),
        (SortField::Description, Asc) => query.order(categories::description.asc()),
        (SortField::Description, Desc) => query.order(categories::description.desc()),
        (SortField::CreatedAt, Asc) => query.order(categories::created_at.asc()),
        (SortField::CreatedAt, Desc) => query.order(categories::created_at.desc()),
        (SortField::UpdatedAt, Asc) => query.order(categories::updated_at.asc()),
        (SortField::UpdatedAt, Desc) => query.order(categories::updated_at.desc()),
    };
    // Stable paging across rows with equal sort keys.
    query.then_order_by(categories::id.asc())
}

/// Lower-cased `LIKE` pattern matching `terms` anywhere, with wildcards
/// taken literally.
fn contains_pattern(terms: &str) -> Option<String> {
    let terms = terms.trim().to_lowercase();
    if terms.is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(terms.len() + 2);
    pattern.push('%');
    for c in terms.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}

impl CategoryReader for DieselRepository {
    fn list_categories(&self, query: &SearchQuery) -> RepositoryResult<Pagination<Category>> {
        let field: SortField = query.sort.parse()?;
        let direction: SortDirection = query.direction.parse()?;
        let pattern = contains_pattern(&query.terms);

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = categories::table.into_boxed::<Sqlite>();
            if let Some(pattern) = &pattern {
                items = items.filter(
                    unicode_lower(categories::name.nullable())
                        .like(pattern.clone())
                        .escape('\\')
                        .or(unicode_lower(categories::description)
                            .like(pattern.clone())
                            .escape('\\')),
                );
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)?;

        let offset = i64::from(query.page) * i64::from(query.per_page);
        let items = apply_sort(query_builder(), field, direction)
            .offset(offset)
            .limit(i64::from(query.per_page))
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(Pagination::new(
            query.page,
            query.per_page,
            u64::try_from(total).unwrap_or_default(),
            items,
        ))
    }

    fn get_category_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>> {
        let mut conn = self.conn()?;

        let category = categories::table
            .find(id.as_str())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &Category) -> RepositoryResult<Category> {
        let mut conn = self.conn()?;
        let db_category = DbNewCategory::try_from(category)?;

        let created = diesel::insert_into(categories::table)
            .values(&db_category)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_category(&self, category: &Category) -> RepositoryResult<Category> {
        let mut conn = self.conn()?;
        let db_category = DbNewCategory::try_from(category)?;

        let updated = diesel::update(categories::table.find(category.id().as_str()))
            .set(&db_category)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(updated.try_into()?)
    }

    fn delete_category(&self, id: &CategoryId) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let affected = diesel::delete(categories::table.find(id.as_str())).execute(&mut conn)?;

        Ok(affected)
    }
}
