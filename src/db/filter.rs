//! Optional product filters rendered into a parameterized WHERE clause.
//!
//! Each [`Predicate`] owns its column, operator and bound value, so the SQL
//! fragment and its argument are always pushed together. Placeholder numbers
//! come from [`QueryBuilder`], which keeps the filter arguments and the
//! trailing `LIMIT`/`OFFSET` binds in step.

use sqlx::{Postgres, QueryBuilder};

/// Columns, joins and projection shared by every product read.
pub(crate) const PRODUCT_FROM: &str = " FROM product p JOIN owner o ON p.owner = o.id";

pub(crate) const PRODUCT_COLUMNS: &str = "SELECT \
    p.id, p.name, p.description, p.defect, p.type, p.waist, p.length, p.chest, p.owner, \
    p.status, p.price, p.saleprice, p.image, p.createdate, p.updatedate, \
    o.name AS ownername";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Status,
    Type,
    Name,
}

impl Column {
    fn qualified(self) -> &'static str {
        match self {
            Column::Status => "p.status",
            Column::Type => "p.type",
            Column::Name => "p.name",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Exact match.
    Equals(Column, String),
    /// Case-insensitive substring match.
    Contains(Column, String),
}

impl Predicate {
    pub fn column(&self) -> Column {
        match self {
            Predicate::Equals(column, _) | Predicate::Contains(column, _) => *column,
        }
    }

    fn operator(&self) -> &'static str {
        match self {
            Predicate::Equals(..) => " = ",
            Predicate::Contains(..) => " ILIKE ",
        }
    }

    /// Value bound to this predicate's placeholder.
    pub fn argument(&self) -> String {
        match self {
            Predicate::Equals(_, value) => value.clone(),
            Predicate::Contains(_, value) => format!("%{}%", value),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    predicates: Vec<Predicate>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(self, value: Option<&str>) -> Self {
        self.with(value, |v| Predicate::Equals(Column::Status, v))
    }

    pub fn kind(self, value: Option<&str>) -> Self {
        self.with(value, |v| Predicate::Equals(Column::Type, v))
    }

    pub fn name_contains(self, value: Option<&str>) -> Self {
        self.with(value, |v| Predicate::Contains(Column::Name, v))
    }

    fn with(mut self, value: Option<&str>, predicate: impl FnOnce(String) -> Predicate) -> Self {
        match value {
            Some(value) if !value.is_empty() => {
                self.predicates.push(predicate(value.to_string()));
                self
            }
            _ => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn arguments(&self) -> Vec<String> {
        self.predicates.iter().map(Predicate::argument).collect()
    }

    /// Appends ` WHERE a AND b ...`, or nothing when the filter is empty.
    pub fn push_where(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        for (position, predicate) in self.predicates.iter().enumerate() {
            builder.push(if position == 0 { " WHERE " } else { " AND " });
            builder
                .push(predicate.column().qualified())
                .push(predicate.operator())
                .push_bind(predicate.argument());
        }
    }

    pub fn count_query(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*)");
        builder.push(PRODUCT_FROM);
        self.push_where(&mut builder);
        builder
    }

    /// Same predicates as [`Self::count_query`], then id order and the page
    /// bounds as the last two parameters.
    pub fn page_query(&self, limit: i64, offset: i64) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(PRODUCT_COLUMNS);
        builder.push(PRODUCT_FROM);
        self.push_where(&mut builder);
        builder
            .push(" ORDER BY p.id LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn where_clause(builder: &QueryBuilder<'_, Postgres>) -> String {
        let sql = builder.sql();
        match sql.find(" WHERE ") {
            Some(start) => {
                let rest = &sql[start..];
                let end = rest.find(" ORDER BY ").unwrap_or(rest.len());
                rest[..end].to_string()
            }
            None => String::new(),
        }
    }

    #[test]
    fn empty_filter_renders_no_where_clause() {
        let filter = ProductFilter::new().status(None).kind(Some("")).name_contains(None);

        assert!(filter.is_empty());
        assert_eq!(
            filter.count_query().sql(),
            "SELECT COUNT(*) FROM product p JOIN owner o ON p.owner = o.id"
        );
        assert!(filter
            .page_query(15, 0)
            .sql()
            .ends_with("JOIN owner o ON p.owner = o.id ORDER BY p.id LIMIT $1 OFFSET $2"));
    }

    #[test]
    fn all_filters_are_anded_in_order() {
        let filter = ProductFilter::new()
            .status(Some("available"))
            .kind(Some("top"))
            .name_contains(Some("shi"));

        assert_eq!(
            where_clause(&filter.count_query()),
            " WHERE p.status = $1 AND p.type = $2 AND p.name ILIKE $3"
        );
        assert_eq!(filter.arguments(), vec!["available", "top", "%shi%"]);
    }

    #[test]
    fn page_bounds_follow_the_filter_placeholders() {
        let filter = ProductFilter::new()
            .status(Some("available"))
            .name_contains(Some("shi"));

        let page = filter.page_query(10, 20);

        assert!(page
            .sql()
            .ends_with(" WHERE p.status = $1 AND p.name ILIKE $2 ORDER BY p.id LIMIT $3 OFFSET $4"));
    }

    #[test]
    fn count_and_page_share_the_same_where_clause() {
        let combinations = [
            (Some("sold"), None, None),
            (None, Some("bottom"), None),
            (None, None, Some("jean")),
            (None, Some("top"), Some("tee")),
            (Some("available"), Some("top"), Some("shirt")),
        ];

        for (status, kind, name) in combinations {
            let filter = ProductFilter::new().status(status).kind(kind).name_contains(name);
            assert_eq!(
                where_clause(&filter.count_query()),
                where_clause(&filter.page_query(15, 0)),
            );
        }
    }

    #[test]
    fn only_non_empty_values_become_predicates() {
        let filter = ProductFilter::new()
            .status(Some(""))
            .kind(Some("top"))
            .name_contains(Some(""));

        assert_eq!(
            filter.predicates(),
            &[Predicate::Equals(Column::Type, "top".to_string())]
        );
        assert_eq!(
            where_clause(&filter.page_query(15, 0)),
            " WHERE p.type = $1"
        );
    }

    #[test]
    fn substring_values_are_bound_not_interpolated() {
        let filter = ProductFilter::new().name_contains(Some("'; DROP TABLE product; --"));

        assert!(!filter.count_query().sql().contains("DROP"));
        assert_eq!(filter.arguments(), vec!["%'; DROP TABLE product; --%"]);
    }
}
