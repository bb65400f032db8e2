//! Per-parent dependent counts.
//!
//! Every report is a list of `(parent_id, parent_name, count)` rows, one per
//! parent, ordered by parent id. Parents without dependents are present with
//! `count == 0` (left outer join semantics).

use std::collections::BTreeMap;

use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationDef, Select,
};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct CountReport {
    pub parent_id: i64,
    pub parent_name: String,
    pub count: i64,
}

/// Pick the row for `id` out of a restricted report.
pub(crate) fn single(parent: &str, id: i64, rows: Vec<CountReport>) -> Result<CountReport, ServiceError> {
    rows.into_iter()
        .find(|r| r.parent_id == id)
        .ok_or_else(|| ServiceError::parent_not_found(parent))
}

/// `SELECT p.id, p.<name>, COUNT(d.id) FROM p LEFT JOIN d ... GROUP BY p.id, p.<name> ORDER BY p.id`.
///
/// `join` is the dependent's `belongs_to` relation reversed so that it reads
/// parent → dependent. `COUNT` runs over the dependent's id so unmatched
/// parents count zero.
pub(crate) fn count_query<P, D>(
    parent_id: P::Column,
    parent_name: P::Column,
    join: RelationDef,
    dependent_id: D,
    only: Option<i64>,
) -> Select<P>
where
    P: EntityTrait,
    D: ColumnTrait,
{
    let query = P::find()
        .select_only()
        .column_as(parent_id, "parent_id")
        .column_as(parent_name, "parent_name")
        .column_as(Expr::col((dependent_id.entity_name(), dependent_id)).count(), "count")
        .join(JoinType::LeftJoin, join)
        .group_by(parent_id)
        .group_by(parent_name)
        .order_by_asc(parent_id);
    match only {
        Some(id) => query.filter(parent_id.eq(id)),
        None => query,
    }
}

pub(crate) async fn count_by_parent<P, D>(
    db: &DatabaseConnection,
    parent_id: P::Column,
    parent_name: P::Column,
    join: RelationDef,
    dependent_id: D,
    only: Option<i64>,
) -> Result<Vec<CountReport>, ServiceError>
where
    P: EntityTrait,
    D: ColumnTrait,
{
    let query = count_query::<P, D>(parent_id, parent_name, join, dependent_id, only);
    Ok(query.into_model::<CountReport>().all(db).await?)
}

/// In-memory counterpart of [`count_by_parent`].
pub(crate) fn tally<P, F>(parents: P, foreign_keys: F, only: Option<i64>) -> Vec<CountReport>
where
    P: IntoIterator<Item = (i64, String)>,
    F: IntoIterator<Item = i64>,
{
    let mut counts: BTreeMap<i64, i64> = BTreeMap::new();
    for fk in foreign_keys {
        *counts.entry(fk).or_default() += 1;
    }
    let mut rows: Vec<CountReport> = parents
        .into_iter()
        .filter(|(id, _)| only.map_or(true, |o| o == *id))
        .map(|(id, name)| CountReport { parent_id: id, parent_name: name, count: counts.get(&id).copied().unwrap_or(0) })
        .collect();
    rows.sort_by_key(|r| r.parent_id);
    rows
}

#[cfg(test)]
mod tests {
    use models::{locality, seller};
    use sea_orm::{DbBackend, QueryTrait, RelationTrait};

    use super::*;

    fn seller_counts(only: Option<i64>) -> String {
        count_query::<locality::Entity, _>(
            locality::Column::Id,
            locality::Column::LocalityName,
            seller::Relation::Locality.def().rev(),
            seller::Column::Id,
            only,
        )
        .build(DbBackend::Postgres)
        .to_string()
    }

    #[test]
    fn count_query_is_an_outer_join_grouped_by_parent() {
        let sql = seller_counts(None);
        assert!(sql.contains(r#"COUNT("seller"."id") AS "count""#), "{sql}");
        assert!(sql.contains(r#"FROM "locality" LEFT JOIN "seller""#), "{sql}");
        assert!(sql.contains(r#"GROUP BY "locality"."id", "locality"."locality_name""#), "{sql}");
        assert!(sql.ends_with(r#"ORDER BY "locality"."id" ASC"#), "{sql}");
        assert!(!sql.contains("WHERE"), "{sql}");
    }

    #[test]
    fn restricted_count_query_filters_the_parent() {
        let sql = seller_counts(Some(3));
        assert!(sql.contains(r#"WHERE "locality"."id" = 3"#), "{sql}");
        assert!(sql.contains("LEFT JOIN"), "{sql}");
    }

    fn parents() -> Vec<(i64, String)> {
        vec![(3, "c".into()), (1, "a".into()), (2, "b".into())]
    }

    #[test]
    fn tally_keeps_zero_count_parents_in_id_order() {
        let rows = tally(parents(), [1, 1, 3], None);
        let ids: Vec<i64> = rows.iter().map(|r| r.parent_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(rows.iter().map(|r| r.count).collect::<Vec<_>>(), vec![2, 0, 1]);
    }

    #[test]
    fn tally_ignores_dangling_foreign_keys() {
        let rows = tally(parents(), [9, 9], None);
        assert_eq!(rows.iter().map(|r| r.count).sum::<i64>(), 0);
    }

    #[test]
    fn single_reports_missing_parent() {
        let rows = tally(parents(), [], Some(2));
        assert_eq!(single("section", 2, rows.clone()).map(|r| r.count), Ok(0));
        assert_eq!(single("section", 7, rows), Err(ServiceError::parent_not_found("section")));
    }
}
