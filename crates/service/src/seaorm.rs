//! SeaORM-backed store. Each family's `seaorm.rs` implements its repository
//! trait for [`SeaOrmStore`].

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct SeaOrmStore {
    pub db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[cfg(test)]
mod tests {
    use models::buyer;

    use super::*;
    use crate::buyer::BuyerRepository;
    use crate::errors::ServiceError;
    use crate::registry::Services;
    use crate::test_support::{get_db, new_buyer, new_locality, new_seller};

    fn suffix() -> i64 { chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default() }

    #[tokio::test]
    async fn locality_report_counts_sellers_with_outer_join() {
        let Some(db) = get_db().await else { return };
        let s = Services::seaorm(db);
        let n = suffix();
        let loc = s.localities.create(new_locality(&format!("Loc-{n}"), "Buenos Aires")).await.unwrap();
        assert_eq!(s.localities.report_sellers(loc.id).await.unwrap().count, 0);

        let cid = (n % 1_000_000_000) as i32;
        s.sellers.create(new_seller(cid, loc.id)).await.unwrap();
        let row = s.localities.report_sellers(loc.id).await.unwrap();
        assert_eq!((row.parent_name, row.count), (format!("Loc-{n}"), 1));

        let all = s.localities.report_all_sellers().await.unwrap();
        assert!(all.windows(2).all(|w| w[0].parent_id < w[1].parent_id));
        assert!(all.iter().any(|r| r.parent_id == loc.id));
    }

    #[tokio::test]
    async fn unique_index_backs_up_the_service_check() {
        let Some(db) = get_db().await else { return };
        let store = SeaOrmStore::new(db);
        let card = format!("CARD-{}", suffix());
        let row = buyer::Model { id: 0, card_number_id: card, first_name: "Ana".into(), last_name: "Suarez".into() };
        BuyerRepository::insert(&store, row.clone()).await.unwrap();
        let again = BuyerRepository::insert(&store, row).await;
        assert!(matches!(again, Err(ServiceError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn buyer_crud_round_trip() {
        let Some(db) = get_db().await else { return };
        let s = Services::seaorm(db);
        let created = s.buyers.create(new_buyer(&format!("B-{}", suffix()))).await.unwrap();
        assert_eq!(s.buyers.get(created.id).await.unwrap(), created);
        s.buyers.delete(created.id).await.unwrap();
        assert_eq!(s.buyers.get(created.id).await, Err(ServiceError::not_found("buyer")));
        assert_eq!(s.buyers.delete(created.id).await, Err(ServiceError::not_found("buyer")));
    }
}
