use std::sync::Arc;

use async_trait::async_trait;
use models::locality;
use tracing::{debug, info, instrument};

use super::domain::{LocalityPatch, NewLocality};
use super::repository::LocalityRepository;
use crate::errors::ServiceError;
use crate::exists::{self, ExistsById};
use crate::lookup::ProvinceDirectory;
use crate::report::{self, CountReport};

pub struct LocalityService<R: LocalityRepository + ?Sized = dyn LocalityRepository> {
    repo: Arc<R>,
    provinces: Arc<dyn ProvinceDirectory>,
}

impl<R: LocalityRepository + ?Sized> LocalityService<R> {
    pub fn new(repo: Arc<R>, provinces: Arc<dyn ProvinceDirectory>) -> Self { Self { repo, provinces } }

    /// Create a locality inside the province called `input.province_name`.
    ///
    /// The province is resolved first: an unknown name fails with
    /// `ProvinceNotFound` and nothing is written.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::errors::ServiceError;
    /// use service::locality::NewLocality;
    /// use service::memory::MemoryStore;
    /// use service::registry::Services;
    ///
    /// let services = Services::new(Arc::new(MemoryStore::seeded()));
    /// let input = NewLocality { locality_name: "Rosario".into(), province_name: "Santa Fe".into() };
    /// let rosario = tokio_test::block_on(services.localities.create(input)).unwrap();
    /// assert_eq!(rosario.province_id, 3);
    ///
    /// let lost = NewLocality { locality_name: "Atlantis".into(), province_name: "Nowhere".into() };
    /// let err = tokio_test::block_on(services.localities.create(lost)).unwrap_err();
    /// assert!(matches!(err, ServiceError::ProvinceNotFound(_)));
    /// ```
    #[instrument(skip(self, input), fields(locality_name = %input.locality_name, province_name = %input.province_name))]
    pub async fn create(&self, input: NewLocality) -> Result<locality::Model, ServiceError> {
        let province_id = self.provinces.resolve(&input.province_name).await?;
        locality::validate_name(&input.locality_name)?;
        if self.repo.name_taken(&input.locality_name, province_id).await? {
            debug!("locality already present in province");
            return Err(ServiceError::already_exists("locality_name"));
        }
        let candidate = locality::Model { id: 0, locality_name: input.locality_name, province_id };
        let stored = self.repo.insert(candidate).await?;
        info!(id = stored.id, province_id, "locality_created");
        Ok(stored)
    }

    pub async fn get(&self, id: i64) -> Result<locality::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("locality"))
    }

    pub async fn list(&self) -> Result<Vec<locality::Model>, ServiceError> { self.repo.list().await }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: LocalityPatch) -> Result<locality::Model, ServiceError> {
        let current = self.get(id).await?;
        let province_id = match patch.province_name.as_deref() {
            Some(name) => self.provinces.resolve(name).await?,
            None => current.province_id,
        };
        let next = locality::Model {
            id,
            locality_name: patch.locality_name.unwrap_or_else(|| current.locality_name.clone()),
            province_id,
        };
        locality::validate_name(&next.locality_name)?;
        let key_changed = next.locality_name != current.locality_name || next.province_id != current.province_id;
        if key_changed && self.repo.name_taken(&next.locality_name, next.province_id).await? {
            debug!("locality already present in province");
            return Err(ServiceError::already_exists("locality_name"));
        }
        let stored = self.repo.update(next).await?;
        info!(id, "locality_updated");
        Ok(stored)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("locality"));
        }
        info!(id, "locality_deleted");
        Ok(())
    }

    pub async fn report_sellers(&self, id: i64) -> Result<CountReport, ServiceError> {
        if !self.exists_by_id(id).await {
            return Err(ServiceError::parent_not_found("locality"));
        }
        report::single("locality", id, self.repo.count_sellers(Some(id)).await?)
    }

    pub async fn report_all_sellers(&self) -> Result<Vec<CountReport>, ServiceError> {
        self.repo.count_sellers(None).await
    }

    pub async fn report_carriers(&self, id: i64) -> Result<CountReport, ServiceError> {
        if !self.exists_by_id(id).await {
            return Err(ServiceError::parent_not_found("locality"));
        }
        report::single("locality", id, self.repo.count_carriers(Some(id)).await?)
    }

    pub async fn report_all_carriers(&self) -> Result<Vec<CountReport>, ServiceError> {
        self.repo.count_carriers(None).await
    }
}

#[async_trait]
impl<R: LocalityRepository + ?Sized> ExistsById for LocalityService<R> {
    async fn exists_by_id(&self, id: i64) -> bool { exists::answer("locality", id, self.repo.exists(id).await) }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::memory::MemoryStore;
    use crate::registry::Services;
    use crate::test_support::{fixture, new_carrier, new_locality, new_seller};

    fn springfield_services() -> Services {
        let store = Arc::new(MemoryStore::new());
        for name in ["Cook County", "Orange County", "King County", "Shelbyville County"] {
            store.add_province(name, "USA").unwrap();
        }
        Services::new(store)
    }

    #[tokio::test]
    async fn springfield_lands_in_shelbyville_county() {
        let s = springfield_services();
        let springfield = s.localities.create(new_locality("Springfield", "Shelbyville County")).await.unwrap();
        assert_eq!(springfield.province_id, 4);

        let lost = s.localities.create(new_locality("Springfield", "Nowhereville")).await;
        assert_eq!(lost, Err(ServiceError::ProvinceNotFound("Nowhereville".into())));
        assert_eq!(s.localities.list().await.unwrap().len(), 1);

        s.sellers.create(new_seller(77, springfield.id)).await.unwrap();
        let one = s.localities.report_sellers(springfield.id).await.unwrap();
        assert_eq!(one, CountReport { parent_id: springfield.id, parent_name: "Springfield".into(), count: 1 });

        let quiet = s.localities.create(new_locality("Ogdenville", "Shelbyville County")).await.unwrap();
        assert_eq!(s.localities.report_sellers(quiet.id).await.unwrap().count, 0);
    }

    struct CountingProvinces {
        existence_checks: AtomicUsize,
    }

    #[async_trait]
    impl ExistsById for CountingProvinces {
        async fn exists_by_id(&self, _id: i64) -> bool {
            self.existence_checks.fetch_add(1, Ordering::SeqCst);
            true
        }
    }

    #[async_trait]
    impl ProvinceDirectory for CountingProvinces {
        async fn resolve(&self, _province_name: &str) -> Result<i64, ServiceError> { Ok(7) }
    }

    #[tokio::test]
    async fn resolved_province_is_not_checked_twice() {
        let provinces = Arc::new(CountingProvinces { existence_checks: AtomicUsize::new(0) });
        let svc = LocalityService::new(Arc::new(MemoryStore::new()), provinces.clone() as Arc<dyn ProvinceDirectory>);
        let created = svc.create(new_locality("Rafaela", "Santa Fe")).await.unwrap();
        assert_eq!(created.province_id, 7);
        let patch = LocalityPatch { province_name: Some("Cordoba".into()), ..Default::default() };
        svc.update(created.id, patch).await.unwrap();
        assert_eq!(provinces.existence_checks.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn same_name_allowed_in_another_province() {
        let (_, s) = fixture();
        s.localities.create(new_locality("San Martin", "Mendoza")).await.unwrap();
        assert!(s.localities.create(new_locality("San Martin", "Buenos Aires")).await.is_ok());
        assert_eq!(
            s.localities.create(new_locality("San Martin", "Mendoza")).await,
            Err(ServiceError::already_exists("locality_name"))
        );
    }

    #[tokio::test]
    async fn unknown_province_wins_over_blank_name() {
        let (_, s) = fixture();
        let input = new_locality(" ", "Atlantis");
        assert_eq!(s.localities.create(input).await, Err(ServiceError::ProvinceNotFound("Atlantis".into())));
    }

    #[tokio::test]
    async fn patching_province_resolves_by_name() {
        let (_, s) = fixture();
        let loc = s.localities.create(new_locality("Villa Maria", "Santa Fe")).await.unwrap();
        let moved = s
            .localities
            .update(loc.id, LocalityPatch { province_name: Some("Cordoba".into()), ..Default::default() })
            .await
            .unwrap();
        assert_eq!((moved.locality_name.as_str(), moved.province_id), ("Villa Maria", 2));
        let bad = LocalityPatch { province_name: Some("Narnia".into()), ..Default::default() };
        assert_eq!(s.localities.update(loc.id, bad).await, Err(ServiceError::ProvinceNotFound("Narnia".into())));
    }

    #[tokio::test]
    async fn seller_and_carrier_reports_are_independent() {
        let (_, s) = fixture();
        let a = s.localities.create(new_locality("Palermo", "Buenos Aires")).await.unwrap();
        let b = s.localities.create(new_locality("Belgrano", "Buenos Aires")).await.unwrap();
        s.sellers.create(new_seller(1, a.id)).await.unwrap();
        s.sellers.create(new_seller(2, a.id)).await.unwrap();
        s.carriers.create(new_carrier("CR-1", b.id)).await.unwrap();

        let sellers: Vec<i64> = s.localities.report_all_sellers().await.unwrap().iter().map(|r| r.count).collect();
        let carriers: Vec<i64> = s.localities.report_all_carriers().await.unwrap().iter().map(|r| r.count).collect();
        assert_eq!(sellers, vec![2, 0]);
        assert_eq!(carriers, vec![0, 1]);
        assert_eq!(s.localities.report_carriers(99).await, Err(ServiceError::parent_not_found("locality")));
    }
}
