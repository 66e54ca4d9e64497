use satcat_common::{FilterCriteria, Satellite, SearchQuery};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{FetchError, ValidationError};
use crate::module::catalog::{self, Facets, SatelliteSource};

/// One page of query results plus the numbers a pager needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_matches: usize,
    pub total_pages: usize,
}

/// Holds one fetched collection and answers queries against it.
///
/// The collection is fetched once; every query is a pure function of the
/// collection and its arguments.
pub struct CatalogService {
    satellites: Vec<Satellite>,
}

impl CatalogService {
    /// Fetch the full collection from `source`.
    pub async fn load<S>(source: &S) -> Result<Self, FetchError>
    where
        S: SatelliteSource + ?Sized,
    {
        let satellites = source.fetch().await?;
        info!("Catalog loaded with {} satellites", satellites.len());
        Ok(Self::from_satellites(satellites))
    }

    pub fn from_satellites(satellites: Vec<Satellite>) -> Self {
        Self { satellites }
    }

    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    pub fn len(&self) -> usize {
        self.satellites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.satellites.is_empty()
    }

    /// Filter, then cut out the requested page.
    pub fn query(
        &self,
        criteria: &FilterCriteria,
        query: &SearchQuery,
        page: usize,
        per_page: usize,
    ) -> Result<Page<&Satellite>, ValidationError> {
        let matches = catalog::filter_satellites(&self.satellites, criteria, query);
        let items = catalog::paginate(&matches, page, per_page)?.to_vec();

        debug!(
            "Query {:?} {:?} page={} per_page={} matched {} returned {}",
            criteria,
            query.folded(),
            page,
            per_page,
            matches.len(),
            items.len()
        );

        Ok(Page {
            items,
            page,
            per_page,
            total_matches: matches.len(),
            total_pages: catalog::page_count(matches.len(), per_page),
        })
    }

    pub fn facets(&self) -> Facets {
        catalog::facets(&self.satellites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::error::NetworkError;
    use reqwest::StatusCode;

    struct FixedSource(Vec<Satellite>);

    #[async_trait]
    impl SatelliteSource for FixedSource {
        async fn fetch(&self) -> Result<Vec<Satellite>, FetchError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl SatelliteSource for FailingSource {
        async fn fetch(&self) -> Result<Vec<Satellite>, FetchError> {
            Err(NetworkError::Status(StatusCode::INTERNAL_SERVER_ERROR).into())
        }
    }

    fn create_test_catalog() -> Vec<Satellite> {
        (1..=23)
            .map(|i| {
                let country = if i % 2 == 0 { "US" } else { "PRC" };
                Satellite::new(format!("{}", 40000 + i), format!("SAT-{}", i), country, "LEO", "PAYLOAD")
            })
            .collect()
    }

    #[tokio::test]
    async fn test_load_and_query() {
        let service = CatalogService::load(&FixedSource(create_test_catalog())).await.unwrap();
        assert_eq!(service.len(), 23);

        let criteria = FilterCriteria::default().with_country("US");
        let page = service.query(&criteria, &SearchQuery::default(), 2, 5).unwrap();

        assert_eq!(page.total_matches, 11);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0].name, "SAT-12");
    }

    #[tokio::test]
    async fn test_load_surfaces_fetch_error() {
        let result = CatalogService::load(&FailingSource).await;
        assert!(matches!(result, Err(FetchError::Network(NetworkError::Status(_)))));
    }

    #[test]
    fn test_last_and_past_end_pages() {
        let service = CatalogService::from_satellites(create_test_catalog());
        let none = FilterCriteria::default();

        let last = service.query(&none, &SearchQuery::default(), 3, 10).unwrap();
        assert_eq!(last.items.len(), 3);

        let past = service.query(&none, &SearchQuery::default(), 4, 10).unwrap();
        assert!(past.items.is_empty());
        assert_eq!(past.total_pages, 3);
    }

    #[test]
    fn test_invalid_page_rejected() {
        let service = CatalogService::from_satellites(create_test_catalog());
        let result = service.query(&FilterCriteria::default(), &SearchQuery::default(), 0, 10);
        assert_eq!(result.unwrap_err(), ValidationError::Page(0));
    }

    #[test]
    fn test_facets() {
        let service = CatalogService::from_satellites(create_test_catalog());
        let facets = service.facets();
        assert_eq!(facets.country_codes, vec!["PRC", "US"]);
        assert_eq!(facets.orbit_codes, vec!["LEO"]);
    }
}
