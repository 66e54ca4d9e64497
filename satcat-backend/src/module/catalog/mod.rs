///! Satellite catalog module
///!
///! - `fetcher`: one-shot retrieval of the static dataset
///! - `query`: filtering, search and pagination over a fetched collection

mod fetcher;
pub use fetcher::{CatalogFetcher, SatelliteSource};

mod query;
pub use query::{
    facets, filter_satellites, matches_criteria, matches_search, page_count, paginate, Facets,
};
