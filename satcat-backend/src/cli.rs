//! Command-line flags of the `satcat` binary and their mapping onto queries.

use clap::Parser;
use satcat_common::{FilterCriteria, Satellite, SearchQuery};

use crate::config::CatalogConfig;
use crate::error::ValidationError;
use crate::module::catalog::Facets;
use crate::service::{CatalogService, Page};

#[derive(Parser, Debug)]
#[command(
    name = "satcat",
    about = "Fetch the satellite catalog, filter it and print one page",
    version
)]
pub struct Cli {
    /// Path to the TOML config file (default: ./config.toml if present).
    #[arg(short, long)]
    pub config: Option<String>,

    /// Registering country code, exact match (e.g. US, PRC).
    #[arg(long)]
    pub country: Option<String>,

    /// Orbit regime code, exact match (e.g. LEO, GEO).
    #[arg(long)]
    pub orbit: Option<String>,

    /// Object type, exact match (e.g. PAYLOAD, DEBRIS).
    #[arg(long)]
    pub object_type: Option<String>,

    /// Case-insensitive text matched against NORAD id and name.
    #[arg(short, long)]
    pub search: Option<String>,

    /// 1-indexed page number.
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Page size (default: per_page from config).
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Print the page as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Print the available filter values instead of a page.
    #[arg(long)]
    pub facets: bool,
}

/// What the binary prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Table,
    Json,
    Facets,
    FacetsJson,
}

impl Cli {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            country_code: self.country.clone(),
            orbit_regime: self.orbit.clone(),
            object_type: self.object_type.clone(),
        }
    }

    pub fn search_query(&self) -> SearchQuery {
        SearchQuery::from(self.search.as_deref())
    }

    /// `--per-page` if given, else the configured page size.
    pub fn per_page(&self, config: &CatalogConfig) -> usize {
        self.per_page.unwrap_or(config.per_page)
    }

    pub fn output(&self) -> Output {
        match (self.facets, self.json) {
            (true, true) => Output::FacetsJson,
            (true, false) => Output::Facets,
            (false, true) => Output::Json,
            (false, false) => Output::Table,
        }
    }

    /// Run the page query these flags describe.
    pub fn query<'a>(
        &self,
        service: &'a CatalogService,
        config: &CatalogConfig,
    ) -> Result<Page<&'a Satellite>, ValidationError> {
        service.query(
            &self.criteria(),
            &self.search_query(),
            self.page,
            self.per_page(config),
        )
    }
}

pub fn render_table(page: &Page<&Satellite>) -> String {
    let mut out = format!(
        "{:<8} {:<28} {:<8} {:<6} {}\n",
        "NORAD", "NAME", "COUNTRY", "ORBIT", "TYPE"
    );
    for sat in &page.items {
        out.push_str(&format!(
            "{:<8} {:<28} {:<8} {:<6} {}\n",
            sat.norad_cat_id, sat.name, sat.country_code, sat.orbit_code, sat.object_type
        ));
    }
    out.push_str(&format!(
        "page {}/{} ({} matches)",
        page.page, page.total_pages, page.total_matches
    ));
    out
}

pub fn render_facets(facets: &Facets) -> String {
    format!(
        "countries:    {}\norbits:       {}\nobject types: {}",
        facets.country_codes.join(", "),
        facets.orbit_codes.join(", "),
        facets.object_types.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> CatalogService {
        CatalogService::from_satellites(vec![
            Satellite::new("25544", "ISS", "US", "LEO", "PAYLOAD"),
            Satellite::new("48274", "Starlink-10", "US", "LEO", "PAYLOAD"),
            Satellite::new("41866", "GOES 16", "US", "GEO", "PAYLOAD"),
            Satellite::new("43013", "CZ-2D R/B", "PRC", "LEO", "ROCKET BODY"),
        ])
    }

    #[test]
    fn test_category_flags_map_to_criteria() {
        let cli = Cli::try_parse_from([
            "satcat", "--country", "US", "--orbit", "LEO", "--object-type", "PAYLOAD",
        ])
        .unwrap();
        let criteria = cli.criteria();
        assert_eq!(criteria.country(), Some("US"));
        assert_eq!(criteria.orbit_regime(), Some("LEO"));
        assert_eq!(criteria.object_type(), Some("PAYLOAD"));
    }

    #[test]
    fn test_no_flags_is_unconstrained() {
        let cli = Cli::try_parse_from(["satcat"]).unwrap();
        assert!(cli.criteria().is_unconstrained());
        assert!(cli.search_query().is_empty());
        assert_eq!(cli.page, 1);
        assert_eq!(cli.output(), Output::Table);
    }

    #[test]
    fn test_search_flag_maps_to_query() {
        let cli = Cli::try_parse_from(["satcat", "--search", "StarLink"]).unwrap();
        assert_eq!(cli.search_query().folded(), Some("starlink"));

        let short = Cli::try_parse_from(["satcat", "-s", "ISS"]).unwrap();
        assert_eq!(short.search_query(), SearchQuery::new("iss"));
    }

    #[test]
    fn test_per_page_falls_back_to_config() {
        let config = CatalogConfig {
            per_page: 25,
            ..CatalogConfig::default()
        };

        let cli = Cli::try_parse_from(["satcat"]).unwrap();
        assert_eq!(cli.per_page(&config), 25);

        let cli = Cli::try_parse_from(["satcat", "--per-page", "3"]).unwrap();
        assert_eq!(cli.per_page(&config), 3);
    }

    #[test]
    fn test_output_selection() {
        let json = Cli::try_parse_from(["satcat", "--json"]).unwrap();
        assert_eq!(json.output(), Output::Json);

        let facets = Cli::try_parse_from(["satcat", "--facets"]).unwrap();
        assert_eq!(facets.output(), Output::Facets);

        let both = Cli::try_parse_from(["satcat", "--facets", "--json"]).unwrap();
        assert_eq!(both.output(), Output::FacetsJson);
    }

    #[test]
    fn test_flags_drive_query() {
        let service = create_test_service();
        let config = CatalogConfig::default();
        let cli = Cli::try_parse_from([
            "satcat", "--country", "US", "--orbit", "LEO", "--search", "iss",
        ])
        .unwrap();

        let page = cli.query(&service, &config).unwrap();
        assert_eq!(page.total_matches, 1);
        assert_eq!(page.items[0].norad_cat_id, "25544");
        assert_eq!(page.per_page, 10);
    }

    #[test]
    fn test_page_zero_is_rejected() {
        let service = create_test_service();
        let cli = Cli::try_parse_from(["satcat", "--page", "0"]).unwrap();
        let result = cli.query(&service, &CatalogConfig::default());
        assert_eq!(result.unwrap_err(), ValidationError::Page(0));

        let cli = Cli::try_parse_from(["satcat", "--per-page", "0"]).unwrap();
        let result = cli.query(&service, &CatalogConfig::default());
        assert_eq!(result.unwrap_err(), ValidationError::PerPage(0));
    }

    #[test]
    fn test_negative_page_does_not_parse() {
        assert!(Cli::try_parse_from(["satcat", "--page", "-1"]).is_err());
        assert!(Cli::try_parse_from(["satcat", "--per-page", "ten"]).is_err());
    }

    #[test]
    fn test_render_table_and_facets() {
        let service = create_test_service();
        let cli = Cli::try_parse_from(["satcat", "--per-page", "2"]).unwrap();
        let page = cli.query(&service, &CatalogConfig::default()).unwrap();

        let table = render_table(&page);
        assert!(table.starts_with("NORAD"));
        assert!(table.contains("Starlink-10"));
        assert!(!table.contains("GOES 16"));
        assert!(table.ends_with("page 1/2 (4 matches)"));

        let facets = render_facets(&service.facets());
        assert!(facets.contains("countries:    PRC, US"));
        assert!(facets.contains("orbits:       GEO, LEO"));
    }
}
