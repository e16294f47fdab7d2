use clap::Parser;

use crate::application::use_cases::ListSource;
use crate::wanted_listing::domain::SearchParams;

/// List wanted persons from the FBI Wanted API as terminal cards
#[derive(Parser, Debug, Default)]
#[command(name = "wanted-list")]
#[command(version)]
#[command(about = "List wanted persons from the FBI Wanted API as terminal cards", long_about = None)]
pub struct Args {
    /// Show a single record by uid instead of the listing
    #[arg(short, long, value_name = "UID", conflicts_with_all = ["page", "page_size", "field_offices", "poster_classification"])]
    pub uid: Option<String>,

    /// Listing page number
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,

    /// Number of records per listing page
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Only list records of this field office (e.g. "miami")
    #[arg(long, value_name = "OFFICE")]
    pub field_offices: Option<String>,

    /// Only list records with this poster classification (e.g. "ten")
    #[arg(long, value_name = "CLASSIFICATION")]
    pub poster_classification: Option<String>,

    /// Open the official details page of a listed record in the browser
    #[arg(long, value_name = "UID")]
    pub open: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Display language: en or es (defaults to $LANG)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to a config file (defaults to ./wanted-list.config.yml if present)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Search filters given on the command line, if any
    pub fn search_params(&self) -> Option<SearchParams> {
        let params = SearchParams {
            page: self.page,
            page_size: self.page_size,
            field_offices: self.field_offices.clone(),
            poster_classification: self.poster_classification.clone(),
        };

        if params.is_empty() {
            None
        } else {
            Some(params)
        }
    }

    /// Which request the list view issues on activation
    pub fn list_source(&self) -> ListSource {
        if let Some(uid) = &self.uid {
            return ListSource::Single(uid.clone());
        }

        match self.search_params() {
            Some(params) => ListSource::Search(params),
            None => ListSource::All,
        }
    }
}
