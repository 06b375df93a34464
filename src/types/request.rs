use serde::Deserialize;

pub const DEFAULT_RESULTS_PER_PAGE: u64 = 20;

/// Common listing parameters. `verbose` widens representations only when
/// it is exactly the string `yes`.
#[derive(Debug, Default, Deserialize)]
pub struct PagingParams {
    pub start: Option<u64>,
    pub resultsperpage: Option<u64>,
    pub verbose: Option<String>,
}

impl PagingParams {
    pub fn start(&self) -> u64 {
        self.start.unwrap_or(0)
    }

    pub fn results_per_page(&self) -> u64 {
        self.resultsperpage.unwrap_or(DEFAULT_RESULTS_PER_PAGE)
    }

    pub fn verbose(&self) -> bool {
        self.verbose.as_deref() == Some("yes")
    }
}
