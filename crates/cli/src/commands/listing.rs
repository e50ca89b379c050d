//! Shared list arguments.

use clap::Args;
use siniestros::listing::{DEFAULT_ROWS_PER_PAGE, PageRequest};

#[derive(Debug, Args)]
pub(crate) struct ListingArgs {
    /// Only show records containing this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub page: u64,

    /// Rows per page (5, 10 or 25)
    #[arg(long, default_value_t = DEFAULT_ROWS_PER_PAGE)]
    pub rows: usize,
}

impl ListingArgs {
    pub(crate) fn request(&self) -> Result<PageRequest, String> {
        let index = usize::try_from(self.page.saturating_sub(1)).map_err(|error| error.to_string())?;

        PageRequest::new(index, self.rows).map_err(|error| error.to_string())
    }
}
