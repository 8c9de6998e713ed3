//! Collection statistics actions.

use crate::client::KelimeClient;
use crate::error::Result;
use crate::types::CollectionStats;

/// Provides access to collection-wide learning counts.
///
/// Obtained via [`KelimeClient::stats()`].
#[derive(Debug)]
pub struct StatsActions<'a> {
    pub(crate) client: &'a KelimeClient,
}

impl<'a> StatsActions<'a> {
    /// Fetch how many cards are new, learning, and learned.
    pub async fn fetch(&self) -> Result<CollectionStats> {
        self.client.get("/api/stats").await
    }
}
