//! Settings actions.

use crate::client::KelimeClient;
use crate::error::Result;
use crate::response::Acknowledgement;
use crate::types::Settings;

/// Provides access to study settings stored on the service.
///
/// Obtained via [`KelimeClient::settings()`].
#[derive(Debug)]
pub struct SettingsActions<'a> {
    pub(crate) client: &'a KelimeClient,
}

impl<'a> SettingsActions<'a> {
    /// Fetch the current study settings.
    ///
    /// Numeric fields may arrive as strings; they are coerced on deserialize.
    pub async fn fetch(&self) -> Result<Settings> {
        self.client.get("/api/settings").await
    }

    /// Update the study settings.
    ///
    /// The service ignores non-positive values, keeping the previous ones.
    pub async fn update(&self, settings: &Settings) -> Result<()> {
        let _: Acknowledgement = self.client.put("/api/settings", settings).await?;
        Ok(())
    }
}
