//! Dictionary lookup actions.

use serde::Serialize;

use crate::client::KelimeClient;
use crate::error::Result;
use crate::types::CardDraft;

/// Provides access to dictionary lookup operations.
///
/// Obtained via [`KelimeClient::words()`].
#[derive(Debug)]
pub struct WordActions<'a> {
    pub(crate) client: &'a KelimeClient,
}

#[derive(Serialize)]
struct SearchBody<'a> {
    word: &'a str,
}

impl<'a> WordActions<'a> {
    /// Look up a headword and get a proposed card back.
    ///
    /// Nothing is stored; pass the returned draft to
    /// [`CardActions::add()`](crate::actions::CardActions::add) to create the
    /// card. Lookup failures come back as a service error with a
    /// human-readable message.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use kelime::KelimeClient;
    /// # async fn example() -> kelime::Result<()> {
    /// let client = KelimeClient::new();
    ///
    /// let draft = client.words().search("merhaba").await?;
    /// println!("{} senses found", draft.translations.len());
    /// client.cards().add(&draft).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, word: &str) -> Result<CardDraft> {
        self.client
            .post("/api/words/search", &SearchBody { word })
            .await
    }
}
