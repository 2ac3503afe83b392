use async_trait::async_trait;

use storage::catalog::{CatalogSource, CatalogSourceError};
use study_core::model::RecordDraft;

/// Catalog source that fetches the record collection from an HTTP endpoint
/// serving the same JSON array the file sources read.
pub struct RemoteCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl RemoteCatalogSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for RemoteCatalogSource {
    async fn fetch(&self) -> Result<Vec<RecordDraft>, CatalogSourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| CatalogSourceError::Unavailable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogSourceError::Unavailable(format!(
                "catalog endpoint returned status {status}"
            )));
        }

        response
            .json::<Vec<RecordDraft>>()
            .await
            .map_err(|err| CatalogSourceError::Unavailable(err.to_string()))
    }

    fn origin(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn malformed_url_is_reported_as_unavailable() {
        let source = RemoteCatalogSource::new("not a url");
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, CatalogSourceError::Unavailable(_)));
    }

    #[test]
    fn origin_reports_the_url() {
        let source = RemoteCatalogSource::new("https://example.org/records.json");
        assert_eq!(source.origin(), "https://example.org/records.json");
    }
}
