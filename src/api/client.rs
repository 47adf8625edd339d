use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::api::error::FetchError;
use crate::api::types::{AnimalImage, AnimalType, Breed};
use crate::config::{build_auth_header, ApiConfig, AuthHeader, CredentialStatus};

/// Thin client over the breeds and image-search endpoints.
///
/// The API key is resolved once, at construction.
pub struct PetApiClient {
    client: Client,
    api: ApiConfig,
    auth: Option<AuthHeader>,
}

impl PetApiClient {
    pub fn new(api: &ApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(api.timeout_seconds.into()))
            .build()
            .map_err(|source| FetchError::Network { source })?;

        if let CredentialStatus::Unconfigured { reason } = api.resolve_credential() {
            tracing::warn!("No API key configured ({}); requests will be unauthenticated", reason);
        }

        Ok(Self {
            client,
            api: api.clone(),
            auth: build_auth_header(api),
        })
    }

    /// `GET {host}/v1/breeds`
    pub async fn fetch_breeds(&self, animal: AnimalType) -> Result<Vec<Breed>, FetchError> {
        let url = self.endpoint(animal, "/v1/breeds")?;
        tracing::debug!(animal = %animal, url = %url, "Fetching breeds");
        let breeds: Vec<Breed> = self.get_json(url).await?;
        tracing::debug!(animal = %animal, count = breeds.len(), "Breeds fetched");
        Ok(breeds)
    }

    /// `GET {host}/v1/images/search?breed_ids={id}&limit={limit}`
    ///
    /// `breed_ids` is omitted when no breed filter is given.
    pub async fn search_images(
        &self,
        animal: AnimalType,
        breed_id: Option<&str>,
        limit: u32,
    ) -> Result<Vec<AnimalImage>, FetchError> {
        let mut url = self.endpoint(animal, "/v1/images/search")?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(id) = breed_id {
                query.append_pair("breed_ids", id);
            }
            query.append_pair("limit", &limit.to_string());
        }
        tracing::debug!(animal = %animal, url = %url, "Searching images");
        let images: Vec<AnimalImage> = self.get_json(url).await?;
        tracing::debug!(animal = %animal, count = images.len(), "Images fetched");
        Ok(images)
    }

    /// Download raw image bytes from a CDN url returned by the search.
    ///
    /// Image urls may point at third-party hosts, so the API key is never sent.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let url = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Network { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| FetchError::Network { source })?;
        Ok(bytes.to_vec())
    }

    fn endpoint(&self, animal: AnimalType, path: &str) -> Result<Url, FetchError> {
        let raw = format!("{}{}", self.api.base_url(animal), path);
        Url::parse(&raw).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", raw, e)))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            Some((name, value)) => builder.header(*name, value),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let response = self
            .authorized(self.client.get(url))
            .send()
            .await
            .map_err(|source| FetchError::Network { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| FetchError::Decode { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base: &str) -> PetApiClient {
        let api = ApiConfig {
            cat_base_url: base.to_string(),
            dog_base_url: format!("{}/dogs/", base),
            api_key: Some("k".to_string()),
            ..ApiConfig::default()
        };
        PetApiClient::new(&api).unwrap()
    }

    #[test]
    fn endpoint_joins_host_and_path() {
        let client = client_for("http://127.0.0.1:1");
        let url = client.endpoint(AnimalType::Cat, "/v1/breeds").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:1/v1/breeds");
        let url = client.endpoint(AnimalType::Dog, "/v1/breeds").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:1/dogs/v1/breeds");
    }

    #[test]
    fn endpoint_rejects_garbage_base() {
        let client = client_for("not a url");
        let err = client.endpoint(AnimalType::Cat, "/v1/breeds").unwrap_err();
        assert_eq!(err.kind(), "invalid_url");
    }
}
