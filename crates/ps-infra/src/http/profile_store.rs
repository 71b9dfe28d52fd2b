use std::collections::BTreeSet;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use ps_core::config::ProfileStoreConfig;
use ps_core::ids::{RecipeId, UserId};
use ps_core::ports::{ProfileStoreError, ProfileStorePort};
use ps_core::profile::UserProfile;
use ps_core::recipe::Recipe;
use ps_core::scan::DietaryPreference;

/// HTTP adapter for the per-user profile document store.
///
/// The store is an opaque key-value document service; membership writes go
/// through a single endpoint per recipe so the id set and the body snapshot
/// change together from this client's point of view.
pub struct HttpProfileStore {
    client: Client,
    base_url: Url,
}

impl HttpProfileStore {
    pub fn new(config: &ProfileStoreConfig) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        anyhow::ensure!(
            !base_url.cannot_be_a_base(),
            "profile store base url {base_url} cannot carry a path"
        );
        Ok(Self {
            client: Client::builder().build()?,
            base_url,
        })
    }

    /// Build `/users/{id}/…`, percent-encoding every segment. Ids are opaque
    /// strings and may contain path metacharacters.
    fn user_url(&self, user_id: &UserId, trailing: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // The constructor rejects cannot-be-a-base urls.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("users")
                .push(user_id.as_str())
                .extend(trailing);
        }
        url
    }
}

fn store_err(err: reqwest::Error) -> ProfileStoreError {
    ProfileStoreError::Store(err.to_string())
}

#[async_trait]
impl ProfileStorePort for HttpProfileStore {
    async fn get_profile(&self, user_id: &UserId) -> Result<UserProfile, ProfileStoreError> {
        let response = self
            .client
            .get(self.user_url(user_id, &[]))
            .send()
            .await
            .map_err(store_err)?;

        // An unknown user is an empty profile, not an error.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(UserProfile::default());
        }
        if !response.status().is_success() {
            return Err(ProfileStoreError::Store(format!(
                "profile read failed with status {}",
                response.status().as_u16()
            )));
        }

        response
            .json::<UserProfile>()
            .await
            .map_err(|err| ProfileStoreError::Corrupt(err.to_string()))
    }

    async fn set_favorite_membership(
        &self,
        user_id: &UserId,
        recipe_id: &RecipeId,
        recipe: Option<&Recipe>,
    ) -> Result<(), ProfileStoreError> {
        let url = self.user_url(user_id, &["favorites", recipe_id.as_str()]);
        let response = match recipe {
            Some(body) => self.client.put(url).json(body).send().await,
            None => self.client.delete(url).send().await,
        }
        .map_err(store_err)?;

        if !response.status().is_success() {
            return Err(ProfileStoreError::Store(format!(
                "favorite write failed with status {}",
                response.status().as_u16()
            )));
        }
        Ok(())
    }

    async fn set_dietary_preferences(
        &self,
        user_id: &UserId,
        preferences: &BTreeSet<DietaryPreference>,
    ) -> Result<(), ProfileStoreError> {
        let response = self
            .client
            .put(self.user_url(user_id, &["preferences"]))
            .json(preferences)
            .send()
            .await
            .map_err(store_err)?;

        if !response.status().is_success() {
            return Err(ProfileStoreError::Store(format!(
                "preference write failed with status {}",
                response.status().as_u16()
            )));
        }
        Ok(())
    }
}
