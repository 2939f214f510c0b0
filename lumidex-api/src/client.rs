//! HTTP client and typed endpoint groups.

use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::Error,
    model::{
        evolution::EvolutionChain, pokemon::Pokemon, resource::ResourcePage, species::Species,
        ty::Type,
    },
};

/// User agent sent when [`ClientBuilder::user_agent`] is not called.
pub const DEFAULT_USER_AGENT: &str = concat!("lumidex/", env!("CARGO_PKG_VERSION"));

/// A configured PokeAPI client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    config: Config,
}

impl Client {
    /// Creates a new [`ClientBuilder`]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Endpoint group for creature documents and the creature index.
    pub fn pokemon(&self) -> PokemonApi<'_> {
        PokemonApi { client: self }
    }

    /// Endpoint group for type documents.
    pub fn types(&self) -> TypeApi<'_> {
        TypeApi { client: self }
    }

    /// Endpoint group for species documents.
    pub fn species(&self) -> SpeciesApi<'_> {
        SpeciesApi { client: self }
    }

    /// Endpoint group for evolution chain documents.
    pub fn evolution(&self) -> EvolutionApi<'_> {
        EvolutionApi { client: self }
    }

    pub(crate) fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        tracing::debug!(url, "GET");

        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(|source| Error::Network {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|source| Error::Network {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|source| Error::Decode {
            url: url.to_string(),
            source,
        })
    }
}

/// Builder for [`Client`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: Option<Config>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Sets the configuration; defaults to the public PokeAPI instance.
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the user agent sent with every request.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Builds the [`Client`].
    ///
    /// # Errors
    /// Returns [`Error::Build`] when the underlying HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<Client, Error> {
        let config = self.config.unwrap_or_default();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(Error::Build)?;

        Ok(Client { http, config })
    }
}

/// Operations on `/pokemon` resources.
pub struct PokemonApi<'a> {
    client: &'a Client,
}

impl<'a> PokemonApi<'a> {
    /// Fetches one page of the creature index.
    ///
    /// `offset` is the number of entries to skip and `limit` the maximum page
    /// size; the final page may hold fewer entries.
    pub async fn list(&self, offset: u32, limit: u32) -> Result<ResourcePage, Error> {
        let url = self.client.endpoint_url("pokemon");
        let query = [
            ("offset", offset.to_string()),
            ("limit", limit.to_string()),
        ];

        self.client.get_json(&url, &query).await
    }

    /// Fetches a creature document by its canonical numeric identifier.
    pub async fn get(&self, pokemon_id: u32) -> Result<Pokemon, Error> {
        let url = self.client.endpoint_url(&format!("pokemon/{}/", pokemon_id));

        self.client.get_json(&url, &[]).await
    }

    /// Fetches a creature document from an index summary URL.
    pub async fn get_by_url(&self, url: &str) -> Result<Pokemon, Error> {
        self.client.get_json(url, &[]).await
    }
}

/// Operations on `/type` resources.
pub struct TypeApi<'a> {
    client: &'a Client,
}

impl<'a> TypeApi<'a> {
    /// Fetches a type document from a summary URL.
    pub async fn get_by_url(&self, url: &str) -> Result<Type, Error> {
        self.client.get_json(url, &[]).await
    }
}

/// Operations on `/pokemon-species` resources.
pub struct SpeciesApi<'a> {
    client: &'a Client,
}

impl<'a> SpeciesApi<'a> {
    /// Fetches a species document from a summary URL.
    pub async fn get_by_url(&self, url: &str) -> Result<Species, Error> {
        self.client.get_json(url, &[]).await
    }
}

/// Operations on `/evolution-chain` resources.
pub struct EvolutionApi<'a> {
    client: &'a Client,
}

impl<'a> EvolutionApi<'a> {
    /// Fetches an evolution chain document from a species' chain reference URL.
    pub async fn get_by_url(&self, url: &str) -> Result<EvolutionChain, Error> {
        self.client.get_json(url, &[]).await
    }
}
