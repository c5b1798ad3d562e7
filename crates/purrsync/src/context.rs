//! Composition root: config -> HTTP client -> remote + store -> repository.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use purrsync_api::CatApiClient;
use purrsync_config::Config;
use purrsync_core::{CatApiRemote, CatsController, CatsRepository, FileFavouriteStore};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Everything a data command needs. Controllers are created per command.
pub struct Context {
    pub config: Config,
    pub repository: Arc<CatsRepository>,
}

impl Context {
    /// Wire the stack from a loaded config, applying CLI overrides.
    pub async fn build(mut config: Config, global: &GlobalOpts) -> Result<Self, CliError> {
        if let Some(ref key) = global.api_key {
            config.api.api_key = Some(key.clone());
        }
        if let Some(ref store) = global.store {
            config.store_path = Some(store.clone());
        }

        let client = build_client(&config)?;
        let remote = CatApiRemote::new(client).with_page_size(config.page_size);

        let store_path: PathBuf = config.store_path();
        debug!(store = %store_path.display(), "opening favourite store");
        let store = FileFavouriteStore::open(store_path).await?;

        let repository = Arc::new(CatsRepository::new(Arc::new(remote), Arc::new(store)));
        Ok(Self { config, repository })
    }

    /// A fresh controller over the shared repository.
    pub fn controller(&self) -> CatsController {
        CatsController::from_repository(&self.repository)
    }
}

fn build_client(config: &Config) -> Result<CatApiClient, CliError> {
    let transport = config.to_transport();
    let client = match config.api_key() {
        Some(key) => CatApiClient::from_api_key(&config.api.base_url, &key, &transport)?,
        None => {
            debug!("no API key configured; using anonymous client");
            CatApiClient::anonymous(&config.api.base_url, &transport)?
        }
    };
    Ok(client)
}

/// Load config from `--config` or the platform default path.
pub fn load_config(global: &GlobalOpts) -> Result<Config, CliError> {
    let config = match global.config {
        Some(ref path) => purrsync_config::extract(&purrsync_config::figment(path))?,
        None => purrsync_config::load_config()?,
    };
    Ok(config)
}

pub fn config_path(global: &GlobalOpts) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(purrsync_config::config_path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use purrsync_core::FavouriteStore;

    use super::*;
    use crate::cli::Cli;

    fn global(store: &std::path::Path, extra: &[&str]) -> GlobalOpts {
        let mut args = vec!["purrsync", "--store", store.to_str().unwrap()];
        args.extend_from_slice(extra);
        args.push("cats");
        Cli::try_parse_from(args).unwrap().global
    }

    fn config_for(server: &MockServer) -> Config {
        let mut config = Config::default();
        config.api.base_url = format!("{}/v1", server.uri());
        config
    }

    #[tokio::test]
    async fn page_is_merged_with_file_store() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/images/search"))
            .and(query_param("page", "0"))
            .and(query_param("limit", "10"))
            .and(header("x-api-key", "flag-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": "a", "url": "https://cdn/a.jpg" },
                { "id": "b", "url": "https://cdn/b.jpg" }
            ])))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("favourites.json");
        let opts = global(&store, &["--api-key", "flag-key"]);
        let ctx = Context::build(config_for(&server), &opts).await.unwrap();

        ctx.repository.store().insert_favourite("b").await.unwrap();

        let controller = ctx.controller();
        controller.load(0).await;
        controller.settle().await;

        let flags: Vec<(String, bool)> = controller
            .snapshot()
            .items
            .into_iter()
            .map(|i| (i.id, i.is_favourite))
            .collect();
        assert_eq!(flags, [("a".to_owned(), false), ("b".to_owned(), true)]);
        assert!(store.exists());
    }

    #[tokio::test]
    async fn overrides_land_in_config() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("favs.json");
        let opts = global(&store, &["--api-key", "k"]);

        let ctx = Context::build(config_for(&server), &opts).await.unwrap();

        assert_eq!(ctx.config.store_path(), store);
        assert_eq!(ctx.config.api.api_key.as_deref(), Some("k"));
    }

    #[tokio::test]
    async fn corrupt_store_fails_build() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("favs.json");
        std::fs::write(&store, "{ nope").unwrap();

        let result = Context::build(config_for(&server), &global(&store, &[])).await;
        assert!(matches!(result, Err(CliError::Store(_))));
    }
}
