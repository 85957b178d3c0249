use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::http::{TennisApiClient, Upstream};
use crate::services::{MatchStatsService, RankingsService};

pub struct ServerService {
    host: String,
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(host: String, port: u16, config: AppConfig) -> Self {
        Self { host, port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let client = TennisApiClient::new(&self.config.upstream)?;
        info!("Forwarding to upstream {}", client.base_url());
        match self.config.cache.ttl {
            Some(ttl) => info!("Match stats cache entries expire after {:?}", ttl),
            None => info!("Match stats cache entries never expire"),
        }

        let state = Arc::new(build_state(Arc::new(client), &self.config));
        let app = create_router(state).layer(CorsLayer::permissive());

        let listener = bind(&self.host, self.port).await?;
        info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Bind the listen socket, resolving `host` as a name or IP literal
async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))
}

pub fn build_state(upstream: Arc<dyn Upstream>, config: &AppConfig) -> AppState {
    AppState {
        rankings: RankingsService::new(upstream.clone()),
        match_stats: MatchStatsService::new(upstream, &config.cache),
    }
}
