use std::net::SocketAddr;

use aide::{
    axum::ApiRouter,
    openapi::{Info, OpenApi},
};
use anyhow::Context;
use axum::Router;
use contactdesk_core_contact_contracts::ContactFeatureService;
use contactdesk_core_health_contracts::HealthFeatureService;
use contactdesk_di::Build;
use contactdesk_utils::contactdesk_version;
use tokio::net::TcpListener;
use tracing::info;

mod docs;
mod errors;
mod extractors;
mod macros;
mod middlewares;
mod models;
mod routes;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Health, Contact> {
    config: RestServerConfig,
    health: Health,
    contact: Contact,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub addr: SocketAddr,
}

impl<Health, Contact> RestServer<Health, Contact>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
{
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = self.config.addr;
        let router = self.router();

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind to {addr}"))?;
        info!("Listening on http://{}", listener.local_addr()?);

        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let mut api = OpenApi {
            info: Info {
                title: "contactdesk".into(),
                description: Some("Contact form submissions".into()),
                version: contactdesk_version().into(),
                ..Default::default()
            },
            ..Default::default()
        };

        let router = ApiRouter::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            .finish_api(&mut api)
            .merge(docs::router(api.into()));

        middlewares::add(router)
    }
}
