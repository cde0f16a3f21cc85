//! Startup sequence: connect, register modules, migrate, run.

use anyhow::Context;
use axum::Router;
use bookshelf_db::DbPool;
use bookshelf_kernel::{settings::Settings, InitCtx, ModuleRegistry};

use crate::modules;

/// A connected application with every module registered
pub struct App {
    pub settings: Settings,
    pub pool: DbPool,
    pub registry: ModuleRegistry,
}

impl App {
    /// Connect to the database and register modules. Nothing is migrated yet.
    pub async fn new(settings: Settings) -> anyhow::Result<Self> {
        let pool = bookshelf_db::connect(&settings.database)
            .await
            .with_context(|| "failed to open database")?;

        let mut registry = ModuleRegistry::new();
        modules::register_all(&mut registry, &pool);

        Ok(Self {
            settings,
            pool,
            registry,
        })
    }

    /// Apply pending module migrations; returns how many ran
    pub async fn migrate(&self) -> anyhow::Result<usize> {
        let migrations = self.registry.collect_migrations();
        let applied = bookshelf_db::migrate(&self.pool, &migrations).await?;
        tracing::info!(applied, total = migrations.len(), "migrations complete");
        Ok(applied)
    }

    /// Migrate, then initialise modules and build the HTTP router.
    pub async fn prepare(&self) -> anyhow::Result<Router> {
        self.migrate().await?;

        let ctx = InitCtx {
            settings: &self.settings,
        };
        self.registry.init_modules(&ctx).await?;

        Ok(bookshelf_http::build_router(&self.registry, &self.settings))
    }

    /// Method/path table of the mounted API
    pub fn routes(&self) -> Vec<(String, String)> {
        bookshelf_http::route_table(&self.registry)
    }

    /// Run the full lifecycle until a shutdown signal arrives
    pub async fn run(self) -> anyhow::Result<()> {
        tracing::info!(
            env = ?self.settings.environment,
            db = %self.settings.database.url,
            "bookshelf bootstrap starting"
        );

        self.migrate().await?;

        let ctx = InitCtx {
            settings: &self.settings,
        };
        self.registry.init_modules(&ctx).await?;
        self.registry.start_modules(&ctx).await?;

        tracing::info!("bookshelf bootstrap complete");

        let served = bookshelf_http::start_server(&self.registry, &self.settings).await;

        self.registry.stop_modules().await?;
        self.pool.close().await;

        served
    }
}
