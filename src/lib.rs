//! Bookshelf application library
//!
//! Wires the books module into the kernel registry and serves it over HTTP.

use std::future::Future;

use anyhow::Context;
use bookshelf_kernel::{settings::Settings, InitCtx, ModuleRegistry};

pub mod modules;

/// Re-export commonly used types
pub use modules::*;

/// Registry holding every module this application ships
pub fn build_registry() -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);
    registry
}

/// Run the service until Ctrl+C or SIGTERM
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    run_until(settings, bookshelf_http::shutdown_signal()).await
}

/// Run the service until `shutdown` resolves, then stop every module
pub async fn run_until<F>(settings: Settings, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let registry = build_registry();
    let ctx = InitCtx {
        settings: &settings,
    };

    registry
        .init_modules(&ctx)
        .await
        .context("module initialization failed")?;
    registry
        .start_modules(&ctx)
        .await
        .context("module startup failed")?;

    let served = bookshelf_http::start_server(&registry, &settings, shutdown).await;

    registry
        .stop_modules()
        .await
        .context("module shutdown failed")?;

    served
}
