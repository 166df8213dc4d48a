use lambda_http::{run, Error};
use tracing::info;
use bookshelf::catalog::controller::build_router;
use bookshelf::catalog::factory::create_catalog_service;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::{Configuration, RuntimeMode};
use bookshelf::utils::logging::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::from_env()?;
    setup_tracing(&config);
    info!(branch = %config.branch_id, runtime = %config.runtime, id_strategy = %config.id_strategy,
        seed = config.seed_catalog, "starting catalog");

    let catalog = create_catalog_service(&config).await?;
    let state = AppState::new(config.clone(), catalog);

    match config.runtime {
        RuntimeMode::Lambda => run(build_router::<lambda_http::Body>(state)).await,
        RuntimeMode::Server => {
            let app = build_router::<axum::body::Body>(state);
            let server = axum::Server::try_bind(&config.listen_addr)?
                .serve(app.into_make_service());
            info!(addr = %server.local_addr(), "catalog listening");
            server.with_graceful_shutdown(shutdown_signal()).await?;
            Ok(())
        }
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // no signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
    info!("shutting down catalog");
}
