mod app;
mod binder;
mod config;
mod handler;
mod logging;
mod model;
mod persistence;
mod repository;
mod service;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(app::run())
}
