#![recursion_limit = "256"]

mod config;
mod routes;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let app = routes::leptos_app().expect("leptos app init failed");

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "proby listening");
    axum::serve(listener, app).await.expect("server failed");
}
