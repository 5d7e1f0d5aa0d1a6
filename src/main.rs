use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use resizerd::api;
use resizerd::server;

#[derive(Parser)]
#[command(name = "resizerd")]
#[command(about = "JSON-over-HTTP image resizing service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind, e.g. 0.0.0.0:8080 (BIND_ADDR env var also works)
        #[arg(short, long)]
        bind: Option<String>,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Resizerd API",
        description = "JSON-over-HTTP image resizing service",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(api::handle_resize),
    components(schemas(api::ResizeRequestBody, api::ResizeResponse)),
    tags(
        (name = "Resize", description = "Image resizing")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let bind = match cli.command {
        Some(Commands::Serve { bind }) => bind,
        None => None,
    };

    run_server(bind).await
}

async fn run_server(bind: Option<String>) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resizerd=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = bind
        .or_else(|| std::env::var("BIND_ADDR").ok())
        .unwrap_or_else(|| "0.0.0.0:8080".to_string());

    let state = server::create_app_state();

    // Build router: shared API routes plus production-only documentation
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Resizerd server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
