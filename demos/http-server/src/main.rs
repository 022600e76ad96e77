use castlehunt::prelude::*;

const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging("info");

    let bind = std::env::var("CASTLEHUNT_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
    let seed = match std::env::var("CASTLEHUNT_SEED") {
        Ok(raw) => Some(raw.parse::<u64>().map_err(|e| {
            format!("CASTLEHUNT_SEED must be an unsigned integer, got {raw:?}: {e}")
        })?),
        Err(_) => None,
    };

    let mut builder = CastleHuntServer::builder().bind(&bind);
    if let Ok(path) = std::env::var("CASTLEHUNT_LAYOUT") {
        builder = builder.layout(load_layout(path)?);
    }
    if let Some(seed) = seed {
        tracing::info!(seed, "using fixed treasure seed");
        builder = builder.seed(seed);
    }

    let server = builder.build().await?;
    tracing::info!(addr = %server.local_addr()?, "castle is open");

    let router = server
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "cannot listen for ctrl-c");
                std::future::pending::<()>().await;
            }
        })
        .await;
    tracing::info!(
        moves = router.session().moves(),
        treasures = router.session().treasures_found(),
        "final game state"
    );
    Ok(())
}
