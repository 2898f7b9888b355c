use memdb::Database;
use memdb::config::Config;
use memdb::session::run_session;
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Parse command line args
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_args(&args);

    // Replies go to stdout, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    let db = Database::with_table(config.table);
    info!(
        table = config.table.name(),
        timeout_ms = config.timeout,
        "memdb ready, reading commands from stdin"
    );

    // Ctrl-C cancels the read loop and any request still in flight
    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutting down...");
            signal_token.cancel();
        }
    });

    let input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();
    run_session(&db, input, &mut output, config.request_timeout(), &shutdown).await
}
