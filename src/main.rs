use moenv_aqi::config::AppConfig;
use moenv_aqi::fetcher::MoenvFetcher;
use moenv_aqi::model::SnapshotError;
use moenv_aqi::pipeline;
use moenv_aqi::storage::JsonFileStorage;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout only carries the final status line
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => return fail(e.into()),
    };
    info!("Loaded config: {:?}", config);

    let fetcher = match MoenvFetcher::new(config.timeout) {
        Ok(f) => f,
        Err(e) => return fail(e.into()),
    };
    let storage = JsonFileStorage::new(&config.output_path);

    match pipeline::run(&config, &fetcher, &storage).await {
        Ok(snapshot) => {
            println!("{}", snapshot.summary_line(storage.path()));
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}

fn fail(err: SnapshotError) -> ExitCode {
    let code = err.exit_code();
    error!("Run failed with exit code {}: {}", code, err);
    eprintln!("{}", err.diagnostic());
    ExitCode::from(code)
}
