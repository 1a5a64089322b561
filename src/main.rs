//! rdkdler - CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use rdkdler::{
    api::{AreaService, HttpClient, ReqwestHttpClient},
    auth::{Authenticate, Authenticator},
    cli::{Args, Command, DownloadArgs},
    config::{parse_datetime, validate_config, validate_station_id, Config},
    download::{DownloadRequest, DownloadService},
    error::{exit_codes, Result},
    fs::{ensure_parent_dir, resolve_output_path},
    output::{
        create_spinner, print_area, print_banner, print_error, print_info,
        print_recording_summary, print_success, print_warning,
    },
    transcode::FfmpegFactory,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let mut config = load_config(args.config.clone())?;
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    let client: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new(config.http_timeout())?);
    let authenticator = Arc::new(
        Authenticator::new(client.clone())
            .with_auth_key(config.auth_key())
            .with_reauthentication_interval(config.reauthentication_interval()),
    );

    if let Some((mail, password)) = config.account.credentials() {
        print_info("Logging in to radiko premium...");
        authenticator.login(mail, password).await?;
        print_success(&format!("Logged in as {}", mail));
    }

    let result = match &args.command {
        Command::Download(download) => run_download(&config, &authenticator, download).await,
        Command::Area => run_area(client, &authenticator).await,
    };

    if let Err(e) = authenticator.logout().await {
        print_warning(&format!("Logout failed: {}", e));
    }

    result
}

fn load_config(explicit: Option<PathBuf>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load(&path);
    }

    match Config::default_path() {
        Some(path) if path.exists() => {
            tracing::debug!("Using configuration {}", path.display());
            Config::load(&path)
        }
        _ => {
            print_info("No configuration file found, using defaults and CLI arguments");
            Ok(Config::default())
        }
    }
}

async fn run_download(
    config: &Config,
    authenticator: &Arc<Authenticator>,
    download: &DownloadArgs,
) -> Result<()> {
    let station_id = validate_station_id(&download.station)?;
    let from = parse_datetime(&download.from)?;
    let to = parse_datetime(&download.to)?;

    let output = resolve_output_path(config, download.output.as_deref(), &station_id, &from)?;
    ensure_parent_dir(&output)?;

    let mut request = DownloadRequest::new(&station_id, from, to, &output);
    if let Some(cover) = &download.cover {
        request = request.with_cover(cover.clone());
    }

    print_recording_summary(
        &station_id,
        &from,
        &to,
        &output,
        authenticator.is_logged_in().await,
    );

    let service = DownloadService::new(
        authenticator.clone(),
        Arc::new(FfmpegFactory::new(config.ffmpeg.directory.clone())),
    );

    let spinner = create_spinner(&format!("Recording {}", station_id));
    let result = service.download(&request).await;
    spinner.finish_and_clear();

    result?;
    print_success(&format!("Saved {}", output.display()));
    Ok(())
}

async fn run_area(client: Arc<dyn HttpClient>, authenticator: &Authenticator) -> Result<()> {
    let current = AreaService::new(client).current_area().await?;
    let granted = authenticator.auth().await?.prefecture()?;

    println!();
    print_area("Current area", current);
    print_area("Authorized area", granted);
    println!();

    if current != granted {
        print_warning("Authorized area differs from the connection's area");
    }

    Ok(())
}
