//! Edge Probe binary
//!
//! One-shot edge diagnostics: webhook timestamp notifiers and a CPU temperature reader.

use clap::{Args, Parser, Subcommand};
use edge_probe::{
    build_payload, read_cpu_temperature, send_timestamp, ClientNotifier, NotifierConfig,
    RawSocketNotifier, ThermalConfig,
};
use std::io::Write;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "edge_probe")]
#[command(about = "Edge device probes: webhook timestamp notifier and CPU temperature")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Austin Couch")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Post a timestamp with a hand-built HTTP request (default)
    Notify(NotifyArgs),

    /// Post a timestamp through the HTTP client library
    Post(NotifyArgs),

    /// Print the CPU temperature
    Temp,
}

#[derive(Args, Default)]
struct NotifyArgs {
    /// Attach the board serial number as `device_id`
    #[arg(long)]
    device_id: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(&cli)?;

    let code = match &cli.command {
        Some(Commands::Notify(args)) => notify_command(args).await,
        Some(Commands::Post(args)) => post_command(args).await,
        Some(Commands::Temp) => temp_command(
            &ThermalConfig::default(),
            &mut std::io::stdout(),
            &mut std::io::stderr(),
        ),
        None => notify_command(&NotifyArgs::default()).await,
    };

    Ok(code)
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

fn notifier_config(args: &NotifyArgs) -> NotifierConfig {
    NotifierConfig::default().with_device_id(args.device_id)
}

async fn notify_command(args: &NotifyArgs) -> ExitCode {
    let config = notifier_config(args);
    let payload = build_payload(&config);
    let notifier = RawSocketNotifier::new(config);

    println!("{}", send_timestamp(&notifier, &payload).await);
    ExitCode::SUCCESS
}

async fn post_command(args: &NotifyArgs) -> ExitCode {
    let config = notifier_config(args);
    let payload = build_payload(&config);
    let notifier = ClientNotifier::new(config);

    println!("{}", send_timestamp(&notifier, &payload).await);
    ExitCode::SUCCESS
}

fn temp_command(config: &ThermalConfig, out: &mut impl Write, err: &mut impl Write) -> ExitCode {
    match read_cpu_temperature(config) {
        Ok(temperature) => {
            let _ = writeln!(out, "CPU Temperature: {}", temperature);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let _ = writeln!(err, "Failed to read temperature: {}", e);
            ExitCode::FAILURE
        }
    }
}
