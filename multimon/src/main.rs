use clap::{Parser, Subcommand};
use multimon_core::cli as commands;
use multimon_core::conf::types::OutputFormat;
use multimon_core::conf::{ConfigError, MonitorConfig, load_config_or_default, validate_config};
use multimon_core::logging::{LogMode, default_log_mode, init_logging};
use multimon_core::supervisor;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "multimon",
    version,
    about = "Multimon: tail and decode ESP-IDF logs from every attached node"
)]
struct Cli {
    /// Path to the config file (missing file means defaults)
    #[arg(long, global = true, default_value = "multimon.hcl")]
    config: PathBuf,

    /// Diagnostic log format on stderr
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogMode>,

    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Flags that take precedence over the config file.
#[derive(clap::Args, Debug)]
struct Overrides {
    /// Directory scanned for transports
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Regex a transport file name must match
    #[arg(long, global = true)]
    pattern: Option<String>,

    /// Serial baud rate
    #[arg(long, global = true)]
    baud: Option<u32>,

    /// Event output format on stdout
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Trace every line through the logger
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Monitor every discovered transport (default)
    Run,

    /// List the transports that would be monitored
    List,

    /// Decode a captured log through a single session
    Decode {
        /// Log file to read (stdin when omitted)
        input: Option<PathBuf>,

        /// Device id reported in emitted events
        #[arg(long, default_value_t = 0)]
        device: u32,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCmd {
    /// Print resolved configuration
    Dump {
        /// Output as YAML instead of JSON
        #[arg(long)]
        yaml: bool,
    },
}

fn resolve_config(cli: &Cli) -> Result<MonitorConfig, ConfigError> {
    let mut cfg = load_config_or_default(&cli.config)?;
    let o = &cli.overrides;

    if let Some(dir) = &o.dir {
        cfg.transport.dir = dir.clone();
    }
    if let Some(pattern) = &o.pattern {
        cfg.transport.pattern = pattern.clone();
    }
    if let Some(baud) = o.baud {
        cfg.transport.baud_rate = baud;
    }
    if let Some(format) = o.format {
        cfg.output.format = format;
    }
    if o.verbose {
        cfg.output.verbose = true;
    }

    validate_config(&cfg)?;
    Ok(cfg)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_mode));

    let cfg = match resolve_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("config error: {e}");
            std::process::exit(2);
        }
    };

    match cli.command {
        None | Some(Command::Run) => supervisor::run(&cfg).await,
        Some(Command::List) => commands::run_list(&cfg),
        Some(Command::Decode { input, device }) => commands::run_decode(&cfg, input, device).await,
        Some(Command::Config {
            cmd: ConfigCmd::Dump { yaml },
        }) => commands::conf::dump(&cfg, yaml),
    }
}
