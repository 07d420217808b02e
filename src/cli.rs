// src/cli.rs
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    time::Duration,
};

use clap::Parser;
use color_eyre::eyre::{Report, Result, WrapErr};

use crate::config::{Config, consts::{AXL_PORT, DEFAULT_ENV_FILE, DEFAULT_TIMEOUT_SECS, SERVICE_COL_WIDTH}};
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// Map CUCM service parameter labels to their internal ids.
///
/// Credentials come from CUCM_HOSTNAME, CUCM_ADMIN_USER and CUCM_ADMIN_PASSWORD,
/// read from the environment after the env file is applied.
#[derive(Parser, Debug)]
#[command(name = "cucm_params", version, about)]
pub struct Args {
    /// Node hostname; overrides CUCM_HOSTNAME.
    #[arg(long)]
    pub host: Option<String>,

    /// Admin user; overrides CUCM_ADMIN_USER.
    #[arg(long)]
    pub user: Option<String>,

    /// Env file applied (overriding) before reading CUCM_* variables. A missing file is fine.
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Directory for output.json and output.md.
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// AXL (SOAP) port.
    #[arg(long, default_value_t = AXL_PORT)]
    pub axl_port: u16,

    /// ccmadmin port; defaults to 443.
    #[arg(long)]
    pub admin_port: Option<u16>,

    /// Verify the server certificate (CUCM usually presents a self-signed one).
    #[arg(long)]
    pub verify_tls: bool,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Overlay the flags on an env-derived config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(host) = &self.host {
            config.hostname = host.clone();
        }
        if let Some(user) = &self.user {
            config.username = user.clone();
        }
        config.axl_port = self.axl_port;
        config.admin_port = self.admin_port;
        config.verify_tls = self.verify_tls;
        config.timeout = Duration::from_secs(self.timeout);
        config.out_dir = self.out_dir.clone();
        config
    }
}

/// Prints the run transcript, stdout by default. Write errors are ignored:
/// the transcript never fails a run.
pub struct ConsoleProgress<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleProgress {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        let _ = self.out.write_all(text.as_bytes());
        let _ = self.out.flush();
    }
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn section(&mut self) {
        self.emit("\n");
    }

    fn step(&mut self, label: &str) {
        self.emit(&format!("{label}: "));
    }

    fn step_done(&mut self, outcome: &str) {
        self.emit(&format!("{outcome}\n"));
    }

    fn begin(&mut self, _total: usize) {
        self.emit("Parsing service parameters...\n");
    }

    fn service_started(&mut self, name: &str) {
        self.emit(&format!("{}: ", pad!(format!("* {name}"), SERVICE_COL_WIDTH)));
    }

    fn service_done(&mut self, _name: &str, count: usize) {
        self.emit(&format!("{count}\n"));
    }
}

/// What the binary prints on stderr for a failed run.
pub fn error_line(e: &Report) -> String {
    format!("\n-->Error: {e:#}")
}

/// Apply `path` with override semantics. Only a missing file is tolerated.
pub fn load_env_file(path: &Path) -> Result<()> {
    match dotenvy::from_path_override(path) {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).wrap_err_with(|| format!("failed to load {}", path.display())),
    }
}

pub fn run(args: Args) -> Result<RunSummary> {
    load_env_file(&args.env_file)?;
    let config = args.apply(Config::from_env());

    let summary = runner::run(&config, &mut ConsoleProgress::stdout())?;
    Ok(summary)
}
