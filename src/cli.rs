use std::path::PathBuf;

use clap::Parser;

use crate::config::RelayMode;

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Terminal portfolio of Vallari Ashar")]
pub struct Cli {
    /// Settings file (defaults to ./folio.json when present)
    #[arg(short, long, env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// How contact messages are delivered
    #[arg(long, env = "FOLIO_RELAY", value_enum)]
    pub relay: Option<RelayMode>,

    #[arg(long, env = "FOLIO_EMAILJS_SERVICE_ID")]
    pub service_id: Option<String>,

    #[arg(long, env = "FOLIO_EMAILJS_TEMPLATE_ID")]
    pub template_id: Option<String>,

    #[arg(long, env = "FOLIO_EMAILJS_PUBLIC_KEY")]
    pub public_key: Option<String>,

    #[arg(long, env = "FOLIO_EMAILJS_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Inbox that receives contact messages
    #[arg(long, env = "FOLIO_RECIPIENT")]
    pub recipient: Option<String>,

    /// Resume offered for download on the home page
    #[arg(long)]
    pub resume: Option<PathBuf>,

    #[arg(long, env = "FOLIO_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
