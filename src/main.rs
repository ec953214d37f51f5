use clap::Parser;
use color_eyre::eyre::WrapErr;
use tracing::info;

use folio::cli::Cli;
use folio::config::Settings;
use folio::{logging, relay, App};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?.with_overrides(&cli);
    settings.validate()?;

    logging::setup(&settings.log_file, cli.verbose)
        .wrap_err_with(|| format!("cannot open log file {}", settings.log_file.display()))?;

    let relay = relay::from_config(&settings.relay)?;
    info!(mode = %relay.mode(), "starting folio");

    let terminal = ratatui::init();
    let result = App::new(settings, relay).run(terminal);
    ratatui::restore();
    result
}
