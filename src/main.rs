use anyhow::Context;
use synapse::config::{ClientConfig, load_dotenv};
use synapse::logger;

fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration, using defaults: {err}");
            ClientConfig::default()
        }
    };
    logger::init(&config.log_level).context("could not initialise logging")?;
    tracing::info!(api = %config.api_base_url, "starting synapse client");

    synapse::ui::set_startup_config(config);
    dioxus::launch(synapse::ui::App);
    Ok(())
}
