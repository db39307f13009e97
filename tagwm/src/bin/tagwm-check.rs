use anyhow::Result;
use clap::{arg, command};
use std::path::PathBuf;
use tagwm::utils::file_handler::load_config_file;
use tagwm::utils::log::setup_logging;
use tagwm::{Config, TracingDisplayServer};
use tagwm_core::models::dto::ManagerState;
use tagwm_core::{Manager, SignalTarget};

fn main() -> Result<()> {
    let matches = command!("tagwm check")
        .about("Checks the configuration and prints the tag state it starts with")
        .help_template(tagwm::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the default config file otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(PathBuf::from);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m tagwm version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let config = match load_config_file(config_file.as_deref()) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            config
        }
        Err(err) => {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {err} \x1b[0m");
            return Err(err);
        }
    };
    if verbose {
        dbg!(&config);
    }
    if let Some(err) = setup_logging(&config.log_level) {
        tracing::warn!("Falling back to debug logging: {}", err);
    }
    let tags_ok = config.check_tags(verbose);
    let log_ok = config.check_log_level(verbose);

    let mut manager: Manager<Config, TracingDisplayServer> = Manager::new(config);
    manager.connect("property.activated", |state, signal| {
        if let SignalTarget::Tag(tag) = signal.target {
            let name = state.tag(tag).map(|t| t.name().to_owned()).unwrap_or_default();
            tracing::debug!("Tag {:?} activated", name);
        }
    });
    let delivered = manager.dispatch();
    tracing::debug!("Delivered {} startup effects", delivered);

    println!("\x1b[0;94m::\x1b[0m Startup tag state:");
    println!(
        "{}",
        serde_json::to_string_pretty(&ManagerState::from(&manager.state))?
    );
    if tags_ok && log_ok {
        println!("\x1b[0;92m    -> All checks passed \x1b[0m");
    }
    Ok(())
}
