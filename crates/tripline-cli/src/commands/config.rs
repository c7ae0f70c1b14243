use clap::Subcommand;
use tripline_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Write the default configuration file if none exists
    Init,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Init => {
            let config = Config::load()?;
            config.save()?;
            println!("config written");
        }
    }
    Ok(())
}
