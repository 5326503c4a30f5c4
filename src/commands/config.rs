//! Config command: shows where the config file lives and the settings in effect.

use owo_colors::{OwoColorize, Stream::Stdout};

pub fn run_config() -> anyhow::Result<()> {
    let path = reltime::config::config_path()?;
    let config = reltime::config::load_from(&path)?;

    if path.exists() {
        println!("Config file: {}", path.display());
    } else {
        println!(
            "Config file: {} {}",
            path.display(),
            "(not present, using defaults)".if_supports_color(Stdout, |t| t.yellow())
        );
    }
    println!("Locale:      {}", config.locale);
    println!("Numeric:     {}", config.numeric);
    println!("Smallest:    {}", config.smallest);

    Ok(())
}
