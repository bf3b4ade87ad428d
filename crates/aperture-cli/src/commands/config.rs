use anyhow::Result;

use aperture_core::AppConfig;

pub fn run(config: &AppConfig, json: bool) -> Result<()> {
    let text = if json {
        config.to_json()?
    } else {
        config.to_toml()?
    };

    if !json {
        println!("# {}", AppConfig::config_path().display());
    }
    println!("{}", text);
    Ok(())
}
