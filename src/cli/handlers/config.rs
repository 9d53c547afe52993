use crate::cli::args::ConfigArgs;
use crockford::Settings;

pub fn handle(args: ConfigArgs, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(settings)?);
    } else {
        print!("{}", settings.to_toml()?);
    }
    Ok(())
}
