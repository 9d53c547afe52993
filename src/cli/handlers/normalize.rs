use crate::cli::args::NormalizeArgs;
use crockford::CrockfordStr;

pub fn handle(args: NormalizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Validate everything before printing anything
    let parsed = args
        .inputs
        .iter()
        .map(|s| s.parse::<CrockfordStr>())
        .collect::<Result<Vec<_>, _>>()?;

    for s in parsed {
        println!("{}", s.normalized());
    }
    Ok(())
}
