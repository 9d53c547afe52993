use crate::cli::args::CheckArgs;
use crockford::validate;

pub fn handle(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut invalid = 0;

    for input in &args.inputs {
        match validate(input) {
            Ok(()) => {
                if !args.quiet {
                    println!("{}: valid", input);
                }
            }
            Err(e) => {
                invalid += 1;
                if !args.quiet {
                    println!("{}: invalid", input);
                }
                tracing::info!(%input, position = e.position(), "invalid input");
            }
        }
    }

    if invalid > 0 {
        return Err(format!(
            "{} of {} inputs are not valid Crockford Base32",
            invalid,
            args.inputs.len()
        )
        .into());
    }
    Ok(())
}
