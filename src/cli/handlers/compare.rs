use crate::cli::args::CompareArgs;
use std::cmp::Ordering;

pub fn handle(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let answer = match crockford::compare(&args.left, &args.right)? {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    };
    println!("{}", answer);
    Ok(())
}
