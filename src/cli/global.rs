use clap::Args;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Settings file applied on top of the user and local config
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Disable colored error output
    #[arg(long, global = true)]
    pub no_color: bool,
}
