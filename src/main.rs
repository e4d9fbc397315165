use anyhow::Result;
use clap::Parser;
use oneline::{
    Platform,
    commands::{self, Options},
    render::Format,
};

/// oneline - Install LocalDev + AI in one line
///
/// Detects your platform and shows the one-line install command for it,
/// optionally copying it to the clipboard. Nothing is installed by this tool.
///
/// If the ONELINE_USER_AGENT environment variable is set, it is used for
/// platform detection instead of the host's own description.
///
/// Examples:
///   oneline show          # Show the install command for this machine
///   oneline copy          # Copy it to the clipboard
#[derive(Parser, Debug)]
#[command(author, version = env!("ONELINE_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Environment-identifying string used for detection (e.g. a browser user agent)
    #[arg(long = "user-agent", short = 'u', value_name = "UA", global = true)]
    pub user_agent: Option<String>,

    /// Skip detection and use this platform
    #[arg(long, short = 'p', value_enum, global = true)]
    pub platform: Option<Platform>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = Format::Text, global = true)]
    pub format: Format,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Show the install command for the detected platform
    Show,

    /// Copy the install command to the clipboard
    Copy,

    /// Print the detected platform
    Detect,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            user_agent: self.user_agent.clone(),
            platform: self.platform,
            format: self.format,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = oneline::runtime::RealRuntime;
    let options = cli.options();

    match cli.command {
        Commands::Show => commands::show(runtime, options)?,
        Commands::Copy => commands::copy(runtime, options).await?,
        Commands::Detect => commands::detect(runtime, options)?,
    }
    Ok(())
}
