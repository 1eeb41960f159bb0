use clap::Parser;
use otp_vpn::{Outcome, SessionPaths};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "otp-vpn")]
#[command(about = "OpenVPN session bootstrap with TOTP one-time passwords")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Set up logging on stderr; user guidance goes to stdout
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let paths = SessionPaths::discover()?;

    match otp_vpn::run(&paths)? {
        Outcome::MissingTool(tool) => {
            println!("please install {} or add it to PATH", tool);
        }
        Outcome::CredentialsCreated(path) => {
            println!(" Could not open {0}\n A sample file {0} was created\n", path.display());
            println!(" Please edit this file and fill in your secret, username and password");
        }
        Outcome::Launched => {
            info!("Setup script and jump script launched");
        }
    }

    Ok(())
}
