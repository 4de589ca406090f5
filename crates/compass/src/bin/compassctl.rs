use clap::{Parser, Subcommand};
use compass::sys::command::Command;
use compass::sys::server::socket_path;
use std::io::Write;
use std::os::unix::net::UnixStream;

#[derive(Parser, Debug)]
#[command(name = "compassctl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Show the compass window
    Show,
    /// Hide the compass window
    Hide,
    /// Set the bearing in degrees; the value is applied as given
    Bearing {
        #[arg(allow_negative_numbers = true)]
        degrees: f64,
    },
}

impl From<Commands> for Command {
    fn from(cmd: Commands) -> Self {
        match cmd {
            Commands::Show => Command::Show,
            Commands::Hide => Command::Hide,
            Commands::Bearing { degrees } => Command::Bearing(degrees),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    send_command(&Command::from(cli.command))
}

fn send_command(cmd: &Command) -> anyhow::Result<()> {
    let path = socket_path();
    let mut stream = UnixStream::connect(&path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to compass at {}: {}. Is compass running?",
            path.display(),
            e
        )
    })?;

    writeln!(stream, "{}", cmd)?;
    log::debug!("Sent '{}'", cmd);
    Ok(())
}
