use anyhow::Context;
use bookshelf_app::App;
use bookshelf_kernel::settings::Settings;
use clap::{Parser, Subcommand};

/// Book catalogue service
#[derive(Debug, Parser)]
#[command(name = "bookshelf", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Migrate, then serve the HTTP API until interrupted (default)
    Serve,
    /// Apply pending migrations and exit
    Migrate,
    /// Print the HTTP route table
    Routes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load bookshelf settings")?;
    bookshelf_telemetry::init(&settings.telemetry);

    let app = App::new(settings).await?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => app.run().await?,
        Command::Migrate => {
            let applied = app.migrate().await?;
            println!("applied {applied} migration(s)");
        }
        Command::Routes => {
            for (method, path) in app.routes() {
                println!("{method:<7} {path}");
            }
        }
    }

    Ok(())
}
