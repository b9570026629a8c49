use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use trivia::prompt::TerminalPrompter;
use trivia::render::Palette;
use trivia::{Config, Quiz};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Time to test your knowledge on Sports, Technology and Science!
    #[command(name = "startquiz")]
    StartQuiz,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::StartQuiz) => {
            let quiz = Quiz::new(&Config::default(), Palette::from_env());
            let mut prompter = TerminalPrompter::stdio();

            let outcome = quiz
                .run(&mut prompter, &mut std::io::stdout())
                .context("quiz run failed")?;
            debug!(?outcome, "quiz finished");
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
