//! Morse code translator & audio generator

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

use morsecode_codecs::normalize::normalize_text;
use morsecode_codecs::table::MORSE_TABLE;
use morsecode_codecs::Direction;
use morsecode_tools::messages;
use morsecode_tools::shell::{codec_warning, report_audio};
use morsecode_tools::{
    AppConfig, AudioOutcome, AutoConfirm, CommandClipboard, CommandPlayer, Confirm, LineConfirm, Session, Shell,
    WavRenderer,
};

/// Translate text to and from Morse code and render it as audio
#[derive(Parser)]
#[command(name = "morsecode")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    /// Configuration file (TOML or JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory rendered audio is written to
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate plain text to Morse code
    Encode {
        #[arg(allow_hyphen_values = true)]
        text: String,
        #[command(flatten)]
        audio: AudioArgs,
    },
    /// Translate Morse code to plain text
    Decode {
        /// Morse code, e.g. "... --- ..."
        #[arg(allow_hyphen_values = true)]
        morse: String,
        #[command(flatten)]
        audio: AudioArgs,
    },
    /// Render plain text straight to a WAV file
    Render {
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Remove audio-unsupported characters without asking
        #[arg(short, long)]
        yes: bool,
    },
    /// Interactive translator
    Shell,
    /// List supported characters
    Table,
}

#[derive(Args)]
struct AudioArgs {
    /// Also render the result to a WAV file
    #[arg(short, long)]
    audio: bool,

    /// Remove audio-unsupported characters without asking
    #[arg(short, long)]
    yes: bool,
}

fn new_session(config: AppConfig) -> Session {
    Session::new(config, Box::new(WavRenderer), Box::new(CommandPlayer::default()))
}

fn confirm_with(yes: bool, run: impl FnOnce(&mut dyn Confirm) -> Result<()>) -> Result<()> {
    if yes {
        return run(&mut AutoConfirm(true));
    }
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    run(&mut LineConfirm::new(&mut input, &mut stdout))
}

fn translate(session: &mut Session, direction: Direction, input: &str, audio: &AudioArgs) -> Result<()> {
    confirm_with(audio.yes, |confirm| {
        let report = match session.translate(direction, input, audio.audio, confirm) {
            Ok(report) => report,
            Err(err) => bail!(codec_warning(&err)),
        };

        println!("{}", report.translation.output);
        report_audio(&mut io::stdout(), &report.audio)?;
        if let AudioOutcome::WriteFailed { reason, .. } = &report.audio {
            bail!("audio was not written: {}", reason);
        }
        Ok(())
    })
}

/// Normalize text for `render`, using the same wording as `encode` for bad input
fn render_text(text: &str) -> Result<String> {
    if text.is_empty() {
        bail!(messages::NOTHING_TO_TRANSLATE);
    }
    let normalized = normalize_text(text);
    if normalized.is_empty() {
        bail!(messages::MEANINGLESS_TO_MORSE);
    }
    Ok(normalized)
}

fn render(session: &mut Session, text: &str, yes: bool) -> Result<()> {
    let normalized = render_text(text)?;

    confirm_with(yes, |confirm| {
        let outcome = session.request_audio(&normalized, true, confirm);
        report_audio(&mut io::stdout(), &outcome)?;
        match outcome {
            AudioOutcome::WriteFailed { reason, .. } => bail!("audio was not written: {}", reason),
            AudioOutcome::UserDeclined => info!("Render cancelled"),
            _ => {}
        }
        Ok(())
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    info!("Audio output directory: {:?}", config.output_dir);

    match cli.command {
        Commands::Encode { text, audio } => {
            translate(&mut new_session(config), Direction::ToMorse, &text, &audio)?;
        }

        Commands::Decode { morse, audio } => {
            translate(&mut new_session(config), Direction::ToText, &morse, &audio)?;
        }

        Commands::Render { text, yes } => {
            render(&mut new_session(config), &text, yes)?;
        }

        Commands::Shell => {
            let stdin = io::stdin();
            let mut shell = Shell::new(
                new_session(config),
                Box::new(CommandClipboard::default()),
                stdin.lock(),
                io::stdout(),
            );
            shell.run()?;
        }

        Commands::Table => {
            let mut stdout = io::stdout().lock();
            for (ch, code) in MORSE_TABLE {
                writeln!(stdout, "{}  {}", ch, code)?;
            }
        }
    }

    Ok(())
}
