//! CLI commands

use clap::{Args, Parser, Subcommand, ValueEnum};
use lyricsmith_core::CopyTarget;
use std::path::PathBuf;

/// Lyricsmith - style prompts and lyrics for AI music generation
#[derive(Parser, Debug)]
#[command(name = "lyricsmith")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to lyricsmith.{jsonc,json,yml,yaml})
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Model to use (e.g., gemini-3-flash-preview)
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the style prompt for a set of selections
    Style {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Print the full lyrics instruction prompt without sending it
    Prompt {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Output the request snapshot and prompt as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate lyrics
    Generate {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Copy the result to the clipboard
        #[arg(long, value_enum)]
        copy: Option<CopyArg>,
    },

    /// List reference tables
    List {
        #[arg(value_enum)]
        table: TableArg,
    },

    /// Show the lyric formatting syntax
    Rules,

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Selection flags shared by style, prompt and generate
#[derive(Args, Debug, Default, Clone)]
pub struct SelectionArgs {
    /// Free-form topic text
    #[arg(long, conflicts_with_all = ["pick_topic", "file"])]
    pub topic: Option<String>,

    /// Curated topic (see `lyricsmith list topics`)
    #[arg(long, conflicts_with = "file")]
    pub pick_topic: Option<String>,

    /// Inspiration file; only its name is used
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Vocalist persona (see `lyricsmith list vocalists`)
    #[arg(long)]
    pub vocalist: Option<String>,

    /// Producer style (see `lyricsmith list producers`)
    #[arg(long)]
    pub producer: Option<String>,

    /// Rhyme scheme (see `lyricsmith list rhymes`)
    #[arg(long)]
    pub rhyme: Option<String>,

    /// Extra style text appended after the vocalist section
    #[arg(long)]
    pub custom: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Show which configuration file is in use
    Path,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyArg {
    Style,
    Lyrics,
    All,
}

impl From<CopyArg> for CopyTarget {
    fn from(arg: CopyArg) -> Self {
        match arg {
            CopyArg::Style => CopyTarget::Style,
            CopyArg::Lyrics => CopyTarget::Lyrics,
            CopyArg::All => CopyTarget::All,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableArg {
    Topics,
    Vocalists,
    Producers,
    Rhymes,
}
