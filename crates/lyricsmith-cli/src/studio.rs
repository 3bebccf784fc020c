//! Interactive studio
//!
//! One task owns the [`SelectionState`] and reacts to two event sources:
//! lines typed on stdin and the completion of the (at most one) generation
//! running in the background. Generation never blocks the prompt, and a
//! second `generate` while one is outstanding is refused.

use colored::Colorize;
use lyricsmith_core::{CopyTarget, SelectionState, StudioError};
use lyricsmith_providers::{generate_lyrics, GenerationFailed, TextGenerator};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::{JoinError, JoinHandle};

use crate::commands::TableArg;
use crate::{clipboard, render, selection};

type PendingGeneration = JoinHandle<Result<String, GenerationFailed>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudioCommand {
    Help,
    Topic(String),
    Pick(String),
    File(String),
    ClearFile,
    Vocalist(Option<String>),
    Producer(Option<String>),
    Rhyme(Option<String>),
    Custom(String),
    ShowLyrics,
    AddLyricsLine(String),
    ClearLyrics,
    Style,
    Status,
    Generate,
    Copy(CopyTarget),
    List(TableArg),
    Rules,
    Reset,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<StudioCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    // "-" or nothing clears a persona choice
    let choice = |rest: &str| (!rest.is_empty() && rest != "-").then(|| rest.to_string());

    let command = match verb.to_lowercase().as_str() {
        "help" | "?" => StudioCommand::Help,
        "topic" => StudioCommand::Topic(rest.to_string()),
        "pick" => StudioCommand::Pick(rest.to_string()),
        "file" if rest == "-" => StudioCommand::ClearFile,
        "file" if !rest.is_empty() => StudioCommand::File(rest.to_string()),
        "vocalist" => StudioCommand::Vocalist(choice(rest)),
        "producer" => StudioCommand::Producer(choice(rest)),
        "rhyme" => StudioCommand::Rhyme(choice(rest)),
        "custom" => StudioCommand::Custom(rest.to_string()),
        "lyrics" => match rest.split_once(char::is_whitespace) {
            _ if rest.is_empty() => StudioCommand::ShowLyrics,
            _ if rest == "clear" => StudioCommand::ClearLyrics,
            Some(("add", text)) => StudioCommand::AddLyricsLine(text.trim().to_string()),
            _ => return Err("usage: lyrics [clear | add <line>]".to_string()),
        },
        "style" => StudioCommand::Style,
        "status" => StudioCommand::Status,
        "generate" | "compose" => StudioCommand::Generate,
        "copy" => match rest {
            "style" => StudioCommand::Copy(CopyTarget::Style),
            "lyrics" => StudioCommand::Copy(CopyTarget::Lyrics),
            "all" | "" => StudioCommand::Copy(CopyTarget::All),
            _ => return Err("usage: copy [style | lyrics | all]".to_string()),
        },
        "list" => match rest {
            "topics" => StudioCommand::List(TableArg::Topics),
            "vocalists" => StudioCommand::List(TableArg::Vocalists),
            "producers" => StudioCommand::List(TableArg::Producers),
            "rhymes" => StudioCommand::List(TableArg::Rhymes),
            _ => return Err("usage: list topics | vocalists | producers | rhymes".to_string()),
        },
        "rules" => StudioCommand::Rules,
        "reset" => StudioCommand::Reset,
        "quit" | "exit" => StudioCommand::Quit,
        _ => return Err(format!("unknown command: {} (try `help`)", verb)),
    };

    Ok(Some(command))
}

pub struct Studio {
    state: SelectionState,
    generator: Option<Arc<dyn TextGenerator>>,
    pending: Option<PendingGeneration>,
}

impl Studio {
    /// `generator` is `None` when no API key is configured; everything except
    /// `generate` still works
    pub fn new(state: SelectionState, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            state,
            generator,
            pending: None,
        }
    }

    pub async fn run(mut self) -> std::io::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        println!("{}", "Lyricsmith studio".cyan().bold());
        println!("{}", "Type `help` for commands, `quit` to leave.".dimmed());
        render::print_style(&self.state.style_prompt());

        loop {
            print!("{} ", "♪".magenta());
            std::io::stdout().flush()?;

            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        // Input closed: let an outstanding request finish
                        if self.pending.is_some() {
                            let joined = wait_pending(&mut self.pending).await;
                            self.pending = None;
                            self.complete(joined);
                        }
                        break;
                    };
                    let command = match parse_command(&line) {
                        Ok(Some(command)) => command,
                        Ok(None) => continue,
                        Err(message) => {
                            println!("{}", message.yellow());
                            continue;
                        }
                    };
                    if command == StudioCommand::Quit {
                        break;
                    }
                    if command == StudioCommand::Reset {
                        self.confirm_reset(&mut lines).await?;
                        continue;
                    }
                    self.handle(command);
                }
                joined = wait_pending(&mut self.pending), if self.pending.is_some() => {
                    self.pending = None;
                    self.complete(joined);
                }
            }
        }

        if self.pending.is_some() {
            println!("{}", "Leaving with a generation still running; its result is discarded.".dimmed());
        }
        Ok(())
    }

    fn handle(&mut self, command: StudioCommand) {
        let outcome = match command {
            StudioCommand::Help => {
                print_help();
                Ok(())
            }
            StudioCommand::Topic(text) => {
                self.state.set_topic_text(text);
                Ok(())
            }
            StudioCommand::Pick(name) => self.state.select_topic(&name).map(|()| {
                if let Some(description) = self.state.topic_description() {
                    println!("{}", format!("\"{}\"", description).dimmed());
                }
            }),
            StudioCommand::File(path) => {
                self.state.attach_file(selection::file_label(Path::new(&path)));
                println!("{}: {}", "Topic".cyan(), self.state.topic());
                Ok(())
            }
            StudioCommand::ClearFile => {
                self.state.clear_file();
                Ok(())
            }
            StudioCommand::Vocalist(name) => self.update_style(|s| s.select_vocalist(name.as_deref())),
            StudioCommand::Producer(name) => self.update_style(|s| s.select_producer(name.as_deref())),
            StudioCommand::Rhyme(name) => {
                self.update_style(|s| s.select_rhyme_scheme(name.as_deref()))
            }
            StudioCommand::Custom(text) => self.update_style(|s| {
                s.set_custom_style(text);
                Ok(())
            }),
            StudioCommand::ShowLyrics => {
                if self.state.lyrics().is_empty() {
                    println!("{}", "No lyrics yet. Run `generate` or `lyrics add <line>`.".dimmed());
                } else {
                    render::print_lyrics(self.state.lyrics());
                }
                Ok(())
            }
            StudioCommand::AddLyricsLine(line) => {
                let mut lyrics = self.state.lyrics().to_string();
                if !lyrics.is_empty() {
                    lyrics.push('\n');
                }
                lyrics.push_str(&line);
                self.state.set_lyrics(lyrics);
                Ok(())
            }
            StudioCommand::ClearLyrics => {
                self.state.set_lyrics("");
                Ok(())
            }
            StudioCommand::Style => {
                render::print_style(&self.state.style_prompt());
                Ok(())
            }
            StudioCommand::Status => {
                render::print_status(&self.state, Instant::now());
                Ok(())
            }
            StudioCommand::Generate => self.start_generation(),
            StudioCommand::Copy(target) => self
                .state
                .copy(target, Instant::now())
                .map(|payload| clipboard::deliver(target, &payload)),
            StudioCommand::List(table) => {
                render::print_table(self.state.catalog(), table);
                Ok(())
            }
            StudioCommand::Rules => {
                render::print_rules();
                Ok(())
            }
            StudioCommand::Reset | StudioCommand::Quit => Ok(()),
        };

        if let Err(error) = outcome {
            println!("{}", error.to_string().yellow());
        }
    }

    fn update_style<F>(&mut self, update: F) -> Result<(), StudioError>
    where
        F: FnOnce(&mut SelectionState) -> Result<(), StudioError>,
    {
        update(&mut self.state)?;
        render::print_style(&self.state.style_prompt());
        Ok(())
    }

    fn start_generation(&mut self) -> Result<(), StudioError> {
        let Some(generator) = self.generator.clone() else {
            println!(
                "{}",
                "No API key configured. Set GEMINI_API_KEY to enable generation.".red()
            );
            return Ok(());
        };

        let request = self.state.begin_generation()?;
        println!("{}", "Generating...".magenta());

        self.pending = Some(tokio::spawn(async move {
            generate_lyrics(generator.as_ref(), &request).await
        }));
        Ok(())
    }

    fn complete(&mut self, joined: Result<Result<String, GenerationFailed>, JoinError>) {
        let result = joined.unwrap_or_else(|error| {
            tracing::warn!(%error, "generation task ended abnormally");
            Err(GenerationFailed)
        });

        match self.state.finish_generation(result) {
            Ok(()) => {
                println!();
                render::print_lyrics(self.state.lyrics());
            }
            Err(error) => {
                println!();
                println!("{}: {}", "Generation failed".red().bold(), error);
            }
        }
    }

    async fn confirm_reset<R>(&mut self, lines: &mut tokio::io::Lines<R>) -> std::io::Result<()>
    where
        R: tokio::io::AsyncBufRead + Unpin,
    {
        if self.pending.is_some() {
            println!("{}", "Wait for the current generation to finish before resetting.".yellow());
            return Ok(());
        }

        print!("Clear all inputs and start over? [y/N] ");
        std::io::stdout().flush()?;

        let answer = lines.next_line().await?.unwrap_or_default();
        if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            self.state.reset();
            println!("{}", "Studio reset.".green());
        }
        Ok(())
    }
}

async fn wait_pending(
    pending: &mut Option<PendingGeneration>,
) -> Result<Result<String, GenerationFailed>, JoinError> {
    match pending {
        Some(handle) => handle.await,
        None => std::future::pending().await,
    }
}

fn print_help() {
    let rows = [
        ("topic <text>", "Describe the song theme"),
        ("pick <topic>", "Choose a curated topic"),
        ("file <path|->", "Use a file name as the topic, or detach it"),
        ("vocalist <name|->", "Choose or clear the vocalist persona"),
        ("producer <name|->", "Choose or clear the producer style"),
        ("rhyme <name|->", "Choose or clear the rhyme scheme"),
        ("custom <text>", "Set custom style text"),
        ("style", "Show the style prompt"),
        ("status", "Show every selection"),
        ("generate", "Compose lyrics in the background"),
        ("lyrics [clear | add <line>]", "Show or edit the lyrics"),
        ("copy [style | lyrics | all]", "Copy to the clipboard"),
        ("list <table>", "topics, vocalists, producers or rhymes"),
        ("rules", "Show the formatting syntax"),
        ("reset", "Clear all inputs"),
        ("quit", "Leave the studio"),
    ];
    for (usage, description) in rows {
        println!("  {:<30} {}", usage.yellow(), description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> StudioCommand {
        parse_command(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_line_is_ignored() {
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn test_arguments_keep_inner_spaces() {
        assert_eq!(
            parsed("vocalist   The Street Poet "),
            StudioCommand::Vocalist(Some("The Street Poet".to_string()))
        );
        assert_eq!(
            parsed("topic Time: Midnight"),
            StudioCommand::Topic("Time: Midnight".to_string())
        );
    }

    #[test]
    fn test_dash_clears_choice() {
        assert_eq!(parsed("producer -"), StudioCommand::Producer(None));
        assert_eq!(parsed("rhyme"), StudioCommand::Rhyme(None));
    }

    #[test]
    fn test_copy_targets() {
        assert_eq!(parsed("copy style"), StudioCommand::Copy(CopyTarget::Style));
        assert_eq!(parsed("copy lyrics"), StudioCommand::Copy(CopyTarget::Lyrics));
        assert_eq!(parsed("copy"), StudioCommand::Copy(CopyTarget::All));
        assert!(parse_command("copy everything").is_err());
    }

    #[test]
    fn test_lyrics_subcommands() {
        assert_eq!(parsed("lyrics"), StudioCommand::ShowLyrics);
        assert_eq!(parsed("lyrics clear"), StudioCommand::ClearLyrics);
        assert_eq!(
            parsed("lyrics add (Yeah) we up"),
            StudioCommand::AddLyricsLine("(Yeah) we up".to_string())
        );
        assert!(parse_command("lyrics burn").is_err());
    }

    #[test]
    fn test_verbs_are_case_insensitive() {
        assert_eq!(parsed("GENERATE"), StudioCommand::Generate);
        assert_eq!(parsed("Quit"), StudioCommand::Quit);
    }

    #[test]
    fn test_unknown_verb() {
        let error = parse_command("dance").unwrap_err();
        assert!(error.contains("unknown command"));
    }

    #[test]
    fn test_file_requires_path() {
        assert!(parse_command("file").is_err());
        assert_eq!(parsed("file -"), StudioCommand::ClearFile);
        assert_eq!(
            parsed("file notes.pdf"),
            StudioCommand::File("notes.pdf".to_string())
        );
    }
}
