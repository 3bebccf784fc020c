//! Terminal rendering for catalog listings, rules and studio status

use colored::Colorize;
use lyricsmith_core::{clean_prompt_tags, Catalog, Category, CopyTarget, SelectionState};
use std::time::Instant;

use crate::commands::TableArg;

const STYLE_PLACEHOLDER: &str = "Prompt will appear here as you select personas...";

pub fn print_table(catalog: &Catalog, table: TableArg) {
    match table {
        TableArg::Topics => print_categories(catalog.topic_categories(), |name| catalog.topic(name)),
        TableArg::Rhymes => print_categories(catalog.rhyme_scheme_categories(), |name| {
            catalog.rhyme_scheme(name).map(clean_prompt_tags)
        }),
        TableArg::Vocalists => {
            for (group, entries) in catalog.vocalist_groups() {
                println!("{}", group.to_uppercase().cyan().bold());
                for (name, detail) in entries.iter() {
                    println!("  {}  {}", name.yellow(), clean_prompt_tags(detail).dimmed());
                }
                println!();
            }
        }
        TableArg::Producers => {
            for (name, detail) in catalog.producers().iter() {
                println!("{}  {}", name.yellow(), clean_prompt_tags(detail).dimmed());
            }
        }
    }
}

fn print_categories<F, S>(categories: &[Category], describe: F)
where
    F: Fn(&str) -> Option<S>,
    S: AsRef<str>,
{
    for category in categories {
        println!("{}", category.name.cyan().bold());
        for member in category.members {
            match describe(member) {
                Some(description) => {
                    println!("  {}  {}", member.yellow(), description.as_ref().dimmed())
                }
                None => println!("  {}", member.yellow()),
            }
        }
        println!();
    }
}

pub fn print_rules() {
    println!("{}", "Structure Syntax".cyan().bold());
    for (tag, meaning) in [
        ("[Intro: Mood]", "Sets the starting atmosphere"),
        ("[Verse: Delivery]", "Changes vocal technique mid-song"),
        ("[Chorus: Energy]", "Peaks the melodic intensity"),
        ("[Outro: Fade]", "Smooth transitions to the end"),
    ] {
        println!("  {} - {}", tag.yellow(), meaning);
    }
    println!();
    println!("{}", "Vocal Guiding".cyan().bold());
    for (label, example, meaning) in [
        ("Rap Flow", "hyphens-between-words", "for tight rhythm"),
        ("Singing", "ellipses...", "for sustained notes"),
        ("Ad-libs", "(parentheses)", "for backing layers"),
        ("Breaks", "( . . . )", "for instrumental solo sections"),
    ] {
        println!("  {}: {} {}", label.bold(), example.yellow(), meaning);
    }
}

pub fn print_style(style: &str) {
    println!("{}", "Style Prompt".cyan().bold());
    if style.is_empty() {
        println!("{}", STYLE_PLACEHOLDER.dimmed());
    } else {
        println!("{}", style);
    }
}

pub fn print_lyrics(lyrics: &str) {
    println!("{}", "─".repeat(40).green());
    println!("{}", lyrics);
    println!("{}", "─".repeat(40).green());
}

pub fn print_status(state: &SelectionState, now: Instant) {
    let show = |value: Option<&str>| match value {
        Some(v) if !v.is_empty() => v.yellow().to_string(),
        _ => "-".dimmed().to_string(),
    };

    println!("{}", "─".repeat(50).dimmed());
    println!("{}: {}", "Topic".cyan(), show(Some(state.topic())));
    if let Some(description) = state.topic_description() {
        println!("       {}", format!("\"{}\"", description).dimmed());
    }
    println!("{}: {}", "File".cyan(), show(state.uploaded_file()));
    println!("{}: {}", "Vocalist".cyan(), show(state.vocalist()));
    println!("{}: {}", "Producer".cyan(), show(state.producer()));
    println!("{}: {}", "Rhyme".cyan(), show(state.rhyme_scheme()));
    println!("{}: {}", "Custom".cyan(), show(Some(state.custom_style())));
    println!(
        "{}: {}",
        "Lyrics".cyan(),
        if state.lyrics().is_empty() {
            "-".dimmed().to_string()
        } else {
            format!("{} lines", state.lyrics().lines().count())
        }
    );
    if state.is_generating() {
        println!("{}", "Generating...".magenta());
    }
    let copied: Vec<String> = CopyTarget::ALL
        .into_iter()
        .filter(|target| state.is_copied(*target, now))
        .map(|target| target.to_string())
        .collect();
    if !copied.is_empty() {
        println!("{}: {}", "Copied".green(), copied.join(", "));
    }
    println!("{}", "─".repeat(50).dimmed());
}
