//! Command dispatch for the CLI: parse, wire up the API, load the library,
//! call one API method and render its result.

use super::render::{
    print_messages, render_recommendation, render_record_table, render_stats, render_text_list,
};
use super::setup::{init_logging, Cli, Commands};
use anitrack::api::{ConfigAction, SortOrder, TrackerApi};
use anitrack::error::{Result, TrackerError};
use anitrack::init::{initialize, resolve_home};
use anitrack::model::{RawRecord, Record, Status};
use anitrack::normalize::split_genres;
use anitrack::store::fs::FileStore;
use clap::Parser;
use std::io::{BufRead, IsTerminal, Write};

struct AppContext {
    api: TrackerApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let home = resolve_home()?;
    let tracker = initialize(home, cli.file.clone())?;
    let mut ctx = AppContext { api: tracker.api };

    // Config edits must not create or rewrite the data file; they report
    // config problems themselves
    let command = match cli.command {
        Some(Commands::Config { key, value }) => return handle_config(&ctx, key, value),
        other => other,
    };
    print_messages(&tracker.messages);

    let loaded = ctx.api.load();
    print_messages(&loaded.messages);

    match command {
        Some(Commands::Add {
            title,
            year,
            genres,
            status,
            rating,
        }) => handle_add(&mut ctx, title, year, genres, status, rating),
        Some(Commands::Delete { title, yes }) => handle_delete(&mut ctx, title, yes),
        Some(Commands::List { sort, reverse }) => handle_list(&ctx, SortOrder { key: sort, reverse }),
        Some(Commands::Search { keyword }) => handle_search(&ctx, keyword),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Recommend { limit }) => handle_recommend(&ctx, limit),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, SortOrder::default()),
    }
}

/// Form-level checks before a record is built. Only title, status and year
/// are validated here; everything else is left to record normalization.
fn build_record(
    title: &str,
    year: Option<&str>,
    genres: Option<&str>,
    status: Option<&str>,
    rating: Option<&str>,
) -> Result<Record> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TrackerError::EmptyTitle);
    }

    let status: Status = status.unwrap_or_default().parse()?;

    let year = match year.map(str::trim).filter(|y| !y.is_empty()) {
        Some(y) => Some(y.parse::<i64>().map_err(|_| {
            TrackerError::InvalidInput("Year must be an integer or blank.".to_string())
        })?),
        None => None,
    };

    let mut raw = RawRecord::new(title)
        .genres(split_genres(genres.unwrap_or_default()))
        .status(status.as_str());
    if let Some(year) = year {
        raw = raw.year(year);
    }
    if let Some(rating) = rating {
        raw = raw.rating(rating.trim());
    }
    Ok(raw.build())
}

fn handle_add(
    ctx: &mut AppContext,
    title: Vec<String>,
    year: Option<String>,
    genres: Option<String>,
    status: Option<String>,
    rating: Option<String>,
) -> Result<()> {
    let record = build_record(
        &title.join(" "),
        year.as_deref(),
        genres.as_deref(),
        status.as_deref(),
        rating.as_deref(),
    )?;
    let result = ctx.api.add(record)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, title: Vec<String>, yes: bool) -> Result<()> {
    let title = title.join(" ").trim().to_string();
    if title.is_empty() {
        return Err(TrackerError::EmptyTitle);
    }

    if !yes && std::io::stdin().is_terminal() && !confirm(&format!("Delete '{}'?", title))? {
        println!("Cancelled.");
        return Ok(());
    }

    let result = ctx.api.delete_by_title(&title)?;
    print_messages(&result.messages);
    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush().map_err(TrackerError::Io)?;

    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(TrackerError::Io)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn handle_list(ctx: &AppContext, order: SortOrder) -> Result<()> {
    let result = ctx.api.list(order);
    print!("{}", render_record_table(&result.listed_records));
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, keyword: Vec<String>) -> Result<()> {
    let result = ctx.api.search(&keyword.join(" "));
    print!("{}", render_record_table(&result.listed_records));
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats();
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_recommend(ctx: &AppContext, limit: Option<usize>) -> Result<()> {
    let result = ctx.api.recommend(limit);
    if let Some(recommendation) = &result.recommendation {
        print!("{}", render_recommendation(recommendation));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.data_location());
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    let mut lines = Vec::new();
    if show_all {
        if let Some(config) = &result.config {
            for (k, v) in config.list_all() {
                lines.push(format!("{} = {}", k, v));
            }
        }
        print!("{}", render_text_list(&lines, "No configuration values."));
    }
    print_messages(&result.messages);
    Ok(())
}
