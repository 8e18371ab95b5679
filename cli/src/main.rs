//! Operator CLI for the case service.
//!
//! Talks to the same endpoints as the browser client through
//! [`remote::ReqwestRemote`], and reuses the board coordinator so a `move`
//! from the terminal follows the same mutate-then-refetch path as a drop on
//! the board. `classify` and `breakpoints` are offline helpers over the
//! viewport tier table.

mod remote;
mod render;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use board::{BoardSync, DragPayload, DropError, DropTarget, ItemId, LoadError, Priority, Remote, RemoteError, SearchQuery, Status, SyncError, sort_by_status};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::Level;

use crate::remote::ReqwestRemote;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing token; pass --token or set SERVICEFALL_TOKEN")]
    MissingToken,
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Sync(#[from] SyncError),
    #[error(transparent)]
    Drop(#[from] DropError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "servicefall", about = "Case board CLI")]
struct Cli {
    #[arg(long, env = "SERVICEFALL_BASE_URL", default_value = "http://localhost:8080")]
    base_url: String,

    #[arg(long, env = "SERVICEFALL_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Print JSON instead of text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    /// Log verbosity on stderr (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    token: Option<String>,
    json: bool,
}

impl CliContext {
    fn remote(&self) -> Result<ReqwestRemote, CliError> {
        let token = self.token.as_deref().filter(|t| !t.trim().is_empty()).ok_or(CliError::MissingToken)?;
        ReqwestRemote::new(&self.base_url, token)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// All cases grouped by status column.
    Board,
    /// Cases reported by the token's user.
    Mine,
    /// One case with its comments.
    Show { id: ItemId },
    Search(SearchArgs),
    /// Move a case to another status column.
    Move { id: ItemId, status: Status },
    /// Classify a viewport size into its tier.
    Classify { width: u32, height: u32 },
    /// The tier breakpoint table.
    Breakpoints,
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Free text matched against title and description.
    #[arg(default_value = "")]
    text: String,

    #[arg(long = "status")]
    statuses: Vec<Status>,

    #[arg(long = "priority")]
    priorities: Vec<Priority>,
}

impl SearchArgs {
    fn into_query(self) -> SearchQuery {
        let mut query = SearchQuery { text: self.text, ..SearchQuery::default() };
        for status in self.statuses {
            if !query.statuses.contains(&status) {
                query.toggle_status(status);
            }
        }
        for priority in self.priorities {
            if !query.priorities.contains(&priority) {
                query.toggle_priority(priority);
            }
        }
        query
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(log_level(cli.verbose))
        .init();

    let ctx = CliContext { base_url: cli.base_url, token: cli.token, json: cli.json };

    match cli.command {
        Command::Board => run_board(&ctx).await,
        Command::Mine => run_mine(&ctx).await,
        Command::Show { id } => run_show(&ctx, id).await,
        Command::Search(args) => run_search(&ctx, args.into_query()).await,
        Command::Move { id, status } => run_move(&ctx, id, status).await,
        Command::Classify { width, height } => {
            let descriptor = viewport::classify(width, height);
            emit(&ctx, &descriptor, || render::descriptor(&descriptor))
        }
        Command::Breakpoints => {
            println!("{}", render::breakpoints());
            Ok(())
        }
    }
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

async fn run_board(ctx: &CliContext) -> Result<(), CliError> {
    let sync = BoardSync::new(ctx.remote()?);
    sync.load_all().await?;
    let board = sync.board();
    if ctx.json {
        let items: Vec<_> = board.items().collect();
        return print_json(&items);
    }
    println!("{}", render::board_columns(&board));
    Ok(())
}

async fn run_mine(ctx: &CliContext) -> Result<(), CliError> {
    let items = sort_by_status(ctx.remote()?.fetch_mine().await?);
    emit(ctx, &items, || render::item_list(&items))
}

async fn run_show(ctx: &CliContext, id: ItemId) -> Result<(), CliError> {
    let item = ctx.remote()?.fetch_one(id).await?;
    emit(ctx, &item, || render::item_detail(&item))
}

async fn run_search(ctx: &CliContext, query: SearchQuery) -> Result<(), CliError> {
    let items = ctx.remote()?.search(&query).await?;
    emit(ctx, &items, || render::item_list(&items))
}

async fn run_move(ctx: &CliContext, id: ItemId, status: Status) -> Result<(), CliError> {
    let sync = BoardSync::new(ctx.remote()?);
    sync.load_all().await?;

    let event = DropTarget::new(status).resolve(&DragPayload::new(id), &sync.board())?;
    let Some(intent) = event.intent() else {
        eprintln!("case {id} is already {status}");
        return Ok(());
    };

    sync.apply_status_change(intent).await?;
    let board = sync.board();
    match board.get(id) {
        Some(item) => emit(ctx, item, || render::item_line(item)),
        None => {
            eprintln!("case {id} moved to {status} but is no longer listed");
            Ok(())
        }
    }
}

fn emit<T: Serialize + ?Sized>(ctx: &CliContext, value: &T, text: impl FnOnce() -> String) -> Result<(), CliError> {
    if ctx.json {
        return print_json(value);
    }
    println!("{}", text());
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
