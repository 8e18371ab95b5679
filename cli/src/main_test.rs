use clap::Parser;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("servicefall").chain(args.iter().copied())).expect("args should parse")
}

#[test]
fn move_accepts_slug_or_wire_status() {
    for raw in ["closed", "Geschlossen"] {
        match parse(&["move", "7", raw]).command {
            Command::Move { id, status } => {
                assert_eq!(id, ItemId(7));
                assert_eq!(status, Status::Closed);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}

#[test]
fn unknown_status_is_rejected() {
    assert!(Cli::try_parse_from(["servicefall", "move", "7", "archived"]).is_err());
}

#[test]
fn search_filters_collapse_duplicates_and_sort() {
    let cli = parse(&["search", "printer", "--status", "closed", "--status", "open", "--status", "closed", "--priority", "high"]);
    let Command::Search(args) = cli.command else {
        panic!("expected search");
    };
    let query = args.into_query();
    assert_eq!(query.text, "printer");
    assert_eq!(query.statuses, [Status::Open, Status::Closed]);
    assert_eq!(query.priorities, [Priority::High]);
}

#[test]
fn json_flag_is_global() {
    assert!(parse(&["board", "--json"]).json);
    assert!(!parse(&["board"]).json);
}

#[test]
fn missing_token_is_reported_before_any_request() {
    let ctx = CliContext { base_url: "http://localhost:8080".into(), token: Some("  ".into()), json: false };
    assert!(matches!(ctx.remote(), Err(CliError::MissingToken)));
}

#[test]
fn verbosity_maps_to_levels() {
    assert_eq!(log_level(0), Level::WARN);
    assert_eq!(log_level(1), Level::DEBUG);
    assert_eq!(log_level(5), Level::TRACE);
}

#[test]
fn mine_help_describes_reported_cases() {
    use clap::CommandFactory;

    let cli = Cli::command();
    let about = cli
        .find_subcommand("mine")
        .and_then(|mine| mine.get_about())
        .map(ToString::to_string)
        .unwrap_or_default();
    assert_eq!(about, "Cases reported by the token's user.");
}
