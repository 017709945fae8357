//! rostertop - Interactive TUI viewer for a club member roster.
//!
//! Usage:
//!   rostertop                      # built-in sample roster
//!   rostertop roster.json          # roster from a JSON export
//!   rostertop roster.json -s Fall  # select a semester by name
//!   rostertop roster.json --dump   # print the first page and exit

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use rostertop::model::RosterContext;
use rostertop::provider::{FileProvider, ProviderError, RosterProvider, SampleProvider};
use rostertop::table::RosterTable;
use rostertop::tui::App;
use rostertop::util::display_timestamp;

/// Interactive club roster viewer.
#[derive(Parser)]
#[command(name = "rostertop", about = "Club member roster viewer", version)]
struct Args {
    /// Path to a roster JSON export. Uses a built-in sample when omitted.
    #[arg(value_name = "ROSTER")]
    roster: Option<PathBuf>,

    /// Semester to select by name (default: the roster's active semester).
    #[arg(short = 's', long = "semester", value_name = "NAME")]
    semester: Option<String>,

    /// Print the roster summary and first page, then exit.
    #[arg(long)]
    dump: bool,

    /// Redraw interval in seconds.
    #[arg(long, default_value_t = 1)]
    tick: u64,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("rostertop={}", level).parse().unwrap());

    // Stderr keeps log lines off the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn dump(mut provider: Box<dyn RosterProvider>, semester: Option<&str>) -> Result<(), ProviderError> {
    let roster = provider.load()?;
    let context = RosterContext::from_roster(&roster, semester);

    println!("org: {}", context.org_id);
    for s in &roster.semesters {
        let marker = match (&context.selected_semester, &context.active_semester) {
            (Some(sel), _) if sel.semester_id == s.semester_id => " (selected)",
            (_, Some(act)) if act.semester_id == s.semester_id => " (active)",
            _ => "",
        };
        println!("semester: {}{marker}", s.name);
    }
    println!("members: {}", roster.members.len());

    let mut table = RosterTable::new(context);
    table.replace_raw_set(roster.members);
    let projection = table.projection();
    println!();
    for record in &projection.visible {
        println!(
            "{:>6}  {:<24} {:<16} {:>5.0}%  {}",
            record.member_id,
            record.full_name,
            record.status,
            record.attendance_record * 100.0,
            display_timestamp(&record.last_updated)
        );
    }
    println!(
        "showing {} of {}",
        projection.visible.len(),
        projection.total_filtered
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let provider: Box<dyn RosterProvider> = match &args.roster {
        Some(path) => Box::new(FileProvider::new(path)),
        None => Box::new(SampleProvider),
    };

    if args.dump {
        if let Err(e) = dump(provider, args.semester.as_deref()) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        return;
    }

    let app = App::new(provider, args.semester);
    if let Err(e) = app.run(Duration::from_secs(args.tick.max(1))) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
