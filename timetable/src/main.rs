use anyhow::Context;
use chrono::{Local, NaiveDateTime, Weekday};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use timetable::Timetable;
use timetable::catalog::MemoryCatalog;
use timetable::config::AppConfig;
use timetable::domain::{CourseId, MinuteOfDay, parse_weekday};
use timetable::store::JsonFileStore;

/// Manage enrolled courses without time conflicts.
///
/// Reads the catalog from $TIMETABLE_CATALOG (default catalog.json) and the
/// enrolled courses from $TIMETABLE_STORE (default timetable.json).
#[derive(Parser)]
#[command(name = "timetable", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List enrolled courses
    Show,
    /// Enroll in a catalog course
    Add { id: u32 },
    /// Drop an enrolled course
    Remove { id: u32 },
    /// List catalog courses that fit the timetable
    Available {
        /// Only courses with a slot starting on this day
        #[arg(long, value_parser = parse_weekday, requires = "start")]
        day: Option<Weekday>,
        /// Slot start as HH:MM
        #[arg(long, value_parser = MinuteOfDay::parse_hhmm, group = "start", requires = "day")]
        at: Option<MinuteOfDay>,
        /// Slot start as a period number
        #[arg(long, group = "start", requires = "day")]
        period: Option<u8>,
    },
    /// Show what is in session
    Now {
        /// Instant to check instead of the current time, as "YYYY-MM-DD HH:MM"
        #[arg(long, value_parser = parse_instant)]
        at: Option<NaiveDateTime>,
    },
    /// List enrolled slots on a weekday
    Day {
        #[arg(value_parser = parse_weekday)]
        day: Weekday,
    },
}

fn parse_instant(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli, AppConfig::from_env()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    let catalog = MemoryCatalog::from_json_file(&config.catalog_path)
        .with_context(|| format!("loading catalog {}", config.catalog_path.display()))?;
    let store = JsonFileStore::open(&config.store_path)
        .with_context(|| format!("opening timetable {}", config.store_path.display()))?;
    let mut timetable = Timetable::load(store, catalog)?;

    match cli.command.unwrap_or(Command::Show) {
        Command::Show => {
            if timetable.is_empty() {
                println!("No courses enrolled.");
            } else {
                println!("{timetable}");
            }
        }
        Command::Add { id } => {
            let course = timetable.add_course_by_id(CourseId(id))?;
            println!("Enrolled in {course}");
        }
        Command::Remove { id } => match timetable.remove_course_by_id(CourseId(id))? {
            Some(course) => println!("Dropped {course}"),
            None => println!("Course {} is not enrolled.", CourseId(id)),
        },
        Command::Available { day, at, period } => {
            let courses = match (day, at, period) {
                (Some(day), Some(at), _) => timetable.available_courses_by_period(day, at)?,
                (Some(day), None, Some(n)) => {
                    timetable.available_courses_in_period(day, n, &config.bells)?
                }
                _ => timetable.available_courses()?,
            };
            if courses.is_empty() {
                println!("No available courses.");
            }
            for course in courses {
                println!("{course}");
            }
        }
        Command::Now { at } => {
            let at = at.unwrap_or_else(|| Local::now().naive_local());
            match timetable.ongoing_course(at) {
                Some((course, slot)) => println!("{} ({slot})", course.name()),
                None => println!("Nothing in session."),
            }
        }
        Command::Day { day } => {
            let mut any = false;
            for slot in timetable.time_slots_on(day) {
                println!("{slot}");
                any = true;
            }
            if !any {
                println!("Nothing on {day}.");
            }
        }
    }

    Ok(())
}
