//! `timetable` CLI: lay out, render and check weekly course schedules.
//!
//! ## Usage
//!
//! ```sh
//! # Lay out a meeting file and print positioned boxes as JSON
//! timetable layout -i meetings.json
//!
//! # Render to SVG (stdin → stdout) on a larger canvas
//! cat meetings.json | timetable render --width 1200 --height 900 > week.svg
//!
//! # Render to HTML with a custom palette
//! timetable --config style.toml render -i meetings.json --format html -o week.html
//!
//! # List overlapping meetings
//! timetable conflicts -i meetings.json
//!
//! # Search a catalog, optionally on one campus
//! timetable search --catalog catalog.json "cs 180"
//! timetable search --catalog catalog.json --campus "West Lafayette" calculus
//!
//! # Render the schedule for chosen catalog sections
//! timetable schedule --catalog catalog.json --sections s1,s2 -o week.svg
//! ```

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, LevelFilter};
use timetable_engine::{
    find_conflicts, layout_week, project_meetings, render_html, render_svg, AppConfig, CanvasSize,
    Catalog, MeetingLabel, MeetingSpec, WeekLayout,
};

#[derive(Parser)]
#[command(
    name = "timetable",
    version,
    about = "Weekly course schedule layout and rendering"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// TOML file with [layout] and [style] tables
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

/// Canvas dimensions shared by the drawing subcommands.
#[derive(clap::Args, Clone, Copy)]
struct CanvasArgs {
    /// Canvas width in px
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    /// Canvas height in px
    #[arg(long, default_value_t = 600.0)]
    height: f64,
}

impl From<CanvasArgs> for CanvasSize {
    fn from(args: CanvasArgs) -> Self {
        CanvasSize::new(args.width, args.height)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a meeting file and print the positioned intervals as JSON
    Layout {
        /// Meeting file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        canvas: CanvasArgs,
    },
    /// Render a meeting file as SVG or HTML
    Render {
        /// Meeting file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Svg)]
        format: Format,
        #[command(flatten)]
        canvas: CanvasArgs,
    },
    /// List every pair of overlapping meetings
    Conflicts {
        /// Meeting file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Search a course catalog
    Search {
        /// Catalog JSON file
        #[arg(long)]
        catalog: String,
        /// Maximum number of results (0 = no limit)
        #[arg(long, default_value_t = 20)]
        limit: usize,
        /// Only courses with a section on this campus
        #[arg(long)]
        campus: Option<String>,
        /// Subject, number, "SUBJ NUM" or title text; lists courses if omitted
        query: Option<String>,
    },
    /// Lay out or render the meetings of chosen catalog sections
    Schedule {
        /// Catalog JSON file
        #[arg(long)]
        catalog: String,
        /// Comma-separated section ids
        #[arg(long, value_delimiter = ',', required = true)]
        sections: Vec<String>,
        #[arg(long, value_enum, default_value_t = Format::Svg)]
        format: Format,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        canvas: CanvasArgs,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Html,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => AppConfig::default(),
    };
    debug!("Using configuration: {config:?}");

    match cli.command {
        Commands::Layout {
            input,
            output,
            canvas,
        } => {
            let meetings = read_meetings(input.as_deref())?;
            let layout = layout_week(&meetings, canvas.into(), &config.layout);
            report_skipped(&layout);
            let json = serde_json::to_string_pretty(&layout)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Render {
            input,
            output,
            format,
            canvas,
        } => {
            let meetings = read_meetings(input.as_deref())?;
            let layout = layout_week(&meetings, canvas.into(), &config.layout);
            report_skipped(&layout);
            write_output(output.as_deref(), &draw(&layout, format, &config)?)?;
        }
        Commands::Conflicts { input } => {
            let meetings = read_meetings(input.as_deref())?;
            let projection = project_meetings(&meetings);
            for skipped in &projection.skipped {
                eprintln!("warning: skipped {skipped}");
            }
            let conflicts = find_conflicts(&projection.intervals);
            let json = serde_json::to_string_pretty(&conflicts)?;
            write_output(None, &json)?;
        }
        Commands::Search {
            catalog,
            limit,
            campus,
            query,
        } => {
            let catalog = load_catalog(&catalog)?;
            let query = query.as_deref().unwrap_or_default();
            let results = match campus.as_deref() {
                Some(campus) => catalog.search_on_campus(query, limit, campus),
                None => catalog.search(query, limit),
            };
            let json = serde_json::to_string_pretty(&results)?;
            write_output(None, &json)?;
        }
        Commands::Schedule {
            catalog,
            sections,
            format,
            output,
            canvas,
        } => {
            let catalog = load_catalog(&catalog)?;
            for id in sections.iter().filter(|id| catalog.section(id).is_none()) {
                eprintln!("warning: unknown section id: {id}");
            }
            let meetings = catalog.meeting_specs(&sections);
            let layout = layout_week(&meetings, canvas.into(), &config.layout);
            report_skipped(&layout);
            write_output(output.as_deref(), &draw(&layout, format, &config)?)?;
        }
    }

    Ok(())
}

/// Serialize a layout in the requested output format.
fn draw(layout: &WeekLayout<MeetingLabel>, format: Format, config: &AppConfig) -> Result<String> {
    Ok(match format {
        Format::Svg => render_svg(layout, &config.style),
        Format::Html => render_html(layout, &config.style),
        Format::Json => serde_json::to_string_pretty(layout)?,
    })
}

fn report_skipped<P>(layout: &WeekLayout<P>) {
    for skipped in &layout.skipped {
        eprintln!("warning: skipped {skipped}");
    }
}

fn read_meetings(path: Option<&str>) -> Result<Vec<MeetingSpec<MeetingLabel>>> {
    let json = read_input(path)?;
    serde_json::from_str(&json).context("Failed to parse meetings JSON")
}

fn load_catalog(path: &str) -> Result<Catalog> {
    let file = File::open(path).with_context(|| format!("Failed to open catalog: {}", path))?;
    Catalog::from_json(BufReader::new(file))
        .with_context(|| format!("Failed to load catalog: {}", path))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
