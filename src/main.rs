use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod batch;
mod constants;
mod duration;
mod error;
mod estimate;
mod import;
mod report;

use batch::RecordKind;
use constants::{
    DEFAULT_MINUTES_PER_DAY, DEFAULT_PAGES_PER_CHAPTER, DEFAULT_PAUSE_PER_CHAPTER_MIN,
    DEFAULT_SPEED_MIN_PER_PAGE, DEFAULT_UNCERTAINTY_PCT, MAX_PAUSE_PER_CHAPTER_MIN,
    MAX_SAMPLE_MINUTES, MAX_UNCERTAINTY_PCT, MIN_AVERAGE_MIN_PER_CHAPTER,
    MIN_UNITS_PER_CHAPTER_OR_VOLUME,
};
use estimate::{Sample, SampleInput, TotalUnits};

#[derive(Parser)]
#[command(name = "tsundoku")]
#[command(about = "Estimate total reading time for a work from a small sample")]
struct Cli {
    /// Uncertainty band around the estimate, in percent
    #[arg(long, global = true, default_value_t = DEFAULT_UNCERTAINTY_PCT, value_parser = parse_uncertainty)]
    uncertainty: f64,

    /// Pause time per chapter, in minutes
    #[arg(long, global = true, default_value_t = DEFAULT_PAUSE_PER_CHAPTER_MIN, value_parser = parse_pause)]
    pause: f64,

    /// Planned reading time per day, in minutes (0 for no projection)
    #[arg(long, global = true, default_value_t = DEFAULT_MINUTES_PER_DAY, value_parser = parse_non_negative)]
    minutes_per_day: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate from a chapter sample
    Chapters {
        /// Chapters read in the sample
        #[arg(long, conflicts_with = "average")]
        sample_chapters: Option<u32>,
        /// Hours spent on the sample
        #[arg(long, default_value_t = 0)]
        sample_hours: u32,
        /// Minutes spent on the sample
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=MAX_SAMPLE_MINUTES as i64))]
        sample_minutes: u32,
        /// Known average minutes per chapter, instead of a sample
        #[arg(long, value_parser = parse_average)]
        average: Option<f64>,
        /// Total chapters in the work
        #[arg(long, conflicts_with_all = ["volumes", "chapters_per_volume"])]
        total_chapters: Option<u32>,
        /// Volume count, combined with --chapters-per-volume
        #[arg(long, requires = "chapters_per_volume")]
        volumes: Option<u32>,
        /// Average chapters per volume
        #[arg(long, requires = "volumes", value_parser = parse_unit_count)]
        chapters_per_volume: Option<f64>,
    },
    /// Estimate from a page sample, for works with uneven chapters
    Pages {
        /// Pages read in the sample
        #[arg(long)]
        pages_read: u32,
        /// Hours spent on the sample
        #[arg(long, default_value_t = 0)]
        sample_hours: u32,
        /// Minutes spent on the sample
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=MAX_SAMPLE_MINUTES as i64))]
        sample_minutes: u32,
        /// Total pages in the work
        #[arg(long)]
        total_pages: u32,
        /// Assumed pages per chapter, for spreading the pause over pages
        #[arg(long, default_value_t = DEFAULT_PAGES_PER_CHAPTER, value_parser = parse_unit_count)]
        pages_per_chapter: f64,
    },
    /// Estimate from a per-chapter CSV (chapter,page_count or chapter,minutes)
    Batch {
        csv_file: PathBuf,
        /// How to read the value column
        #[arg(long, value_enum, default_value_t = BatchMode::Pages)]
        mode: BatchMode,
        /// Fallback reading speed in minutes per page (pages mode)
        #[arg(long, default_value_t = DEFAULT_SPEED_MIN_PER_PAGE, value_parser = parse_non_negative)]
        speed: f64,
        /// Pause charged to each row (pages mode); defaults to --pause
        #[arg(long, value_parser = parse_pause)]
        row_pause: Option<f64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BatchMode {
    Pages,
    Minutes,
}

impl From<BatchMode> for RecordKind {
    fn from(mode: BatchMode) -> Self {
        match mode {
            BatchMode::Pages => RecordKind::Pages,
            BatchMode::Minutes => RecordKind::Minutes,
        }
    }
}

fn parse_uncertainty(s: &str) -> Result<f64, String> {
    parse_in_range(s, 0.0, MAX_UNCERTAINTY_PCT, "%")
}

fn parse_pause(s: &str) -> Result<f64, String> {
    parse_in_range(s, 0.0, MAX_PAUSE_PER_CHAPTER_MIN, " min")
}

fn parse_non_negative(s: &str) -> Result<f64, String> {
    parse_in_range(s, 0.0, f64::INFINITY, "")
}

fn parse_average(s: &str) -> Result<f64, String> {
    parse_in_range(s, MIN_AVERAGE_MIN_PER_CHAPTER, f64::INFINITY, " min")
}

fn parse_unit_count(s: &str) -> Result<f64, String> {
    parse_in_range(s, MIN_UNITS_PER_CHAPTER_OR_VOLUME, f64::INFINITY, "")
}

fn parse_in_range(s: &str, lo: f64, hi: f64, unit: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("not a number: {}", s))?;
    if value < lo || value > hi {
        if hi.is_finite() {
            return Err(format!("must be between {}{} and {}{}", lo, unit, hi, unit));
        }
        return Err(format!("must be at least {}{}", lo, unit));
    }
    Ok(value)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Chapters {
            sample_chapters,
            sample_hours,
            sample_minutes,
            average,
            total_chapters,
            volumes,
            chapters_per_volume,
        } => {
            let sample = match (average, sample_chapters) {
                (Some(avg), _) => SampleInput::DirectAverage(avg),
                (None, Some(chapters)) => SampleInput::TotalOverUnits(Sample::from_split(
                    sample_hours,
                    sample_minutes,
                    chapters as f64,
                )),
                (None, None) => {
                    return Err("provide either --average or --sample-chapters".into());
                }
            };
            let total = match (total_chapters, volumes, chapters_per_volume) {
                (Some(total), _, _) => TotalUnits::Direct(total),
                (None, Some(volumes), Some(per_volume)) => TotalUnits::Volumes {
                    volumes,
                    units_per_volume: per_volume,
                },
                _ => {
                    return Err(
                        "provide either --total-chapters or --volumes with --chapters-per-volume"
                            .into(),
                    );
                }
            };

            let rate = sample.rate();
            let total = total.resolve();
            let result = estimate::estimate_total(
                rate,
                cli.pause,
                total as f64,
                cli.uncertainty,
                cli.minutes_per_day,
            );

            println!("{}", report::average_per_chapter_line(rate));
            println!("Total chapters: {}", total);
            println!("{}", report::summary(&result, cli.uncertainty, cli.minutes_per_day));
        }
        Command::Pages {
            pages_read,
            sample_hours,
            sample_minutes,
            total_pages,
            pages_per_chapter,
        } => {
            let sample = Sample::from_split(sample_hours, sample_minutes, pages_read as f64);
            let speed = estimate::average_per_unit(sample.elapsed_minutes, sample.units_read);
            let overhead = estimate::per_unit_proration(cli.pause, pages_per_chapter);
            let result = estimate::estimate_total(
                speed,
                overhead,
                total_pages as f64,
                cli.uncertainty,
                cli.minutes_per_day,
            );

            println!("{}", report::speed_per_page_line(speed));
            println!("{}", report::summary(&result, cli.uncertainty, cli.minutes_per_day));
        }
        Command::Batch {
            csv_file,
            mode,
            speed,
            row_pause,
        } => {
            let kind = RecordKind::from(mode);
            let records = import::read_batch(&csv_file, kind)
                .map_err(|e| format!("Failed to import {:?}: {}", csv_file, e))?;
            let total_min =
                batch::aggregate(&records, kind, speed, row_pause.unwrap_or(cli.pause));

            // Band and projection around the already-summed total.
            let result = estimate::estimate_total(
                total_min,
                0.0,
                1.0,
                cli.uncertainty,
                cli.minutes_per_day,
            );

            println!("Rows: {}", records.len());
            println!("{}", report::summary(&result, cli.uncertainty, cli.minutes_per_day));
        }
    }

    Ok(())
}
