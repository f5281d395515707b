//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "weekplan")]
#[command(about = "Render a weekly planner from YAML task data and a template", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Template file (Jinja syntax)
    #[arg(short, long, value_name = "PATH")]
    pub template: PathBuf,

    /// Data file (YAML with `variables` and `week_tasks`)
    #[arg(short, long, value_name = "PATH")]
    pub data: PathBuf,

    /// Locale for dates (default: $WEEKPLAN_LOCALE or es_ES.UTF-8)
    #[arg(short, long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Week offset from the current week (default: $WEEKPLAN_OFFSET or 0)
    #[arg(short, long, value_name = "WEEKS", allow_negative_numbers = true)]
    pub offset: Option<i64>,

    /// Render as if today were this date (DD-MM-YYYY)
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,
}
