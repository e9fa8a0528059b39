use crate::config::Config;
use crate::error::GradebookError;
use crate::loaders::Loader;
use crate::model::Gradebook;
use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{Level, debug};

mod config;
mod display;
mod error;
mod grade;
mod loaders;
mod model;
mod stats;

#[derive(Parser)]
#[command(version, author, about)]
struct Options {
    #[arg(short, long, value_name = "FILE")]
    /// Use FILE instead of gradebook.toml
    config: Option<PathBuf>,
    #[arg(short, long, value_name = "DIR")]
    /// Read the gradebook from DIR
    data_dir: Option<PathBuf>,
    #[arg(short, action = clap::ArgAction::Count)]
    /// Set verbosity level
    verbose: u8,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Overall grade of a student
    Grade { name: String },
    /// Minimum, average and maximum score of an assignment
    Stats { name: String },
    /// Score histogram of an assignment
    Graph { name: String },
    /// Grades of every student, as CSV
    Report {
        #[arg(short, long, value_name = "FILE")]
        /// Write to FILE instead of the standard output
        output: Option<PathBuf>,
    },
}

/// Print a lookup failure as the one-line message the user sees.
fn show_error(out: &mut impl Write, e: &GradebookError) -> io::Result<()> {
    match e {
        GradebookError::NotFound { kind, name } => debug!(%kind, %name, "lookup failed"),
        GradebookError::NoData { assignment } => debug!(%assignment, "no submissions"),
        _ => (),
    }
    writeln!(out, "{e}")
}

fn show_grade(out: &mut impl Write, gradebook: &Gradebook, name: &str) -> Result<()> {
    match gradebook.student_grade(name) {
        Ok(grade) => writeln!(out, "{}", display::percent(grade))?,
        Err(e) => show_error(out, &e)?,
    }
    Ok(())
}

fn show_stats(out: &mut impl Write, gradebook: &Gradebook, name: &str) -> Result<()> {
    match gradebook.assignment_stats(name) {
        Ok(stats) => display::display_stats(out, &stats)?,
        Err(e) => show_error(out, &e)?,
    }
    Ok(())
}

fn show_graph(out: &mut impl Write, gradebook: &Gradebook, name: &str) -> Result<()> {
    match gradebook.assignment_stats(name) {
        Ok(stats) => display::display_histogram(out, &format!("{name} Scores"), &stats.scores)?,
        Err(e) => show_error(out, &e)?,
    }
    Ok(())
}

fn prompt(input: &mut impl BufRead, out: &mut impl Write, question: &str) -> Result<String> {
    write!(out, "{question}")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim_end_matches(['\n', '\r']).to_owned())
}

/// Present the menu and answer a single query.
fn menu(input: &mut impl BufRead, out: &mut impl Write, gradebook: &Gradebook) -> Result<()> {
    writeln!(out, "1. Student grade")?;
    writeln!(out, "2. Assignment statistics")?;
    writeln!(out, "3. Assignment graph")?;
    let selection = prompt(input, out, "Enter your selection: ")?;
    debug!(%selection, "menu selection");
    match selection.as_str() {
        "1" => {
            let name = prompt(input, out, "What is the student's name: ")?;
            show_grade(out, gradebook, &name)
        }
        "2" => {
            let name = prompt(input, out, "What is the assignment name: ")?;
            show_stats(out, gradebook, &name)
        }
        "3" => {
            let name = prompt(input, out, "What is the assignment name: ")?;
            show_graph(out, gradebook, &name)
        }
        _ => {
            writeln!(out, "Invalid selection")?;
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    let mut config = Config::discover(options.config.as_deref())?;
    if let Some(data_dir) = options.data_dir {
        config.data_dir = data_dir;
    }
    debug!(?config, "configuration");
    let gradebook = Loader::new(&config).load()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match options.command {
        None => menu(&mut io::stdin().lock(), &mut out, &gradebook),
        Some(Command::Grade { name }) => show_grade(&mut out, &gradebook, &name),
        Some(Command::Stats { name }) => show_stats(&mut out, &gradebook, &name),
        Some(Command::Graph { name }) => show_graph(&mut out, &gradebook, &name),
        Some(Command::Report { output: Some(path) }) => {
            let file = File::create(&path)
                .wrap_err_with(|| format!("cannot create {}", path.display()))?;
            display::write_report(file, &gradebook).wrap_err("cannot write report")
        }
        Some(Command::Report { output: None }) => {
            display::write_report(&mut out, &gradebook).wrap_err("cannot write report")
        }
    }
}
