// src/cli.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::options::{AppOptions, ExportFormat};
use crate::config::consts::DEFAULT_REPORT_FILE;
use crate::error::BoxError;
use crate::file::resolve_single_out_path;
use crate::listing::{Query, QueryInput};
use crate::progress::Progress;
use crate::render::console::stats_text;
use crate::runner;

/// Salary and vacancy statistics for job-posting datasets
#[derive(Parser, Debug)]
#[command(name = "vacancy_stats", version)]
pub struct Cli {
    /// Config file (default: ./vacancy_stats.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Program to run; asked interactively when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Grouped statistics, spreadsheet export and HTML report
    Stats(StatsArgs),
    /// Postings as a console table
    List(ListArgs),
}

#[derive(Args, Debug, Default)]
pub struct StatsArgs {
    /// Dataset CSV file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
    /// Profession substring (case-sensitive)
    #[arg(short, long)]
    pub profession: Option<String>,
    /// Directory for the spreadsheet files
    #[arg(short = 'o', long)]
    pub out_dir: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,
    /// Report file, or a directory ending in '/'
    #[arg(long)]
    pub report: Option<String>,
    #[arg(long)]
    pub no_export: bool,
    #[arg(long)]
    pub no_report: bool,
    /// Leave the header row out of the spreadsheet files
    #[arg(long)]
    pub no_headers: bool,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Dataset CSV file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
    /// "<Поле>: <значение>"
    #[arg(long)]
    pub filter: Option<String>,
    /// Field label to sort by
    #[arg(long)]
    pub sort: Option<String>,
    /// "Да" / "Нет"
    #[arg(long)]
    pub reverse: Option<String>,
    /// "start [end]", 1-based, end exclusive
    #[arg(long)]
    pub range: Option<String>,
    /// "Название, Оклад"
    #[arg(long)]
    pub columns: Option<String>,
}

/// Terminal progress: status lines on stderr.
struct CliProgress;
impl Progress for CliProgress {
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn rows_read(&mut self, n: usize) { logd!("CLI: {} rows read", n); }
}

/// One line from `input`, prompt written first. EOF reads as an empty answer.
pub fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(s!(line.trim_end_matches(['\n', '\r'])))
}

fn ask_program<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Command> {
    let choice = ask(input, out, "Выберите программу:\n1 - Вакансии\n2 - Статистика\nВаш выбор: ")?;
    Ok(if choice.trim() == "2" {
        Command::Stats(StatsArgs::default())
    } else {
        Command::List(ListArgs::default())
    })
}

impl StatsArgs {
    /// Flags over config values; whatever is still missing is asked for.
    pub fn apply<R: BufRead, W: Write>(
        self,
        opts: &mut AppOptions,
        input: &mut R,
        out: &mut W,
    ) -> Result<(), BoxError> {
        match self.file {
            Some(f) => opts.stats.input = Some(f),
            None if opts.stats.input.is_none() => {
                opts.stats.input = Some(ask(input, out, "Введите название файла: ")?.into());
            }
            None => {}
        }
        match self.profession {
            Some(p) => opts.stats.profession = p,
            None if opts.stats.profession.is_empty() => {
                opts.stats.profession = ask(input, out, "Введите название профессии: ")?;
            }
            None => {}
        }
        if let Some(dir) = self.out_dir { opts.export.dir = dir; }
        if let Some(fmt) = self.format { opts.export.format = fmt; }
        if let Some(r) = self.report {
            opts.report.path = resolve_single_out_path(&r, DEFAULT_REPORT_FILE)?;
        }
        if self.no_export { opts.export.enabled = false; }
        if self.no_report { opts.report.enabled = false; }
        if self.no_headers { opts.export.include_headers = false; }
        Ok(())
    }
}

impl ListArgs {
    /// With `interactive`, every missing answer is asked for; otherwise only the file.
    pub fn complete<R: BufRead, W: Write>(
        self,
        interactive: bool,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<(PathBuf, QueryInput)> {
        let file = match self.file {
            Some(f) => f,
            None => PathBuf::from(ask(input, out, "Введите название файла: ")?),
        };
        let mut field = |v: Option<String>, prompt: &str| -> io::Result<String> {
            match v {
                Some(v) => Ok(v),
                None if interactive => ask(input, out, prompt),
                None => Ok(s!()),
            }
        };
        let query = QueryInput {
            filter: field(self.filter, "Введите параметр фильтрации: ")?,
            sort: field(self.sort, "Введите параметр сортировки: ")?,
            reverse: field(self.reverse, "Обратный порядок сортировки (Да / Нет): ")?,
            range: field(self.range, "Введите диапазон вывода: ")?,
            columns: field(self.columns, "Введите требуемые столбцы: ")?,
        };
        Ok((file, query))
    }
}

/// Entry point for the terminal binary.
pub fn run() -> Result<(), BoxError> {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    dispatch(cli, &mut input, &mut out)
}

/// Run one parsed command line against the given terminal streams.
pub fn dispatch<R: BufRead, W: Write>(cli: Cli, input: &mut R, out: &mut W) -> Result<(), BoxError> {
    let mut opts = AppOptions::load(cli.config.as_deref())?;
    let interactive = cli.command.is_none();
    let command = match cli.command {
        Some(c) => c,
        None => ask_program(input, out)?,
    };

    match command {
        Command::Stats(args) => {
            args.apply(&mut opts, input, out)?;
            let run = runner::run_stats(&opts, Some(&mut CliProgress))?;
            writeln!(out, "{}", stats_text(&run.tables))?;
        }
        Command::List(args) => {
            let (file, query_input) = args.complete(interactive, input, out)?;
            let query = match Query::parse(&query_input) {
                Ok(q) => q,
                Err(e) => {
                    writeln!(out, "{e}")?;
                    return Ok(());
                }
            };
            let outcome = runner::run_listing(&file, &query, &mut CliProgress)?;
            writeln!(out, "{outcome}")?;
        }
    }
    Ok(())
}
