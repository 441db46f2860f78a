use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use crate::models::{Catalog, ProjectId};
use crate::source::{CatalogSource, ColorPolicy, Config};
use crate::status::{ProjectStatusModel, Selection};
use crate::cli::output::{
    dashboard_json, format_dashboard, format_project_detail, format_project_table, project_json,
    project_row_json, RenderOptions,
};
use crate::cli::status::{catalog_status_json, compute_catalog_status};
use crate::cli::error::{
    invalid_project_id_message, project_not_found_message, user_error, validate_project_id,
};
use anyhow::{Context, Result};

#[derive(Parser)]
#[command(name = "projstat")]
#[command(about = "Project status dashboard - stage and step progress for a catalog of projects")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// JSON catalog file (overrides catalog.location in ~/.projstat/rc)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
    /// When to use ANSI colors
    #[arg(long, global = true, value_enum, value_name = "WHEN")]
    pub color: Option<ColorPolicy>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the dashboard: project cards and the selected project's progress
    Dashboard {
        /// Only list projects whose name contains this text (case-insensitive)
        #[arg(long, short = 's', default_value = "")]
        search: String,
        /// Project ID to display (defaults to the first project)
        #[arg(long, short = 'p')]
        project: Option<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// List projects with their progress
    Projects {
        /// Name filter words (case-insensitive substring)
        query: Vec<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show detailed progress of one project
    Show {
        /// Project ID
        target: String,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show a one-line catalog summary
    Status {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Everything a command needs: the loaded catalog and render settings
struct Session {
    catalog: Catalog,
    render: RenderOptions,
}

impl Session {
    fn open(cli: &Cli) -> Result<Session> {
        let config = Config::load().context("Failed to load configuration")?;
        let source = CatalogSource::resolve(cli.catalog.clone(), &config);
        let catalog = source
            .load()
            .with_context(|| format!("Failed to load catalog from {}", source))?;
        log::debug!("loaded {} projects from {}", catalog.len(), source);

        let render = RenderOptions::resolve(&config, cli.color);
        Ok(Session { catalog, render })
    }
}

pub fn run() -> Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    insert_implicit_show(&mut args);

    let clap_args = std::iter::once("projstat".to_string())
        .chain(args.iter().cloned())
        .collect::<Vec<_>>();
    let cli = match Cli::try_parse_from(clap_args) {
        Ok(cli) => cli,
        Err(e) => {
            e.print()?;
            if e.use_stderr() {
                // Usage errors are user errors
                std::process::exit(1);
            }
            // --help / --version
            return Ok(());
        }
    };

    handle_command(cli)
}

/// Global options that take a separate value argument
const GLOBAL_VALUE_OPTIONS: [&str; 2] = ["--catalog", "--color"];

/// Implicit default: `projstat 2 --json` -> `projstat show 2 --json`
///
/// The first positional argument (global options and their values
/// skipped) is rewritten when it is a project id rather than a subcommand.
fn insert_implicit_show(args: &mut Vec<String>) {
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "--" {
            return;
        }
        if GLOBAL_VALUE_OPTIONS.contains(&arg) {
            i += 2;
            continue;
        }
        if arg.starts_with('-') {
            i += 1;
            continue;
        }

        let is_subcommand = Cli::command().get_subcommands().any(|sc| sc.get_name() == arg);
        if !is_subcommand && validate_project_id(arg).is_ok() {
            args.insert(i, "show".to_string());
        }
        return;
    }
}

fn handle_command(cli: Cli) -> Result<()> {
    let session = Session::open(&cli)?;

    match cli.command {
        None => handle_dashboard(&session, String::new(), None, false),
        Some(Commands::Dashboard { search, project, json }) => {
            handle_dashboard(&session, search, project, json)
        }
        Some(Commands::Projects { query, json }) => handle_projects(&session, query, json),
        Some(Commands::Show { target, json }) => handle_show(&session, target, json),
        Some(Commands::Status { json }) => handle_status(&session, json),
    }
}

/// Parse a project ID argument, exiting with suggestions if it is not one
fn parse_project_arg(catalog: &Catalog, arg: &str) -> ProjectId {
    match validate_project_id(arg) {
        Ok(id) => id,
        Err(reason) => user_error(&invalid_project_id_message(catalog, arg, &reason)),
    }
}

fn handle_dashboard(
    session: &Session,
    search: String,
    project: Option<String>,
    json: bool,
) -> Result<()> {
    let catalog = &session.catalog;
    let mut selection = Selection::initial(catalog);
    selection.set_search(search);

    if let Some(arg) = project {
        let id = parse_project_arg(catalog, &arg);
        if selection.select(catalog, id).is_none() {
            // Keep the default selection rather than failing the whole view
            let fallback = selection
                .current(catalog)
                .map(|p| format!("showing {}", p.name))
                .unwrap_or_else(|| "no project selected".to_string());
            eprintln!("Warning: project {} not found; {}", id, fallback);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard_json(catalog, &selection))?);
    } else {
        print!("{}", format_dashboard(catalog, &selection, &session.render));
    }
    Ok(())
}

fn handle_projects(session: &Session, query: Vec<String>, json: bool) -> Result<()> {
    let query = query.join(" ");
    let projects = ProjectStatusModel::filter_projects(&session.catalog, &query);

    if json {
        let rows: Vec<serde_json::Value> = projects.iter().map(|p| project_row_json(p)).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", format_project_table(&projects, &session.render));
    }
    Ok(())
}

fn handle_show(session: &Session, target: String, json: bool) -> Result<()> {
    let catalog = &session.catalog;
    let id = parse_project_arg(catalog, &target);
    let project = match ProjectStatusModel::select_project(catalog, id) {
        Some(project) => project,
        None => user_error(&project_not_found_message(catalog, id)),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&project_json(project))?);
    } else {
        print!("{}", format_project_detail(project, &session.render));
    }
    Ok(())
}

fn handle_status(session: &Session, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog_status_json(&session.catalog))?);
    } else {
        println!("{}", compute_catalog_status(&session.catalog));
    }
    Ok(())
}
