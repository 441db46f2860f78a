// Output formatting utilities

use crate::models::{Catalog, Project, Stage, Step};
use crate::source::{ColorPolicy, Config};
use crate::status::{ProgressSummary, ProjectStatusModel, Selection};
use std::io::IsTerminal;

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";
const ANSI_FG_RED: &str = "\x1b[31m";
const ANSI_FG_GREEN: &str = "\x1b[32m";
const ANSI_FG_YELLOW: &str = "\x1b[33m";
const ANSI_FG_BLUE: &str = "\x1b[34m";
const ANSI_FG_BRIGHT_BLACK: &str = "\x1b[90m";

pub const DASHBOARD_TITLE: &str = "Software Project Status Dashboard";

const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';
const MARK_DONE: char = '✓';
const MARK_PENDING: char = '✗';

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width dynamically
///
/// Uses the `terminal_size` crate, with fallback to the COLUMNS
/// environment variable and a default of 120.
pub fn get_terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return w as usize;
        }
    }

    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 {
                return width;
            }
        }
    }

    120
}

/// Rendering settings resolved from config, flags, and the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub color: bool,
    pub bar_width: usize,
}

impl RenderOptions {
    pub fn resolve(config: &Config, color_flag: Option<ColorPolicy>) -> Self {
        let policy = color_flag.unwrap_or(config.color);
        // No-op outside Windows; on failure fall back to plain text
        let ansi_ok = enable_ansi_support::enable_ansi_support().is_ok();
        let color = ansi_ok && policy.enabled(is_tty());

        let bar_width = config
            .bar_width
            .unwrap_or_else(|| bar_width_for_terminal(get_terminal_width()));

        log::debug!("render options: color={} bar_width={}", color, bar_width);
        Self { color, bar_width }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", code, text, ANSI_RESET)
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(ANSI_BOLD, text)
    }
}

/// Bar width that leaves room for the percentage and counts
fn bar_width_for_terminal(terminal_width: usize) -> usize {
    terminal_width.saturating_sub(24).clamp(10, 50)
}

/// Format a percentage for display (one decimal place)
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

/// Color for a progress value: green when complete, yellow when started, red otherwise
fn progress_color(summary: &ProgressSummary) -> &'static str {
    if summary.is_complete() {
        ANSI_FG_GREEN
    } else if summary.completed > 0 {
        ANSI_FG_YELLOW
    } else {
        ANSI_FG_RED
    }
}

/// Render a text progress bar of exactly `width` cells
pub fn render_progress_bar(percent: f64, width: usize) -> String {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).round() as usize).min(width);
    let mut bar = String::with_capacity(width * 3);
    bar.extend(std::iter::repeat(BAR_FILLED).take(filled));
    bar.extend(std::iter::repeat(BAR_EMPTY).take(width - filled));
    bar
}

fn format_progress_line(summary: &ProgressSummary, opts: &RenderOptions) -> String {
    let percent = summary.percent();
    let bar = render_progress_bar(percent, opts.bar_width);
    format!(
        "[{}] {} ({}/{})",
        opts.paint(progress_color(summary), &bar),
        format_percent(percent),
        summary.completed,
        summary.total
    )
}

fn format_step(step: &Step, opts: &RenderOptions) -> String {
    let (mark, color) = if step.completed {
        (MARK_DONE, ANSI_FG_GREEN)
    } else {
        (MARK_PENDING, ANSI_FG_RED)
    };
    opts.paint(color, &format!("  {} {}", mark, step.name))
}

fn format_stage(stage: &Stage, opts: &RenderOptions) -> String {
    let summary = ProjectStatusModel::stage_summary(stage);
    let mut output = String::new();
    output.push_str(&opts.bold(&stage.name));
    output.push('\n');
    output.push_str(&format_progress_line(&summary, opts));
    output.push('\n');
    if stage.steps.is_empty() {
        output.push_str(&opts.paint(ANSI_FG_BRIGHT_BLACK, "  (no steps)"));
        output.push('\n');
    }
    for step in &stage.steps {
        output.push_str(&format_step(step, opts));
        output.push('\n');
    }
    output
}

/// Detailed progress of one project: overall bar, then every stage with its steps
pub fn format_project_detail(project: &Project, opts: &RenderOptions) -> String {
    let mut output = String::new();
    output.push_str(&opts.bold(&format!("=== {} - Progress ===", project.name)));
    output.push('\n');
    output.push_str(&format!(
        "Overall: {}\n",
        format_progress_line(&ProjectStatusModel::project_summary(project), opts)
    ));

    if project.stages.is_empty() {
        output.push_str("\nNo stages.\n");
    }
    for stage in &project.stages {
        output.push('\n');
        output.push_str(&format_stage(stage, opts));
    }
    output
}

/// One line per visible project, the selected one marked with `*`
pub fn format_project_cards(
    projects: &[&Project],
    selection: &Selection,
    opts: &RenderOptions,
) -> String {
    let name_width = projects
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(7);

    let mut output = String::new();
    for project in projects {
        let selected = selection.is_selected(project);
        let marker = if selected { "*" } else { " " };
        let line = format!(
            "{} [{}] {:<width$}  Total Stages: {}  {}",
            marker,
            project.id,
            project.name,
            project.stages.len(),
            format_percent(ProjectStatusModel::project_progress(project)),
            width = name_width
        );
        if selected {
            output.push_str(&opts.paint(ANSI_FG_BLUE, &line));
        } else {
            output.push_str(&line);
        }
        output.push('\n');
    }
    output
}

/// Full dashboard: title, search, project cards, selected project's progress
pub fn format_dashboard(catalog: &Catalog, selection: &Selection, opts: &RenderOptions) -> String {
    let mut output = String::new();
    output.push_str(&opts.bold(DASHBOARD_TITLE));
    output.push('\n');
    output.push_str(&"=".repeat(DASHBOARD_TITLE.len()));
    output.push_str("\n\n");

    if catalog.is_empty() {
        output.push_str("No projects in catalog.\n");
        return output;
    }

    if !selection.search().is_empty() {
        output.push_str(&format!("Search: {}\n", selection.search()));
    }

    let visible = selection.visible(catalog);
    if visible.is_empty() {
        output.push_str(&format!("No projects match '{}'.\n", selection.search()));
    } else {
        output.push_str(&format_project_cards(&visible, selection, opts));
    }

    if let Some(project) = selection.current(catalog) {
        output.push('\n');
        output.push_str(&format_project_detail(project, opts));
    }
    output
}

/// Projects table with stage/step counts, progress, and a TOTAL row
pub fn format_project_table(projects: &[&Project], opts: &RenderOptions) -> String {
    if projects.is_empty() {
        return "No projects found.\n".to_string();
    }

    let name_width = projects
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(7, 40);
    let rule_width = 6 + 1 + name_width + 1 + 6 + 1 + 9 + 1 + 9;

    let mut output = String::new();
    let header = format!(
        "{:<6} {:<nw$} {:>6} {:>9} {:>9}",
        "ID", "Name", "Stages", "Steps", "Progress",
        nw = name_width
    );
    output.push_str(&opts.bold(&header));
    output.push('\n');
    output.push_str(&"-".repeat(rule_width));
    output.push('\n');

    let mut total = ProgressSummary::default();
    let mut total_stages = 0;
    for project in projects {
        let summary = ProjectStatusModel::project_summary(project);
        total = total + summary;
        total_stages += project.stages.len();
        let progress = format!("{:>9}", format_percent(summary.percent()));
        output.push_str(&format!(
            "{:<6} {:<nw$} {:>6} {:>9} {}\n",
            project.id,
            project.name,
            project.stages.len(),
            format!("{}/{}", summary.completed, summary.total),
            opts.paint(progress_color(&summary), &progress),
            nw = name_width
        ));
    }

    output.push_str(&"-".repeat(rule_width));
    output.push('\n');
    output.push_str(&format!(
        "{:<6} {:<nw$} {:>6} {:>9} {:>9}\n",
        "TOTAL",
        "",
        total_stages,
        format!("{}/{}", total.completed, total.total),
        format_percent(total.percent()),
        nw = name_width
    ));
    output
}

/// JSON view of a project with unrounded progress values
pub fn project_json(project: &Project) -> serde_json::Value {
    let summary = ProjectStatusModel::project_summary(project);
    let stages: Vec<serde_json::Value> = project
        .stages
        .iter()
        .map(|stage| {
            let stage_summary = ProjectStatusModel::stage_summary(stage);
            serde_json::json!({
                "name": stage.name,
                "progress": stage_summary.percent(),
                "completed": stage_summary.completed,
                "total": stage_summary.total,
                "steps": stage.steps,
            })
        })
        .collect();

    serde_json::json!({
        "id": project.id,
        "name": project.name,
        "progress": summary.percent(),
        "completed": summary.completed,
        "total": summary.total,
        "stages": stages,
    })
}

/// JSON row for listings (no stage detail)
pub fn project_row_json(project: &Project) -> serde_json::Value {
    let summary = ProjectStatusModel::project_summary(project);
    serde_json::json!({
        "id": project.id,
        "name": project.name,
        "stages": project.stages.len(),
        "steps": summary.total,
        "completed": summary.completed,
        "progress": summary.percent(),
    })
}

/// JSON view of the dashboard
pub fn dashboard_json(catalog: &Catalog, selection: &Selection) -> serde_json::Value {
    let visible: Vec<serde_json::Value> = selection
        .visible(catalog)
        .into_iter()
        .map(project_row_json)
        .collect();

    serde_json::json!({
        "title": DASHBOARD_TITLE,
        "search": selection.search(),
        "selected": selection.selected_id(),
        "projects": visible,
        "detail": selection.current(catalog).map(project_json),
    })
}
