use crate::{OutputMode, emit_success};
use bugtracker::board::{Draft, ReportBoard, Submission};
use bugtracker::config::{self, StorageSettings, TrackerConfig};
use bugtracker::storage::{self, ReportStore};
use bugtracker::ui::{self, Icons};
use bugtracker::{BugReport, ReportDate};
use std::path::{Path, PathBuf};

pub fn run_init(
    output_mode: OutputMode,
    config_path: &Path,
    database: Option<PathBuf>,
    force: bool,
) -> anyhow::Result<()> {
    let database = database.unwrap_or_else(config::default_database_path);
    let cfg = TrackerConfig {
        database: Some(database.to_string_lossy().to_string()),
        storage: None,
    };
    config::write_config(config_path, &cfg, force)?;

    if output_mode.is_human() {
        ui::success(&format!("Wrote {}", config_path.display()));
        ui::status(Icons::DATABASE, "Database", &database.to_string_lossy());
    } else {
        let data = serde_json::json!({
            "config": config_path.to_string_lossy(),
            "database": database.to_string_lossy(),
        });
        emit_success(output_mode, "init", data)?;
    }
    Ok(())
}

pub fn run_add(
    output_mode: OutputMode,
    settings: &StorageSettings,
    category: String,
    steps: String,
    date: Option<&str>,
) -> anyhow::Result<()> {
    let date = match date {
        Some(d) => d.parse::<ReportDate>()?,
        None => ReportDate::today(),
    };

    let mut board = mount(settings, Draft::dated(date));
    board.set_category(category);
    board.set_steps(steps);

    match board.submit() {
        Submission::Rejected(field) => {
            anyhow::bail!("Enter bug info: {} must not be empty", field);
        }
        Submission::Saved => {
            if output_mode.is_human() {
                ui::success("Bug report saved");
            }
        }
    }

    show(output_mode, "add", board.reports())
}

pub fn run_list(output_mode: OutputMode, settings: &StorageSettings) -> anyhow::Result<()> {
    let board = mount(settings, Draft::new());
    show(output_mode, "list", board.reports())
}

pub fn run_delete(output_mode: OutputMode, settings: &StorageSettings, id: i64) -> anyhow::Result<()> {
    let mut board = mount(settings, Draft::new());
    board.remove(id);

    if output_mode.is_human() {
        println!("{} Removed report {}", Icons::DEL, id);
    }
    show(output_mode, "delete", board.reports())
}

fn mount(settings: &StorageSettings, draft: Draft) -> ReportBoard<Box<dyn ReportStore>> {
    let store = storage::open_store(settings);
    if !store.is_persistent() {
        ui::warn("Local storage is unavailable; reports will not be saved");
    }

    let mut board = ReportBoard::new(store, draft);
    board.mount();
    board
}

fn show(output_mode: OutputMode, command: &str, reports: &[BugReport]) -> anyhow::Result<()> {
    if output_mode.is_human() {
        println!("{}", ui::report_list(reports));
    } else {
        emit_success(output_mode, command, serde_json::to_value(reports)?)?;
    }
    Ok(())
}
