//! Main application logic and persistent user settings.

use dirs_next as dirs;
use eframe::{App, Frame, NativeOptions, egui};
use rfd::FileDialog;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use log::info;

mod bmi;
use bmi::{BmiForm, parse_float};
mod calories;
use calories::{ALL_WORKOUT_TYPES, WorkoutForm, WorkoutType, parse_calories_label, parse_duration};
mod chart;
use chart::{ProgressChart, render_chart};
mod export;
use export::{save_chart_png, save_history_csv, save_history_json};
mod nav;
use nav::{ALL_SECTIONS, NavMenu, Section};
mod progress;
use progress::{HistoryState, MAX_ENTRIES, ProgressHistory, ProgressRecord};
mod storage;
use storage::{FileStorage, MemoryStorage, Storage, resolve_storage_path};
mod theme;
use theme::{ThemeController, ThemePreference};

const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_chart_height() -> f32 {
    260.0
}

fn default_show_legend() -> bool {
    true
}

/// Persistent configuration for user preferences.
///
/// The theme and progress history are not part of this file; they live in
/// the key-value storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Settings {
    /// `strftime` pattern used to label each day's entry.
    #[serde(default = "default_date_format")]
    date_format: String,
    #[serde(default = "default_chart_height")]
    chart_height: f32,
    #[serde(default = "default_show_legend")]
    show_legend: bool,
    #[serde(default)]
    last_export_dir: Option<String>,
}

impl Settings {
    const FILE: &'static str = "fitness_tracker_settings.json";

    fn path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|p| p.join(Self::FILE))
    }

    /// Load settings from the JSON configuration file, falling back to the
    /// defaults when it is missing or unreadable.
    fn load() -> Self {
        if let Some(path) = Self::path() {
            if let Ok(data) = std::fs::read_to_string(&path) {
                match serde_json::from_str(&data) {
                    Ok(cfg) => return cfg,
                    Err(e) => log::warn!("Ignoring invalid settings file: {e}"),
                }
            }
        }
        Self::default()
    }

    fn save(&self) {
        if let Some(path) = Self::path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Ok(data) = serde_json::to_string_pretty(self) {
                if let Err(e) = std::fs::write(&path, data) {
                    log::error!("Failed to save settings: {e}");
                }
            }
        }
    }

    /// The configured date pattern, or the default if it is not a valid
    /// `strftime` pattern.
    fn effective_date_format(&self) -> &str {
        if StrftimeItems::new(&self.date_format).any(|i| matches!(i, Item::Error)) {
            DEFAULT_DATE_FORMAT
        } else {
            &self.date_format
        }
    }

    fn today(&self) -> String {
        Local::now()
            .format(self.effective_date_format())
            .to_string()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            chart_height: default_chart_height(),
            show_legend: default_show_legend(),
            last_export_dir: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportKind {
    Csv,
    Json,
    Png,
}

/// All application state. Handlers mutate it in response to UI events.
struct FitnessApp {
    storage: Box<dyn Storage>,
    settings: Settings,
    settings_dirty: bool,
    show_settings: bool,
    theme: ThemeController,
    nav: NavMenu,
    workout: WorkoutForm,
    bmi: BmiForm,
    history: ProgressHistory,
    chart: Option<ProgressChart>,
    toast: Option<(String, Instant)>,
}

impl Default for FitnessApp {
    fn default() -> Self {
        let storage: Box<dyn Storage> = match resolve_storage_path() {
            Some(path) => {
                let store = FileStorage::open(path);
                info!("Using storage at {}", store.path().display());
                Box::new(store)
            }
            None => {
                log::warn!("No config directory found, progress will not be saved");
                Box::new(MemoryStorage::default())
            }
        };
        Self::new(storage, Settings::load())
    }
}

impl FitnessApp {
    fn new(mut storage: Box<dyn Storage>, settings: Settings) -> Self {
        let theme = ThemeController::init(storage.as_mut());
        let history = ProgressHistory::load(storage.as_ref());
        let mut chart = None;
        render_chart(&mut chart, &history);
        Self {
            storage,
            settings,
            settings_dirty: false,
            show_settings: false,
            theme,
            nav: NavMenu::default(),
            workout: WorkoutForm::new(),
            bmi: BmiForm::default(),
            history,
            chart,
            toast: None,
        }
    }

    fn on_theme_toggle(&mut self) {
        self.theme.toggle(self.storage.as_mut());
    }

    fn on_menu_toggle(&mut self) {
        self.nav.toggle();
    }

    fn on_workout_type_clicked(&mut self, kind: WorkoutType) {
        self.workout.select_type(kind);
        self.workout.refresh_calories();
    }

    fn on_exercise_toggled(&mut self, exercise: &str, checked: bool) {
        self.workout.set_checked(exercise, checked);
        self.workout.refresh_calories();
    }

    fn on_duration_changed(&mut self) {
        self.workout.refresh_calories();
    }

    /// Snapshot the workout form as a record dated `date`.
    fn build_record(&self, date: String) -> ProgressRecord {
        ProgressRecord {
            date,
            weight: parse_float(&self.workout.weight),
            workout_type: self
                .workout
                .selected_type
                .map(|t| t.id().to_string())
                .unwrap_or_default(),
            calories_burned: parse_calories_label(&self.workout.calories_label),
            exercises: self.workout.checked_exercises(),
            duration_minutes: parse_duration(&self.workout.duration),
        }
    }

    fn on_progress_submit(&mut self) {
        let date = self.settings.today();
        self.submit_progress(date);
    }

    /// Store the form as today's record, redraw the chart and reset the form.
    ///
    /// On a storage failure the form is left as entered.
    fn submit_progress(&mut self, date: String) {
        let record = self.build_record(date);
        if let Err(e) = self
            .history
            .record_progress(record, self.storage.as_mut())
        {
            log::error!("Failed to save progress: {e}");
            self.show_toast(format!("Could not save progress: {e}"));
            return;
        }
        render_chart(&mut self.chart, &self.history);
        self.workout.reset();
        self.show_toast("Progress saved".to_string());
    }

    fn on_bmi_submit(&mut self) {
        let reading = self.bmi.submit();
        info!("BMI {} ({})", reading.value, reading.category);
    }

    fn on_export(&mut self, kind: ExportKind) {
        let (name, ext, file) = match kind {
            ExportKind::Csv => ("CSV", "csv", "progress.csv"),
            ExportKind::Json => ("JSON", "json", "progress.json"),
            ExportKind::Png => ("PNG", "png", "progress.png"),
        };
        let mut dialog = FileDialog::new()
            .add_filter(name, &[ext])
            .set_file_name(file);
        if let Some(dir) = &self.settings.last_export_dir {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.save_file() {
            self.export_to(kind, path);
        }
    }

    fn export_to(&mut self, kind: ExportKind, path: PathBuf) {
        let result: Result<(), String> = match kind {
            ExportKind::Csv => save_history_csv(&path, &self.history).map_err(|e| e.to_string()),
            ExportKind::Json => {
                save_history_json(&path, &self.history).map_err(|e| e.to_string())
            }
            ExportKind::Png => match &self.chart {
                Some(chart) => save_chart_png(chart, &path).map_err(|e| e.to_string()),
                None => Err("no chart to export".to_string()),
            },
        };
        match result {
            Ok(()) => {
                info!("Exported {:?} to {}", kind, path.display());
                self.settings.last_export_dir = path
                    .parent()
                    .map(|p| p.display().to_string());
                self.settings_dirty = true;
                self.show_toast(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to export {:?}: {e}", kind);
                self.show_toast(format!("Export failed: {e}"));
            }
        }
    }

    fn show_toast(&mut self, message: String) {
        self.toast = Some((message, Instant::now()));
    }

    fn workout_section(&mut self, ui: &mut egui::Ui) {
        let heading = ui.heading("Log a Workout");
        if self.nav.take_scroll(Section::Workouts) {
            heading.scroll_to_me(Some(egui::Align::TOP));
        }
        ui.horizontal(|ui| {
            for kind in ALL_WORKOUT_TYPES {
                let selected = self.workout.selected_type == Some(kind);
                if ui.selectable_label(selected, kind.label()).clicked() {
                    self.on_workout_type_clicked(kind);
                }
            }
        });
        for kind in ALL_WORKOUT_TYPES {
            if !self.workout.details_visible(kind) {
                continue;
            }
            ui.group(|ui| {
                ui.label(format!("{} exercises", kind.label()));
                for (id, label) in kind.exercises() {
                    let mut checked = self.workout.is_checked(id);
                    if ui.checkbox(&mut checked, *label).changed() {
                        self.on_exercise_toggled(id, checked);
                    }
                }
            });
        }
        egui::Grid::new("workout_grid").num_columns(2).show(ui, |ui| {
            ui.label("Duration (minutes)");
            if ui
                .text_edit_singleline(&mut self.workout.duration)
                .changed()
            {
                self.on_duration_changed();
            }
            ui.end_row();

            ui.label("Weight (kg)");
            ui.text_edit_singleline(&mut self.workout.weight);
            ui.end_row();

            ui.label("Calories burned");
            ui.strong(&self.workout.calories_label);
            ui.end_row();
        });
        let ready = !self.workout.weight.trim().is_empty();
        if ui
            .add_enabled(ready, egui::Button::new("Log Progress"))
            .clicked()
        {
            self.on_progress_submit();
        }
    }

    fn progress_section(&mut self, ui: &mut egui::Ui) {
        let heading = ui.heading("Progress");
        if self.nav.take_scroll(Section::Progress) {
            heading.scroll_to_me(Some(egui::Align::TOP));
        }
        match self.history.state() {
            HistoryState::Empty => {
                ui.label("No progress logged yet.");
            }
            HistoryState::Populated(days) => {
                ui.label(format!("Last {days} of {MAX_ENTRIES} days"));
            }
        }
        if let Some(chart) = &self.chart {
            chart.show(ui, self.settings.chart_height, self.settings.show_legend);
        }
        if !self.history.is_empty() {
            egui::Grid::new("history_grid")
                .striped(true)
                .num_columns(5)
                .show(ui, |ui| {
                    ui.strong("Date");
                    ui.strong("Weight");
                    ui.strong("Workout");
                    ui.strong("Calories");
                    ui.strong("Duration");
                    ui.end_row();
                    let h = &self.history;
                    for i in (0..h.len()).rev() {
                        ui.label(&h.dates()[i]);
                        ui.label(format!("{:.1}", h.weights()[i]));
                        ui.label(&h.workouts()[i]);
                        ui.label(h.calories()[i].to_string());
                        ui.label(format!("{} min", h.durations()[i]));
                        ui.end_row();
                    }
                });
        }
    }

    fn bmi_section(&mut self, ui: &mut egui::Ui) {
        let heading = ui.heading("BMI Calculator");
        if self.nav.take_scroll(Section::Bmi) {
            heading.scroll_to_me(Some(egui::Align::TOP));
        }
        egui::Grid::new("bmi_grid").num_columns(2).show(ui, |ui| {
            ui.label("Height (cm)");
            ui.text_edit_singleline(&mut self.bmi.height_cm);
            ui.end_row();
            ui.label("Weight (kg)");
            ui.text_edit_singleline(&mut self.bmi.weight_kg);
            ui.end_row();
        });
        if ui.button("Calculate BMI").clicked() {
            self.on_bmi_submit();
        }
        if let Some(reading) = &self.bmi.reading {
            ui.horizontal(|ui| {
                ui.label("Your BMI:");
                ui.strong(&reading.value);
            });
            ui.label(&reading.category);
        }
    }
}

impl App for FitnessApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.theme.apply(ctx);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                if ui.button(self.nav.icon()).clicked() {
                    self.on_menu_toggle();
                }
                ui.menu_button("File", |ui| {
                    if ui.button("Export History (CSV)").clicked() {
                        ui.close_menu();
                        self.on_export(ExportKind::Csv);
                    }
                    if ui.button("Export History (JSON)").clicked() {
                        ui.close_menu();
                        self.on_export(ExportKind::Json);
                    }
                    if ui.button("Export Chart (PNG)").clicked() {
                        ui.close_menu();
                        self.on_export(ExportKind::Png);
                    }
                    ui.separator();
                    if ui.button("Settings").clicked() {
                        self.show_settings = true;
                        ui.close_menu();
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let hint = match self.theme.current() {
                        ThemePreference::Light => "Switch to dark theme",
                        ThemePreference::Dark => "Switch to light theme",
                    };
                    if ui.button(self.theme.icon()).on_hover_text(hint).clicked() {
                        self.on_theme_toggle();
                    }
                });
            });
        });

        if self.nav.is_open() {
            egui::SidePanel::left("nav_panel").show(ctx, |ui| {
                for section in ALL_SECTIONS {
                    if ui.link(section.label()).clicked() {
                        self.nav.navigate(section);
                    }
                }
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let title = ui.heading("Fitness Tracker");
                if self.nav.take_scroll(Section::Home) {
                    title.scroll_to_me(Some(egui::Align::TOP));
                }
                ui.separator();
                self.workout_section(ui);
                ui.separator();
                self.progress_section(ui);
                ui.separator();
                self.bmi_section(ui);
            });
        });

        if self.show_settings {
            let mut open = self.show_settings;
            egui::Window::new("Settings").open(&mut open).show(ctx, |ui| {
                egui::Grid::new("settings_grid").num_columns(2).show(ui, |ui| {
                    ui.label("Date format");
                    if ui
                        .text_edit_singleline(&mut self.settings.date_format)
                        .changed()
                    {
                        self.settings_dirty = true;
                    }
                    ui.end_row();

                    ui.label("Chart height");
                    if ui
                        .add(egui::Slider::new(&mut self.settings.chart_height, 120.0..=600.0))
                        .changed()
                    {
                        self.settings_dirty = true;
                    }
                    ui.end_row();

                    ui.label("Legend");
                    if ui
                        .checkbox(&mut self.settings.show_legend, "Show chart legend")
                        .changed()
                    {
                        self.settings_dirty = true;
                    }
                    ui.end_row();
                });
                ui.label(format!("Today: {}", self.settings.today()));
            });
            self.show_settings = open;
        }

        let expired = self
            .toast
            .as_ref()
            .is_some_and(|(_, start)| start.elapsed() >= Duration::from_secs(3));
        if expired {
            self.toast = None;
        }
        if let Some((message, _)) = &self.toast {
            egui::Area::new(egui::Id::new("toast"))
                .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0])
                .show(ctx, |ui| {
                    ui.label(message);
                });
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        if self.settings_dirty {
            self.settings.save();
            self.settings_dirty = false;
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.save();
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let options = NativeOptions::default();
    eframe::run_native(
        "Fitness Tracker",
        options,
        Box::new(|_cc| Box::new(FitnessApp::default())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{PROGRESS_KEY, THEME_KEY};
    use once_cell::sync::Lazy;
    use std::sync::Mutex;

    static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn test_app() -> FitnessApp {
        FitnessApp::new(Box::new(MemoryStorage::default()), Settings::default())
    }

    fn fill_form(app: &mut FitnessApp, kind: WorkoutType, exercises: &[&str], minutes: &str) {
        app.on_workout_type_clicked(kind);
        for e in exercises {
            app.on_exercise_toggled(e, true);
        }
        app.workout.duration = minutes.into();
        app.on_duration_changed();
        app.workout.weight = "75.5".into();
    }

    #[test]
    fn settings_roundtrip() {
        let s = Settings {
            date_format: "%Y-%m-%d".into(),
            chart_height: 400.0,
            show_legend: false,
            last_export_dir: Some("/tmp/exports".into()),
        };
        let json = serde_json::to_string(&s).unwrap();
        let loaded: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(s, loaded);
    }

    #[test]
    fn settings_missing_fields_default() {
        let loaded: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn invalid_date_format_falls_back() {
        let s = Settings {
            date_format: "%Q%".into(),
            ..Settings::default()
        };
        assert_eq!(s.effective_date_format(), DEFAULT_DATE_FORMAT);
        assert!(!s.today().is_empty());
    }

    #[test]
    fn settings_persist_in_config_dir() {
        use std::env;

        let _guard = ENV_MUTEX.lock().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let prev_config = env::var_os("XDG_CONFIG_HOME");
        unsafe {
            env::set_var("XDG_CONFIG_HOME", dir.path());
        }

        let mut s = Settings::default();
        s.show_legend = false;
        s.save();
        let loaded = Settings::load();
        assert!(!loaded.show_legend);

        let path = Settings::path().unwrap();
        std::fs::write(&path, "{}").unwrap();
        assert!(Settings::load().show_legend);

        if let Some(val) = prev_config {
            unsafe {
                env::set_var("XDG_CONFIG_HOME", val);
            }
        } else {
            unsafe {
                env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }

    #[test]
    fn storage_path_env_override() {
        use std::env;

        let _guard = ENV_MUTEX.lock().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        unsafe {
            env::set_var("FITNESS_TRACKER_STORAGE", &path);
        }
        assert_eq!(resolve_storage_path(), Some(path.clone()));

        let mut app = FitnessApp::default();
        app.on_theme_toggle();
        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get_item(THEME_KEY).as_deref(), Some("dark"));

        unsafe {
            env::remove_var("FITNESS_TRACKER_STORAGE");
        }
    }

    #[test]
    fn calories_follow_form_events() {
        let mut app = test_app();
        fill_form(&mut app, WorkoutType::Cardio, &["running", "swimming"], "30");
        assert_eq!(app.workout.calories_label, "540 kcal");

        app.on_exercise_toggled("swimming", false);
        assert_eq!(app.workout.calories_label, "300 kcal");

        // switching the type keeps earlier boxes checked
        app.on_workout_type_clicked(WorkoutType::Yoga);
        app.on_exercise_toggled("warrior", true);
        assert_eq!(app.workout.calories_label, "420 kcal");
    }

    #[test]
    fn submit_records_form_and_resets() {
        let mut app = test_app();
        fill_form(&mut app, WorkoutType::Strength, &["squats", "deadlifts"], "10");
        app.submit_progress("6/1/2024".into());

        let records = app.history.records();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.date, "6/1/2024");
        assert_eq!(r.weight, 75.5);
        assert_eq!(r.workout_type, "strength");
        assert_eq!(r.calories_burned, 170);
        assert_eq!(r.exercises, vec!["squats".to_string(), "deadlifts".to_string()]);
        assert_eq!(r.duration_minutes, 10);

        assert_eq!(app.workout, WorkoutForm::new());
        assert_eq!(app.workout.calories_label, "0 kcal");
        assert!(app.storage.get_item(PROGRESS_KEY).is_some());

        let chart = app.chart.as_ref().unwrap();
        assert_eq!(chart.id(), 2);
        assert_eq!(chart.labels(), &["6/1/2024"]);
    }

    #[test]
    fn submit_without_type_records_empty_workout() {
        let mut app = test_app();
        app.workout.weight = "80".into();
        app.submit_progress("6/2/2024".into());
        let r = app.history.record(0).unwrap();
        assert_eq!(r.workout_type, "");
        assert!(r.exercises.is_empty());
        assert_eq!(r.duration_minutes, 0);
        assert_eq!(r.calories_burned, 0);
    }

    #[test]
    fn eight_submissions_keep_last_seven_days() {
        let mut app = test_app();
        for day in 1..=8 {
            fill_form(&mut app, WorkoutType::Cardio, &["cycling"], "5");
            app.submit_progress(format!("7/{day}/2024"));
        }
        let expected: Vec<String> = (2..=8).map(|d| format!("7/{d}/2024")).collect();
        assert_eq!(app.history.dates(), expected.as_slice());
        assert_eq!(app.chart.as_ref().unwrap().labels(), expected.as_slice());
        assert_eq!(app.history.len(), MAX_ENTRIES);
        assert!(app.history.is_aligned());
    }

    #[test]
    fn history_and_theme_restore_on_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut app = FitnessApp::new(Box::new(FileStorage::open(&path)), Settings::default());
        app.on_theme_toggle();
        fill_form(&mut app, WorkoutType::Yoga, &["tree-pose"], "40");
        app.submit_progress("8/1/2024".into());
        drop(app);

        let app = FitnessApp::new(Box::new(FileStorage::open(&path)), Settings::default());
        assert_eq!(app.theme.current(), ThemePreference::Dark);
        assert_eq!(app.history.dates(), &["8/1/2024"]);
        assert_eq!(app.history.calories(), &[80]);
    }

    #[test]
    fn theme_double_toggle_restores_state() {
        let mut app = test_app();
        let before = app.theme.current();
        app.on_theme_toggle();
        app.on_theme_toggle();
        assert_eq!(app.theme.current(), before);
        assert_eq!(
            app.storage.get_item(THEME_KEY).as_deref(),
            Some(before.as_str())
        );
    }

    #[test]
    fn bmi_submit_displays_reading() {
        let mut app = test_app();
        app.bmi.height_cm = "160".into();
        app.bmi.weight_kg = "50".into();
        app.on_bmi_submit();
        let reading = app.bmi.reading.as_ref().unwrap();
        assert_eq!(reading.value, "19.5");
        assert_eq!(reading.category, "Normal weight");
    }

    #[test]
    fn menu_toggle_changes_icon() {
        let mut app = test_app();
        app.on_menu_toggle();
        assert_eq!(app.nav.icon(), NavMenu::CLOSE_ICON);
        app.on_menu_toggle();
        assert_eq!(app.nav.icon(), NavMenu::MENU_ICON);
    }

    #[test]
    fn export_to_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app();
        fill_form(&mut app, WorkoutType::Cardio, &["running"], "12");
        app.submit_progress("9/1/2024".into());

        let csv_path = dir.path().join("p.csv");
        app.export_to(ExportKind::Csv, csv_path.clone());
        let text = std::fs::read_to_string(&csv_path).unwrap();
        assert!(text.contains("9/1/2024,75.5,cardio,120,running,12"));
        assert_eq!(
            app.settings.last_export_dir.as_deref(),
            Some(dir.path().display().to_string().as_str())
        );

        let json_path = dir.path().join("p.json");
        app.export_to(ExportKind::Json, json_path.clone());
        assert!(json_path.exists());

        let png_path = dir.path().join("p.png");
        app.export_to(ExportKind::Png, png_path.clone());
        assert!(std::fs::metadata(&png_path).unwrap().len() > 0);
        assert!(app.toast.as_ref().unwrap().0.starts_with("Exported to"));
    }

    #[test]
    fn ui_frame_renders_all_sections() {
        let mut app = test_app();
        fill_form(&mut app, WorkoutType::Cardio, &["running"], "12");
        app.submit_progress("9/2/2024".into());
        app.on_menu_toggle();
        app.nav.navigate(Section::Bmi);

        let ctx = egui::Context::default();
        let _ = ctx.run(Default::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                app.workout_section(ui);
                app.progress_section(ui);
                app.bmi_section(ui);
            });
        });
        assert!(app.nav.scroll_target.is_none());
    }
}
