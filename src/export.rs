use crate::chart::{ProgressChart, label_for};
use crate::progress::ProgressHistory;
use plotters::prelude::*;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

pub fn write_json<T: Serialize + ?Sized, P: AsRef<Path>>(
    value: &T,
    path: P,
) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, value).map_err(std::io::Error::other)
}

#[derive(Serialize)]
struct HistoryRow<'a> {
    date: &'a str,
    weight: f64,
    workout: &'a str,
    calories: u32,
    exercises: String,
    duration: u32,
}

/// Write one CSV row per record, oldest first. Exercises are joined by `;`.
pub fn write_history_csv(writer: impl Write, history: &ProgressHistory) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for r in history.records() {
        wtr.serialize(HistoryRow {
            date: &r.date,
            weight: r.weight,
            workout: &r.workout_type,
            calories: r.calories_burned,
            exercises: r.exercises.join(";"),
            duration: r.duration_minutes,
        })?;
    }
    wtr.flush().map_err(Into::into)
}

pub fn save_history_csv<P: AsRef<Path>>(path: P, history: &ProgressHistory) -> csv::Result<()> {
    write_history_csv(std::fs::File::create(path)?, history)
}

/// Write the records as a pretty JSON array.
pub fn save_history_json<P: AsRef<Path>>(path: P, history: &ProgressHistory) -> std::io::Result<()> {
    write_json(&history.records(), path)
}

fn rgb(c: egui::Color32) -> RGBColor {
    RGBColor(c.r(), c.g(), c.b())
}

/// Render a chart instance to an 800x400 PNG image.
pub fn save_chart_png(
    chart: &ProgressChart,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (800, 400)).into_drawing_area();
    root.fill(&WHITE)?;
    let labels = chart.labels();
    let series = chart.series();
    let max = series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p[1]))
        .fold(0.0_f64, f64::max);
    let x_max = labels.len().max(1) as f64 - 0.5;
    let mut plot = ChartBuilder::on(&root)
        .caption("Progress", ("sans-serif", 25))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..x_max, 0f64..(max * 1.1).max(1.0))?;
    plot.configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len().max(1))
        .x_label_formatter(&|x| label_for(labels, *x))
        .draw()?;
    for s in series {
        let color = rgb(s.color);
        plot.draw_series(LineSeries::new(
            s.points.iter().map(|p| (p[0], p[1])),
            &color,
        ))?
        .label(s.label)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }
    plot.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()?;
    log::info!("Saved progress chart to {}", path.display());
    Ok(())
}
