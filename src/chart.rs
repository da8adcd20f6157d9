//! Line chart of the progress history.

use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::progress::ProgressHistory;

pub const WEIGHT_COLOR: Color32 = Color32::from_rgb(0x4f, 0x46, 0xe5);
pub const WORKOUT_COLOR: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);
pub const CALORIES_COLOR: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);

/// One labeled line of the chart. Points use the record index as x.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: &'static str,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

/// Weight, workout and calorie series sharing the date labels.
///
/// The workouts line plots how many exercises each record logged. Weights that
/// did not parse are left out of the weight line.
pub fn build_series(history: &ProgressHistory) -> Vec<ChartSeries> {
    let weight = history
        .weights()
        .iter()
        .enumerate()
        .filter(|(_, w)| w.is_finite())
        .map(|(i, w)| [i as f64, *w])
        .collect();
    let workouts = history
        .exercises()
        .iter()
        .enumerate()
        .map(|(i, ex)| [i as f64, ex.len() as f64])
        .collect();
    let calories = history
        .calories()
        .iter()
        .enumerate()
        .map(|(i, c)| [i as f64, *c as f64])
        .collect();
    vec![
        ChartSeries {
            label: "Weight (kg)",
            color: WEIGHT_COLOR,
            points: weight,
        },
        ChartSeries {
            label: "Workouts",
            color: WORKOUT_COLOR,
            points: workouts,
        },
        ChartSeries {
            label: "Calories",
            color: CALORIES_COLOR,
            points: calories,
        },
    ]
}

/// Label for an x grid mark, empty between records.
pub(crate) fn label_for(labels: &[String], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

/// egui id shared by every chart instance, so plot memory is reused across
/// renders.
pub const PLOT_ID: &str = "progress_chart";

/// A built chart instance. Replaced wholesale on every render. `id` counts
/// instances and only tracks destruction.
#[derive(Debug)]
pub struct ProgressChart {
    id: u64,
    labels: Vec<String>,
    series: Vec<ChartSeries>,
}

impl ProgressChart {
    fn new(id: u64, history: &ProgressHistory) -> Self {
        Self {
            id,
            labels: history.dates().to_vec(),
            series: build_series(history),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn series(&self) -> &[ChartSeries] {
        &self.series
    }

    /// Release the instance.
    pub fn destroy(self) {
        log::debug!("Destroying chart #{}", self.id);
    }

    /// Draw the chart with the y-axis anchored at zero.
    pub fn show(&self, ui: &mut egui::Ui, height: f32, show_legend: bool) -> egui::Response {
        let labels = self.labels.clone();
        let mut plot = Plot::new(PLOT_ID)
            .height(height)
            .include_y(0.0)
            .allow_scroll(false)
            .x_axis_formatter(move |mark, _chars, _| label_for(&labels, mark.value));
        if show_legend {
            plot = plot.legend(Legend::default());
        }
        plot.show(ui, |plot_ui| {
            for s in &self.series {
                plot_ui.line(
                    Line::new(PlotPoints::from(s.points.clone()))
                        .name(s.label)
                        .color(s.color),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(s.points.clone()))
                        .radius(3.0)
                        .name(s.label)
                        .color(s.color),
                );
            }
        })
        .response
    }
}

/// Replace the chart in `slot` with one built from `history`.
///
/// The previous instance is destroyed before the new one is created.
pub fn render_chart(slot: &mut Option<ProgressChart>, history: &ProgressHistory) {
    let next_id = match slot.take() {
        Some(old) => {
            let id = old.id();
            old.destroy();
            id + 1
        }
        None => 1,
    };
    log::debug!("Rendering chart #{next_id} with {} records", history.len());
    *slot = Some(ProgressChart::new(next_id, history));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::ProgressRecord;

    fn history(days: u32) -> ProgressHistory {
        let mut h = ProgressHistory::default();
        for day in 1..=days {
            h.push(ProgressRecord {
                date: format!("3/{day}/2024"),
                weight: if day == 2 { f64::NAN } else { 70.0 + day as f64 },
                workout_type: "strength".into(),
                calories_burned: day * 100,
                exercises: vec!["squats".into(); day as usize],
                duration_minutes: 30,
            });
        }
        h
    }

    #[test]
    fn series_share_date_labels() {
        let mut slot = None;
        render_chart(&mut slot, &history(3));
        let chart = slot.as_ref().unwrap();
        assert_eq!(chart.labels(), &["3/1/2024", "3/2/2024", "3/3/2024"]);

        let series = chart.series();
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].label, "Weight (kg)");
        assert_eq!(series[0].points, vec![[0.0, 71.0], [2.0, 73.0]]);
        assert_eq!(series[1].label, "Workouts");
        assert_eq!(series[1].points, vec![[0.0, 1.0], [1.0, 2.0], [2.0, 3.0]]);
        assert_eq!(series[2].label, "Calories");
        assert_eq!(series[2].points[2], [2.0, 300.0]);
    }

    #[test]
    fn rerender_replaces_previous_instance() {
        let mut slot = None;
        render_chart(&mut slot, &history(1));
        assert_eq!(slot.as_ref().unwrap().id(), 1);

        render_chart(&mut slot, &history(2));
        let chart = slot.as_ref().unwrap();
        assert_eq!(chart.id(), 2);
        assert_eq!(chart.labels().len(), 2);
    }

    #[test]
    fn rerenders_keep_one_plot_id() {
        let ctx = egui::Context::default();
        let mut slot = None;
        let mut ids = Vec::new();
        for days in 1..=3 {
            render_chart(&mut slot, &history(days));
            let chart = slot.as_ref().unwrap();
            let _ = ctx.run(Default::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ids.push(chart.show(ui, 200.0, true).id);
                });
            });
        }
        assert_eq!(slot.as_ref().unwrap().id(), 3);
        assert_eq!(ids.len(), 3);
        assert!(ids.iter().all(|id| *id == ids[0]));
    }

    #[test]
    fn empty_history_renders_empty_series() {
        let mut slot = None;
        render_chart(&mut slot, &ProgressHistory::default());
        let chart = slot.unwrap();
        assert!(chart.labels().is_empty());
        assert!(chart.series().iter().all(|s| s.points.is_empty()));
    }

    #[test]
    fn axis_labels_only_on_records() {
        let labels = vec!["a".to_string(), "b".to_string()];
        assert_eq!(label_for(&labels, 1.0), "b");
        assert_eq!(label_for(&labels, 0.5), "");
        assert_eq!(label_for(&labels, -1.0), "");
        assert_eq!(label_for(&labels, 5.0), "");
    }
}
