//! The embedded realtime plot: one rolling time series per numeric tracker.
//!
//! The plotter is handed the numeric subset of the HUD's trackers at
//! construction and never changes membership afterwards. [`Plotter::redraw`]
//! pulls the current value of every series' tracker and appends it at the
//! current wall-clock time; [`Plotter::ui`] renders the accumulated history
//! with `egui_plot`.

use std::collections::VecDeque;

use chrono::Local;
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::config::PlotConfig;
use crate::style::series_color;
use crate::tracker::TrackerRef;

/// One plotted series: the tracker it samples and the retained history.
pub struct PlotSeries {
    tracker: TrackerRef,
    color: egui::Color32,
    points: VecDeque<[f64; 2]>,
}

impl PlotSeries {
    fn new(tracker: TrackerRef, index: usize) -> Self {
        Self {
            tracker,
            color: series_color(index),
            points: VecDeque::new(),
        }
    }

    /// The sampled tracker's name.
    pub fn name(&self) -> &str {
        self.tracker.name()
    }

    /// The retained points, oldest first, as `[x_secs, y]`.
    pub fn points(&self) -> &VecDeque<[f64; 2]> {
        &self.points
    }
}

/// Chart component consuming the numeric trackers it was given at
/// construction. Zero series is valid; the chart then renders empty.
pub struct Plotter {
    width: f32,
    height: f32,
    series: Vec<PlotSeries>,
    cfg: PlotConfig,
}

impl Plotter {
    /// Create a plotter of the given pixel size over the numeric tracker
    /// subset. Series colors are allocated from the global palette in order.
    pub fn new(width: f32, height: f32, numeric: Vec<TrackerRef>, cfg: PlotConfig) -> Self {
        let series = numeric
            .into_iter()
            .enumerate()
            .map(|(i, t)| PlotSeries::new(t, i))
            .collect();
        Self {
            width,
            height,
            series,
            cfg,
        }
    }

    /// Number of plotted series.
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// `true` when no numeric tracker was supplied.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// The retained points of series `index`, if it exists.
    pub fn points(&self, index: usize) -> Option<&VecDeque<[f64; 2]>> {
        self.series.get(index).map(|s| &s.points)
    }

    /// Names of the plotted trackers, in series order.
    pub fn tracker_names(&self) -> Vec<String> {
        self.series.iter().map(|s| s.name().to_string()).collect()
    }

    /// The plot settings.
    pub fn config(&self) -> &PlotConfig {
        &self.cfg
    }

    /// Sample every tracker's current value at the current wall-clock time.
    pub fn redraw(&mut self) {
        let now_us = chrono::Utc::now().timestamp_micros();
        self.redraw_at((now_us as f64) * 1e-6);
    }

    /// Sample every tracker's current value at time `x` (seconds since the
    /// UNIX epoch). Trackers whose value is currently non-numeric are skipped
    /// for that sample.
    pub fn redraw_at(&mut self, x: f64) {
        for s in self.series.iter_mut() {
            if let Some(y) = s.tracker.as_f64() {
                s.points.push_back([x, y]);
            }
        }
        self.prune(x);
    }

    /// Drop points older than the rolling window and enforce `max_points`.
    fn prune(&mut self, latest_x: f64) {
        let x_min = latest_x - self.cfg.time_window_secs;
        for s in self.series.iter_mut() {
            while s.points.front().map(|p| p[0] < x_min).unwrap_or(false) {
                s.points.pop_front();
            }
            while s.points.len() > self.cfg.max_points {
                s.points.pop_front();
            }
        }
    }

    /// Latest sample time across all series, if any samples exist.
    fn latest_time(&self) -> Option<f64> {
        self.series
            .iter()
            .filter_map(|s| s.points.back().map(|p| p[0]))
            .fold(None, |acc, t| Some(acc.map_or(t, |a: f64| a.max(t))))
    }

    /// Render the chart into the given ui at the plotter's fixed size.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let y_unit = self.cfg.y_unit.clone();
        let mut plot = Plot::new("hud_plot")
            .width(self.width)
            .height(self.height)
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_boxed_zoom(true)
            .x_axis_formatter(|x, _range| {
                let val = x.value;
                let secs = val as i64;
                let nsecs = ((val - secs as f64) * 1e9) as u32;
                let dt_utc = chrono::DateTime::from_timestamp(secs, nsecs)
                    .unwrap_or_else(|| chrono::DateTime::from_timestamp(0, 0).unwrap());
                dt_utc.with_timezone(&Local).format("%H:%M:%S").to_string()
            })
            .y_axis_formatter(move |y, _range| match &y_unit {
                Some(unit) => format!("{:.3} {}", y.value, unit),
                None => format!("{:.3}", y.value),
            });

        // Constrain the X axis to the rolling time window
        if let Some(t_latest) = self.latest_time() {
            let t_min = t_latest - self.cfg.time_window_secs;
            plot = plot.include_x(t_min).include_x(t_latest);
        }
        if self.cfg.legend && !self.series.is_empty() {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            for s in &self.series {
                let pts: PlotPoints = s.points.iter().cloned().collect();
                plot_ui.line(Line::new(s.name(), pts).color(s.color));
            }
        });
    }
}
