//! 行程报告
//!
//! 根据最短路径前驱表生成逐段行程，并以文本、表格或 JSON 输出

use crate::config::{OutputFormat, ReportConfig};
use crate::error::{Error, Result};
use crate::graph::VertexId;
use crate::types::{RoadMap, Trip, TripMetric};
use prettytable::{format, Cell, Row, Table};
use serde::Serialize;

/// 行程中的一段
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub from: VertexId,
    pub to: VertexId,
    /// 到达地点名称
    pub location: String,
    pub miles: f64,
    pub miles_per_hour: f64,
    pub seconds: f64,
}

/// 完整行程
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub metric: TripMetric,
    pub origin: String,
    pub destination: String,
    pub legs: Vec<Leg>,
    pub total_miles: f64,
    pub total_seconds: f64,
}

impl Itinerary {
    /// 按行程的度量求最短路径并生成行程
    pub fn build(road_map: &RoadMap, trip: &Trip) -> Result<Self> {
        let origin = road_map.vertex_info(trip.start)?.clone();
        let destination = road_map.vertex_info(trip.end)?.clone();

        let metric = trip.metric;
        let paths = road_map.find_shortest_paths(trip.start, |segment| metric.weight(segment))?;
        let path = paths.path_to(trip.end).ok_or(Error::Unreachable {
            from: trip.start,
            to: trip.end,
        })?;

        let mut legs = Vec::with_capacity(path.len().saturating_sub(1));
        for pair in path.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let segment = road_map.edge_info(from, to)?;
            legs.push(Leg {
                from,
                to,
                location: road_map.vertex_info(to)?.clone(),
                miles: segment.miles,
                miles_per_hour: segment.miles_per_hour,
                seconds: segment.travel_seconds(),
            });
        }

        let total_miles: f64 = legs.iter().map(|l| l.miles).sum();
        let total_seconds: f64 = legs.iter().map(|l| l.seconds).sum();

        Ok(Self {
            metric,
            origin,
            destination,
            legs,
            total_miles,
            total_seconds,
        })
    }

    /// 按配置渲染
    pub fn render(&self, config: &ReportConfig) -> Result<String> {
        match config.format {
            OutputFormat::Text => Ok(self.to_text(config.precision)),
            OutputFormat::Table => Ok(self.to_table(config.precision)),
            OutputFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| Error::Serialization(e.to_string())),
        }
    }

    /// 纯文本格式
    pub fn to_text(&self, precision: usize) -> String {
        let title = match self.metric {
            TripMetric::Distance => "Shortest distance",
            TripMetric::Time => "Shortest driving time",
        };
        let mut lines = vec![
            format!("{} from {} to {}", title, self.origin, self.destination),
            format!("  Begin at {}", self.origin),
        ];

        lines.extend(self.legs.iter().map(|leg| match self.metric {
            TripMetric::Distance => format!(
                "  Continue to {} ({:.p$} miles)",
                leg.location,
                leg.miles,
                p = precision
            ),
            TripMetric::Time => format!(
                "  Continue to {} ({:.p$} miles @ {:.p$}mph = {})",
                leg.location,
                leg.miles,
                leg.miles_per_hour,
                format_duration(leg.seconds, precision),
                p = precision
            ),
        }));

        lines.push(match self.metric {
            TripMetric::Distance => {
                format!("Total distance: {:.p$} miles", self.total_miles, p = precision)
            }
            TripMetric::Time => format!(
                "Total time: {}",
                format_duration(self.total_seconds, precision)
            ),
        });

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// 表格格式，每段一行
    pub fn to_table(&self, precision: usize) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(Row::new(
            ["from", "to", "location", "miles", "mph", "time"]
                .iter()
                .map(|c| Cell::new(c))
                .collect(),
        ));

        for leg in &self.legs {
            table.add_row(Row::new(vec![
                Cell::new(&leg.from.to_string()),
                Cell::new(&leg.to.to_string()),
                Cell::new(&leg.location),
                Cell::new(&format!("{:.p$}", leg.miles, p = precision)),
                Cell::new(&format!("{:.p$}", leg.miles_per_hour, p = precision)),
                Cell::new(&format_duration(leg.seconds, precision)),
            ]));
        }

        format!(
            "{} -> {} ({})\n{}{:.p$} miles, {}\n",
            self.origin,
            self.destination,
            self.metric,
            table,
            self.total_miles,
            format_duration(self.total_seconds, precision),
            p = precision
        )
    }
}

/// 为全部行程生成报告
///
/// 地图必须是强连通的，否则返回 [`Error::Disconnected`]。
pub fn plan_trips(road_map: &RoadMap, trips: &[Trip], config: &ReportConfig) -> Result<Vec<String>> {
    if !road_map.is_strongly_connected() {
        return Err(Error::Disconnected);
    }

    trips
        .iter()
        .map(|trip| {
            let itinerary = Itinerary::build(road_map, trip).map_err(|e| {
                tracing::warn!(start = %trip.start, end = %trip.end, error = %e, "trip failed");
                e
            })?;
            itinerary.render(config)
        })
        .collect()
}

/// 将秒数格式化为 `[H hours ][M minutes ]S seconds`，为零的小时和分钟省略
///
/// 先按 `precision` 舍入再拆分，秒数部分不会出现 `60`。
pub fn format_duration(seconds: f64, precision: usize) -> String {
    let scale = 10f64.powi(precision as i32);
    let total = (seconds * scale).round() / scale;

    let hours = (total / 3600.0).floor();
    let rest = total - hours * 3600.0;
    let minutes = (rest / 60.0).floor();
    let secs = rest - minutes * 60.0;

    let mut parts = Vec::with_capacity(3);
    if hours > 0.0 {
        parts.push(format!("{} hours", hours));
    }
    if minutes > 0.0 {
        parts.push(format!("{} minutes", minutes));
    }
    parts.push(format!("{:.p$} seconds", secs, p = precision));
    parts.join(" ")
}
