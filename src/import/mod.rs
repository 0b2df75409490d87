//! 数据导入模块
//!
//! 从行式文本读取道路地图和行程。空行和以 `#` 开头的行会被忽略，
//! 输入依次包含三段，每段先给出记录数再逐行给出记录：
//!
//! ```text
//! # 地点: <编号> <名称>
//! 2
//! 0 Anteater Way
//! 1 Bren Events Center
//! # 路段: <起点> <终点> <里程> <限速>
//! 1
//! 0 1 0.5 25
//! # 行程: <起点> <终点> <D|T>
//! 1
//! 0 1 D
//! ```

use crate::error::{Error, Result};
use crate::graph::VertexId;
use crate::types::{RoadMap, RoadSegment, Trip, TripMetric};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// 跳过注释和空行的行读取器
pub struct InputReader<R> {
    inner: R,
    line_number: usize,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line_number: 0,
        }
    }

    /// 最近读取的物理行号（从 1 开始）
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// 读取下一条有效行；输入结束时返回 `None`
    pub fn next_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        loop {
            buf.clear();
            if self.inner.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let line = buf.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            return Ok(Some(line.to_string()));
        }
    }

    /// 读取下一条有效行，输入提前结束时报错
    pub fn require_line(&mut self, what: &str) -> Result<String> {
        self.next_line()?
            .ok_or_else(|| self.parse_error(format!("输入意外结束，缺少{}", what)))
    }

    /// 读取一行记录数
    pub fn read_count(&mut self, what: &str) -> Result<usize> {
        let line = self.require_line(what)?;
        self.parse_field(&line, what)
    }

    fn parse_field<T: FromStr>(&self, field: &str, what: &str) -> Result<T> {
        field
            .parse()
            .map_err(|_| self.parse_error(format!("无法解析{}: {:?}", what, field)))
    }

    fn parse_error(&self, message: String) -> Error {
        Error::Parse {
            line: self.line_number,
            message,
        }
    }
}

/// 道路地图读取器
#[derive(Debug, Default)]
pub struct RoadMapReader;

impl RoadMapReader {
    pub fn new() -> Self {
        Self
    }

    /// 读取地点段和路段段，构建道路地图
    pub fn read_road_map<R: BufRead>(&self, input: &mut InputReader<R>) -> Result<RoadMap> {
        let mut road_map = RoadMap::new();

        let locations = input.read_count("地点数量")?;
        for _ in 0..locations {
            let (id, name) = self.read_location(input)?;
            road_map.add_vertex(id, name)?;
        }

        let segments = input.read_count("路段数量")?;
        for _ in 0..segments {
            let (from, to, segment) = self.read_segment(input)?;
            road_map.add_edge(from, to, segment)?;
        }

        tracing::debug!(
            locations = road_map.vertex_count(),
            segments = road_map.edge_count(),
            "road map loaded"
        );
        Ok(road_map)
    }

    fn read_location<R: BufRead>(&self, input: &mut InputReader<R>) -> Result<(VertexId, String)> {
        let line = input.require_line("地点")?;
        let (id, name) = line
            .split_once(char::is_whitespace)
            .ok_or_else(|| input.parse_error(format!("地点缺少名称: {:?}", line)))?;

        let id: i64 = input.parse_field(id, "地点编号")?;
        Ok((VertexId::new(id), name.trim().to_string()))
    }

    fn read_segment<R: BufRead>(
        &self,
        input: &mut InputReader<R>,
    ) -> Result<(VertexId, VertexId, RoadSegment)> {
        let line = input.require_line("路段")?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 4 {
            return Err(input.parse_error(format!("路段应包含 4 个字段: {:?}", line)));
        }

        let from: i64 = input.parse_field(parts[0], "起点编号")?;
        let to: i64 = input.parse_field(parts[1], "终点编号")?;
        let miles: f64 = input.parse_field(parts[2], "里程")?;
        let mph: f64 = input.parse_field(parts[3], "限速")?;

        if !(miles.is_finite() && miles >= 0.0) {
            return Err(input.parse_error(format!("里程必须是非负数: {}", miles)));
        }
        if !(mph.is_finite() && mph > 0.0) {
            return Err(input.parse_error(format!("限速必须是正数: {}", mph)));
        }

        Ok((
            VertexId::new(from),
            VertexId::new(to),
            RoadSegment::new(miles, mph),
        ))
    }
}

/// 行程读取器
#[derive(Debug, Default)]
pub struct TripReader;

impl TripReader {
    pub fn new() -> Self {
        Self
    }

    /// 读取行程段
    pub fn read_trips<R: BufRead>(&self, input: &mut InputReader<R>) -> Result<Vec<Trip>> {
        let count = input.read_count("行程数量")?;
        let mut trips = Vec::with_capacity(count);

        for _ in 0..count {
            let line = input.require_line("行程")?;
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() != 3 {
                return Err(input.parse_error(format!("行程应包含 3 个字段: {:?}", line)));
            }

            let start: i64 = input.parse_field(parts[0], "起点编号")?;
            let end: i64 = input.parse_field(parts[1], "终点编号")?;
            let metric = TripMetric::from_str(parts[2]).map_err(|_| {
                input.parse_error(format!("行程度量应为 D 或 T: {:?}", parts[2]))
            })?;

            trips.push(Trip::new(start, end, metric));
        }

        Ok(trips)
    }
}

/// 一次读取道路地图和全部行程
pub fn read_input<R: BufRead>(reader: R) -> Result<(RoadMap, Vec<Trip>)> {
    let mut input = InputReader::new(reader);
    let road_map = RoadMapReader::new().read_road_map(&mut input)?;
    let trips = TripReader::new().read_trips(&mut input)?;
    Ok((road_map, trips))
}

/// 从文件读取道路地图和全部行程
pub fn read_input_file<P: AsRef<Path>>(path: P) -> Result<(RoadMap, Vec<Trip>)> {
    let file = File::open(path)?;
    read_input(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    const SAMPLE: &str = "\
# 地点
3
0 Anteater Way
1 Bren  Events Center
2 Engineering Tower

# 路段
4
0 1 0.5 25
1 2 1.2 35.5
2 0 2.0 45
0 2 3 60

# 行程
2
0 2 D
2 1 t
";

    #[test]
    fn test_read_sample() {
        let (road_map, trips) = read_input(Cursor::new(SAMPLE)).unwrap();

        assert_eq!(road_map.vertex_count(), 3);
        assert_eq!(road_map.edge_count(), 4);
        assert_eq!(road_map.vertex_info(1).unwrap(), "Bren  Events Center");
        assert_eq!(
            *road_map.edge_info(1, 2).unwrap(),
            RoadSegment::new(1.2, 35.5)
        );

        assert_eq!(
            trips,
            vec![
                Trip::new(0, 2, TripMetric::Distance),
                Trip::new(2, 1, TripMetric::Time),
            ]
        );
    }

    #[test]
    fn test_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let (road_map, trips) = read_input_file(file.path()).unwrap();
        assert_eq!(road_map.edge_count(), 4);
        assert_eq!(trips.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input_file(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_bad_metric_reports_line() {
        let input = "1\n0 Home\n0\n1\n0 0 X\n";
        let err = read_input(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 5, .. }), "{:?}", err);
    }

    #[test]
    fn test_truncated_input() {
        let input = "2\n0 Home\n";
        let err = read_input(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_segment_fields() {
        let bad_mph = "2\n0 A\n1 B\n1\n0 1 2.0 0\n0\n";
        assert!(matches!(
            read_input(Cursor::new(bad_mph)).unwrap_err(),
            Error::Parse { line: 5, .. }
        ));

        let short = "2\n0 A\n1 B\n1\n0 1 2.0\n0\n";
        assert!(matches!(
            read_input(Cursor::new(short)).unwrap_err(),
            Error::Parse { .. }
        ));
    }

    #[test]
    fn test_graph_errors_propagate() {
        let duplicate = "2\n0 A\n0 B\n0\n0\n";
        assert_eq!(
            read_input(Cursor::new(duplicate)).unwrap_err(),
            Error::DuplicateVertex(VertexId::new(0))
        );

        let unknown = "1\n0 A\n1\n0 5 1 1\n0\n";
        assert_eq!(
            read_input(Cursor::new(unknown)).unwrap_err(),
            Error::UnknownVertex(VertexId::new(5))
        );
    }
}
