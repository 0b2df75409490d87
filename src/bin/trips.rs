//! RoadGraph 行程规划工具
//!
//! 读取道路地图和行程，输出每个行程的最短路线

use anyhow::Context;
use clap::Parser;
use roadgraph::config::{OutputFormat, ReportConfig};
use roadgraph::import;
use roadgraph::report;
use roadgraph::Error;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "roadgraph-trips")]
#[command(about = "按距离或驾驶时间规划最短行程")]
#[command(version)]
struct Args {
    /// 输入文件路径（缺省时读取标准输入）
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 输出格式
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// 小数位数
    #[arg(short, long, default_value = "2")]
    precision: usize,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// 一次运行的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Planned,
    Disconnected,
}

fn run<W: Write>(args: &Args, out: &mut W) -> anyhow::Result<Outcome> {
    let (road_map, trips) = match &args.input {
        Some(path) => import::read_input_file(path)
            .with_context(|| format!("读取输入文件失败: {}", path.display()))?,
        None => import::read_input(BufReader::new(io::stdin().lock()))
            .context("读取标准输入失败")?,
    };

    tracing::info!(
        locations = road_map.vertex_count(),
        segments = road_map.edge_count(),
        trips = trips.len(),
        "input loaded"
    );

    let config = ReportConfig {
        format: args.format,
        precision: args.precision,
    };

    match report::plan_trips(&road_map, &trips, &config) {
        Ok(reports) => {
            writeln!(out, "{}", reports.join("\n"))?;
            Ok(Outcome::Planned)
        }
        Err(Error::Disconnected) => {
            writeln!(out, "Disconnected Map")?;
            Ok(Outcome::Disconnected)
        }
        Err(e) => Err(e).context("行程规划失败"),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let outcome = run(&args, &mut io::stdout().lock())?;
    Ok(match outcome {
        Outcome::Planned => ExitCode::SUCCESS,
        Outcome::Disconnected => ExitCode::from(1),
    })
}
