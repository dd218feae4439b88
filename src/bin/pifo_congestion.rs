//! 瓶颈端口拥塞仿真
//!
//! 若干正常流与一条攻击流经同一交换机汇聚到接收主机，输出 JSON 统计报告。

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pifo_sim::queue::QueueKind;
use pifo_sim::scenario::{
    run, FlowKind, FlowSpec, PortSpec, RunOptions, ScenarioError, ScenarioSpec, SCHEMA_VERSION,
};
use pifo_sim::sim::SimTime;
use tracing::error;

#[derive(Debug, Parser)]
#[command(name = "pifo_congestion", about = "瓶颈端口拥塞仿真：正常流与攻击流竞争 PIFO 队列")]
struct Args {
    /// 场景 JSON；给出时忽略下面的内置场景参数
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// 仿真运行到多少毫秒；缺省运行到事件耗尽
    #[arg(long)]
    until_ms: Option<u64>,
    /// 记录逐包 trace 并输出到报告
    #[arg(long, default_value_t = false)]
    trace_packets: bool,
    /// 报告另存为文件
    #[arg(long)]
    report_json: Option<PathBuf>,

    #[arg(long, default_value_t = 1.0)]
    bottleneck_gbps: f64,
    #[arg(long, default_value_t = 120_000)]
    queue_bits: u64,
    #[arg(long, value_enum, default_value_t = QueueKind::Pifo)]
    queue: QueueKind,
    #[arg(long, default_value_t = 12_000)]
    pkt_bits: u64,
    #[arg(long, default_value_t = 2)]
    benign_flows: u64,
    #[arg(long, default_value_t = 500)]
    benign_pkts: u64,
    #[arg(long, default_value_t = 30_000)]
    benign_gap_ns: u64,
    #[arg(long, default_value_t = 2_000)]
    attack_pkts: u64,
    #[arg(long, default_value_t = 4_000)]
    attack_gap_ns: u64,
}

impl Args {
    /// 内置场景：正常流 rank 1，攻击流 rank 10
    fn builtin_scenario(&self) -> ScenarioSpec {
        let benign = (0..self.benign_flows).map(|_| FlowSpec {
            kind: FlowKind::Benign,
            pkts: self.benign_pkts,
            pkt_bits: self.pkt_bits,
            gap_ns: self.benign_gap_ns,
            rank: 1,
            start_ns: 0,
        });
        let attack = FlowSpec {
            kind: FlowKind::Attack,
            pkts: self.attack_pkts,
            pkt_bits: self.pkt_bits,
            gap_ns: self.attack_gap_ns,
            rank: 10,
            start_ns: 0,
        };
        ScenarioSpec {
            schema_version: SCHEMA_VERSION,
            bottleneck: PortSpec {
                bandwidth_gbps: self.bottleneck_gbps,
                latency_ns: 1_000,
                queue_bits: self.queue_bits,
                queue: self.queue,
            },
            access: None,
            flows: benign.chain(std::iter::once(attack)).collect(),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();
    match simulate(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "仿真失败");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn simulate(args: &Args) -> Result<(), ScenarioError> {
    let spec = match &args.scenario {
        Some(path) => ScenarioSpec::from_path(path)?,
        None => args.builtin_scenario(),
    };
    let opts = RunOptions {
        until: args.until_ms.map(SimTime::from_millis),
        trace_packets: args.trace_packets,
    };

    let outcome = run(&spec, &opts)?;
    let json = serde_json::to_string_pretty(&outcome)?;
    if let Some(path) = &args.report_json {
        fs::write(path, &json).map_err(|source| ScenarioError::Io {
            path: path.clone(),
            source,
        })?;
    }
    println!("{json}");
    Ok(())
}
