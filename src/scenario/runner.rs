use serde::Serialize;
use tracing::info;

use super::error::ScenarioError;
use super::inject::InjectFlow;
use super::spec::{PortSpec, ScenarioSpec};
use crate::net::{Link, NetWorld, NodeId, PortId, Stats};
use crate::sim::{SimTime, Simulator};
use crate::stats::{SimLogger, SimReport};

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// None 表示运行到事件队列为空
    pub until: Option<SimTime>,
    pub trace_packets: bool,
}

/// 场景拓扑：sources[i] 是第 i 条流的源主机
#[derive(Debug, Clone)]
pub struct ScenarioTopology {
    pub sources: Vec<NodeId>,
    pub switch: NodeId,
    pub sink: NodeId,
    pub bottleneck: PortId,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub bottleneck: PortId,
    pub delivered: Stats,
    pub report: SimReport,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub traces: Vec<String>,
}

fn link_for(port: &PortSpec) -> Result<Link, ScenarioError> {
    // 1 Gbps = 1 bit/ns
    Ok(Link::new(SimTime(port.latency_ns), port.bandwidth_gbps)?)
}

/// 构建拓扑并调度所有流的首次注入
pub fn build(
    spec: &ScenarioSpec,
    world: &mut NetWorld,
    sim: &mut Simulator,
) -> Result<ScenarioTopology, ScenarioError> {
    spec.validate()?;
    let net = &mut world.net;

    let sink = net.add_host("d0");
    let switch = net.add_switch("s0");
    let bottleneck = net.connect(
        switch,
        sink,
        link_for(&spec.bottleneck)?,
        spec.bottleneck.queue.build(spec.bottleneck.queue_bits),
    )?;

    let access = spec.access_port();
    let access_link = link_for(&access)?;
    let mut sources = Vec::with_capacity(spec.flows.len());
    for (i, flow) in spec.flows.iter().enumerate() {
        let host = net.add_host(format!("h{i}"));
        net.connect(host, switch, access_link, access.queue.build(access.queue_bits))?;
        sources.push(host);

        sim.schedule(
            SimTime(flow.start_ns),
            InjectFlow {
                flow_id: i as u64,
                kind: flow.kind,
                src: host,
                path: vec![switch, sink],
                pkt_bits: flow.pkt_bits,
                rank: flow.rank,
                remaining: flow.pkts,
                gap_ns: flow.gap_ns,
                next_seq: 0,
            },
        );
    }

    Ok(ScenarioTopology {
        sources,
        switch,
        sink,
        bottleneck,
    })
}

/// 在全新的仿真器中运行场景
pub fn run(spec: &ScenarioSpec, opts: &RunOptions) -> Result<ScenarioOutcome, ScenarioError> {
    let mut sim = Simulator::default();
    let mut world = NetWorld::with_logger(SimLogger::new(opts.trace_packets));
    let topo = build(spec, &mut world, &mut sim)?;
    info!(flows = spec.flows.len(), bottleneck = topo.bottleneck.0, "场景已构建");

    match opts.until {
        Some(until) => sim.run_until(until, &mut world),
        None => sim.run(&mut world),
    }

    let net = &world.net;
    info!(
        now = ?sim.now(),
        delivered_pkts = net.stats.delivered_pkts,
        "场景运行结束"
    );
    Ok(ScenarioOutcome {
        bottleneck: topo.bottleneck,
        delivered: net.stats.clone(),
        report: net.logger.report(sim.now()),
        traces: net.logger.traces().to_vec(),
    })
}
