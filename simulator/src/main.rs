use anyhow::Context;
use clap::Parser;
use export::csv::export_run;
use gui_bridge::bridge::{default_bind_address, GuiBridge};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::{Overrides, WorkflowConfig};
use workflow::runner::Runner;

mod export;
mod generator;
mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Board thermal simulation and sanity-check driver")]
struct Args {
    /// Synthesize one run, print the check summary and append it to the report log
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a workflow config from YAML (defaults to the demo board)
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Seed for the run's random source
    #[arg(long)]
    seed: Option<u64>,
    /// Ambient temperature in °C
    #[arg(long)]
    ambient: Option<f64>,
    /// Simulated duration in seconds
    #[arg(long)]
    sim_time: Option<f64>,
    /// Integration step in seconds
    #[arg(long)]
    dt: Option<f64>,
    /// Write the six CSV tables into this directory
    #[arg(long)]
    export: Option<PathBuf>,
    #[arg(long, default_value = "tools/data/offline_checks.log")]
    report: PathBuf,
    /// Keep the JSON bridge alive for the renderer
    #[arg(long, default_value_t = false)]
    serve: bool,
    #[arg(long, default_value_t = default_bind_address())]
    bind: SocketAddr,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let base = match &args.workflow {
        Some(path) => WorkflowConfig::load(path)?,
        None => WorkflowConfig::default(),
    };
    let workflow_config = base.with_overrides(Overrides {
        seed: args.seed,
        ambient: args.ambient,
        sim_time: args.sim_time,
        dt: args.dt,
        export_dir: args.export.clone(),
    });

    let runner = Arc::new(Runner::new(workflow_config.clone()));
    let gui_bridge = GuiBridge::new(runner.clone());
    let result = runner.execute()?;
    gui_bridge.publish(&result);

    if args.offline {
        println!(
            "Offline run -> seed {}, {} steps, {}",
            result.seed,
            result.run.time().len(),
            result.report.headline()
        );
        for check in &result.report.results {
            println!("  [{}] {}: {}", check.status.label(), check.label, check.summary);
        }

        let report = format!(
            "seed={} status={} passing={}/{} checks={:?}\n",
            result.seed,
            result.report.overall_status().label(),
            result.report.passing,
            result.report.total,
            result
                .report
                .results
                .iter()
                .map(|c| format!("{}:{}", c.key, c.status.label()))
                .collect::<Vec<_>>()
        );
        if let Some(parent) = args.report.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&args.report)
            .with_context(|| format!("opening report log {}", args.report.display()))?;
        file.write_all(report.as_bytes())?;
    }

    if let Some(dir) = &workflow_config.export_dir {
        let written = export_run(&result.run, dir)
            .with_context(|| format!("exporting run to {}", dir.display()))?;
        gui_bridge.publish_status(&format!("wrote {} CSV tables to {}", written.len(), dir.display()));
    }

    if args.serve {
        gui_bridge.serve(args.bind);
        gui_bridge.publish_status(&format!(
            "HTTP bridge on http://{} (Ctrl+C to stop)...",
            args.bind
        ));
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
