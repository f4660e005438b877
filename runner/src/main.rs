use std::num::NonZeroUsize;

use anyhow::Context;
use clap::{App, Arg};
use regex::Regex;

use schedsim::{
    generate, Collector, Engine, EngineConfig, Fcfs, Policy, Priority, RoundRobin, RunReport, Sjf,
    Srtf, WorkloadConfig,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = App::new("schedsim")
        .version("1.0")
        .about("Single-CPU scheduling policy simulator")
        .arg(
            Arg::with_name("processes")
                .short("n")
                .long("processes")
                .takes_value(true)
                .default_value("20")
                .help("Number of processes in the workload"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .help("Workload seed; drawn from entropy when omitted"),
        )
        .arg(
            Arg::with_name("schedspec")
                .short("s")
                .long("schedspec")
                .takes_value(true)
                .validator(valid_schedspec)
                .help("Policy to run: F, J, S, R<quantum> or P; all five when omitted"),
        )
        .arg(
            Arg::with_name("switch-cost")
                .long("switch-cost")
                .takes_value(true)
                .default_value("14")
                .help("Ticks charged for a context switch between two runnable processes"),
        )
        .arg(
            Arg::with_name("time-slice")
                .long("time-slice")
                .takes_value(true)
                .default_value("200")
                .help("Round robin quantum in ticks"),
        )
        .get_matches();

    let processes: usize = matches
        .value_of("processes")
        .unwrap()
        .parse()
        .context("--processes must be a number")?;
    let seed: u64 = match matches.value_of("seed") {
        Some(value) => value.parse().context("--seed must be a u64")?,
        None => rand::random(),
    };
    let switch_cost: usize = matches
        .value_of("switch-cost")
        .unwrap()
        .parse()
        .context("--switch-cost must be a number")?;
    let time_slice: usize = matches
        .value_of("time-slice")
        .unwrap()
        .parse()
        .context("--time-slice must be a number")?;
    let time_slice =
        NonZeroUsize::new(time_slice).context("--time-slice must be at least 1")?;

    log::info!("workload seed {}", seed);

    let config = WorkloadConfig {
        processes,
        ..WorkloadConfig::default()
    };
    let workload = generate(&config, seed)?;

    let engine_config = EngineConfig {
        switch_cost,
        // Resuming after an idle gap swaps in only one direction.
        resume_cost: switch_cost / 2,
    };

    for policy in select_policies(matches.value_of("schedspec"), time_slice)? {
        let mut engine = Engine::new(engine_config, policy);
        let mut collector = Collector::new();
        let report = engine
            .run(&workload, &mut collector)
            .with_context(|| format!("simulation failed (seed {})", seed))?;
        print_report(&report);
    }

    Ok(())
}

fn valid_schedspec(value: String) -> Result<(), String> {
    let re = Regex::new(r"^([FJSP]|R\d+)$").unwrap();
    if !re.is_match(&value) {
        Err(format!(
            "Invalid scheduler specification: {}. Must be one of F, J, S, R<quantum> or P",
            value
        ))
    } else {
        Ok(())
    }
}

fn select_policies(
    spec: Option<&str>,
    time_slice: NonZeroUsize,
) -> anyhow::Result<Vec<Box<dyn Policy>>> {
    let policies: Vec<Box<dyn Policy>> = match spec {
        None => vec![
            Box::new(Fcfs::new()),
            Box::new(Sjf::new()),
            Box::new(Srtf::new()),
            Box::new(RoundRobin::new(time_slice)),
            Box::new(Priority::new()),
        ],
        Some("F") => vec![Box::new(Fcfs::new())],
        Some("J") => vec![Box::new(Sjf::new())],
        Some("S") => vec![Box::new(Srtf::new())],
        Some("P") => vec![Box::new(Priority::new())],
        Some(spec) if spec.starts_with('R') => {
            let quantum: usize = spec[1..]
                .parse()
                .with_context(|| format!("bad round robin quantum in {:?}", spec))?;
            let quantum = NonZeroUsize::new(quantum)
                .context("round robin quantum must be at least 1")?;
            vec![Box::new(RoundRobin::new(quantum))]
        }
        Some(other) => anyhow::bail!("invalid scheduler specification: {}", other),
    };

    Ok(policies)
}

fn print_report(report: &RunReport) {
    println!("{}:", report.policy);
    println!();
    for event in &report.events {
        println!("{}", event);
    }
    println!();
    println!("{}", report.summary);
    println!();
}
