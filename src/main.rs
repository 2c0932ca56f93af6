use clap::{App, Arg};
use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use faultbench_plot::db::Dataset;
use faultbench_plot::fmt::PlotFmt;
use faultbench_plot::summary::Summary;
use tracing::info;

fn main() -> Result<(), Report> {
    // init logging
    tracing_subscriber::fmt::init();

    let (files, output) = parse_args();
    let dataset = Dataset::load(files).wrap_err("load benchmark files")?;
    info!("loaded {} records", dataset.len());

    let summary = Summary::from_dataset(&dataset);

    // absolute p95 listing of every UPDATE measurement
    for workload in &summary.workloads {
        for entry in &workload.update_latencies {
            info!(
                "protocol {} | {} | {}: p95_us {}",
                entry.protocol,
                PlotFmt::workload_title(&workload.workload),
                PlotFmt::problem_level_label(entry.problem_level),
                entry.p95_us.round() as u64,
            );
        }
    }

    let json = serde_json::to_string_pretty(&summary)
        .wrap_err("serialize summary")?;
    match output {
        Some(path) => std::fs::write(&path, json)
            .wrap_err_with(|| format!("write summary to {}", path))?,
        None => println!("{}", json),
    }
    Ok(())
}

fn parse_args() -> (Vec<(String, usize)>, Option<String>) {
    let matches = App::new("faultbench_plot")
        .version("0.1")
        .about(
            "Summarizes benchmark csv files per fault level for plotting.",
        )
        .arg(
            Arg::with_name("files")
                .value_name("FILE")
                .help(
                    "benchmark csv files, one per fault level, in order; \
                     the first file is the fault-free baseline",
                )
                .required(true)
                .multiple(true),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .value_name("PATH")
                .help("write the json summary to this file instead of stdout")
                .takes_value(true),
        )
        .get_matches();

    // parse arguments: file position determines the fault level
    let files = matches
        .values_of("files")
        .expect("at least one input file should be set")
        .enumerate()
        .map(|(problem_level, path)| (path.to_string(), problem_level))
        .collect();
    let output = matches.value_of("output").map(String::from);
    (files, output)
}
