use std::process;
use std::sync::Arc;

use clap::Parser;
use dns_stress::args::Args;
use dns_stress::error::StressError;
use dns_stress::executor::DnsQueryExecutor;
use dns_stress::test_runner::run_stress_test;
use figlet_rs::FIGfont;
use human_repr::HumanThroughput;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), StressError> {
    let args = Args::parse();
    tracing_subscriber::fmt::init();

    let standard_font = FIGfont::standard().unwrap();
    let figure = standard_font.convert("DNS Stress");
    println!("{}", figure.unwrap());

    println!(
        "Starting DNS stress test against {}:{}",
        args.server, args.port
    );
    println!("Query: {}", args.query);
    println!(
        "Requests: {}, Concurrency: {}",
        args.num_requests, args.concurrency
    );

    let executor =
        DnsQueryExecutor::connect(&args.server, args.port, args.expect_content.clone()).await?;
    info!("Starting the stress test...");
    let result = run_stress_test(
        Arc::new(executor),
        &args.query,
        args.num_requests,
        args.concurrency.get(),
    )
    .await;
    info!("Finished the stress test.");

    println!("\nResults:");
    println!("Duration: {:.2} seconds", result.duration.as_secs_f64());
    println!("Successful queries: {}", result.success);
    println!("Failed queries: {}", result.failures);
    match result.queries_per_second() {
        Some(qps) => println!("Queries per second: {}", qps.human_throughput("queries")),
        None => println!("Queries per second: n/a"),
    }

    if result.failures > 0 {
        process::exit(1);
    }
    Ok(())
}
