//! Interactive menu over the five execution patterns
//!
//! This is the front end the core deliberately excludes: a console loop that
//! selects one pattern per keypress and invokes the corresponding runner
//! method. Watch the timestamps to compare how each pattern schedules the
//! same long-running operation.

use fetch_harness::{Config, Runner};
use std::io::{BufRead, Write};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for internal diagnostics (optional)
    // Uncomment if you add tracing-subscriber to your dependencies:
    // tracing_subscriber::fmt::init();

    let runner = Runner::new(Config::default());
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!(
            "--------------------------------------------------------------------------------------------------------"
        );
        println!("(1) Run sync");
        println!("(2) Run async (callback)");
        println!("(3) Run async (worker-pool task)");
        println!("(4) Run async (await)");
        println!("(5) Run async (await with forced error)");
        println!("(6) Run async (await) in parallel");
        println!();
        println!("Any other input exits...");
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let choice = line?.trim().chars().next();

        match choice {
            Some('1') => runner.run_sync()?,
            Some('2') => runner.run_callback(),
            Some('3') => runner.run_task(),
            Some('4') => runner.run_await(false).await,
            Some('5') => runner.run_await(true).await,
            Some('6') => runner.run_parallel().await,
            _ => break,
        }
    }

    Ok(())
}
