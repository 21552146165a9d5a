use wordfreq::engine::{Engine, EngineConfig};
use wordfreq::mapper::MapBackend;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut config = EngineConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--url" => {
                config.source_url = args[i + 1].clone();
                i += 2;
            }
            "--workers" => {
                config.workers = args[i + 1].parse()?;
                i += 2;
            }
            "--top" => {
                config.top_n = args[i + 1].parse()?;
                i += 2;
            }
            "--backend" => {
                config.backend = match args[i + 1].as_str() {
                    "threads" => MapBackend::Threads,
                    "tasks" => MapBackend::Tasks,
                    other => anyhow::bail!("unknown backend '{}' (threads|tasks)", other),
                };
                i += 2;
            }
            "--help" => {
                eprintln!(
                    "Usage: {} [--url <url>] [--workers <n>] [--top <n>] [--backend threads|tasks]",
                    args[0]
                );
                return Ok(());
            }
            _ => {
                i += 1;
            }
        }
    }

    tracing::info!(
        "Counting word frequencies from {} ({} workers)",
        config.source_url,
        config.workers
    );

    let engine = Engine::new(config);
    let report = engine.run().await?;

    println!(
        "Top {} words from {} ({} tokens, {} distinct):",
        report.entries.len(),
        report.source_url,
        report.total_tokens,
        report.distinct_tokens
    );
    for (rank, entry) in report.entries.iter().enumerate() {
        println!("{:>4}. {:<24} {:>10}", rank + 1, entry.token, entry.count);
    }

    tracing::info!(
        "Phase timings: fetch={}ms tokenize={}ms map={}ms reduce={}ms",
        report.timings.fetch_ms,
        report.timings.tokenize_ms,
        report.timings.map_ms,
        report.timings.reduce_ms
    );

    Ok(())
}
