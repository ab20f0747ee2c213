//! lazy-stream-demo
//!
//! Walks through the stream API with literal inputs and prints the results.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin lazy-stream-demo
//!
//! # Trace every traversal step
//! LAZY_STREAM_TRACE=1 RUST_LOG=lazy_stream::trace=trace cargo run --bin lazy-stream-demo
//! ```

use std::process::ExitCode;

use lazy_stream::stream::LazyStream;
use lazy_stream::trace::TraceConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lazy_stream=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match TraceConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "invalid trace configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(tracing = config.is_enabled(), "running stream demo");

    let numbers = LazyStream::of(vec![1, 2, 3, 4, 5]);
    let traced = numbers.traced(&config);

    println!("take(2)        = {:?}", traced.take(2).to_list_eager());
    println!("drop(1)        = {:?}", traced.drop(1).to_list_eager());
    println!("exists(> 2)    = {}", traced.exists(|x| *x > 2));
    println!("for_all(> 0)   = {}", traced.for_all(|x| *x > 0));
    println!("for_all(> 1)   = {}", traced.for_all(|x| *x > 1));
    println!("find(even)     = {:?}", traced.find(|x| x % 2 == 0));
    println!(
        "take_while(<4) = {:?} / {:?}",
        traced.take_while(|x| *x < 4).to_list_eager(),
        traced.take_while_via_fold_right(|x| *x < 4).to_list_eager()
    );
    println!("forced so far  = {numbers:?}");

    let ones: LazyStream<i32> = LazyStream::ones();
    println!("ones.take(5)   = {:?}", ones.take(5).to_list_eager());
    println!("ones.exists(1) = {}", ones.exists(|x| *x == 1));

    let fibonacci = LazyStream::unfold((0_u64, 1_u64), |(current, next)| {
        Some((current, (next, current + next)))
    });
    println!("fibonacci      = {:?}", fibonacci.take(10).to_list_eager());

    let naturals = LazyStream::from(1_u64);
    println!(
        "squares > 50   = {:?}",
        naturals.map(|x| x * x).find(|x| *x > 50)
    );
    println!(
        "starts_with    = {}",
        naturals.starts_with(&LazyStream::of(vec![1, 2, 3]))
    );

    ExitCode::SUCCESS
}
