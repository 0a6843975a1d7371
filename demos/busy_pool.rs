use std::process::exit;
use std::thread;
use std::time::Duration;

use log::{error, info};

use taskpool::{PoolConfig, Result, WorkerPool};

const WORKERS: usize = 3;
const TASK_NUM: usize = 50;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        exit(1);
    }
}

fn run() -> Result<()> {
    let mut pool = WorkerPool::with_config(PoolConfig::new(WORKERS, TASK_NUM))?;
    info!("Submitting {} tasks to {} workers", TASK_NUM, WORKERS);

    for i in 0..TASK_NUM {
        pool.execute(move || {
            thread::sleep(Duration::from_millis(100));
            info!("task_{} end", i);
        })?;
    }

    // Destroying early would abandon whatever is still queued, so give the
    // workers time to drain before shutting down.
    thread::sleep(Duration::from_secs(3));
    pool.destroy();
    info!("Pool shut down");
    Ok(())
}
