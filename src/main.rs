use prime_buckets::HashTable;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    const BASE_SIZE: usize = 50;
    const SAMPLE_SIZE: usize = 200000;
    const LOOKUP_SAMPLES: usize = 1000;

    let samples: Vec<String> = (0..SAMPLE_SIZE)
        .map(|_| rand::random::<u64>().to_string())
        .collect();

    let mut h: HashTable = HashTable::with_base_size(BASE_SIZE)?;
    info!(size = h.size(), "created hash table");

    let now: Instant = Instant::now();
    for key in samples.iter() {
        h.insert(key, key)?;
    }
    let elapsed: usize = now.elapsed().as_nanos() as usize;

    println!("Initial base size {} actual size {}", BASE_SIZE, h.size());
    println!("Initial entries {} actual entries {}", SAMPLE_SIZE, h.len());
    println!("Load factor {}", h.load_factor());
    println!("Avg time to insert {}", elapsed as f64 / SAMPLE_SIZE as f64);

    for key in samples.iter() {
        if h.search(key) != Some(key.as_str()) {
            anyhow::bail!("Failed to get key {}", key);
        }
    }

    benchmarking::warm_up();
    let lookup = benchmarking::measure_function(|measurer| {
        for key in samples.iter().take(LOOKUP_SAMPLES) {
            measurer.measure(|| h.search(key).is_some());
        }
    })
    .map_err(|e| anyhow::anyhow!("benchmark failed: {:?}", e))?;
    println!("Avg time to lookup {:?}", lookup.elapsed());

    let now: Instant = Instant::now();
    for key in samples.iter() {
        h.delete(key)?;
    }
    let elapsed: usize = now.elapsed().as_nanos() as usize;

    println!("Initial base size {} actual size {}", BASE_SIZE, h.size());
    println!("Initial entries {} actual entries {}", SAMPLE_SIZE, h.len());
    println!("Avg time to delete {}", elapsed as f64 / SAMPLE_SIZE as f64);

    Ok(())
}
