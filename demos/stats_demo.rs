use core::hash::BuildHasher;

use chain_hash::HashCodeBuilder;
use chain_hash::HashMap;
use chain_hash::RandomState;
use clap::Parser;
use clap::ValueEnum;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Hasher {
    /// Deterministic structural hash codes.
    HashCode,
    /// Randomly seeded hashing.
    Random,
}

#[derive(Parser, Debug)]
struct Args {
    /// Number of integer keys to insert.
    #[arg(short = 'n', long = "count", default_value_t = 1000)]
    count: usize,

    /// Entries per bucket at which the map grows.
    #[arg(short = 'l', long = "load_factor", default_value_t = 0.75)]
    load_factor: f32,

    /// Key spacing; a power of two here piles hash codes into few buckets.
    #[arg(short = 's', long = "stride", default_value_t = 1)]
    stride: u64,

    #[arg(long = "hasher", value_enum, default_value_t = Hasher::HashCode)]
    hasher: Hasher,
}

fn fill_and_report<S: BuildHasher>(args: &Args, hash_builder: S) {
    let mut map = HashMap::with_capacity_load_factor_and_hasher(0, args.load_factor, hash_builder);

    println!("Filling map with {} u64 keys...", args.count);
    for i in 0..args.count as u64 {
        let key = i.wrapping_mul(args.stride);
        map.insert(Some(key), Some(i));
    }
    map.insert(None, None);

    println!("Inserted {} entries into map", map.len());
    println!(
        "Final load factor: {:.2}% of {} buckets",
        (map.len() as f64 / map.bucket_count() as f64) * 100.0,
        map.bucket_count()
    );

    map.print_chain_histogram();
    map.debug_stats().print();
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match args.hasher {
        Hasher::HashCode => fill_and_report(&args, HashCodeBuilder),
        Hasher::Random => fill_and_report(&args, RandomState::default()),
    }
}
