use clap::{Parser, ValueEnum};
use megaheap::MaxHeap;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use std::time::Instant;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Order {
    Ascending,
    Descending,
    Shuffled,
}

#[derive(Parser)]
#[command(name = "heap-benchmark")]
#[command(about = "A max-heap performance testing tool")]
struct Args {
    #[arg(long, default_value = "1000000")]
    size: usize,

    #[arg(long, value_enum, default_value = "shuffled")]
    order: Order,

    #[arg(long, default_value = "42")]
    seed: u64,
}

fn main() {
    let args = Args::parse();
    let size = args.size;

    let mut values: Vec<usize> = (0..size).collect();
    match args.order {
        Order::Ascending => {}
        Order::Descending => values.reverse(),
        Order::Shuffled => {
            let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
            values.shuffle(&mut rng);
        }
    }

    println!(
        "Running with {:?} order and {} element count",
        args.order, size
    );

    let mut heap = MaxHeap::with_capacity(size);
    let start = Instant::now();
    for (i, &value) in values.iter().enumerate() {
        assert_eq!(heap.len(), i);
        heap.push(value);
    }
    let pushed = Instant::now();
    // find is linear, so only sample it on large heaps
    let step = (size / 1000).max(1);
    for value in (0..size).step_by(step) {
        assert!(heap.find(&value));
    }
    let checked_find = Instant::now();
    for expected in (0..size).rev() {
        assert_eq!(heap.pop(), Ok(expected));
    }
    let end = Instant::now();
    assert!(heap.is_empty());

    println!(
        "Pushes took {} seconds",
        pushed.saturating_duration_since(start).as_secs_f32()
    );
    println!(
        "Checking find took {} seconds",
        checked_find.saturating_duration_since(pushed).as_secs_f32()
    );
    println!(
        "Pops took {} seconds",
        end.saturating_duration_since(checked_find).as_secs_f32()
    );
    println!(
        "Total {} seconds",
        end.saturating_duration_since(start).as_secs_f32()
    );
}
