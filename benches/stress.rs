use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{Days, NaiveDate};

use roomledger::engine::Engine;
use roomledger::ids::UlidGenerator;
use roomledger::model::{Money, StayRange};

const ROOMS: usize = 10;

fn base_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// One-night stay `offset` days after the base day.
fn night(offset: u64) -> StayRange {
    let start = base_day() + Days::new(offset);
    StayRange::new(start, start + Days::new(1)).unwrap()
}

fn percentile(sorted: &[Duration], p: f64) -> Duration {
    if sorted.is_empty() {
        return Duration::ZERO;
    }
    let idx = ((sorted.len() as f64) * p / 100.0) as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn print_latency(label: &str, latencies: &mut [Duration]) {
    latencies.sort();
    let total: Duration = latencies.iter().sum();
    let avg = total / latencies.len() as u32;
    println!("  {label}:");
    println!(
        "    n={}, avg={:.3}us, p50={:.3}us, p95={:.3}us, p99={:.3}us, max={:.3}us",
        latencies.len(),
        avg.as_secs_f64() * 1e6,
        percentile(latencies, 50.0).as_secs_f64() * 1e6,
        percentile(latencies, 95.0).as_secs_f64() * 1e6,
        percentile(latencies, 99.0).as_secs_f64() * 1e6,
        latencies.last().unwrap().as_secs_f64() * 1e6,
    );
}

fn setup() -> Engine {
    let engine = Engine::new(Arc::new(UlidGenerator));
    for i in 0..ROOMS {
        engine
            .create_resource(&format!("{}", 100 + i), None, Money::from_dollars(100))
            .unwrap();
    }
    println!("  created {ROOMS} rooms");
    engine
}

fn phase1_sequential(engine: &Engine) {
    let n = 2000;
    let mut latencies = Vec::with_capacity(n);
    let start = Instant::now();

    for i in 0..n {
        let t = Instant::now();
        engine.commit("100", night(i as u64)).unwrap();
        latencies.push(t.elapsed());
    }

    let elapsed = start.elapsed();
    let ops = n as f64 / elapsed.as_secs_f64();
    println!("  {n} commits in {:.3}s = {ops:.0} ops/sec", elapsed.as_secs_f64());
    print_latency("commit latency", &mut latencies);
}

/// Every thread races for the same nights on one room; exactly one commit
/// per night may win.
fn phase2_contended(engine: &Engine) {
    let n_threads = 8;
    let nights = 500u64;

    let start = Instant::now();
    let wins: usize = std::thread::scope(|s| {
        let handles: Vec<_> = (0..n_threads)
            .map(|_| {
                s.spawn(move || {
                    (0..nights)
                        .filter(|&i| engine.commit("101", night(i)).is_ok())
                        .count()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });

    let elapsed = start.elapsed();
    let total = n_threads as u64 * nights;
    println!(
        "  {n_threads} threads x {nights} nights = {total} attempts in {:.3}s, {wins} won",
        elapsed.as_secs_f64()
    );
    assert_eq!(wins as u64, nights, "double booking detected");
}

fn phase3_read_under_load(engine: &Engine) {
    for i in 0..200 {
        engine.commit("102", night(i * 2)).unwrap();
    }

    let stop = AtomicBool::new(false);
    let n_readers = 4;
    let reads_per_reader = 5000;

    let mut latencies: Vec<Duration> = std::thread::scope(|s| {
        let stop = &stop;
        for w in 0..4u64 {
            let rid = format!("{}", 103 + w);
            s.spawn(move || {
                let mut i = 0u64;
                while !stop.load(Ordering::Relaxed) {
                    let _ = engine.commit(&rid, night(i));
                    i += 1;
                }
            });
        }

        let readers: Vec<_> = (0..n_readers)
            .map(|_| {
                s.spawn(move || {
                    let mut lat = Vec::with_capacity(reads_per_reader);
                    for i in 0..reads_per_reader {
                        let window = night((i % 400) as u64);
                        let t = Instant::now();
                        let _ = engine.is_available("102", &window);
                        lat.push(t.elapsed());
                    }
                    lat
                })
            })
            .collect();

        let lat = readers
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        stop.store(true, Ordering::Relaxed);
        lat
    });

    print_latency("is_available latency under write load", &mut latencies);
}

fn main() {
    println!("roomledger stress");
    let engine = setup();

    println!("phase 1: sequential commits");
    phase1_sequential(&engine);

    println!("phase 2: contended commits");
    phase2_contended(&engine);

    println!("phase 3: reads under write load");
    phase3_read_under_load(&engine);
}
