#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::pedantic)]

use plotters::prelude::*;
use probemap::ProbeMap;
use rand::Rng;

// Large enough that probe statistics are stable; with_capacity rounds this
// up to the prime 100_003.
const REQUESTED_CAPACITY: usize = 100_000;
// The table rehashes past half occupancy, so measurable load factors stop
// at 0.5.
const LOAD_FACTORS: [f64; 10] = [0.05, 0.10, 0.15, 0.20, 0.25, 0.30, 0.35, 0.40, 0.45, 0.50];
const MISS_SAMPLES: usize = 10_000;

/// Probe statistics for one table fill level.
struct ProbeStats {
    load_factor: f64,
    avg_hit: f64,
    max_hit: usize,
    avg_miss: f64,
}

/// Number of slots a lookup for `key` touches: the distance from the probe
/// seed to the resolved slot, plus one for the slot itself.
fn probe_length(map: &ProbeMap<u64, u64>, key: &u64) -> usize {
    let capacity = map.capacity();
    let start = map.hash_index(key);
    let resolved = map.location(key).unwrap_or(start);
    (resolved + capacity - start) % capacity + 1
}

/// Fills a fresh table to the target load factor with random keys and
/// measures probe lengths for present and absent keys.
fn measure(target_load_factor: f64) -> ProbeStats {
    let mut rng = rand::rng();
    let mut map: ProbeMap<u64, u64> = ProbeMap::with_capacity(REQUESTED_CAPACITY);
    let capacity = map.capacity();
    let target = (target_load_factor * capacity as f64) as usize;

    let mut keys = Vec::with_capacity(target);
    while map.len() < target {
        let key = rng.random::<u64>();
        if map.insert(key, key) {
            keys.push(key);
        }
    }
    assert_eq!(map.capacity(), capacity, "fill level must not trigger a rehash");

    let mut total_hit = 0usize;
    let mut max_hit = 0usize;
    for key in &keys {
        let length = probe_length(&map, key);
        total_hit += length;
        max_hit = max_hit.max(length);
    }

    let mut total_miss = 0usize;
    let mut misses = 0usize;
    while misses < MISS_SAMPLES {
        let key = rng.random::<u64>();
        if map.get(&key).is_some() {
            continue;
        }
        total_miss += probe_length(&map, &key);
        misses += 1;
    }

    ProbeStats {
        load_factor: map.load_factor(),
        avg_hit: total_hit as f64 / keys.len().max(1) as f64,
        max_hit,
        avg_miss: total_miss as f64 / MISS_SAMPLES as f64,
    }
}

/// Prints a small fully-visible table to show the slot dump format.
fn print_demo_dump() {
    let mut map = ProbeMap::new();
    map.insert("First Name".to_string(), "Connor".to_string());
    map.insert("Last Name".to_string(), "Ness".to_string());
    map.insert("Employee ID".to_string(), "10".to_string());
    map.remove("Employee ID");

    println!("Slot dump of an 11-slot table (one line per index):");
    print!("{map}");
    println!();
}

fn plot(stats: &[ProbeStats]) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new("probe_lengths.png", (1200, 900)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_avg = stats
        .iter()
        .map(|s| s.avg_hit.max(s.avg_miss))
        .fold(0.0f64, f64::max) *
        1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Linear probing: probe length vs load factor", ("sans-serif", 30))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0f64..0.55, 0.0f64..max_avg)?;

    chart
        .configure_mesh()
        .x_desc("Load Factor (occupied / capacity)")
        .y_desc("Average Probe Length (slots)")
        .axis_desc_style(("sans-serif", 20))
        .draw()?;

    let hit_style = ShapeStyle::from(&BLUE).stroke_width(3);
    chart
        .draw_series(LineSeries::new(
            stats.iter().map(|s| (s.load_factor, s.avg_hit)),
            hit_style,
        ))?
        .label("present keys")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], hit_style));
    chart.draw_series(
        stats.iter().map(|s| Circle::new((s.load_factor, s.avg_hit), 4, BLUE.filled())),
    )?;

    let miss_style = ShapeStyle::from(&RED).stroke_width(3);
    chart
        .draw_series(LineSeries::new(
            stats.iter().map(|s| (s.load_factor, s.avg_miss)),
            miss_style,
        ))?
        .label("absent keys")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], miss_style));
    chart.draw_series(
        stats.iter().map(|s| Circle::new((s.load_factor, s.avg_miss), 4, RED.filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    print_demo_dump();

    println!("Measuring probe lengths up to the rehash threshold...");
    println!("{:>12} {:>10} {:>10} {:>10}", "load factor", "avg hit", "max hit", "avg miss");

    let mut stats = Vec::with_capacity(LOAD_FACTORS.len());
    for &load_factor in &LOAD_FACTORS {
        let s = measure(load_factor);
        println!(
            "{:>12.3} {:>10.3} {:>10} {:>10.3}",
            s.load_factor, s.avg_hit, s.max_hit, s.avg_miss
        );
        stats.push(s);
    }

    plot(&stats)?;
    println!("Generated plot image: probe_lengths.png");

    Ok(())
}
