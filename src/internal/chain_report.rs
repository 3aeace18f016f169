#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_docs_in_private_items)]

use chainmap::{ChainStats, ChainedHashMap, LOAD_FACTOR};
use plotters::prelude::*;
use rand::{Rng, distr::Alphanumeric};
use std::error::Error;

const MAX_KEYS: usize = 100_000;
// Record a snapshot every SAMPLE_EVERY distinct keys
const SAMPLE_EVERY: usize = 100;

const FONT_FAMILY: &str = "sans-serif";
const LINE_WIDTH: u32 = 2;
const TEXT_SIZE: u32 = 16;
const TITLE_SIZE: u32 = 35;

// Random alphanumeric key of 4 to 15 characters
fn random_key(rng: &mut impl Rng) -> String {
    let len = rng.random_range(4..16);
    rng.sample_iter(&Alphanumeric).take(len).map(char::from).collect()
}

fn plot_load_factor(samples: &[ChainStats], path: &str) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_x = samples.last().map_or(1, |s| s.len);

    let mut chart = ChartBuilder::on(&root)
        .caption("Load Factor While Inserting", (FONT_FAMILY, TITLE_SIZE))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..max_x, 0.0..1.0)?;

    chart
        .configure_mesh()
        .x_desc("Number of Keys Inserted")
        .y_desc("Load Factor (entries / buckets)")
        .axis_desc_style((FONT_FAMILY, TEXT_SIZE))
        .draw()?;

    let threshold_style = ShapeStyle::from(&RED.mix(0.3)).stroke_width(1);
    chart
        .draw_series(LineSeries::new(
            vec![(0, LOAD_FACTOR), (max_x, LOAD_FACTOR)],
            threshold_style,
        ))?
        .label("Resize Threshold")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], threshold_style));

    let line_style = ShapeStyle::from(&RGBColor(50, 90, 220)).stroke_width(LINE_WIDTH);
    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.len, s.load_factor)),
            line_style,
        ))?
        .label("Load Factor")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()?;

    root.present()?;
    Ok(())
}

fn plot_chain_lengths(samples: &[ChainStats], path: &str) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_x = samples.last().map_or(1, |s| s.len);
    let max_y = samples.iter().map(|s| s.longest_chain).max().unwrap_or(1) as f64 * 1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("Chain Lengths While Inserting", (FONT_FAMILY, TITLE_SIZE))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..max_x, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Number of Keys Inserted")
        .y_desc("Chain Length (entries)")
        .axis_desc_style((FONT_FAMILY, TEXT_SIZE))
        .draw()?;

    let longest_style = ShapeStyle::from(&RGBColor(220, 50, 50)).stroke_width(LINE_WIDTH);
    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.len, s.longest_chain as f64)),
            longest_style,
        ))?
        .label("Longest Chain")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], longest_style));

    let average_style = ShapeStyle::from(&RGBColor(50, 180, 50)).stroke_width(LINE_WIDTH);
    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.len, s.average_chain_len())),
            average_style,
        ))?
        .label("Mean Chain (occupied buckets)")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], average_style));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = rand::rng();
    let mut map = ChainedHashMap::new();
    let mut samples = Vec::with_capacity(MAX_KEYS / SAMPLE_EVERY);
    let mut capacity = map.capacity();

    println!("Inserting {MAX_KEYS} random keys, starting with {capacity} buckets");

    while map.len() < MAX_KEYS {
        let before = map.len();
        map.set(random_key(&mut rng), before);

        // duplicate random key, nothing new to record
        if map.len() == before {
            continue;
        }

        if map.capacity() != capacity {
            let stats = map.chain_stats();
            println!(
                "  resized {} -> {} buckets at {} keys: longest chain = {}, mean chain = {:.2}",
                capacity,
                stats.capacity,
                stats.len,
                stats.longest_chain,
                stats.average_chain_len()
            );
            capacity = stats.capacity;
        }

        if map.len() % SAMPLE_EVERY == 0 {
            samples.push(map.chain_stats());
        }
    }

    let stats = map.chain_stats();
    println!(
        "Final: {} keys in {} buckets ({} occupied), load factor = {:.3}, longest chain = {}",
        stats.len, stats.capacity, stats.occupied_buckets, stats.load_factor, stats.longest_chain
    );

    plot_load_factor(&samples, "load_factor.png")?;
    plot_chain_lengths(&samples, "longest_chain.png")?;

    println!("Generated plot images: load_factor.png, longest_chain.png");

    Ok(())
}
