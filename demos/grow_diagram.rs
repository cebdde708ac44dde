//! Example: Grow a Voronoi diagram frame by frame
//!
//! Runs one of the sample scenarios (2, 3 or 4 regions, or a random scatter)
//! with one simulation step per "frame", the way an interactive host would.
//!
//! ```text
//! cargo run --example grow_diagram -- 3
//! cargo run --example grow_diagram -- random 12
//! ```

use growvoronoi::*;

const RED: Rgba = [1.0, 0.0, 0.0, 1.0];
const BLUE: Rgba = [0.0, 0.0, 1.0, 1.0];
const GREEN: Rgba = [0.0, 1.0, 0.0, 1.0];
const CYAN: Rgba = [0.0, 1.0, 1.0, 1.0];

fn sample(config: &DiagramConfig, name: &str, count: usize) -> Result<Vec<Seed<Rgba>>> {
    Ok(match name {
        "2" => vec![config.seed(1.5, 1.5, RED), config.seed(-1.5, -1.5, BLUE)],
        "3" => vec![
            config.seed(0.5, 0.5, RED),
            config.seed(-1.5, -1.5, BLUE),
            config.seed(-0.5, -1.5, GREEN),
        ],
        "4" => vec![
            config.seed(0.5, 0.5, RED),
            config.seed(2.0, 0.0, CYAN),
            config.seed(-1.5, -1.5, BLUE),
            config.seed(-0.5, -1.5, GREEN),
        ],
        _ => scatter_seeds(config, count, 42, |i| {
            let palette = [RED, BLUE, GREEN, CYAN];
            palette[i % palette.len()]
        })?,
    })
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "2".to_string());
    let count = args.next().and_then(|c| c.parse().ok()).unwrap_or(8);

    println!("Voronoi Growth Example");
    println!("======================\n");

    let config = DiagramConfig::default();
    println!("Configuration:");
    println!("  Dimensions: {} x {}", config.width, config.height);
    println!("  Step distance: {}", config.step_distance);
    println!("  Segments per region: {}", config.segment_count);
    println!("  Step budget: {}", config.step_budget());
    println!();

    let seeds = sample(&config, &name, count)?;
    let mut engine = GrowthEngine::initialize(&config, seeds)?;
    println!("Growing {} regions (sample '{}')...", engine.region_count(), name);

    // One step per frame; a renderer would rebuild its mesh here
    let mut collisions = 0;
    loop {
        let report = engine.step();
        collisions += report.frozen_by_collision;
        let mesh = generate_mesh(&engine, &PayloadColorMapper);

        if report.step % 100 == 0 || report.converged {
            println!(
                "  frame {:4}: {:5.1}% frozen, {} triangles",
                report.step,
                engine.progress() * 100.0,
                mesh.triangle_count()
            );
        }
        if report.converged || report.step >= config.step_budget() {
            break;
        }
    }
    println!();

    println!("Regions:");
    for region in engine.regions() {
        println!(
            "  {} at ({:.2}, {:.2}): area {:.2}, color {:?}",
            region.id(),
            region.position().x,
            region.position().y,
            region.area(),
            region.payload()
        );
    }
    println!("\nVertices stopped by neighbours: {}", collisions);

    let total: f32 = engine.regions().iter().map(Region::area).sum();
    println!(
        "Covered {:.2} of {:.2} units² ({:.1}%)",
        total,
        config.width * config.height,
        100.0 * total / (config.width * config.height)
    );

    Ok(())
}
