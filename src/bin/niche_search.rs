use niching_pso::algorithms::problem::{Himmelblau, OptimizationProblem};
use niching_pso::{ControlParameter, NichingOptimizer, NichingParameters, Particle, SubSwarm};

use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use serde_json::json;
use std::error::Error;
use std::time::Instant;

/// Seed one sub-swarm as a tight cluster around a random point of the domain.
/// Niche detection proper happens upstream of the library; the demo just
/// plants clusters and lets the merge/scatter controller sort them out.
fn seed_sub_swarm(problem: &Himmelblau, size: usize, jitter: f64) -> SubSwarm {
    let mut rng = rand::rng();
    let center: Vec<f64> = problem
        .domain()
        .bounds
        .iter()
        .map(|b| rng.random_range(b.lower..b.upper))
        .collect();

    let particles = (0..size)
        .map(|_| {
            let mut particle = Particle::new(problem.domain(), 1.49618);
            particle.position = center
                .iter()
                .map(|c| c + rng.random_range(-jitter..jitter))
                .collect();
            particle.pbest_position = particle.position.clone();
            particle
        })
        .collect();

    SubSwarm::new(particles)
}

fn export_history(history: &[(usize, usize, usize, f64)], filename: &str) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(filename)?;
    writer.write_record(["cycle", "sub_swarms", "main_swarm", "best_fitness"])?;
    for (cycle, sub_swarms, main_swarm, best_fitness) in history {
        writer.write_record([
            cycle.to_string(),
            sub_swarms.to_string(),
            main_swarm.to_string(),
            best_fitness.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();

    let problem = Himmelblau::new();
    let parameters = NichingParameters {
        main_swarm_size: 30,
        max_cycles: 300,
        ..NichingParameters::default()
    };

    let sub_swarms: Vec<SubSwarm> = (0..12)
        .map(|_| seed_sub_swarm(&problem, 8, 0.05))
        .collect();

    println!("🚀 Starting niching PSO on Himmelblau's function...");
    println!(
        "Sub-swarms: {}, main swarm: {}, cycles: {}",
        sub_swarms.len(),
        parameters.main_swarm_size,
        parameters.max_cycles
    );

    let max_cycles = parameters.max_cycles;
    let mut optimizer = NichingOptimizer::new(problem, parameters, sub_swarms);
    optimizer.set_inertia(ControlParameter::linear_decreasing(0.9, 0.4, max_cycles));

    let pb = ProgressBar::new(max_cycles as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} cycles | {msg}")
            .unwrap(),
    );

    let start_time = Instant::now();
    let mut history = Vec::with_capacity(max_cycles);
    let mut best_fitness = f64::INFINITY;

    for cycle in 0..max_cycles {
        if let Err(err) = optimizer.step() {
            pb.abandon_with_message(format!("aborted: {err}"));
            eprintln!("Merge/scatter pass failed: {err}");
            std::process::exit(1);
        }

        for swarm in optimizer.sub_swarms() {
            if let Some(best) = swarm.best() {
                if best.pbest_fitness < best_fitness {
                    best_fitness = best.pbest_fitness;
                }
            }
        }

        history.push((
            cycle,
            optimizer.sub_swarms().len(),
            optimizer.main_swarm().len(),
            best_fitness,
        ));
        pb.set_message(format!(
            "{} niches, best {:.4}",
            optimizer.sub_swarms().len(),
            best_fitness
        ));
        pb.inc(1);
    }

    pb.finish_with_message("✅ done");

    let elapsed = start_time.elapsed();
    println!("🕒 Total time: {:.2} s", elapsed.as_secs_f64());

    let niches: Vec<_> = optimizer
        .sub_swarms()
        .iter()
        .filter_map(|swarm| swarm.best())
        .map(|best| {
            json!({
                "position": best.pbest_position,
                "fitness": best.pbest_fitness,
            })
        })
        .collect();

    let result = json!({
        "success": true,
        "niches_found": niches.len(),
        "niches": niches,
        "main_swarm_size": optimizer.main_swarm().len(),
    });
    println!("{}", serde_json::to_string_pretty(&result).unwrap());

    if let Err(err) = export_history(&history, "niche_history.csv") {
        eprintln!("Failed to export history: {err}");
    } else {
        println!("History written to niche_history.csv");
    }
}
