//! Demonstration of the terrain displacement stage

use rust_icosphere_planet::*;

fn main() -> Result<()> {
    println!("Terrain Displacement Demo\n");

    let sphere = build_sphere(3)?;
    println!(
        "Base sphere: {} vertices, {} triangles",
        sphere.vertex_count(),
        sphere.triangle_count()
    );

    let presets = [
        ("Flat", TerrainOptions::flat()),
        (
            "Gentle",
            TerrainOptions {
                height_scale: 0.05,
                noise_scale: 1.0,
                noise_strength: 1.0,
                noise_offset: 0.0,
            },
        ),
        (
            "Rugged",
            TerrainOptions {
                height_scale: 0.3,
                noise_scale: 4.0,
                noise_strength: 1.0,
                noise_offset: 7.5,
            },
        ),
        (
            "Carved",
            TerrainOptions {
                height_scale: -0.1,
                noise_scale: 2.0,
                noise_strength: 1.0,
                noise_offset: 0.0,
            },
        ),
    ];

    println!("{:-<60}", "");
    for (name, options) in presets {
        let planet = apply_terrain(&sphere, &options);
        let heights: Vec<f32> = planet.vertices.iter().map(|v| v.length() - 1.0).collect();
        let min = heights.iter().copied().fold(f32::INFINITY, f32::min);
        let max = heights.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let mean = heights.iter().sum::<f32>() / heights.len() as f32;
        println!(
            "{:8} : height min {:+.4}  max {:+.4}  mean {:+.4}",
            name, min, max, mean
        );
    }

    println!("{:-<60}", "");
    println!("Sampling with a noise crate generator:");
    let sampler = NoiseFnSampler::new(noise::Fbm::<noise::Perlin>::new(7));
    let options = TerrainOptions {
        height_scale: 0.2,
        noise_scale: 2.0,
        noise_strength: 1.0,
        noise_offset: 0.0,
    };
    let planet = generate_with_sampler(3, &options, &sampler)?;
    let normals = vertex_normals(&planet);
    println!("  {} vertices, {} normals", planet.vertex_count(), normals.len());

    Ok(())
}
