//! Demonstration of Planet regeneration and usage

use rust_icosphere_planet::*;

fn main() -> Result<()> {
    println!("Generating planet...");

    let config = PlanetConfigBuilder::new()
        .radius(20.0)
        .resolution(4)?
        .height_scale(0.2)
        .noise_scale(2.0)
        .noise_strength(1.0)
        .noise_offset(0.0)
        .build()?;

    let mut planet = Planet::new(config)?;
    let mesh = planet.mesh_data();
    println!("Generated {} vertices, {} triangles", mesh.vertex_count(), mesh.triangle_count());
    println!("Transform scale: {:?}", planet.scale());

    // Simulate a few editor ticks with parameter edits in between
    for tick in 0..4 {
        match tick {
            1 => planet.set_resolution(5)?,
            2 => planet.set_terrain(TerrainOptions {
                noise_offset: 42.0,
                ..planet.config().terrain
            }),
            _ => {}
        }
        let rebuilt = planet.update()?;
        println!(
            "Tick {}: rebuilt = {}, triangles = {}",
            tick,
            rebuilt,
            planet.mesh().triangle_count()
        );
    }

    // Elevation range
    let (min, max) = planet
        .mesh()
        .vertices
        .iter()
        .map(|v| v.length())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), h| (lo.min(h), hi.max(h)));
    println!("\nSurface distance from center: {:.4} .. {:.4} (unit radius)", min, max);

    #[cfg(feature = "spatial-index")]
    {
        let pos = Vec3::new(planet.config().radius, 0.0, 0.0);
        let vertex = planet.find_vertex_at(pos);
        println!("Position {:?} is nearest to vertex {}", pos, vertex);
    }

    // Invalid input is rejected without touching the planet
    if let Err(err) = planet.set_resolution(-1) {
        println!("\nRejected edit: {}", err);
    }

    Ok(())
}
