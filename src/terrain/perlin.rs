//! 2D Perlin noise implementation
//!
//! Classic gradient noise over the plane using Ken Perlin's permutation table
//! and quintic fade. Unseeded: the same input always gives the same output,
//! and every integer lattice point samples to exactly 0.5.

use super::HeightSampler;

// ============================================================================
// PERMUTATION TABLE
// ============================================================================
// Standard 256-element permutation table from Ken Perlin's reference implementation.
// Changing it changes every generated planet.
const PERM: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// Two-level permutation lookup for a lattice corner
///
/// Coordinates wrap every 256 cells, negative ones included.
#[inline]
fn hash(x: i32, y: i32) -> u8 {
    let a = PERM[(x & 255) as usize] as usize;
    PERM[(a + (y & 255) as usize) & 255]
}

/// Dot product of `(x, y)` with one of 8 lattice gradients
///
/// Gradients are the 4 diagonals `(±1, ±1)` and the 4 axes.
#[inline]
fn gradient(hash_value: u8, x: f32, y: f32) -> f32 {
    match hash_value & 7 {
        0 => x + y,
        1 => -x + y,
        2 => x - y,
        3 => -x - y,
        4 => x,
        5 => -x,
        6 => y,
        _ => -y,
    }
}

/// Quintic smoothstep: 6t⁵ - 15t⁴ + 10t³
///
/// C2-continuous, so neighbouring cells join without creases.
#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Raw 2D Perlin noise, range `[-1, 1]`
///
/// # Algorithm
/// 1. Find the unit square containing the point
/// 2. Hash its 4 corners into gradients
/// 3. Dot each gradient with the offset to the point
/// 4. Bilinearly blend with faded weights
pub fn perlin_2d(x: f32, y: f32) -> f32 {
    let xf0 = x.floor();
    let yf0 = y.floor();
    let x0 = xf0 as i32;
    let y0 = yf0 as i32;
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);

    let xf = x - xf0;
    let yf = y - yf0;

    let u = fade(xf);
    let v = fade(yf);

    let g00 = gradient(hash(x0, y0), xf, yf);
    let g10 = gradient(hash(x1, y0), xf - 1.0, yf);
    let g01 = gradient(hash(x0, y1), xf, yf - 1.0);
    let g11 = gradient(hash(x1, y1), xf - 1.0, yf - 1.0);

    lerp(lerp(g00, g10, u), lerp(g01, g11, u), v)
}

/// 2D Perlin noise remapped to `[0, 1]`
///
/// Non-finite input samples to 0.5.
pub fn sample_perlin_2d(x: f32, y: f32) -> f32 {
    if !x.is_finite() || !y.is_finite() {
        return 0.5;
    }
    ((perlin_2d(x, y) + 1.0) * 0.5).clamp(0.0, 1.0)
}

/// Default height sampler backed by [`sample_perlin_2d`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerlinHeightSampler;

impl HeightSampler for PerlinHeightSampler {
    #[inline]
    fn sample(&self, x: f32, y: f32) -> f32 {
        sample_perlin_2d(x, y)
    }
}
