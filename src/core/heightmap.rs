//! Terrain-Höhen-Sampling: Vertrag und Heightmap-Implementierung.
//!
//! `HeightSampler` ist der schmale Vertrag, den die Punkt-Generierung
//! konsumiert (ein Aufruf pro generiertem Punkt, einer pro
//! Cursor-Update). `Heightmap` erkennt automatisch die Bit-Tiefe
//! (8-Bit oder 16-Bit) und normalisiert die Pixelwerte entsprechend;
//! die Map-Größe wird aus den Pixel-Dimensionen abgeleitet
//! (FS25-Konvention: pixels = map_size + 1).

use anyhow::{Context, Result};
use image::{DynamicImage, GenericImageView};
use std::path::Path;

/// Standard-Terrain-Höhenskala (FS25: normalized_pixel × Faktor = Y-Meter).
pub const TERRAIN_HEIGHT_SCALE: f32 = 255.0;

/// Deterministischer Boden-Höhen-Lookup.
pub trait HeightSampler {
    /// Terrainhöhe (Y) an der Bodenposition (x, z).
    fn sample_height(&self, x: f32, z: f32) -> f32;
}

/// Flaches Terrain mit konstanter Höhe — für Tests und Hosts ohne Heightmap.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatGround(pub f32);

impl HeightSampler for FlatGround {
    fn sample_height(&self, _x: f32, _z: f32) -> f32 {
        self.0
    }
}

/// Weltkoordinaten-Begrenzungen der Heightmap.
#[derive(Debug, Clone, Copy)]
pub struct WorldBounds {
    /// Minimale X-Koordinate (links)
    pub min_x: f32,
    /// Minimale Z-Koordinate (unten)
    pub min_z: f32,
    /// Maximale X-Koordinate (rechts)
    pub max_x: f32,
    /// Maximale Z-Koordinate (oben)
    pub max_z: f32,
}

impl WorldBounds {
    /// Erstellt Bounds aus Map-Größe (zentriert bei 0,0).
    pub fn from_map_size(size: f32) -> Self {
        let half = size / 2.0;
        Self {
            min_x: -half,
            min_z: -half,
            max_x: half,
            max_z: half,
        }
    }
}

/// Heightmap für Y-Koordinaten-Berechnung.
pub struct Heightmap {
    /// Normalisierte Grauwerte [0.0, 1.0], zeilenweise gespeichert
    pixels: Vec<f32>,
    width: u32,
    height: u32,
    world_bounds: WorldBounds,
    /// Skalierung normalized_pixel → Meter
    height_scale: f32,
    /// Erkannte Bit-Tiefe (8 oder 16)
    bit_depth: u8,
}

impl Heightmap {
    /// Lädt eine Heightmap und erkennt Bit-Tiefe und Map-Größe automatisch.
    ///
    /// Die Map-Größe wird aus den Pixel-Dimensionen abgeleitet:
    /// `map_size = max(width, height) - 1`
    /// (z.B. 4097×4097 Pixel → 4096m Map-Größe).
    pub fn load(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("Fehler beim Laden der Heightmap: {}", path.display()))?;

        let (width, height) = image.dimensions();
        let map_size = (width.max(height).saturating_sub(1)) as f32;
        let world_bounds = WorldBounds::from_map_size(map_size);

        Self::from_image(image, world_bounds, TERRAIN_HEIGHT_SCALE)
    }

    /// Lädt eine Heightmap mit expliziten World-Bounds und Höhenskala.
    pub fn load_with_bounds(path: &Path, world_bounds: WorldBounds, height_scale: f32) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("Fehler beim Laden der Heightmap: {}", path.display()))?;

        Self::from_image(image, world_bounds, height_scale)
    }

    /// Erstellt eine Heightmap aus einem geladenen Bild.
    ///
    /// Erkennt die Bit-Tiefe automatisch und konvertiert alle Pixel
    /// in normalisierte f32-Werte [0.0, 1.0].
    fn from_image(image: DynamicImage, world_bounds: WorldBounds, height_scale: f32) -> Result<Self> {
        let (width, height) = image.dimensions();

        let bit_depth = match image.color() {
            image::ColorType::L16
            | image::ColorType::La16
            | image::ColorType::Rgb16
            | image::ColorType::Rgba16 => 16u8,
            _ => 8u8,
        };

        let pixels: Vec<f32> = if bit_depth == 16 {
            let luma16 = image.into_luma16();
            luma16.pixels().map(|p| p[0] as f32 / 65535.0).collect()
        } else {
            let luma8 = image.into_luma8();
            luma8.pixels().map(|p| p[0] as f32 / 255.0).collect()
        };

        log::info!(
            "Heightmap geladen: {}x{} Pixel, {}-Bit, Map-Bereich: ({:.1}, {:.1}) bis ({:.1}, {:.1})",
            width,
            height,
            bit_depth,
            world_bounds.min_x,
            world_bounds.min_z,
            world_bounds.max_x,
            world_bounds.max_z
        );

        Ok(Self {
            pixels,
            width,
            height,
            world_bounds,
            height_scale,
            bit_depth,
        })
    }

    /// Erkannte Bit-Tiefe der Quelldatei (8 oder 16).
    pub fn bit_depth(&self) -> u8 {
        self.bit_depth
    }

    /// Grauwert eines Pixels (zeilenweise Speicherung).
    fn get_grayscale(&self, x: u32, z: u32) -> f32 {
        let index = (z * self.width + x) as usize;
        self.pixels.get(index).copied().unwrap_or(0.0)
    }

    /// Bikubische Interpolation für glatte Höhenwerte.
    /// Nutzt ein 4x4-Grid von Pixeln um den Sample-Punkt.
    fn sample_bicubic(&self, px: f32, pz: f32) -> f32 {
        let x = px.floor() as i32;
        let z = pz.floor() as i32;
        let fx = px - px.floor();
        let fz = pz - pz.floor();

        let mut values = [[0.0f32; 4]; 4];
        for (j, row) in values.iter_mut().enumerate() {
            for (i, cell) in row.iter_mut().enumerate() {
                let sample_x = (x + i as i32 - 1).clamp(0, self.width as i32 - 1) as u32;
                let sample_z = (z + j as i32 - 1).clamp(0, self.height as i32 - 1) as u32;
                *cell = self.get_grayscale(sample_x, sample_z);
            }
        }

        let mut col_values = [0.0f32; 4];
        for (j, col) in col_values.iter_mut().enumerate() {
            *col =
                Self::cubic_interpolate(values[j][0], values[j][1], values[j][2], values[j][3], fx);
        }

        Self::cubic_interpolate(
            col_values[0],
            col_values[1],
            col_values[2],
            col_values[3],
            fz,
        )
    }

    /// Kubische Interpolation zwischen 4 Werten (Catmull-Rom).
    fn cubic_interpolate(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
        let a = 2.0 * p1;
        let b = p2 - p0;
        let c = 2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3;
        let d = 3.0 * (p1 - p2) + p3 - p0;
        0.5 * (a + t * (b + t * (c + t * d)))
    }
}

impl HeightSampler for Heightmap {
    /// Berechnet die Y-Koordinate für eine gegebene X/Z-Position.
    ///
    /// Formel: `Y_meter = normalized_pixel × height_scale`.
    /// Positionen außerhalb der Bounds werden auf den Rand geclampt.
    fn sample_height(&self, x: f32, z: f32) -> f32 {
        let nx =
            (x - self.world_bounds.min_x) / (self.world_bounds.max_x - self.world_bounds.min_x);
        let nz =
            (z - self.world_bounds.min_z) / (self.world_bounds.max_z - self.world_bounds.min_z);

        let nx = nx.clamp(0.0, 1.0);
        let nz = nz.clamp(0.0, 1.0);

        let px = nx * (self.width - 1) as f32;
        let pz = nz * (self.height - 1) as f32;

        self.sample_bicubic(px, pz) * self.height_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_heightmap(value: f32, size: u32) -> Heightmap {
        Heightmap {
            pixels: vec![value; (size * size) as usize],
            width: size,
            height: size,
            world_bounds: WorldBounds::from_map_size((size - 1) as f32),
            height_scale: TERRAIN_HEIGHT_SCALE,
            bit_depth: 8,
        }
    }

    #[test]
    fn test_flat_ground_constant() {
        let ground = FlatGround(12.5);
        assert_eq!(ground.sample_height(0.0, 0.0), 12.5);
        assert_eq!(ground.sample_height(-900.0, 431.0), 12.5);
    }

    #[test]
    fn test_uniform_heightmap_sample() {
        let map = uniform_heightmap(0.5, 17);
        let expected = 0.5 * TERRAIN_HEIGHT_SCALE;
        assert!((map.sample_height(0.0, 0.0) - expected).abs() < 1e-3);
        assert!((map.sample_height(3.7, -5.2) - expected).abs() < 1e-3);
    }

    #[test]
    fn test_sample_clamps_outside_bounds() {
        let map = uniform_heightmap(0.25, 9);
        let inside = map.sample_height(0.0, 0.0);
        let outside = map.sample_height(10_000.0, -10_000.0);
        assert!((inside - outside).abs() < 1e-3);
    }

    #[test]
    fn test_world_bounds_centered() {
        let bounds = WorldBounds::from_map_size(4096.0);
        assert_eq!(bounds.min_x, -2048.0);
        assert_eq!(bounds.max_z, 2048.0);
    }
}
