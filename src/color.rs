/// Color utilities: packed ARGB helpers, the two stock palettes and the
/// hash-keyed `ColorGenerator`.
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::{LazyLock, Mutex, PoisonError};

use chrono::Local;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// A color packed as `0xAARRGGBB`.
pub type Argb = u32;

pub const BLACK: Argb = 0xFF00_0000;
pub const DKGRAY: Argb = 0xFF44_4444;
pub const GRAY: Argb = 0xFF88_8888;
pub const WHITE: Argb = 0xFFFF_FFFF;

/// Border shade, applied per channel as `c * 9 / 10`.
const SHADE_NUM: u32 = 9;
const SHADE_DEN: u32 = 10;

pub const DEFAULT_PALETTE: &[Argb] = &[
    0xfff16364, 0xfff58559, 0xfff9a43e, 0xffe4c62e, 0xff67bf74, 0xff59a2be, 0xff2093cd,
    0xffad62a7, 0xff805781,
];

pub const MATERIAL_PALETTE: &[Argb] = &[
    0xffe57373, 0xfff06292, 0xffba68c8, 0xff9575cd, 0xff7986cb, 0xff64b5f6, 0xff4fc3f7,
    0xff4dd0e1, 0xff4db6ac, 0xff81c784, 0xffaed581, 0xffff8a65, 0xffd4e157, 0xffffd54f,
    0xffffb74d, 0xffa1887f, 0xff90a4ae,
];

pub static DEFAULT: LazyLock<ColorGenerator> =
    LazyLock::new(|| ColorGenerator::from_static(DEFAULT_PALETTE));

pub static MATERIAL: LazyLock<ColorGenerator> =
    LazyLock::new(|| ColorGenerator::from_static(MATERIAL_PALETTE));

pub const fn alpha(color: Argb) -> u8 {
    (color >> 24) as u8
}

pub const fn red(color: Argb) -> u8 {
    (color >> 16) as u8
}

pub const fn green(color: Argb) -> u8 {
    (color >> 8) as u8
}

pub const fn blue(color: Argb) -> u8 {
    color as u8
}

pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Argb {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Opaque color from its channels.
pub const fn rgb(r: u8, g: u8, b: u8) -> Argb {
    argb(0xFF, r, g, b)
}

pub const fn with_alpha(color: Argb, a: u8) -> Argb {
    (color & 0x00FF_FFFF) | (a as u32) << 24
}

/// Border color derived from a background color. The result is always opaque.
pub fn darker_shade(color: Argb) -> Argb {
    let shade = |c: u8| (u32::from(c) * SHADE_NUM / SHADE_DEN) as u8;
    rgb(shade(red(color)), shade(green(color)), shade(blue(color)))
}

/// Format as `#RRGGBB`, dropping alpha.
pub fn to_hex(color: Argb) -> String {
    format!("#{:02X}{:02X}{:02X}", red(color), green(color), blue(color))
}

/// Parse `#RRGGBB` (opaque) or `#AARRGGBB`.
pub fn parse_hex(value: &str) -> Result<Argb> {
    let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidColor(value.to_string()));
    }
    let parsed = u32::from_str_radix(hex, 16).map_err(|_| Error::InvalidColor(value.to_string()));
    match hex.len() {
        6 => Ok(0xFF00_0000 | parsed?),
        8 => parsed,
        _ => Err(Error::InvalidColor(value.to_string())),
    }
}

/// Which of the two stock generators to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteKind {
    #[default]
    Default,
    Material,
}

impl PaletteKind {
    pub fn generator(self) -> &'static ColorGenerator {
        match self {
            PaletteKind::Default => &DEFAULT,
            PaletteKind::Material => &MATERIAL,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            PaletteKind::Default => PaletteKind::Material,
            PaletteKind::Material => PaletteKind::Default,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteKind::Default => "default",
            PaletteKind::Material => "material",
        }
    }
}

/// Picks palette colors either at random or keyed by a value's hash.
///
/// Keyed lookups are pure. The random source sits behind a mutex only so the
/// process-wide generators can be shared; callers that need a reproducible
/// sequence should build their own generator with [`ColorGenerator::with_seed`].
pub struct ColorGenerator {
    colors: Vec<Argb>,
    rng: Mutex<StdRng>,
}

impl std::fmt::Debug for ColorGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorGenerator").field("colors", &self.colors).finish_non_exhaustive()
    }
}

impl ColorGenerator {
    /// Build a generator seeded from the wall clock.
    pub fn create(colors: impl Into<Vec<Argb>>) -> Result<Self> {
        Self::with_seed(colors, Local::now().timestamp_millis() as u64)
    }

    pub fn with_seed(colors: impl Into<Vec<Argb>>, seed: u64) -> Result<Self> {
        let colors = colors.into();
        if colors.is_empty() {
            return Err(Error::EmptyPalette);
        }
        debug!(size = colors.len(), seed, "created color generator");
        Ok(Self {
            colors,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        })
    }

    fn from_static(colors: &'static [Argb]) -> Self {
        Self {
            colors: colors.to_vec(),
            rng: Mutex::new(StdRng::seed_from_u64(Local::now().timestamp_millis() as u64)),
        }
    }

    pub fn colors(&self) -> &[Argb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get_random_color(&self) -> Argb {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        self.colors[rng.random_range(0..self.colors.len())]
    }

    pub fn get_color<K: Hash + ?Sized>(&self, key: &K) -> Argb {
        self.colors[self.index_of(key)]
    }

    /// Palette index a key maps to.
    pub fn index_of<K: Hash + ?Sized>(&self, key: &K) -> usize {
        index_for_hash(key_hash(key), self.colors.len())
    }
}

/// Signed 32-bit hash of a key, stable for the lifetime of the process.
pub fn key_hash<K: Hash + ?Sized>(key: &K) -> i32 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    let h = hasher.finish();
    (h ^ (h >> 32)) as u32 as i32
}

/// `abs(hash) mod len`. `i32::MIN` has no positive counterpart and maps to 0.
pub fn index_for_hash(hash: i32, len: usize) -> usize {
    hash.checked_abs().unwrap_or(0) as usize % len
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn empty_palette_is_rejected() {
        assert_eq!(ColorGenerator::create(Vec::<Argb>::new()).unwrap_err(), Error::EmptyPalette);
    }

    #[test]
    fn stock_palettes_have_expected_sizes() {
        assert_eq!(DEFAULT.len(), 9);
        assert_eq!(MATERIAL.len(), 17);
        assert_eq!(DEFAULT.colors()[0], 0xfff16364);
        assert_eq!(MATERIAL.colors()[16], 0xff90a4ae);
    }

    #[test]
    fn equal_keys_map_to_equal_colors() {
        let generator = ColorGenerator::create(MATERIAL_PALETTE).unwrap();
        for key in ["Alice", "Bob", "", "日本"] {
            assert_eq!(generator.get_color(key), generator.get_color(&key.to_string()));
            assert_eq!(generator.get_color(key), MATERIAL.get_color(key));
        }
        assert_eq!(generator.get_color(&42_u64), generator.get_color(&42_u64));
    }

    #[test]
    fn every_result_is_a_palette_member() {
        let palette: [Argb; 3] = [0xff112233, 0xff445566, 0xff778899];
        let generator = ColorGenerator::with_seed(palette, 7).unwrap();
        for i in 0..200 {
            assert!(palette.contains(&generator.get_color(&i)));
            assert!(palette.contains(&generator.get_random_color()));
        }
    }

    #[test]
    fn random_color_covers_more_than_one_entry() {
        let generator = ColorGenerator::with_seed(DEFAULT_PALETTE, 1234).unwrap();
        let seen: HashSet<Argb> = (0..1000).map(|_| generator.get_random_color()).collect();
        assert!(seen.len() > 1);
    }

    #[test]
    fn seeded_generators_repeat_their_sequence() {
        let a = ColorGenerator::with_seed(MATERIAL_PALETTE, 99).unwrap();
        let b = ColorGenerator::with_seed(MATERIAL_PALETTE, 99).unwrap();
        let left: Vec<_> = (0..20).map(|_| a.get_random_color()).collect();
        let right: Vec<_> = (0..20).map(|_| b.get_random_color()).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn min_hash_maps_to_first_entry() {
        assert_eq!(index_for_hash(i32::MIN, 9), 0);
        assert_eq!(index_for_hash(-10, 9), 1);
        assert_eq!(index_for_hash(10, 9), 1);
        assert_eq!(index_for_hash(i32::MAX, 17), (i32::MAX as usize) % 17);
    }

    #[test]
    fn single_color_palette_always_returns_it() {
        let generator = ColorGenerator::create(vec![0xff010203_u32]).unwrap();
        assert_eq!(generator.get_color("anything"), 0xff010203);
        assert_eq!(generator.get_random_color(), 0xff010203);
    }

    #[test]
    fn darker_shade_truncates_each_channel() {
        assert_eq!(darker_shade(rgb(100, 200, 255)), rgb(90, 180, 229));
        assert_eq!(darker_shade(rgb(1, 9, 11)), rgb(0, 8, 9));
        assert_eq!(darker_shade(0x80f16364), darker_shade(0xfff16364));
        assert_eq!(darker_shade(GRAY), darker_shade(GRAY));
    }

    #[test]
    fn hex_round_trip_and_rejects_garbage() {
        assert_eq!(parse_hex("#F58559").unwrap(), 0xfff58559);
        assert_eq!(parse_hex("80112233").unwrap(), 0x80112233);
        assert_eq!(to_hex(0xfff58559), "#F58559");
        assert!(parse_hex("#12345").is_err());
        assert!(parse_hex("#GG0000").is_err());
        assert!(parse_hex("#+12345").is_err());
    }

    #[test]
    fn palette_kind_toggles() {
        assert_eq!(PaletteKind::Default.toggled(), PaletteKind::Material);
        assert_eq!(PaletteKind::Material.generator().len(), 17);
    }
}
