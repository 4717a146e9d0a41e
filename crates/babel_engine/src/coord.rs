//! # Coordinates
//!
//! A page address in the library: hexagon, wall, shelf, volume, page.
//!
//! ## Token Format
//!
//! `"<hex>-<wall>-<shelf>-<vol>-<page>"`, e.g. `"0-1-1-1-1"`. A leading
//! `#` fragment marker is tolerated on decode. The same string doubles as
//! the generation seed, so two equal coordinates always name the same page.
//!
//! ## Invariants
//!
//! - Integer fields are clamped to their domains on every construction path
//! - `hex` is reduced to alphanumeric characters, so it can never contain
//!   the token delimiter
//! - Coordinates are immutable values; "changing" a field goes through a
//!   `with_*` constructor

use rand::Rng;

/// Walls per hexagon.
pub const WALL_MAX: u32 = 4;
/// Shelves per wall.
pub const SHELF_MAX: u32 = 5;
/// Volumes per shelf.
pub const VOL_MAX: u32 = 32;
/// Pages per volume.
pub const PAGE_MAX: u32 = 410;

/// Lower bound shared by all integer fields.
const FIELD_MIN: u32 = 1;

/// Token field delimiter.
const DELIMITER: char = '-';

/// Upper bound (exclusive) for randomized hexagon identifiers.
///
/// Matches a 15-digit decimal space rendered in base 36.
const RANDOM_HEX_SPACE: u64 = 1_000_000_000_000_000;

/// One page address.
///
/// Construction clamps integer fields into their domains and strips
/// non-alphanumeric characters from the hexagon id. Fields are read through
/// accessors; derived coordinates come from the `with_*` and navigation
/// constructors.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Hexagon identifier. Alphanumeric, unbounded range.
    hex: String,
    /// Wall within the hexagon, in [1, 4].
    wall: u32,
    /// Shelf on the wall, in [1, 5].
    shelf: u32,
    /// Volume on the shelf, in [1, 32].
    vol: u32,
    /// Page in the volume, in [1, 410].
    page: u32,
}

impl Coordinate {
    /// Creates a coordinate, clamping every integer field into its domain.
    #[must_use]
    pub fn new(hex: impl Into<String>, wall: u32, shelf: u32, vol: u32, page: u32) -> Self {
        let hex: String = hex.into();
        let hex: String = hex.chars().filter(char::is_ascii_alphanumeric).collect();
        Self {
            hex,
            wall: wall.clamp(FIELD_MIN, WALL_MAX),
            shelf: shelf.clamp(FIELD_MIN, SHELF_MAX),
            vol: vol.clamp(FIELD_MIN, VOL_MAX),
            page: page.clamp(FIELD_MIN, PAGE_MAX),
        }
    }

    /// The hexagon identifier.
    #[inline]
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// The wall number, in [1, 4].
    #[inline]
    #[must_use]
    pub const fn wall(&self) -> u32 {
        self.wall
    }

    /// The shelf number, in [1, 5].
    #[inline]
    #[must_use]
    pub const fn shelf(&self) -> u32 {
        self.shelf
    }

    /// The volume number, in [1, 32].
    #[inline]
    #[must_use]
    pub const fn vol(&self) -> u32 {
        self.vol
    }

    /// The page number, in [1, 410].
    #[inline]
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Copy with a different hexagon id.
    #[must_use]
    pub fn with_hex(&self, hex: impl Into<String>) -> Self {
        Self::new(hex, self.wall, self.shelf, self.vol, self.page)
    }

    /// Copy with a different wall (clamped).
    #[must_use]
    pub fn with_wall(&self, wall: u32) -> Self {
        Self::new(self.hex.clone(), wall, self.shelf, self.vol, self.page)
    }

    /// Copy with a different shelf (clamped).
    #[must_use]
    pub fn with_shelf(&self, shelf: u32) -> Self {
        Self::new(self.hex.clone(), self.wall, shelf, self.vol, self.page)
    }

    /// Copy with a different volume (clamped).
    #[must_use]
    pub fn with_vol(&self, vol: u32) -> Self {
        Self::new(self.hex.clone(), self.wall, self.shelf, vol, self.page)
    }

    /// Copy with a different page (clamped).
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self::new(self.hex.clone(), self.wall, self.shelf, self.vol, page)
    }

    /// The next page, carrying into the next volume past page 410.
    ///
    /// At page 410 of volume 32 the page wraps to 1 and the volume stays
    /// clamped at 32.
    #[must_use]
    pub fn next_page(&self) -> Self {
        if self.page >= PAGE_MAX {
            let mut next = self.with_page(FIELD_MIN);
            next.vol = (self.vol + 1).min(VOL_MAX);
            next
        } else {
            self.with_page(self.page + 1)
        }
    }

    /// The previous page, borrowing from the previous volume before page 1.
    #[must_use]
    pub fn prev_page(&self) -> Self {
        if self.page <= FIELD_MIN {
            let mut prev = self.with_page(PAGE_MAX);
            prev.vol = self.vol.saturating_sub(1).max(FIELD_MIN);
            prev
        } else {
            self.with_page(self.page - 1)
        }
    }

    /// A uniformly random in-domain coordinate.
    ///
    /// The hexagon id is drawn from a 15-digit decimal space and rendered
    /// in base 36. This is the one entropy-consuming operation around the
    /// engine; generation itself never touches `rng`.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(
            to_base36(rng.gen_range(0..RANDOM_HEX_SPACE)),
            rng.gen_range(FIELD_MIN..=WALL_MAX),
            rng.gen_range(FIELD_MIN..=SHELF_MAX),
            rng.gen_range(FIELD_MIN..=VOL_MAX),
            rng.gen_range(FIELD_MIN..=PAGE_MAX),
        )
    }

    /// The generation seed string: the five fields joined by `-`, hex first.
    #[must_use]
    pub fn seed(&self) -> String {
        format!(
            "{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
            self.hex, self.wall, self.shelf, self.vol, self.page
        )
    }

    /// Serializes this coordinate into its share token.
    #[must_use]
    pub fn encode(&self) -> String {
        self.seed()
    }

    /// Parses a share token back into a coordinate.
    ///
    /// Strips one leading `#` fragment marker if present. Returns `None`
    /// unless the token splits into exactly five parts whose last four all
    /// parse as integers; decoded fields are clamped to their domains.
    /// Callers fall back to a default coordinate on `None`.
    #[must_use]
    pub fn decode(token: &str) -> Option<Self> {
        let token = token.strip_prefix('#').unwrap_or(token);
        let parts: Vec<&str> = token.split(DELIMITER).collect();
        let [hex, wall, shelf, vol, page] = parts.as_slice() else {
            return None;
        };
        Some(Self::new(
            *hex,
            wall.parse().ok()?,
            shelf.parse().ok()?,
            vol.parse().ok()?,
            page.parse().ok()?,
        ))
    }
}

impl Default for Coordinate {
    /// The library entrance: `0-1-1-1-1`.
    fn default() -> Self {
        Self::new("0", 1, 1, 1, 1)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Renders a number in lowercase base 36.
fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
