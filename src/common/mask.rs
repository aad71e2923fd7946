use std::fmt::Debug;
use std::ops::Deref;

use tracing::trace;

use super::error::{QRError, QRResult};
use super::metadata::Color;
use crate::builder::QR;

// Mask pattern
//------------------------------------------------------------------------------

/// One of the eight data masks. Always in `0..8` once constructed.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct MaskPattern(u8);

impl MaskPattern {
    pub fn new(pattern: u8) -> QRResult<Self> {
        if pattern >= 8 {
            return Err(QRError::InvalidMaskPattern(pattern));
        }
        Ok(Self(pattern))
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).map(Self)
    }
}

impl TryFrom<u8> for MaskPattern {
    type Error = QRError;
    fn try_from(pattern: u8) -> Result<Self, Self::Error> {
        Self::new(pattern)
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// Functions take (row, column)
mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i16, _: i16) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i16, c: i16) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i16, c: i16) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i16, c: i16) -> bool {
        ((r >> 1) + (c / 3)) & 1 == 0
    }

    pub fn fields(r: i16, c: i16) -> bool {
        let p = r as i32 * c as i32;
        (p & 1) + (p % 3) == 0
    }

    pub fn diamonds(r: i16, c: i16) -> bool {
        let p = r as i32 * c as i32;
        ((p & 1) + (p % 3)) & 1 == 0
    }

    pub fn meadow(r: i16, c: i16) -> bool {
        let p = r as i32 * c as i32;
        ((((r + c) & 1) as i32) + (p % 3)) & 1 == 0
    }
}

impl MaskPattern {
    /// Returns true for the cells whose data bit gets flipped.
    pub fn mask_function(self) -> fn(i16, i16) -> bool {
        match self.0 {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::large_checkerboard,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            _ => mask_functions::meadow,
        }
    }
}


// Mask selection
//------------------------------------------------------------------------------

/// Picks the mask applied to the data region. `draw` renders a complete candidate
/// symbol for a given pattern.
pub trait MaskSelector: Debug + Send + Sync {
    fn select(&self, draw: &dyn Fn(MaskPattern) -> QR) -> MaskPattern;
}

// A fixed pattern always selects itself
impl MaskSelector for MaskPattern {
    fn select(&self, _draw: &dyn Fn(MaskPattern) -> QR) -> MaskPattern {
        *self
    }
}

/// Scores every pattern with the four penalty rules and keeps the lowest. Ties go
/// to the smaller pattern number.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PenaltyMaskSelector;

impl MaskSelector for PenaltyMaskSelector {
    fn select(&self, draw: &dyn Fn(MaskPattern) -> QR) -> MaskPattern {
        MaskPattern::all()
            .min_by_key(|&m| {
                let pen = compute_total_penalty(&draw(m));
                trace!(mask = *m, penalty = pen, "Scored mask candidate");
                pen
            })
            .unwrap_or_default()
    }
}

// Penalty
//------------------------------------------------------------------------------

pub fn compute_total_penalty(qr: &QR) -> u32 {
    let w = qr.width() as i16;
    let rows: Vec<Vec<Color>> = (0..w).map(|r| (0..w).map(|c| *qr.get(r, c)).collect()).collect();
    let cols: Vec<Vec<Color>> = (0..w).map(|c| (0..w).map(|r| *qr.get(r, c)).collect()).collect();

    let adj_pen: u32 = rows.iter().chain(cols.iter()).map(|l| compute_adjacent_penalty(l)).sum();
    let blk_pen = compute_block_penalty(&rows);
    let fp_pen: u32 =
        rows.iter().chain(cols.iter()).map(|l| compute_finder_pattern_penalty(l)).sum();
    let bal_pen = compute_balance_penalty(qr.count_dark_modules(), qr.width() * qr.width());

    adj_pen + blk_pen + fp_pen + bal_pen
}

// 3 for a run of five same colored modules, plus 1 per extra module
fn compute_adjacent_penalty(line: &[Color]) -> u32 {
    let mut pen = 0;
    let mut run = 0;
    let mut last = None;
    for &clr in line.iter() {
        if last == Some(clr) {
            run += 1;
        } else {
            pen += run_penalty(run);
            last = Some(clr);
            run = 1;
        }
    }
    pen + run_penalty(run)
}

fn run_penalty(run: u32) -> u32 {
    if run >= 5 {
        run - 2
    } else {
        0
    }
}

fn compute_block_penalty(rows: &[Vec<Color>]) -> u32 {
    rows.windows(2)
        .map(|pair| {
            let (top, bottom) = (&pair[0], &pair[1]);
            (0..top.len().saturating_sub(1))
                .filter(|&c| {
                    let clr = top[c];
                    clr == top[c + 1] && clr == bottom[c] && clr == bottom[c + 1]
                })
                .count() as u32
                * 3
        })
        .sum()
}

fn compute_finder_pattern_penalty(line: &[Color]) -> u32 {
    let w = line.len() as isize;
    let is_light = |i: isize| i < 0 || i >= w || line[i as usize] == Color::Light;

    let mut pen = 0;
    for (j, window) in line.windows(FINDER_LIKE_PATTERN.len()).enumerate() {
        if window != FINDER_LIKE_PATTERN {
            continue;
        }
        let j = j as isize;
        let light_before = (j - 4..j).all(is_light);
        let light_after = (j + 7..j + 11).all(is_light);
        if light_before || light_after {
            pen += 40;
        }
    }
    pen
}

// 10 per full 5% step away from an even dark/light balance
fn compute_balance_penalty(dark_cnt: usize, total: usize) -> u32 {
    let percent = dark_cnt * 100 / total;
    (percent.abs_diff(50) / 5 * 10) as u32
}


// Global constants
//------------------------------------------------------------------------------

static FINDER_LIKE_PATTERN: [Color; 7] = [
    Color::Dark,
    Color::Light,
    Color::Dark,
    Color::Dark,
    Color::Dark,
    Color::Light,
    Color::Dark,
];
