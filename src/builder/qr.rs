use std::ops::Deref;

use super::ModuleGrid;
use crate::common::format::{
    format_info, FORMAT_INFO_BIT_LEN, FORMAT_INFO_COORDS_QR_MAIN, FORMAT_INFO_COORDS_QR_SIDE,
};
use crate::common::metadata::{Color, ECLevel, Version};
use crate::common::{BitStream, EncRegionIter, MaskPattern, QRError, QRResult};

/// A cell of the working grid, tagged with the phase that set it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Func(Color),
    Format(Color),
    Data(Color),
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Empty => &Color::Light,
            Module::Func(c) => c,
            Module::Format(c) => c,
            Module::Data(c) => c,
        }
    }
}

/// Working grid of a symbol under construction. Row-major, `width * width` cells.
#[derive(Debug, Clone)]
pub struct QR {
    grid: Vec<Module>,
    w: usize,
    ver: Version,
    ecl: ECLevel,
    mask: Option<MaskPattern>,
}

// QR type for builder
//------------------------------------------------------------------------------

impl QR {
    pub fn new(ver: Version, ecl: ECLevel) -> Self {
        let w = ver.width();
        Self { grid: vec![Module::Empty; w * w], w, ver, ecl, mask: None }
    }

    /// Draws a complete symbol: function patterns, format info for `mask`, then the
    /// masked payload bits.
    pub fn draw(ver: Version, ecl: ECLevel, payload: &BitStream, mask: MaskPattern) -> Self {
        let mut qr = Self::new(ver, ecl);
        qr.draw_all_function_patterns();
        qr.draw_format_info(format_info(ecl, mask));
        qr.draw_payload(payload, mask);
        qr
    }

    pub fn grid(&self) -> &[Module] {
        &self.grid
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&m| matches!(**m, Color::Dark)).count()
    }

    /// Freezes the grid. Fails if any cell was never drawn.
    pub fn into_grid(self) -> QRResult<ModuleGrid> {
        let w = self.w;
        if let Some(i) = self.grid.iter().position(|m| matches!(m, Module::Empty)) {
            return Err(QRError::UnsetModule { row: i / w, col: i % w });
        }

        let modules = self.grid.iter().map(|m| **m == Color::Dark).collect();
        Ok(ModuleGrid::new(modules, self.ver, self.ecl, self.mask.unwrap_or_default()))
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w as i16;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match self.get(i, j) {
                    Module::Empty => '.',
                    Module::Func(Color::Dark) => 'f',
                    Module::Func(Color::Light) => 'F',
                    Module::Format(Color::Dark) => 'm',
                    Module::Format(Color::Light) => 'M',
                    Module::Data(Color::Dark) => 'd',
                    Module::Data(Color::Light) => 'D',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        debug_assert!(-w <= r && r < w, "row should be greater than or equal to w");
        debug_assert!(-w <= c && c < w, "column should be greater than or equal to w");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r * w + c) as _
    }

    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub fn get_mut(&mut self, r: i16, c: i16) -> &mut Module {
        let index = self.coord_to_index(r, c);
        &mut self.grid[index]
    }

    pub fn set(&mut self, r: i16, c: i16, module: Module) {
        *self.get_mut(r, c) = module;
    }

    fn set_if_empty(&mut self, r: i16, c: i16, module: Module) {
        let m = self.get_mut(r, c);
        if matches!(m, Module::Empty) {
            *m = module;
        }
    }
}


// Finder pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_finder_patterns(&mut self) {
        self.draw_finder_pattern_at(3, 3);
        self.draw_finder_pattern_at(3, -4);
        self.draw_finder_pattern_at(-4, 3);
    }

    // Ring 4 is the separator and falls outside the grid on the edge sides
    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        let (dr_top, dr_bottom) = if r > 0 { (-3, 4) } else { (-4, 3) };
        let (dc_left, dc_right) = if c > 0 { (-3, 4) } else { (-4, 3) };
        for i in dr_top..=dr_bottom {
            for j in dc_left..=dc_right {
                let module = match (i, j) {
                    (4 | -4, _) | (_, 4 | -4) => Module::Func(Color::Light),
                    (3 | -3, _) | (_, 3 | -3) => Module::Func(Color::Dark),
                    (2 | -2, _) | (_, 2 | -2) => Module::Func(Color::Light),
                    _ => Module::Func(Color::Dark),
                };
                self.set_if_empty(r + i, c + j, module);
            }
        }
    }
}


// Alignment pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_alignment_patterns(&mut self) {
        let poses = self.ver.alignment_pattern();
        for &r in poses {
            for &c in poses {
                self.draw_alignment_pattern_at(r, c)
            }
        }
    }

    // Centers already claimed by a finder pattern are skipped
    fn draw_alignment_pattern_at(&mut self, r: i16, c: i16) {
        if !matches!(self.get(r, c), Module::Empty) {
            return;
        }
        for i in -2..=2 {
            for j in -2..=2 {
                let module = match (i, j) {
                    (-2 | 2, _) | (_, -2 | 2) | (0, 0) => Module::Func(Color::Dark),
                    _ => Module::Func(Color::Light),
                };
                self.set_if_empty(r + i, c + j, module);
            }
        }
    }
}

#[cfg(test)]
mod alignment_pattern_tests {
    use crate::builder::QR;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_alignment_pattern_1() {
        let mut qr = QR::new(Version::new(1), ECLevel::L);
        qr.draw_finder_patterns();
        let before = qr.to_debug_str();
        qr.draw_alignment_patterns();
        assert_eq!(qr.to_debug_str(), before);
    }

    #[test]
    fn test_alignment_pattern_3() {
        let mut qr = QR::new(Version::new(3), ECLevel::L);
        qr.draw_finder_patterns();
        qr.draw_alignment_patterns();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffF.............Ffffffff\n\
             fFFFFFfF.............FfFFFFFf\n\
             fFfffFfF.............FfFfffFf\n\
             fFfffFfF.............FfFfffFf\n\
             fFfffFfF.............FfFfffFf\n\
             fFFFFFfF.............FfFFFFFf\n\
             fffffffF.............Ffffffff\n\
             FFFFFFFF.............FFFFFFFF\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             .............................\n\
             ....................fffff....\n\
             FFFFFFFF............fFFFf....\n\
             fffffffF............fFfFf....\n\
             fFFFFFfF............fFFFf....\n\
             fFfffFfF............fffff....\n\
             fFfffFfF.....................\n\
             fFfffFfF.....................\n\
             fFFFFFfF.....................\n\
             fffffffF.....................\n"
        );
    }

    #[test]
    fn test_alignment_pattern_7() {
        let mut qr = QR::new(Version::new(7), ECLevel::L);
        qr.draw_finder_patterns();
        qr.draw_alignment_patterns();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffF.............................Ffffffff\n\
             fFFFFFfF.............................FfFFFFFf\n\
             fFfffFfF.............................FfFfffFf\n\
             fFfffFfF.............................FfFfffFf\n\
             fFfffFfF............fffff............FfFfffFf\n\
             fFFFFFfF............fFFFf............FfFFFFFf\n\
             fffffffF............fFfFf............Ffffffff\n\
             FFFFFFFF............fFFFf............FFFFFFFF\n\
             ....................fffff....................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             ....fffff...........fffff...........fffff....\n\
             ....fFFFf...........fFFFf...........fFFFf....\n\
             ....fFfFf...........fFfFf...........fFfFf....\n\
             ....fFFFf...........fFFFf...........fFFFf....\n\
             ....fffff...........fffff...........fffff....\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             .............................................\n\
             ....................fffff...........fffff....\n\
             FFFFFFFF............fFFFf...........fFFFf....\n\
             fffffffF............fFfFf...........fFfFf....\n\
             fFFFFFfF............fFFFf...........fFFFf....\n\
             fFfffFfF............fffff...........fffff....\n\
             fFfffFfF.....................................\n\
             fFfffFfF.....................................\n\
             fFFFFFfF.....................................\n\
             fffffffF.....................................\n"
        );
    }
}

// Timing pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_timing_pattern(&mut self) {
        let last = self.w as i16 - 9;
        self.draw_line(6, 8, 6, last);
        self.draw_line(8, 6, last, 6);
    }

    fn draw_line(&mut self, r1: i16, c1: i16, r2: i16, c2: i16) {
        debug_assert!(r1 == r2 || c1 == c2, "Line is neither vertical nor horizontal");

        let module = |k: i16| Module::Func(Color::from(k & 1 == 0));
        if r1 == r2 {
            for j in c1..=c2 {
                self.set_if_empty(r1, j, module(j));
            }
        } else {
            for i in r1..=r2 {
                self.set_if_empty(i, c1, module(i));
            }
        }
    }
}


// All function patterns
//------------------------------------------------------------------------------

impl QR {
    pub fn draw_all_function_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_alignment_patterns();
        self.draw_timing_pattern();
    }
}


// Format info
//------------------------------------------------------------------------------

impl QR {
    fn draw_format_info(&mut self, format_info: u32) {
        for coords in [&FORMAT_INFO_COORDS_QR_MAIN, &FORMAT_INFO_COORDS_QR_SIDE] {
            self.draw_number(
                format_info,
                FORMAT_INFO_BIT_LEN,
                Module::Format(Color::Light),
                Module::Format(Color::Dark),
                coords,
            );
        }
        // Always dark
        self.set(-8, 8, Module::Format(Color::Dark));
    }

    fn draw_number(
        &mut self,
        number: u32,
        bit_len: usize,
        off_clr: Module,
        on_clr: Module,
        coords: &[(i16, i16)],
    ) {
        let mut mask = 1 << (bit_len - 1);
        for &(r, c) in coords {
            if number & mask == 0 {
                self.set(r, c, off_clr);
            } else {
                self.set(r, c, on_clr);
            }
            mask >>= 1;
        }
    }
}


// Encoding region
//------------------------------------------------------------------------------

impl QR {
    // Cells past the end of the payload are remainder bits and read as zero
    fn draw_payload(&mut self, payload: &BitStream, mask: MaskPattern) {
        self.mask = Some(mask);
        let mask_fn = mask.mask_function();
        let mut bits = payload.iter();
        for (r, c) in EncRegionIter::new(self.ver) {
            if !matches!(self.get(r, c), Module::Empty) {
                continue;
            }
            let bit = bits.next().unwrap_or(false);
            self.set(r, c, Module::Data(Color::from(bit ^ mask_fn(r, c))));
        }

        debug_assert!(bits.len() == 0, "Payload overflows encoding region: {} bits left", bits.len());
        debug_assert!(!self.grid.contains(&Module::Empty), "Empty module found in debug");
    }
}
