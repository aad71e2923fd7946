use crate::common::metadata::{ECLevel, Version};
use crate::common::MaskPattern;

/// Finished symbol: a square of dark (`true`) and light (`false`) modules.
///
/// Only produced by a successful build, so every module has a definite color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleGrid {
    modules: Vec<bool>,
    w: usize,
    ver: Version,
    ecl: ECLevel,
    mask: MaskPattern,
}

impl ModuleGrid {
    pub(crate) fn new(modules: Vec<bool>, ver: Version, ecl: ECLevel, mask: MaskPattern) -> Self {
        let w = ver.width();
        debug_assert!(
            modules.len() == w * w,
            "Module count doesn't match version: Count {}, Expected {}",
            modules.len(),
            w * w
        );
        Self { modules, w, ver, ecl, mask }
    }

    pub fn side_length(&self) -> usize {
        self.w
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the symbol.
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        assert!(row < self.w && col < self.w, "({row}, {col}) is outside a {0}x{0} grid", self.w);
        self.modules[row * self.w + col]
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn mask(&self) -> MaskPattern {
        self.mask
    }

    pub fn count_dark_modules(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.modules.chunks_exact(self.w)
    }
}
