//! # qrcraft
//!
//! A Rust library for encoding byte payloads into QR symbols, with Reed-Solomon error
//! correction and BCH protected format information. The output is a plain grid of dark
//! and light modules, ready for any renderer.
//!
//! ## Features
//!
//! - **Byte mode encoding**: Mode indicator, length field, terminator and pad codewords
//! - **Reed-Solomon Error Correction**: Single block encoding over GF(256) for all four levels (L, M, Q, H)
//! - **Function patterns**: Finder, separator, alignment and timing patterns plus format information
//! - **Masking**: A fixed mask pattern, or the lowest penalty pattern out of all eight
//!
//! ## Quick Start
//!
//! ### Simple QR Code Generation
//!
//! ```rust
//! use qrcraft::QRBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Version 2, error correction level L and mask pattern 0
//! let grid = QRBuilder::new(b"Hello World").build()?;
//! assert_eq!(grid.side_length(), 25);
//!
//! for row in grid.rows() {
//!     let line: String = row.iter().map(|&dark| if dark { '#' } else { ' ' }).collect();
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrcraft::{ECLevel, MaskPattern, PenaltyMaskSelector, QRBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let grid = QRBuilder::new(b"Hello, World!")
//!     .version(Version::new(1))            // Symbol size: 4 * version + 17 modules
//!     .ec_level(ECLevel::M)                // Error correction level
//!     .mask(MaskPattern::new(3)?)          // Fixed mask pattern
//!     .build()?;
//! assert_eq!(*grid.mask(), 3);
//!
//! // Let the penalty rules pick the mask instead
//! let grid = QRBuilder::new(b"Hello, World!")
//!     .version(Version::new(1))
//!     .ec_level(ECLevel::M)
//!     .mask_selector(PenaltyMaskSelector)
//!     .build()?;
//! println!("Selected mask: {}", *grid.mask());
//! # Ok(())
//! # }
//! ```
//!
//! ## Symbol configurations
//!
//! Versions 1 to 5 are supported wherever the symbol has a single error correction block:
//!
//! | Version | Size | L | M | Q | H |
//! |---|---|---|---|---|---|
//! | 1 | 21x21 | 17 | 14 | 11 | 7 |
//! | 2 | 25x25 | 32 | 26 | 20 | 14 |
//! | 3 | 29x29 | 53 | 42 | - | - |
//! | 4 | 33x33 | 78 | - | - | - |
//! | 5 | 37x37 | 106 | - | - | - |
//!
//! Cells list the maximum payload in bytes. Anything else fails with
//! [`QRError::UnsupportedConfiguration`].
//!
//! ## Logging
//!
//! Builds report progress through [`tracing`] at `debug` and `trace` level. No subscriber
//! is installed by the library.

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;

pub use builder::{Module, ModuleGrid, QRBuilder, QR};
pub use common::bit_utils::BitStream;
pub use common::codec::encode_with_version;
pub use common::ec::{ecc, generator_polynomial, GaloisField, GF256};
pub use common::error::{QRError, QRResult};
pub use common::format::{encode_format_info, format_info};
pub use common::mask::{compute_total_penalty, MaskPattern, MaskSelector, PenaltyMaskSelector};
pub use common::metadata::{CapacityEntry, Color, ECLevel, Version};
