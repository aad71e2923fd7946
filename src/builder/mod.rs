mod grid;
mod qr;

pub use grid::ModuleGrid;
pub use qr::{Module, QR};

use tracing::{debug, trace};

use crate::common::{
    codec::encode_with_version,
    ec::{ecc, GaloisField, GF256},
    error::QRResult,
    mask::{MaskPattern, MaskSelector},
    metadata::{ECLevel, Version},
    BitStream,
};

/// Configures and builds a single-block byte-mode symbol.
///
/// Defaults to version 2, error correction level L and the fixed mask pattern 0.
#[derive(Debug)]
pub struct QRBuilder<'a> {
    data: &'a [u8],
    version: Version,
    ec_level: ECLevel,
    mask: Box<dyn MaskSelector>,
    gf: &'a GaloisField,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            version: Version::new(2),
            ec_level: ECLevel::L,
            mask: Box::new(MaskPattern::default()),
            gf: &GF256,
        }
    }

    pub fn data(&mut self, data: &'a [u8]) -> &mut Self {
        self.data = data;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = version;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = Box::new(mask);
        self
    }

    pub fn mask_selector(&mut self, selector: impl MaskSelector + 'static) -> &mut Self {
        self.mask = Box::new(selector);
        self
    }

    pub fn galois_field(&mut self, gf: &'a GaloisField) -> &mut Self {
        self.gf = gf;
        self
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Version: {}, Ec level: {:?}, Mask: {:?} }}",
            *self.version, self.ec_level, self.mask
        )
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<ModuleGrid> {
        debug!(config = %self.metadata(), data_len = self.data.len(), "Generating QR");

        trace!("Constructing payload with ecc");
        let payload = self.compute_payload()?;

        trace!("Selecting mask");
        let draw = |m| QR::draw(self.version, self.ec_level, &payload, m);
        let mask = self.mask.select(&draw);

        trace!(mask = *mask, "Drawing symbol");
        let grid = draw(mask).into_grid()?;

        let total_modules = grid.side_length() * grid.side_length();
        let dark_modules = grid.count_dark_modules();
        debug!(
            version = *self.version,
            ec_level = ?self.ec_level,
            mask = *mask,
            dark_modules,
            light_modules = total_modules - dark_modules,
            balance = dark_modules * 100 / total_modules,
            "QR generated"
        );

        Ok(grid)
    }

    /// Data codewords followed by their error correction codewords.
    pub fn codewords(&self) -> QRResult<Vec<u8>> {
        Ok(self.compute_payload()?.data().to_vec())
    }

    fn compute_payload(&self) -> QRResult<BitStream> {
        let capacity = self.version.capacity(self.ec_level)?;

        trace!("Encoding data");
        let encoded_data = encode_with_version(self.data, self.version, self.ec_level)?;
        debug_assert!(
            encoded_data.len() == capacity.data_codewords() << 3,
            "Encoded data doesn't fill data capacity: Size {}, Capacity {}",
            encoded_data.len(),
            capacity.data_codewords() << 3
        );

        let ecc = ecc(self.gf, encoded_data.data(), capacity.ec_codewords);

        let mut payload = BitStream::new(capacity.total_codewords << 3);
        payload.extend(encoded_data.data());
        payload.extend(&ecc);
        Ok(payload)
    }
}
