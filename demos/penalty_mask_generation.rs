use std::error::Error;

use qrcraft::{
    compute_total_penalty, BitStream, ECLevel, MaskPattern, PenaltyMaskSelector, QRBuilder,
    Version, QR,
};

fn main() -> Result<(), Box<dyn Error>> {
    let data = "https://example.com/qrcraft";
    let ver = Version::new(3);
    let ecl = ECLevel::M;

    let mut builder = QRBuilder::new(data.as_bytes());
    builder.version(ver).ec_level(ecl);

    // Score every candidate the same way the selector does
    let payload = BitStream::from(&builder.codewords()?[..]);
    for mask in MaskPattern::all() {
        let qr = QR::draw(ver, ecl, &payload, mask);
        println!("Mask {}: penalty {}", *mask, compute_total_penalty(&qr));
    }

    let grid = builder.mask_selector(PenaltyMaskSelector).build()?;
    println!("Selected mask {} for {}", *grid.mask(), builder.metadata());
    Ok(())
}
