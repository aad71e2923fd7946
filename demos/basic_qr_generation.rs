use std::error::Error;

use qrcraft::QRBuilder;

fn main() -> Result<(), Box<dyn Error>> {
    // Version 2, error correction level L, mask pattern 0
    let grid = QRBuilder::new(b"Hello World").build()?;

    // Two characters per module, with a quiet zone of 4 modules
    let quiet_zone = "██".repeat(grid.side_length() + 8);
    for _ in 0..4 {
        println!("{quiet_zone}");
    }
    for row in grid.rows() {
        let line: String = row.iter().map(|&dark| if dark { "  " } else { "██" }).collect();
        println!("████████{line}████████");
    }
    for _ in 0..4 {
        println!("{quiet_zone}");
    }

    println!(
        "Version {}, Ec level {:?}, Mask {}",
        *grid.version(),
        grid.ec_level(),
        *grid.mask()
    );
    Ok(())
}
