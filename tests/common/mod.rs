use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn write_quotes_csv(path: &Path, rows: &[(&str, &str)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["price", "payout_type"])?;

    for (price, payout) in rows {
        wtr.write_record([*price, *payout])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn generate_large_quotes_csv(path: &Path, size_mb: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(["price", "payout_type"])?;

    let target_size = (size_mb * 1024 * 1024) as u64;
    let prices = ["75.50", "149.99", "320", "45", "980.25"];
    let payouts = ["cash", "store_credit", ""];
    let mut row = 0usize;

    // Check size every 5000 rows to avoid syscall overhead
    loop {
        for _ in 0..5000 {
            wtr.write_record([prices[row % prices.len()], payouts[row % payouts.len()]])?;
            row += 1;
        }
        wtr.flush()?; // Flush to ensure file size is updated
        if std::fs::metadata(path)?.len() >= target_size {
            break;
        }
    }
    Ok(())
}
