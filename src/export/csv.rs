use crate::export::WeekExport;
use csv::WriterBuilder;
use std::path::Path;

/// Scrive la settimana in CSV nel file indicato. Layout: una riga per
/// giorno, una riga vuota, poi la riga dei totali.
pub fn write_csv(path: &Path, week: &WeekExport) -> std::io::Result<()> {
    let mut wtr = WriterBuilder::new().flexible(true).from_path(path)?;

    wtr.write_record([
        "Giorno",
        "SmartWorking",
        "Entrata 1",
        "Uscita 1",
        "Entrata 2",
        "Uscita 2",
        "Permesso",
        "Scarto (HH:MM)",
        "Rubati",
    ])?;

    for d in &week.days {
        wtr.write_record(&[
            d.day.clone(),
            if d.smartworking { "Sì" } else { "No" }.to_string(),
            d.entry1.clone(),
            d.exit1.clone(),
            d.entry2.clone(),
            d.exit2.clone(),
            d.permit.clone(),
            d.balance.clone(),
            d.rubato.clone(),
        ])?;
    }

    // Blank separator line before the totals (one empty field).
    wtr.write_record([""])?;
    wtr.write_record(&[
        "TOTALE SCARTO".to_string(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        week.total_balance.clone(),
        week.total_rubato.clone(),
    ])?;

    wtr.flush()?;
    Ok(())
}
