// ===== cipherforge/src/reports.rs =====
use crate::caesar::ShiftCandidate;
use crate::freq::{index_letter, FrequencyTable};
use crate::mapping::Mapping;
use crate::CfResult;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use std::io::Write;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    Table,
    Json,
}

pub fn freq_table(freq: &FrequencyTable) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Letter", "Count", "Frequency"]);

    for &idx in freq.ranked().iter() {
        let idx = idx as usize;
        table.add_row(vec![
            Cell::new(index_letter(idx)),
            Cell::new(freq.count(idx)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", freq.frequency(idx)))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Two-row grid: cipher alphabet on top, recovered plaintext below.
pub fn mapping_table(mapping: &Mapping) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let pairs = mapping.pairs();
    table.set_header(
        pairs
            .iter()
            .map(|(cipher, _)| Cell::new(cipher))
            .collect::<Vec<_>>(),
    );
    table.add_row(
        pairs
            .iter()
            .map(|(_, plain)| Cell::new(plain))
            .collect::<Vec<_>>(),
    );
    table
}

pub fn candidates_table(candidates: &[ShiftCandidate]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Shift", "Score", "Plaintext"]);

    for c in candidates {
        table.add_row(vec![
            Cell::new(c.shift).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.3}", c.score)).set_alignment(CellAlignment::Right),
            Cell::new(&c.plaintext),
        ]);
    }
    table
}

/// Writes the frequency table as CSV in canonical a..z order.
pub fn write_freq_csv<W: Write>(writer: W, freq: &FrequencyTable) -> CfResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["letter", "count", "frequency"])?;
    for idx in 0..crate::consts::ALPHABET_LEN {
        wtr.write_record([
            index_letter(idx).to_string(),
            freq.count(idx).to_string(),
            format!("{:.6}", freq.frequency(idx)),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
