use crate::domain::ledger::TotalsLedger;
use crate::error::Result;
use std::io::Write;

/// Writes charged totals as `<method> <amount>` lines, one per method.
///
/// No header is written; methods appear in identifier order.
pub struct TotalsWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> TotalsWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .from_writer(sink);
        Self { writer }
    }

    pub fn write_totals(&mut self, totals: &TotalsLedger) -> Result<()> {
        for (method_id, amount) in totals.iter() {
            self.writer
                .write_record([method_id, amount.to_string().as_str()])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
