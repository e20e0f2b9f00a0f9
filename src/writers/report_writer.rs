//! Sorted `name=min/mean/max` report rendering.

use crate::error::Result;
use crate::models::aggregate::StationAggregate;
use crate::models::table::AggregateTable;
use std::io::Write;

#[derive(Default)]
pub struct ReportWriter;

impl ReportWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write one `name=min/mean/max` line per station, sorted bytewise by
    /// name, each value with exactly one fractional digit.
    pub fn write_report<W: Write>(&self, table: &AggregateTable, out: &mut W) -> Result<()> {
        let mut entries: Vec<(&[u8], &StationAggregate)> = table.entries().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        for (name, aggregate) in entries {
            out.write_all(name)?;
            writeln!(
                out,
                "={}/{:.1}/{}",
                format_tenths(aggregate.min),
                mean(aggregate),
                format_tenths(aggregate.max),
            )?;
        }
        Ok(())
    }

    /// Render the report into a string. Station names are arbitrary bytes
    /// by contract; non-UTF-8 names are replaced lossily here, so the
    /// byte-exact path is [`write_report`](Self::write_report).
    pub fn render(&self, table: &AggregateTable) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_report(table, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// Render an exact tenths value with one fractional digit (`-123` → `-12.3`)
/// without a float detour.
fn format_tenths(tenths: i16) -> String {
    let sign = if tenths < 0 { "-" } else { "" };
    let magnitude = (tenths as i32).abs();
    format!("{}{}.{}", sign, magnitude / 10, magnitude % 10)
}

/// Mean in degrees: rounded half-up on the tenths scale, then divided back.
fn mean(aggregate: &StationAggregate) -> f64 {
    round_half_up(aggregate.sum as f64 / aggregate.count as f64) / 10.0
}

/// Round to the closest integer with ties toward positive infinity (Java
/// `Math.round` semantics, deliberately not round-half-to-even), and
/// normalize `-0.0` so a zero result never renders with a sign.
fn round_half_up(x: f64) -> f64 {
    let mut t = x.trunc();
    let negative_tie = x < 0.0 && t - x == 0.5;
    if !negative_tie && (x - t).abs() >= 0.5 {
        t += 1.0_f64.copysign(x);
    }

    if t == 0.0 {
        return 0.0;
    }
    t
}
