//! Jiffy-to-percent scaling and value-mode emission.

use std::io::Write;

use crate::fields::VALUE_ORDER;

/// Scale a cumulative tick counter to the protocol's percent base.
///
/// `raw * 100 / hz`, truncating. The multiply is widened to 128 bits so
/// counters accumulated since boot cannot overflow the intermediate.
pub fn scale(raw: u64, hz: u64) -> u64 {
    (u128::from(raw) * 100 / u128::from(hz)) as u64
}

/// Emit one `<name>.value <n>` line per counter, in canonical field order.
///
/// Consumption stops as soon as either the counters or the known field
/// names run out. Older kernels legitimately provide fewer than nine
/// counters, so a short list is success with partial output, not an error;
/// a tenth counter (guest_nice) is ignored.
pub fn write_values<W: Write>(out: &mut W, counters: &[u64], hz: u64) -> std::io::Result<()> {
    for (name, &raw) in VALUE_ORDER.iter().zip(counters) {
        writeln!(out, "{}.value {}", name, scale(raw, hz))?;
    }
    Ok(())
}
