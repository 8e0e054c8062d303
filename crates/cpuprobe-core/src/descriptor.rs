//! Config-mode metadata emission.
//!
//! Tells the aggregator how to graph and alert on the metrics: bounds scale
//! with the detected core count, optional metric blocks appear according to
//! the detected field count, and scale-to-100 mode swaps the per-core
//! bounds for a fixed 0-100 range plus a `value / cores` cdef per metric.
//!
//! Line order matches the historical plugin output exactly, including the
//! uneven order inside the system and user blocks, so an aggregator diffing
//! config output across an upgrade sees no change.

use std::io::Write;

use crate::fields::{
    BASE_FIELDS, FieldMeta, GUEST_FIELD, GUEST_MIN_FIELDS, STEAL_FIELD, STEAL_MIN_FIELDS,
    SYS_CRITICAL, SYS_WARNING, TRIPLE_FIELDS, TRIPLE_MIN_FIELDS, USR_WARNING,
};
use crate::stat::CpuTopology;

/// Generic per-metric block: label, draw, min, max, type, info.
fn write_block<W: Write>(out: &mut W, meta: &FieldMeta, cores: usize) -> std::io::Result<()> {
    writeln!(out, "{}.label {}", meta.name, meta.name)?;
    writeln!(out, "{}.draw {}", meta.name, meta.draw)?;
    writeln!(out, "{}.min 0", meta.name)?;
    writeln!(out, "{}.max {}", meta.name, 100 * cores)?;
    writeln!(out, "{}.type DERIVE", meta.name)?;
    writeln!(out, "{}.info {}", meta.name, meta.info)
}

/// Normalization formula rendering the series as a percentage of capacity.
fn write_cdef<W: Write>(out: &mut W, name: &str, cores: usize) -> std::io::Result<()> {
    writeln!(out, "{name}.cdef {name},{cores},/")
}

/// Emit the full config-mode descriptor block.
pub fn write_config<W: Write>(
    out: &mut W,
    topology: CpuTopology,
    scale_to_100: bool,
) -> std::io::Result<()> {
    let CpuTopology { cores, field_count } = topology;

    writeln!(out, "graph_title CPU usage")?;
    if field_count >= TRIPLE_MIN_FIELDS {
        writeln!(out, "graph_order system user nice idle iowait irq softirq")?;
    } else {
        writeln!(out, "graph_order system user nice idle")?;
    }
    let upper = if scale_to_100 { 100 } else { 100 * cores };
    writeln!(
        out,
        "graph_args --base 1000 -r --lower-limit 0 --upper-limit {upper}"
    )?;
    writeln!(out, "graph_vlabel %")?;
    writeln!(out, "graph_scale no")?;
    writeln!(out, "graph_info This graph shows how CPU time is spent.")?;
    writeln!(out, "graph_category system")?;
    writeln!(out, "graph_period second")?;

    // system and user carry alert thresholds and their own line order.
    let system = &BASE_FIELDS[0];
    writeln!(out, "system.label system")?;
    writeln!(out, "system.draw {}", system.draw)?;
    writeln!(out, "system.max {}", 100 * cores)?;
    writeln!(out, "system.min 0")?;
    writeln!(out, "system.type DERIVE")?;
    writeln!(out, "system.warning {}", SYS_WARNING * cores)?;
    writeln!(out, "system.critical {}", SYS_CRITICAL * cores)?;
    writeln!(out, "system.info {}", system.info)?;

    let user = &BASE_FIELDS[1];
    writeln!(out, "user.label user")?;
    writeln!(out, "user.draw {}", user.draw)?;
    writeln!(out, "user.min 0")?;
    writeln!(out, "user.max {}", 100 * cores)?;
    writeln!(out, "user.warning {}", USR_WARNING * cores)?;
    writeln!(out, "user.type DERIVE")?;
    writeln!(out, "user.info {}", user.info)?;

    for meta in &BASE_FIELDS[2..] {
        write_block(out, meta, cores)?;
    }
    if scale_to_100 {
        for meta in &BASE_FIELDS {
            write_cdef(out, meta.name, cores)?;
        }
    }

    if field_count >= TRIPLE_MIN_FIELDS {
        for meta in &TRIPLE_FIELDS {
            write_block(out, meta, cores)?;
        }
        if scale_to_100 {
            for meta in &TRIPLE_FIELDS {
                write_cdef(out, meta.name, cores)?;
            }
        }
    }
    if field_count >= STEAL_MIN_FIELDS {
        write_block(out, &STEAL_FIELD, cores)?;
        if scale_to_100 {
            write_cdef(out, STEAL_FIELD.name, cores)?;
        }
    }
    if field_count >= GUEST_MIN_FIELDS {
        write_block(out, &GUEST_FIELD, cores)?;
        if scale_to_100 {
            write_cdef(out, GUEST_FIELD.name, cores)?;
        }
    }
    Ok(())
}
