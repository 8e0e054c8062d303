//! Canonical CPU accounting field order and per-metric graph metadata.
//!
//! The aggregate line carries up to ten counters, but only the first nine
//! are reported; the tenth (guest_nice, kernels >= 2.6.33) is ignored.
//! Which optional counters exist is decided purely by the field count on
//! the aggregate line: the iowait/irq/softirq triple, steal, and guest
//! appeared in that order across kernel versions, so the thresholds below
//! are the specification of record rather than finer-grained capability
//! probing.

/// Ratio of `system.warning` to core count.
pub const SYS_WARNING: usize = 30;
/// Ratio of `system.critical` to core count.
pub const SYS_CRITICAL: usize = 50;
/// Ratio of `user.warning` to core count.
pub const USR_WARNING: usize = 80;

/// Minimum field count at which the iowait/irq/softirq triple exists.
pub const TRIPLE_MIN_FIELDS: usize = 7;
/// Minimum field count at which steal exists.
pub const STEAL_MIN_FIELDS: usize = 8;
/// Minimum field count at which guest exists.
pub const GUEST_MIN_FIELDS: usize = 9;

/// Counter names in the order they appear on the aggregate line.
///
/// Value mode consumes tokens in exactly this order and stops when either
/// the tokens or the names run out.
pub const VALUE_ORDER: &[&str] = &[
    "user", "nice", "system", "idle", "iowait", "irq", "softirq", "steal", "guest",
];

/// How the aggregator should draw a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw {
    /// Filled base series.
    Area,
    /// Stacked on top of the previous series.
    Stack,
}

impl std::fmt::Display for Draw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Area => write!(f, "AREA"),
            Self::Stack => write!(f, "STACK"),
        }
    }
}

/// Static graph metadata for one metric.
#[derive(Debug, Clone, Copy)]
pub struct FieldMeta {
    /// Metric name as emitted on the wire (`<name>.label`, `<name>.value`).
    pub name: &'static str,
    /// Draw hint for the aggregator.
    pub draw: Draw,
    /// Human-readable description for the `.info` line.
    pub info: &'static str,
}

/// The four metrics every kernel provides, in config-mode emission order.
pub static BASE_FIELDS: [FieldMeta; 4] = [
    FieldMeta {
        name: "system",
        draw: Draw::Area,
        info: "CPU time spent by the kernel in system activities",
    },
    FieldMeta {
        name: "user",
        draw: Draw::Stack,
        info: "CPU time spent by normal programs and daemons",
    },
    FieldMeta {
        name: "nice",
        draw: Draw::Stack,
        info: "CPU time spent by nice(1)d programs",
    },
    FieldMeta {
        name: "idle",
        draw: Draw::Stack,
        info: "Idle CPU time",
    },
];

/// The iowait/irq/softirq triple (present iff field count >= 7).
pub static TRIPLE_FIELDS: [FieldMeta; 3] = [
    FieldMeta {
        name: "iowait",
        draw: Draw::Stack,
        info: "CPU time spent waiting for I/O operations to finish",
    },
    FieldMeta {
        name: "irq",
        draw: Draw::Stack,
        info: "CPU time spent handling interrupts",
    },
    FieldMeta {
        name: "softirq",
        draw: Draw::Stack,
        info: "CPU time spent handling \"batched\" interrupts",
    },
];

/// Steal (present iff field count >= 8).
pub static STEAL_FIELD: FieldMeta = FieldMeta {
    name: "steal",
    draw: Draw::Stack,
    info: "The time that a virtual CPU had runnable tasks, but the virtual CPU itself was not running",
};

/// Guest (present iff field count >= 9).
pub static GUEST_FIELD: FieldMeta = FieldMeta {
    name: "guest",
    draw: Draw::Stack,
    info: "The time spent running a virtual CPU for guest operating systems under the control of the Linux kernel.",
};
