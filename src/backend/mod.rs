use std::fmt;
use std::hash::Hash;

use crate::ir::proginfo::ProgTable;

pub mod riscv64;

/// A code-generation target: its opcode namespace and its effect table.
pub trait Target: 'static {
    type Opcode: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Short architecture name used in diagnostics.
    const NAME: &'static str;
    /// Version of the opcode namespace the table was written against.
    ///
    /// Consumers that persist classifications keyed by opcode compare this
    /// to detect a renumbered namespace.
    const NAMESPACE_VERSION: u32;

    fn prog_table() -> &'static ProgTable<Self::Opcode>;

    /// Every opcode the target's encoder knows about.
    fn opcodes() -> &'static [Self::Opcode];
}
