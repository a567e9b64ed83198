pub mod opcode;
pub mod prog_table;

pub use opcode::{Opcode, NAMESPACE_VERSION};

use crate::backend::Target;
use crate::ir::proginfo::ProgTable;

pub(crate) const TARGET_NAME: &str = "riscv64";

/// 64-bit RISC-V.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Riscv64;

impl Target for Riscv64 {
    type Opcode = Opcode;

    const NAME: &'static str = TARGET_NAME;
    const NAMESPACE_VERSION: u32 = NAMESPACE_VERSION;

    fn prog_table() -> &'static ProgTable<Opcode> {
        prog_table::prog_table()
    }

    fn opcodes() -> &'static [Opcode] {
        Opcode::ALL
    }
}
