use lazy_static::lazy_static;

use crate::backend::riscv64::opcode::Opcode;
use crate::effect_flags::EffectFlags;
use crate::ir::proginfo::ProgTable;

use super::TARGET_NAME;

lazy_static! {
    static ref PROG_TABLE: ProgTable<Opcode> = ProgTable::from_entries(TARGET_NAME, entries())
        .unwrap_or_else(|e| panic!("malformed riscv64 proginfo table: {e}"));
}

/// The riscv64 table, built on first use.
pub fn prog_table() -> &'static ProgTable<Opcode> {
    &PROG_TABLE
}

/// Effects of every opcode the code generator emits. Assembler-only
/// opcodes are deliberately absent.
#[rustfmt::skip]
fn entries() -> Vec<(Opcode, EffectFlags)> {
    use Opcode::*;
    const OK: EffectFlags = EffectFlags::OK;
    const PSEUDO: EffectFlags = EffectFlags::PSEUDO;
    const SKIP: EffectFlags = EffectFlags::SKIP;
    const BREAK: EffectFlags = EffectFlags::BREAK;
    const LR: EffectFlags = EffectFlags::LEFT_READ;
    const RR: EffectFlags = EffectFlags::REG_READ;
    const RW: EffectFlags = EffectFlags::RIGHT_WRITE;
    const MOVE: EffectFlags = EffectFlags::MOVE;
    const CJMP: EffectFlags = EffectFlags::CJMP;
    const KILL: EffectFlags = EffectFlags::KILL_CARRY;

    const REG3: EffectFlags = LR.union(RR).union(RW);
    const REG2: EffectFlags = LR.union(RW);
    const MOVES: EffectFlags = LR.union(RW).union(MOVE);
    const BRANCH: EffectFlags = CJMP.union(LR).union(RR);

    vec![
        // Bookkeeping
        (Type, PSEUDO | SKIP),
        (Text, PSEUDO),
        (Funcdata, PSEUDO),
        (Pcdata, PSEUDO),
        (Undef, BREAK),
        (Usefield, OK),
        (Checknil, LR),
        (Vardef, PSEUDO | RW),
        (Varkill, PSEUDO | RW),
        (Varlive, PSEUDO | LR),
        (Ret, BREAK),
        (Jmp, EffectFlags::JUMP | BREAK | KILL),
        (Call, EffectFlags::RIGHT_ADDR | EffectFlags::CALL | KILL),
        (Nop, LR | RW),

        // Three-operand integer and single-precision ops
        (Add, REG3), (And, REG3), (Mul, REG3), (Mulw, REG3),
        (Mulh, REG3), (Mulhu, REG3), (Div, REG3), (Divu, REG3),
        (Divw, REG3), (Divuw, REG3), (Rem, REG3), (Remu, REG3),
        (Remw, REG3), (Remuw, REG3), (Or, REG3), (Sll, REG3),
        (Slt, REG3), (Sltu, REG3), (Sra, REG3), (Srl, REG3),
        (Sub, REG3), (Xor, REG3),
        (FaddS, REG3), (FsubS, REG3), (FmulS, REG3), (FdivS, REG3),
        (FsgnjS, REG3), (FsgnjnS, REG3), (FsgnjxS, REG3),

        // Register-immediate
        (Addi, REG2), (Andi, REG2), (Ori, REG2),
        (Slli, REG2), (Slti, REG2), (Sltiu, REG2),
        (Srli, REG2), (Srai, REG2), (Xori, REG2),

        // Moves, loads, stores
        (Ld, MOVES), (Sd, MOVES), (Mov, MOVES),
        (Movb, MOVES), (Movbu, MOVES), (Movh, MOVES),
        (Movhu, MOVES), (Movw, MOVES), (Movwu, MOVES),

        // Misc and conversions
        (Seqz, REG2), (Snez, REG2),
        (FsqrtS, REG2), (FnegS, REG2),
        (FcvtSW, REG2), (FcvtSL, REG2), (FcvtWS, REG2), (FcvtLS, REG2),
        (Ecall, OK),

        // Conditional branches
        (Beq, BRANCH), (Bne, BRANCH), (Bge, BRANCH),
        (Bgeu, BRANCH), (Blt, BRANCH), (Bltu, BRANCH),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_build() {
        let table = ProgTable::from_entries(TARGET_NAME, entries()).unwrap();
        assert_eq!(table.len(), 76);
        assert_eq!(prog_table().len(), table.len());
    }

    #[test]
    fn test_table_covers_generated_opcodes() {
        for &op in Opcode::ALL {
            assert_eq!(
                prog_table().contains(op),
                !op.is_assembler_only(),
                "{op} table membership",
            );
        }
    }

    #[test]
    fn test_namespace_version_matches_target() {
        use crate::backend::riscv64::{Riscv64, NAMESPACE_VERSION};
        use crate::backend::Target;
        assert_eq!(<Riscv64 as Target>::NAMESPACE_VERSION, NAMESPACE_VERSION);
        assert_eq!(<Riscv64 as Target>::NAME, prog_table().target());
    }

    #[test]
    fn test_table_is_shared() {
        assert!(std::ptr::eq(prog_table(), prog_table()));
    }
}
