use std::fmt;

use crate::backend::Target;
use crate::classifier::Classifier;
use crate::ir::proginfo::InstructionRecord;

/// One instruction as seen by the analysis passes.
///
/// Its classification is not stored here; passes ask for it with
/// [`Prog::info`] every time, so no pass sees a stale record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prog<Op> {
    pub opcode: Op,
    /// Offset of the instruction within its function.
    pub pc: u64,
}

impl<Op: Copy> Prog<Op> {
    pub fn new(opcode: Op, pc: u64) -> Self {
        Self { opcode, pc }
    }

    /// Classify this instruction.
    pub fn info<T>(&self, classifier: &Classifier<T>) -> InstructionRecord<Op>
    where
        T: Target<Opcode = Op>,
    {
        classifier.classify_prog(self)
    }
}

impl<Op: fmt::Display> fmt::Display for Prog<Op> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x} {}", self.pc, self.opcode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::riscv64::{Opcode, Riscv64};
    use crate::effect_flags::EffectFlags;

    #[test]
    fn test_prog_info() {
        let classifier = Classifier::<Riscv64>::default();
        let prog = Prog::new(Opcode::Bne, 0x10);
        let info = prog.info(&classifier);
        assert_eq!(info.opcode, Opcode::Bne);
        assert!(info.flags.contains(EffectFlags::CJMP));
        assert_eq!(prog.to_string(), "0x0010 BNE");
    }

    #[test]
    fn test_prog_info_follows_opcode() {
        let classifier = Classifier::<Riscv64>::default();
        let mut prog = Prog::new(Opcode::Add, 0);
        assert!(!prog.info(&classifier).flags.contains(EffectFlags::MOVE));
        prog.opcode = Opcode::Mov;
        assert!(prog.info(&classifier).flags.contains(EffectFlags::MOVE));
    }
}
