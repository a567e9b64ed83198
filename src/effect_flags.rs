use bitflags::bitflags;
use thiserror::Error;

bitflags! {
    /// Operand-access and control-flow effects of one opcode.
    ///
    /// Analysis passes read these instead of knowing anything about the
    /// target. "Left" is the source operand (`from`), "Reg" the auxiliary
    /// register operand and "Right" the destination operand (`to`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EffectFlags: u32 {
        /// No operand effects needing special handling.
        const OK          = 1 << 0;
        /// Not a real machine instruction (type markers, stack maps, liveness hints).
        const PSEUDO      = 1 << 1;
        /// Contributes no operand effects trackable by generic analysis.
        const SKIP        = 1 << 2;
        /// Source operand is read.
        const LEFT_READ   = 1 << 3;
        /// Source operand is written.
        const LEFT_WRITE  = 1 << 4;
        /// Source operand has its address taken.
        const LEFT_ADDR   = 1 << 5;
        /// Auxiliary register operand is read.
        const REG_READ    = 1 << 6;
        /// Auxiliary register operand is written.
        const REG_WRITE   = 1 << 7;
        /// Destination operand is read.
        const RIGHT_READ  = 1 << 8;
        /// Destination operand is written.
        const RIGHT_WRITE = 1 << 9;
        /// Destination operand has its address taken (call targets).
        const RIGHT_ADDR  = 1 << 10;
        /// Pure data movement. Marks copy-propagation candidates.
        const MOVE        = 1 << 11;
        /// Value conversion between register classes or widths.
        const CONV        = 1 << 12;
        /// Unconditional control transfer.
        const JUMP        = 1 << 13;
        /// Conditional control transfer. Read flags describe the condition inputs.
        const CJMP        = 1 << 14;
        /// Subroutine call.
        const CALL        = 1 << 15;
        /// No fallthrough to the next instruction.
        const BREAK       = 1 << 16;
        /// Invalidates condition/carry state carried across instructions.
        const KILL_CARRY  = 1 << 17;
        /// Sets the carry/condition state.
        const SET_CARRY   = 1 << 18;
        /// Consumes the carry/condition state.
        const USE_CARRY   = 1 << 19;
    }
}

impl EffectFlags {
    /// Every flag that reads an operand.
    pub const READS: Self = Self::LEFT_READ.union(Self::REG_READ).union(Self::RIGHT_READ);
    /// Every flag that writes an operand.
    pub const WRITES: Self = Self::LEFT_WRITE.union(Self::REG_WRITE).union(Self::RIGHT_WRITE);
    /// Every flag that takes an operand's address.
    pub const ADDRS: Self = Self::LEFT_ADDR.union(Self::RIGHT_ADDR);
    /// Every control-transfer flag.
    pub const CONTROL: Self = Self::JUMP.union(Self::CJMP).union(Self::CALL).union(Self::BREAK);

    /// True if any operand position is read.
    pub fn reads_operands(self) -> bool {
        self.intersects(Self::READS)
    }

    /// True if any operand position is written.
    pub fn writes_operands(self) -> bool {
        self.intersects(Self::WRITES)
    }

    /// True for jumps, conditional branches and calls.
    ///
    /// Returns (RET) and UNDEF carry only BREAK and are not counted here;
    /// use [`ends_block`](Self::ends_block) to find every block terminator.
    pub fn transfers_control(self) -> bool {
        self.intersects(Self::JUMP | Self::CJMP | Self::CALL)
    }

    /// True unless execution can never reach the following instruction.
    pub fn falls_through(self) -> bool {
        !self.contains(Self::BREAK)
    }

    /// True if the instruction ends a basic block.
    pub fn ends_block(self) -> bool {
        self.intersects(Self::JUMP | Self::CJMP | Self::BREAK)
    }

    /// True for pure data movement, the copy-propagation candidates.
    pub fn is_copy_candidate(self) -> bool {
        self.contains(Self::MOVE)
    }

    /// True if the instruction is emitted as machine code.
    pub fn is_real(self) -> bool {
        !self.is_empty() && !self.contains(Self::PSEUDO)
    }

    /// Checks the combination rules every table record must satisfy.
    pub fn check(self) -> Result<(), FlagConflict> {
        if self.is_empty() {
            return Err(FlagConflict::Empty);
        }
        if self.contains(Self::OK) && self != Self::OK {
            return Err(FlagConflict::OkNotAlone(self));
        }
        if self.contains(Self::JUMP) && !self.contains(Self::BREAK) {
            return Err(FlagConflict::JumpWithoutBreak(self));
        }
        if self.contains(Self::JUMP | Self::CJMP) {
            return Err(FlagConflict::JumpAndCjmp(self));
        }
        if self.contains(Self::CJMP | Self::BREAK) {
            return Err(FlagConflict::CjmpBreaks(self));
        }
        if self.contains(Self::CALL) && !self.contains(Self::KILL_CARRY) {
            return Err(FlagConflict::CallKeepsCarry(self));
        }
        if self.contains(Self::MOVE) && !self.contains(Self::LEFT_READ | Self::RIGHT_WRITE) {
            return Err(FlagConflict::MoveOperands(self));
        }
        if self.contains(Self::PSEUDO) && self.intersects(Self::CONTROL) {
            return Err(FlagConflict::PseudoControl(self));
        }
        if self.contains(Self::SKIP)
            && (!self.contains(Self::PSEUDO)
                || self.intersects(Self::READS | Self::WRITES | Self::ADDRS))
        {
            return Err(FlagConflict::SkipOperands(self));
        }
        Ok(())
    }
}

/// A flag combination no opcode can truthfully have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlagConflict {
    #[error("record has no flags")]
    Empty,
    #[error("OK combined with other flags: {0:?}")]
    OkNotAlone(EffectFlags),
    #[error("JUMP without BREAK: {0:?}")]
    JumpWithoutBreak(EffectFlags),
    #[error("JUMP and CJMP together: {0:?}")]
    JumpAndCjmp(EffectFlags),
    #[error("CJMP with BREAK: {0:?}")]
    CjmpBreaks(EffectFlags),
    #[error("CALL without KILL_CARRY: {0:?}")]
    CallKeepsCarry(EffectFlags),
    #[error("MOVE without LEFT_READ and RIGHT_WRITE: {0:?}")]
    MoveOperands(EffectFlags),
    #[error("PSEUDO with control-transfer flags: {0:?}")]
    PseudoControl(EffectFlags),
    #[error("SKIP outside PSEUDO or with operand effects: {0:?}")]
    SkipOperands(EffectFlags),
}
