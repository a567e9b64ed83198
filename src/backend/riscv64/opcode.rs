use std::fmt;

/// Version of the riscv64 opcode namespace. Bumped whenever a variant is
/// added, removed or renumbered.
pub const NAMESPACE_VERSION: u32 = 1;

macro_rules! opcodes {
    ($($(#[$attr:meta])* $name:ident => $mnemonic:literal,)*) => {
        /// riscv64 opcodes as produced by the instruction encoder.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum Opcode {
            $($(#[$attr])* $name,)*
        }

        impl Opcode {
            /// Every opcode, in declaration order.
            pub const ALL: &'static [Opcode] = &[$(Opcode::$name,)*];

            /// Upper-case assembler spelling.
            pub fn mnemonic(self) -> &'static str {
                match self {
                    $(Opcode::$name => $mnemonic,)*
                }
            }
        }
    };
}

opcodes! {
    // --- Generic bookkeeping, shared by every target ---
    Type => "TYPE",
    Text => "TEXT",
    Funcdata => "FUNCDATA",
    Pcdata => "PCDATA",
    Undef => "UNDEF",
    Usefield => "USEFIELD",
    Checknil => "CHECKNIL",
    Vardef => "VARDEF",
    Varkill => "VARKILL",
    Varlive => "VARLIVE",
    Ret => "RET",
    Jmp => "JMP",
    Call => "CALL",
    /// Internal no-op; also stands for USED and SET annotations.
    Nop => "NOP",

    // --- Register-register ---
    Add => "ADD",
    And => "AND",
    Mul => "MUL",
    Mulw => "MULW",
    Mulh => "MULH",
    Mulhu => "MULHU",
    Div => "DIV",
    Divu => "DIVU",
    Divw => "DIVW",
    Divuw => "DIVUW",
    Rem => "REM",
    Remu => "REMU",
    Remw => "REMW",
    Remuw => "REMUW",
    Or => "OR",
    Sll => "SLL",
    Slt => "SLT",
    Sltu => "SLTU",
    Sra => "SRA",
    Srl => "SRL",
    Sub => "SUB",
    Xor => "XOR",
    FaddS => "FADDS",
    FsubS => "FSUBS",
    FmulS => "FMULS",
    FdivS => "FDIVS",
    FsgnjS => "FSGNJS",
    FsgnjnS => "FSGNJNS",
    FsgnjxS => "FSGNJXS",

    // --- Register-immediate ---
    Addi => "ADDI",
    Andi => "ANDI",
    Ori => "ORI",
    Slli => "SLLI",
    Slti => "SLTI",
    Sltiu => "SLTIU",
    Srli => "SRLI",
    Srai => "SRAI",
    Xori => "XORI",

    // --- Moves, loads, stores ---
    Ld => "LD",
    Sd => "SD",
    Mov => "MOV",
    Movb => "MOVB",
    Movbu => "MOVBU",
    Movh => "MOVH",
    Movhu => "MOVHU",
    Movw => "MOVW",
    Movwu => "MOVWU",

    // --- Misc and conversions ---
    Seqz => "SEQZ",
    Snez => "SNEZ",
    FsqrtS => "FSQRTS",
    FnegS => "FNEGS",
    FcvtSW => "FCVTSW",
    FcvtSL => "FCVTSL",
    FcvtWS => "FCVTWS",
    FcvtLS => "FCVTLS",
    Ecall => "ECALL",

    // --- Conditional branches ---
    Beq => "BEQ",
    Bne => "BNE",
    Bge => "BGE",
    Bgeu => "BGEU",
    Blt => "BLT",
    Bltu => "BLTU",

    // --- Assembler lowering only ---
    Lui => "LUI",
    Auipc => "AUIPC",
    Jal => "JAL",
    Jalr => "JALR",
    Lw => "LW",
    Lwu => "LWU",
    Lh => "LH",
    Lhu => "LHU",
    Lb => "LB",
    Lbu => "LBU",
    Sw => "SW",
    Sh => "SH",
    Sb => "SB",
    Ebreak => "EBREAK",
    Fence => "FENCE",
}

impl Opcode {
    /// Opcodes the encoder only produces while lowering pseudo forms
    /// (MOV*, JMP, CALL) after every analysis pass has run. They never
    /// reach the classifier and have no table entry.
    #[rustfmt::skip]
    pub const ASSEMBLER_ONLY: &'static [Opcode] = &[
        Opcode::Lui, Opcode::Auipc, Opcode::Jal, Opcode::Jalr,
        Opcode::Lw, Opcode::Lwu, Opcode::Lh, Opcode::Lhu, Opcode::Lb, Opcode::Lbu,
        Opcode::Sw, Opcode::Sh, Opcode::Sb,
        Opcode::Ebreak, Opcode::Fence,
    ];

    /// True if the opcode is in [`ASSEMBLER_ONLY`](Self::ASSEMBLER_ONLY).
    pub fn is_assembler_only(self) -> bool {
        Self::ASSEMBLER_ONLY.contains(&self)
    }

    /// Look up an opcode by mnemonic, ignoring case.
    pub fn from_mnemonic(s: &str) -> Option<Opcode> {
        Self::ALL.iter().copied().find(|op| op.mnemonic().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_namespace() {
        assert_eq!(Opcode::ALL.len(), 91);
        assert_eq!(Opcode::ALL[0], Opcode::Type);
        assert_eq!(*Opcode::ALL.last().unwrap(), Opcode::Fence);
        for (i, op) in Opcode::ALL.iter().enumerate() {
            assert_eq!(*op as usize, i);
        }
    }

    #[test]
    fn test_opcode_mnemonics_unique() {
        let mut seen = std::collections::HashSet::new();
        for op in Opcode::ALL {
            assert!(seen.insert(op.mnemonic()), "duplicate mnemonic {}", op);
        }
    }

    #[test]
    fn test_from_mnemonic() {
        assert_eq!(Opcode::from_mnemonic("ADDI"), Some(Opcode::Addi));
        assert_eq!(Opcode::from_mnemonic("fcvtsw"), Some(Opcode::FcvtSW));
        assert_eq!(Opcode::from_mnemonic("movbu"), Some(Opcode::Movbu));
        assert_eq!(Opcode::from_mnemonic("VADD"), None);
        assert_eq!(Opcode::Bgeu.to_string(), "BGEU");
    }

    #[test]
    fn test_opcode_groups() {
        assert!(Opcode::Jalr.is_assembler_only());
        assert!(!Opcode::Jmp.is_assembler_only());
        assert_eq!(Opcode::ASSEMBLER_ONLY.len(), 15);
    }
}
