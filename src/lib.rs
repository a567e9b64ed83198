//! Per-opcode operand-effect and control-flow classification.
//!
//! Every opcode a target's code generator emits has exactly one
//! [`InstructionRecord`] describing which operands it reads and writes,
//! whether it transfers control and whether it is real machine code.
//! Target-independent passes (liveness, dead-code elimination, peephole and
//! copy propagation) query it through a [`Classifier`].
//!
//! ```
//! use proginfo::backend::riscv64::{Opcode, Riscv64};
//! use proginfo::{Classifier, EffectFlags};
//!
//! let classifier = Classifier::<Riscv64>::default();
//! let rec = classifier.classify(Opcode::Beq);
//! assert!(rec.flags.contains(EffectFlags::CJMP));
//! ```

pub mod backend;
pub mod classifier;
pub mod classifier_config;
pub mod diagnostic;
pub mod effect_flags;
pub mod ir;

pub use backend::Target;
pub use classifier::Classifier;
pub use classifier_config::ClassifierConfig;
pub use diagnostic::{ClassifyError, CollectingSink, Diagnostic, DiagnosticSink, LogSink};
pub use effect_flags::{EffectFlags, FlagConflict};
pub use ir::{InstructionRecord, Prog, ProgTable, TableError};
