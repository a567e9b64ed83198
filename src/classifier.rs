use std::marker::PhantomData;

use crate::backend::Target;
use crate::classifier_config::ClassifierConfig;
use crate::diagnostic::{ClassifyError, Diagnostic};
use crate::ir::prog::Prog;
use crate::ir::proginfo::InstructionRecord;

/// Looks up the effect record of an opcode for target `T`.
///
/// Holds no state between calls apart from its configuration, so one
/// classifier can serve any number of compilation units concurrently.
pub struct Classifier<T: Target> {
    config: ClassifierConfig,
    _target: PhantomData<fn() -> T>,
}

impl<T: Target> Classifier<T> {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config, _target: PhantomData }
    }

    /// Configuration this classifier was built with.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Name of the target whose table is consulted.
    pub fn target(&self) -> &'static str {
        T::NAME
    }

    /// Returns the record for `opcode`.
    ///
    /// A missing entry is reported once to the configured sink and yields an
    /// empty record; compilation carries on.
    pub fn classify(&self, opcode: T::Opcode) -> InstructionRecord<T::Opcode> {
        self.lookup(opcode, None)
    }

    /// Like [`classify`](Self::classify), attributing any diagnostic to the
    /// instruction's pc.
    pub fn classify_prog(&self, prog: &Prog<T::Opcode>) -> InstructionRecord<T::Opcode> {
        self.lookup(prog.opcode, Some(prog.pc))
    }

    /// Strict lookup: a missing entry is an error and nothing is reported.
    pub fn try_classify(&self, opcode: T::Opcode) -> Result<InstructionRecord<T::Opcode>, ClassifyError> {
        T::prog_table().get(opcode).ok_or_else(|| missing::<T>(opcode))
    }

    fn lookup(&self, opcode: T::Opcode, pc: Option<u64>) -> InstructionRecord<T::Opcode> {
        match T::prog_table().get(opcode) {
            Some(record) => {
                if self.config.trace_lookups {
                    log::trace!("{}: {}", T::NAME, record);
                }
                record
            }
            None => {
                let error = missing::<T>(opcode);
                let diagnostic = match pc {
                    Some(pc) => Diagnostic::at(pc, error),
                    None => Diagnostic::new(error),
                };
                self.config.sink.report(&diagnostic);
                InstructionRecord::empty(opcode)
            }
        }
    }
}

impl<T: Target> Default for Classifier<T> {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

fn missing<T: Target>(opcode: T::Opcode) -> ClassifyError {
    ClassifyError::MissingClassification { target: T::NAME, opcode: opcode.to_string() }
}
