use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::effect_flags::{EffectFlags, FlagConflict};

/// The classification of one opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstructionRecord<Op> {
    pub opcode: Op,
    pub flags: EffectFlags,
}

impl<Op> InstructionRecord<Op> {
    pub fn new(opcode: Op, flags: EffectFlags) -> Self {
        Self { opcode, flags }
    }

    /// A record with no known effects. Returned for opcodes missing from the table.
    pub fn empty(opcode: Op) -> Self {
        Self { opcode, flags: EffectFlags::empty() }
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl<Op: fmt::Display> fmt::Display for InstructionRecord<Op> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.opcode)?;
        if self.flags.is_empty() {
            return write!(f, "<none>");
        }
        bitflags::parser::to_writer(&self.flags, f)
    }
}

/// Errors building a [`ProgTable`] from its literal definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("{target}: duplicate proginfo entry for {opcode}")]
    Duplicate { target: &'static str, opcode: String },
    #[error("{target}: inconsistent flags for {opcode}: {conflict}")]
    Inconsistent {
        target: &'static str,
        opcode: String,
        #[source]
        conflict: FlagConflict,
    },
}

/// Immutable opcode -> effect mapping for one target.
///
/// Built once from a literal entry list; never mutated afterwards, so a
/// shared reference may be read from any number of threads.
#[derive(Debug, Clone)]
pub struct ProgTable<Op> {
    target: &'static str,
    map: FxHashMap<Op, EffectFlags>,
}

impl<Op> ProgTable<Op>
where
    Op: Copy + Eq + Hash + fmt::Display,
{
    /// Build a table, rejecting duplicate opcodes and inconsistent flag sets.
    pub fn from_entries<I>(target: &'static str, entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (Op, EffectFlags)>,
    {
        let mut map = FxHashMap::default();
        for (opcode, flags) in entries {
            if let Err(conflict) = flags.check() {
                return Err(TableError::Inconsistent {
                    target,
                    opcode: opcode.to_string(),
                    conflict,
                });
            }
            if map.insert(opcode, flags).is_some() {
                return Err(TableError::Duplicate { target, opcode: opcode.to_string() });
            }
        }
        Ok(Self { target, map })
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    pub fn get(&self, opcode: Op) -> Option<InstructionRecord<Op>> {
        self.map.get(&opcode).map(|&flags| InstructionRecord::new(opcode, flags))
    }

    pub fn contains(&self, opcode: Op) -> bool {
        self.map.contains_key(&opcode)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over all records in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = InstructionRecord<Op>> + '_ {
        self.map.iter().map(|(&opcode, &flags)| InstructionRecord::new(opcode, flags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestOp {
        Add,
        Jmp,
        Nop,
    }

    impl fmt::Display for TestOp {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:?}", self)
        }
    }

    #[test]
    fn test_table_lookup() {
        let table = ProgTable::from_entries("test", [
            (TestOp::Add, EffectFlags::LEFT_READ | EffectFlags::REG_READ | EffectFlags::RIGHT_WRITE),
            (TestOp::Jmp, EffectFlags::JUMP | EffectFlags::BREAK | EffectFlags::KILL_CARRY),
        ])
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.target(), "test");
        assert!(table.contains(TestOp::Add));
        assert!(!table.contains(TestOp::Nop));
        assert_eq!(table.get(TestOp::Nop), None);

        let rec = table.get(TestOp::Jmp).unwrap();
        assert_eq!(rec.opcode, TestOp::Jmp);
        assert!(rec.flags.contains(EffectFlags::BREAK));
        assert_eq!(table.iter().count(), 2);
    }

    #[test]
    fn test_table_rejects_duplicate() {
        let err = ProgTable::from_entries("test", [
            (TestOp::Nop, EffectFlags::OK),
            (TestOp::Nop, EffectFlags::OK),
        ])
        .unwrap_err();
        assert_eq!(err, TableError::Duplicate { target: "test", opcode: "Nop".to_string() });
    }

    #[test]
    fn test_table_rejects_inconsistent() {
        let err = ProgTable::from_entries("test", [(TestOp::Jmp, EffectFlags::JUMP)]).unwrap_err();
        assert!(matches!(err, TableError::Inconsistent { conflict: FlagConflict::JumpWithoutBreak(_), .. }));
        assert!(err.to_string().contains("Jmp"));
    }

    #[test]
    fn test_record_display() {
        let rec = InstructionRecord::new(TestOp::Add, EffectFlags::LEFT_READ | EffectFlags::RIGHT_WRITE);
        assert_eq!(rec.to_string(), "Add LEFT_READ | RIGHT_WRITE");
        assert_eq!(InstructionRecord::empty(TestOp::Nop).to_string(), "Nop <none>");
        assert!(InstructionRecord::empty(TestOp::Nop).is_empty());
    }
}
