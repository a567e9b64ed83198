pub mod prog;
pub mod proginfo;

pub use prog::Prog;
pub use proginfo::{InstructionRecord, ProgTable, TableError};
