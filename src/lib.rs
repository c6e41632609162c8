#![doc = r#"
mos6502-core: a cycle-accurate software emulator for the MOS 6502 and
its CMOS successors (Rockwell 65C02, WDC 65C02).

Modules:
- error: construction-time failure type
- flavor: the three supported CPU variants
- page: the 256-entry page-handler memory map a host installs RAM/ROM/IO into
- cpu: register state, addressing modes, ALU, opcode tables, and the step loop

In tests, a shared flat-RAM page handler is available under `crate::test_support`.
"#]

pub mod cpu;
pub mod error;
pub mod flavor;
pub mod page;

pub use cpu::state::State;
pub use cpu::tables::{AddrMode, OpDescriptor};
pub use cpu::{Cpu, DebugInfo};
pub use error::CpuBuildError;
pub use flavor::Flavor;
pub use page::{DisplacedRange, PageHandler};

#[cfg(test)]
pub mod test_support;
