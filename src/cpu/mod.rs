/*!
cpu::mod - Public façade for the 6502/65C02 CPU core.

`Cpu` owns its architectural state, its page-handler memory map, and
the flavor-composed 256-entry dispatch table built once at
construction. Unlike a bus-threaded design, callers never pass memory
around: a host installs page handlers once via `add_page_handler` and
then drives execution purely through the signal and step APIs.

Submodules:
    state.rs      - register/flag state and the persisted snapshot
    addressing.rs - operand fetch / effective address primitives
    alu.rs        - binary + BCD arithmetic, shifts, compare, BIT
    interrupts.rs - reset/IRQ/NMI/BRK/RTI/WAI/STP sequencing
    step.rs       - step/stepN/stepCycles/stepCyclesDebug
    tables/       - the four 256-entry opcode tables and their composition
    semantics/    - one function per mnemonic family
*/

pub mod addressing;
pub mod alu;
pub mod interrupts;
pub mod semantics;
pub mod state;
pub mod step;
pub mod tables;

use crate::error::CpuBuildError;
use crate::flavor::Flavor;
use crate::page::{MemoryMap, PageHandler};
use state::CpuState;
use std::cell::RefCell;
use std::rc::Rc;
use tables::{DispatchTable, OpDescriptor};

pub struct Cpu {
    pub(crate) state: CpuState,
    pub(crate) memory: MemoryMap,
    pub(crate) flavor: Flavor,
    pub(crate) table: DispatchTable,
}

impl Cpu {
    /// Build a CPU of the given flavor. Composes the dispatch table
    /// once; fails only if a NMOS 6502 table is left with an
    /// unpopulated opcode slot after composition (see `tables`).
    pub fn new(flavor: Flavor) -> Result<Self, CpuBuildError> {
        let table = tables::build(flavor)?;
        Ok(Self {
            state: CpuState::power_up(),
            memory: MemoryMap::new(),
            flavor,
            table,
        })
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Install a page handler across `[start, end]` inclusive pages.
    /// Returns the ranges of any previously-distinct handlers this
    /// displaced (see `page::MemoryMap::add_page_handler`).
    pub fn add_page_handler(
        &mut self,
        handler: Rc<RefCell<dyn PageHandler>>,
        start: u8,
        end: u8,
    ) -> Vec<crate::page::DisplacedRange> {
        self.memory.add_page_handler(handler, start, end)
    }

    // -------------------------------------------------------------------
    // Introspection
    // -------------------------------------------------------------------

    pub fn get_state(&self) -> state::State {
        self.state.get_state()
    }

    pub fn set_state(&mut self, s: state::State) {
        self.state.set_state(s);
    }

    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    pub fn set_pc(&mut self, pc: u16) {
        self.state.pc = pc;
    }

    pub fn cycles(&self) -> u64 {
        self.state.cycles
    }

    pub fn sync(&self) -> bool {
        self.state.sync
    }

    pub fn wait(&self) -> bool {
        self.state.wait
    }

    pub fn stop(&self) -> bool {
        self.state.stop
    }

    pub fn op_info(&self, opcode: u8) -> &OpDescriptor {
        &self.table[opcode as usize]
    }

    /// PC, registers, and the raw bytes at PC sized by the opcode's
    /// addressing mode. A transparent read: does not advance cycles.
    pub fn debug_info(&self) -> DebugInfo {
        let opcode = self.memory.read((self.state.pc >> 8) as u8, self.state.pc as u8);
        let descriptor = &self.table[opcode as usize];
        let len = descriptor.mode.byte_length();
        let mut bytes = [0u8; 3];
        for (i, slot) in bytes.iter_mut().enumerate().take(len) {
            let addr = self.state.pc.wrapping_add(i as u16);
            *slot = self.memory.read((addr >> 8) as u8, addr as u8);
        }
        DebugInfo {
            pc: self.state.pc,
            a: self.state.a,
            x: self.state.x,
            y: self.state.y,
            sp: self.state.sp,
            status: self.state.status,
            opcode_bytes: bytes,
            opcode_len: len,
            mnemonic: descriptor.mnemonic,
        }
    }

    // -------------------------------------------------------------------
    // Transparent peek/poke (host tooling; bypass the cycle counter)
    // -------------------------------------------------------------------

    pub fn peek(&self, addr: u16) -> u8 {
        self.memory.read((addr >> 8) as u8, addr as u8)
    }

    pub fn poke(&self, addr: u16, value: u8) {
        self.memory.write((addr >> 8) as u8, addr as u8, value);
    }

    pub fn peek_page(&self, page: u8, offset: u8) -> u8 {
        self.memory.read(page, offset)
    }

    pub fn poke_page(&self, page: u8, offset: u8, value: u8) {
        self.memory.write(page, offset, value);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DebugInfo {
    pub pc: u16,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub status: u8,
    pub opcode_bytes: [u8; 3],
    pub opcode_len: usize,
    pub mnemonic: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::install_flat_ram;

    #[test]
    fn construction_sets_power_up_defaults() {
        let mut cpu = Cpu::new(Flavor::Nmos6502).expect("table composition");
        install_flat_ram(&mut cpu);
        let s = cpu.get_state();
        assert_eq!(s.a, 0);
        assert_eq!(s.x, 0);
        assert_eq!(s.sp, 0xFF);
        assert_eq!(s.pc, 0);
    }

    #[test]
    fn all_three_flavors_build_without_error() {
        assert!(Cpu::new(Flavor::Nmos6502).is_ok());
        assert!(Cpu::new(Flavor::Rockwell65C02).is_ok());
        assert!(Cpu::new(Flavor::Wdc65C02).is_ok());
    }
}
