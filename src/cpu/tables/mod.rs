/*!
tables - the four 256-entry opcode tables and their flavor composition.

Overview
========
Composition happens once, at `Cpu::new`, per SPEC_FULL.md 4.4:

    NMOS 6502:      base  overlaid with undocumented   (every slot must end up Some)
    Rockwell 65C02: base  overlaid with cmos_shared, overlaid with rockwell
    WDC 65C02:      base  overlaid with cmos_shared, overlaid with wdc

A later overlay's `Some` entries win; any opcode slot no overlay ever
claims keeps whatever the previous layer set. For the two CMOS flavors
any slot still `None` after composition becomes a genuine 1-cycle NOP
(distinct from the documented 2-cycle `$EA`). For the NMOS flavor any
slot still `None` is a construction-time error: real silicon has no
truly unimplemented opcode, and a gap here means the undocumented table
is incomplete.
*/

mod base;
mod cmos_shared;
mod rockwell;
mod undocumented;
mod wdc;

use crate::cpu::semantics::control_flow::nop_1cycle;
use crate::cpu::Cpu;
use crate::error::CpuBuildError;
use crate::flavor::Flavor;

/// An addressing mode, used only to size the raw instruction bytes for
/// disassembly (`Cpu::debug_info`); the actual operand fetch and cycle
/// accounting lives in the `exec` function itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectAbsX,
    IndexedIndirect,
    IndirectIndexed,
    IndirectZp,
    Relative,
    ZeroPageRelative,
}

impl AddrMode {
    /// Total instruction length in bytes, including the opcode byte.
    pub fn byte_length(self) -> usize {
        use AddrMode::*;
        match self {
            Implied | Accumulator => 1,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | IndexedIndirect | IndirectIndexed
            | IndirectZp | Relative => 2,
            Absolute | AbsoluteX | AbsoluteY | Indirect | IndirectAbsX | ZeroPageRelative => 3,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OpDescriptor {
    pub mnemonic: &'static str,
    pub mode: AddrMode,
    pub exec: fn(&mut Cpu),
}

pub type DispatchTable = [OpDescriptor; 256];
type RawTable = [Option<OpDescriptor>; 256];

fn empty_raw_table() -> RawTable {
    [None; 256]
}

fn overlay(dst: &mut RawTable, src: &RawTable) {
    for i in 0..256 {
        if let Some(descriptor) = src[i] {
            dst[i] = Some(descriptor);
        }
    }
}

pub(crate) fn build(flavor: Flavor) -> Result<DispatchTable, CpuBuildError> {
    let mut table = empty_raw_table();
    overlay(&mut table, &base::table());

    match flavor {
        Flavor::Nmos6502 => {
            overlay(&mut table, &undocumented::table());
            finalize_nmos(table)
        }
        Flavor::Rockwell65C02 => {
            overlay(&mut table, &cmos_shared::table());
            overlay(&mut table, &rockwell::table());
            Ok(finalize_cmos(table))
        }
        Flavor::Wdc65C02 => {
            overlay(&mut table, &cmos_shared::table());
            overlay(&mut table, &wdc::table());
            Ok(finalize_cmos(table))
        }
    }
}

fn finalize_nmos(table: RawTable) -> Result<DispatchTable, CpuBuildError> {
    let mut out = Vec::with_capacity(256);
    for (opcode, slot) in table.iter().enumerate() {
        match slot {
            Some(descriptor) => out.push(*descriptor),
            None => return Err(CpuBuildError::MissingOpcode(opcode as u8)),
        }
    }
    Ok(out.try_into().unwrap_or_else(|_| unreachable!("exactly 256 entries pushed above")))
}

fn finalize_cmos(table: RawTable) -> DispatchTable {
    let fallback = OpDescriptor {
        mnemonic: "NOP",
        mode: AddrMode::Implied,
        exec: nop_1cycle,
    };
    let mut out = Vec::with_capacity(256);
    for slot in table.iter() {
        out.push(slot.unwrap_or(fallback));
    }
    out.try_into().unwrap_or_else(|_| unreachable!("exactly 256 entries pushed above"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nmos_table_has_no_gaps() {
        assert!(build(Flavor::Nmos6502).is_ok());
    }

    #[test]
    fn cmos_tables_fill_every_slot() {
        for flavor in [Flavor::Rockwell65C02, Flavor::Wdc65C02] {
            let table = build(flavor).unwrap();
            assert_eq!(table.len(), 256);
        }
    }

    #[test]
    fn rockwell_leaves_wai_stp_as_nop() {
        let table = build(Flavor::Rockwell65C02).unwrap();
        assert_eq!(table[0xCB].mnemonic, "NOP");
        assert_eq!(table[0xDB].mnemonic, "NOP");
    }

    #[test]
    fn wdc_implements_wai_stp() {
        let table = build(Flavor::Wdc65C02).unwrap();
        assert_eq!(table[0xCB].mnemonic, "WAI");
        assert_eq!(table[0xDB].mnemonic, "STP");
    }
}
