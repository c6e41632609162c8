/*!
flavor.rs - CPU variant selector.

A `Flavor` picks which opcode tables get composed at construction time
(see `cpu::tables`) and gates a handful of per-instruction behaviors
that differ between the NMOS part and its CMOS successors: the
indirect-JMP page-wrap bug, BCD flag semantics and the extra phantom
read they cost on CMOS, and whether `WAI`/`STP` exist or fall back to
NOP.
*/

/// Which physical 6502-family part is being emulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// The original NMOS 6502 (and 6510/8502 functional equivalents),
    /// including its undocumented opcodes.
    Nmos6502,
    /// Rockwell's 65C02 extension (BBRn/BBSn, RMBn/SMBn, BRA, etc.);
    /// `WAI`/`STP` opcodes are left as NOP.
    Rockwell65C02,
    /// WDC's 65C02, identical to the Rockwell part plus `WAI` and `STP`.
    Wdc65C02,
}

impl Flavor {
    /// True for either CMOS part.
    #[inline]
    pub fn is_cmos(self) -> bool {
        !matches!(self, Flavor::Nmos6502)
    }

    /// True only for the original NMOS part.
    #[inline]
    pub fn is_nmos(self) -> bool {
        matches!(self, Flavor::Nmos6502)
    }
}
