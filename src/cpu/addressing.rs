/*!
addressing.rs - operand fetch and effective-address primitives.

Overview
========
Implements the bus-level choreography described in SPEC_FULL.md 4.1/4.2:
every primitive here is built on `bus_read`/`bus_write`, the sole
functions that advance the cycle counter, so that phantom accesses are
never double- or under-counted. Read-style and write/RMW-style variants
of the indexed modes are kept separate because NMOS and CMOS disagree
on when the page-cross phantom read happens: NMOS pays it only on a
page cross for reads but always for writes, at `oldPage|lo`; CMOS pays
it only on a page cross for reads but always for writes too, at `pc`
instead of the pre-fixup operand address.
*/

use super::Cpu;
use crate::flavor::Flavor;

impl Cpu {
    // ---------------------------------------------------------------------
    // Bus primitives - the only functions allowed to touch the cycle counter
    // ---------------------------------------------------------------------

    #[inline]
    pub(crate) fn bus_read(&mut self, addr: u16) -> u8 {
        let page = (addr >> 8) as u8;
        let offset = addr as u8;
        let value = self.memory.read(page, offset);
        self.state.cycles += 1;
        self.state.last_addr = addr;
        value
    }

    #[inline]
    pub(crate) fn bus_write(&mut self, addr: u16, value: u8) {
        let page = (addr >> 8) as u8;
        let offset = addr as u8;
        self.memory.write(page, offset, value);
        self.state.cycles += 1;
        self.state.last_addr = addr;
    }

    /// A read whose result is discarded: the phantom accesses real
    /// silicon performs that cost a cycle but never touch architectural
    /// state.
    #[inline]
    pub(crate) fn bus_read_phantom(&mut self, addr: u16) {
        self.bus_read(addr);
    }

    /// Fetch the opcode byte at PC with `sync` raised for exactly this
    /// access, then advance PC.
    pub(crate) fn fetch_opcode(&mut self) -> u8 {
        self.state.sync = true;
        let op = self.bus_read(self.state.pc);
        self.state.sync = false;
        self.state.pc = self.state.pc.wrapping_add(1);
        op
    }

    /// Fetch the next instruction byte at PC and advance PC.
    pub(crate) fn fetch(&mut self) -> u8 {
        let value = self.bus_read(self.state.pc);
        self.state.pc = self.state.pc.wrapping_add(1);
        value
    }

    /// Fetch a little-endian word at PC, advancing PC by two.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch() as u16;
        let hi = self.fetch() as u16;
        (hi << 8) | lo
    }

    /// Ordinary little-endian word read with carry into the high byte.
    pub(crate) fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.bus_read(addr) as u16;
        let hi = self.bus_read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Zero-page word read: the high-byte fetch wraps within page 0.
    pub(crate) fn read_word_zp(&mut self, zp_addr: u8) -> u16 {
        let lo = self.bus_read(zp_addr as u16) as u16;
        let hi = self.bus_read(zp_addr.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    // ---------------------------------------------------------------------
    // Stack
    // ---------------------------------------------------------------------

    pub(crate) fn push_u8(&mut self, value: u8) {
        let addr = 0x0100u16 | self.state.sp as u16;
        self.bus_write(addr, value);
        self.state.sp = self.state.sp.wrapping_sub(1);
    }

    pub(crate) fn pop_u8(&mut self) -> u8 {
        self.state.sp = self.state.sp.wrapping_add(1);
        let addr = 0x0100u16 | self.state.sp as u16;
        self.bus_read(addr)
    }

    /// JSR/interrupt-entry push order: high byte first, then low.
    pub(crate) fn push_u16(&mut self, value: u16) {
        self.push_u8((value >> 8) as u8);
        self.push_u8(value as u8);
    }

    /// RTS/RTI pull order: low byte first, then high.
    pub(crate) fn pop_u16(&mut self) -> u16 {
        let lo = self.pop_u8() as u16;
        let hi = self.pop_u8() as u16;
        (hi << 8) | lo
    }

    // ---------------------------------------------------------------------
    // Implied / accumulator phantom
    // ---------------------------------------------------------------------

    /// Every implied or accumulator-mode opcode with no operand byte
    /// burns one phantom read of the not-yet-advanced PC. The fallback
    /// 1-cycle NOP used to fill unassigned CMOS opcode slots is the one
    /// documented exception and must not call this.
    pub(crate) fn implied_phantom(&mut self) {
        let pc = self.state.pc;
        self.bus_read_phantom(pc);
    }

    // ---------------------------------------------------------------------
    // Effective-address primitives
    // ---------------------------------------------------------------------

    pub(crate) fn addr_zp(&mut self) -> u16 {
        self.fetch() as u16
    }

    pub(crate) fn addr_zp_x(&mut self) -> u16 {
        let base = self.fetch();
        self.bus_read_phantom(base as u16); // un-indexed read, NMOS and CMOS alike
        base.wrapping_add(self.state.x) as u16
    }

    pub(crate) fn addr_zp_y(&mut self) -> u16 {
        let base = self.fetch();
        self.bus_read_phantom(base as u16);
        base.wrapping_add(self.state.y) as u16
    }

    pub(crate) fn addr_abs(&mut self) -> u16 {
        self.fetch_word()
    }

    /// abs,X / abs,Y for READ-style opcodes: phantom read only on page
    /// cross, at `oldPage|lo` (NMOS) or `pc` (CMOS).
    fn addr_abs_indexed_read(&mut self, index: u8) -> u16 {
        let base = self.fetch_word();
        let addr = base.wrapping_add(index as u16);
        if (base & 0xFF00) != (addr & 0xFF00) {
            self.charge_index_phantom(base, addr);
        }
        addr
    }

    /// abs,X / abs,Y for WRITE/RMW-style opcodes: phantom read always.
    fn addr_abs_indexed_write(&mut self, index: u8) -> u16 {
        let base = self.fetch_word();
        let addr = base.wrapping_add(index as u16);
        self.charge_index_phantom(base, addr);
        addr
    }

    fn charge_index_phantom(&mut self, base: u16, addr: u16) {
        if self.flavor.is_nmos() {
            let partial = (base & 0xFF00) | (addr & 0x00FF);
            self.bus_read_phantom(partial);
        } else {
            let pc = self.state.pc;
            self.bus_read_phantom(pc);
        }
    }

    pub(crate) fn addr_abs_x_read(&mut self) -> u16 {
        self.addr_abs_indexed_read(self.state.x)
    }
    pub(crate) fn addr_abs_y_read(&mut self) -> u16 {
        self.addr_abs_indexed_read(self.state.y)
    }
    pub(crate) fn addr_abs_x_write(&mut self) -> u16 {
        self.addr_abs_indexed_write(self.state.x)
    }
    pub(crate) fn addr_abs_y_write(&mut self) -> u16 {
        self.addr_abs_indexed_write(self.state.y)
    }

    /// (zp,X): read the un-indexed zp first, then the 16-bit pointer
    /// (wrapping within zero page).
    pub(crate) fn addr_indexed_indirect(&mut self) -> u16 {
        let base = self.fetch();
        self.bus_read_phantom(base as u16);
        let ptr = base.wrapping_add(self.state.x);
        self.read_word_zp(ptr)
    }

    /// (zp),Y, read-style: phantom only on page cross.
    pub(crate) fn addr_indirect_indexed_read(&mut self) -> u16 {
        let ptr = self.fetch();
        let base = self.read_word_zp(ptr);
        let addr = base.wrapping_add(self.state.y as u16);
        if (base & 0xFF00) != (addr & 0xFF00) {
            self.charge_index_phantom(base, addr);
        }
        addr
    }

    /// (zp),Y, write/RMW-style: phantom always.
    pub(crate) fn addr_indirect_indexed_write(&mut self) -> u16 {
        let ptr = self.fetch();
        let base = self.read_word_zp(ptr);
        let addr = base.wrapping_add(self.state.y as u16);
        self.charge_index_phantom(base, addr);
        addr
    }

    /// 65C02 (zp): no index, one pointer dereference.
    pub(crate) fn addr_indirect_zp(&mut self) -> u16 {
        let ptr = self.fetch();
        self.read_word_zp(ptr)
    }

    /// JMP (abs) - NMOS reproduces the page-wrap bug; CMOS reads
    /// cleanly and spends one extra phantom cycle.
    pub(crate) fn addr_indirect_jmp(&mut self) -> u16 {
        let ptr = self.fetch_word();
        match self.flavor {
            Flavor::Nmos6502 => {
                let lo = self.bus_read(ptr);
                let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let hi = self.bus_read(hi_addr);
                u16::from_le_bytes([lo, hi])
            }
            Flavor::Rockwell65C02 | Flavor::Wdc65C02 => {
                let target = self.read_word(ptr);
                self.bus_read_phantom(ptr.wrapping_add(1));
                target
            }
        }
    }

    /// 65C02-only JMP (abs,X).
    pub(crate) fn addr_indirect_abs_x(&mut self) -> u16 {
        let base = self.fetch_word();
        let ptr = base.wrapping_add(self.state.x as u16);
        self.bus_read_phantom(ptr);
        self.read_word(ptr)
    }

    // ---------------------------------------------------------------------
    // Branches
    // ---------------------------------------------------------------------

    /// Fetch the signed relative offset and, if `condition` holds,
    /// resolve and apply the branch target with the two-tier phantom
    /// cost: one phantom read of the not-yet-updated PC for any taken
    /// branch, plus a second one at the pre-fixup address if the branch
    /// crosses a page.
    pub(crate) fn branch_if(&mut self, condition: bool) {
        let offset = self.fetch() as i8;
        let old_pc = self.state.pc;
        if !condition {
            return;
        }
        self.bus_read_phantom(old_pc);
        let target = old_pc.wrapping_add(offset as i16 as u16);
        let crossed = (old_pc & 0xFF00) != (target & 0xFF00);
        self.state.pc = target;
        if crossed {
            let pre_fixup = (old_pc & 0xFF00) | (target & 0x00FF);
            self.bus_read_phantom(pre_fixup);
        }
    }

    // ---------------------------------------------------------------------
    // Read-Modify-Write choreography
    // ---------------------------------------------------------------------

    /// Perform the canonical RMW sequence at `addr`: read old value,
    /// the flavor-specific inner phantom cycle (a spurious write of the
    /// old value on NMOS, a spurious re-read of `addr` on CMOS), `op`
    /// computes the new value, then write it back.
    pub(crate) fn rmw(&mut self, addr: u16, op: impl FnOnce(&mut Self, u8) -> u8) -> u8 {
        let old = self.bus_read(addr);
        if self.flavor.is_nmos() {
            self.bus_write(addr, old);
        } else {
            self.bus_read_phantom(addr);
        }
        let new = op(self, old);
        self.bus_write(addr, new);
        new
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::install_flat_ram;
    use crate::Flavor;

    fn cpu(flavor: Flavor) -> Cpu {
        let mut cpu = Cpu::new(flavor).unwrap();
        install_flat_ram(&mut cpu);
        cpu
    }

    #[test]
    fn zp_x_reads_unindexed_base_first() {
        let mut cpu = cpu(Flavor::Nmos6502);
        cpu.state.pc = 0x0000;
        cpu.state.x = 0x01;
        cpu.poke(0x0000, 0x80);
        let before = cpu.state.cycles;
        let addr = cpu.addr_zp_x();
        assert_eq!(addr, 0x81);
        assert_eq!(cpu.state.cycles - before, 2);
    }

    #[test]
    fn abs_x_read_phantom_only_on_page_cross_nmos() {
        let mut cpu = cpu(Flavor::Nmos6502);
        cpu.state.pc = 0x0000;
        cpu.poke(0x0000, 0xFF);
        cpu.poke(0x0001, 0x00); // base = $00FF
        cpu.state.x = 0x01; // crosses into $0100
        let before = cpu.state.cycles;
        let addr = cpu.addr_abs_x_read();
        assert_eq!(addr, 0x0100);
        assert_eq!(cpu.state.cycles - before, 3); // 2 fetch + 1 phantom
    }

    #[test]
    fn abs_x_write_always_phantoms_even_without_page_cross() {
        let mut cpu = cpu(Flavor::Nmos6502);
        cpu.state.pc = 0x0000;
        cpu.poke(0x0000, 0x00);
        cpu.poke(0x0001, 0x00); // base = $0000, no page cross
        cpu.state.x = 0x01;
        let before = cpu.state.cycles;
        let _ = cpu.addr_abs_x_write();
        assert_eq!(cpu.state.cycles - before, 3); // 2 fetch + 1 phantom, no cross
    }

    #[test]
    fn indirect_jmp_page_wrap_bug_on_nmos_only() {
        let mut nmos = cpu(Flavor::Nmos6502);
        nmos.poke(0x02FF, 0x34);
        nmos.poke(0x0300, 0xFF); // wrong slot if wrapped correctly
        nmos.poke(0x0200, 0x12); // bug reads high byte from $0200, not $0300
        nmos.state.pc = 0x0000;
        nmos.poke(0x0000, 0xFF);
        nmos.poke(0x0001, 0x02);
        let target = nmos.addr_indirect_jmp();
        assert_eq!(target, 0x1234);

        let mut cmos = cpu(Flavor::Wdc65C02);
        cmos.poke(0x02FF, 0x34);
        cmos.poke(0x0300, 0x12);
        cmos.state.pc = 0x0000;
        cmos.poke(0x0000, 0xFF);
        cmos.poke(0x0001, 0x02);
        let target = cmos.addr_indirect_jmp();
        assert_eq!(target, 0x1234);
    }

    #[test]
    fn rmw_nmos_spurious_write_cmos_spurious_read() {
        let mut nmos = cpu(Flavor::Nmos6502);
        nmos.poke(0x0010, 0x01);
        let result = nmos.rmw(0x0010, |_, old| old.wrapping_add(1));
        assert_eq!(result, 0x02);
        assert_eq!(nmos.peek(0x0010), 0x02);

        let mut cmos = cpu(Flavor::Wdc65C02);
        cmos.poke(0x0010, 0x01);
        let result = cmos.rmw(0x0010, |_, old| old.wrapping_add(1));
        assert_eq!(result, 0x02);
        assert_eq!(cmos.peek(0x0010), 0x02);
    }
}
