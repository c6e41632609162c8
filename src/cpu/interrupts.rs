/*!
interrupts.rs - reset/IRQ/NMI/BRK/RTI sequencing, plus WAI/STP latches.

Overview
========
IRQ and NMI are modeled as pending latches (`Cpu::request_irq`/
`request_nmi`) rather than direct calls into the service routine: real
silicon only samples these lines between instructions, so `step()`
checks and services them at the instruction boundary rather than the
caller reaching into the middle of execution. `irq_pending` persists
until serviced (the line stays asserted until the device driving it is
satisfied); `nmi_pending` is edge-triggered and clears itself the
instant it is serviced.

BRK, IRQ, and NMI entry share the same push/vector choreography; only
the vector address and whether BREAK is set in the pushed status
differ. CMOS additionally clears the D flag on every interrupt entry
(BRK included) - a documented NMOS erratum the 65C02 fixed.
*/

use super::state::{BREAK, DECIMAL, IRQ_DISABLE, UNUSED};
use super::Cpu;

const NMI_VECTOR: u16 = 0xFFFA;
const RESET_VECTOR: u16 = 0xFFFC;
const IRQ_VECTOR: u16 = 0xFFFE;

impl Cpu {
    /// Assert the NMI line. Edge-triggered: a single call queues exactly
    /// one service at the next instruction boundary.
    pub fn request_nmi(&mut self) {
        self.state.nmi_pending = true;
    }

    /// Assert or deassert the IRQ line. Level-triggered: stays pending
    /// until serviced, and servicing re-checks the line on the next
    /// boundary, matching real hardware holding IRQ low across multiple
    /// instructions if the device hasn't been acknowledged.
    pub fn set_irq_line(&mut self, asserted: bool) {
        self.state.irq_line = asserted;
    }

    /// Power-on/reset sequence: A/X/Y to 0, SP to 0xFF, status to
    /// UNUSED|IRQ_DISABLE, PC loaded from $FFFC, and every registered
    /// page handler's `reset()` invoked. Costs exactly the 2-cycle
    /// vector read - unlike BRK/IRQ/NMI entry, reset has no observable
    /// stack or PC-relative phantom access.
    pub fn reset(&mut self) {
        self.state.a = 0;
        self.state.x = 0;
        self.state.y = 0;
        self.state.sp = 0xFF;
        self.state.status = UNUSED | IRQ_DISABLE;
        let new_pc = self.read_word(RESET_VECTOR);
        self.state.pc = new_pc;
        self.state.wait = false;
        self.state.stop = false;
        self.state.nmi_pending = false;
        self.state.irq_line = false;
        self.memory.reset_handlers();
    }

    /// Called by `step()` at an instruction boundary. Returns true if an
    /// interrupt was serviced (caller should not also fetch an opcode
    /// this step).
    pub(crate) fn service_pending_interrupt(&mut self) -> bool {
        if self.state.nmi_pending {
            self.state.nmi_pending = false;
            self.state.wait = false;
            self.enter_interrupt(NMI_VECTOR, false);
            return true;
        }
        if self.state.irq_line && !self.state.is_flag_set(IRQ_DISABLE) {
            self.state.wait = false;
            self.enter_interrupt(IRQ_VECTOR, false);
            return true;
        }
        false
    }

    /// Shared BRK/IRQ/NMI entry: push PC, push status (BREAK set only
    /// for BRK), raise IRQ_DISABLE, clear DECIMAL on CMOS, load PC from
    /// `vector`.
    pub(crate) fn enter_interrupt(&mut self, vector: u16, set_break: bool) {
        let pc = self.state.pc;
        self.push_u16(pc);
        let status = self.state.compose_status_for_push(set_break);
        self.push_u8(status);
        self.state.set_flag_bit(IRQ_DISABLE);
        if self.flavor.is_cmos() {
            self.state.clear_flag_bit(DECIMAL);
        }
        self.state.pc = self.read_word(vector);
    }

    pub(crate) fn rti(&mut self) {
        self.implied_phantom();
        let status = self.pop_u8();
        self.state.restore_status_from_stack(status);
        self.state.pc = self.pop_u16();
    }

    /// BRK: the byte after the opcode is a padding/signature byte that
    /// is fetched and discarded (real silicon still advances PC past
    /// it, which is why RTI returns one byte past the BRK instruction).
    pub(crate) fn brk(&mut self) {
        self.fetch();
        self.enter_interrupt(IRQ_VECTOR, true);
    }

    /// WDC-only: halt fetch/execute until the next interrupt, which
    /// clears `wait` without otherwise being serviced differently.
    pub(crate) fn wai(&mut self) {
        self.implied_phantom();
        self.state.wait = true;
    }

    /// WDC-only: halt until reset.
    pub(crate) fn stp(&mut self) {
        self.implied_phantom();
        self.state.stop = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor::Flavor;
    use crate::test_support::install_flat_ram;

    #[test]
    fn reset_loads_vector_and_sets_irq_disable() {
        let mut cpu = Cpu::new(Flavor::Nmos6502).unwrap();
        install_flat_ram(&mut cpu);
        cpu.state.a = 0x11;
        cpu.state.x = 0x22;
        cpu.state.y = 0x33;
        cpu.state.sp = 0x44;
        cpu.poke(0xFFFC, 0x00);
        cpu.poke(0xFFFD, 0x80);
        let before = cpu.state.cycles;
        cpu.reset();
        assert_eq!(cpu.state.pc, 0x8000);
        assert!(cpu.state.is_flag_set(IRQ_DISABLE));
        assert_eq!(cpu.state.a, 0);
        assert_eq!(cpu.state.x, 0);
        assert_eq!(cpu.state.y, 0);
        assert_eq!(cpu.state.sp, 0xFF);
        assert_eq!(cpu.state.cycles - before, 2);
    }

    #[test]
    fn nmi_pushes_pc_and_status_then_jumps_to_vector() {
        let mut cpu = Cpu::new(Flavor::Nmos6502).unwrap();
        install_flat_ram(&mut cpu);
        cpu.poke(0xFFFA, 0x00);
        cpu.poke(0xFFFB, 0x90);
        cpu.state.pc = 0x1234;
        cpu.state.sp = 0xFF;
        cpu.request_nmi();
        let serviced = cpu.service_pending_interrupt();
        assert!(serviced);
        assert_eq!(cpu.state.pc, 0x9000);
        assert_eq!(cpu.state.sp, 0xFC);
        assert_eq!(cpu.peek(0x01FF), 0x12);
        assert_eq!(cpu.peek(0x01FE), 0x34);
    }

    #[test]
    fn brk_sets_break_in_pushed_status_but_not_live_status() {
        let mut cpu = Cpu::new(Flavor::Nmos6502).unwrap();
        install_flat_ram(&mut cpu);
        cpu.poke(0xFFFE, 0x00);
        cpu.poke(0xFFFF, 0xA0);
        cpu.state.pc = 0x0200;
        cpu.state.sp = 0xFF;
        cpu.brk();
        let pushed_status = cpu.peek(0x01FC);
        assert_ne!(pushed_status & BREAK, 0);
        assert_eq!(cpu.state.pc, 0xA000);
    }

    #[test]
    fn cmos_clears_decimal_on_interrupt_entry_nmos_does_not() {
        let mut nmos = Cpu::new(Flavor::Nmos6502).unwrap();
        install_flat_ram(&mut nmos);
        nmos.poke(0xFFFE, 0x00);
        nmos.poke(0xFFFF, 0x90);
        nmos.state.status |= DECIMAL;
        nmos.state.pc = 0x0200;
        nmos.brk();
        assert!(nmos.state.is_flag_set(DECIMAL));

        let mut cmos = Cpu::new(Flavor::Wdc65C02).unwrap();
        install_flat_ram(&mut cmos);
        cmos.poke(0xFFFE, 0x00);
        cmos.poke(0xFFFF, 0x90);
        cmos.state.status |= DECIMAL;
        cmos.state.pc = 0x0200;
        cmos.brk();
        assert!(!cmos.state.is_flag_set(DECIMAL));
    }
}
