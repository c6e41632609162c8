/*!
step.rs - the host-facing execution loop: step/step_n/step_cycles/step_cycles_debug.

Every call here first offers a pending interrupt the chance to fire at
the instruction boundary, then - unless the core is halted by WAI/STP -
fetches and dispatches exactly one opcode. `sync` is true for the
single bus cycle `fetch_opcode` performs and false everywhere else,
matching the real part's SYNC pin.

The spec's "optional callback" parameter on `step`/`stepN`/
`stepCyclesDebug` becomes an ordinary generic `FnMut(&Cpu) -> bool`
here rather than an `Option` - a caller with nothing to do on each
instruction passes `|_| false`, and one that wants early cancellation
returns `true`. `step()` itself is the zero-argument convenience built
on top of `step_with`.
*/

use super::Cpu;

impl Cpu {
    /// Execute exactly one instruction (or one interrupt-entry sequence,
    /// or nothing at all while WAI/STP-halted) and return the cycles it
    /// consumed.
    pub fn step(&mut self) -> u64 {
        self.step_with(|_| false)
    }

    /// Same as `step`, but `cb` runs once afterward and may return
    /// `true` to request a halt - meaningful to a caller driving a loop
    /// of single steps itself, since `step_with` always executes
    /// exactly one instruction regardless of what `cb` returns.
    pub fn step_with<F: FnMut(&Cpu) -> bool>(&mut self, mut cb: F) -> u64 {
        let before = self.state.cycles;
        if self.state.stop {
            cb(self);
            return 0;
        }
        if self.service_pending_interrupt() {
            let cycles = self.state.cycles - before;
            cb(self);
            return cycles;
        }
        if self.state.wait {
            cb(self);
            return 0;
        }
        let opcode = self.fetch_opcode();
        let exec = self.table[opcode as usize].exec;
        exec(self);
        let cycles = self.state.cycles - before;
        cb(self);
        cycles
    }

    /// Execute up to `n` instructions (interrupt-entry sequences count
    /// as one each). `cb` runs after every instruction that actually
    /// did something; returning `true` halts the loop early, as does
    /// the core halting via STP.
    pub fn step_n<F: FnMut(&Cpu) -> bool>(&mut self, n: u32, mut cb: F) -> u64 {
        let before = self.state.cycles;
        for _ in 0..n {
            if self.state.stop {
                break;
            }
            self.step();
            if cb(self) {
                break;
            }
        }
        self.state.cycles - before
    }

    /// Execute whole instructions until at least `budget` cycles have
    /// elapsed (the final instruction may overshoot - a cycle-accurate
    /// core can't stop mid-instruction), or the core halts via STP.
    /// Returns the actual cycles consumed.
    pub fn step_cycles(&mut self, budget: u64) -> u64 {
        let before = self.state.cycles;
        while self.state.cycles - before < budget {
            if self.state.stop {
                break;
            }
            self.step();
        }
        self.state.cycles - before
    }

    /// Same bound as `step_cycles`, but `cb` runs after every executed
    /// instruction and may return `true` to halt early.
    pub fn step_cycles_debug<F: FnMut(&Cpu) -> bool>(&mut self, budget: u64, mut cb: F) -> u64 {
        let before = self.state.cycles;
        while self.state.cycles - before < budget {
            if self.state.stop {
                break;
            }
            self.step();
            if cb(self) {
                break;
            }
        }
        self.state.cycles - before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor::Flavor;
    use crate::test_support::install_flat_ram;

    #[test]
    fn step_executes_one_instruction_and_advances_pc() {
        let mut cpu = Cpu::new(Flavor::Nmos6502).unwrap();
        install_flat_ram(&mut cpu);
        cpu.state.pc = 0x0200;
        cpu.poke(0x0200, 0xEA); // NOP
        let cycles = cpu.step();
        assert_eq!(cycles, 2);
        assert_eq!(cpu.state.pc, 0x0201);
    }

    #[test]
    fn step_services_pending_nmi_instead_of_fetching() {
        let mut cpu = Cpu::new(Flavor::Nmos6502).unwrap();
        install_flat_ram(&mut cpu);
        cpu.poke(0xFFFA, 0x00);
        cpu.poke(0xFFFB, 0x90);
        cpu.state.pc = 0x0200;
        cpu.state.sp = 0xFF;
        cpu.poke(0x0200, 0xEA);
        cpu.request_nmi();
        cpu.step();
        assert_eq!(cpu.state.pc, 0x9000);
    }

    #[test]
    fn wai_halts_stepping_until_interrupt() {
        let mut cpu = Cpu::new(Flavor::Wdc65C02).unwrap();
        install_flat_ram(&mut cpu);
        cpu.poke(0xFFFE, 0x00);
        cpu.poke(0xFFFF, 0x90);
        cpu.state.pc = 0x0200;
        cpu.state.sp = 0xFF;
        cpu.poke(0x0200, 0xCB); // WAI
        cpu.step();
        assert!(cpu.state.wait);
        let cycles = cpu.step();
        assert_eq!(cycles, 0);
        cpu.set_irq_line(true);
        cpu.step();
        assert!(!cpu.state.wait);
        assert_eq!(cpu.state.pc, 0x9000);
    }

    #[test]
    fn stp_halts_stepping_permanently() {
        let mut cpu = Cpu::new(Flavor::Wdc65C02).unwrap();
        install_flat_ram(&mut cpu);
        cpu.state.pc = 0x0200;
        cpu.poke(0x0200, 0xDB); // STP
        cpu.step();
        assert!(cpu.state.stop);
        assert_eq!(cpu.step(), 0);
    }

    #[test]
    fn step_with_invokes_callback_once_after_the_instruction() {
        let mut cpu = Cpu::new(Flavor::Nmos6502).unwrap();
        install_flat_ram(&mut cpu);
        cpu.state.pc = 0x0200;
        cpu.poke(0x0200, 0xEA); // NOP
        let mut seen_pc = None;
        let cycles = cpu.step_with(|c| {
            seen_pc = Some(c.pc());
            true
        });
        assert_eq!(cycles, 2);
        assert_eq!(seen_pc, Some(0x0201));
    }

    #[test]
    fn step_cycles_runs_until_budget_met() {
        let mut cpu = Cpu::new(Flavor::Nmos6502).unwrap();
        install_flat_ram(&mut cpu);
        cpu.state.pc = 0x0200;
        for i in 0..10u16 {
            cpu.poke(0x0200 + i, 0xEA);
        }
        let consumed = cpu.step_cycles(10);
        assert!(consumed >= 10);
    }

    #[test]
    fn step_n_halts_early_when_callback_returns_true() {
        let mut cpu = Cpu::new(Flavor::Nmos6502).unwrap();
        install_flat_ram(&mut cpu);
        cpu.state.pc = 0x0200;
        for i in 0..10u16 {
            cpu.poke(0x0200 + i, 0xEA);
        }
        let mut executed = 0u32;
        cpu.step_n(10, |_| {
            executed += 1;
            executed == 3
        });
        assert_eq!(executed, 3);
        assert_eq!(cpu.state.pc, 0x0203);
    }
}
