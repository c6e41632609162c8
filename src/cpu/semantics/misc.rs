/*!
misc.rs - register transfers, stack push/pull, and flag set/clear.
*/

use crate::cpu::state::{CARRY, DECIMAL, IRQ_DISABLE, OVERFLOW};
use crate::cpu::Cpu;

macro_rules! transfer {
    ($name:ident, $src:ident, $dst:ident, update_zn) => {
        pub(crate) fn $name(cpu: &mut Cpu) {
            cpu.implied_phantom();
            cpu.state.$dst = cpu.state.$src;
            let v = cpu.state.$dst;
            cpu.state.update_zn(v);
        }
    };
    ($name:ident, $src:ident, $dst:ident) => {
        pub(crate) fn $name(cpu: &mut Cpu) {
            cpu.implied_phantom();
            cpu.state.$dst = cpu.state.$src;
        }
    };
}

transfer!(tax, a, x, update_zn);
transfer!(tay, a, y, update_zn);
transfer!(txa, x, a, update_zn);
transfer!(tya, y, a, update_zn);
transfer!(tsx, sp, x, update_zn);
transfer!(txs, x, sp);

pub(crate) fn pha(cpu: &mut Cpu) {
    cpu.implied_phantom();
    let v = cpu.state.a;
    cpu.push_u8(v);
}
pub(crate) fn pla(cpu: &mut Cpu) {
    cpu.implied_phantom();
    let addr = 0x0100u16 | cpu.state.sp as u16;
    cpu.bus_read_phantom(addr);
    let v = cpu.pop_u8();
    cpu.state.a = v;
    cpu.state.update_zn(v);
}
pub(crate) fn php(cpu: &mut Cpu) {
    cpu.implied_phantom();
    let status = cpu.state.compose_status_for_push(true);
    cpu.push_u8(status);
}
pub(crate) fn plp(cpu: &mut Cpu) {
    cpu.implied_phantom();
    let addr = 0x0100u16 | cpu.state.sp as u16;
    cpu.bus_read_phantom(addr);
    let v = cpu.pop_u8();
    cpu.state.restore_status_from_stack(v);
}

/// 65C02-only.
pub(crate) fn phx(cpu: &mut Cpu) {
    cpu.implied_phantom();
    let v = cpu.state.x;
    cpu.push_u8(v);
}
pub(crate) fn phy(cpu: &mut Cpu) {
    cpu.implied_phantom();
    let v = cpu.state.y;
    cpu.push_u8(v);
}
pub(crate) fn plx(cpu: &mut Cpu) {
    cpu.implied_phantom();
    let addr = 0x0100u16 | cpu.state.sp as u16;
    cpu.bus_read_phantom(addr);
    let v = cpu.pop_u8();
    cpu.state.x = v;
    cpu.state.update_zn(v);
}
pub(crate) fn ply(cpu: &mut Cpu) {
    cpu.implied_phantom();
    let addr = 0x0100u16 | cpu.state.sp as u16;
    cpu.bus_read_phantom(addr);
    let v = cpu.pop_u8();
    cpu.state.y = v;
    cpu.state.update_zn(v);
}

macro_rules! flag_op {
    ($name:ident, $mask:expr, $value:expr) => {
        pub(crate) fn $name(cpu: &mut Cpu) {
            cpu.implied_phantom();
            cpu.state.assign_flag($mask, $value);
        }
    };
}

flag_op!(clc, CARRY, false);
flag_op!(sec, CARRY, true);
flag_op!(cli, IRQ_DISABLE, false);
flag_op!(sei, IRQ_DISABLE, true);
flag_op!(cld, DECIMAL, false);
flag_op!(sed, DECIMAL, true);
flag_op!(clv, OVERFLOW, false);

pub(crate) fn inx(cpu: &mut Cpu) {
    cpu.implied_phantom();
    cpu.state.x = cpu.state.x.wrapping_add(1);
    let v = cpu.state.x;
    cpu.state.update_zn(v);
}
pub(crate) fn iny(cpu: &mut Cpu) {
    cpu.implied_phantom();
    cpu.state.y = cpu.state.y.wrapping_add(1);
    let v = cpu.state.y;
    cpu.state.update_zn(v);
}
pub(crate) fn dex(cpu: &mut Cpu) {
    cpu.implied_phantom();
    cpu.state.x = cpu.state.x.wrapping_sub(1);
    let v = cpu.state.x;
    cpu.state.update_zn(v);
}
pub(crate) fn dey(cpu: &mut Cpu) {
    cpu.implied_phantom();
    cpu.state.y = cpu.state.y.wrapping_sub(1);
    let v = cpu.state.y;
    cpu.state.update_zn(v);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor::Flavor;
    use crate::test_support::install_flat_ram;

    #[test]
    fn pha_then_pla_round_trips() {
        let mut cpu = Cpu::new(Flavor::Nmos6502).unwrap();
        install_flat_ram(&mut cpu);
        cpu.state.a = 0x42;
        cpu.state.sp = 0xFF;
        pha(&mut cpu);
        cpu.state.a = 0x00;
        pla(&mut cpu);
        assert_eq!(cpu.state.a, 0x42);
        assert_eq!(cpu.state.sp, 0xFF);
    }

    #[test]
    fn php_forces_break_and_unused_plp_clears_break() {
        let mut cpu = Cpu::new(Flavor::Nmos6502).unwrap();
        install_flat_ram(&mut cpu);
        cpu.state.status = 0;
        cpu.state.sp = 0xFF;
        php(&mut cpu);
        let pushed = cpu.peek(0x01FF);
        assert_ne!(pushed & crate::cpu::state::BREAK, 0);
        plp(&mut cpu);
        assert!(!cpu.state.is_flag_set(crate::cpu::state::BREAK));
        assert!(cpu.state.is_flag_set(crate::cpu::state::UNUSED));
    }
}
