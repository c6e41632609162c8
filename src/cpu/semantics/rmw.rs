/*!
rmw.rs - ASL/LSR/ROL/ROR/INC/DEC on memory, plus the 65C02 accumulator
INC/DEC variants.

Every memory-operand function routes through `Cpu::rmw`, which charges
the flavor-specific inner phantom cycle (spurious write on NMOS,
spurious read on CMOS) before the write-back.
*/

use crate::cpu::Cpu;

fn asl_at(cpu: &mut Cpu, addr: u16) {
    cpu.rmw(addr, |cpu, old| cpu.asl_value(old));
}
fn lsr_at(cpu: &mut Cpu, addr: u16) {
    cpu.rmw(addr, |cpu, old| cpu.lsr_value(old));
}
fn rol_at(cpu: &mut Cpu, addr: u16) {
    cpu.rmw(addr, |cpu, old| cpu.rol_value(old));
}
fn ror_at(cpu: &mut Cpu, addr: u16) {
    cpu.rmw(addr, |cpu, old| cpu.ror_value(old));
}
fn inc_at(cpu: &mut Cpu, addr: u16) {
    cpu.rmw(addr, |cpu, old| {
        let v = old.wrapping_add(1);
        cpu.state.update_zn(v);
        v
    });
}
fn dec_at(cpu: &mut Cpu, addr: u16) {
    cpu.rmw(addr, |cpu, old| {
        let v = old.wrapping_sub(1);
        cpu.state.update_zn(v);
        v
    });
}

pub(crate) fn asl_acc(cpu: &mut Cpu) {
    cpu.implied_phantom();
    let v = cpu.state.a;
    cpu.state.a = cpu.asl_value(v);
}
pub(crate) fn asl_zp(cpu: &mut Cpu) {
    let a = cpu.addr_zp();
    asl_at(cpu, a);
}
pub(crate) fn asl_zp_x(cpu: &mut Cpu) {
    let a = cpu.addr_zp_x();
    asl_at(cpu, a);
}
pub(crate) fn asl_abs(cpu: &mut Cpu) {
    let a = cpu.addr_abs();
    asl_at(cpu, a);
}
pub(crate) fn asl_abs_x(cpu: &mut Cpu) {
    let a = cpu.addr_abs_x_write();
    asl_at(cpu, a);
}

pub(crate) fn lsr_acc(cpu: &mut Cpu) {
    cpu.implied_phantom();
    let v = cpu.state.a;
    cpu.state.a = cpu.lsr_value(v);
}
pub(crate) fn lsr_zp(cpu: &mut Cpu) {
    let a = cpu.addr_zp();
    lsr_at(cpu, a);
}
pub(crate) fn lsr_zp_x(cpu: &mut Cpu) {
    let a = cpu.addr_zp_x();
    lsr_at(cpu, a);
}
pub(crate) fn lsr_abs(cpu: &mut Cpu) {
    let a = cpu.addr_abs();
    lsr_at(cpu, a);
}
pub(crate) fn lsr_abs_x(cpu: &mut Cpu) {
    let a = cpu.addr_abs_x_write();
    lsr_at(cpu, a);
}

pub(crate) fn rol_acc(cpu: &mut Cpu) {
    cpu.implied_phantom();
    let v = cpu.state.a;
    cpu.state.a = cpu.rol_value(v);
}
pub(crate) fn rol_zp(cpu: &mut Cpu) {
    let a = cpu.addr_zp();
    rol_at(cpu, a);
}
pub(crate) fn rol_zp_x(cpu: &mut Cpu) {
    let a = cpu.addr_zp_x();
    rol_at(cpu, a);
}
pub(crate) fn rol_abs(cpu: &mut Cpu) {
    let a = cpu.addr_abs();
    rol_at(cpu, a);
}
pub(crate) fn rol_abs_x(cpu: &mut Cpu) {
    let a = cpu.addr_abs_x_write();
    rol_at(cpu, a);
}

pub(crate) fn ror_acc(cpu: &mut Cpu) {
    cpu.implied_phantom();
    let v = cpu.state.a;
    cpu.state.a = cpu.ror_value(v);
}
pub(crate) fn ror_zp(cpu: &mut Cpu) {
    let a = cpu.addr_zp();
    ror_at(cpu, a);
}
pub(crate) fn ror_zp_x(cpu: &mut Cpu) {
    let a = cpu.addr_zp_x();
    ror_at(cpu, a);
}
pub(crate) fn ror_abs(cpu: &mut Cpu) {
    let a = cpu.addr_abs();
    ror_at(cpu, a);
}
pub(crate) fn ror_abs_x(cpu: &mut Cpu) {
    let a = cpu.addr_abs_x_write();
    ror_at(cpu, a);
}

pub(crate) fn inc_zp(cpu: &mut Cpu) {
    let a = cpu.addr_zp();
    inc_at(cpu, a);
}
pub(crate) fn inc_zp_x(cpu: &mut Cpu) {
    let a = cpu.addr_zp_x();
    inc_at(cpu, a);
}
pub(crate) fn inc_abs(cpu: &mut Cpu) {
    let a = cpu.addr_abs();
    inc_at(cpu, a);
}
pub(crate) fn inc_abs_x(cpu: &mut Cpu) {
    let a = cpu.addr_abs_x_write();
    inc_at(cpu, a);
}
/// 65C02-only INC A.
pub(crate) fn inc_acc(cpu: &mut Cpu) {
    cpu.implied_phantom();
    cpu.state.a = cpu.state.a.wrapping_add(1);
    let v = cpu.state.a;
    cpu.state.update_zn(v);
}

pub(crate) fn dec_zp(cpu: &mut Cpu) {
    let a = cpu.addr_zp();
    dec_at(cpu, a);
}
pub(crate) fn dec_zp_x(cpu: &mut Cpu) {
    let a = cpu.addr_zp_x();
    dec_at(cpu, a);
}
pub(crate) fn dec_abs(cpu: &mut Cpu) {
    let a = cpu.addr_abs();
    dec_at(cpu, a);
}
pub(crate) fn dec_abs_x(cpu: &mut Cpu) {
    let a = cpu.addr_abs_x_write();
    dec_at(cpu, a);
}
/// 65C02-only DEC A.
pub(crate) fn dec_acc(cpu: &mut Cpu) {
    cpu.implied_phantom();
    cpu.state.a = cpu.state.a.wrapping_sub(1);
    let v = cpu.state.a;
    cpu.state.update_zn(v);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor::Flavor;
    use crate::test_support::install_flat_ram;

    #[test]
    fn inc_zp_wraps_and_sets_zero() {
        let mut cpu = Cpu::new(Flavor::Nmos6502).unwrap();
        install_flat_ram(&mut cpu);
        cpu.poke(0x0010, 0xFF);
        cpu.state.pc = 0x0000;
        cpu.poke(0x0000, 0x10);
        inc_zp(&mut cpu);
        assert_eq!(cpu.peek(0x0010), 0x00);
        assert!(cpu.state.is_flag_set(crate::cpu::state::ZERO));
    }
}
