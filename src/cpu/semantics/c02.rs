/*!
c02.rs - 65C02-only opcodes: STZ, TRB/TSB, RMBn/SMBn, BBRn/BBSn.

RMBn/SMBn/BBRn/BBSn are parameterized over the bit index at table
construction time rather than having sixteen near-identical functions;
see `cpu::tables::cmos_shared` for how each `n` is bound.
*/

use crate::cpu::Cpu;

pub(crate) fn stz_zp(cpu: &mut Cpu) {
    let a = cpu.addr_zp();
    cpu.bus_write(a, 0);
}
pub(crate) fn stz_zp_x(cpu: &mut Cpu) {
    let a = cpu.addr_zp_x();
    cpu.bus_write(a, 0);
}
pub(crate) fn stz_abs(cpu: &mut Cpu) {
    let a = cpu.addr_abs();
    cpu.bus_write(a, 0);
}
pub(crate) fn stz_abs_x(cpu: &mut Cpu) {
    let a = cpu.addr_abs_x_write();
    cpu.bus_write(a, 0);
}

/// TRB: clears bits in memory that are set in A, sets Z from `A & M`.
fn trb_at(cpu: &mut Cpu, addr: u16) {
    cpu.rmw(addr, |cpu, old| {
        let result = old & !cpu.state.a;
        cpu.state.assign_flag(crate::cpu::state::ZERO, (old & cpu.state.a) == 0);
        result
    });
}
pub(crate) fn trb_zp(cpu: &mut Cpu) {
    let a = cpu.addr_zp();
    trb_at(cpu, a);
}
pub(crate) fn trb_abs(cpu: &mut Cpu) {
    let a = cpu.addr_abs();
    trb_at(cpu, a);
}

/// TSB: sets bits in memory that are set in A, sets Z from `A & M`.
fn tsb_at(cpu: &mut Cpu, addr: u16) {
    cpu.rmw(addr, |cpu, old| {
        let result = old | cpu.state.a;
        cpu.state.assign_flag(crate::cpu::state::ZERO, (old & cpu.state.a) == 0);
        result
    });
}
pub(crate) fn tsb_zp(cpu: &mut Cpu) {
    let a = cpu.addr_zp();
    tsb_at(cpu, a);
}
pub(crate) fn tsb_abs(cpu: &mut Cpu) {
    let a = cpu.addr_abs();
    tsb_at(cpu, a);
}

/// Builds the RMBn/SMBn executor for a fixed bit index `n`, each bound
/// to its own opcode slot at table-composition time.
pub(crate) fn rmb(n: u8) -> fn(&mut Cpu) {
    match n {
        0 => |cpu| rmb_n(cpu, 0),
        1 => |cpu| rmb_n(cpu, 1),
        2 => |cpu| rmb_n(cpu, 2),
        3 => |cpu| rmb_n(cpu, 3),
        4 => |cpu| rmb_n(cpu, 4),
        5 => |cpu| rmb_n(cpu, 5),
        6 => |cpu| rmb_n(cpu, 6),
        7 => |cpu| rmb_n(cpu, 7),
        _ => unreachable!("bit index out of range"),
    }
}
pub(crate) fn smb(n: u8) -> fn(&mut Cpu) {
    match n {
        0 => |cpu| smb_n(cpu, 0),
        1 => |cpu| smb_n(cpu, 1),
        2 => |cpu| smb_n(cpu, 2),
        3 => |cpu| smb_n(cpu, 3),
        4 => |cpu| smb_n(cpu, 4),
        5 => |cpu| smb_n(cpu, 5),
        6 => |cpu| smb_n(cpu, 6),
        7 => |cpu| smb_n(cpu, 7),
        _ => unreachable!("bit index out of range"),
    }
}
pub(crate) fn bbr(n: u8) -> fn(&mut Cpu) {
    match n {
        0 => |cpu| bbr_n(cpu, 0),
        1 => |cpu| bbr_n(cpu, 1),
        2 => |cpu| bbr_n(cpu, 2),
        3 => |cpu| bbr_n(cpu, 3),
        4 => |cpu| bbr_n(cpu, 4),
        5 => |cpu| bbr_n(cpu, 5),
        6 => |cpu| bbr_n(cpu, 6),
        7 => |cpu| bbr_n(cpu, 7),
        _ => unreachable!("bit index out of range"),
    }
}
pub(crate) fn bbs(n: u8) -> fn(&mut Cpu) {
    match n {
        0 => |cpu| bbs_n(cpu, 0),
        1 => |cpu| bbs_n(cpu, 1),
        2 => |cpu| bbs_n(cpu, 2),
        3 => |cpu| bbs_n(cpu, 3),
        4 => |cpu| bbs_n(cpu, 4),
        5 => |cpu| bbs_n(cpu, 5),
        6 => |cpu| bbs_n(cpu, 6),
        7 => |cpu| bbs_n(cpu, 7),
        _ => unreachable!("bit index out of range"),
    }
}

fn rmb_n(cpu: &mut Cpu, n: u8) {
    let addr = cpu.addr_zp();
    cpu.rmw(addr, |_, old| old & !(1 << n));
}
fn smb_n(cpu: &mut Cpu, n: u8) {
    let addr = cpu.addr_zp();
    cpu.rmw(addr, |_, old| old | (1 << n));
}

/// BBRn/BBSn: test bit `n` of a zero-page operand, then branch on a
/// following relative offset - the one 3-byte addressing mode in the
/// whole 65C02 set.
fn bbr_n(cpu: &mut Cpu, n: u8) {
    let zp = cpu.addr_zp();
    let value = cpu.bus_read(zp);
    let taken = (value & (1 << n)) == 0;
    cpu.branch_if(taken);
}
fn bbs_n(cpu: &mut Cpu, n: u8) {
    let zp = cpu.addr_zp();
    let value = cpu.bus_read(zp);
    let taken = (value & (1 << n)) != 0;
    cpu.branch_if(taken);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor::Flavor;
    use crate::test_support::install_flat_ram;

    #[test]
    fn stz_clears_memory() {
        let mut cpu = Cpu::new(Flavor::Wdc65C02).unwrap();
        install_flat_ram(&mut cpu);
        cpu.poke(0x0010, 0xFF);
        cpu.state.pc = 0x0000;
        cpu.poke(0x0000, 0x10);
        stz_zp(&mut cpu);
        assert_eq!(cpu.peek(0x0010), 0x00);
    }

    #[test]
    fn rmb_clears_only_target_bit() {
        let mut cpu = Cpu::new(Flavor::Wdc65C02).unwrap();
        install_flat_ram(&mut cpu);
        cpu.poke(0x0010, 0xFF);
        cpu.state.pc = 0x0000;
        cpu.poke(0x0000, 0x10);
        (rmb(3))(&mut cpu);
        assert_eq!(cpu.peek(0x0010), 0xF7);
    }

    #[test]
    fn bbs_branches_when_bit_set() {
        let mut cpu = Cpu::new(Flavor::Wdc65C02).unwrap();
        install_flat_ram(&mut cpu);
        cpu.poke(0x0010, 0x80);
        cpu.state.pc = 0x0000;
        cpu.poke(0x0000, 0x10); // zp operand
        cpu.poke(0x0001, 0x05); // relative offset, fetched after zp by branch_if
        (bbs(7))(&mut cpu);
        assert_eq!(cpu.state.pc, 0x0002u16.wrapping_add(0x05));
    }
}
