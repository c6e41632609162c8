/*!
branches.rs - the eight relative branches plus the 65C02's unconditional
BRA. All timing and offset resolution live in `Cpu::branch_if`.
*/

use crate::cpu::state::{CARRY, NEGATIVE, OVERFLOW, ZERO};
use crate::cpu::Cpu;

pub(crate) fn bcc(cpu: &mut Cpu) {
    let taken = !cpu.state.is_flag_set(CARRY);
    cpu.branch_if(taken);
}
pub(crate) fn bcs(cpu: &mut Cpu) {
    let taken = cpu.state.is_flag_set(CARRY);
    cpu.branch_if(taken);
}
pub(crate) fn beq(cpu: &mut Cpu) {
    let taken = cpu.state.is_flag_set(ZERO);
    cpu.branch_if(taken);
}
pub(crate) fn bne(cpu: &mut Cpu) {
    let taken = !cpu.state.is_flag_set(ZERO);
    cpu.branch_if(taken);
}
pub(crate) fn bmi(cpu: &mut Cpu) {
    let taken = cpu.state.is_flag_set(NEGATIVE);
    cpu.branch_if(taken);
}
pub(crate) fn bpl(cpu: &mut Cpu) {
    let taken = !cpu.state.is_flag_set(NEGATIVE);
    cpu.branch_if(taken);
}
pub(crate) fn bvc(cpu: &mut Cpu) {
    let taken = !cpu.state.is_flag_set(OVERFLOW);
    cpu.branch_if(taken);
}
pub(crate) fn bvs(cpu: &mut Cpu) {
    let taken = cpu.state.is_flag_set(OVERFLOW);
    cpu.branch_if(taken);
}
/// 65C02-only: always taken.
pub(crate) fn bra(cpu: &mut Cpu) {
    cpu.branch_if(true);
}
