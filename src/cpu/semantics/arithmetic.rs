/*!
arithmetic.rs - ADC/SBC, one function per addressing mode.

All the actual binary-vs-BCD and NMOS-vs-CMOS flag logic lives in
`cpu::alu`; these wrappers only resolve the effective address.
*/

use crate::cpu::Cpu;

pub(crate) fn adc_imm(cpu: &mut Cpu) {
    cpu.adc_immediate();
}
pub(crate) fn adc_zp(cpu: &mut Cpu) {
    let a = cpu.addr_zp();
    cpu.adc_with_operand(a);
}
pub(crate) fn adc_zp_x(cpu: &mut Cpu) {
    let a = cpu.addr_zp_x();
    cpu.adc_with_operand(a);
}
pub(crate) fn adc_abs(cpu: &mut Cpu) {
    let a = cpu.addr_abs();
    cpu.adc_with_operand(a);
}
pub(crate) fn adc_abs_x(cpu: &mut Cpu) {
    let a = cpu.addr_abs_x_read();
    cpu.adc_with_operand(a);
}
pub(crate) fn adc_abs_y(cpu: &mut Cpu) {
    let a = cpu.addr_abs_y_read();
    cpu.adc_with_operand(a);
}
pub(crate) fn adc_ind_x(cpu: &mut Cpu) {
    let a = cpu.addr_indexed_indirect();
    cpu.adc_with_operand(a);
}
pub(crate) fn adc_ind_y(cpu: &mut Cpu) {
    let a = cpu.addr_indirect_indexed_read();
    cpu.adc_with_operand(a);
}
pub(crate) fn adc_ind_zp(cpu: &mut Cpu) {
    let a = cpu.addr_indirect_zp();
    cpu.adc_with_operand(a);
}

pub(crate) fn sbc_imm(cpu: &mut Cpu) {
    cpu.sbc_immediate();
}
pub(crate) fn sbc_zp(cpu: &mut Cpu) {
    let a = cpu.addr_zp();
    cpu.sbc_with_operand(a);
}
pub(crate) fn sbc_zp_x(cpu: &mut Cpu) {
    let a = cpu.addr_zp_x();
    cpu.sbc_with_operand(a);
}
pub(crate) fn sbc_abs(cpu: &mut Cpu) {
    let a = cpu.addr_abs();
    cpu.sbc_with_operand(a);
}
pub(crate) fn sbc_abs_x(cpu: &mut Cpu) {
    let a = cpu.addr_abs_x_read();
    cpu.sbc_with_operand(a);
}
pub(crate) fn sbc_abs_y(cpu: &mut Cpu) {
    let a = cpu.addr_abs_y_read();
    cpu.sbc_with_operand(a);
}
pub(crate) fn sbc_ind_x(cpu: &mut Cpu) {
    let a = cpu.addr_indexed_indirect();
    cpu.sbc_with_operand(a);
}
pub(crate) fn sbc_ind_y(cpu: &mut Cpu) {
    let a = cpu.addr_indirect_indexed_read();
    cpu.sbc_with_operand(a);
}
pub(crate) fn sbc_ind_zp(cpu: &mut Cpu) {
    let a = cpu.addr_indirect_zp();
    cpu.sbc_with_operand(a);
}
