/*!
alu.rs - arithmetic, shift/rotate, compare, and BIT primitives.

Overview
========
`adc`/`sbc` dispatch on the D flag between the pure-binary path and the
BCD path. The BCD path's flag semantics are flavor-dependent per
SPEC_FULL.md 4.3: NMOS derives N/V/Z from the unadjusted binary
intermediate (undefined on real silicon, but pinned here to a concrete
formula so results are reproducible); CMOS derives them from the
decimal-corrected result and spends one additional phantom read that
NMOS never pays. For memory operands that phantom re-reads the operand
address; for immediate mode there is no operand address to re-read, so
CMOS silicon reads a fixed internal ROM location instead, which differs
between the Rockwell and WDC parts.
*/

use super::state::{CARRY, DECIMAL, NEGATIVE, OVERFLOW, ZERO};
use super::Cpu;
use crate::flavor::Flavor;

/// Hard-coded phantom-read addresses CMOS parts issue for decimal-mode
/// immediate ADC/SBC, since there is no operand address to re-read.
const ROCKWELL_ADC_IMM_PHANTOM: u16 = 0x0059;
const ROCKWELL_SBC_IMM_PHANTOM: u16 = 0x00B1;
const WDC_ADC_IMM_PHANTOM: u16 = 0x007F;
const WDC_SBC_IMM_PHANTOM: u16 = 0x00B8;

impl Cpu {
    // ---------------------------------------------------------------------
    // ADC / SBC
    // ---------------------------------------------------------------------

    /// ADC with an operand fetched from `addr`; CMOS decimal mode
    /// re-reads `addr` as its extra phantom cycle.
    pub(crate) fn adc_with_operand(&mut self, addr: u16) {
        let operand = self.bus_read(addr);
        self.adc_value(operand, Some(addr));
    }

    /// ADC #imm; CMOS decimal mode phantom-reads a fixed ROM address
    /// instead of an operand address.
    pub(crate) fn adc_immediate(&mut self) {
        let operand = self.fetch();
        self.adc_value(operand, None);
    }

    pub(crate) fn sbc_with_operand(&mut self, addr: u16) {
        let operand = self.bus_read(addr);
        self.sbc_value(operand, Some(addr));
    }

    pub(crate) fn sbc_immediate(&mut self) {
        let operand = self.fetch();
        self.sbc_value(operand, None);
    }

    /// ISC/RRA (the illegal INC+SBC / ROR+ADC combos) reuse this same
    /// dispatch: their arithmetic half runs through the identical ALU
    /// hardware as the documented ADC/SBC, decimal mode included.
    pub(crate) fn adc_value(&mut self, operand: u8, operand_addr: Option<u16>) {
        if self.state.is_flag_set(DECIMAL) {
            self.adc_decimal(operand, operand_addr);
        } else {
            self.adc_binary(operand);
        }
    }

    pub(crate) fn sbc_value(&mut self, operand: u8, operand_addr: Option<u16>) {
        if self.state.is_flag_set(DECIMAL) {
            self.sbc_decimal(operand, operand_addr);
        } else {
            self.sbc_binary(operand);
        }
    }

    fn adc_binary(&mut self, operand: u8) {
        let a = self.state.a;
        let carry_in = self.state.is_flag_set(CARRY) as u16;
        let sum = a as u16 + operand as u16 + carry_in;
        let result = sum as u8;
        let overflow = (!(a ^ operand) & (a ^ result) & 0x80) != 0;
        self.state.a = result;
        self.state.assign_flag(CARRY, sum > 0xFF);
        self.state.assign_flag(OVERFLOW, overflow);
        self.state.update_zn(result);
    }

    fn sbc_binary(&mut self, operand: u8) {
        // SBC is ADC of the one's complement of the operand.
        self.adc_binary(!operand);
    }

    /// BCD ADC. NMOS: N/V/Z come from the unadjusted binary sum,
    /// A/C come from the decimal-corrected sum. CMOS: N/V/Z come from
    /// the decimal-corrected result, plus an extra phantom read.
    fn adc_decimal(&mut self, operand: u8, operand_addr: Option<u16>) {
        let a = self.state.a;
        let carry_in = self.state.is_flag_set(CARRY) as u16;

        let binary_sum = a as u16 + operand as u16 + carry_in;
        let binary_result = binary_sum as u8;
        let binary_overflow = (!(a ^ operand) & (a ^ binary_result) & 0x80) != 0;

        let mut al = (a & 0x0F) as u16 + (operand & 0x0F) as u16 + carry_in;
        if al > 0x09 {
            al += 0x06;
        }
        let low_carry = if al > 0x0F { 0x10 } else { 0 };
        let mut sum = (a & 0xF0) as u16 + (operand & 0xF0) as u16 + (al & 0x0F) + low_carry;
        let carry_out = sum >= 0xA0;
        if carry_out {
            sum += 0x60;
        }
        let decimal_result = sum as u8;

        self.state.a = decimal_result;
        self.state.assign_flag(CARRY, carry_out);

        if self.flavor.is_nmos() {
            self.state.assign_flag(OVERFLOW, binary_overflow);
            self.state.update_zn(binary_result);
        } else {
            let overflow = (!(a ^ operand) & (a ^ decimal_result) & 0x80) != 0;
            self.state.assign_flag(OVERFLOW, overflow);
            self.state.update_zn(decimal_result);
            self.charge_decimal_phantom(operand_addr, true);
        }
    }

    fn sbc_decimal(&mut self, operand: u8, operand_addr: Option<u16>) {
        let a = self.state.a;
        let carry_in = self.state.is_flag_set(CARRY) as u16;

        let binary_diff = a as i16 - operand as i16 - (1 - carry_in as i16);
        let binary_result = binary_diff as u8;
        let binary_overflow = ((a ^ operand) & (a ^ binary_result) & 0x80) != 0;

        let mut al = (a & 0x0F) as i16 - (operand & 0x0F) as i16 + carry_in as i16 - 1;
        if al < 0 {
            al = ((al - 0x06) & 0x0F) - 0x10;
        }
        let mut result = (a & 0xF0) as i16 - (operand & 0xF0) as i16 + al;
        if result < 0 {
            result -= 0x60;
        }
        let decimal_result = (result & 0xFF) as u8;
        let carry_out = binary_diff >= 0;

        self.state.a = decimal_result;
        self.state.assign_flag(CARRY, carry_out);

        if self.flavor.is_nmos() {
            self.state.assign_flag(OVERFLOW, binary_overflow);
            self.state.update_zn(binary_result);
        } else {
            let overflow = ((a ^ operand) & (a ^ decimal_result) & 0x80) != 0;
            self.state.assign_flag(OVERFLOW, overflow);
            self.state.update_zn(decimal_result);
            self.charge_decimal_phantom(operand_addr, false);
        }
    }

    fn charge_decimal_phantom(&mut self, operand_addr: Option<u16>, is_adc: bool) {
        let addr = operand_addr.unwrap_or(match (self.flavor, is_adc) {
            (Flavor::Rockwell65C02, true) => ROCKWELL_ADC_IMM_PHANTOM,
            (Flavor::Rockwell65C02, false) => ROCKWELL_SBC_IMM_PHANTOM,
            (Flavor::Wdc65C02, true) => WDC_ADC_IMM_PHANTOM,
            (Flavor::Wdc65C02, false) => WDC_SBC_IMM_PHANTOM,
            (Flavor::Nmos6502, _) => unreachable!("NMOS never charges the decimal phantom"),
        });
        self.bus_read_phantom(addr);
    }

    // ---------------------------------------------------------------------
    // Shifts / rotates (operate on a value, caller handles memory vs A)
    // ---------------------------------------------------------------------

    pub(crate) fn asl_value(&mut self, value: u8) -> u8 {
        let result = value << 1;
        self.state.assign_flag(CARRY, (value & 0x80) != 0);
        self.state.update_zn(result);
        result
    }

    pub(crate) fn lsr_value(&mut self, value: u8) -> u8 {
        let result = value >> 1;
        self.state.assign_flag(CARRY, (value & 0x01) != 0);
        self.state.update_zn(result);
        result
    }

    pub(crate) fn rol_value(&mut self, value: u8) -> u8 {
        let carry_in = self.state.is_flag_set(CARRY) as u8;
        let result = (value << 1) | carry_in;
        self.state.assign_flag(CARRY, (value & 0x80) != 0);
        self.state.update_zn(result);
        result
    }

    pub(crate) fn ror_value(&mut self, value: u8) -> u8 {
        let carry_in = self.state.is_flag_set(CARRY) as u8;
        let result = (value >> 1) | (carry_in << 7);
        self.state.assign_flag(CARRY, (value & 0x01) != 0);
        self.state.update_zn(result);
        result
    }

    // ---------------------------------------------------------------------
    // Compare / BIT
    // ---------------------------------------------------------------------

    pub(crate) fn compare(&mut self, register: u8, operand: u8) {
        let result = register.wrapping_sub(operand);
        self.state.assign_flag(CARRY, register >= operand);
        self.state.update_zn(result);
    }

    /// BIT: AND of A and operand sets Z; N and V are copied from bits 7
    /// and 6 of the operand. Only the 65C02 immediate-mode encoding
    /// (no addressable memory, so N/V are meaningless) updates Z alone.
    pub(crate) fn bit(&mut self, operand: u8, immediate_mode: bool) {
        let result = self.state.a & operand;
        self.state.assign_flag(ZERO, result == 0);
        if !immediate_mode {
            self.state.assign_flag(NEGATIVE, (operand & 0x80) != 0);
            self.state.assign_flag(OVERFLOW, (operand & 0x40) != 0);
        }
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
    fn binary_adc_sets_carry_and_overflow() {
        let mut cpu = cpu(Flavor::Nmos6502);
        cpu.state.a = 0x7F;
        cpu.state.status = 0;
        cpu.adc_value(0x01, None);
        assert_eq!(cpu.state.a, 0x80);
        assert!(cpu.state.is_flag_set(OVERFLOW));
        assert!(cpu.state.is_flag_set(NEGATIVE));
        assert!(!cpu.state.is_flag_set(CARRY));
    }

    #[test]
    fn decimal_adc_nmos_flags_from_unadjusted_binary() {
        // D=1, C=0, A=0x91, operand=0x10: decimal result is 0x01 with
        // carry set, but N/V/Z come from the raw binary sum 0xA1.
        let mut cpu = cpu(Flavor::Nmos6502);
        cpu.state.a = 0x91;
        cpu.state.status = DECIMAL;
        cpu.adc_value(0x10, None);
        assert_eq!(cpu.state.a, 0x01);
        assert!(cpu.state.is_flag_set(CARRY));
        assert!(cpu.state.is_flag_set(NEGATIVE));
        assert!(cpu.state.is_flag_set(DECIMAL));
    }

    #[test]
    fn decimal_adc_cmos_flags_from_decimal_result_and_phantoms() {
        let mut cpu = cpu(Flavor::Wdc65C02);
        cpu.state.a = 0x91;
        cpu.state.status = DECIMAL;
        cpu.state.pc = 0x1000;
        let before = cpu.state.cycles;
        cpu.adc_immediate_from(0x10);
        assert_eq!(cpu.state.a, 0x01);
        assert!(cpu.state.is_flag_set(CARRY));
        assert!(!cpu.state.is_flag_set(NEGATIVE));
        assert_eq!(cpu.state.cycles - before, 1); // just the phantom; fetch not included here
    }

    impl Cpu {
        // test-only helper to exercise the immediate decimal phantom
        // path without going through the full fetch/dispatch machinery
        fn adc_immediate_from(&mut self, operand: u8) {
            self.adc_value(operand, None);
        }
    }

    #[test]
    fn rol_ror_wrap_carry_through() {
        let mut cpu = cpu(Flavor::Nmos6502);
        cpu.state.status = CARRY;
        let result = cpu.rol_value(0x80);
        assert_eq!(result, 0x01);
        assert!(cpu.state.is_flag_set(CARRY));

        cpu.state.status = CARRY;
        let result = cpu.ror_value(0x01);
        assert_eq!(result, 0x80);
        assert!(cpu.state.is_flag_set(CARRY));
    }

    #[test]
    fn bit_immediate_does_not_touch_n_v() {
        let mut cpu = cpu(Flavor::Wdc65C02);
        cpu.state.a = 0x0F;
        cpu.state.status = NEGATIVE | OVERFLOW;
        cpu.bit(0xF0, true);
        assert!(cpu.state.is_flag_set(ZERO));
        assert!(cpu.state.is_flag_set(NEGATIVE)); // untouched, not recomputed
        assert!(cpu.state.is_flag_set(OVERFLOW));
    }
}
