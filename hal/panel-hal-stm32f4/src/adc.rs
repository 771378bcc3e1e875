//! Interrupt-driven ADC1 access
//!
//! embassy-stm32's ADC driver polls for completion, which does not fit a
//! sampler that re-arms from the end-of-conversion interrupt. This driver
//! programs ADC1 directly: one-entry regular sequence, software start, EOC
//! interrupt enabled. The `ADC` interrupt handler calls
//! [`AnalogConverter::take_result`] and the next `start_conversion`.

use embassy_stm32::gpio::Flex;
use embassy_stm32::pac;
use embassy_stm32::pac::adc::vals::Smp;
use embassy_stm32::peripherals::ADC1;
use embassy_stm32::Peri;
use panel_hal::AnalogConverter;

/// Sample time long enough for a pot behind a few kilo-ohms
const SAMPLE_TIME: Smp = Smp::CYCLES84;

/// ADC1 driven at register level
pub struct RegisterAdc<'d> {
    _adc: Peri<'d, ADC1>,
    _inputs: [Flex<'d>; 2],
}

impl<'d> RegisterAdc<'d> {
    /// Power up ADC1 and put the two pot pins in analog mode
    ///
    /// `channels` are the ADC input numbers of `inputs`, used to program
    /// their sample times.
    pub fn new(adc: Peri<'d, ADC1>, mut inputs: [Flex<'d>; 2], channels: [u8; 2]) -> Self {
        for pin in &mut inputs {
            pin.set_as_analog();
        }

        pac::RCC.apb2enr().modify(|w| w.set_adc1en(true));

        let regs = pac::ADC1;
        for channel in channels {
            set_sample_time(channel);
        }
        regs.sqr1().modify(|w| w.set_l(0));
        regs.cr1().modify(|w| w.set_eocie(true));
        regs.cr2().modify(|w| w.set_adon(true));

        Self {
            _adc: adc,
            _inputs: inputs,
        }
    }
}

fn set_sample_time(channel: u8) {
    let regs = pac::ADC1;
    let channel = usize::from(channel);
    if channel < 10 {
        regs.smpr2().modify(|w| w.set_smp(channel, SAMPLE_TIME));
    } else {
        regs.smpr1().modify(|w| w.set_smp(channel - 10, SAMPLE_TIME));
    }
}

impl AnalogConverter for RegisterAdc<'_> {
    fn start_conversion(&mut self, channel: u8) {
        let regs = pac::ADC1;
        regs.sqr3().write(|w| w.set_sq(0, channel));
        regs.cr2().modify(|w| w.set_swstart(true));
    }

    fn take_result(&mut self) -> Option<u16> {
        let regs = pac::ADC1;
        if !regs.sr().read().eoc() {
            return None;
        }
        // Reading DR clears EOC; clear it explicitly as well in case of overrun
        let value = regs.dr().read().0 as u16;
        regs.sr().modify(|w| w.set_eoc(false));
        Some(value)
    }
}
