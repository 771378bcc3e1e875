//! Pot sampling interrupt
//!
//! The sampler lives in a critical-section mutex and is driven from the
//! `ADC` interrupt: each end-of-conversion stores the result and starts the
//! other channel. The bridge task only reads [`READINGS`].

use core::cell::RefCell;

use defmt::*;
use embassy_stm32::interrupt;
use embassy_stm32::interrupt::InterruptExt;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use panel_core::traits::ConversionHandler;
use panel_core::{AnalogReadings, AnalogSampler};
use panel_hal_stm32f4::RegisterAdc;

/// Latest pot values, written by the ADC interrupt
pub static READINGS: AnalogReadings = AnalogReadings::new();

type Sampler = AnalogSampler<'static, RegisterAdc<'static>>;

static SAMPLER: Mutex<CriticalSectionRawMutex, RefCell<Option<Sampler>>> =
    Mutex::new(RefCell::new(None));

/// Install the sampler, arm the first conversion and unmask the interrupt
pub fn start_sampling(sampler: Sampler) {
    SAMPLER.lock(|cell| {
        let mut slot = cell.borrow_mut();
        slot.insert(sampler).start();
    });
    // SAFETY: the handler below only touches state behind SAMPLER
    unsafe { interrupt::ADC.enable() };
    info!("Pot sampling started");
}

#[interrupt]
fn ADC() {
    SAMPLER.lock(|cell| {
        if let Some(sampler) = cell.borrow_mut().as_mut() {
            if let Some((channel, value)) = sampler.on_conversion_complete() {
                trace!("{} = {}", channel.name(), value);
            }
        }
    });
}
