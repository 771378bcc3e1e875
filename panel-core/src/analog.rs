//! Pot sampling and change reporting
//!
//! The sampler runs in the conversion-complete interrupt and alternates
//! between the two pots, each completion starting the next conversion on the
//! other channel. The reporter runs in the main context and only sends a
//! value once it has moved more than the threshold since the last report.
//!
//! The two sides share nothing but [`AnalogReadings`]: one writer (sampler),
//! one reader (reporter), each value a single atomic.

use heapless::Vec;
use panel_hal::adc::ADC_MAX;
use panel_hal::AnalogConverter;
use panel_protocol::{Outbound, PotChannel};
use portable_atomic::{AtomicU16, Ordering};

use crate::config::AnalogConfig;
use crate::traits::ConversionHandler;

/// Latest raw value of each pot
pub struct AnalogReadings {
    latest: [AtomicU16; 2],
}

impl AnalogReadings {
    pub const fn new() -> Self {
        Self {
            latest: [AtomicU16::new(0), AtomicU16::new(0)],
        }
    }

    pub fn store(&self, channel: PotChannel, value: u16) {
        self.latest[channel.index()].store(value & ADC_MAX, Ordering::Relaxed);
    }

    pub fn latest(&self, channel: PotChannel) -> u16 {
        self.latest[channel.index()].load(Ordering::Relaxed)
    }
}

impl Default for AnalogReadings {
    fn default() -> Self {
        Self::new()
    }
}

/// Round-robin conversion driver for the two pots
pub struct AnalogSampler<'a, A> {
    adc: A,
    readings: &'a AnalogReadings,
    inputs: [u8; 2],
    current: PotChannel,
}

impl<'a, A: AnalogConverter> AnalogSampler<'a, A> {
    pub fn new(adc: A, readings: &'a AnalogReadings, config: &AnalogConfig) -> Self {
        Self {
            adc,
            readings,
            inputs: [
                config.input(PotChannel::Pot0),
                config.input(PotChannel::Pot1),
            ],
            current: PotChannel::Pot0,
        }
    }

    /// Arm the first conversion (pot 0)
    pub fn start(&mut self) {
        self.current = PotChannel::Pot0;
        self.adc.start_conversion(self.inputs[0]);
    }

    /// Channel whose conversion is in flight
    pub fn current(&self) -> PotChannel {
        self.current
    }

    pub fn adc(&self) -> &A {
        &self.adc
    }

    pub fn adc_mut(&mut self) -> &mut A {
        &mut self.adc
    }
}

impl<A: AnalogConverter> ConversionHandler for AnalogSampler<'_, A> {
    fn on_conversion_complete(&mut self) -> Option<(PotChannel, u16)> {
        // Spurious completion: nothing stored, nothing re-armed
        let raw = self.adc.take_result()?;
        let channel = self.current;
        let value = raw & ADC_MAX;
        self.readings.store(channel, value);

        self.current = channel.other();
        self.adc.start_conversion(self.inputs[self.current.index()]);
        Some((channel, value))
    }
}

/// Threshold-based pot change reporter
pub struct ChangeReporter<'a> {
    readings: &'a AnalogReadings,
    last_reported: [u16; 2],
    threshold: u16,
}

impl<'a> ChangeReporter<'a> {
    pub fn new(readings: &'a AnalogReadings, threshold: u16) -> Self {
        Self {
            readings,
            last_reported: [0; 2],
            threshold,
        }
    }

    /// Check one channel; rebases and returns a report on a large move
    pub fn check(&mut self, channel: PotChannel) -> Option<Outbound> {
        let latest = self.readings.latest(channel);
        let reported = &mut self.last_reported[channel.index()];
        let diff = latest.max(*reported) - latest.min(*reported);
        if diff > self.threshold {
            *reported = latest;
            Some(Outbound::Pot {
                channel,
                value: latest,
            })
        } else {
            None
        }
    }

    /// Check both channels, pot 0 first
    pub fn poll(&mut self) -> Vec<Outbound, 2> {
        let mut reports = Vec::new();
        for channel in PotChannel::ALL {
            if let Some(report) = self.check(channel) {
                // Capacity equals channel count
                let _ = reports.push(report);
            }
        }
        reports
    }

    pub fn last_reported(&self, channel: PotChannel) -> u16 {
        self.last_reported[channel.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_hal::mock::MockAdc;

    #[test]
    fn test_sampler_alternates() {
        let readings = AnalogReadings::new();
        let mut sampler = AnalogSampler::new(MockAdc::new(), &readings, &AnalogConfig::default());
        sampler.start();
        assert_eq!(sampler.adc().last_started(), Some(5));

        sampler.adc_mut().complete(100);
        assert_eq!(sampler.on_conversion_complete(), Some((PotChannel::Pot0, 100)));
        assert_eq!(sampler.adc().last_started(), Some(6));

        sampler.adc_mut().complete(200);
        assert_eq!(sampler.on_conversion_complete(), Some((PotChannel::Pot1, 200)));
        assert_eq!(sampler.adc().last_started(), Some(5));

        assert_eq!(readings.latest(PotChannel::Pot0), 100);
        assert_eq!(readings.latest(PotChannel::Pot1), 200);
        assert_eq!(sampler.adc().started.as_slice(), &[5, 6, 5]);
    }

    #[test]
    fn test_sampler_ignores_spurious_completion() {
        let readings = AnalogReadings::new();
        let mut sampler = AnalogSampler::new(MockAdc::new(), &readings, &AnalogConfig::default());
        sampler.start();

        assert_eq!(sampler.on_conversion_complete(), None);
        assert_eq!(sampler.current(), PotChannel::Pot0);
        assert_eq!(sampler.adc().started.len(), 1);
    }

    #[test]
    fn test_sampler_masks_to_12_bits() {
        let readings = AnalogReadings::new();
        let mut sampler = AnalogSampler::new(MockAdc::new(), &readings, &AnalogConfig::default());
        sampler.start();
        sampler.adc_mut().complete(0xF123);
        sampler.on_conversion_complete();
        assert_eq!(readings.latest(PotChannel::Pot0), 0x0123);
    }

    #[test]
    fn test_reporter_threshold_is_strict() {
        let readings = AnalogReadings::new();
        let mut reporter = ChangeReporter::new(&readings, 205);

        readings.store(PotChannel::Pot0, 205);
        assert!(reporter.poll().is_empty());

        readings.store(PotChannel::Pot0, 206);
        let reports = reporter.poll();
        assert_eq!(
            reports.as_slice(),
            &[Outbound::Pot {
                channel: PotChannel::Pot0,
                value: 206
            }]
        );
        assert_eq!(reporter.last_reported(PotChannel::Pot0), 206);
    }

    #[test]
    fn test_reporter_downward_move() {
        let readings = AnalogReadings::new();
        let mut reporter = ChangeReporter::new(&readings, 205);

        readings.store(PotChannel::Pot1, 4095);
        assert_eq!(reporter.poll().len(), 1);

        readings.store(PotChannel::Pot1, 3000);
        assert_eq!(
            reporter.check(PotChannel::Pot1),
            Some(Outbound::Pot {
                channel: PotChannel::Pot1,
                value: 3000
            })
        );
        assert_eq!(reporter.check(PotChannel::Pot1), None);
    }

    #[test]
    fn test_reporter_both_channels_in_order() {
        let readings = AnalogReadings::new();
        let mut reporter = ChangeReporter::new(&readings, 205);
        readings.store(PotChannel::Pot1, 1000);
        readings.store(PotChannel::Pot0, 2000);

        let reports = reporter.poll();
        assert_eq!(reports.len(), 2);
        assert!(matches!(
            reports[0],
            Outbound::Pot {
                channel: PotChannel::Pot0,
                ..
            }
        ));
    }
}
