//! End-to-end behaviour of the bridge logic against mock hardware
//!
//! Bytes go through the line receiver and dispatcher, outbound messages are
//! encoded onto a mock serial port, exactly as the firmware tasks do.

use core::cell::{Cell, RefCell};

use embassy_futures::join::join;
use embassy_futures::{block_on, yield_now};
use panel_core::config::BridgeConfig;
use panel_core::traits::{ByteHandler, ConversionHandler, EdgeHandler};
use panel_core::{AnalogReadings, AnalogSampler, ButtonDebouncer, ChangeReporter, Dispatcher};
use panel_display::{CharacterDisplay, DisplayError, DisplayRow, MockDisplay};
use panel_hal::mock::{MockAdc, MockPort, MockSerial, MockTicks};
use panel_hal::{OutputPort, SerialTx};
use panel_protocol::{ButtonId, Line, LineReceiver, Outbound, PotChannel, MAX_OUTBOUND_LEN};
use proptest::prelude::*;

struct Bridge {
    rx: LineReceiver,
    dispatcher: Dispatcher<MockDisplay, MockPort>,
    serial: MockSerial,
}

impl Bridge {
    fn new() -> Self {
        Self {
            rx: LineReceiver::new(),
            dispatcher: Dispatcher::new(MockDisplay::new(), MockPort::new()),
            serial: MockSerial::new(),
        }
    }

    fn receive(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            if let Some(line) = self.rx.on_byte_received(byte) {
                if let Some(ack) = block_on(self.dispatcher.dispatch(&line)).ack {
                    send(&mut self.serial, ack.into());
                }
            }
        }
    }
}

fn send(serial: &mut MockSerial, message: Outbound) {
    block_on(transmit(serial, message));
}

async fn transmit(serial: &mut MockSerial, message: Outbound) {
    let mut buf = [0u8; MAX_OUTBOUND_LEN];
    let len = message.encode(&mut buf).unwrap();
    serial.send(&buf[..len]).await.unwrap();
}

/// Display whose clear takes several scheduler turns, like a real LCD
struct SlowDisplay {
    inner: MockDisplay,
    busy_turns: usize,
}

impl CharacterDisplay for SlowDisplay {
    async fn clear(&mut self) -> Result<(), DisplayError> {
        for _ in 0..self.busy_turns {
            yield_now().await;
        }
        self.inner.clear().await
    }

    async fn write_line(&mut self, row: DisplayRow, text: &str) -> Result<(), DisplayError> {
        self.inner.write_line(row, text).await
    }
}

#[test]
fn test_session_round_trip() {
    let mut bridge = Bridge::new();
    bridge.receive(b"HI\r\nUP\r\nWR Hello;World\r\nLI 42\r\nES\r\n");

    assert_eq!(bridge.serial.text(), "HEY\r\nYES\r\nDID\r\nLIT\r\nSHO\r\n");
    assert_eq!(bridge.dispatcher.port().port_value(), 42);
    let display = bridge.dispatcher.display();
    assert_eq!(display.line(DisplayRow::Top), "Controller");
    assert_eq!(display.line(DisplayRow::Bottom), "Disconnected");
}

#[test]
fn test_lines_received_during_slow_dispatch() {
    // One byte arrives per scheduler turn while the bridge is dispatching;
    // a one-slot hand-off holds the next line until the bridge is free.
    let slot: RefCell<Option<Line>> = RefCell::new(None);
    let done = Cell::new(false);
    let dropped = Cell::new(0);
    let mut receiver = LineReceiver::new();
    let display = SlowDisplay {
        inner: MockDisplay::new(),
        busy_turns: 4,
    };
    let mut dispatcher = Dispatcher::new(display, MockPort::new());
    let mut serial = MockSerial::new();

    let receive = async {
        for &byte in b"HI\r\nUP\r\nLI 5\r\n" {
            if let Some(line) = receiver.on_byte_received(byte) {
                if slot.borrow().is_some() {
                    dropped.set(dropped.get() + 1);
                } else {
                    *slot.borrow_mut() = Some(line);
                }
            }
            yield_now().await;
        }
        done.set(true);
    };

    let bridge = async {
        loop {
            let line = slot.borrow_mut().take();
            match line {
                Some(line) => {
                    if let Some(ack) = dispatcher.dispatch(&line).await.ack {
                        transmit(&mut serial, ack.into()).await;
                    }
                }
                None if done.get() => break,
                None => yield_now().await,
            }
        }
    };

    block_on(join(receive, bridge));

    assert_eq!(dropped.get(), 0);
    assert_eq!(serial.text(), "HEY\r\nYES\r\nLIT\r\n");
    assert_eq!(dispatcher.port().port_value(), 5);
    assert_eq!(dispatcher.display().inner.line(DisplayRow::Bottom), "Connected.");
}

#[test]
fn test_write_display_updates_both_lines() {
    let mut bridge = Bridge::new();
    bridge.receive(b"WR Hello;World\n");
    let display = bridge.dispatcher.display();
    assert_eq!(display.line(DisplayRow::Top), "Hello");
    assert_eq!(display.line(DisplayRow::Bottom), "World");
    assert_eq!(bridge.serial.text(), "DID\r\n");
}

#[test]
fn test_malformed_payloads_still_acknowledged() {
    let mut bridge = Bridge::new();
    bridge.receive(b"WR Hello World\rLI 256\rLI abc\r");
    assert_eq!(bridge.serial.text(), "DID\r\nLIT\r\nLIT\r\n");
    assert!(bridge.dispatcher.display().untouched());
    assert!(bridge.dispatcher.port().writes.is_empty());
}

#[test]
fn test_unknown_prefix_is_silent() {
    let mut bridge = Bridge::new();
    bridge.receive(b"XY 12\r\nhello\r\n\r\n");
    assert!(bridge.serial.written.is_empty());
    assert!(bridge.dispatcher.display().untouched());
}

#[test]
fn test_overlong_line_is_truncated() {
    let mut bridge = Bridge::new();
    let mut input = b"WR ".to_vec();
    input.extend(core::iter::repeat(b'a').take(60));
    input.extend_from_slice(b";b\r\n");
    bridge.receive(&input);

    // The separator was past the 49-byte limit and got dropped
    assert_eq!(bridge.serial.text(), "DID\r\n");
    assert!(bridge.dispatcher.display().untouched());
}

#[test]
fn test_debounce_spacing() {
    let config = BridgeConfig::default();
    let ticks = MockTicks::new(5_000);
    let mut serial = MockSerial::new();
    let mut button = ButtonDebouncer::new(ButtonId::Button0, &ticks, config.buttons.debounce_ms);

    let mut edge = |serial: &mut MockSerial| {
        if let Some(id) = button.on_edge() {
            send(serial, Outbound::Button(id));
        }
    };

    edge(&mut serial);
    ticks.advance(100);
    edge(&mut serial);
    assert_eq!(serial.text(), "BTN0\r\n");

    ticks.advance(350);
    edge(&mut serial);
    assert_eq!(serial.text(), "BTN0\r\nBTN0\r\n");
}

#[test]
fn test_analog_threshold_from_baseline() {
    let config = BridgeConfig::default();
    let readings = AnalogReadings::new();
    let mut sampler = AnalogSampler::new(MockAdc::new(), &readings, &config.analog);
    let mut reporter = ChangeReporter::new(&readings, config.analog.threshold);

    // Establish a baseline of 1000 on pot 0
    sampler.start();
    sampler.adc_mut().complete(1000);
    sampler.on_conversion_complete();
    assert_eq!(reporter.poll().len(), 1);
    assert_eq!(reporter.last_reported(PotChannel::Pot0), 1000);

    readings.store(PotChannel::Pot0, 1204);
    assert!(reporter.poll().is_empty());
    assert_eq!(reporter.last_reported(PotChannel::Pot0), 1000);

    readings.store(PotChannel::Pot0, 1206);
    let reports = reporter.poll();
    assert_eq!(
        reports.as_slice(),
        &[Outbound::Pot {
            channel: PotChannel::Pot0,
            value: 1206
        }]
    );
    assert_eq!(reporter.last_reported(PotChannel::Pot0), 1206);

    let mut serial = MockSerial::new();
    send(&mut serial, reports[0]);
    assert_eq!(serial.text(), "POT0 1206\r\n");
}

#[test]
fn test_pot_report_padding() {
    let mut serial = MockSerial::new();
    send(
        &mut serial,
        Outbound::Pot {
            channel: PotChannel::Pot0,
            value: 7,
        },
    );
    send(
        &mut serial,
        Outbound::Pot {
            channel: PotChannel::Pot1,
            value: 4095,
        },
    );
    assert_eq!(serial.text(), "POT0    7\r\nPOT1 4095\r\n");
}

proptest! {
    #[test]
    fn test_set_output_drives_port(n in 0u8..=255) {
        let mut bridge = Bridge::new();
        bridge.receive(format!("LI {}\r\n", n).as_bytes());
        prop_assert_eq!(bridge.dispatcher.port().port_value(), n);
        prop_assert_eq!(bridge.serial.text(), "LIT\r\n");
    }

    #[test]
    fn test_spaced_presses_all_accepted(start in any::<u32>(), gaps in proptest::collection::vec(300u32..10_000, 1..20)) {
        let ticks = MockTicks::new(start);
        let mut button = ButtonDebouncer::new(ButtonId::Button1, &ticks, 300);
        prop_assert!(button.on_edge().is_some());
        for gap in gaps {
            ticks.advance(gap);
            prop_assert_eq!(button.on_edge(), Some(ButtonId::Button1));
        }
    }
}
