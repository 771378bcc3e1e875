//! Panel Link - host panel bridge firmware
//!
//! Bridges a host terminal on USART1 with the local panel: two pots, four
//! buttons, an 8-bit output port and a 16x2 character LCD. Runs on the
//! STM32F446RE (Nucleo-F446RE).
//!
//! Pin map:
//!
//! | Signal          | Pin                    |
//! |-----------------|------------------------|
//! | USART1 TX / RX  | PA9 / PA10             |
//! | Pot 0 / Pot 1   | PA5 / PA6              |
//! | Buttons 0-3     | PA0-PA3 (pull-up)      |
//! | Output port     | PB0-PB7                |
//! | LCD RS / E      | PC14 / PC15            |
//! | LCD D4-D7       | PB8, PB9, PA12, PA15   |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::exti::{self, ExtiInput};
use embassy_stm32::gpio::{Flex, Level, Output, Pull, Speed};
use embassy_stm32::peripherals::USART1;
use embassy_stm32::usart::{self, Uart};
use embassy_stm32::{bind_interrupts, interrupt};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use panel_core::{ButtonDebouncer, ChangeReporter, Dispatcher};
use panel_display::Hd44780;
use panel_hal_stm32f4::uart::usart_config;
use panel_hal_stm32f4::{PinPort, RegisterAdc, SerialPort, SystemTicks};
use panel_protocol::ButtonId;

mod channels;
mod config;
mod tasks;

/// DMA ring for host bytes: about 22 ms of back-to-back data at 115200 baud
const RX_RING_SIZE: usize = 256;

static RX_RING: StaticCell<[u8; RX_RING_SIZE]> = StaticCell::new();

bind_interrupts!(struct Irqs {
    USART1 => usart::InterruptHandler<USART1>;
    EXTI0 => exti::InterruptHandler<interrupt::typelevel::EXTI0>;
    EXTI1 => exti::InterruptHandler<interrupt::typelevel::EXTI1>;
    EXTI2 => exti::InterruptHandler<interrupt::typelevel::EXTI2>;
    EXTI3 => exti::InterruptHandler<interrupt::typelevel::EXTI3>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Panel Link firmware starting...");

    let p = embassy_stm32::init(Default::default());
    info!("Peripherals initialized");

    let config = config::bridge_config();
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e.describe());
        halt();
    }
    info!("Configuration: {:?}", config);

    // Host link (PA9=TX, PA10=RX)
    let uart_config = usart_config(config.serial.baudrate);
    let uart = match Uart::new(
        p.USART1,
        p.PA10, // RX
        p.PA9,  // TX
        Irqs,
        p.DMA2_CH7,
        p.DMA2_CH2,
        uart_config,
    ) {
        Ok(uart) => uart,
        Err(e) => {
            error!("Failed to initialize USART1: {:?}", e);
            halt();
        }
    };
    let (tx, rx) = uart.split();
    let port = SerialPort::new(tx, config.serial.tx_timeout_ms);
    let rx = rx.into_ring_buffered(RX_RING.init([0; RX_RING_SIZE]));
    info!("USART1 initialized at {} baud", config.serial.baudrate);

    // Character LCD, 4-bit mode
    let mut lcd = Hd44780::new(
        Output::new(p.PC14, Level::Low, Speed::Low),
        Output::new(p.PC15, Level::Low, Speed::Low),
        [
            Output::new(p.PB8, Level::Low, Speed::Low),
            Output::new(p.PB9, Level::Low, Speed::Low),
            Output::new(p.PA12, Level::Low, Speed::Low),
            Output::new(p.PA15, Level::Low, Speed::Low),
        ],
        Delay,
    );
    if let Err(e) = lcd.init().await {
        error!("Failed to initialize LCD: {:?}", e);
        halt();
    }
    info!("LCD initialized");

    // Output port on PB0-PB7
    let output = PinPort::new([
        Output::new(p.PB0, Level::Low, Speed::Low),
        Output::new(p.PB1, Level::Low, Speed::Low),
        Output::new(p.PB2, Level::Low, Speed::Low),
        Output::new(p.PB3, Level::Low, Speed::Low),
        Output::new(p.PB4, Level::Low, Speed::Low),
        Output::new(p.PB5, Level::Low, Speed::Low),
        Output::new(p.PB6, Level::Low, Speed::Low),
        Output::new(p.PB7, Level::Low, Speed::Low),
    ]);

    // Pots on PA5/PA6, sampled from the ADC interrupt
    let adc = RegisterAdc::new(
        p.ADC1,
        [Flex::new(p.PA5), Flex::new(p.PA6)],
        [config.analog.pot0_input, config.analog.pot1_input],
    );
    tasks::start_sampling(panel_core::AnalogSampler::new(
        adc,
        &tasks::analog::READINGS,
        &config.analog,
    ));

    // Buttons on PA0-PA3, active low
    let buttons = [
        ExtiInput::new(p.PA0, p.EXTI0, Pull::Up, Irqs),
        ExtiInput::new(p.PA1, p.EXTI1, Pull::Up, Irqs),
        ExtiInput::new(p.PA2, p.EXTI2, Pull::Up, Irqs),
        ExtiInput::new(p.PA3, p.EXTI3, Pull::Up, Irqs),
    ];

    let dispatcher = Dispatcher::new(lcd, output);
    let reporter = ChangeReporter::new(&tasks::analog::READINGS, config.analog.threshold);

    // Spawn tasks
    spawner.spawn(unwrap!(tasks::serial_tx_task(port)));
    spawner.spawn(unwrap!(tasks::serial_rx_task(rx)));
    spawner.spawn(unwrap!(tasks::bridge_task(dispatcher, reporter)));
    for (button, input) in ButtonId::ALL.into_iter().zip(buttons) {
        let debouncer = ButtonDebouncer::new(button, SystemTicks, config.buttons.debounce_ms);
        spawner.spawn(unwrap!(tasks::button_task(input, debouncer)));
    }

    info!("All tasks spawned, firmware running");
}

/// Stop for good after a fatal initialization failure
fn halt() -> ! {
    cortex_m::interrupt::disable();
    loop {
        cortex_m::asm::nop();
    }
}
