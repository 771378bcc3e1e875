//! Button press task
//!
//! One instance per button. Waits for the falling edge (buttons pull the
//! line low) and reports presses that pass the debouncer.

use defmt::*;
use embassy_stm32::exti::ExtiInput;

use panel_core::traits::EdgeHandler;
use panel_core::ButtonDebouncer;
use panel_hal_stm32f4::SystemTicks;
use panel_protocol::Outbound;

use crate::channels::queue_outbound;

/// Button task - reports debounced presses of one button
#[embassy_executor::task(pool_size = 4)]
pub async fn button_task(mut input: ExtiInput<'static>, mut debouncer: ButtonDebouncer<SystemTicks>) {
    info!("Button task started for {}", debouncer.button().name());

    loop {
        input.wait_for_falling_edge().await;
        match debouncer.on_edge() {
            Some(button) => {
                debug!("Button: {}", button.name());
                queue_outbound(Outbound::Button(button));
            }
            None => trace!("Bounce on {}", debouncer.button().name()),
        }
    }
}
