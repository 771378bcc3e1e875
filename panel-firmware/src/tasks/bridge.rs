//! Bridge task
//!
//! The main context: dispatches host lines onto the LCD and output port,
//! and polls the pot readings for changes worth reporting. LCD delays are
//! awaited, so the other tasks run while a command is being applied.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_stm32::gpio::Output;
use embassy_time::{Delay, Duration, Ticker};

use panel_core::{ChangeReporter, Dispatcher};
use panel_display::Hd44780;
use panel_hal_stm32f4::PinPort;
use panel_protocol::Outbound;

use crate::channels::{queue_outbound, LINE_CHANNEL};

/// Pot readings are checked this often
const REPORT_POLL_MS: u64 = 10;

/// Dispatcher wired to the board's LCD and output port
pub type PanelDispatcher = Dispatcher<Hd44780<Output<'static>, Delay>, PinPort<'static>>;

/// Bridge task - command dispatch and pot change reporting
#[embassy_executor::task]
pub async fn bridge_task(mut dispatcher: PanelDispatcher, mut reporter: ChangeReporter<'static>) {
    info!("Bridge task started");

    let mut ticker = Ticker::every(Duration::from_millis(REPORT_POLL_MS));

    loop {
        match select(LINE_CHANNEL.receive(), ticker.next()).await {
            Either::First(line) => {
                debug!("Dispatching {:?}", line);
                let result = dispatcher.dispatch(&line).await;
                if let Some(fault) = result.fault {
                    warn!("Display error on {:?}: {:?}", result.command, fault);
                }
                match result.ack {
                    Some(ack) => queue_outbound(Outbound::Ack(ack)),
                    None => debug!("Ignoring unrecognized line"),
                }
            }
            Either::Second(()) => {
                for report in reporter.poll() {
                    debug!("Pot change {:?}", report);
                    queue_outbound(report);
                }
            }
        }
    }
}
