//! Host command dispatch
//!
//! Turns one complete line into display and output-port side effects and
//! the acknowledgment to send back. Malformed `WR`/`LI` payloads skip the
//! side effect but are still acknowledged; unknown prefixes produce nothing.

use panel_display::{CharacterDisplay, DisplayError};
use panel_hal::OutputPort;
use panel_protocol::{Ack, Command, Line};

/// Top line shown on connect and disconnect
pub const BANNER: &str = "Controller";

/// Bottom line shown after `HI`
pub const CONNECTED: &str = "Connected.";

/// Bottom line shown after `ES`
pub const DISCONNECTED: &str = "Disconnected";

/// Outcome of dispatching one line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dispatch {
    /// The parsed command
    pub command: Command,
    /// Acknowledgment to transmit, if any
    pub ack: Option<Ack>,
    /// Display failure while applying the command
    ///
    /// Never suppresses the acknowledgment.
    pub fault: Option<DisplayError>,
}

/// Applies host commands to the display and output port
pub struct Dispatcher<D, P> {
    display: D,
    port: P,
}

impl<D, P> Dispatcher<D, P>
where
    D: CharacterDisplay,
    P: OutputPort,
{
    pub fn new(display: D, port: P) -> Self {
        Self { display, port }
    }

    /// Parse and apply one line
    ///
    /// Display updates are awaited; the returned acknowledgment is sent
    /// only after the display and port reflect the command.
    pub async fn dispatch(&mut self, line: &Line) -> Dispatch {
        let command = Command::parse(line.as_bytes());
        let fault = self.apply(&command).await.err();
        let ack = command.ack();
        Dispatch {
            command,
            ack,
            fault,
        }
    }

    async fn apply(&mut self, command: &Command) -> Result<(), DisplayError> {
        match command {
            Command::Handshake => self.display.show(BANNER, CONNECTED).await,
            Command::Disconnect => self.display.show(BANNER, DISCONNECTED).await,
            Command::WriteDisplay(Ok(text)) => self.display.show(&text.line1, &text.line2).await,
            Command::SetOutput(Ok(value)) => {
                self.port.write_port(*value);
                Ok(())
            }
            Command::WriteDisplay(Err(_))
            | Command::SetOutput(Err(_))
            | Command::LivenessQuery
            | Command::Unrecognized => Ok(()),
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn port(&self) -> &P {
        &self.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use panel_display::{DisplayRow, MockDisplay};
    use panel_hal::mock::MockPort;
    use panel_protocol::PayloadError;

    fn dispatcher() -> Dispatcher<MockDisplay, MockPort> {
        Dispatcher::new(MockDisplay::new(), MockPort::default())
    }

    fn run(d: &mut Dispatcher<MockDisplay, MockPort>, text: &str) -> Dispatch {
        block_on(d.dispatch(&Line::from_bytes(text.as_bytes())))
    }

    #[test]
    fn test_handshake_shows_banner() {
        let mut d = dispatcher();
        let result = run(&mut d, "HI");
        assert_eq!(result.ack, Some(Ack::Hey));
        assert_eq!(result.fault, None);
        assert_eq!(d.display().line(DisplayRow::Top), "Controller");
        assert_eq!(d.display().line(DisplayRow::Bottom), "Connected.");
        assert_eq!(d.display().clears, 1);
    }

    #[test]
    fn test_disconnect_shows_banner() {
        let mut d = dispatcher();
        assert_eq!(run(&mut d, "ES").ack, Some(Ack::Sho));
        assert_eq!(d.display().line(DisplayRow::Bottom), "Disconnected");
    }

    #[test]
    fn test_liveness_has_no_side_effect() {
        let mut d = dispatcher();
        assert_eq!(run(&mut d, "UP").ack, Some(Ack::Yes));
        assert!(d.display().untouched());
        assert!(d.port().writes.is_empty());
    }

    #[test]
    fn test_write_display() {
        let mut d = dispatcher();
        let result = run(&mut d, "WR Hello;World");
        assert_eq!(result.ack, Some(Ack::Did));
        assert_eq!(d.display().line(DisplayRow::Top), "Hello");
        assert_eq!(d.display().line(DisplayRow::Bottom), "World");
    }

    #[test]
    fn test_write_display_trims_each_line() {
        let mut d = dispatcher();
        run(&mut d, "WR Hello   ;World   ");
        assert_eq!(d.display().line(DisplayRow::Top), "Hello");
        assert_eq!(d.display().line(DisplayRow::Bottom), "World");
    }

    #[test]
    fn test_write_display_without_separator_still_acks() {
        let mut d = dispatcher();
        let result = run(&mut d, "WR Hello World");
        assert_eq!(result.ack, Some(Ack::Did));
        assert_eq!(
            result.command,
            Command::WriteDisplay(Err(PayloadError::MissingSeparator))
        );
        assert!(d.display().untouched());
    }

    #[test]
    fn test_set_output() {
        let mut d = dispatcher();
        let result = run(&mut d, "LI 170");
        assert_eq!(result.ack, Some(Ack::Lit));
        assert_eq!(d.port().port_value(), 170);
    }

    #[test]
    fn test_set_output_rejected_still_acks() {
        let mut d = dispatcher();
        for text in ["LI 256", "LI abc", "LI", "LI -3"] {
            let result = run(&mut d, text);
            assert_eq!(result.ack, Some(Ack::Lit), "{}", text);
        }
        assert!(d.port().writes.is_empty());
    }

    #[test]
    fn test_unrecognized_is_silent() {
        let mut d = dispatcher();
        for text in ["hi", "XX", "H", "", "li 5"] {
            let result = run(&mut d, text);
            assert_eq!(result.ack, None, "{}", text);
            assert_eq!(result.command, Command::Unrecognized);
        }
        assert!(d.display().untouched());
        assert!(d.port().writes.is_empty());
    }

    #[test]
    fn test_display_fault_keeps_ack() {
        let mut display = MockDisplay::new();
        display.fail_with = Some(DisplayError::Bus);
        let mut d = Dispatcher::new(display, MockPort::default());

        let result = run(&mut d, "HI");
        assert_eq!(result.ack, Some(Ack::Hey));
        assert_eq!(result.fault, Some(DisplayError::Bus));
    }
}
