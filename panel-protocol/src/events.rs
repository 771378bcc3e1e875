//! Input sources reported to the host

/// Front panel push button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    Button0,
    Button1,
    Button2,
    Button3,
}

impl ButtonId {
    /// All buttons in report order
    pub const ALL: [ButtonId; 4] = [
        ButtonId::Button0,
        ButtonId::Button1,
        ButtonId::Button2,
        ButtonId::Button3,
    ];

    /// Wire name, e.g. `BTN2`
    pub fn name(self) -> &'static str {
        match self {
            ButtonId::Button0 => "BTN0",
            ButtonId::Button1 => "BTN1",
            ButtonId::Button2 => "BTN2",
            ButtonId::Button3 => "BTN3",
        }
    }
}

/// Potentiometer channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PotChannel {
    Pot0,
    Pot1,
}

impl PotChannel {
    pub const ALL: [PotChannel; 2] = [PotChannel::Pot0, PotChannel::Pot1];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The channel sampled after this one
    pub fn other(self) -> Self {
        match self {
            PotChannel::Pot0 => PotChannel::Pot1,
            PotChannel::Pot1 => PotChannel::Pot0,
        }
    }

    /// Wire name, e.g. `POT1`
    pub fn name(self) -> &'static str {
        match self {
            PotChannel::Pot0 => "POT0",
            PotChannel::Pot1 => "POT1",
        }
    }
}
