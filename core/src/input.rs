//! Translation of raw host input into engine commands.
//!
//! Hosts draw every cell as a square panel followed by a small gap, so a pixel
//! maps back to a cell by dividing by the panel pitch. Pixels left of or above
//! the board, or past its last row or column, decode to nothing.

use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelGeometry {
    /// Side of one cell panel, in pixels
    pub panel_size: u16,
    /// Gap between two panels, in pixels
    pub spacing: u16,
}

impl PanelGeometry {
    pub const fn new(panel_size: u16, spacing: u16) -> Self {
        Self {
            panel_size,
            spacing,
        }
    }

    pub const fn pitch(&self) -> u32 {
        self.panel_size as u32 + self.spacing as u32
    }

    /// Cell under the pixel `(x, y)` on a board of dimensions `size`.
    pub fn cell_at_pixel(&self, (x, y): (i32, i32), size: Coord2) -> Option<Coord2> {
        let pitch = self.pitch();
        if pitch == 0 {
            return None;
        }

        let x = u32::try_from(x).ok()? / pitch;
        let y = u32::try_from(y).ok()? / pitch;
        let coords = (Coord::try_from(x).ok()?, Coord::try_from(y).ok()?);
        in_bounds(coords, size).then_some(coords)
    }

    /// Top-left pixel of the panel for `coords`.
    pub fn panel_origin(&self, (x, y): Coord2) -> (u32, u32) {
        (u32::from(x) * self.pitch(), u32::from(y) * self.pitch())
    }

    pub fn decode(&self, event: InputEvent, size: Coord2) -> Option<Command> {
        match event {
            InputEvent::Pointer { x, y, button } => {
                let coords = self.cell_at_pixel((x, y), size);
                if coords.is_none() {
                    log::trace!("pointer ({}, {}) is off the board", x, y);
                }
                let coords = coords?;
                Some(match button {
                    PointerButton::Primary => Command::Reveal(coords),
                    PointerButton::Secondary => Command::ToggleFlag(coords),
                })
            }
            InputEvent::Restart => Some(Command::Restart),
            InputEvent::Quit => Some(Command::Quit),
        }
    }
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self::new(32, 1)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Raw event as delivered by a host, positions in pixels relative to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Pointer {
        x: i32,
        y: i32,
        button: PointerButton,
    },
    Restart,
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Reveal(Coord2),
    ToggleFlag(Coord2),
    Restart,
    /// Never touches the board, handed back to the host
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Reveal(RevealOutcome),
    Mark(MarkOutcome),
    Restarted,
    Quit,
}

impl CommandOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Reveal(outcome) => outcome.has_update(),
            Self::Mark(outcome) => outcome.has_update(),
            Self::Restarted => true,
            Self::Quit => false,
        }
    }
}
