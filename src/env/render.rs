use serde::{Deserialize, Serialize};

use crate::console_interface::render_room_to_string;
use crate::core::Room;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// ASCII art in the usual Sokoban notation.
    #[default]
    Text,
    /// Dynamic grid as cell codes.
    Raw,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Observation {
    Text(String),
    Raw(Vec<Vec<u8>>),
}

/// Turns the current room into whatever the caller observes.
pub trait Render {
    type Output;

    fn render(&self, room: &Room, mode: RenderMode) -> Self::Output;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolRenderer;

impl Render for SymbolRenderer {
    type Output = Observation;

    fn render(&self, room: &Room, mode: RenderMode) -> Observation {
        match mode {
            RenderMode::Text => Observation::Text(render_room_to_string(room)),
            RenderMode::Raw => Observation::Raw(
                room.state_grid()
                    .iter()
                    .map(|row| row.iter().map(|c| c.code()).collect())
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::console_interface::parse_level;

    #[test]
    fn raw_mode_emits_cell_codes() {
        let room = parse_level("#@$.*#").unwrap();
        let observation = SymbolRenderer.render(&room, RenderMode::Raw);
        assert_eq!(observation, Observation::Raw(vec![vec![0, 5, 4, 2, 3, 0]]));
    }

    #[test]
    fn text_mode_emits_level_notation() {
        let room = parse_level("#@$.*#").unwrap();
        let observation = SymbolRenderer.render(&room, RenderMode::Text);
        assert_eq!(observation, Observation::Text("#@$.*#\n".to_string()));
    }
}
