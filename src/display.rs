//! Plain-text rendering of a game.
//!
//! North is up: the row `y = size - 1` is drawn first. Living cells, burned
//! cells and players each get their own glyph.

use crate::board::{Board, Cell};
use crate::core::Point;
use crate::games::dog::Game;

/// Glyphs used for empty cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderStyle {
    pub living: char,
    pub burned: char,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            living: '·',
            burned: ' ',
        }
    }
}

const COMPASS: &str = "      N\n    W   E\n      S";

/// Draw just the grid, one line per row, north first.
#[must_use]
pub fn render_board(board: &Board, style: RenderStyle) -> String {
    let size = board.size() as i32;
    let mut out = String::with_capacity(board.size() * (board.size() + 1));

    for y in (0..size).rev() {
        for x in 0..size {
            let glyph = match board.cell(Point::new(x, y)) {
                Some(Cell::Occupied(id)) => board.player(id).symbol(),
                Some(Cell::Living) => style.living,
                Some(Cell::Burned) | None => style.burned,
            };
            out.push(glyph);
        }
        out.push('\n');
    }

    out
}

/// Draw the grid, the player list and a compass.
#[must_use]
pub fn render(game: &Game) -> String {
    let mut out = render_board(game.board(), RenderStyle::default());

    out.push_str("\n  Players:\n");
    for (id, player) in game.board().players().iter() {
        let marker = if game.current_player() == Some(id) { '>' } else { ' ' };
        out.push_str(&format!("  {} {}: {}\n", marker, player.symbol(), player.name()));
    }

    out.push('\n');
    out.push_str(COMPASS);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::games::dog::GameBuilder;

    fn game() -> Game {
        GameBuilder::new()
            .size(3)
            .player_names("Ada", "Bob")
            .first_player(PlayerId::FIRST)
            .build()
            .unwrap()
    }

    #[test]
    fn test_fresh_board() {
        let game = game();
        assert_eq!(
            render_board(game.board(), RenderStyle::default()),
            "··Ð\n···\n@··\n"
        );
    }

    #[test]
    fn test_burned_cells_are_blank() {
        let mut game = game();
        game.play_movestring("NE").unwrap();

        let style = RenderStyle {
            living: '.',
            burned: '#',
        };
        assert_eq!(render_board(game.board(), style), "..Ð\n.@.\n#..\n");
    }

    #[test]
    fn test_full_render_marks_current_player() {
        let game = game();
        let text = render(&game);

        assert!(text.contains("> @: Ada"));
        assert!(text.contains("  Ð: Bob"));
        assert!(text.ends_with("      S\n"));
    }
}
