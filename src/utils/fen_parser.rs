//! FEN-to-GameState parser.
//!
//! Only the piece-placement field is mandatory. Missing trailing fields take
//! the values of `w - - 0 1`. Positions that no legal game can reach in a way
//! that would break move generation (a side without exactly one king, pawns on
//! the first or last rank) are rejected here.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::utils::algebraic::algebraic_to_square;

const BACK_RANKS: BitBoard = BitBoard(0xFF00_0000_0000_00FF);

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.is_empty() || fields.len() > 6 {
        return Err(ChessError::InvalidFen(format!(
            "expected 1 to 6 fields, found {}",
            fields.len()
        )));
    }

    let field = |index: usize, default: &'static str| fields.get(index).copied().unwrap_or(default);

    let mut game_state = GameState::new_empty();
    parse_board(fields[0], &mut game_state)?;
    validate_board(&game_state)?;

    game_state.side_to_move = parse_side_to_move(field(1, "w"))?;
    if is_king_in_check(&game_state, game_state.side_to_move.opposite()) {
        return Err(ChessError::InvalidFen(
            "the side not to move is in check".to_owned(),
        ));
    }
    game_state.castling_rights = parse_castling_rights(field(2, "-"))?;
    game_state.en_passant_square = parse_en_passant_square(field(3, "-"), &game_state)?;

    let halfmove = field(4, "0");
    game_state.halfmove_clock = halfmove
        .parse::<u16>()
        .map_err(|_| ChessError::InvalidFen(format!("invalid halfmove clock '{halfmove}'")))?;
    let fullmove = field(5, "1");
    game_state.fullmove_number = fullmove
        .parse::<u16>()
        .map_err(|_| ChessError::InvalidFen(format!("invalid fullmove number '{fullmove}'")))?;

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen(format!(
            "board layout must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFen(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as u8;
            } else {
                let piece = Piece::from_fen_char(ch).ok_or(ChessError::InvalidPieceChar(ch))?;
                if file < 8 {
                    game_state.put_piece(piece, board_rank * 8 + file);
                }
                file += 1;
            }

            if file > 8 {
                return Err(ChessError::InvalidFen(format!(
                    "rank {} has more than 8 files",
                    board_rank + 1
                )));
            }
        }

        if file != 8 {
            return Err(ChessError::InvalidFen(format!(
                "rank {} does not sum to 8 files",
                board_rank + 1
            )));
        }
    }

    Ok(())
}

fn validate_board(game_state: &GameState) -> ChessResult<()> {
    for color in Color::ALL {
        let kings = game_state.pieces(color, PieceKind::King).count();
        if kings != 1 {
            return Err(ChessError::InvalidFen(format!(
                "{color:?} must have exactly one king, found {kings}"
            )));
        }
        if (game_state.pieces(color, PieceKind::Pawn) & BACK_RANKS).is_not_empty() {
            return Err(ChessError::InvalidFen(format!(
                "{color:?} has a pawn on the first or last rank"
            )));
        }
    }
    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::InvalidFen(format!("invalid side to move '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    castling_part.chars().try_fold(0, |rights, ch| {
        let right = match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            _ => {
                return Err(ChessError::InvalidFen(format!(
                    "invalid castling rights character '{ch}'"
                )))
            }
        };
        Ok(rights | right)
    })
}

/// The en-passant target is the empty square a pawn of the side not to move
/// just skipped: rank 6 when White is to move, rank 3 when Black is. The pawn
/// stands one square past it and the square it came from is empty.
fn parse_en_passant_square(en_passant_part: &str, game_state: &GameState) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)?;
    let pushed_by = game_state.side_to_move.opposite();
    let (expected_rank, pawn_square, origin_square) = match pushed_by {
        Color::Black => (5, square.wrapping_sub(8), square.wrapping_add(8)),
        Color::White => (2, square.wrapping_add(8), square.wrapping_sub(8)),
    };
    if square_rank(square) != expected_rank {
        return Err(ChessError::InvalidFen(format!(
            "en-passant square '{en_passant_part}' is not on the expected rank"
        )));
    }

    let occupancy = game_state.occupancy_all();
    let pawn = Piece::new(pushed_by, PieceKind::Pawn);
    if occupancy.test(square)
        || occupancy.test(origin_square)
        || game_state.piece_on(pawn_square) != Some(pawn)
    {
        return Err(ChessError::InvalidFen(format!(
            "en-passant square '{en_passant_part}' does not follow a double pawn push"
        )));
    }
    Ok(Some(square))
}
