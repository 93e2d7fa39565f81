//! FEN-to-Board parser.
//!
//! Builds a fully-populated board from a Forsyth-Edwards Notation string,
//! including piece bitboards, rights, clocks, and occupancies. Positions
//! without exactly one king per side are refused.

use crate::chess_errors::FenError;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::en_passant_rank;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<Board, FenError> {
    let mut parts = fen.split_whitespace();
    let mut field = |name: &'static str| parts.next().ok_or(FenError::MissingField(name));

    let board_part = field("board layout")?;
    let side_part = field("side-to-move")?;
    let castling_part = field("castling rights")?;
    let en_passant_part = field("en-passant square")?;
    let halfmove_part = field("halfmove clock")?;
    let fullmove_part = field("fullmove number")?;

    if let Some(extra) = parts.next() {
        return Err(FenError::TrailingField(extra.to_owned()));
    }

    let mut board = Board::new_empty();

    parse_placement(board_part, &mut board)?;
    board.side_to_move = parse_side_to_move(side_part)?;
    board.castling_rights = parse_castling_rights(castling_part)?;
    board.en_passant_square = parse_en_passant_square(en_passant_part, board.side_to_move)?;
    board.halfmove_clock = parse_counter("halfmove clock", halfmove_part)?;
    board.fullmove_number = parse_counter("fullmove number", fullmove_part)?;

    board.recalc_occupancy();

    for color in Color::BOTH {
        if board.pieces_of(color, PieceKind::King).count_ones() != 1 {
            return Err(FenError::KingCount);
        }
    }

    Ok(board)
}

fn parse_placement(board_part: &str, board: &mut Board) -> Result<(), FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::PieceChar(ch));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(FenError::RankWidth(rank as usize + 1));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(FenError::PieceChar(ch))?;
            let square = Square::new(file, rank).ok_or(FenError::RankWidth(rank as usize + 1))?;
            board.put_piece(piece, square);
            file += 1;
        }

        if file != 8 {
            return Err(FenError::RankWidth(rank as usize + 1));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::SideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, FenError> {
    if castling_part == "-" {
        return Ok(0);
    }

    castling_part.chars().try_fold(0, |rights, ch| {
        let right = match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            _ => return Err(FenError::CastlingChar(ch)),
        };
        Ok(rights | right)
    })
}

/// The target lies behind a pawn the opponent just pushed two squares, so it
/// must be on the sixth rank for white to move and the third for black.
fn parse_en_passant_square(en_passant_part: &str, side_to_move: Color) -> Result<Option<Square>, FenError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| FenError::EnPassant(en_passant_part.to_owned()))?;
    if square.rank() != en_passant_rank(side_to_move) {
        return Err(FenError::EnPassant(en_passant_part.to_owned()));
    }
    Ok(Some(square))
}

fn parse_counter(field: &'static str, text: &str) -> Result<u16, FenError> {
    text.parse::<u16>().map_err(|_| FenError::Counter {
        field,
        value: text.to_owned(),
    })
}
