//! Parses one line of the UCI-style command loop (§6.1) into a [`Command`],
//! without touching engine state — `mod.rs` interprets the parsed command
//! against the running [`super::super::engine`].

use std::time::Duration;

use crate::error::UciCommandError;
use crate::types::Color;

/// The resolved time budget requested by a `go` command (§6.1).
#[derive(Clone, Debug, PartialEq)]
pub enum GoLimit {
    Depth(i32),
    MoveTime(Duration),
    /// `rtime`/`btime`/`ytime`/`gtime` plus increments, indexed by [`Color::index`].
    TimeControl { remaining: [Option<Duration>; 4], increment: [Duration; 4], moves_to_go: Option<u32> },
    Nodes(u64),
    /// Search until a mate in at most this many moves is found, or `stop`.
    Mate(i32),
    Infinite,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct GoRequest {
    pub limit: Option<GoLimit>,
    pub ponder: bool,
    /// Raw move-notation tokens from `searchmoves`, resolved against the
    /// current position by the caller (parsing here has no board to check
    /// legality against).
    pub search_moves: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PositionSpec {
    StartPos,
    Fen(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Uci,
    Debug(bool),
    IsReady,
    SetOption { name: String, value: String },
    UciNewGame,
    Position { spec: PositionSpec, moves: Vec<String> },
    Go(GoRequest),
    Stop,
    PonderHit,
    Quit,
}

/// Maps a UCI time-field prefix (`r`, `b`, `y`, `g`) to its [`Color`].
fn color_for_time_field(field: &str) -> Option<Color> {
    let first = field.chars().next()?;
    Color::from_char(first)
}

/// Parses one whitespace-split command line. Returns
/// [`UciCommandError::EmptyCommand`] for a blank line and
/// [`UciCommandError::UnknownCommand`] for an unrecognized first token.
pub fn parse(line: &str) -> Result<Command, UciCommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = tokens.first() else { return Err(UciCommandError::EmptyCommand) };

    match head {
        "uci" => Ok(Command::Uci),
        "isready" => Ok(Command::IsReady),
        "ucinewgame" => Ok(Command::UciNewGame),
        "stop" => Ok(Command::Stop),
        "ponderhit" => Ok(Command::PonderHit),
        "quit" => Ok(Command::Quit),
        "debug" => match tokens.get(1) {
            Some(&"on") => Ok(Command::Debug(true)),
            Some(&"off") => Ok(Command::Debug(false)),
            _ => Err(UciCommandError::MissingArgument { command: "debug", argument: "on|off" }),
        },
        "setoption" => parse_setoption(&tokens),
        "position" => parse_position(&tokens),
        "go" => Ok(Command::Go(parse_go(&tokens)?)),
        other => Err(UciCommandError::UnknownCommand { command: other.to_string() }),
    }
}

fn parse_setoption(tokens: &[&str]) -> Result<Command, UciCommandError> {
    let name_pos = tokens.iter().position(|&t| t == "name");
    let value_pos = tokens.iter().position(|&t| t == "value");
    let Some(name_pos) = name_pos else {
        return Err(UciCommandError::MissingArgument { command: "setoption", argument: "name" });
    };
    let name_end = value_pos.unwrap_or(tokens.len());
    if name_end <= name_pos + 1 {
        return Err(UciCommandError::MissingArgument { command: "setoption", argument: "name" });
    }
    let name = tokens[name_pos + 1..name_end].join(" ");
    let value = match value_pos {
        Some(vp) if vp + 1 < tokens.len() => tokens[vp + 1..].join(" "),
        _ => String::new(),
    };
    Ok(Command::SetOption { name, value })
}

fn parse_position(tokens: &[&str]) -> Result<Command, UciCommandError> {
    let mut i = 1;
    let Some(&kind) = tokens.get(i) else {
        return Err(UciCommandError::MissingArgument { command: "position", argument: "startpos|fen" });
    };
    let spec = match kind {
        "startpos" => {
            i += 1;
            PositionSpec::StartPos
        }
        "fen" => {
            // The FEN dialect (§6.2) has 7 dash-separated fields with no
            // internal whitespace, so it's always exactly one token.
            let Some(&fen) = tokens.get(i + 1) else {
                return Err(UciCommandError::MissingArgument { command: "position", argument: "fen" });
            };
            i += 2;
            PositionSpec::Fen(fen.to_string())
        }
        other => {
            return Err(UciCommandError::InvalidArgument { command: "position", token: other.to_string() })
        }
    };

    let mut moves = Vec::new();
    if tokens.get(i) == Some(&"moves") {
        i += 1;
        moves.extend(tokens[i..].iter().map(|s| s.to_string()));
    }

    Ok(Command::Position { spec, moves })
}

fn parse_go(tokens: &[&str]) -> Result<GoRequest, UciCommandError> {
    let mut request = GoRequest::default();
    let mut remaining = [None; 4];
    let mut increment = [Duration::ZERO; 4];
    let mut moves_to_go = None;
    let mut saw_time_control = false;

    let mut i = 1;
    while i < tokens.len() {
        let token = tokens[i];
        match token {
            "depth" => {
                let value = parse_next_i32(tokens, &mut i, "go", "depth")?;
                request.limit = Some(GoLimit::Depth(value));
            }
            "movetime" => {
                let ms = parse_next_u64(tokens, &mut i, "go", "movetime")?;
                request.limit = Some(GoLimit::MoveTime(Duration::from_millis(ms)));
            }
            "nodes" => {
                let n = parse_next_u64(tokens, &mut i, "go", "nodes")?;
                request.limit = Some(GoLimit::Nodes(n));
            }
            "mate" => {
                let value = parse_next_i32(tokens, &mut i, "go", "mate")?;
                request.limit = Some(GoLimit::Mate(value));
            }
            "moves_to_go" => {
                moves_to_go = Some(parse_next_u64(tokens, &mut i, "go", "moves_to_go")? as u32);
            }
            "infinite" => {
                request.limit = Some(GoLimit::Infinite);
                i += 1;
            }
            "ponder" => {
                request.ponder = true;
                i += 1;
            }
            "searchmoves" => {
                i += 1;
                while i < tokens.len() && !is_go_keyword(tokens[i]) {
                    request.search_moves.push(tokens[i].to_string());
                    i += 1;
                }
            }
            time_field if time_field.ends_with("time") && time_field.len() == 5 => {
                let ms = parse_next_u64(tokens, &mut i, "go", "<color>time")?;
                if let Some(color) = color_for_time_field(time_field) {
                    remaining[color.index()] = Some(Duration::from_millis(ms));
                    saw_time_control = true;
                }
            }
            inc_field if inc_field.ends_with("inc") && inc_field.len() == 4 => {
                let ms = parse_next_u64(tokens, &mut i, "go", "<color>inc")?;
                if let Some(color) = color_for_time_field(inc_field) {
                    increment[color.index()] = Duration::from_millis(ms);
                }
            }
            _ => i += 1,
        }
    }

    if request.limit.is_none() && saw_time_control {
        request.limit = Some(GoLimit::TimeControl { remaining, increment, moves_to_go });
    }

    Ok(request)
}

fn is_go_keyword(token: &str) -> bool {
    matches!(
        token,
        "depth"
            | "movetime"
            | "nodes"
            | "mate"
            | "moves_to_go"
            | "infinite"
            | "ponder"
            | "searchmoves"
    ) || (token.ends_with("time") && token.len() == 5)
        || (token.ends_with("inc") && token.len() == 4)
}

fn parse_next_i32(
    tokens: &[&str],
    i: &mut usize,
    command: &'static str,
    argument: &'static str,
) -> Result<i32, UciCommandError> {
    let Some(token) = tokens.get(*i + 1) else {
        return Err(UciCommandError::MissingArgument { command, argument });
    };
    let value = token.parse::<i32>().map_err(|_| UciCommandError::InvalidArgument {
        command,
        token: (*token).to_string(),
    })?;
    *i += 2;
    Ok(value)
}

fn parse_next_u64(
    tokens: &[&str],
    i: &mut usize,
    command: &'static str,
    argument: &'static str,
) -> Result<u64, UciCommandError> {
    let Some(token) = tokens.get(*i + 1) else {
        return Err(UciCommandError::MissingArgument { command, argument });
    };
    let value = token.parse::<u64>().map_err(|_| UciCommandError::InvalidArgument {
        command,
        token: (*token).to_string(),
    })?;
    *i += 2;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_is_an_error() {
        assert_eq!(parse("   "), Err(UciCommandError::EmptyCommand));
    }

    #[test]
    fn unknown_first_token_is_an_error() {
        assert_eq!(
            parse("frobnicate"),
            Err(UciCommandError::UnknownCommand { command: "frobnicate".to_string() })
        );
    }

    #[test]
    fn parses_position_startpos_with_moves() {
        let cmd = parse("position startpos moves h3-h4 c7-c6").unwrap();
        assert_eq!(
            cmd,
            Command::Position {
                spec: PositionSpec::StartPos,
                moves: vec!["h3-h4".to_string(), "c7-c6".to_string()]
            }
        );
    }

    #[test]
    fn parses_go_depth() {
        let cmd = parse("go depth 6").unwrap();
        assert_eq!(cmd, Command::Go(GoRequest { limit: Some(GoLimit::Depth(6)), ..Default::default() }));
    }

    #[test]
    fn parses_go_movetime() {
        let cmd = parse("go movetime 2500").unwrap();
        assert_eq!(
            cmd,
            Command::Go(GoRequest {
                limit: Some(GoLimit::MoveTime(Duration::from_millis(2500))),
                ..Default::default()
            })
        );
    }

    #[test]
    fn parses_per_color_time_control() {
        let cmd = parse("go rtime 60000 binc 500 ytime 45000 gtime 30000").unwrap();
        let Command::Go(req) = cmd else { panic!("expected Go") };
        let Some(GoLimit::TimeControl { remaining, increment, .. }) = req.limit else {
            panic!("expected TimeControl")
        };
        assert_eq!(remaining[Color::Red.index()], Some(Duration::from_millis(60000)));
        assert_eq!(remaining[Color::Yellow.index()], Some(Duration::from_millis(45000)));
        assert_eq!(remaining[Color::Green.index()], Some(Duration::from_millis(30000)));
        assert_eq!(increment[Color::Blue.index()], Duration::from_millis(500));
    }

    #[test]
    fn parses_setoption() {
        let cmd = parse("setoption name Hash value 128").unwrap();
        assert_eq!(cmd, Command::SetOption { name: "Hash".to_string(), value: "128".to_string() });
    }

    #[test]
    fn searchmoves_stops_at_the_next_keyword() {
        let cmd = parse("go searchmoves h3-h4 c7-c6 depth 4").unwrap();
        let Command::Go(req) = cmd else { panic!("expected Go") };
        assert_eq!(req.search_moves, vec!["h3-h4".to_string(), "c7-c6".to_string()]);
        assert_eq!(req.limit, Some(GoLimit::Depth(4)));
    }
}
