use std::fs;
use std::path::Path;

use nom::bytes::complete::take_while1;
use nom::character::complete::{space0, space1};
use nom::combinator::{all_consuming, map};
use nom::multi::separated_list1;
use nom::sequence::delimited;
use nom::IResult;

use crate::board::grid::Grid;
use crate::error::Error;

fn tile(input: &str) -> IResult<&str, String> {
    map(take_while1(char::is_alphabetic), |x: &str| x.to_string())(input)
}

fn row(input: &str) -> IResult<&str, Vec<String>> {
    delimited(space0, separated_list1(space1, tile), space0)(input)
}

/// Parses a board written one row per line with tiles separated by spaces
/// or tabs, e.g.
///
/// ```text
/// T W Y  R
/// E N P  H
/// G St Qu R
/// O N T  A
/// ```
///
/// Blank lines are skipped. The shape is not checked here.
pub fn parse_board(text: &str) -> Result<Grid, Error> {
    let mut rows = vec![];
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match all_consuming(row)(line) {
            Ok((_, tiles)) => rows.push(tiles),
            Err(_) => return Err(Error::BoardSyntax {
                line: idx + 1,
                content: line.to_string(),
            }),
        }
    }
    Ok(Grid::new(rows))
}

/// Reads a board file: a JSON array of rows when the extension is `.json`,
/// the text layout of [`parse_board`] otherwise.
pub fn read_board<P: AsRef<Path>>(path: P) -> Result<Grid, Error> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if path.extension().map_or(false, |ext| ext.eq_ignore_ascii_case("json")) {
        serde_json::from_str(&text).map_err(|source| Error::BoardJson {
            path: path.to_path_buf(),
            source,
        })
    } else {
        parse_board(&text)
    }
}
