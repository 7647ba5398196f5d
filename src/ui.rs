#![cfg(feature = "std")]

//! Text console: rendering battlefields and prompting the human player.

use std::fmt::Write as _;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::string::String;

use crate::core::{battlefield::Battlefield, common::CoordinateError, config::ALPHABET, grid::Vector};

const HIT: char = 'X';
const MISS: char = 'o';
const SHIP: char = '#';
const WATER: char = '.';

/// Display and prompt service used by [`crate::HumanPlayer`].
pub trait Console {
    fn display_title(&mut self) -> io::Result<()>;

    fn display_message(&mut self, message: &str) -> io::Result<()>;

    /// Draw the opponent's battlefield above the player's own. The
    /// opponent's ships only show with `reveal`.
    fn display_battlefields(
        &mut self,
        targeted: &Battlefield,
        own: &Battlefield,
        reveal: bool,
    ) -> io::Result<()>;

    fn display_remaining(
        &mut self,
        ships_left: usize,
        ships_total: usize,
        turns_left: usize,
    ) -> io::Result<()>;

    /// Ask for a coordinate on `target` until a valid, unshot one is given.
    fn prompt_coordinates(&mut self, target: &Battlefield) -> io::Result<Vector>;

    /// Ask a yes/no question until answered.
    fn prompt_bool(&mut self, question: &str) -> io::Result<bool>;
}

/// Draw a battlefield as a grid of characters, one line per row.
///
/// `X` marks a hit, `o` a miss, `#` an untouched ship part (only with
/// `show_ships`) and `.` open water.
pub fn render_battlefield(battlefield: &Battlefield, show_ships: bool) -> String {
    let shape = battlefield.shape();
    let mut out = String::from("    ");
    for letter in ALPHABET.chars().take(shape.width()) {
        let _ = write!(out, " {}", letter);
    }
    out.push('\n');
    for row in 0..shape.height() {
        let _ = write!(out, "{:>3} ", row);
        for col in 0..shape.width() {
            let coord = Vector::new(col, row);
            let shot = battlefield.has_been_shot(&coord);
            let ship = battlefield.ship_at(&coord).is_some();
            let mark = match (shot, ship) {
                (true, true) => HIT,
                (true, false) => MISS,
                (false, true) if show_ships => SHIP,
                _ => WATER,
            };
            let _ = write!(out, " {}", mark);
        }
        out.push('\n');
    }
    out
}

/// Decode `input` as a target on `battlefield`.
pub fn parse_target(input: &str, battlefield: &Battlefield) -> Result<Vector, CoordinateError> {
    let coord: Vector = input.parse()?;
    battlefield.check_target(&coord)?;
    Ok(coord)
}

/// [`Console`] over any line reader and writer.
pub struct ConsoleDisplay<R, W> {
    input: R,
    output: W,
}

impl ConsoleDisplay<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleDisplay<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Console for ConsoleDisplay<R, W> {
    fn display_title(&mut self) -> io::Result<()> {
        writeln!(self.output, "╔══════════════════════════════════╗")?;
        writeln!(self.output, "║           BATTLESHIPS            ║")?;
        writeln!(self.output, "╚══════════════════════════════════╝")?;
        writeln!(self.output, "Hit: 0  Hot: 1-2  Warm: 3-4  Cold: 5+")?;
        writeln!(self.output)
    }

    fn display_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    fn display_battlefields(
        &mut self,
        targeted: &Battlefield,
        own: &Battlefield,
        reveal: bool,
    ) -> io::Result<()> {
        writeln!(self.output, "\n{}:", targeted.id())?;
        write!(self.output, "{}", render_battlefield(targeted, reveal))?;
        writeln!(self.output, "\n{} (you):", own.id())?;
        write!(self.output, "{}", render_battlefield(own, true))
    }

    fn display_remaining(
        &mut self,
        ships_left: usize,
        ships_total: usize,
        turns_left: usize,
    ) -> io::Result<()> {
        writeln!(
            self.output,
            "Ships remaining: {}/{}  Turns remaining: {}",
            ships_left, ships_total, turns_left
        )
    }

    fn prompt_coordinates(&mut self, target: &Battlefield) -> io::Result<Vector> {
        loop {
            let line = self.read_line("Enter target (e.g. a0): ")?;
            match parse_target(&line, target) {
                Ok(coord) => return Ok(coord),
                Err(e) => {
                    log::debug!("rejected target {:?}: {}", line.trim(), e);
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    fn prompt_bool(&mut self, question: &str) -> io::Result<bool> {
        loop {
            let line = self.read_line(&std::format!("{} (y/n): ", question))?;
            match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer y or n")?,
            }
        }
    }
}
