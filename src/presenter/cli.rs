#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use crate::core::{Board, Cell, GameStatus, Player};

use super::{ColumnInput, Notice, Presenter};

const RESET: &str = "\x1b[0m";
const EMPTY_SYMBOL: &str = "  ";
const MARKER: char = '\u{2B24}';

/// Terminal presenter reading from `R` and writing to `W`.
pub struct CliPresenter<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl CliPresenter<io::StdinLock<'static>, io::Stdout> {
    /// Presenter bound to the process's stdin and stdout.
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), color)
    }
}

impl<R: BufRead, W: Write> CliPresenter<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn paint(&self, text: &str, style: &str) -> String {
        if self.color {
            format!("{}{}{}", style, text, RESET)
        } else {
            text.to_string()
        }
    }

    fn player_style(player: Player) -> &'static str {
        match player {
            Player::Red => "\x1b[1;30;41m",
            Player::Black => "\x1b[1;7;37m",
        }
    }

    fn banner_style() -> &'static str {
        "\x1b[1;7;35m"
    }

    fn cell_symbol(&self, cell: Cell) -> String {
        match cell {
            Cell::Empty => EMPTY_SYMBOL.to_string(),
            Cell::Red if self.color => format!("\x1b[31m{}{}", MARKER, RESET),
            Cell::Black if self.color => format!("\x1b[7;37m{}{}", MARKER, RESET),
            Cell::Red => "R ".to_string(),
            Cell::Black => "B ".to_string(),
        }
    }

    fn print_help(&mut self, max: usize) -> io::Result<()> {
        writeln!(self.output, "\n  Type a column number from 1 to {} and press ENTER.", max)?;
        writeln!(self.output, "  Your piece falls to the lowest free cell of that column.")?;
        writeln!(self.output, "  Four in a row (across, down or diagonal) wins.")?;
        writeln!(self.output, "  Type 'q' to quit.\n")
    }
}

/// Parse a 1-based column number typed by the user.
pub fn parse_column(input: &str) -> Option<usize> {
    input.trim().parse().ok()
}

/// Render `board` as text. Row 0 is printed first, framed by column numbers.
pub fn draw_board(board: &Board, mut symbol: impl FnMut(Cell) -> String) -> String {
    let columns = board.columns();
    let dashes = "-".repeat(columns * 3 - 1);
    let border = format!("*{}*", dashes);
    let numbers: String = (1..=columns).map(|i| format!("|{:>2}", i)).collect();
    let numbers = format!("{}|", numbers);

    let mut out = String::new();
    out.push_str(&numbers);
    out.push('\n');
    out.push_str(&border);
    out.push('\n');
    for r in 0..board.rows() {
        out.push('|');
        for cell in board.row(r) {
            out.push_str(&symbol(cell));
            out.push('|');
        }
        out.push('\n');
        if r + 1 < board.rows() {
            out.push_str(&border);
            out.push('\n');
        }
    }
    out.push_str(&border);
    out.push('\n');
    out.push_str(&numbers);
    out.push('\n');
    out
}

impl<R: BufRead, W: Write> Presenter for CliPresenter<R, W> {
    fn render_board(&mut self, board: &Board) -> anyhow::Result<()> {
        let text = draw_board(board, |c| self.cell_symbol(c));
        write!(self.output, "\n{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn request_column(
        &mut self,
        player: Player,
        min: usize,
        max: usize,
    ) -> anyhow::Result<ColumnInput> {
        loop {
            let prompt = self.paint(
                &format!("{} choose column({}-{}):", player, min, max),
                Self::player_style(player),
            );
            write!(self.output, "{} ", prompt)?;
            self.output.flush()?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(ColumnInput::Quit),
            };
            if line.eq_ignore_ascii_case("help") {
                self.print_help(max)?;
                continue;
            }
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return Ok(ColumnInput::Quit);
            }
            return Ok(match parse_column(&line) {
                Some(col) => ColumnInput::Column(col),
                None => ColumnInput::Invalid,
            });
        }
    }

    fn notify(&mut self, notice: Notice) -> anyhow::Result<()> {
        match notice {
            Notice::InvalidColumn { .. } => {
                writeln!(self.output, "Invalid column number. Try again.")?
            }
            Notice::ColumnFull(_) => writeln!(self.output, "Column is full. Choose another one.")?,
        }
        Ok(())
    }

    fn announce(&mut self, status: GameStatus) -> anyhow::Result<()> {
        let line = match status {
            GameStatus::Won(player) => {
                self.paint(&format!("{} won!", player), Self::player_style(player))
            }
            GameStatus::Draw => self.paint("The board is full. No winner.", Self::banner_style()),
            GameStatus::InProgress => return Ok(()),
        };
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn acknowledge_game_over(&mut self) -> anyhow::Result<bool> {
        let prompt = self.paint(
            "Press ENTER to start another game ('q' to quit)!",
            Self::banner_style(),
        );
        write!(self.output, "{} ", prompt)?;
        self.output.flush()?;
        Ok(match self.read_line()? {
            None => false,
            Some(line) => !(line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit")),
        })
    }
}
