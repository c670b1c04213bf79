//! Interactive navigation loop.
//!
//! One state machine, two input adapters: [`LineInput`] reads whole lines
//! from any `BufRead` (pipes, tests), [`KeyInput`] reads single keystrokes
//! from a raw-mode terminal. Both resolve to the same [`Command`] set, so
//! the loop itself never cares which discipline is in use.

use std::io::{self, BufRead, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use crossterm::tty::IsTty;

use super::Pager;

/// A resolved navigation command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Quit,
    /// 1-based page request.
    GoTo(usize),
    Unknown(String),
}

/// Source of navigation commands. `Ok(None)` signals end of input, which
/// the loop treats as quit. Adapters that echo (the raw-key digit
/// accumulator) write through `out`, the same writer the loop renders to.
pub trait InputSource {
    fn next_command(&mut self, out: &mut dyn Write) -> io::Result<Option<Command>>;
}

/// Resolves one trimmed, case-folded input token into a command. Both
/// input disciplines feed this: whole lines from [`LineInput`], single
/// keys from [`KeyInput`].
pub fn resolve_token(token: &str) -> Command {
    match token {
        "n" | "next" => Command::Next,
        "p" | "prev" => Command::Prev,
        "q" | "quit" | "exit" => Command::Quit,
        _ => {
            if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
                match token.parse::<usize>() {
                    Ok(n) => Command::GoTo(n),
                    Err(_) => Command::Unknown(token.to_string()),
                }
            } else {
                Command::Unknown(token.to_string())
            }
        }
    }
}

/// Line-buffered adapter over any `BufRead`.
pub struct LineInput<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn next_command(&mut self, _out: &mut dyn Write) -> io::Result<Option<Command>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(resolve_token(&line.trim().to_lowercase())))
    }
}

/// RAII guard holding the terminal in raw mode for the span of one read.
struct RawModeGuard;

impl RawModeGuard {
    fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Char-buffered adapter reading key events from the terminal.
///
/// `n`/`p`/`q` act on the keypress; a digit opens an accumulation state
/// that echoes further digits until a non-digit key resolves the number
/// as a 1-based page request.
pub struct KeyInput;

impl KeyInput {
    pub fn new() -> Self {
        KeyInput
    }

    /// Whether stdin supports raw single-character reads.
    pub fn is_supported() -> bool {
        io::stdin().is_tty()
    }

    /// Accumulates digit keys after `first`, echoing each one to the
    /// session writer. Any non-digit key ends accumulation and is
    /// consumed.
    fn read_page_number(&self, first: char, out: &mut dyn Write) -> io::Result<Option<Command>> {
        let mut digits = String::new();
        digits.push(first);
        write!(out, "{}", first)?;
        out.flush()?;

        loop {
            if let Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            {
                match code {
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        digits.push(c);
                        write!(out, "{}", c)?;
                        out.flush()?;
                    }
                    _ => break,
                }
            }
        }
        write!(out, "\r\n")?;
        out.flush()?;

        Ok(Some(resolve_token(&digits)))
    }
}

impl Default for KeyInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for KeyInput {
    fn next_command(&mut self, out: &mut dyn Write) -> io::Result<Option<Command>> {
        // Raw mode is held only while waiting for keys so page rendering
        // happens with normal line discipline.
        let _guard = RawModeGuard::new()?;
        loop {
            if let Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            {
                match code {
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(Some(Command::Quit));
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        return self.read_page_number(c, out);
                    }
                    KeyCode::Char(c) => {
                        return Ok(Some(resolve_token(
                            &c.to_ascii_lowercase().to_string(),
                        )));
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Runs the navigation loop until a quit command or end of input.
///
/// Boundary and range failures are reported and the loop continues; they
/// never change the current page.
pub fn run_loop<W: Write>(
    pager: &mut Pager,
    input: &mut dyn InputSource,
    out: &mut W,
) -> io::Result<()> {
    loop {
        pager.render_page(out)?;
        writeln!(out, "{}", pager.prompt())?;
        out.flush()?;

        let Some(command) = input.next_command(out)? else {
            break;
        };
        match command {
            Command::Next => {
                if !pager.advance() {
                    writeln!(out, "Already on last page")?;
                }
            }
            Command::Prev => {
                if !pager.go_back() {
                    writeln!(out, "Already on first page")?;
                }
            }
            Command::GoTo(n) => {
                if n == 0 || !pager.go_to(n - 1) {
                    writeln!(
                        out,
                        "Invalid page number, valid range 1-{}",
                        pager.total_pages()
                    )?;
                }
            }
            Command::Quit => break,
            Command::Unknown(token) => {
                writeln!(out, "Unknown command: {}", token)?;
            }
        }
    }
    Ok(())
}
