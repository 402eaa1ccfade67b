//! Interactive terminal session.
//!
//! Reads one password at a time without echo, checks it and prints the
//! outcome. Failures of the range API are reported and the loop continues.
//! The session ends at end of input or after two empty entries in a row.

use std::io::{self, Write};

use hibp_range::{BreachChecker, Error, PasswordHash, validate};
use tokio::runtime::Handle;
use tracing::{info, warn};

pub const PROMPT: &str = "Please enter the password you'd like to check: ";

const WELCOME: &str = "Hi there!";
const AGAIN: &str = "Try again?";

/// Where passwords come from. `Ok(None)` means end of input.
pub trait PasswordSource {
    fn read_password(&mut self, prompt: &str) -> io::Result<Option<Vec<u8>>>;
}

/// Reads from the controlling terminal with echo disabled.
pub struct TerminalInput;

impl PasswordSource for TerminalInput {
    fn read_password(&mut self, prompt: &str) -> io::Result<Option<Vec<u8>>> {
        match rpassword::prompt_password(prompt) {
            Ok(password) => Ok(Some(password.into_bytes())),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Scripted input, mostly for tests and piping.
impl<I> PasswordSource for I
where
    I: Iterator<Item = Vec<u8>>,
{
    fn read_password(&mut self, _prompt: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.next())
    }
}

/// What happened to a single entry.
#[derive(Debug)]
pub enum Outcome {
    Empty,
    Rejected,
    Found(u64),
    NotFound,
    Failed(Error),
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Self::Empty => "Did you accidentally hit enter? Press enter again to quit.".to_string(),
            Self::Rejected => "You naughty! That password has a special key.".to_string(),
            Self::Found(n) => format!("Unfortunately, it has been used {n} times"),
            Self::NotFound => "Luckily, it could not be found".to_string(),
            Self::Failed(e) => format!("Could not check the password right now: {e}"),
        }
    }
}

pub struct Session {
    checker: BreachChecker,
    debug: bool,
}

impl Session {
    pub fn new(checker: BreachChecker, debug: bool) -> Self {
        Self { checker, debug }
    }

    /// Runs the prompt loop on the current thread, driving lookups on `runtime`.
    ///
    /// Must not be called from inside an async task; use
    /// `tokio::task::spawn_blocking`.
    pub fn run<S, W>(&self, runtime: &Handle, input: &mut S, out: &mut W) -> io::Result<()>
    where
        S: PasswordSource + ?Sized,
        W: Write,
    {
        let mut greeting = WELCOME;
        let mut previous_empty = false;

        loop {
            writeln!(out, "{greeting}")?;
            writeln!(out)?;
            out.flush()?;

            let Some(password) = input.read_password(PROMPT)? else {
                info!("End of input, closing session");
                break;
            };
            writeln!(out)?;

            if password.is_empty() && previous_empty {
                info!("Second empty entry, closing session");
                break;
            }

            let hash = PasswordHash::new(&password);
            if self.debug {
                writeln!(out, "This is the bytes entered: {password:?}")?;
                writeln!(out, "Which as string is: {}", String::from_utf8_lossy(&password))?;
                writeln!(out, "And it's hashed as: {hash}")?;
            }
            writeln!(out)?;

            let outcome = self.check(runtime, &password, &hash, out)?;
            writeln!(out, "{}", outcome.message())?;

            previous_empty = matches!(outcome, Outcome::Empty);
            greeting = AGAIN;
        }

        Ok(())
    }

    fn check<W: Write>(
        &self,
        runtime: &Handle,
        password: &[u8],
        hash: &PasswordHash,
        out: &mut W,
    ) -> io::Result<Outcome> {
        match validate(password) {
            Err(Error::EmptyPassword) => return Ok(Outcome::Empty),
            Err(e) => {
                info!(error = %e, "Rejected input");
                return Ok(Outcome::Rejected);
            }
            Ok(()) => {}
        }

        writeln!(out, "Checking database...")?;
        out.flush()?;

        let outcome = match runtime.block_on(self.checker.lookup(hash)) {
            Ok(lookup) => {
                info!(hash = %lookup.hash, occurrences = lookup.occurrences, "Password checked");
                if lookup.is_breached() {
                    Outcome::Found(lookup.occurrences)
                } else {
                    Outcome::NotFound
                }
            }
            Err(e) => {
                warn!(hash = %hash, error = %e, "Password check failed");
                Outcome::Failed(e)
            }
        };
        Ok(outcome)
    }
}
