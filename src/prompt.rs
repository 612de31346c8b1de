//! Line-oriented interactive prompts.
//!
//! One `ask` writes the question, flushes, then blocks on a single
//! line of input; prompts compose sequentially because each call owns
//! the reader until its line arrives. Replies are trimmed of the
//! trailing newline only. EOF and read errors come back as an empty
//! reply rather than an error: past argument parsing nothing in this
//! program is fatal.

use std::io::{self, BufRead, Stdin, Stdout, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::BufReader<Stdin>, Stdout> {
    /// Prompter wired to the process's terminal streams.
    pub fn stdin() -> Self {
        Prompter {
            input: io::BufReader::new(io::stdin()),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Print the question and wait for one line of input.
    pub fn ask(&mut self, question: &str) -> String {
        let _ = write!(self.output, "{question}");
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(_) => {
                while line.ends_with('\n') || line.ends_with('\r') {
                    line.pop();
                }
                line
            }
            Err(_) => String::new(),
        }
    }
}
