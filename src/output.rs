//! Output formatting for command results
//!
//! Plain output is one labelled line per value, coloured with termcolor.
//! JSON output collects every value into one object printed at the end.

use crate::index::suffix_tree::Edge;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes results to stdout as plain lines or a single JSON object
pub struct Printer {
    stdout: StandardStream,
    json: Option<Map<String, Value>>,
}

impl Printer {
    pub fn new(color: ColorChoice, json: bool) -> Self {
        Self {
            stdout: StandardStream::stdout(color),
            json: json.then(Map::new),
        }
    }

    /// Record `value` under `label` in JSON mode, or run `plain` otherwise
    fn emit<T: Serialize>(
        &mut self,
        label: &str,
        value: &T,
        plain: impl FnOnce(&mut StandardStream) -> io::Result<()>,
    ) -> io::Result<()> {
        match &mut self.json {
            Some(map) => {
                let value = serde_json::to_value(value).map_err(io::Error::other)?;
                map.insert(label.to_string(), value);
                Ok(())
            }
            None => plain(&mut self.stdout),
        }
    }

    /// `label: v0 v1 v2 ...`
    pub fn list<T: Serialize + ToString>(&mut self, label: &str, values: &[T]) -> io::Result<()> {
        self.emit(label, &values, |out| {
            write_label(out, label)?;
            let line: Vec<String> = values.iter().map(ToString::to_string).collect();
            writeln!(out, "{}", line.join(" "))
        })
    }

    /// `label: value`
    pub fn value<T: Serialize + ToString>(&mut self, label: &str, value: &T) -> io::Result<()> {
        self.emit(label, value, |out| {
            write_label(out, label)?;
            out.set_color(ColorSpec::new().set_bold(true))?;
            write!(out, "{}", value.to_string())?;
            out.reset()?;
            writeln!(out)
        })
    }

    /// Boolean answer, `yes` in green or `no` in red
    pub fn answer(&mut self, label: &str, yes: bool) -> io::Result<()> {
        self.emit(label, &yes, |out| {
            write_label(out, label)?;
            let (colour, word) = if yes {
                (Color::Green, "yes")
            } else {
                (Color::Red, "no")
            };
            out.set_color(ColorSpec::new().set_fg(Some(colour)).set_bold(true))?;
            write!(out, "{}", word)?;
            out.reset()?;
            writeln!(out)
        })
    }

    /// A byte string, lossily decoded; `None` prints as `-`
    pub fn bytes(&mut self, label: &str, value: Option<&[u8]>) -> io::Result<()> {
        let text = value.map(|v| String::from_utf8_lossy(v).into_owned());
        self.emit(label, &text, |out| {
            write_label(out, label)?;
            match &text {
                Some(text) => {
                    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
                    write!(out, "{}", text)?;
                    out.reset()?;
                }
                None => write!(out, "-")?,
            }
            writeln!(out)
        })
    }

    /// One `parent origin start end` line per edge
    pub fn edges(&mut self, label: &str, edges: &[Edge]) -> io::Result<()> {
        self.emit(label, &edges, |out| {
            write_label(out, label)?;
            writeln!(out)?;
            for edge in edges {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                write!(out, "{}", edge.parent)?;
                out.reset()?;
                writeln!(
                    out,
                    " {} {} {}",
                    edge.origin.index(),
                    edge.start,
                    edge.end
                )?;
            }
            Ok(())
        })
    }

    /// Any serializable value, pretty-printed as JSON in plain mode too
    pub fn structured<T: Serialize>(&mut self, label: &str, value: &T) -> io::Result<()> {
        self.emit(label, value, |out| {
            write_label(out, label)?;
            let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
            writeln!(out, "{}", text)
        })
    }

    /// Print the collected JSON object, if any
    pub fn finish(mut self) -> io::Result<()> {
        if let Some(map) = self.json.take() {
            serde_json::to_writer_pretty(&mut self.stdout, &Value::Object(map))
                .map_err(io::Error::other)?;
            writeln!(self.stdout)?;
        }
        self.stdout.flush()
    }
}

fn write_label(out: &mut StandardStream, label: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
    write!(out, "{}", label)?;
    out.reset()?;
    write!(out, ": ")
}
