use crate::t_diagnostic::Diagnostic;
use crate::t_types::TokenRecord;
use std::io::{self, Write};

/// Writes `message line column` on one line.
pub fn write_diagnostic<W: Write>(out: &mut W, diagnostic: &Diagnostic) -> io::Result<()> {
    writeln!(out, "{}", diagnostic)
}

fn declaration_line(token: &TokenRecord) -> String {
    let kind = token
        .token_type
        .as_ref()
        .map(|t| t.semantic_name())
        .unwrap_or("token");
    let mut line = format!("{} {}", token.location.start, kind);
    if !token.modifiers().is_empty() {
        let modifiers: Vec<&str> = token
            .modifiers()
            .iter()
            .map(|m| m.semantic_name())
            .collect();
        line.push_str(&format!(" [{}]", modifiers.join(", ")));
    }
    line
}

/// One `line:column kind [modifiers]` line per declaration site.
pub fn write_declarations<'a, W, I>(out: &mut W, tokens: I, color: bool) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a TokenRecord>,
{
    for token in tokens {
        let line = declaration_line(token);
        if color {
            writeln!(out, "{}", paint(&line))?;
        } else {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

#[cfg(feature = "color")]
fn paint(line: &str) -> String {
    match line.split_once(' ') {
        Some((position, rest)) => format!(
            "{} {}",
            nu_ansi_term::Color::LightCyan.paint(position),
            nu_ansi_term::Style::new().bold().paint(rest)
        ),
        None => line.to_string(),
    }
}

#[cfg(not(feature = "color"))]
fn paint(line: &str) -> String {
    line.to_string()
}

/// Declaration sites as a pretty JSON array.
pub fn write_declarations_json<'a, W, I>(out: &mut W, tokens: I) -> anyhow::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a TokenRecord>,
{
    let tokens: Vec<&TokenRecord> = tokens.into_iter().collect();
    serde_json::to_writer_pretty(&mut *out, &tokens)?;
    writeln!(out)?;
    Ok(())
}
