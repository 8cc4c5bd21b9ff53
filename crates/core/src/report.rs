use crate::{Pool, Side};
use std::io::{self, Write};

pub const CORP_BANNER: &str = "The Shadow: Pulling the Strings";
pub const RUNNER_BANNER: &str = "The Masque: Cyber General";

pub fn banner(side: Side) -> &'static str {
    match side {
        Side::Corp => CORP_BANNER,
        Side::Runner => RUNNER_BANNER,
    }
}

/// Banner first, then `"<title> x<count>"` per title in byte order.
pub fn render(pool: &Pool, side: Side) -> Vec<String> {
    let mut lines = Vec::with_capacity(pool.len() + 1);
    lines.push(banner(side).to_string());
    lines.extend(pool.iter().map(|(title, count)| format!("{title} x{count}")));
    lines
}

pub fn write_report<W: Write>(pool: &Pool, side: Side, out: &mut W) -> io::Result<()> {
    for line in render(pool, side) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Distinct (size, seed) pairs never share a file name.
pub fn pool_file_name(side: Side, size: usize, seed: i64) -> String {
    format!("{}-{size}-{seed}.txt", side.slug())
}
