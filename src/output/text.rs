use std::io::Write;
use crate::args::Config;
use crate::concordance::{Block, Concordance, Window};
use crate::error::Result;
use crate::highlight::display_token;

pub fn write_concordance(config: &Config, writer: &mut dyn Write, concordance: &Concordance) -> Result<()> {
    for block in &concordance.blocks {
        output_block_text(config, writer, block)?;
    }
    Ok(())
}

// Preview line, a blank line, then one line per window
fn output_block_text(config: &Config, output: &mut dyn Write, block: &Block) -> Result<()> {
    writeln!(output, "{}", block.preview.join(" "))?;
    writeln!(output)?;
    for window in &block.windows {
        writeln!(output, "{}", window_text(window, config.options.color))?;
    }
    Ok(())
}

pub fn window_text(window: &Window, color: bool) -> String {
    window.tokens.iter()
        .map(|token| display_token(&token.text, token.matched, color))
        .collect::<Vec<String>>()
        .join(" ")
}
