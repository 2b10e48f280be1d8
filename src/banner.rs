//! Startup banner rendered as FIGlet ASCII art.

use crate::error::BannerError;
use crossterm::style::{Color, Stylize};
use figlet_rs::FIGfont;

/// Title rendered at startup.
pub const BANNER_TITLE: &str = "S3GeN Chat";

/// Render `title` with the bundled standard FIGlet font.
pub fn render_banner(title: &str) -> Result<String, BannerError> {
    let font = FIGfont::standard().map_err(BannerError::Font)?;
    let figure = font
        .convert(title)
        .ok_or_else(|| BannerError::Render(title.to_string()))?;
    Ok(figure.to_string())
}

/// Render and print the startup banner followed by build metadata.
///
/// Nothing is printed on failure; the caller decides whether startup continues.
pub fn print_banner(color: bool, metadata: &str) -> Result<(), BannerError> {
    let art = render_banner(BANNER_TITLE)?;
    if color {
        println!("{}", art.as_str().with(Color::Cyan).bold());
        println!("{}", metadata.with(Color::DarkGrey));
    } else {
        println!("{art}");
        println!("{metadata}");
    }
    Ok(())
}
