mod bullet_list;

use std::io::Write;

use anyhow::Result;
use flexi_logger::{DeferredNow, Logger, Record};
use textwrap::{termwidth, Options};

pub use self::bullet_list::BulletList;

/// Start console logging for the bootstrap and render loop.
///
/// The level defaults to info and can be adjusted with RUST_LOG. Vulkan
/// validation messages arrive through the same sink once the debug
/// messenger is installed, so their multiline payloads get the same
/// wrapping treatment as everything else.
pub fn setup() -> Result<()> {
    Logger::try_with_env_or_str("info")?
        .format(wrapped_format)
        .start()?;
    Ok(())
}

/// Put the record's metadata on its own line and wrap the message body to
/// the terminal width. Validation layer messages can run to hundreds of
/// columns without this.
fn wrapped_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let width = termwidth().clamp(40, 100);
    let indent = Options::new(width)
        .initial_indent("  ")
        .subsequent_indent("  ");
    writeln!(
        w,
        "{} {} [{}:{}]\n{}",
        record.level(),
        now.now().format("%T%.3f"),
        record.file().unwrap_or("<unknown>"),
        record.line().unwrap_or(0),
        textwrap::fill(&record.args().to_string(), indent),
    )
}

#[cfg(test)]
mod test {
    use super::*;

    fn render(args: std::fmt::Arguments) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        let record = log::Record::builder()
            .args(args)
            .level(log::Level::Info)
            .file(Some("render_device.rs"))
            .line(Some(42))
            .build();
        wrapped_format(&mut buffer, &mut DeferredNow::new(), &record)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn the_metadata_line_names_the_level_and_source() {
        let text = render(format_args!("swapchain built"));
        let header = text.lines().next().unwrap();
        assert!(header.starts_with("INFO "));
        assert!(header.ends_with("[render_device.rs:42]"));
    }

    #[test]
    fn the_message_body_is_indented_under_the_metadata() {
        let long_message = "the adapter reports no presentation support \
                            for any queue family, so the negotiation is \
                            going to reject it and move on to the next \
                            adapter in enumeration order";
        let text = render(format_args!("{}", long_message));
        let body: Vec<&str> = text.lines().skip(1).collect();
        assert!(body.len() > 1);
        assert!(body.iter().all(|line| line.starts_with("  ")));
    }
}
