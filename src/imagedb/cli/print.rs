use colored::Colorize;
use imagedb::api::MessageLevel;
use imagedb::commands::{CmdMessage, CmdResult};
use imagedb::media::format_file_size;
use imagedb::model::{Draft, ImageRecord};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 15;
const SIZE_WIDTH: usize = 11;
const TIME_WIDTH: usize = 20;
const EMPTY_STATE: &str = "No images saved yet. Upload and save some images to see them here!";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_error(error: impl std::fmt::Display) {
    println!("{} {}", "Error:".red().bold(), error);
}

pub(super) fn print_images(result: &CmdResult) {
    println!("{}", format!("Saved Images ({})", result.total).bold());

    if result.total == 0 {
        println!("{}", EMPTY_STATE.dimmed());
        return;
    }
    if result.listed_images.is_empty() {
        println!("{}", "No images match.".dimmed());
        return;
    }

    for record in &result.listed_images {
        println!("{}", image_row(record));
    }
}

fn image_row(record: &ImageRecord) -> String {
    let id = format!("{:<width$}", record.id, width = ID_WIDTH);
    let size = format!("{:>width$}", format_file_size(record.size), width = SIZE_WIDTH);
    let time = format!("{:>width$}", record.upload_timestamp, width = TIME_WIDTH);
    let tags = if record.tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", record.tags.join(", "))
    };

    let fixed_width = ID_WIDTH + SIZE_WIDTH + TIME_WIDTH + 2;
    let available = LINE_WIDTH.saturating_sub(fixed_width);
    let name_tags = truncate_to_width(&format!("{}{}", record.name, tags), available);
    let padding = available.saturating_sub(name_tags.width());

    // Color after truncation so escape codes never count toward the width.
    let (name_part, tag_part) = if name_tags.starts_with(record.name.as_str()) {
        name_tags.split_at(record.name.len())
    } else {
        (name_tags.as_str(), "")
    };

    format!(
        "{}{}{}{} {} {}",
        id.yellow(),
        name_part.bold(),
        tag_part.cyan(),
        " ".repeat(padding),
        size,
        time.dimmed()
    )
}

pub(super) fn print_preview(record: &ImageRecord) {
    println!("{} {}", record.id.to_string().yellow(), record.name.bold());
    println!("--------------------------------");
    println!("Upload Date: {}", record.upload_timestamp);
    println!("Size: {}", format_file_size(record.size));
    println!("Type: {}", record.media_type);
    if !record.tags.is_empty() {
        println!("Tags: {}", record.tags.join(", "));
    }
    println!("Source: {}", truncate_to_width(&record.content, 60).dimmed());
}

pub(super) fn print_draft(draft: &Draft, name: &str, tags: &str) {
    println!(
        "Staged {} (Size: {} | Type: {})",
        draft.path.display().to_string().bold(),
        format_file_size(draft.size),
        draft.media_type
    );
    println!("  name: {}", name);
    if !tags.is_empty() {
        println!("  tags: {}", tags);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
