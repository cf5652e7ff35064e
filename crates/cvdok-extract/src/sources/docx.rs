//! Text extraction from DOCX files
//!
//! A DOCX file is a ZIP archive whose main content lives in
//! `word/document.xml`. The extractor streams that part with quick-xml and
//! collects one line per paragraph; table rows are flattened to their cell
//! texts joined with `" | "` so tabular resume sections stay readable.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::read::ZipArchive;

use crate::error::{ExtractError, Result};

/// Extract plain text from an in-memory DOCX file
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut document_xml = Vec::new();
    match archive.by_name("word/document.xml") {
        Ok(mut file) => {
            file.read_to_end(&mut document_xml)?;
        }
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(ExtractError::MissingPart("word/document.xml".to_string()));
        }
        Err(e) => return Err(e.into()),
    }

    extract_from_document_xml(&document_xml)
}

/// Walk the document XML and collect paragraph and table text
fn extract_from_document_xml(xml: &[u8]) -> Result<String> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut lines: Vec<String> = Vec::new();
    let mut table_depth: usize = 0;
    let mut paragraph = String::new();
    let mut row_cells: Vec<String> = Vec::new();
    let mut cell = String::new();

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"tbl" => table_depth += 1,
                b"tr" if table_depth > 0 => row_cells.clear(),
                b"tc" if table_depth > 0 => cell.clear(),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                // Breaks and tabs become plain spaces
                b"br" | b"tab" | b"cr" => {
                    if table_depth > 0 {
                        cell.push(' ');
                    } else {
                        paragraph.push(' ');
                    }
                }
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                if let Ok(text) = e.unescape() {
                    if table_depth > 0 {
                        cell.push_str(&text);
                    } else {
                        paragraph.push_str(&text);
                    }
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    if table_depth > 0 {
                        // Separate paragraphs within one cell
                        if !cell.is_empty() && !cell.ends_with(' ') {
                            cell.push(' ');
                        }
                    } else {
                        let text = paragraph.trim();
                        if !text.is_empty() {
                            lines.push(text.to_string());
                        }
                        paragraph.clear();
                    }
                }
                b"tc" if table_depth > 0 => {
                    let text = cell.trim();
                    if !text.is_empty() {
                        row_cells.push(text.to_string());
                    }
                }
                b"tr" if table_depth > 0 => {
                    if !row_cells.is_empty() {
                        lines.push(row_cells.join(" | "));
                        row_cells.clear();
                    }
                }
                b"tbl" => table_depth = table_depth.saturating_sub(1),
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(lines.join("\n"))
}
