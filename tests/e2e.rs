//! End-to-end batch tests for doc2md.
//!
//! Fixtures are generated on the fly inside a `tempfile` scratch
//! directory: spreadsheets with `rust_xlsxwriter`, Word documents with
//! `docx-rs`, CSV/text as plain bytes, and a minimal hand-assembled PDF
//! for the scanned-document path. No network, no checked-in binaries.

use doc2md::{convert_batch, BatchProgressCallback, ConversionConfig, Doc2MdError, FileError};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// ── Fixture helpers ──────────────────────────────────────────────────────────

fn scratch() -> (tempfile::TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("input");
    let output = dir.path().join("output");
    std::fs::create_dir_all(&input).expect("mkdir input");
    (dir, input, output)
}

fn write_workbook(path: &Path, sheets: &[(&str, &[&[&str]])]) {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    for (name, rows) in sheets {
        let ws = workbook.add_worksheet();
        ws.set_name(*name).expect("sheet name");
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                ws.write_string(r as u32, c as u16, *cell).expect("write cell");
            }
        }
    }
    workbook.save(path).expect("save workbook");
}

fn write_docx(path: &Path, paragraphs: &[&str]) {
    let file = std::fs::File::create(path).expect("create docx");
    let mut doc = docx_rs::Docx::new();
    for text in paragraphs {
        doc = doc.add_paragraph(
            docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text(*text)),
        );
    }
    doc.build().pack(file).expect("pack docx");
}

/// Hand-assemble a minimal valid PDF whose pages have no content
/// streams — i.e. no text layer at all, like a scanned document.
#[cfg(feature = "pdf")]
fn write_textless_pdf(path: &Path, page_count: usize) {
    let mut objects: Vec<String> = Vec::new();
    let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", i + 3)).collect();
    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids.join(" "),
        page_count
    ));
    for _ in 0..page_count {
        objects.push(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << >> >>".to_string(),
        );
    }

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
    }
    let xref_offset = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    pdf.push_str("0000000000 65535 f \n");
    for offset in &offsets {
        pdf.push_str(&format!("{offset:010} 00000 n \n"));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_offset
    ));
    std::fs::write(path, pdf).expect("write pdf");
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

// ── Spreadsheet layout rules ─────────────────────────────────────────────────

#[test]
fn single_sheet_workbook_writes_one_file_not_a_subdirectory() {
    let (_dir, input, output) = scratch();
    write_workbook(
        &input.join("Sales Q1.xlsx"),
        &[("Sheet1", &[&["A", "B"][..], &["1", "2"][..]][..])],
    );

    let summary = convert_batch(&input, &output, &ConversionConfig::default()).unwrap();
    assert_eq!(summary.converted, 1);

    let out_file = output.join("Sales_Q1.md");
    assert!(out_file.is_file(), "expected {}", out_file.display());
    assert!(
        !output.join("Sales_Q1").exists(),
        "single-sheet workbook must not create a subdirectory"
    );

    let content = read(&out_file);
    assert!(content.starts_with("# Sales Q1.xlsx\n\n"));
    assert!(content.contains("| A | B |"));
    assert!(content.contains("| 1 | 2 |"));
}

#[test]
fn multi_sheet_workbook_writes_one_file_per_sheet_in_a_subdirectory() {
    let (_dir, input, output) = scratch();
    write_workbook(
        &input.join("book.xlsx"),
        &[
            ("Revenue 2024", &[&["X"][..], &["1"][..]][..]),
            ("Costs (EUR)", &[&["Y"][..], &["2"][..]][..]),
        ],
    );

    let summary = convert_batch(&input, &output, &ConversionConfig::default()).unwrap();
    assert_eq!(summary.converted, 1);

    let book_dir = output.join("book");
    assert!(book_dir.is_dir());
    let first = book_dir.join("Revenue_2024.md");
    // "Costs (EUR)": the "(" run becomes one underscore and the space
    // another, so the slug carries a double underscore.
    let second = book_dir.join("Costs__EUR.md");
    assert!(first.is_file(), "expected {}", first.display());
    assert!(second.is_file(), "expected {}", second.display());
    assert_eq!(summary.files[0].written.len(), 2);

    // Sheet names are used verbatim as titles, sanitized only in paths.
    assert!(read(&first).starts_with("# Revenue 2024\n"));
    assert!(read(&second).starts_with("# Costs (EUR)\n"));
}

#[test]
fn empty_sheet_renders_empty_table_placeholder() {
    let (_dir, input, output) = scratch();
    write_workbook(&input.join("blank.xlsx"), &[("Sheet1", &[][..])]);

    convert_batch(&input, &output, &ConversionConfig::default()).unwrap();
    let content = read(&output.join("blank.md"));
    assert_eq!(content, "# blank.xlsx\n\n_(Empty table)_\n");
}

// ── Word documents ───────────────────────────────────────────────────────────

#[test]
fn docx_paragraphs_join_with_blank_lines() {
    let (_dir, input, output) = scratch();
    write_docx(&input.join("memo.docx"), &["First para.", "Second para."]);

    convert_batch(&input, &output, &ConversionConfig::default()).unwrap();
    let content = read(&output.join("memo.md"));
    assert_eq!(content, "# memo.docx\n\nFirst para.\n\nSecond para.\n");
}

#[test]
fn docx_without_content_gets_empty_document_placeholder() {
    let (_dir, input, output) = scratch();
    write_docx(&input.join("blank.docx"), &[]);

    convert_batch(&input, &output, &ConversionConfig::default()).unwrap();
    let content = read(&output.join("blank.md"));
    assert_eq!(content, "# blank.docx\n\n_(Empty document)_\n");
}

// ── PDFs ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "pdf")]
#[test]
fn textless_pdf_gets_scanned_placeholder_and_no_page_headers() {
    let (_dir, input, output) = scratch();
    write_textless_pdf(&input.join("scan.pdf"), 3);

    let summary = convert_batch(&input, &output, &ConversionConfig::default()).unwrap();
    assert_eq!(summary.converted, 1, "failures: {:?}", summary.files);

    let content = read(&output.join("scan.md"));
    assert!(content.contains(
        "_(No extractable text found. This PDF may be scanned; OCR is not enabled.)_"
    ));
    assert!(!content.contains("## Page"));
}

// ── Batch behaviour ──────────────────────────────────────────────────────────

#[test]
fn batch_of_three_with_one_failure_reports_two_converted() {
    let (_dir, input, output) = scratch();
    std::fs::write(input.join("a.txt"), "alpha").unwrap();
    std::fs::write(input.join("b.csv"), "A,B\n1,2\n").unwrap();
    std::fs::write(input.join("c.xlsx"), "definitely not a workbook").unwrap();

    struct Counting {
        ok: AtomicUsize,
        fail: AtomicUsize,
    }
    impl BatchProgressCallback for Counting {
        fn on_file_complete(&self, _input: &Path, _written: &[PathBuf]) {
            self.ok.fetch_add(1, Ordering::SeqCst);
        }
        fn on_file_error(&self, _input: &Path, _error: &FileError) {
            self.fail.fetch_add(1, Ordering::SeqCst);
        }
    }
    let counter = Arc::new(Counting {
        ok: AtomicUsize::new(0),
        fail: AtomicUsize::new(0),
    });

    let config = ConversionConfig::builder()
        .progress_callback(counter.clone())
        .build()
        .unwrap();
    let summary = convert_batch(&input, &output, &config).unwrap();

    assert_eq!(summary.converted, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(counter.ok.load(Ordering::SeqCst), 2);
    assert_eq!(counter.fail.load(Ordering::SeqCst), 1);
    assert!(output.join("a.md").is_file());
    assert!(output.join("b.md").is_file());
    assert!(!output.join("c.md").exists());
}

#[test]
fn missing_input_directory_is_fatal_before_any_output() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let output = dir.path().join("output");

    let err = convert_batch(&missing, &output, &ConversionConfig::default()).unwrap_err();
    assert!(matches!(err, Doc2MdError::InputDirNotFound { .. }));
    assert!(!output.exists());
}

#[test]
fn files_are_processed_in_sorted_order() {
    let (_dir, input, output) = scratch();
    std::fs::create_dir_all(input.join("nested")).unwrap();
    std::fs::write(input.join("zz.txt"), "z").unwrap();
    std::fs::write(input.join("aa.txt"), "a").unwrap();
    std::fs::write(input.join("nested/mm.txt"), "m").unwrap();

    let summary = convert_batch(&input, &output, &ConversionConfig::default()).unwrap();
    let order: Vec<String> = summary
        .files
        .iter()
        .map(|f| {
            f.input
                .strip_prefix(&input)
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    assert_eq!(order, vec!["aa.txt", "nested/mm.txt", "zz.txt"]);
}

#[test]
fn reruns_overwrite_existing_output() {
    let (_dir, input, output) = scratch();
    let source = input.join("doc.txt");

    std::fs::write(&source, "version one").unwrap();
    convert_batch(&input, &output, &ConversionConfig::default()).unwrap();
    std::fs::write(&source, "version two").unwrap();
    convert_batch(&input, &output, &ConversionConfig::default()).unwrap();

    let content = read(&output.join("doc.md"));
    assert!(content.contains("version two"));
    assert!(!content.contains("version one"));
}

#[test]
fn text_with_invalid_utf8_still_converts() {
    let (_dir, input, output) = scratch();
    std::fs::write(input.join("legacy.txt"), b"caf\xe9").unwrap();

    let summary = convert_batch(&input, &output, &ConversionConfig::default()).unwrap();
    assert_eq!(summary.converted, 1);
    assert!(read(&output.join("legacy.md")).contains("caf\u{FFFD}"));
}

#[test]
fn batch_report_serialises_to_json() {
    let (_dir, input, output) = scratch();
    std::fs::write(input.join("a.txt"), "alpha").unwrap();
    std::fs::write(input.join("bad.docx"), "not a docx").unwrap();

    let summary = convert_batch(&input, &output, &ConversionConfig::default()).unwrap();
    let json = serde_json::to_string_pretty(&summary).unwrap();
    assert!(json.contains("\"converted\": 1"));
    assert!(json.contains("\"failed\": 1"));
    assert!(json.contains("a.txt"));
}
