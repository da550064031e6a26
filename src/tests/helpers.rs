use rust_xlsxwriter::Workbook;

/// One cell of a generated test workbook.
#[derive(Debug, Clone)]
pub enum TestCell {
    Num(f64),
    Str(&'static str),
    Bool(bool),
    Blank,
}

// Helper function: writes rows (header first) into the first sheet of an .xlsx
pub fn xlsx_bytes(rows: &[Vec<TestCell>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let (r, c) = (r as u32, c as u16);
            match cell {
                TestCell::Num(v) => {
                    sheet.write_number(r, c, *v).unwrap();
                }
                TestCell::Str(s) => {
                    sheet.write_string(r, c, *s).unwrap();
                }
                TestCell::Bool(b) => {
                    sheet.write_boolean(r, c, *b).unwrap();
                }
                TestCell::Blank => {}
            }
        }
    }

    workbook.save_to_buffer().unwrap()
}

/// Columns `Value` (1..=5), `Label` (text only) and `Mixed` (number,
/// numeric text, boolean, junk text and a blank).
pub fn sample_workbook() -> Vec<u8> {
    use TestCell::*;

    xlsx_bytes(&[
        vec![Str("Value"), Str("Label"), Str("Mixed")],
        vec![Num(1.0), Str("a"), Str("abc")],
        vec![Num(2.0), Str("b"), Num(4.0)],
        vec![Num(3.0), Str("c"), Str(" 5 ")],
        vec![Num(4.0), Str("d"), Bool(true)],
        vec![Num(5.0), Str("e"), Blank],
    ])
}

pub const BOUNDARY: &str = "normcurve-test-boundary";

pub struct Part {
    pub name: &'static str,
    pub filename: Option<&'static str>,
    pub content: Vec<u8>,
}

impl Part {
    pub fn text(name: &'static str, value: &str) -> Self {
        Self {
            name,
            filename: None,
            content: value.as_bytes().to_vec(),
        }
    }

    pub fn file(name: &'static str, filename: &'static str, content: Vec<u8>) -> Self {
        Self {
            name,
            filename: Some(filename),
            content,
        }
    }
}

// Helper function: encodes parts as a multipart/form-data body using BOUNDARY
pub fn multipart_body(parts: &[Part]) -> Vec<u8> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part.filename {
            Some(filename) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                        part.name, filename
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(b"Content-Type: application/octet-stream\r\n");
            }
            None => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n", part.name).as_bytes(),
                );
            }
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(&part.content);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

pub fn relative_error(computed: f64, expected: f64) -> f64 {
    if expected == 0.0 {
        computed.abs()
    } else {
        ((computed - expected) / expected).abs()
    }
}
