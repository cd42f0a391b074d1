use crate::error::SomnoError;
use crate::extraction::{PageContent, PdfExtractor, RawFragment};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -bbox-layout` and splits every layout line into
/// positioned runs at column gaps, so a table row yields its label and
/// value cells as separate fragments.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(
        &self,
        pdf_bytes: &[u8],
        pages: &[usize],
    ) -> Result<Vec<PageContent>, SomnoError> {
        let (Some(&first), Some(&last)) = (pages.iter().min(), pages.iter().max()) else {
            return Ok(Vec::new());
        };

        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| SomnoError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| SomnoError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-bbox-layout")
            .arg("-f")
            .arg(first.to_string())
            .arg("-l")
            .arg(last.to_string())
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SomnoError::PdftotextNotFound
                } else {
                    SomnoError::Extraction(format!("pdftotext -bbox-layout failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(SomnoError::PdftotextFailed { code, stderr });
        }

        let xml = String::from_utf8_lossy(&output.stdout);
        let decoded = parse_bbox_xml(&xml, first)?;
        tracing::debug!(pages = decoded.len(), "pdftotext decoded pages");

        Ok(decoded
            .into_iter()
            .filter(|p| pages.contains(&p.page_number))
            .collect())
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Word gaps wider than this many line heights start a new run. An
/// ordinary space is about a quarter of an em.
const RUN_GAP_EM: f64 = 0.8;

#[derive(Debug, Clone, Copy)]
struct LineBox {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl LineBox {
    fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

#[derive(Debug)]
struct Word {
    text: String,
    /// Horizontal extent, when pdftotext reported one.
    span: Option<(f64, f64)>,
}

#[derive(Debug)]
struct Run {
    text: String,
    x_min: f64,
    x_max: f64,
}

/// Group a line's words into runs separated by gaps wider than
/// [`RUN_GAP_EM`]. Words without a box continue the current run.
fn split_runs(words: &[Word], line: &LineBox) -> Vec<Run> {
    let max_gap = line.height() * RUN_GAP_EM;
    let mut runs: Vec<Run> = Vec::new();

    for word in words {
        let joins = match (runs.last(), word.span) {
            (Some(run), Some((start, _))) => start - run.x_max <= max_gap,
            (Some(_), None) => true,
            (None, _) => false,
        };

        if let (true, Some(run)) = (joins, runs.last_mut()) {
            run.text.push(' ');
            run.text.push_str(&word.text);
            if let Some((_, end)) = word.span {
                run.x_max = run.x_max.max(end);
            }
            continue;
        }

        let (x_min, x_max) = word.span.unwrap_or((line.x_min, line.x_max));
        runs.push(Run {
            text: word.text.clone(),
            x_min,
            x_max,
        });
    }

    runs
}

/// Parse `pdftotext -bbox-layout` XHTML into per-page fragments.
///
/// pdftotext reports boxes with a top-left origin; baselines are flipped
/// into PDF user space using the page height. Pages without an explicit
/// `number` attribute are numbered from `first_page`.
fn parse_bbox_xml(xml: &str, first_page: usize) -> Result<Vec<PageContent>, SomnoError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    reader.config_mut().check_end_names = false;

    let mut pages: Vec<PageContent> = Vec::new();
    let mut page_height = 0.0;
    let mut line: Option<LineBox> = None;
    let mut words: Vec<Word> = Vec::new();
    let mut span: Option<(f64, f64)> = None;
    let mut in_word = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"page" => {
                    let page_number = attr_usize(&e, "number").unwrap_or(first_page + pages.len());
                    page_height = attr_f64(&e, "height").unwrap_or(0.0);
                    pages.push(PageContent {
                        page_number,
                        fragments: Vec::new(),
                    });
                }
                b"line" => {
                    line = parse_line_box(&e);
                    words.clear();
                }
                b"word" => {
                    in_word = true;
                    span = attr_f64(&e, "xMin").zip(attr_f64(&e, "xMax"));
                }
                _ => {}
            },
            Ok(Event::Text(t)) if in_word => {
                let word = t
                    .unescape()
                    .map_err(|e| SomnoError::Extraction(format!("bad bbox text: {}", e)))?;
                let word = word.trim();
                if !word.is_empty() {
                    words.push(Word {
                        text: word.to_string(),
                        span,
                    });
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"word" => in_word = false,
                b"line" => {
                    if let (Some(b), Some(page)) = (line.take(), pages.last_mut()) {
                        for run in split_runs(&words, &b) {
                            page.fragments.push(RawFragment::at(
                                run.text,
                                run.x_min,
                                page_height - b.y_max,
                                run.x_max - run.x_min,
                                b.height(),
                            ));
                        }
                    }
                    words.clear();
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(SomnoError::Extraction(format!(
                    "malformed pdftotext output at byte {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
    }

    Ok(pages)
}

fn parse_line_box(tag: &BytesStart) -> Option<LineBox> {
    Some(LineBox {
        x_min: attr_f64(tag, "xMin")?,
        y_min: attr_f64(tag, "yMin")?,
        x_max: attr_f64(tag, "xMax")?,
        y_max: attr_f64(tag, "yMax")?,
    })
}

fn attr_str(tag: &BytesStart, name: &str) -> Option<String> {
    let attr = tag.try_get_attribute(name).ok()??;
    attr.unescape_value().ok().map(|v| v.into_owned())
}

fn attr_f64(tag: &BytesStart, name: &str) -> Option<f64> {
    attr_str(tag, name)?.trim().parse().ok()
}

fn attr_usize(tag: &BytesStart, name: &str) -> Option<usize> {
    attr_str(tag, name)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">
<html xmlns="http://www.w3.org/1999/xhtml">
<head>
<title></title>
</head>
<body>
<doc>
  <page width="600.000000" height="800.000000">
    <flow>
      <block xMin="455.0" yMin="88.0" xMax="530.0" yMax="97.0">
        <line xMin="455.0" yMin="88.0" xMax="530.0" yMax="97.0">
          <word xMin="455.0" yMin="88.0" xMax="480.0" yMax="97.0">Patient</word>
          <word xMin="482.0" yMin="88.0" xMax="495.0" yMax="97.0">ID:</word>
          <word xMin="497.0" yMin="88.0" xMax="530.0" yMax="97.0">123455</word>
        </line>
        <line xMin="10.0" yMin="100.0" xMax="60.0" yMax="110.0">
          <word xMin="10.0" yMin="100.0" xMax="60.0" yMax="110.0">A&amp;B</word>
        </line>
      </block>
    </flow>
  </page>
  <page width="600.000000" height="800.000000">
    <flow>
      <block xMin="10.0" yMin="20.0" xMax="60.0" yMax="30.0">
        <line xMin="10.0" yMin="20.0" xMax="60.0" yMax="30.0">
          <word xMin="10.0" yMin="20.0" xMax="60.0" yMax="30.0">Breaths</word>
        </line>
      </block>
    </flow>
  </page>
</doc>
</body>
</html>
"#;

    #[test]
    fn test_parse_bbox_xml_lines() {
        let pages = parse_bbox_xml(SAMPLE, 1).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[1].page_number, 2);

        let first = &pages[0].fragments[0];
        assert_eq!(first.text, "Patient ID: 123455");
        assert_eq!(first.x(), 455.0);
        assert_eq!(first.y(), 703.0);
        assert_eq!(first.width, 75.0);
        assert_eq!(first.height, 9.0);
    }

    #[test]
    fn test_entities_are_decoded() {
        let pages = parse_bbox_xml(SAMPLE, 1).unwrap();
        assert_eq!(pages[0].fragments[1].text, "A&B");
    }

    #[test]
    fn test_page_numbers_start_at_first_requested() {
        let pages = parse_bbox_xml(SAMPLE, 3).unwrap();
        assert_eq!(pages[0].page_number, 3);
        assert_eq!(pages[1].page_number, 4);
    }

    const DIAGNOSTIC_ROWS: &str = r#"<doc>
  <page width="600.000000" height="800.000000">
    <flow>
      <block xMin="40.0" yMin="140.0" xMax="250.0" yMax="149.0">
        <line xMin="40.0" yMin="140.0" xMax="250.0" yMax="149.0">
          <word xMin="40.0" yMin="140.0" xMax="82.0" yMax="149.0">Recording</word>
          <word xMin="84.5" yMin="140.0" xMax="110.0" yMax="149.0">details</word>
          <word xMin="200.0" yMin="140.0" xMax="250.0" yMax="149.0">25/07/2013</word>
        </line>
      </block>
      <block xMin="40.0" yMin="180.0" xMax="400.0" yMax="189.0">
        <line xMin="40.0" yMin="180.0" xMax="400.0" yMax="189.0">
          <word xMin="40.0" yMin="180.0" xMax="82.0" yMax="189.0">Recording</word>
          <word xMin="130.0" yMin="180.0" xMax="152.0" yMax="189.0">Start:</word>
          <word xMin="175.0" yMin="180.0" xMax="205.0" yMax="189.0">10:27pm</word>
          <word xMin="220.0" yMin="180.0" xMax="236.0" yMax="189.0">End:</word>
          <word xMin="260.0" yMin="180.0" xMax="285.0" yMax="189.0">6:10am</word>
          <word xMin="300.0" yMin="180.0" xMax="335.0" yMax="189.0">Duration</word>
          <word xMin="337.5" yMin="180.0" xMax="340.0" yMax="189.0">-</word>
          <word xMin="342.5" yMin="180.0" xMax="355.0" yMax="189.0">hr:</word>
          <word xMin="380.0" yMin="180.0" xMax="400.0" yMax="189.0">7:42</word>
        </line>
      </block>
      <block xMin="40.0" yMin="220.0" xMax="325.0" yMax="229.0">
        <line xMin="40.0" yMin="220.0" xMax="325.0" yMax="229.0">
          <word xMin="40.0" yMin="220.0" xMax="70.0" yMax="229.0">Events</word>
          <word xMin="72.5" yMin="220.0" xMax="95.0" yMax="229.0">index</word>
          <word xMin="130.0" yMin="220.0" xMax="145.0" yMax="229.0">REI</word>
          <word xMin="147.5" yMin="220.0" xMax="170.0" yMax="229.0">(AHI):</word>
          <word xMin="190.0" yMin="220.0" xMax="205.0" yMax="229.0">34.5</word>
          <word xMin="220.0" yMin="220.0" xMax="232.0" yMax="229.0">AI:</word>
          <word xMin="250.0" yMin="220.0" xMax="265.0" yMax="229.0">16.9</word>
          <word xMin="280.0" yMin="220.0" xMax="290.0" yMax="229.0">HI:</word>
          <word xMin="310.0" yMin="220.0" xMax="325.0" yMax="229.0">17.6</word>
        </line>
      </block>
    </flow>
  </page>
</doc>"#;

    #[test]
    fn test_line_splits_at_column_gaps() {
        let pages = parse_bbox_xml(DIAGNOSTIC_ROWS, 1).unwrap();
        let texts: Vec<&str> = pages[0].fragments.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(
            &texts[2..9],
            &["Recording", "Start:", "10:27pm", "End:", "6:10am", "Duration - hr:", "7:42"]
        );

        let duration = &pages[0].fragments[7];
        assert_eq!(duration.x(), 300.0);
        assert_eq!(duration.width, 55.0);
        assert_eq!(duration.y(), 611.0);
        assert!(pages[0].fragments[2..9].iter().all(|f| f.y() == 611.0));
    }

    #[test]
    fn test_bbox_rows_feed_diagnostic_schema() {
        use crate::model::{ExtractOptions, ReportKind};

        let pages = parse_bbox_xml(DIAGNOSTIC_ROWS, 1).unwrap();
        let outcome =
            crate::extract_pages(&pages, ReportKind::Diagnostic, &ExtractOptions::default());
        let result = outcome.result().expect("recording details present");

        assert_eq!(result.value("0008"), Some("25/07/2013"));
        assert_eq!(result.value("0100"), Some("10:27pm"));
        assert_eq!(result.value("0101"), Some("6:10am"));
        assert_eq!(result.value("0102"), Some("07:42"));
        assert_eq!(result.value("0401"), Some("34.5"));
        assert_eq!(result.value("0402"), Some("16.9"));
        assert_eq!(result.value("0403"), Some("17.6"));
    }

    #[test]
    fn test_explicit_page_number_wins() {
        let xml = r#"<doc><page number="7" height="100"><line xMin="1" yMin="10" xMax="5" yMax="20"><word>x</word></line></page></doc>"#;
        let pages = parse_bbox_xml(xml, 1).unwrap();
        assert_eq!(pages[0].page_number, 7);
        assert_eq!(pages[0].fragments[0].y(), 80.0);
    }
}
