use chrono::Utc;
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use crate::domain::PortfolioDocument;

// US letter, in millimeters. `printpdf` measures in f32.
const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;
const MARGIN: f32 = 18.0;
const HEADER_Y: f32 = PAGE_HEIGHT - 15.0;
const FOOTER_Y: f32 = 10.0;
const CONTENT_TOP: f32 = PAGE_HEIGHT - 30.0;
const CONTENT_BOTTOM: f32 = 20.0;
const BODY_WRAP_CHARS: usize = 90;

#[derive(thiserror::Error, Debug)]
#[error("failed to render the portfolio document: {0}")]
pub struct RenderError(String);

/// The fixed section structure of the portfolio document. Assembly is kept
/// separate from drawing so the structure can be inspected without parsing
/// PDF bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Title(String),
    MetadataTable(Vec<(String, String)>),
    Heading(String),
    BodyText(String),
    BulletList(Vec<String>),
}

/// Assembles the document sections in their fixed order: title block,
/// metadata table, overview, feature list, technology list.
pub fn sections(document: &PortfolioDocument) -> Vec<Section> {
    vec![
        Section::Title("Portfolio Details".to_string()),
        Section::MetadataTable(vec![
            ("Project Type:".to_string(), document.project_type.clone()),
            ("Date:".to_string(), document.date.clone()),
            ("Client:".to_string(), document.client.clone()),
            ("Website:".to_string(), document.website.clone()),
        ]),
        Section::Title(document.title.clone()),
        Section::Heading("Project Overview".to_string()),
        Section::BodyText(document.overview.clone()),
        Section::Heading("Key Features".to_string()),
        Section::BulletList(document.features.clone()),
        Section::Heading("Technology Stack".to_string()),
        Section::BodyText(document.tech_stack.join(", ")),
    ]
}

/// Renders the portfolio document to PDF bytes. Pure function of its input
/// apart from the generation date stamped in the footer.
pub fn render_portfolio(document: &PortfolioDocument) -> Result<Vec<u8>, RenderError> {
    let mut renderer = Renderer::new()?;

    for section in sections(document) {
        match section {
            Section::Title(text) => {
                renderer.gap(6.0);
                renderer.line(&text, 22.0, true, 0.0);
                renderer.gap(4.0);
            }
            Section::MetadataTable(rows) => {
                for (label, value) in &rows {
                    renderer.metadata_row(label, value);
                }
                renderer.gap(6.0);
            }
            Section::Heading(text) => {
                renderer.gap(3.0);
                renderer.line(&text, 15.0, true, 0.0);
                renderer.gap(2.0);
            }
            Section::BodyText(text) => {
                for wrapped in wrap(&text, BODY_WRAP_CHARS) {
                    renderer.line(&wrapped, 11.0, false, 0.0);
                }
                renderer.gap(3.0);
            }
            Section::BulletList(items) => {
                for item in &items {
                    renderer.line(&format!("- {}", item), 10.0, false, 6.0);
                }
                renderer.gap(3.0);
            }
        }
    }

    renderer.finish()
}

/// Greedy word wrap on character count. Helvetica is not monospaced, but at
/// body sizes a character limit keeps lines comfortably inside the margins.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

struct Renderer {
    document: PdfDocumentReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    layer: PdfLayerReference,
    // Baseline of the next line, measured from the bottom of the page.
    cursor: f32,
    page_number: usize,
    generated_on: String,
}

impl Renderer {
    fn new() -> Result<Self, RenderError> {
        let (document, page, layer) = PdfDocument::new(
            "BizzPulse Portfolio",
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "content",
        );
        let regular = document
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError(e.to_string()))?;
        let bold = document
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError(e.to_string()))?;
        let layer = document.get_page(page).get_layer(layer);
        let generated_on = Utc::now().format("%B %d, %Y").to_string();

        let renderer = Self {
            document,
            regular,
            bold,
            layer,
            cursor: CONTENT_TOP,
            page_number: 1,
            generated_on,
        };
        renderer.draw_chrome();
        Ok(renderer)
    }

    /// Header and footer drawn on every page.
    fn draw_chrome(&self) {
        self.layer.use_text(
            "BizzPulse Portfolio",
            12.0,
            Mm(MARGIN),
            Mm(HEADER_Y),
            &self.bold,
        );
        self.layer.use_text(
            format!("Generated on {}", self.generated_on),
            9.0,
            Mm(MARGIN),
            Mm(FOOTER_Y),
            &self.regular,
        );
        self.layer.use_text(
            format!("Page {}", self.page_number),
            9.0,
            Mm(PAGE_WIDTH - MARGIN - 15.0),
            Mm(FOOTER_Y),
            &self.regular,
        );
    }

    fn advance(&mut self, line_height: f32) {
        if self.cursor - line_height < CONTENT_BOTTOM {
            let (page, layer) =
                self.document
                    .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
            self.layer = self.document.get_page(page).get_layer(layer);
            self.page_number += 1;
            self.cursor = CONTENT_TOP;
            self.draw_chrome();
        }
        self.cursor -= line_height;
    }

    fn line(&mut self, text: &str, size_pt: f32, bold: bool, indent: f32) {
        // ~1.3 line spacing, converted from points to millimeters.
        self.advance(size_pt * 0.46);
        let font = if bold { &self.bold } else { &self.regular };
        self.layer
            .use_text(text, size_pt, Mm(MARGIN + indent), Mm(self.cursor), font);
    }

    fn metadata_row(&mut self, label: &str, value: &str) {
        self.advance(6.0);
        self.layer
            .use_text(label, 10.0, Mm(MARGIN), Mm(self.cursor), &self.bold);
        self.layer
            .use_text(value, 10.0, Mm(MARGIN + 40.0), Mm(self.cursor), &self.regular);
    }

    fn gap(&mut self, height: f32) {
        self.cursor -= height;
    }

    fn finish(self) -> Result<Vec<u8>, RenderError> {
        self.document
            .save_to_bytes()
            .map_err(|e| RenderError(e.to_string()))
    }
}
