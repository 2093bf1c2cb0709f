use printpdf::*;
use std::fs::File;
use std::io::BufWriter;

use crate::message::TripRequest;

const LINE_CHARS: usize = 95;

/// Render a produced itinerary to a PDF under `public/reports` and return
/// the relative URL it will be served from.
pub async fn generate_pdf_report(
    report_id: &str,
    trip: &TripRequest,
    itinerary: &str,
) -> std::io::Result<String> {
    let dir = "public/reports";
    tokio::fs::create_dir_all(dir).await?;

    let file_path = format!("{}/{}.pdf", dir, report_id);
    let relative_path = format!("/reports/{}.pdf", report_id);

    // Clone data to move into the blocking thread
    let trip = trip.clone();
    let itinerary = itinerary.to_string();
    let file_path_clone = file_path.clone();

    // Run PDF generation in a blocking task (CPU intensive)
    tokio::task::spawn_blocking(move || -> std::io::Result<()> {
        let (doc, page1, layer1) =
            PdfDocument::new("Travel Itinerary", Mm(210.0), Mm(297.0), "Layer 1");
        let mut layer = doc.get_page(page1).get_layer(layer1);

        // Use built-in fonts (no external file needed)
        let font = doc.add_builtin_font(BuiltinFont::Helvetica).unwrap();
        let font_bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).unwrap();

        let mut y = 270.0;
        layer.use_text(
            format!("Travel Itinerary: {}", trip.location),
            20.0,
            Mm(20.0),
            Mm(y),
            &font_bold,
        );
        y -= 14.0;

        let fields = vec![
            ("Destination", trip.location.clone()),
            ("Duration", format!("{} days", trip.duration)),
            ("Budget", trip.budget.to_string()),
            ("Accommodation", trip.accommodation.to_string()),
        ];
        for (label, value) in fields {
            layer.use_text(label, 11.0, Mm(20.0), Mm(y), &font_bold);
            layer.use_text(value, 11.0, Mm(70.0), Mm(y), &font);
            y -= 8.0;
        }
        y -= 4.0;

        for line in wrap_lines(&itinerary, LINE_CHARS) {
            if y < 20.0 {
                let (page, layer_index) = doc.add_page(Mm(210.0), Mm(297.0), "Layer 1");
                layer = doc.get_page(page).get_layer(layer_index);
                y = 277.0;
            }
            layer.use_text(line, 10.0, Mm(20.0), Mm(y), &font);
            y -= 5.5;
        }

        let file = File::create(file_path_clone)?;
        let mut writer = BufWriter::new(file);
        doc.save(&mut writer)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, format!("{e:?}")))
    })
    .await
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))??;

    Ok(relative_path)
}

/// Wrap text for the PDF body. Builtin fonts only cover WinAnsi, so non-ascii
/// markdown decoration is dropped; blank lines survive as paragraph spacing.
fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in text.lines() {
        let clean: String = raw.chars().filter(|c| c.is_ascii()).collect();
        let mut current = String::new();
        for word in clean.split_whitespace() {
            if !current.is_empty() && current.len() + word.len() + 1 > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }
    lines
}
