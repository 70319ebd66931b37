use crate::controllers::ports::page_presenter::PagePresenterPort;
use crate::core::actions::map_palette::{GrayPalette, PaletteError};
use crate::core::data::plot_config::PlotConfig;
use crate::core::data::plot_data::PlotData;
use std::io::Write;

const CELL_SIZE_PX: u32 = 3;

/// Renders plot data as a self-contained HTML page: status line, the
/// shaded grid, axis labels and the zoom form.
///
/// The stylesheet depends only on the configuration, so it is built once
/// at startup and reused for every request, never mutated afterwards.
pub struct HtmlPresenter {
    cols: u32,
    style: String,
}

impl HtmlPresenter {
    pub fn new(config: &PlotConfig) -> Result<Self, PaletteError> {
        let palette = GrayPalette::new(config.shades())?;

        Ok(Self {
            cols: config.grid().cols(),
            style: Self::build_style(config.grid().cols(), &palette),
        })
    }

    fn build_style(cols: u32, palette: &GrayPalette) -> String {
        let mut style = String::new();

        style.push_str("body { font-family: sans-serif; margin: 1em; }\n");
        style.push_str(".status { font-size: 0.9em; }\n");
        style.push_str(&format!(
            ".grid {{ display: grid; grid-template-columns: repeat({}, {}px); border: 1px solid #444; width: fit-content; }}\n",
            cols, CELL_SIZE_PX
        ));
        style.push_str(&format!(
            ".cell {{ width: {}px; height: {}px; }}\n",
            CELL_SIZE_PX, CELL_SIZE_PX
        ));
        style.push_str(
            ".axis { display: flex; justify-content: space-between; font-size: 0.7em; }\n",
        );
        style.push_str(
            ".yaxis { display: flex; flex-direction: column; justify-content: space-between; font-size: 0.7em; text-align: right; margin-right: 0.4em; }\n",
        );
        style.push_str(".plot { display: flex; }\n");
        style.push_str(&format!(
            ".xaxis {{ width: {}px; }}\n",
            cols * CELL_SIZE_PX
        ));

        for bucket in 0..palette.shade_count() {
            let level = palette.gray_level(bucket);
            style.push_str(&format!(
                ".{} {{ background-color: rgb({}, {}, {}); }}\n",
                palette.class_name(bucket),
                level,
                level,
                level
            ));
        }

        style
    }
}

impl PagePresenterPort for HtmlPresenter {
    fn present(&self, plot: &PlotData, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>Mandelbrot Set</title>")?;
        writeln!(out, "<style>\n{}</style>", self.style)?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "<h1>Mandelbrot Set</h1>")?;

        writeln!(out, "<form action=\"/mandelbrot\" method=\"post\">")?;
        for (name, label) in [
            ("xstart", "x start"),
            ("xend", "x end"),
            ("ystart", "y start"),
            ("yend", "y end"),
        ] {
            writeln!(
                out,
                "<label>{}: <input type=\"text\" name=\"{}\" size=\"8\"></label>",
                label, name
            )?;
        }
        writeln!(out, "<input type=\"submit\" value=\"Zoom\">")?;
        writeln!(out, "</form>")?;

        writeln!(out, "<div class=\"plot\">")?;

        // y labels are built ymin..ymax; the top of the grid is ymax
        writeln!(out, "<div class=\"yaxis\">")?;
        for label in plot.ylabels.iter().rev() {
            writeln!(out, "<span>{}</span>", label)?;
        }
        writeln!(out, "</div>")?;

        writeln!(out, "<div>")?;
        writeln!(out, "<div class=\"grid\">")?;
        for (i, class) in plot.grid.iter().enumerate() {
            write!(out, "<div class=\"cell {}\"></div>", class)?;
            if (i + 1) % self.cols as usize == 0 {
                writeln!(out)?;
            }
        }
        writeln!(out, "</div>")?;

        writeln!(out, "<div class=\"axis xaxis\">")?;
        for label in &plot.xlabels {
            writeln!(out, "<span>{}</span>", label)?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;

        writeln!(out, "</div>")?;

        writeln!(out, "<p class=\"status\">{}</p>", plot.status)?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;

        Ok(())
    }
}
