/// Everything the page renderer needs, already reduced to plain strings.
///
/// `grid` is a row-major flat sequence of shade class names, `rows * cols`
/// long, with row 0 at the top of the plot. `ylabels` run from ymin to
/// ymax; presenters reverse them for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotData {
    pub status: String,
    pub grid: Vec<String>,
    pub xlabels: Vec<String>,
    pub ylabels: Vec<String>,
}
